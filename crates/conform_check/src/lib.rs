//! Conformance matching.
//!
//! [`matches`] decides whether a [`Value`](conform_ir::Value) plausibly has
//! the shape a [`TypeExpr`](conform_ir::TypeExpr) describes. The answer is
//! always a `bool`: expressions that mean nothing decompose as unresolvable
//! and match nothing, and an instance check the class refuses to perform is
//! logged and counted as a mismatch.
//!
//! A [`Checker`] carries a [`CheckConfig`]. It holds no other state, so one
//! checker can be shared across threads.

mod checker;
mod config;

pub use checker::{matches, Checker};
pub use config::{CheckConfig, RecordPolicy};
