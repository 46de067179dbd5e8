//! Core data for the conformance checker.
//!
//! This crate holds the two sides of every conformance question:
//!
//! - [`Value`]: the runtime value under test (scalars, containers, class
//!   instances). Heap payloads are shared through [`Heap`] and never mutated.
//! - [`TypeExpr`]: the type expression as the caller built it. It is a raw
//!   form: type variables, forward references, misplaced `...`, and plain
//!   values in type position are all representable. `conform_types` decides
//!   which of them mean something.
//!
//! Classes ([`ClassRef`]) carry their own native instance-of test, and
//! structural records ([`RecordDef`]) carry their field declarations.

mod class;
mod heap;
mod record;
mod type_expr;
mod value;

pub use class::{Builtin, ClassDef, ClassRef, InstanceCheckError};
pub use heap::Heap;
pub use record::RecordDef;
pub use type_expr::{Container, TypeExpr};
pub use value::{InstanceValue, Value};

/// Insertion-ordered map using the Fx hasher.
pub type FxIndexMap<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;

/// Insertion-ordered set using the Fx hasher.
pub type FxIndexSet<T> = indexmap::IndexSet<T, rustc_hash::FxBuildHasher>;
