//! Type expressions from text.
//!
//! [`parse_type`] reads the surface syntax used in configuration schemas:
//!
//! ```text
//! dict[str, list[int | None]]
//! Literal['debug', 'info', 'warn']
//! tuple[int, ...]
//! NotRequired[Port]
//! ```
//!
//! Builtin names are always available. Everything else (user classes,
//! record schemas, aliases, type variables) comes from a [`TypeEnv`]. Errors
//! carry the byte [`Span`] of the offending text.

mod cursor;
mod env;
mod error;
mod lexer;
mod parser;
mod span;

pub use env::TypeEnv;
pub use error::ParseError;
pub use lexer::{lex, Token, TokenKind};
pub use parser::parse_type;
pub use span::Span;
