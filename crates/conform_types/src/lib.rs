//! Classification of type expressions.
//!
//! A [`TypeExpr`](conform_ir::TypeExpr) is whatever the caller built. Before
//! anything can be checked against it, [`decompose`] sorts it into exactly
//! one [`TypeKind`]: the closed set of forms the checker understands, plus
//! [`TypeKind::Unresolvable`] for everything else. Decomposition is pure and
//! borrows from the expression, so it is cheap to repeat at every level of a
//! recursive check.
//!
//! Two extractors sit on top of the same classification:
//!
//! - [`literal_values`]: the value set of a `Literal[...]` type
//! - [`schema_of`]: the field map of a record schema
//!
//! Both fail with [`InvalidArgument`] when handed any other kind.

mod decompose;
mod error;
mod extract;
mod kind;

pub use decompose::decompose;
pub use error::InvalidArgument;
pub use extract::{literal_values, schema_of};
pub use kind::{Origin, TypeKind, Unresolved};
