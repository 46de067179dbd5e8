//! Extracting the contents of literal and record types.

use conform_ir::{FxIndexMap, TypeExpr, Value};
use rustc_hash::FxHashSet;

use crate::{decompose, InvalidArgument, TypeKind};

/// The deduplicated value set of a `Literal[...]` type.
///
/// Members keep their own types: `Literal['a', 1, True]` yields three
/// distinct values and nothing is coerced. Iteration order is unspecified.
pub fn literal_values(expr: &TypeExpr) -> Result<FxHashSet<Value>, InvalidArgument> {
    match decompose(expr) {
        TypeKind::Literal(values) => Ok(values.iter().cloned().collect()),
        other => Err(InvalidArgument {
            expected: "Literal",
            found: other.describe(),
        }),
    }
}

/// The field map of a record schema, exactly as declared.
///
/// `OptionalField` wrappers are left in place so callers can tell required
/// fields from optional ones. Fields come back in declaration order.
pub fn schema_of(expr: &TypeExpr) -> Result<FxIndexMap<String, TypeExpr>, InvalidArgument> {
    match decompose(expr) {
        TypeKind::RecordSchema(def) => Ok(def.fields().clone()),
        other => Err(InvalidArgument {
            expected: "RecordSchema",
            found: other.describe(),
        }),
    }
}
