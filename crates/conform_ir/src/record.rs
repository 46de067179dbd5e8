//! Structural record declarations.

use crate::{FxIndexMap, TypeExpr};

/// A structural record: a mapping type whose keys are known in advance.
///
/// Fields keep declaration order. A field is optional when its type is
/// wrapped in [`TypeExpr::OptionalField`], or when the record is declared
/// non-total; every other field is required.
///
/// ```text
/// let server = RecordDef::new("Server")
///     .field("host", TypeExpr::str())
///     .optional_field("port", TypeExpr::int());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordDef {
    name: String,
    fields: FxIndexMap<String, TypeExpr>,
    total: bool,
}

impl RecordDef {
    /// Start an empty, total record.
    pub fn new(name: impl Into<String>) -> Self {
        RecordDef {
            name: name.into(),
            fields: FxIndexMap::default(),
            total: true,
        }
    }

    /// Declare a field. Redeclaring a name replaces its type in place.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, ty: TypeExpr) -> Self {
        self.fields.insert(name.into(), ty);
        self
    }

    /// Declare a field wrapped in `OptionalField`.
    #[must_use]
    pub fn optional_field(self, name: impl Into<String>, ty: TypeExpr) -> Self {
        self.field(name, TypeExpr::optional_field(ty))
    }

    /// Make every field optional.
    #[must_use]
    pub fn non_total(mut self) -> Self {
        self.total = false;
        self
    }

    /// The record's declared name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields as declared, in declaration order.
    pub fn fields(&self) -> &FxIndexMap<String, TypeExpr> {
        &self.fields
    }

    /// Whether fields are required unless wrapped.
    pub fn is_total(&self) -> bool {
        self.total
    }

    /// Whether `field` is declared and must be present.
    pub fn is_required(&self, field: &str) -> bool {
        self.fields
            .get(field)
            .is_some_and(|ty| self.total && !ty.is_optional_field())
    }

    /// Names of required fields, in declaration order.
    pub fn required_keys(&self) -> impl Iterator<Item = &str> {
        self.fields
            .keys()
            .map(String::as_str)
            .filter(|name| self.is_required(name))
    }

    /// Names of optional fields, in declaration order.
    pub fn optional_keys(&self) -> impl Iterator<Item = &str> {
        self.fields
            .keys()
            .map(String::as_str)
            .filter(|name| !self.is_required(name))
    }
}
