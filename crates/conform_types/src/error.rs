//! Extractor errors.

/// An extractor was handed a type expression of the wrong kind.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Expected {expected} type, found {found}")]
pub struct InvalidArgument {
    /// Kind the extractor requires.
    pub expected: &'static str,
    /// Kind the expression decomposed to.
    pub found: &'static str,
}
