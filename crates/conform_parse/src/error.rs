//! Parse errors.

use crate::Span;

/// Failure to read type text. Every variant carries the offending span.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Text the lexer does not recognize, or a number out of range.
    #[error("invalid token at {span}")]
    InvalidToken { span: Span },

    /// A quoted literal with an unknown or malformed escape.
    #[error("invalid escape in quoted literal at {span}")]
    BadEscape { span: Span },

    #[error("expected {expected}, found {found} at {span}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        span: Span,
    },

    #[error("expected {expected}, found end of input at {span}")]
    UnexpectedEof { expected: &'static str, span: Span },

    /// A bare name that is neither builtin nor registered.
    #[error("unknown type name `{name}` at {span}")]
    UnknownName { name: String, span: Span },

    /// Subscript on a name that takes no type arguments.
    #[error("`{name}` does not take type arguments at {span}")]
    NotGeneric { name: String, span: Span },

    /// A special form used without its required arguments.
    #[error("`{name}` takes {expected} at {span}")]
    WrongArgumentCount {
        name: String,
        expected: &'static str,
        span: Span,
    },

    /// A `Literal[...]` argument that is not a literal value.
    #[error("`{found}` is not a literal value at {span}")]
    BadLiteral { found: String, span: Span },

    /// Input left over after a complete type.
    #[error("unexpected {found} after type at {span}")]
    TrailingInput { found: String, span: Span },
}

impl ParseError {
    /// Location of the error in the source.
    pub fn span(&self) -> Span {
        match self {
            ParseError::InvalidToken { span }
            | ParseError::BadEscape { span }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::UnexpectedEof { span, .. }
            | ParseError::UnknownName { span, .. }
            | ParseError::NotGeneric { span, .. }
            | ParseError::WrongArgumentCount { span, .. }
            | ParseError::BadLiteral { span, .. }
            | ParseError::TrailingInput { span, .. } => *span,
        }
    }
}
