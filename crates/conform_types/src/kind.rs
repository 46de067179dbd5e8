//! The closed set of type-expression kinds.

use std::fmt;

use conform_ir::{ClassRef, Container, RecordDef, TypeExpr, Value};

/// Container origin of a generic, after tuple forms are told apart.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Origin {
    /// `list[T]`
    List,
    /// `set[T]`
    Set,
    /// `dict[K, V]`
    Mapping,
    /// `tuple[A, B, ...]`, one argument per position.
    FixedTuple,
    /// `tuple[T, ...]`, exactly one argument.
    VariadicTuple,
}

impl Origin {
    /// Short name for messages.
    pub fn name(self) -> &'static str {
        match self {
            Origin::List => "list",
            Origin::Set => "set",
            Origin::Mapping => "mapping",
            Origin::FixedTuple => "tuple",
            Origin::VariadicTuple => "variadic tuple",
        }
    }
}

/// Why an expression has no conformance meaning.
#[derive(Clone, Debug, PartialEq)]
pub enum Unresolved<'a> {
    /// A type variable, bound or not.
    TypeVar(&'a str),
    /// A name that never resolved to a type.
    Forward(&'a str),
    /// A plain value used as a type.
    NotAType(&'a Value),
    /// `...` outside the tail of `tuple[T, ...]`.
    MisplacedEllipsis,
    /// `Union[]` with no members.
    EmptyUnion,
    /// `Literal[]` with no values.
    EmptyLiteral,
    /// A `Literal[...]` member that is not a scalar.
    NonScalarLiteral(&'a Value),
    /// A container given an argument count it does not take.
    Arity {
        container: Container,
        found: usize,
    },
}

impl fmt::Display for Unresolved<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unresolved::TypeVar(name) => write!(f, "type variable `{name}`"),
            Unresolved::Forward(name) => write!(f, "unresolved name `{name}`"),
            Unresolved::NotAType(value) => write!(f, "value `{value}` is not a type"),
            Unresolved::MisplacedEllipsis => f.write_str("`...` outside `tuple[T, ...]`"),
            Unresolved::EmptyUnion => f.write_str("union with no members"),
            Unresolved::EmptyLiteral => f.write_str("literal with no values"),
            Unresolved::NonScalarLiteral(value) => {
                write!(f, "literal member `{value}` is not a scalar")
            }
            Unresolved::Arity { container, found } => {
                write!(f, "`{}` does not take {found} type arguments", container.name())
            }
        }
    }
}

/// One classified type expression, borrowing its parts.
///
/// Arity is already validated: `List`/`Set` carry zero or one argument,
/// `Mapping` zero or two, `VariadicTuple` exactly one, `FixedTuple` any
/// number (zero meaning a bare `tuple`).
#[derive(Clone, Debug, PartialEq)]
pub enum TypeKind<'a> {
    Any,
    PlainClass(&'a ClassRef),
    Union(&'a [TypeExpr]),
    Literal(&'a [Value]),
    Generic {
        origin: Origin,
        args: &'a [TypeExpr],
    },
    RecordSchema(&'a RecordDef),
    OptionalField(&'a TypeExpr),
    Unresolvable(Unresolved<'a>),
}

impl TypeKind<'_> {
    /// Kind name, as used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            TypeKind::Any => "Any",
            TypeKind::PlainClass(_) => "class",
            TypeKind::Union(_) => "Union",
            TypeKind::Literal(_) => "Literal",
            TypeKind::Generic { origin, .. } => origin.name(),
            TypeKind::RecordSchema(_) => "RecordSchema",
            TypeKind::OptionalField(_) => "OptionalField",
            TypeKind::Unresolvable(_) => "unresolvable",
        }
    }
}
