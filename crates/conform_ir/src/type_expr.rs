//! Type expressions as callers build them.
//!
//! `TypeExpr` preserves what the caller wrote, before classification. That
//! includes forms with no conformance meaning of their own:
//!
//! - `...` anywhere other than the tail of a two-argument `tuple[T, ...]`
//! - containers given the wrong number of arguments (`list[int, str]`)
//! - type variables and unresolved forward references
//! - a plain value sitting where a type was expected
//!
//! `conform_types::decompose` classifies these as unresolvable. Nothing here
//! rejects them, so every caller-built expression can be handed to the
//! checker.
//!
//! # Display
//!
//! `Display` renders the same surface syntax `conform_parse` reads:
//! `dict[str, list[int | None]]`, `Literal['a', 1]`, `tuple[int, ...]`,
//! `NotRequired[int]`. Records and type variables render by name.
//! Non-finite floats render as `inf`, `-inf` and `nan`.
//!
//! A value in type position prints as the value. `Value::None` and
//! `Value::Str` are the exceptions to reading back: their text (`None`,
//! `'x'`) parses as a type.

use std::fmt;

use conform_stack::ensure_sufficient_stack;

use crate::value::write_quoted;
use crate::{Builtin, ClassRef, Heap, RecordDef, Value};

/// Container kinds that take type arguments.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Container {
    /// `list[T]`
    List,
    /// `set[T]`
    Set,
    /// `dict[K, V]`
    Dict,
    /// `tuple[A, B]` or `tuple[T, ...]`
    Tuple,
}

impl Container {
    /// Name as written in type text.
    pub fn name(self) -> &'static str {
        match self {
            Container::List => "list",
            Container::Set => "set",
            Container::Dict => "dict",
            Container::Tuple => "tuple",
        }
    }
}

/// A type expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeExpr {
    /// Matches everything.
    Any,
    /// A builtin or user class.
    Class(ClassRef),
    /// Sum type; members kept in the order written.
    Union(Vec<TypeExpr>),
    /// Finite set of acceptable values.
    Literal(Vec<Value>),
    /// Parameterized (or bare, with no args) container.
    Generic {
        container: Container,
        args: Vec<TypeExpr>,
    },
    /// The `...` marker of a variadic tuple.
    Ellipsis,
    /// Structural record schema.
    Record(Heap<RecordDef>),
    /// Marks a record field as not required.
    OptionalField(Box<TypeExpr>),
    /// A type variable (`T`).
    TypeVar(String),
    /// A name that was never resolved to a type.
    Forward(String),
    /// A value supplied where a type was expected.
    Value(Value),
}

impl TypeExpr {
    /// The `Any` marker.
    #[inline]
    pub fn any() -> Self {
        TypeExpr::Any
    }

    /// A class reference.
    #[inline]
    pub fn class(class: impl Into<ClassRef>) -> Self {
        TypeExpr::Class(class.into())
    }

    /// `int`
    #[inline]
    pub fn int() -> Self {
        TypeExpr::class(Builtin::Int)
    }

    /// `float`
    #[inline]
    pub fn float() -> Self {
        TypeExpr::class(Builtin::Float)
    }

    /// `bool`
    #[inline]
    pub fn bool() -> Self {
        TypeExpr::class(Builtin::Bool)
    }

    /// `str`
    #[inline]
    pub fn str() -> Self {
        TypeExpr::class(Builtin::Str)
    }

    /// `bytes`
    #[inline]
    pub fn bytes() -> Self {
        TypeExpr::class(Builtin::Bytes)
    }

    /// `None`, the class of the `None` value.
    #[inline]
    pub fn none() -> Self {
        TypeExpr::class(Builtin::NoneType)
    }

    /// `object`
    #[inline]
    pub fn object() -> Self {
        TypeExpr::class(Builtin::Object)
    }

    /// Union of `members`, in order.
    #[inline]
    pub fn union(members: Vec<TypeExpr>) -> Self {
        TypeExpr::Union(members)
    }

    /// `inner | None`
    pub fn optional(inner: TypeExpr) -> Self {
        TypeExpr::Union(vec![inner, TypeExpr::none()])
    }

    /// `Literal[...]` over the given values.
    pub fn literal<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        TypeExpr::Literal(values.into_iter().map(Into::into).collect())
    }

    /// A container with explicit arguments, as written.
    #[inline]
    pub fn generic(container: Container, args: Vec<TypeExpr>) -> Self {
        TypeExpr::Generic { container, args }
    }

    /// A container with no arguments (`list`, `dict`, ...).
    #[inline]
    pub fn bare(container: Container) -> Self {
        TypeExpr::generic(container, Vec::new())
    }

    /// `list[elem]`
    pub fn list(elem: TypeExpr) -> Self {
        TypeExpr::generic(Container::List, vec![elem])
    }

    /// `set[elem]`
    pub fn set(elem: TypeExpr) -> Self {
        TypeExpr::generic(Container::Set, vec![elem])
    }

    /// `dict[key, value]`
    pub fn dict(key: TypeExpr, value: TypeExpr) -> Self {
        TypeExpr::generic(Container::Dict, vec![key, value])
    }

    /// Fixed tuple `tuple[A, B, ...]` with one entry per position.
    pub fn tuple(elems: Vec<TypeExpr>) -> Self {
        TypeExpr::generic(Container::Tuple, elems)
    }

    /// Variadic tuple `tuple[elem, ...]`.
    pub fn variadic_tuple(elem: TypeExpr) -> Self {
        TypeExpr::generic(Container::Tuple, vec![elem, TypeExpr::Ellipsis])
    }

    /// A structural record schema.
    pub fn record(def: RecordDef) -> Self {
        TypeExpr::Record(Heap::new(def))
    }

    /// `NotRequired[inner]`
    pub fn optional_field(inner: TypeExpr) -> Self {
        TypeExpr::OptionalField(Box::new(inner))
    }

    /// A type variable.
    pub fn type_var(name: impl Into<String>) -> Self {
        TypeExpr::TypeVar(name.into())
    }

    /// An unresolved name.
    pub fn forward(name: impl Into<String>) -> Self {
        TypeExpr::Forward(name.into())
    }

    /// A plain value in type position.
    pub fn value(value: impl Into<Value>) -> Self {
        TypeExpr::Value(value.into())
    }

    /// Check for the `Any` marker.
    #[inline]
    pub fn is_any(&self) -> bool {
        matches!(self, TypeExpr::Any)
    }

    /// Check for the optional-field wrapper.
    #[inline]
    pub fn is_optional_field(&self) -> bool {
        matches!(self, TypeExpr::OptionalField(_))
    }
}

impl From<ClassRef> for TypeExpr {
    fn from(class: ClassRef) -> Self {
        TypeExpr::Class(class)
    }
}

impl From<Builtin> for TypeExpr {
    fn from(b: Builtin) -> Self {
        TypeExpr::class(b)
    }
}

impl From<RecordDef> for TypeExpr {
    fn from(def: RecordDef) -> Self {
        TypeExpr::record(def)
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            TypeExpr::Any => f.write_str("Any"),
            TypeExpr::Class(ClassRef::Builtin(Builtin::NoneType)) => f.write_str("None"),
            TypeExpr::Class(class) => f.write_str(class.name()),
            // `a | b` only when it reads back as the same flat union.
            TypeExpr::Union(members)
                if members.len() >= 2 && !members.iter().any(|m| matches!(m, TypeExpr::Union(_))) =>
            {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{member}")?;
                }
                Ok(())
            }
            TypeExpr::Union(members) => {
                f.write_str("Union[")?;
                write_list(f, members)?;
                f.write_str("]")
            }
            TypeExpr::Literal(values) => {
                f.write_str("Literal[")?;
                write_list(f, values)?;
                f.write_str("]")
            }
            TypeExpr::Generic { container, args } if args.is_empty() => {
                f.write_str(container.name())
            }
            TypeExpr::Generic { container, args } => {
                write!(f, "{}[", container.name())?;
                write_list(f, args)?;
                f.write_str("]")
            }
            TypeExpr::Ellipsis => f.write_str("..."),
            TypeExpr::Record(def) => f.write_str(def.name()),
            TypeExpr::OptionalField(inner) => write!(f, "NotRequired[{inner}]"),
            TypeExpr::TypeVar(name) => f.write_str(name),
            TypeExpr::Forward(name) => write_quoted(f, name),
            TypeExpr::Value(value) => write!(f, "{value}"),
        })
    }
}
