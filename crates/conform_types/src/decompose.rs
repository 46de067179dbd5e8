//! Classifying a type expression into its kind.

use conform_ir::{Container, TypeExpr};

use crate::{Origin, TypeKind, Unresolved};

/// Classify `expr` into exactly one [`TypeKind`].
///
/// Never fails: anything without conformance meaning comes back as
/// [`TypeKind::Unresolvable`] with the reason attached.
pub fn decompose(expr: &TypeExpr) -> TypeKind<'_> {
    match expr {
        TypeExpr::Any => TypeKind::Any,
        TypeExpr::Class(class) => TypeKind::PlainClass(class),
        TypeExpr::Union(members) if members.is_empty() => {
            TypeKind::Unresolvable(Unresolved::EmptyUnion)
        }
        TypeExpr::Union(members) => TypeKind::Union(members),
        TypeExpr::Literal(values) => {
            if values.is_empty() {
                TypeKind::Unresolvable(Unresolved::EmptyLiteral)
            } else if let Some(bad) = values.iter().find(|v| !v.is_scalar()) {
                TypeKind::Unresolvable(Unresolved::NonScalarLiteral(bad))
            } else {
                TypeKind::Literal(values)
            }
        }
        TypeExpr::Generic { container, args } => decompose_generic(*container, args),
        TypeExpr::Ellipsis => TypeKind::Unresolvable(Unresolved::MisplacedEllipsis),
        TypeExpr::Record(def) => TypeKind::RecordSchema(def),
        TypeExpr::OptionalField(inner) => TypeKind::OptionalField(inner),
        TypeExpr::TypeVar(name) => TypeKind::Unresolvable(Unresolved::TypeVar(name)),
        TypeExpr::Forward(name) => TypeKind::Unresolvable(Unresolved::Forward(name)),
        TypeExpr::Value(value) => TypeKind::Unresolvable(Unresolved::NotAType(value)),
    }
}

fn decompose_generic(container: Container, args: &[TypeExpr]) -> TypeKind<'_> {
    let arity_error = || {
        TypeKind::Unresolvable(Unresolved::Arity {
            container,
            found: args.len(),
        })
    };

    match container {
        Container::List | Container::Set if args.len() > 1 => arity_error(),
        Container::Dict if args.len() == 1 || args.len() > 2 => arity_error(),
        _ if container != Container::Tuple && args.iter().any(is_ellipsis) => {
            TypeKind::Unresolvable(Unresolved::MisplacedEllipsis)
        }
        Container::List => TypeKind::Generic {
            origin: Origin::List,
            args,
        },
        Container::Set => TypeKind::Generic {
            origin: Origin::Set,
            args,
        },
        Container::Dict => TypeKind::Generic {
            origin: Origin::Mapping,
            args,
        },
        Container::Tuple => match args {
            [elem, TypeExpr::Ellipsis] if !is_ellipsis(elem) => TypeKind::Generic {
                origin: Origin::VariadicTuple,
                args: std::slice::from_ref(elem),
            },
            _ if args.iter().any(is_ellipsis) => {
                TypeKind::Unresolvable(Unresolved::MisplacedEllipsis)
            }
            _ => TypeKind::Generic {
                origin: Origin::FixedTuple,
                args,
            },
        },
    }
}

fn is_ellipsis(expr: &TypeExpr) -> bool {
    matches!(expr, TypeExpr::Ellipsis)
}
