//! The recursive conformance matcher.

use conform_ir::{RecordDef, TypeExpr, Value};
use conform_stack::ensure_sufficient_stack;
use conform_types::{decompose, Origin, TypeKind};

use crate::{CheckConfig, RecordPolicy};

/// Decides value-against-expression conformance under a fixed config.
#[derive(Clone, Debug, Default)]
pub struct Checker {
    config: CheckConfig,
}

impl Checker {
    pub fn new(config: CheckConfig) -> Self {
        Checker { config }
    }

    /// Whether `value` conforms to `expr`.
    ///
    /// Never fails. Unresolvable expressions and refused instance checks
    /// both count as a mismatch.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(value = value.type_name(), kind = decompose(expr).describe())
    )]
    pub fn matches(&self, value: &Value, expr: &TypeExpr) -> bool {
        ensure_sufficient_stack(|| self.matches_kind(value, decompose(expr)))
    }

    fn matches_kind(&self, value: &Value, kind: TypeKind<'_>) -> bool {
        match kind {
            TypeKind::Any => true,
            TypeKind::OptionalField(inner) => self.matches(value, inner),
            TypeKind::Literal(values) => values.contains(value),
            TypeKind::Union(members) => members.iter().any(|m| self.matches(value, m)),
            TypeKind::Generic { origin, args } => self.matches_generic(value, origin, args),
            TypeKind::RecordSchema(def) => self.matches_record(value, def),
            TypeKind::PlainClass(class) => match class.instance_check(value) {
                Ok(admitted) => admitted,
                Err(err) => {
                    tracing::debug!(%err, "instance check refused; treating as no match");
                    false
                }
            },
            TypeKind::Unresolvable(reason) => {
                tracing::debug!(%reason, "unresolvable type expression; treating as no match");
                false
            }
        }
    }

    fn matches_generic(&self, value: &Value, origin: Origin, args: &[TypeExpr]) -> bool {
        match origin {
            Origin::FixedTuple => value.as_tuple().is_some_and(|items| {
                // A bare `tuple` only checks the kind.
                args.is_empty()
                    || (items.len() == args.len()
                        && items.iter().zip(args).all(|(v, t)| self.matches(v, t)))
            }),
            Origin::VariadicTuple => value
                .as_tuple()
                .is_some_and(|items| self.all_match(items.iter(), args)),
            Origin::List => value
                .as_list()
                .is_some_and(|items| self.all_match(items.iter(), args)),
            Origin::Set => value
                .as_set()
                .is_some_and(|items| self.all_match(items.iter(), args)),
            Origin::Mapping => value.as_map().is_some_and(|map| match args {
                [key, val] => map
                    .iter()
                    .all(|(k, v)| self.matches(k, key) && self.matches(v, val)),
                _ => true,
            }),
        }
    }

    /// Every item matches the single element type, if there is one.
    fn all_match<'v>(&self, mut items: impl Iterator<Item = &'v Value>, args: &[TypeExpr]) -> bool {
        match args {
            [elem] => items.all(|item| self.matches(item, elem)),
            _ => true,
        }
    }

    fn matches_record(&self, value: &Value, def: &RecordDef) -> bool {
        let Some(map) = value.as_map() else {
            return false;
        };
        match self.config.record_policy {
            RecordPolicy::Permissive => true,
            RecordPolicy::Strict => def.fields().iter().all(|(name, ty)| {
                match map.get(&Value::string(name.as_str())) {
                    Some(field) => self.matches(field, ty),
                    None => !def.is_required(name),
                }
            }),
        }
    }
}

/// Whether `value` conforms to `expr` under the default config.
pub fn matches(value: &Value, expr: &TypeExpr) -> bool {
    Checker::default().matches(value, expr)
}
