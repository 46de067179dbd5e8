//! Names the parser can resolve beyond the builtins.

use conform_ir::{ClassRef, RecordDef, TypeExpr};
use rustc_hash::FxHashMap;

/// Registered classes, records, aliases, and type variables.
///
/// Builtin names (`int`, `list`, `Optional`, ...) are resolved before the
/// environment is consulted and cannot be shadowed. Defining a name twice
/// replaces the earlier entry.
#[derive(Clone, Debug, Default)]
pub struct TypeEnv {
    names: FxHashMap<String, TypeExpr>,
}

impl TypeEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class under its own name.
    pub fn define_class(&mut self, class: ClassRef) -> &mut Self {
        self.names
            .insert(class.name().to_string(), TypeExpr::class(class));
        self
    }

    /// Register a record schema under its own name.
    pub fn define_record(&mut self, def: RecordDef) -> &mut Self {
        self.names.insert(def.name().to_string(), TypeExpr::record(def));
        self
    }

    /// Register a type variable.
    pub fn define_type_var(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        self.names.insert(name.clone(), TypeExpr::TypeVar(name));
        self
    }

    /// Register `name` as shorthand for `expr`.
    pub fn define_alias(&mut self, name: impl Into<String>, expr: TypeExpr) -> &mut Self {
        self.names.insert(name.into(), expr);
        self
    }

    pub fn get(&self, name: &str) -> Option<&TypeExpr> {
        self.names.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
