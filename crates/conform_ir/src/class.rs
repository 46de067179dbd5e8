//! Classes and the native instance-of test.
//!
//! A [`ClassRef`] is either one of the builtin classes or a user class with
//! a name, base classes, and optionally a protocol declaration. User classes
//! compare by identity: two separately declared classes named `Point` are
//! different classes.
//!
//! [`ClassRef::instance_check`] is the one place a class reference can refuse
//! to answer. Protocols that are not runtime-checkable reject instance checks
//! with [`InstanceCheckError`]; callers decide whether that is fatal.

use std::fmt;
use std::hash::{Hash, Hasher};

use conform_stack::ensure_sufficient_stack;

use crate::{Heap, Value};

/// Builtin classes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// Root of every hierarchy; every value is an `object`.
    Object,
    /// Class of `None`.
    NoneType,
    Bool,
    Int,
    Float,
    Str,
    Bytes,
    List,
    Tuple,
    Set,
    Dict,
}

impl Builtin {
    /// All builtin classes.
    pub const ALL: [Builtin; 11] = [
        Builtin::Object,
        Builtin::NoneType,
        Builtin::Bool,
        Builtin::Int,
        Builtin::Float,
        Builtin::Str,
        Builtin::Bytes,
        Builtin::List,
        Builtin::Tuple,
        Builtin::Set,
        Builtin::Dict,
    ];

    /// The class name as written in type text.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Object => "object",
            Builtin::NoneType => "NoneType",
            Builtin::Bool => "bool",
            Builtin::Int => "int",
            Builtin::Float => "float",
            Builtin::Str => "str",
            Builtin::Bytes => "bytes",
            Builtin::List => "list",
            Builtin::Tuple => "tuple",
            Builtin::Set => "set",
            Builtin::Dict => "dict",
        }
    }

    /// Look up a builtin class by name.
    pub fn from_name(name: &str) -> Option<Builtin> {
        Builtin::ALL.into_iter().find(|b| b.name() == name)
    }

    /// Direct superclass. `bool` derives from `int`; everything else from
    /// `object`, which has none.
    fn base(self) -> Option<Builtin> {
        match self {
            Builtin::Object => None,
            Builtin::Bool => Some(Builtin::Int),
            _ => Some(Builtin::Object),
        }
    }

    fn is_subclass_of(self, other: Builtin) -> bool {
        let mut current = Some(self);
        while let Some(class) = current {
            if class == other {
                return true;
            }
            current = class.base();
        }
        false
    }

    /// The builtin class a plain value belongs to. Instances have none.
    fn of(value: &Value) -> Option<Builtin> {
        Some(match value {
            Value::None => Builtin::NoneType,
            Value::Bool(_) => Builtin::Bool,
            Value::Int(_) => Builtin::Int,
            Value::Float(_) => Builtin::Float,
            Value::Str(_) => Builtin::Str,
            Value::Bytes(_) => Builtin::Bytes,
            Value::List(_) => Builtin::List,
            Value::Tuple(_) => Builtin::Tuple,
            Value::Set(_) => Builtin::Set,
            Value::Map(_) => Builtin::Dict,
            Value::Instance(_) => return None,
        })
    }
}

/// Protocol declaration attached to a user class.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Protocol {
    members: Vec<String>,
    runtime_checkable: bool,
}

/// A user-declared class.
#[derive(Debug, PartialEq, Eq)]
pub struct ClassDef {
    name: String,
    bases: Vec<ClassRef>,
    protocol: Option<Protocol>,
}

/// Reference to a class.
#[derive(Clone)]
pub enum ClassRef {
    Builtin(Builtin),
    User(Heap<ClassDef>),
}

/// An instance-of test the class itself refuses to perform.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InstanceCheckError {
    /// Protocols must opt in to instance checks.
    #[error("instance checks against protocol `{class}` are not supported; it is not runtime-checkable")]
    NotRuntimeCheckable { class: String },
}

impl ClassRef {
    /// Declare a nominal class deriving from `bases`.
    pub fn class(name: impl Into<String>, bases: impl IntoIterator<Item = ClassRef>) -> Self {
        ClassRef::User(Heap::new(ClassDef {
            name: name.into(),
            bases: bases.into_iter().collect(),
            protocol: None,
        }))
    }

    /// Declare a protocol with the given member names.
    ///
    /// A runtime-checkable protocol admits any instance whose attributes
    /// cover every member. Any other protocol refuses instance checks.
    pub fn protocol<M: Into<String>>(
        name: impl Into<String>,
        members: impl IntoIterator<Item = M>,
        runtime_checkable: bool,
    ) -> Self {
        ClassRef::User(Heap::new(ClassDef {
            name: name.into(),
            bases: Vec::new(),
            protocol: Some(Protocol {
                members: members.into_iter().map(Into::into).collect(),
                runtime_checkable,
            }),
        }))
    }

    /// The class name.
    pub fn name(&self) -> &str {
        match self {
            ClassRef::Builtin(b) => b.name(),
            ClassRef::User(def) => &def.name,
        }
    }

    /// Declared base classes. Builtins report none.
    pub fn bases(&self) -> &[ClassRef] {
        match self {
            ClassRef::Builtin(_) => &[],
            ClassRef::User(def) => &def.bases,
        }
    }

    /// Whether this class is a protocol.
    pub fn is_protocol(&self) -> bool {
        matches!(self, ClassRef::User(def) if def.protocol.is_some())
    }

    /// Nominal subclass test. Every class is a subclass of itself and of
    /// `object`.
    pub fn is_subclass_of(&self, other: &ClassRef) -> bool {
        if matches!(other, ClassRef::Builtin(Builtin::Object)) || self == other {
            return true;
        }
        match self {
            ClassRef::Builtin(b) => match other {
                ClassRef::Builtin(o) => b.is_subclass_of(*o),
                ClassRef::User(_) => false,
            },
            ClassRef::User(def) => {
                ensure_sufficient_stack(|| def.bases.iter().any(|base| base.is_subclass_of(other)))
            }
        }
    }

    /// The native instance-of test.
    ///
    /// Builtins admit their own values (`bool` values are also `int`s) and
    /// instances of user classes deriving from them. Nominal user classes
    /// admit instances of themselves and their subclasses. Runtime-checkable
    /// protocols also admit instances that carry every protocol member.
    pub fn instance_check(&self, value: &Value) -> Result<bool, InstanceCheckError> {
        if let Some(inst) = value.as_instance() {
            if let ClassRef::User(def) = self {
                if let Some(protocol) = &def.protocol {
                    if !protocol.runtime_checkable {
                        return Err(InstanceCheckError::NotRuntimeCheckable {
                            class: def.name.clone(),
                        });
                    }
                    return Ok(inst.class().is_subclass_of(self)
                        || protocol.members.iter().all(|m| inst.has_attr(m)));
                }
            }
            return Ok(inst.class().is_subclass_of(self));
        }

        match self {
            ClassRef::Builtin(class) => {
                Ok(Builtin::of(value).is_some_and(|own| own.is_subclass_of(*class)))
            }
            ClassRef::User(def) => match &def.protocol {
                Some(protocol) if !protocol.runtime_checkable => {
                    Err(InstanceCheckError::NotRuntimeCheckable {
                        class: def.name.clone(),
                    })
                }
                // Plain values carry no attributes, so only a member-less
                // protocol can admit them.
                Some(protocol) => Ok(protocol.members.is_empty()),
                None => Ok(false),
            },
        }
    }
}

impl From<Builtin> for ClassRef {
    fn from(b: Builtin) -> Self {
        ClassRef::Builtin(b)
    }
}

impl PartialEq for ClassRef {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ClassRef::Builtin(a), ClassRef::Builtin(b)) => a == b,
            (ClassRef::User(a), ClassRef::User(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for ClassRef {}

impl Hash for ClassRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            ClassRef::Builtin(b) => b.hash(state),
            ClassRef::User(def) => def.hash_ptr(state),
        }
    }
}

impl fmt::Debug for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<class '{}'>", self.name())
    }
}

impl fmt::Display for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
