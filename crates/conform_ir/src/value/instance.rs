//! Class instances.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::unordered_digest;
use crate::{ClassRef, FxIndexMap, Heap, Value};

/// An object of a class, with its attributes in definition order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstanceValue {
    class: ClassRef,
    attrs: Heap<FxIndexMap<String, Value>>,
}

impl InstanceValue {
    pub(crate) fn new(class: ClassRef, attrs: FxIndexMap<String, Value>) -> Self {
        InstanceValue {
            class,
            attrs: Heap::new(attrs),
        }
    }

    /// The class this object was created from.
    #[inline]
    pub fn class(&self) -> &ClassRef {
        &self.class
    }

    /// Whether the attribute is present.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }
}

impl Hash for InstanceValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.class.hash(state);
        self.attrs.len().hash(state);
        unordered_digest(self.attrs.iter()).hash(state);
    }
}

impl fmt::Display for InstanceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.class.name())?;
        for (i, (name, value)) in self.attrs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        f.write_str(")")
    }
}
