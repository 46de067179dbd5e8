//! Runtime values tested for conformance.
//!
//! # Heap Enforcement
//!
//! Heap payloads can only be built through the factory methods on `Value`
//! (`Value::string`, `Value::list`, `Value::map`, ...). `Heap::new` is crate
//! private, so every container shares its storage through `Arc` and is never
//! mutated after construction.
//!
//! ```text
//! let cfg = Value::map([(Value::string("port"), Value::Int(8080))]);  // OK
//! let bad = Value::List(Heap::new(vec![]));                            // ERROR: Heap::new is private
//! ```
//!
//! # Equality
//!
//! `PartialEq` is value equality: same variant, equal contents. There is no
//! cross-variant numeric equality, so `Int(1) != Float(1.0)` and
//! `Int(1) != Bool(true)`. Maps and sets compare without regard to insertion
//! order, and hash consistently with that.
//!
//! Floats compare by bit pattern after folding `-0.0` into `0.0` and every
//! NaN into one canonical NaN. Equality stays reflexive, so `nan` can be a
//! literal member like any other scalar.

mod instance;

use std::fmt;
use std::hash::{Hash, Hasher};

use conform_stack::ensure_sufficient_stack;
use rustc_hash::FxHasher;

use crate::{ClassRef, FxIndexMap, FxIndexSet, Heap};

pub use instance::InstanceValue;

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    // Scalars (inline)
    /// The `None` singleton.
    None,
    /// Boolean.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit float.
    Float(f64),

    // Heap scalars
    /// UTF-8 string.
    Str(Heap<String>),
    /// Byte string.
    Bytes(Heap<Vec<u8>>),

    // Containers
    /// Mutable-sequence shaped value (`list`).
    List(Heap<Vec<Value>>),
    /// Fixed ordered sequence (`tuple`).
    Tuple(Heap<Vec<Value>>),
    /// Deduplicated collection (`set`), kept in insertion order.
    Set(Heap<FxIndexSet<Value>>),
    /// Mapping with arbitrary value keys (`dict`), kept in insertion order.
    Map(Heap<FxIndexMap<Value, Value>>),

    /// Object of a class, with named attributes.
    Instance(InstanceValue),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a byte-string value.
    #[inline]
    pub fn bytes(b: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(Heap::new(b.into()))
    }

    /// Create a list value.
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Create a tuple value.
    #[inline]
    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(Heap::new(items))
    }

    /// Create a set value. Duplicate items collapse to the first occurrence.
    pub fn set(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Set(Heap::new(items.into_iter().collect()))
    }

    /// Create a map value. A repeated key keeps its first position and the
    /// last value written.
    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Value::Map(Heap::new(entries.into_iter().collect()))
    }

    /// Create a map value keyed by strings.
    ///
    /// ```text
    /// let cfg = Value::record([("name", Value::string("svc")), ("port", Value::Int(80))]);
    /// ```
    pub fn record<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::map(
            entries
                .into_iter()
                .map(|(k, v)| (Value::string(k), v)),
        )
    }

    /// Create an instance of `class` with the given attributes.
    pub fn instance<K: Into<String>>(
        class: ClassRef,
        attrs: impl IntoIterator<Item = (K, Value)>,
    ) -> Self {
        Value::Instance(InstanceValue::new(
            class,
            attrs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }
}

// Accessors

impl Value {
    /// Check for the `None` singleton.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Whether this value may appear in a `Literal[...]` type.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::None
                | Value::Bool(_)
                | Value::Int(_)
                | Value::Float(_)
                | Value::Str(_)
                | Value::Bytes(_)
        )
    }

    /// Try to view as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to view as list items.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Try to view as tuple items.
    pub fn as_tuple(&self) -> Option<&[Value]> {
        match self {
            Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// Try to view as set items.
    pub fn as_set(&self) -> Option<&FxIndexSet<Value>> {
        match self {
            Value::Set(items) => Some(items),
            _ => None,
        }
    }

    /// Try to view as map entries.
    pub fn as_map(&self) -> Option<&FxIndexMap<Value, Value>> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Try to view as a class instance.
    pub fn as_instance(&self) -> Option<&InstanceValue> {
        match self {
            Value::Instance(inst) => Some(inst),
            _ => None,
        }
    }

    /// Name of the value's class, for logs and messages.
    pub fn type_name(&self) -> &str {
        match self {
            Value::None => "NoneType",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Bytes(_) => "bytes",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Set(_) => "set",
            Value::Map(_) => "dict",
            Value::Instance(inst) => inst.class().name(),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

// Trait Implementations

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => float_key(*a) == float_key(*b),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::List(a), Value::List(b)) | (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => a.len() == b.len() && a.iter().all(|v| b.contains(v)),
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len() && a.iter().all(|(k, v)| b.get(k).is_some_and(|bv| v == bv))
            }
            (Value::Instance(a), Value::Instance(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

/// Bits a float compares and hashes by.
fn float_key(x: f64) -> u64 {
    if x == 0.0 {
        0
    } else if x.is_nan() {
        f64::NAN.to_bits()
    } else {
        x.to_bits()
    }
}

/// Order-independent digest of an unordered collection.
pub(super) fn unordered_digest<T: Hash>(items: impl Iterator<Item = T>) -> u64 {
    items.fold(0u64, |acc, item| {
        let mut hasher = FxHasher::default();
        item.hash(&mut hasher);
        acc.wrapping_add(hasher.finish())
    })
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Value::None => {}
            Value::Bool(b) => b.hash(state),
            Value::Int(n) => n.hash(state),
            Value::Float(x) => float_key(*x).hash(state),
            Value::Str(s) => s.hash(state),
            Value::Bytes(b) => b.hash(state),
            Value::List(items) | Value::Tuple(items) => items.hash(state),
            Value::Set(items) => {
                items.len().hash(state);
                unordered_digest(items.iter()).hash(state);
            }
            Value::Map(entries) => {
                entries.len().hash(state);
                unordered_digest(entries.iter()).hash(state);
            }
            Value::Instance(inst) => inst.hash(state),
        }
    }
}

/// Write a quoted string the way it is written in type text.
pub(crate) fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("'")?;
    for c in s.chars() {
        match c {
            '\'' => f.write_str("\\'")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("'")
}

fn write_bytes(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    f.write_str("b'")?;
    for &b in bytes {
        match b {
            b'\'' => f.write_str("\\'")?,
            b'\\' => f.write_str("\\\\")?,
            b'\n' => f.write_str("\\n")?,
            b'\t' => f.write_str("\\t")?,
            b'\r' => f.write_str("\\r")?,
            0x20..=0x7e => write!(f, "{}", char::from(b))?,
            _ => write!(f, "\\x{b:02x}")?,
        }
    }
    f.write_str("'")
}

fn write_seq(f: &mut fmt::Formatter<'_>, items: impl Iterator<Item = impl fmt::Display>) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Value::None => f.write_str("None"),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) if x.is_nan() => f.write_str("nan"),
            // Debug keeps the fractional part (`1.0`, not `1`) and spells
            // infinities `inf` and `-inf`.
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Str(s) => write_quoted(f, s),
            Value::Bytes(b) => write_bytes(f, b),
            Value::List(items) => {
                f.write_str("[")?;
                write_seq(f, items.iter())?;
                f.write_str("]")
            }
            Value::Tuple(items) => {
                f.write_str("(")?;
                write_seq(f, items.iter())?;
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Value::Set(items) if items.is_empty() => f.write_str("set()"),
            Value::Set(items) => {
                f.write_str("{")?;
                write_seq(f, items.iter())?;
                f.write_str("}")
            }
            Value::Map(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
            Value::Instance(inst) => write!(f, "{inst}"),
        })
    }
}
