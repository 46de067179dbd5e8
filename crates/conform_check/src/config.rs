//! Checker configuration.

/// How a record schema judges a value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RecordPolicy {
    /// Any map conforms. Fields are not inspected.
    #[default]
    Permissive,
    /// Required fields must be present under string keys, and every
    /// declared field that is present must match its type. Extra keys are
    /// allowed.
    Strict,
}

/// Configuration for a [`Checker`](crate::Checker).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CheckConfig {
    /// Policy for record schemas.
    pub record_policy: RecordPolicy,
}

impl CheckConfig {
    /// A config that validates record fields.
    pub fn strict() -> Self {
        CheckConfig {
            record_policy: RecordPolicy::Strict,
        }
    }
}
