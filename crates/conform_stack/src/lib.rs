//! Stack growth for deeply nested type expressions.
//!
//! Conformance checking recurses once per level of type-expression nesting,
//! class hierarchy depth, or bracket nesting in parsed type text. Machine
//! generated schemas can nest far deeper than hand-written ones, so every
//! recursive entry point runs through [`ensure_sufficient_stack`].
//!
//! On native targets the `stacker` crate allocates a fresh stack segment when
//! the remaining space drops below the red zone. On `wasm32` the guard is a
//! plain call.

/// Grow when less than this much stack remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, growing the stack first if the red zone has been reached.
///
/// ```text
/// fn check(&self, value: &Value, expr: &TypeExpr) -> bool {
///     ensure_sufficient_stack(|| match decompose(expr) {
///         TypeKind::Union(members) => members.iter().any(|m| self.check(value, m)),
///         // ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
