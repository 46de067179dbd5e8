//! Structural type conformance for runtime values.
//!
//! Decide at runtime whether a [`Value`] has the shape a [`TypeExpr`]
//! describes:
//!
//! ```text
//! let expr = parse_type("dict[str, list[int | None]]", &TypeEnv::new())?;
//! let value = Value::record([("xs", Value::list(vec![Value::Int(1), Value::None]))]);
//! assert!(matches(&value, &expr));
//! ```
//!
//! The pieces live in their own crates and are re-exported here:
//!
//! - `conform_ir`: values, classes, records, and type expressions
//! - `conform_types`: classification ([`decompose`]) and the
//!   [`literal_values`] / [`schema_of`] extractors
//! - `conform_check`: the matcher ([`matches`], [`Checker`])
//! - `conform_parse`: type expressions from text ([`parse_type`])

use std::sync::Once;

pub use conform_check::{matches, CheckConfig, Checker, RecordPolicy};
pub use conform_ir::{
    Builtin, ClassDef, ClassRef, Container, FxIndexMap, FxIndexSet, Heap, InstanceCheckError,
    InstanceValue, RecordDef, TypeExpr, Value,
};
pub use conform_parse::{parse_type, ParseError, Span, TypeEnv};
pub use conform_types::{
    decompose, literal_values, schema_of, InvalidArgument, Origin, TypeKind, Unresolved,
};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set, and only the first call has any
/// effect. Matcher decisions log at `trace`; mismatches caused by
/// unresolvable expressions or refused instance checks log at `debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another global subscriber wins; leave it in place.
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init()
                .is_ok();
            if installed {
                tracing::debug!("tracing initialized");
            }
        }
    });
}
