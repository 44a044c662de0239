//! logverify-core - assert, after the fact, that a structured logging call
//! was made against a mocked logging facade.
//!
//! Test authors write a high-level [`CallExpr`] against the facade's
//! convenience logging methods; the engine rewrites it into an equivalent
//! matcher set for the facade's single low-level polymorphic log entry
//! point, replays it over the mock's recorded invocations, and translates
//! failure into a descriptive error.
//!
//! ```
//! use logverify_core::{verify_log, CallExpr, LoggerMock};
//!
//! let mock: LoggerMock = LoggerMock::new();
//! mock.information("Processed {Count} items.", vec![serde_json::json!(3)]);
//!
//! verify_log(&mock, CallExpr::information().message("Processed 3 items."))?;
//! verify_log(&mock, CallExpr::information().message("Processed * items."))?;
//! # Ok::<(), logverify_core::VerifyLogError>(())
//! ```
//!
//! Pipeline, in dependency order: [`classify`](classify::classify) gates
//! the expression and resolves its severity, [`extract`](extract::extract)
//! slices out the role-tagged arguments, [`synthesize`](synthesize::synthesize)
//! builds the matcher slots, and [`verify_log`] submits them and interprets
//! the outcome.

pub mod classify;
pub mod compare;
pub mod errors;
pub mod expr;
pub mod extract;
pub mod synthesize;
pub mod verify;
pub mod wildcard;

pub use errors::{classify_fault, FaultKind, Result, VerifyLogError};
pub use expr::{ArgExpr, ArgType, BuilderCall, CallExpr, ExprNode, LitValue};
pub use verify::{
    verify_log, verify_log_times, verify_log_times_fn, verify_log_times_fn_with_message,
    verify_log_times_with_message, verify_log_with_message,
};

// The collaborators a verification needs, re-exported for convenience.
pub use logverify_mock::{ArgPattern, LoggerMock, Times};
pub use logverify_types::{EventId, FieldValue, LogMessage, LoggedError, Severity};
