//! Call-shape classification: gate the high-level expression and resolve
//! its severity.

use std::collections::HashMap;
use std::sync::OnceLock;

use logverify_types::Severity;

use crate::errors::{Result, VerifyLogError};
use crate::expr::CallExpr;

/// The fixed convenience logging methods, one per severity.
pub const SUPPORTED_METHODS: [&str; 6] = [
    "log_trace",
    "log_debug",
    "log_information",
    "log_warning",
    "log_error",
    "log_critical",
];

static METHOD_SEVERITIES: OnceLock<HashMap<&'static str, Severity>> = OnceLock::new();

fn method_severities() -> &'static HashMap<&'static str, Severity> {
    METHOD_SEVERITIES.get_or_init(|| {
        HashMap::from([
            ("log_trace", Severity::Trace),
            ("log_debug", Severity::Debug),
            ("log_information", Severity::Information),
            ("log_warning", Severity::Warning),
            ("log_error", Severity::Error),
            ("log_critical", Severity::Critical),
        ])
    })
}

/// Verify the expression invokes one of the fixed convenience methods and
/// resolve which severity it targets. Pure inspection; rejects everything
/// else before any rewriting is attempted.
///
/// # Errors
///
/// [`VerifyLogError::UnsupportedExpression`] when no method name can be
/// resolved, [`VerifyLogError::UnsupportedMethod`] for any name outside
/// the fixed set.
pub fn classify(expr: &CallExpr) -> Result<Severity> {
    let method = expr.method();
    if method.is_empty() {
        return Err(VerifyLogError::UnsupportedExpression);
    }
    method_severities()
        .get(method)
        .copied()
        .ok_or_else(|| VerifyLogError::UnsupportedMethod {
            method: method.to_string(),
        })
}
