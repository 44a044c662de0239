//! The verification driver: the public `verify_log` surface.
//!
//! Classifies the high-level expression, extracts its arguments,
//! synthesizes the low-level matcher set, submits it to the mock's verify
//! primitive, and translates failures into the domain error taxonomy. One
//! verify call is an independent, side-effect-free assertion; on failure
//! it returns an error, it never mutates the mock's recorded state.

use logverify_mock::{LoggerMock, Times};
use tracing::debug;

use crate::classify::classify;
use crate::errors::{classify_fault, FaultKind, Result, VerifyLogError};
use crate::expr::CallExpr;
use crate::extract::extract;
use crate::synthesize::synthesize;

/// Verify that an invocation matching the expression was recorded at least
/// once.
pub fn verify_log<C>(mock: &LoggerMock<C>, expr: CallExpr) -> Result<()> {
    verify(mock, &expr, None, None)
}

/// Like [`verify_log`], with a custom message prefixed to the failure
/// diagnostic.
pub fn verify_log_with_message<C>(
    mock: &LoggerMock<C>,
    expr: CallExpr,
    fail_message: &str,
) -> Result<()> {
    verify(mock, &expr, None, Some(fail_message))
}

/// Verify with an explicit call-count constraint.
pub fn verify_log_times<C>(mock: &LoggerMock<C>, expr: CallExpr, times: Times) -> Result<()> {
    verify(mock, &expr, Some(times), None)
}

/// Verify with an explicit call-count constraint and a custom failure
/// message.
pub fn verify_log_times_with_message<C>(
    mock: &LoggerMock<C>,
    expr: CallExpr,
    times: Times,
    fail_message: &str,
) -> Result<()> {
    verify(mock, &expr, Some(times), Some(fail_message))
}

/// Verify with a deferred count constraint, resolved at verify time.
pub fn verify_log_times_fn<C, F>(mock: &LoggerMock<C>, expr: CallExpr, times: F) -> Result<()>
where
    F: FnOnce() -> Times,
{
    verify(mock, &expr, Some(times()), None)
}

/// Deferred count constraint plus a custom failure message.
pub fn verify_log_times_fn_with_message<C, F>(
    mock: &LoggerMock<C>,
    expr: CallExpr,
    times: F,
    fail_message: &str,
) -> Result<()>
where
    F: FnOnce() -> Times,
{
    verify(mock, &expr, Some(times()), Some(fail_message))
}

fn verify<C>(
    mock: &LoggerMock<C>,
    expr: &CallExpr,
    times: Option<Times>,
    fail_message: Option<&str>,
) -> Result<()> {
    let severity = classify(expr)?;
    let extracted = extract(expr, severity);
    debug!(severity = %severity, expression = %expr, "verifying log expression");

    let matchers = synthesize(&extracted).map_err(|source| VerifyLogError::Unexpected {
        expression: expr.to_string(),
        source: Box::new(source),
    })?;

    let times = times.unwrap_or(Times::AtLeastOnce);
    match mock.verify(&matchers, &times, fail_message) {
        Ok(()) => Ok(()),
        Err(fault) => Err(match classify_fault(&fault) {
            FaultKind::ExpectedNoMatch => VerifyLogError::NoMatchingInvocation {
                expression: expr.to_string(),
                source: fault,
            },
            FaultKind::Unexpected => VerifyLogError::Unexpected {
                expression: expr.to_string(),
                source: Box::new(fault),
            },
        }),
    }
}
