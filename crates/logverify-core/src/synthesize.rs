//! Matcher synthesis: turn the extracted argument expressions into the
//! five-slot matcher set targeting the facade's low-level log entry point.
//!
//! Each slot is an ordinary closure; the shape dispatch happens once here,
//! by exhaustive matching on the argument expression's value category.

use logverify_mock::LogCallMatchers;
use logverify_types::{LogMessage, Severity, NULL_MESSAGE};
use regex::RegexBuilder;
use thiserror::Error;
use tracing::trace;

use crate::compare::{compare_exceptions, compare_messages};
use crate::expr::{BuilderCall, ExprNode, LitValue};
use crate::extract::ExtractedLogCallArgs;

/// A matcher could not be built from the expression. Classified downstream
/// as an unexpected fault, not a missing invocation.
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("invalid regex pattern `{pattern}` in message matcher: {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Build the low-level matcher set: severity (literal equality), event id,
/// message, exception, and formatter (always accept-any, formatting is not
/// under test).
pub fn synthesize(extracted: &ExtractedLogCallArgs) -> Result<LogCallMatchers, SynthesisError> {
    Ok(LogCallMatchers {
        level: level_matcher(extracted.severity),
        event_id: event_id_matcher(extracted),
        message: message_matcher(extracted)?,
        exception: exception_matcher(extracted),
        formatter: Box::new(|_| true),
    })
}

fn level_matcher(severity: Severity) -> Box<dyn Fn(Severity) -> bool + Send + Sync> {
    Box::new(move |actual| actual == severity)
}

fn event_id_matcher(
    extracted: &ExtractedLogCallArgs,
) -> Box<dyn Fn(&logverify_types::EventId) -> bool + Send + Sync> {
    if let Some(id) = extracted.literal_event_id.clone() {
        return Box::new(move |actual| *actual == id);
    }
    match extracted.event_id.as_ref().map(|arg| &arg.node) {
        Some(ExprNode::Builder(BuilderCall::EventIdWhere(pred))) => {
            let pred = pred.clone();
            Box::new(move |actual| pred(actual))
        }
        _ => Box::new(|_| true),
    }
}

fn message_matcher(
    extracted: &ExtractedLogCallArgs,
) -> Result<Box<dyn Fn(&LogMessage) -> bool + Send + Sync>, SynthesisError> {
    let expected_args = extracted.args_expectation();

    let Some(message) = extracted.message.as_ref() else {
        trace!("no message sub-expression; message slot accepts any");
        return Ok(Box::new(|_| true));
    };

    let matcher: Box<dyn Fn(&LogMessage) -> bool + Send + Sync> = match &message.node {
        ExprNode::Lit(LitValue::Str(expected)) => {
            trace!(kind = "literal", "message matcher");
            let expected = expected.clone();
            Box::new(move |actual| {
                compare_messages(expected.as_deref(), expected_args.as_ref(), actual)
            })
        }
        ExprNode::Builder(BuilderCall::AnyStr) => {
            trace!(kind = "accept-any", "message matcher");
            Box::new(|_| true)
        }
        ExprNode::Builder(BuilderCall::StrWhere(pred)) => {
            trace!(kind = "predicate", "message matcher");
            let pred = pred.clone();
            Box::new(move |actual| pred(&actual.to_display_string()))
        }
        ExprNode::Builder(BuilderCall::NotNull) => {
            trace!(kind = "not-null", "message matcher");
            Box::new(|actual| actual.to_display_string() != NULL_MESSAGE)
        }
        ExprNode::Builder(BuilderCall::Regex(pattern)) => {
            trace!(kind = "regex", pattern = %pattern, "message matcher");
            let re = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|source| SynthesisError::InvalidRegex {
                    pattern: pattern.clone(),
                    source,
                })?;
            Box::new(move |actual| re.is_match(&actual.to_display_string()))
        }
        ExprNode::Opaque(thunk) => {
            // Computed expected messages behave exactly like literals,
            // evaluated at verify time.
            trace!(kind = "computed", "message matcher");
            let thunk = thunk.clone();
            Box::new(move |actual| {
                compare_messages(thunk().as_deref(), expected_args.as_ref(), actual)
            })
        }
        _ => {
            trace!(kind = "other", "message matcher accepts any");
            Box::new(|_| true)
        }
    };

    Ok(matcher)
}

fn exception_matcher(
    extracted: &ExtractedLogCallArgs,
) -> Box<dyn Fn(Option<&logverify_types::LoggedError>) -> bool + Send + Sync> {
    if let Some(expected) = extracted.literal_exception.clone() {
        return Box::new(move |actual| compare_exceptions(&expected, actual));
    }
    match extracted.exception.as_ref().map(|arg| &arg.node) {
        None | Some(ExprNode::Builder(BuilderCall::AnyException)) => Box::new(|_| true),
        Some(ExprNode::Builder(BuilderCall::ExceptionWhere(pred))) => {
            let pred = pred.clone();
            Box::new(move |actual| pred(actual))
        }
        // Already matcher-shaped or unrecognized: no constraint.
        Some(_) => Box::new(|_| true),
    }
}
