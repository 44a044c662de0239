//! Runtime comparison predicates invoked by synthesized matchers.
//!
//! Expected messages may be phrased either as the final human-readable
//! string or as the original `{Placeholder}`-style template; both are
//! accepted without the caller declaring which, by comparing against the
//! actual template and against its rendered form.

use std::sync::Arc;

use logverify_mock::ArgsExpectation;
use logverify_types::{LogMessage, LoggedError, NULL_MESSAGE};

use crate::wildcard::{eq_ignore_case, is_wildcard, wildcard_match};

/// Decide whether a recorded message satisfies the expected message text,
/// optionally also requiring the recorded arguments to structurally match
/// `expected_args`.
pub fn compare_messages(
    expected: Option<&str>,
    expected_args: Option<&ArgsExpectation>,
    actual: &LogMessage,
) -> bool {
    let actual_rendered = actual.to_display_string();

    let Some(expected) = expected else {
        return actual_rendered == NULL_MESSAGE;
    };
    if actual_rendered == NULL_MESSAGE {
        return false;
    }

    match actual {
        LogMessage::Text(_) => wildcard_match(&actual_rendered, expected),
        LogMessage::Structured(_) => {
            let template = actual.template().unwrap_or_default();
            let args_satisfied = || {
                expected_args
                    .map(|expectation| expectation.is_satisfied_by(&actual.arg_values()))
                    .unwrap_or(true)
            };

            if !is_wildcard(expected) {
                let template_match = eq_ignore_case(template, expected) && args_satisfied();
                let rendered_fallback =
                    expected_args.is_none() && eq_ignore_case(&actual_rendered, expected);
                template_match || rendered_fallback
            } else {
                let template_match = wildcard_match(template, expected) && args_satisfied();
                let rendered_fallback = expected_args.is_none()
                    && (wildcard_match(template, expected)
                        || wildcard_match(&actual_rendered, expected)
                        || eq_ignore_case(&actual_rendered, expected));
                template_match || rendered_fallback
            }
        }
    }
}

/// Literal-exception comparison: same instance, or failing that, equal
/// runtime type and equal message text. Two independently constructed
/// errors of the same type and message are indistinguishable at the
/// facade boundary, so this is the biggest common denominator.
pub fn compare_exceptions(expected: &Arc<LoggedError>, actual: Option<&LoggedError>) -> bool {
    let Some(actual) = actual else {
        return false;
    };
    if std::ptr::eq(Arc::as_ptr(expected), actual) {
        return true;
    }
    expected.type_name() == actual.type_name() && expected.message() == actual.message()
}
