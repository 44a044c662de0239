use logverify_mock::MockError;
use thiserror::Error;

/// Result type alias using VerifyLogError
pub type Result<T> = std::result::Result<T, VerifyLogError>;

/// Verification failures, split so "your assertion failed" stays
/// distinguishable from "the engine broke".
#[derive(Debug, Error)]
pub enum VerifyLogError {
    /// The verify expression's body is not a single resolvable method
    /// invocation.
    #[error(
        "the verify expression must be a single invocation of a logger \
         convenience method; a method name could not be resolved"
    )]
    UnsupportedExpression,

    /// The invoked method is not one of the six convenience logging
    /// methods.
    #[error(
        "only the logger convenience methods (log_trace, log_debug, \
         log_information, log_warning, log_error, log_critical) can be \
         verified; the resolved method `{method}` is not one of these"
    )]
    UnsupportedMethod { method: String },

    /// No (or insufficiently many) recorded invocations satisfied the
    /// synthesized matchers. The primary, expected test-failure signal.
    #[error("No matching invocation was recorded for {expression}\n\n{source}")]
    NoMatchingInvocation {
        expression: String,
        #[source]
        source: MockError,
    },

    /// Anything else raised during synthesis or matching; an engine or
    /// caller bug rather than a missing invocation.
    #[error("log verification failed unexpectedly for {expression}: {source}")]
    Unexpected {
        expression: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Classification of a fault raised by the mock framework's verify
/// primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// The mock's native "no matching invocation" failure.
    ExpectedNoMatch,
    /// Everything else.
    Unexpected,
}

/// Distinguish the mock's native verification failure from internal
/// faults.
pub fn classify_fault(fault: &MockError) -> FaultKind {
    match fault {
        MockError::NoMatch { .. } => FaultKind::ExpectedNoMatch,
        MockError::Unavailable { .. } => FaultKind::Unexpected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_is_expected() {
        let fault = MockError::NoMatch {
            message: "no match".to_string(),
            expected: "at least once".to_string(),
            actual_count: 0,
        };
        assert_eq!(classify_fault(&fault), FaultKind::ExpectedNoMatch);
    }

    #[test]
    fn test_other_faults_are_unexpected() {
        let fault = MockError::Unavailable {
            reason: "poisoned".to_string(),
        };
        assert_eq!(classify_fault(&fault), FaultKind::Unexpected);
    }

    #[test]
    fn test_unsupported_method_names_the_offender() {
        let err = VerifyLogError::UnsupportedMethod {
            method: "log_custom".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("`log_custom`"));
        assert!(text.contains("log_information"));
    }
}
