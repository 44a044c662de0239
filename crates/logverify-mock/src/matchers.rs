use std::sync::Arc;

use logverify_types::{EventId, FieldValue, LogMessage, LoggedError, Severity};

use crate::recorder::RecordedInvocation;

/// Formatter delegate recorded alongside each invocation. Formatting is
/// never under test, but the slot is kept so the low-level call shape
/// matches the facade's.
pub type MessageFormatter = fn(&LogMessage, Option<&LoggedError>) -> String;

/// The formatter the facade installs by default.
pub fn default_formatter(message: &LogMessage, _exception: Option<&LoggedError>) -> String {
    message.to_display_string()
}

/// Matcher set for the facade's five-slot low-level log entry point.
///
/// Each slot is a predicate over the corresponding recorded value; an
/// invocation matches when every slot accepts.
pub struct LogCallMatchers {
    pub level: Box<dyn Fn(Severity) -> bool + Send + Sync>,
    pub event_id: Box<dyn Fn(&EventId) -> bool + Send + Sync>,
    pub message: Box<dyn Fn(&LogMessage) -> bool + Send + Sync>,
    pub exception: Box<dyn Fn(Option<&LoggedError>) -> bool + Send + Sync>,
    pub formatter: Box<dyn Fn(&MessageFormatter) -> bool + Send + Sync>,
}

impl LogCallMatchers {
    /// Matcher set that accepts any invocation.
    pub fn accept_any() -> Self {
        Self {
            level: Box::new(|_| true),
            event_id: Box::new(|_| true),
            message: Box::new(|_| true),
            exception: Box::new(|_| true),
            formatter: Box::new(|_| true),
        }
    }

    pub fn matches(&self, invocation: &RecordedInvocation) -> bool {
        (self.level)(invocation.level)
            && (self.event_id)(&invocation.event_id)
            && (self.message)(&invocation.message)
            && (self.exception)(invocation.exception.as_deref())
            && (self.formatter)(&invocation.formatter)
    }
}

/// One position of a partially-specified trailing-args expectation.
#[derive(Clone)]
pub enum ArgPattern {
    /// Require structural equality with this value.
    Value(FieldValue),
    /// Accept any value at this position.
    Any,
    /// Accept values satisfying the predicate.
    Matches(Arc<dyn Fn(&FieldValue) -> bool + Send + Sync>),
}

impl ArgPattern {
    pub fn matches(pred: impl Fn(&FieldValue) -> bool + Send + Sync + 'static) -> Self {
        ArgPattern::Matches(Arc::new(pred))
    }

    fn is_satisfied_by(&self, actual: &FieldValue) -> bool {
        match self {
            ArgPattern::Value(expected) => expected == actual,
            ArgPattern::Any => true,
            ArgPattern::Matches(pred) => pred(actual),
        }
    }
}

/// Expectation over a whole trailing-args array.
#[derive(Clone)]
pub enum ArgsExpectation {
    /// Per-position patterns; arity must match exactly.
    Patterns(Arc<Vec<ArgPattern>>),
    /// Accept any argument array.
    Any,
    /// Accept arrays satisfying the predicate.
    Matches(Arc<dyn Fn(&[FieldValue]) -> bool + Send + Sync>),
}

impl ArgsExpectation {
    pub fn is_satisfied_by(&self, actual: &[FieldValue]) -> bool {
        match self {
            ArgsExpectation::Patterns(patterns) => structural_match(patterns, actual),
            ArgsExpectation::Any => true,
            ArgsExpectation::Matches(pred) => pred(actual),
        }
    }
}

/// Structural match of an actual argument list against a partially
/// specified expected list: same arity, every position satisfied.
pub fn structural_match(patterns: &[ArgPattern], actual: &[FieldValue]) -> bool {
    patterns.len() == actual.len()
        && patterns
            .iter()
            .zip(actual)
            .all(|(pattern, value)| pattern.is_satisfied_by(value))
}
