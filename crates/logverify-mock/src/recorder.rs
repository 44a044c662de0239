use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

use logverify_types::{EventId, FieldValue, LogMessage, LoggedError, Severity};

use crate::errors::MockError;
use crate::matchers::{default_formatter, LogCallMatchers, MessageFormatter};
use crate::times::Times;

/// One call to the facade's low-level log entry point, as recorded by the
/// mock during the system under test's execution. Read-only to verifiers.
#[derive(Clone)]
pub struct RecordedInvocation {
    pub level: Severity,
    pub event_id: EventId,
    pub message: LogMessage,
    pub exception: Option<Arc<LoggedError>>,
    pub formatter: MessageFormatter,
}

impl fmt::Display for RecordedInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "log({}, {}, \"{}\", {})",
            self.level,
            self.event_id,
            self.message,
            self.exception
                .as_ref()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "null".to_string()),
        )
    }
}

impl fmt::Debug for RecordedInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Recording mock of the logging facade.
///
/// The category marker `C` mirrors the facade's category-parameterized
/// logger; the plain `LoggerMock::new()` is the non-generic form.
///
/// The system under test logs against the mock (through the low-level
/// [`log`](LoggerMock::log) entry point or the per-severity convenience
/// recorders); verification later replays matchers over the recorded
/// invocations via [`verify`](LoggerMock::verify).
pub struct LoggerMock<C = ()> {
    invocations: Mutex<Vec<RecordedInvocation>>,
    category: PhantomData<fn() -> C>,
}

impl<C> Default for LoggerMock<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> LoggerMock<C> {
    pub fn new() -> Self {
        Self {
            invocations: Mutex::new(Vec::new()),
            category: PhantomData,
        }
    }

    /// The category type this mock was parameterized with.
    pub fn category_name(&self) -> &'static str {
        std::any::type_name::<C>()
    }

    /// The low-level polymorphic log entry point.
    pub fn log(
        &self,
        level: Severity,
        event_id: EventId,
        message: LogMessage,
        exception: Option<Arc<LoggedError>>,
    ) {
        let invocation = RecordedInvocation {
            level,
            event_id,
            message,
            exception,
            formatter: default_formatter,
        };
        if let Ok(mut invocations) = self.invocations.lock() {
            invocations.push(invocation);
        }
    }

    /// Convenience recorder: structured template + args at `level`, the way
    /// the facade's convenience methods call the low-level entry point.
    pub fn log_with(
        &self,
        level: Severity,
        event_id: EventId,
        template: &str,
        args: Vec<FieldValue>,
        exception: Option<Arc<LoggedError>>,
    ) {
        self.log(
            level,
            event_id,
            LogMessage::structured(template, args),
            exception,
        );
    }

    /// Plain-text recorder, for callers that bypass the template machinery.
    pub fn log_text(&self, level: Severity, message: Option<&str>) {
        let message = match message {
            Some(text) => LogMessage::text(text),
            None => LogMessage::null(),
        };
        self.log(level, EventId::default(), message, None);
    }

    pub fn trace(&self, template: &str, args: Vec<FieldValue>) {
        self.log_with(Severity::Trace, EventId::default(), template, args, None);
    }

    pub fn debug(&self, template: &str, args: Vec<FieldValue>) {
        self.log_with(Severity::Debug, EventId::default(), template, args, None);
    }

    pub fn information(&self, template: &str, args: Vec<FieldValue>) {
        self.log_with(
            Severity::Information,
            EventId::default(),
            template,
            args,
            None,
        );
    }

    pub fn warning(&self, template: &str, args: Vec<FieldValue>) {
        self.log_with(Severity::Warning, EventId::default(), template, args, None);
    }

    pub fn error(&self, template: &str, args: Vec<FieldValue>) {
        self.log_with(Severity::Error, EventId::default(), template, args, None);
    }

    pub fn critical(&self, template: &str, args: Vec<FieldValue>) {
        self.log_with(Severity::Critical, EventId::default(), template, args, None);
    }

    /// Snapshot of all recorded invocations.
    pub fn recorded(&self) -> Vec<RecordedInvocation> {
        self.invocations
            .lock()
            .map(|invocations| invocations.clone())
            .unwrap_or_default()
    }

    /// Forget all recorded invocations.
    pub fn clear(&self) {
        if let Ok(mut invocations) = self.invocations.lock() {
            invocations.clear();
        }
    }

    /// The verify primitive: count recorded invocations satisfying the
    /// matcher set and check the count constraint.
    ///
    /// # Errors
    ///
    /// Returns [`MockError::NoMatch`] with a descriptive diagnostic when
    /// the constraint is not met, or [`MockError::Unavailable`] when the
    /// invocation log cannot be read.
    pub fn verify(
        &self,
        matchers: &LogCallMatchers,
        times: &Times,
        fail_message: Option<&str>,
    ) -> Result<(), MockError> {
        let invocations = self
            .invocations
            .lock()
            .map_err(|poisoned| MockError::Unavailable {
                reason: poisoned.to_string(),
            })?;

        let actual_count = invocations
            .iter()
            .filter(|invocation| matchers.matches(invocation))
            .count();

        if times.is_satisfied_by(actual_count) {
            return Ok(());
        }

        let prefix = fail_message
            .map(|text| format!("{text}: "))
            .unwrap_or_default();
        let mut message = format!(
            "{prefix}Expected invocation on the logger mock {times}, but was performed {actual_count} time(s)"
        );
        if invocations.is_empty() {
            message.push_str("\n\nNo invocations performed.");
        } else {
            message.push_str("\n\nPerformed invocations:");
            for invocation in invocations.iter() {
                message.push_str("\n  ");
                message.push_str(&invocation.to_string());
            }
        }

        Err(MockError::NoMatch {
            message,
            expected: times.to_string(),
            actual_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_records_convenience_calls_as_structured() {
        let mock: LoggerMock = LoggerMock::new();
        mock.information("Processed {Count} items.", vec![json!(3)]);

        let recorded = mock.recorded();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].level, Severity::Information);
        assert_eq!(
            recorded[0].message.template(),
            Some("Processed {Count} items.")
        );
    }

    #[test]
    fn test_verify_counts_matching_invocations() {
        let mock: LoggerMock = LoggerMock::new();
        mock.information("a", vec![]);
        mock.warning("b", vec![]);

        let mut matchers = LogCallMatchers::accept_any();
        matchers.level = Box::new(|level| level == Severity::Warning);

        assert!(mock.verify(&matchers, &Times::Once, None).is_ok());
        let err = mock
            .verify(&matchers, &Times::AtLeast(2), None)
            .unwrap_err();
        match err {
            MockError::NoMatch {
                expected,
                actual_count,
                message,
            } => {
                assert_eq!(expected, "at least 2 times");
                assert_eq!(actual_count, 1);
                assert!(message.contains("Performed invocations:"));
            }
            other => panic!("expected NoMatch, got {other:?}"),
        }
    }

    #[test]
    fn test_verify_never_with_no_matches_succeeds() {
        let mock: LoggerMock = LoggerMock::new();
        let matchers = LogCallMatchers::accept_any();
        assert!(mock.verify(&matchers, &Times::Never, None).is_ok());
    }

    #[test]
    fn test_fail_message_prefixes_diagnostic() {
        let mock: LoggerMock = LoggerMock::new();
        let matchers = LogCallMatchers::accept_any();
        let err = mock
            .verify(&matchers, &Times::Once, Some("order pipeline must log"))
            .unwrap_err();
        assert!(err.to_string().starts_with("order pipeline must log: "));
        assert!(err.to_string().contains("No invocations performed."));
    }

    #[test]
    fn test_category_name_reflects_marker() {
        struct OrdersProcessor;
        let mock: LoggerMock<OrdersProcessor> = LoggerMock::new();
        assert!(mock.category_name().contains("OrdersProcessor"));
    }
}
