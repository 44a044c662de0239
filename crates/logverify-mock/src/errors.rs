use thiserror::Error;

/// Faults raised by the mock's verify primitive.
#[derive(Debug, Error)]
pub enum MockError {
    /// No (or insufficiently many) recorded invocations satisfied the
    /// matcher set. This is the expected verification-failure signal;
    /// `message` holds the full diagnostic including the performed
    /// invocations.
    #[error("{message}")]
    NoMatch {
        message: String,
        expected: String,
        actual_count: usize,
    },

    /// The mock's invocation log could not be read (poisoned lock).
    #[error("mock invocation log is unavailable: {reason}")]
    Unavailable { reason: String },
}
