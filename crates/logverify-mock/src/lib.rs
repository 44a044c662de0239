//! Recording mock of the logging facade, plus the matcher-based verify
//! primitive the verification engine drives.
//!
//! This crate is the mock-framework collaborator made explicit:
//! - [`LoggerMock`] records every call to the facade's single low-level
//!   log entry point
//! - [`LogCallMatchers`] is the five-slot matcher set `verify` evaluates
//!   against the recorded invocations
//! - [`Times`] expresses call-count constraints
//! - [`ArgPattern`] / [`structural_match`] is the partial-specification
//!   structural matcher for trailing log arguments
//! - [`MockError::NoMatch`] is the distinguishable native verification
//!   failure, carrying a descriptive diagnostic

pub mod errors;
pub mod matchers;
pub mod recorder;
pub mod times;

pub use errors::MockError;
pub use matchers::{
    default_formatter, structural_match, ArgPattern, ArgsExpectation, LogCallMatchers,
    MessageFormatter,
};
pub use recorder::{LoggerMock, RecordedInvocation};
pub use times::Times;
