//! Shared vocabulary of the logging facade under verification.
//!
//! This crate defines the types both sides of a log verification speak:
//! - [`Severity`] - the fixed ordered severity set
//! - [`EventId`] - numeric event identifier with an optional name
//! - [`LogMessage`] - a recorded message, either plain text or a structured
//!   template + args record
//! - [`FieldValue`] - the value representation for structured log arguments
//! - [`LoggedError`] - the captured surrogate for an exception attached to
//!   a log call
//! - [`render_template`] - the facade's (template, args) -> display string
//!   function, used by the real logging path and by message comparison

pub mod error;
pub mod event_id;
pub mod message;
pub mod render;
pub mod severity;

pub use error::LoggedError;
pub use event_id::EventId;
pub use message::{FieldValue, LogMessage, NULL_MESSAGE, ORIGINAL_FORMAT_KEY};
pub use render::render_template;
pub use severity::Severity;
