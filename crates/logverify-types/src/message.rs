use serde::{Deserialize, Serialize};
use std::fmt;

use crate::render::{placeholder_names, render_template};

/// Value representation for structured log arguments.
///
/// Structural equality, object rendering and serialization all come from
/// `serde_json::Value`.
pub type FieldValue = serde_json::Value;

/// The display form of a null message.
pub const NULL_MESSAGE: &str = "[null]";

/// Pseudo-key under which a structured message stores its raw template.
pub const ORIGINAL_FORMAT_KEY: &str = "{OriginalFormat}";

/// A message as recorded at the facade's low-level log entry point.
///
/// Plain text is what arrives when the caller bypassed the template
/// machinery; structured messages keep the ordered name -> value pairs the
/// convenience methods produce, with the raw template stored under
/// [`ORIGINAL_FORMAT_KEY`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LogMessage {
    Text(Option<String>),
    Structured(Vec<(String, FieldValue)>),
}

impl LogMessage {
    pub fn text(message: impl Into<String>) -> Self {
        LogMessage::Text(Some(message.into()))
    }

    pub fn null() -> Self {
        LogMessage::Text(None)
    }

    /// Build a structured message the way the facade's convenience methods
    /// do: placeholder names from the template are zipped, in order, with
    /// the supplied values, and the raw template is appended under the
    /// [`ORIGINAL_FORMAT_KEY`] pseudo-key.
    pub fn structured(template: impl Into<String>, args: Vec<FieldValue>) -> Self {
        let template = template.into();
        let names = placeholder_names(&template);
        let mut pairs: Vec<(String, FieldValue)> = Vec::with_capacity(args.len() + 1);
        for (position, value) in args.into_iter().enumerate() {
            let name = names
                .get(position)
                .cloned()
                .unwrap_or_else(|| position.to_string());
            pairs.push((name, value));
        }
        pairs.push((
            ORIGINAL_FORMAT_KEY.to_string(),
            FieldValue::String(template),
        ));
        LogMessage::Structured(pairs)
    }

    /// The raw template of a structured message, if this is one.
    pub fn template(&self) -> Option<&str> {
        match self {
            LogMessage::Text(_) => None,
            LogMessage::Structured(pairs) => pairs
                .iter()
                .find(|(key, _)| key == ORIGINAL_FORMAT_KEY)
                .and_then(|(_, value)| value.as_str()),
        }
    }

    /// The positional argument values of a structured message, excluding
    /// the template pseudo-entry.
    pub fn arg_values(&self) -> Vec<FieldValue> {
        match self {
            LogMessage::Text(_) => Vec::new(),
            LogMessage::Structured(pairs) => pairs
                .iter()
                .filter(|(key, _)| key != ORIGINAL_FORMAT_KEY)
                .map(|(_, value)| value.clone())
                .collect(),
        }
    }

    /// Render the message to its human-readable form. Null text renders as
    /// the [`NULL_MESSAGE`] sentinel; structured messages render through
    /// [`render_template`].
    pub fn to_display_string(&self) -> String {
        match self {
            LogMessage::Text(Some(text)) => text.clone(),
            LogMessage::Text(None) => NULL_MESSAGE.to_string(),
            LogMessage::Structured(_) => {
                let template = self.template().unwrap_or_default().to_string();
                render_template(&template, &self.arg_values())
            }
        }
    }
}

impl fmt::Display for LogMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}
