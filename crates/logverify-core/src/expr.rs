//! The high-level call expression a test author writes against the
//! convenience logging methods.
//!
//! A [`CallExpr`] is an immutable "invoke method M with argument
//! expressions" record. Each [`ArgExpr`] carries the static type of the
//! argument position it fills and a tagged value category: a constant
//! literal, a recognized matcher-builder call, a constructor thunk, or an
//! opaque side-evaluated expression. The engine only reads expressions,
//! never mutates them.

use std::fmt;
use std::sync::Arc;

use logverify_mock::ArgPattern;
use logverify_types::{EventId, FieldValue, LoggedError};

pub type StrPredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;
pub type ExceptionPredicate = Arc<dyn Fn(Option<&LoggedError>) -> bool + Send + Sync>;
pub type EventIdPredicate = Arc<dyn Fn(&EventId) -> bool + Send + Sync>;
pub type ArgsPredicate = Arc<dyn Fn(&[FieldValue]) -> bool + Send + Sync>;
/// Side-evaluated expression producing the expected message at verify time.
pub type MessageThunk = Arc<dyn Fn() -> Option<String> + Send + Sync>;
/// Constructor invocation for an expected exception, evaluated eagerly
/// during extraction.
pub type ExceptionCtor = Arc<dyn Fn() -> LoggedError + Send + Sync>;

/// Static type of an argument position, used for role extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    Str,
    Exception,
    EventId,
    ObjectArray,
}

/// Value category of an argument expression.
#[derive(Clone)]
pub enum ExprNode {
    /// Constant literal.
    Lit(LitValue),
    /// Recognized matcher-builder invocation.
    Builder(BuilderCall),
    /// Exception constructor, evaluated eagerly during extraction.
    Ctor(ExceptionCtor),
    /// Arbitrary expression evaluated at verify time.
    Opaque(MessageThunk),
}

#[derive(Clone)]
pub enum LitValue {
    Str(Option<String>),
    Exception(Arc<LoggedError>),
    EventId(EventId),
    Args(Arc<Vec<ArgPattern>>),
}

/// The matcher-builder vocabulary the synthesizer recognizes.
#[derive(Clone)]
pub enum BuilderCall {
    AnyStr,
    StrWhere(StrPredicate),
    NotNull,
    Regex(String),
    AnyException,
    ExceptionWhere(ExceptionPredicate),
    AnyEventId,
    EventIdWhere(EventIdPredicate),
    AnyArgs,
    ArgsWhere(ArgsPredicate),
}

/// One argument expression of a high-level call.
#[derive(Clone)]
pub struct ArgExpr {
    pub(crate) ty: ArgType,
    pub(crate) node: ExprNode,
}

impl ArgExpr {
    pub fn ty(&self) -> ArgType {
        self.ty
    }

    // -- message role ------------------------------------------------------

    pub fn message(text: impl Into<String>) -> Self {
        Self {
            ty: ArgType::Str,
            node: ExprNode::Lit(LitValue::Str(Some(text.into()))),
        }
    }

    pub fn null_message() -> Self {
        Self {
            ty: ArgType::Str,
            node: ExprNode::Lit(LitValue::Str(None)),
        }
    }

    pub fn any_message() -> Self {
        Self {
            ty: ArgType::Str,
            node: ExprNode::Builder(BuilderCall::AnyStr),
        }
    }

    pub fn message_where(pred: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self {
            ty: ArgType::Str,
            node: ExprNode::Builder(BuilderCall::StrWhere(Arc::new(pred))),
        }
    }

    pub fn message_not_null() -> Self {
        Self {
            ty: ArgType::Str,
            node: ExprNode::Builder(BuilderCall::NotNull),
        }
    }

    pub fn message_regex(pattern: impl Into<String>) -> Self {
        Self {
            ty: ArgType::Str,
            node: ExprNode::Builder(BuilderCall::Regex(pattern.into())),
        }
    }

    /// Expected message computed by a helper at verify time; compared
    /// exactly as a literal would be.
    pub fn computed_message(f: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Self {
            ty: ArgType::Str,
            node: ExprNode::Opaque(Arc::new(move || Some(f()))),
        }
    }

    // -- exception role ----------------------------------------------------

    pub fn exception(error: LoggedError) -> Self {
        Self {
            ty: ArgType::Exception,
            node: ExprNode::Lit(LitValue::Exception(Arc::new(error))),
        }
    }

    pub fn exception_arc(error: Arc<LoggedError>) -> Self {
        Self {
            ty: ArgType::Exception,
            node: ExprNode::Lit(LitValue::Exception(error)),
        }
    }

    /// Constructor invocation; evaluated eagerly during extraction so a
    /// literal-exception comparison is possible.
    pub fn new_exception(f: impl Fn() -> LoggedError + Send + Sync + 'static) -> Self {
        Self {
            ty: ArgType::Exception,
            node: ExprNode::Ctor(Arc::new(f)),
        }
    }

    pub fn any_exception() -> Self {
        Self {
            ty: ArgType::Exception,
            node: ExprNode::Builder(BuilderCall::AnyException),
        }
    }

    pub fn exception_where(
        pred: impl Fn(Option<&LoggedError>) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            ty: ArgType::Exception,
            node: ExprNode::Builder(BuilderCall::ExceptionWhere(Arc::new(pred))),
        }
    }

    // -- event id role -----------------------------------------------------

    pub fn event_id(id: impl Into<EventId>) -> Self {
        Self {
            ty: ArgType::EventId,
            node: ExprNode::Lit(LitValue::EventId(id.into())),
        }
    }

    pub fn any_event_id() -> Self {
        Self {
            ty: ArgType::EventId,
            node: ExprNode::Builder(BuilderCall::AnyEventId),
        }
    }

    pub fn event_id_where(pred: impl Fn(&EventId) -> bool + Send + Sync + 'static) -> Self {
        Self {
            ty: ArgType::EventId,
            node: ExprNode::Builder(BuilderCall::EventIdWhere(Arc::new(pred))),
        }
    }

    // -- trailing args role ------------------------------------------------

    pub fn args(patterns: Vec<ArgPattern>) -> Self {
        Self {
            ty: ArgType::ObjectArray,
            node: ExprNode::Lit(LitValue::Args(Arc::new(patterns))),
        }
    }

    pub fn any_args() -> Self {
        Self {
            ty: ArgType::ObjectArray,
            node: ExprNode::Builder(BuilderCall::AnyArgs),
        }
    }

    pub fn args_where(pred: impl Fn(&[FieldValue]) -> bool + Send + Sync + 'static) -> Self {
        Self {
            ty: ArgType::ObjectArray,
            node: ExprNode::Builder(BuilderCall::ArgsWhere(Arc::new(pred))),
        }
    }
}

/// An "invoke convenience method M with arguments [a0..an]" expression.
#[derive(Clone)]
pub struct CallExpr {
    method: String,
    args: Vec<ArgExpr>,
}

impl CallExpr {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            args: Vec::new(),
        }
    }

    pub fn trace() -> Self {
        Self::new("log_trace")
    }

    pub fn debug() -> Self {
        Self::new("log_debug")
    }

    pub fn information() -> Self {
        Self::new("log_information")
    }

    pub fn warning() -> Self {
        Self::new("log_warning")
    }

    pub fn error() -> Self {
        Self::new("log_error")
    }

    pub fn critical() -> Self {
        Self::new("log_critical")
    }

    /// Append an argument expression.
    pub fn arg(mut self, arg: ArgExpr) -> Self {
        self.args.push(arg);
        self
    }

    pub fn message(self, text: impl Into<String>) -> Self {
        self.arg(ArgExpr::message(text))
    }

    pub fn null_message(self) -> Self {
        self.arg(ArgExpr::null_message())
    }

    pub fn with_args(self, patterns: Vec<ArgPattern>) -> Self {
        self.arg(ArgExpr::args(patterns))
    }

    pub fn exception(self, error: LoggedError) -> Self {
        self.arg(ArgExpr::exception(error))
    }

    pub fn event_id(self, id: impl Into<EventId>) -> Self {
        self.arg(ArgExpr::event_id(id))
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn args(&self) -> &[ArgExpr] {
        &self.args
    }
}

impl fmt::Display for CallExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.args.iter().map(render_arg).collect();
        write!(f, "{}({})", self.method, rendered.join(", "))
    }
}

fn render_arg(arg: &ArgExpr) -> String {
    match &arg.node {
        ExprNode::Lit(LitValue::Str(Some(text))) => format!("\"{text}\""),
        ExprNode::Lit(LitValue::Str(None)) => "null".to_string(),
        ExprNode::Lit(LitValue::Exception(error)) => format!("exception({error})"),
        ExprNode::Lit(LitValue::EventId(id)) => format!("event_id({id})"),
        ExprNode::Lit(LitValue::Args(patterns)) => {
            let rendered: Vec<String> = patterns.iter().map(render_pattern).collect();
            format!("args([{}])", rendered.join(", "))
        }
        ExprNode::Builder(BuilderCall::AnyStr) => "is_any::<str>()".to_string(),
        ExprNode::Builder(BuilderCall::StrWhere(_)) => "is::<str>(<predicate>)".to_string(),
        ExprNode::Builder(BuilderCall::NotNull) => "is_not_null::<str>()".to_string(),
        ExprNode::Builder(BuilderCall::Regex(pattern)) => format!("is_regex(\"{pattern}\")"),
        ExprNode::Builder(BuilderCall::AnyException) => "is_any::<exception>()".to_string(),
        ExprNode::Builder(BuilderCall::ExceptionWhere(_)) => {
            "is::<exception>(<predicate>)".to_string()
        }
        ExprNode::Builder(BuilderCall::AnyEventId) => "is_any::<event_id>()".to_string(),
        ExprNode::Builder(BuilderCall::EventIdWhere(_)) => "is::<event_id>(<predicate>)".to_string(),
        ExprNode::Builder(BuilderCall::AnyArgs) => "is_any::<args>()".to_string(),
        ExprNode::Builder(BuilderCall::ArgsWhere(_)) => "is::<args>(<predicate>)".to_string(),
        ExprNode::Ctor(_) => "new_exception(<constructor>)".to_string(),
        ExprNode::Opaque(_) => "<computed message>".to_string(),
    }
}

fn render_pattern(pattern: &ArgPattern) -> String {
    match pattern {
        ArgPattern::Value(value) => value.to_string(),
        ArgPattern::Any => "any()".to_string(),
        ArgPattern::Matches(_) => "is(<predicate>)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_renders_source_like_text() {
        let expr = CallExpr::information()
            .message("Test message")
            .with_args(vec![ArgPattern::Value(json!(34)), ArgPattern::Any]);
        assert_eq!(
            expr.to_string(),
            "log_information(\"Test message\", args([34, any()]))"
        );
    }

    #[test]
    fn test_display_renders_builders() {
        let expr = CallExpr::warning()
            .arg(ArgExpr::any_exception())
            .arg(ArgExpr::message_regex("Test*"));
        assert_eq!(
            expr.to_string(),
            "log_warning(is_any::<exception>(), is_regex(\"Test*\"))"
        );
    }

    #[test]
    fn test_display_renders_null_message() {
        assert_eq!(
            CallExpr::warning().null_message().to_string(),
            "log_warning(null)"
        );
    }
}
