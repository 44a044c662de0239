//! Argument extraction: slice a classified call expression into the four
//! role-tagged sub-expressions and eagerly evaluate literal values.

use std::sync::Arc;

use logverify_mock::{ArgPattern, ArgsExpectation};
use logverify_types::{EventId, LoggedError, Severity};

use crate::expr::{ArgExpr, ArgType, BuilderCall, CallExpr, ExprNode, LitValue};

/// The role-tagged sub-expressions of one verification, plus the eagerly
/// evaluated literal values where the sub-expressions are constants.
/// Short-lived: consumed by the synthesizer within the same verify call.
pub struct ExtractedLogCallArgs {
    pub severity: Severity,
    pub message: Option<ArgExpr>,
    pub exception: Option<ArgExpr>,
    pub event_id: Option<ArgExpr>,
    pub message_args: Option<ArgExpr>,
    /// `Some(None)` is a literal null message.
    pub literal_message: Option<Option<String>>,
    pub literal_exception: Option<Arc<LoggedError>>,
    pub literal_event_id: Option<EventId>,
    pub arg_patterns: Option<Arc<Vec<ArgPattern>>>,
}

impl ExtractedLogCallArgs {
    /// The trailing-args expectation to hand to the structural matcher,
    /// if the caller supplied one.
    pub fn args_expectation(&self) -> Option<ArgsExpectation> {
        match self.message_args.as_ref().map(|arg| &arg.node) {
            Some(ExprNode::Lit(LitValue::Args(patterns))) => {
                Some(ArgsExpectation::Patterns(patterns.clone()))
            }
            Some(ExprNode::Builder(BuilderCall::AnyArgs)) => Some(ArgsExpectation::Any),
            Some(ExprNode::Builder(BuilderCall::ArgsWhere(pred))) => {
                Some(ArgsExpectation::Matches(pred.clone()))
            }
            _ => None,
        }
    }
}

/// Locate, by static type, the sub-expressions filling the message,
/// exception, event-id and trailing-args roles. Roles are optional; no
/// error is raised for absent ones. A constructor-shaped exception
/// argument is evaluated immediately so literal comparison is possible.
pub fn extract(expr: &CallExpr, severity: Severity) -> ExtractedLogCallArgs {
    let message = first_of_type(expr, ArgType::Str);
    let exception = first_of_type(expr, ArgType::Exception);
    let event_id = first_of_type(expr, ArgType::EventId);
    let message_args = first_of_type(expr, ArgType::ObjectArray);

    let literal_message = match message.as_ref().map(|arg| &arg.node) {
        Some(ExprNode::Lit(LitValue::Str(value))) => Some(value.clone()),
        _ => None,
    };

    let literal_exception = match exception.as_ref().map(|arg| &arg.node) {
        Some(ExprNode::Lit(LitValue::Exception(error))) => Some(error.clone()),
        Some(ExprNode::Ctor(ctor)) => Some(Arc::new(ctor())),
        _ => None,
    };

    let literal_event_id = match event_id.as_ref().map(|arg| &arg.node) {
        Some(ExprNode::Lit(LitValue::EventId(id))) => Some(id.clone()),
        _ => None,
    };

    let arg_patterns = match message_args.as_ref().map(|arg| &arg.node) {
        Some(ExprNode::Lit(LitValue::Args(patterns))) => Some(patterns.clone()),
        _ => None,
    };

    ExtractedLogCallArgs {
        severity,
        message,
        exception,
        event_id,
        message_args,
        literal_message,
        literal_exception,
        literal_event_id,
        arg_patterns,
    }
}

fn first_of_type(expr: &CallExpr, ty: ArgType) -> Option<ArgExpr> {
    expr.args().iter().find(|arg| arg.ty() == ty).cloned()
}
