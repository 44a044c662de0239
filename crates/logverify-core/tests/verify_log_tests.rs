#![allow(clippy::unwrap_used, clippy::expect_used)]

use logverify_core::{
    verify_log, ArgExpr, CallExpr, EventId, LogMessage, LoggedError, LoggerMock, Severity,
    VerifyLogError,
};

fn expr_for(severity: Severity) -> CallExpr {
    match severity {
        Severity::Trace => CallExpr::trace(),
        Severity::Debug => CallExpr::debug(),
        Severity::Information => CallExpr::information(),
        Severity::Warning => CallExpr::warning(),
        Severity::Error => CallExpr::error(),
        Severity::Critical => CallExpr::critical(),
    }
}

#[test]
fn test_each_severity_verifies_against_its_own_recording() {
    for severity in Severity::ALL {
        let mock: LoggerMock = LoggerMock::new();
        mock.log_with(severity, EventId::default(), "Test message", vec![], None);

        verify_log(&mock, expr_for(severity).message("Test message")).unwrap();

        for other in Severity::ALL {
            if other == severity {
                continue;
            }
            let result = verify_log(&mock, expr_for(other).message("Test message"));
            assert!(
                matches!(result, Err(VerifyLogError::NoMatchingInvocation { .. })),
                "severity {other} should not match a {severity} recording"
            );
        }
    }
}

#[test]
fn test_message_comparison_is_case_insensitive() {
    let mock: LoggerMock = LoggerMock::new();
    mock.information("Test Message", vec![]);

    verify_log(&mock, CallExpr::information().message("test message")).unwrap();
}

#[test]
fn test_wildcard_message() {
    let mock: LoggerMock = LoggerMock::new();
    mock.information("Test gibberish message", vec![]);

    verify_log(&mock, CallExpr::information().message("Test*message")).unwrap();

    let result = verify_log(&mock, CallExpr::information().message("Test*something"));
    assert!(matches!(
        result,
        Err(VerifyLogError::NoMatchingInvocation { .. })
    ));
}

#[test]
fn test_any_message_matcher() {
    let mock: LoggerMock = LoggerMock::new();
    mock.information("whatever", vec![]);

    verify_log(&mock, CallExpr::information().arg(ArgExpr::any_message())).unwrap();
}

#[test]
fn test_message_predicate_matcher() {
    let mock: LoggerMock = LoggerMock::new();
    mock.information("Test message", vec![]);

    verify_log(
        &mock,
        CallExpr::information().arg(ArgExpr::message_where(|msg| msg.contains("Test"))),
    )
    .unwrap();

    let result = verify_log(
        &mock,
        CallExpr::information().arg(ArgExpr::message_where(|msg| {
            msg.contains("Expecting something else")
        })),
    );
    assert!(matches!(
        result,
        Err(VerifyLogError::NoMatchingInvocation { .. })
    ));
}

#[test]
fn test_not_null_message_matcher() {
    let recorded: LoggerMock = LoggerMock::new();
    recorded.information("Test message", vec![]);
    verify_log(&recorded, CallExpr::information().arg(ArgExpr::message_not_null())).unwrap();

    let null_recorded: LoggerMock = LoggerMock::new();
    null_recorded.log_text(Severity::Information, None);
    let result = verify_log(
        &null_recorded,
        CallExpr::information().arg(ArgExpr::message_not_null()),
    );
    assert!(matches!(
        result,
        Err(VerifyLogError::NoMatchingInvocation { .. })
    ));
}

#[test]
fn test_regex_message_matcher() {
    let mock: LoggerMock = LoggerMock::new();
    mock.information("Test message", vec![]);

    verify_log(
        &mock,
        CallExpr::information().arg(ArgExpr::message_regex("^(.*)$")),
    )
    .unwrap();

    let result = verify_log(
        &mock,
        CallExpr::information().arg(ArgExpr::message_regex("[0-9]")),
    );
    assert!(matches!(
        result,
        Err(VerifyLogError::NoMatchingInvocation { .. })
    ));
}

#[test]
fn test_computed_message_behaves_like_a_literal() {
    fn expected_template() -> String {
        "Test message".to_string()
    }

    let mock: LoggerMock = LoggerMock::new();
    mock.information("Test message", vec![]);

    verify_log(
        &mock,
        CallExpr::information().arg(ArgExpr::computed_message(expected_template)),
    )
    .unwrap();
}

#[test]
fn test_null_message() {
    let mock: LoggerMock = LoggerMock::new();
    mock.log_text(Severity::Warning, None);

    verify_log(&mock, CallExpr::warning().null_message()).unwrap();

    let result = verify_log(&mock, CallExpr::warning().message("not null"));
    assert!(matches!(
        result,
        Err(VerifyLogError::NoMatchingInvocation { .. })
    ));

    let non_null: LoggerMock = LoggerMock::new();
    non_null.warning("Test message", vec![]);
    let result = verify_log(&non_null, CallExpr::warning().null_message());
    assert!(matches!(
        result,
        Err(VerifyLogError::NoMatchingInvocation { .. })
    ));
}

#[test]
fn test_literal_exception_matches_on_type_and_message() {
    let mock: LoggerMock = LoggerMock::new();
    mock.log(
        Severity::Warning,
        EventId::default(),
        LogMessage::structured("Test message", vec![]),
        Some(std::sync::Arc::new(LoggedError::new(
            "InvalidOperation",
            "Some error message.",
        ))),
    );

    // An independently constructed, equivalent error still matches.
    verify_log(
        &mock,
        CallExpr::warning()
            .exception(LoggedError::new("InvalidOperation", "Some error message."))
            .message("Test message"),
    )
    .unwrap();

    let wrong_message = verify_log(
        &mock,
        CallExpr::warning()
            .exception(LoggedError::new("InvalidOperation", "Some different message."))
            .message("Test message"),
    );
    assert!(matches!(
        wrong_message,
        Err(VerifyLogError::NoMatchingInvocation { .. })
    ));

    let wrong_type = verify_log(
        &mock,
        CallExpr::warning()
            .exception(LoggedError::new("Timeout", "Some error message."))
            .message("Test message"),
    );
    assert!(matches!(
        wrong_type,
        Err(VerifyLogError::NoMatchingInvocation { .. })
    ));
}

#[test]
fn test_constructed_exception_is_compared_as_literal() {
    let mock: LoggerMock = LoggerMock::new();
    mock.log(
        Severity::Error,
        EventId::default(),
        LogMessage::structured("failed", vec![]),
        Some(std::sync::Arc::new(LoggedError::new("Timeout", "late"))),
    );

    verify_log(
        &mock,
        CallExpr::error()
            .arg(ArgExpr::new_exception(|| LoggedError::new("Timeout", "late")))
            .message("failed"),
    )
    .unwrap();
}

#[test]
fn test_exception_predicate_matcher() {
    let mock: LoggerMock = LoggerMock::new();
    mock.log(
        Severity::Warning,
        EventId::default(),
        LogMessage::structured("Test message", vec![]),
        Some(std::sync::Arc::new(LoggedError::new(
            "InvalidOperation",
            "Some error message.",
        ))),
    );

    verify_log(
        &mock,
        CallExpr::warning()
            .arg(ArgExpr::exception_where(|e| {
                e.map(|e| e.message() == "Some error message.").unwrap_or(false)
            }))
            .message("Test message"),
    )
    .unwrap();
}

#[test]
fn test_any_exception_accepts_calls_without_exception() {
    let mock: LoggerMock = LoggerMock::new();
    mock.warning("Test message", vec![]);

    verify_log(
        &mock,
        CallExpr::warning()
            .arg(ArgExpr::any_exception())
            .arg(ArgExpr::any_message()),
    )
    .unwrap();
}

#[test]
fn test_event_id_literal_and_predicate() {
    let mock: LoggerMock = LoggerMock::new();
    mock.log_with(
        Severity::Information,
        EventId::new(10),
        "Test message",
        vec![],
        None,
    );

    verify_log(
        &mock,
        CallExpr::information().event_id(10).message("Test message"),
    )
    .unwrap();

    verify_log(
        &mock,
        CallExpr::information()
            .arg(ArgExpr::event_id_where(|id| id.id == 10))
            .message("Test message"),
    )
    .unwrap();

    let result = verify_log(
        &mock,
        CallExpr::information().event_id(11).message("Test message"),
    );
    assert!(matches!(
        result,
        Err(VerifyLogError::NoMatchingInvocation { .. })
    ));
}

#[test]
fn test_unsupported_method_is_rejected_and_named() {
    let mock: LoggerMock = LoggerMock::new();
    mock.information("Test message", vec![]);

    let result = verify_log(&mock, CallExpr::new("log_custom").message("Test message"));
    match result {
        Err(VerifyLogError::UnsupportedMethod { method }) => assert_eq!(method, "log_custom"),
        other => panic!("expected UnsupportedMethod, got {other:?}"),
    }
}

#[test]
fn test_category_parameterized_mock_verifies_the_same_way() {
    struct OrdersProcessor;

    let mock: LoggerMock<OrdersProcessor> = LoggerMock::new();
    mock.information("Order accepted", vec![]);

    verify_log(&mock, CallExpr::information().message("Order accepted")).unwrap();
}
