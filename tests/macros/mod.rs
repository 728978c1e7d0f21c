use crate::common::Timeout;
use catch_rail::{any_error, MessageError};

#[test]
fn any_error_macro_formats_message() {
    let err = any_error!("operation: {}", 7);

    assert!(err.is::<MessageError>());
    assert_eq!(err.to_string(), "operation: 7");
}

#[test]
fn any_error_macro_captures_inline_arguments() {
    let user = "kim";
    let err = any_error!("user {user} locked");

    assert_eq!(err.to_string(), "user kim locked");
}

#[test]
fn any_error_macro_accepts_plain_literal() {
    let err = any_error!("plain",);

    assert_eq!(err.downcast_ref::<MessageError>().map(MessageError::message), Some("plain"));
}

#[test]
fn any_error_macro_converts_error_values() {
    let err = any_error!(Timeout { millis: 11 });

    assert!(err.is::<Timeout>());
    assert_eq!(err.to_string(), "timed out after 11ms");
}
