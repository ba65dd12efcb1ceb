//! Tests for the application error taxonomy.

use rstest::rstest;

use crate::AppError;

#[rstest]
#[case(AppError::Unauthorized("no session".into()), 401, "UNAUTHORIZED")]
#[case(AppError::Forbidden("admins only".into()), 403, "FORBIDDEN")]
#[case(AppError::Timeout("30s elapsed".into()), 408, "REQUEST_TIMEOUT")]
#[case(AppError::Validation("bad category".into()), 400, "VALIDATION_ERROR")]
#[case(AppError::Database("timeout".into()), 500, "DATABASE_ERROR")]
#[case(AppError::Internal("bug".into()), 500, "INTERNAL_ERROR")]
fn test_status_and_code(#[case] error: AppError, #[case] status: u16, #[case] code: &str) {
    assert_eq!(error.status_code(), status);
    assert_eq!(error.error_code(), code);
}

#[test]
fn test_server_errors() {
    assert!(AppError::Database(String::new()).is_server_error());
    assert!(AppError::Internal(String::new()).is_server_error());
    assert!(!AppError::Validation(String::new()).is_server_error());
    assert!(!AppError::Forbidden(String::new()).is_server_error());
    assert!(!AppError::Timeout(String::new()).is_server_error());
}

#[test]
fn test_app_error_display() {
    assert_eq!(
        AppError::Unauthorized("msg".into()).to_string(),
        "Authentication failed: msg"
    );
    assert_eq!(
        AppError::Forbidden("msg".into()).to_string(),
        "Access denied: msg"
    );
    assert_eq!(
        AppError::Timeout("msg".into()).to_string(),
        "Request timed out: msg"
    );
    assert_eq!(
        AppError::Validation("msg".into()).to_string(),
        "Validation error: msg"
    );
    assert_eq!(
        AppError::Database("msg".into()).to_string(),
        "Database error: msg"
    );
    assert_eq!(
        AppError::Internal("msg".into()).to_string(),
        "Internal error: msg"
    );
}
