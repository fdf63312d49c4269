use absence_api::middleware::error_handling::{map_error, AppError};
use absence_core::errors::AbsenceError;
use axum::http::StatusCode;
use rstest::rstest;

#[rstest]
#[case(AbsenceError::NotFound("Slot with ID 4 not found".to_string()), StatusCode::NOT_FOUND)]
#[case(
    AbsenceError::SessionTypeNotFound {
        course_name: "Algorithms".to_string(),
        session_type: "TD".to_string(),
    },
    StatusCode::NOT_FOUND
)]
#[case(AbsenceError::InvalidDate("'15/03' does not match DD/MM/YYYY".to_string()), StatusCode::BAD_REQUEST)]
#[case(AbsenceError::Database(eyre::eyre!("Database error")), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(
    AbsenceError::Internal(Box::new(std::io::Error::other("Internal error"))),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn test_error_status_mapping(#[case] error: AbsenceError, #[case] expected: StatusCode) {
    let response = map_error(error);

    assert_eq!(response.status(), expected);
}

#[test]
fn test_eyre_reports_become_server_errors() {
    let error: AppError = eyre::eyre!("pool timed out").into();

    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(matches!(error.0, AbsenceError::Database(_)));
}
