use axum::http::StatusCode;
use bookdesk_api::middleware::error_handling::{map_error, AppError};
use bookdesk_core::errors::BookingError;
use rstest::rstest;

#[rstest]
#[case(BookingError::NotFound("Booking not found".to_string()), StatusCode::NOT_FOUND)]
#[case(BookingError::Validation("Invalid input".to_string()), StatusCode::BAD_REQUEST)]
#[case(BookingError::Upstream(eyre::eyre!("Backend down")), StatusCode::BAD_GATEWAY)]
#[case(
    BookingError::Internal(Box::new(std::io::Error::new(std::io::ErrorKind::Other, "boom"))),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn test_error_status_mapping(#[case] error: BookingError, #[case] expected: StatusCode) {
    let response = map_error(error);

    assert_eq!(response.status(), expected);
}

#[test]
fn test_eyre_report_maps_to_upstream() {
    let error: AppError = eyre::eyre!("connection reset").into();

    assert!(matches!(error.0, BookingError::Upstream(_)));
    assert_eq!(error.status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn test_booking_error_conversion() {
    let error: AppError = BookingError::Validation("bad date".to_string()).into();

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
}
