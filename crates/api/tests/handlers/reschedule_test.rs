use axum::http::StatusCode;
use bookdesk_core::models::booking::{BookingEnvelope, RescheduleResponse};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};

use crate::test_utils::{sample_availability, sample_booking, TestContext, BOOKING_ID};

fn reschedule_path() -> String {
    format!("/api/bookings/{}/reschedule", BOOKING_ID)
}

#[test_log::test(tokio::test)]
async fn test_reschedule_to_available_slot() {
    let mut ctx = TestContext::new();
    ctx.expect_booking(sample_booking());
    ctx.expect_availability(sample_availability());
    let server = ctx.server();

    let response = server
        .post(&reschedule_path())
        .json(&json!({ "date": "2025-01-10", "time": "1 PM" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: RescheduleResponse = response.json();
    assert_eq!(
        body,
        RescheduleResponse {
            booking_ref: "20251119000426MPDXB".to_string(),
            date: "2025-01-10".to_string(),
            time: "1 PM".to_string(),
            display_full: "Jan 10, 2025".to_string(),
        }
    );
}

#[rstest]
#[case("2025-01-05", "9 AM")]
#[case("2025-01-07", "noon")]
#[case("2025-01-10", "")]
#[tokio::test]
async fn test_reschedule_to_unavailable_slot(#[case] date: &str, #[case] time: &str) {
    let mut ctx = TestContext::new();
    ctx.expect_booking(sample_booking());
    ctx.expect_availability(sample_availability());
    let server = ctx.server();

    let response = server
        .post(&reschedule_path())
        .json(&json!({ "date": date, "time": time }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Validation error:"));
}

#[tokio::test]
async fn test_reschedule_unknown_booking() {
    // Availability is never fetched for a booking that does not exist.
    let mut ctx = TestContext::new();
    ctx.expect_booking(BookingEnvelope { data: None });
    let server = ctx.server();

    let response = server
        .post(&reschedule_path())
        .json(&json!({ "date": "2025-01-10", "time": "1 PM" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reschedule_with_empty_availability() {
    let mut ctx = TestContext::new();
    ctx.expect_booking(sample_booking());
    ctx.expect_availability(json!({ "Data": null }));
    let server = ctx.server();

    let response = server
        .post(&reschedule_path())
        .json(&json!({ "date": "2025-01-10", "time": "1 PM" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
