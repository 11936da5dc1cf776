use axum::http::StatusCode;
use bookdesk_core::{
    errors::BookingError,
    models::availability::{AvailableDaysResponse, AvailableSlotsResponse},
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};

use crate::test_utils::{sample_availability, TestContext};

#[test_log::test(tokio::test)]
async fn test_list_available_days() {
    let mut ctx = TestContext::new();
    ctx.expect_availability(sample_availability());
    let server = ctx.server();

    let response = server.get("/api/availability").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: AvailableDaysResponse = response.json();
    let dates: Vec<&str> = body.days.iter().map(|d| d.date.as_str()).collect();
    assert_eq!(dates, vec!["2025-01-05", "2025-01-10"]);
    assert_eq!(body.days[1].time_slots, vec!["1 PM", "5 PM", "9 AM"]);
    assert_eq!(body.days[1].display_short, "Fri, Jan 10");
    assert_eq!(body.days[1].display_full, "Jan 10, 2025");
}

#[tokio::test]
async fn test_days_are_serialized_in_camel_case() {
    let mut ctx = TestContext::new();
    ctx.expect_availability(sample_availability());
    let server = ctx.server();

    let body: Value = server.get("/api/availability").await.json();

    assert_eq!(
        body["days"][0],
        json!({
            "id": 3,
            "date": "2025-01-05",
            "displayShort": "Sun, Jan 5",
            "displayFull": "Jan 5, 2025",
            "timeSlots": ["noon"]
        })
    );
}

#[rstest]
#[case(json!(null))]
#[case(json!({ "Message": "ok" }))]
#[case(json!({ "Data": "unavailable" }))]
#[case(json!({ "Data": [] }))]
#[tokio::test]
async fn test_malformed_payload_yields_no_days(#[case] payload: Value) {
    let mut ctx = TestContext::new();
    ctx.expect_availability(payload);
    let server = ctx.server();

    let response = server.get("/api/availability").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: AvailableDaysResponse = response.json();
    assert!(body.days.is_empty());
}

#[tokio::test]
async fn test_list_slots_for_day() {
    let mut ctx = TestContext::new();
    ctx.expect_availability(sample_availability());
    let server = ctx.server();

    let response = server
        .get("/api/availability/slots")
        .add_query_param("date", "2025-01-10")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: AvailableSlotsResponse = response.json();
    assert_eq!(body.date.as_deref(), Some("2025-01-10"));
    assert_eq!(body.slots, vec!["1 PM", "5 PM", "9 AM"]);
}

#[tokio::test]
async fn test_list_slots_for_unknown_day() {
    let mut ctx = TestContext::new();
    ctx.expect_availability(sample_availability());
    let server = ctx.server();

    let body: AvailableSlotsResponse = server
        .get("/api/availability/slots")
        .add_query_param("date", "2025-02-01")
        .await
        .json();

    assert!(body.slots.is_empty());
}

#[tokio::test]
async fn test_list_slots_without_selection() {
    let mut ctx = TestContext::new();
    ctx.expect_availability(sample_availability());
    let server = ctx.server();

    let body: AvailableSlotsResponse = server.get("/api/availability/slots").await.json();

    assert_eq!(body.date, None);
    assert!(body.slots.is_empty());
}

#[tokio::test]
async fn test_availability_upstream_failure() {
    let mut ctx = TestContext::new();
    ctx.backend
        .expect_fetch_availability()
        .times(1)
        .returning(|| Err(BookingError::Upstream(eyre::eyre!("Failed to fetch date-time"))));
    let server = ctx.server();

    let response = server.get("/api/availability").await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Failed to fetch date-time"));
}
