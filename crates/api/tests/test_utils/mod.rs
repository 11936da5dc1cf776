use std::sync::Arc;

use axum_test::TestServer;
use bookdesk_api::{backend::MockBookingBackend, router, ApiState};
use bookdesk_core::models::booking::{BookingEnvelope, BookingSummary};
use serde_json::{json, Value};

pub const BOOKING_ID: &str = "BK-1";

pub struct TestContext {
    pub backend: MockBookingBackend,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            backend: MockBookingBackend::new(),
        }
    }

    /// Expects exactly one booking lookup for `BOOKING_ID` returning `envelope`.
    pub fn expect_booking(&mut self, envelope: BookingEnvelope) {
        self.backend
            .expect_fetch_booking()
            .withf(|id| id == BOOKING_ID)
            .times(1)
            .returning(move |_| Ok(envelope.clone()));
    }

    /// Expects exactly one availability fetch returning `payload`.
    pub fn expect_availability(&mut self, payload: Value) {
        self.backend
            .expect_fetch_availability()
            .times(1)
            .returning(move || Ok(payload.clone()));
    }

    // Consumes the context so mock expectations are checked when the server drops
    pub fn server(self) -> TestServer {
        let state = Arc::new(ApiState::new(Arc::new(self.backend)));
        TestServer::new(router(state)).expect("Failed to start test server")
    }
}

pub fn sample_summary() -> BookingSummary {
    BookingSummary {
        booking_ref: Some("20251119000426MPDXB".to_string()),
        date: Some("2025-11-19".to_string()),
        time: Some("10:00 AM".to_string()),
        address: Some("101 - Marina Tower - Marina - Dubai".to_string()),
        service_name: Some("Home Cleaning".to_string()),
        service_fee: 9.0,
        payment_method: Some("Cash".to_string()),
        total_pay: 241.5,
        map_latitude: Some(25.08),
        map_longitude: Some(55.14),
        service_charge: 200.0,
        cash_on_delivery_charge: 10.0,
        discount: 0.0,
        sub_total: 230.0,
        vat: 11.5,
        total: 241.5,
    }
}

pub fn sample_booking() -> BookingEnvelope {
    BookingEnvelope {
        data: Some(sample_summary()),
    }
}

pub fn sample_availability() -> Value {
    json!({
        "Data": [
            { "id": 1, "date": "2025-01-10", "time": ["9 AM", "5 PM"] },
            { "id": 2, "date": "2025-01-10", "time": ["5 PM", "1 PM"] },
            { "id": 3, "date": "2025-01-05", "time": ["noon"] }
        ]
    })
}
