//! # Booking Backend Client
//!
//! The upstream booking backend owns bookings and availability. This module
//! defines the seam the handlers talk to, plus the HTTP implementation used in
//! production. Handlers fetch fresh data on every request; nothing is cached.

use std::time::Duration;

use async_trait::async_trait;
use bookdesk_core::{
    errors::{BookingError, BookingResult},
    models::booking::BookingEnvelope,
};
use eyre::{eyre, WrapErr};
use mockall::automock;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

/// Source of raw booking and availability payloads
#[automock]
#[async_trait]
pub trait BookingBackend: Send + Sync {
    /// Fetches the `{ "Data": { ... } }` summary for one booking
    async fn fetch_booking(&self, booking_id: &str) -> BookingResult<BookingEnvelope>;

    /// Fetches the raw `/date-time` payload. The shape is not validated here.
    async fn fetch_availability(&self) -> BookingResult<Value>;
}

/// [`BookingBackend`] over HTTP with `reqwest`
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Creates a client for `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> eyre::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .wrap_err("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    async fn get(&self, path: &str) -> BookingResult<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "Requesting booking backend");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .wrap_err_with(|| format!("Request to {} failed", url))?;

        Ok(response)
    }
}

#[async_trait]
impl BookingBackend for HttpBackend {
    async fn fetch_booking(&self, booking_id: &str) -> BookingResult<BookingEnvelope> {
        let path = format!("/booking/{}", urlencoding::encode(booking_id));
        let response = self.get(&path).await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(BookingError::NotFound(format!(
                "Booking with ID {} not found",
                booking_id
            ))),
            status if !status.is_success() => {
                warn!(%status, booking_id, "Booking backend rejected booking request");
                Err(BookingError::Upstream(eyre!(
                    "Failed to fetch booking: backend returned {}",
                    status
                )))
            }
            _ => {
                let envelope = response
                    .json::<BookingEnvelope>()
                    .await
                    .wrap_err("Booking payload could not be decoded")?;
                Ok(envelope)
            }
        }
    }

    async fn fetch_availability(&self) -> BookingResult<Value> {
        let response = self.get("/date-time").await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Booking backend rejected availability request");
            return Err(BookingError::Upstream(eyre!(
                "Failed to fetch date-time: backend returned {}",
                status
            )));
        }

        // A body that is not JSON at all is treated like an empty payload.
        match response.json::<Value>().await {
            Ok(payload) => Ok(payload),
            Err(e) => {
                warn!(error = %e, "Availability payload is not JSON");
                Ok(Value::Null)
            }
        }
    }
}
