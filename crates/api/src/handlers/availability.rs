//! # Availability Handlers
//!
//! Serve the reschedule picker. Each request fetches the raw `/date-time`
//! payload, merges duplicate dates through
//! [`bookdesk_core::availability::normalize_response`] and answers from the
//! fresh result, so a superseded payload can never leak into a response.
//!
//! A malformed payload is not an error here: it simply yields no days.

use axum::{
    extract::{Query, State},
    Json,
};
use bookdesk_core::{
    availability::{normalize_response, slots_for},
    models::availability::{AvailableDaysResponse, AvailableSlotsResponse, NormalizedDay},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use crate::{middleware::error_handling::AppError, ApiState};

/// Query parameters for the slot lookup
#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    /// Date key of the selected day, exactly as returned in `days[].date`
    pub date: Option<String>,
}

pub(crate) async fn load_days(state: &ApiState) -> Result<Vec<NormalizedDay>, AppError> {
    let payload = state.backend.fetch_availability().await?;
    let days = normalize_response(&payload);
    debug!(days = days.len(), "Loaded availability");
    Ok(days)
}

/// Lists bookable days, merged and sorted chronologically
///
/// # Endpoint
///
/// ```text
/// GET /api/availability
/// ```
#[axum::debug_handler]
pub async fn list_available_days(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<AvailableDaysResponse>, AppError> {
    let days = load_days(&state).await?;

    Ok(Json(AvailableDaysResponse { days }))
}

/// Lists the time slots of one day, sorted by label
///
/// # Endpoint
///
/// ```text
/// GET /api/availability/slots?date=2025-01-10
/// ```
///
/// A missing `date` or a date with no availability returns an empty list.
#[axum::debug_handler]
pub async fn list_available_slots(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<AvailableSlotsResponse>, AppError> {
    let days = load_days(&state).await?;
    let slots = slots_for(&days, query.date.as_deref());

    Ok(Json(AvailableSlotsResponse {
        date: query.date,
        slots,
    }))
}
