use axum::{
    extract::{Path, State},
    Json,
};
use bookdesk_core::{
    availability::find_day,
    models::booking::{RescheduleRequest, RescheduleResponse},
    reschedule::RescheduleSelection,
};
use std::sync::Arc;
use tracing::info;

use crate::{
    handlers::{availability::load_days, booking::load_summary},
    middleware::error_handling::AppError,
    ApiState,
};

/// Checks a day/time pick against current availability.
///
/// The pick is replayed through [`RescheduleSelection`] so the same rules
/// apply as in the picker. Nothing is persisted.
///
/// # Errors
///
/// * `BookingError::NotFound` - the booking does not exist
/// * `BookingError::Validation` - the slot is not offered on that day
/// * `BookingError::Upstream` - the backend could not be reached
#[axum::debug_handler]
pub async fn reschedule_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    Json(payload): Json<RescheduleRequest>,
) -> Result<Json<RescheduleResponse>, AppError> {
    let summary = load_summary(&state, &id).await?;
    let days = load_days(&state).await?;

    let mut selection = RescheduleSelection::default();
    selection.select_day(payload.date.as_str());
    selection.select_time(&days, &payload.time)?;
    let (date, time) = selection.confirm()?;

    let display_full = find_day(&days, &date)
        .map(|day| day.display_full.clone())
        .unwrap_or_else(|| date.clone());
    let booking_ref = summary.booking_ref.unwrap_or(id);
    info!(%booking_ref, %date, %time, "Reschedule pick accepted");

    Ok(Json(RescheduleResponse {
        booking_ref,
        date,
        time,
        display_full,
    }))
}
