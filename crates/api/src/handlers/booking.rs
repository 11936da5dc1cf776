use axum::{
    extract::{Path, State},
    Json,
};
use bookdesk_core::{
    errors::BookingError,
    models::{
        address::AddressDetailsResponse,
        booking::{
            AddInstructionsRequest, AddInstructionsResponse, BookingDetails, BookingSummary,
            PriceBreakdown,
        },
    },
};
use std::sync::Arc;
use tracing::info;

use crate::{middleware::error_handling::AppError, ApiState};

/// Fetches a booking summary, treating an empty `Data` as a missing booking.
pub(crate) async fn load_summary(state: &ApiState, id: &str) -> Result<BookingSummary, AppError> {
    let envelope = state.backend.fetch_booking(id).await?;

    envelope
        .data
        .ok_or_else(|| AppError(BookingError::NotFound(format!("Booking with ID {} not found", id))))
}

#[axum::debug_handler]
pub async fn get_booking_details(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<BookingDetails>, AppError> {
    let summary = load_summary(&state, &id).await?;

    Ok(Json(BookingDetails::from_summary(&id, &summary)))
}

#[axum::debug_handler]
pub async fn get_address_details(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<AddressDetailsResponse>, AppError> {
    let summary = load_summary(&state, &id).await?;
    let parts = summary.address_parts();

    let response = AddressDetailsResponse {
        address: summary.address.clone().unwrap_or_default(),
        rows: parts.detail_rows(),
        parts,
        map_embed_url: summary.map_embed_url(),
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn get_price_breakdown(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<PriceBreakdown>, AppError> {
    let summary = load_summary(&state, &id).await?;

    Ok(Json(summary.price_breakdown()))
}

/// Accepts delivery instructions for a booking.
///
/// Instructions are logged, not stored.
#[axum::debug_handler]
pub async fn add_instructions(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    Json(payload): Json<AddInstructionsRequest>,
) -> Result<Json<AddInstructionsResponse>, AppError> {
    let instructions = payload.instructions.trim();
    if instructions.is_empty() {
        return Err(AppError(BookingError::Validation(
            "Instructions cannot be empty".to_string(),
        )));
    }

    let summary = load_summary(&state, &id).await?;
    let booking_ref = summary.booking_ref.unwrap_or(id);
    info!(%booking_ref, instructions, "Instructions saved");

    Ok(Json(AddInstructionsResponse {
        booking_ref,
        instructions: instructions.to_string(),
    }))
}
