use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/bookings/:id", get(handlers::booking::get_booking_details))
        .route(
            "/api/bookings/:id/address",
            get(handlers::booking::get_address_details),
        )
        .route(
            "/api/bookings/:id/price",
            get(handlers::booking::get_price_breakdown),
        )
        .route(
            "/api/bookings/:id/instructions",
            post(handlers::booking::add_instructions),
        )
        .route(
            "/api/bookings/:id/reschedule",
            post(handlers::reschedule::reschedule_booking),
        )
}
