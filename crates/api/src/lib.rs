//! # Bookdesk API
//!
//! The API crate serves the booking-details screen. It pulls raw booking and
//! availability payloads from the upstream booking backend, runs them through
//! `bookdesk-core`, and returns display-ready JSON.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Backend**: Client for the upstream booking backend
//! - **Middleware**: Error mapping shared by every handler
//! - **Config**: Handle environment and application configuration

/// Client for the upstream booking backend
pub mod backend;
/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use eyre::Result;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use crate::backend::BookingBackend;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Upstream source of bookings and availability
    pub backend: Arc<dyn BookingBackend>,
}

impl ApiState {
    pub fn new(backend: Arc<dyn BookingBackend>) -> Self {
        Self { backend }
    }
}

/// Builds the application router with every route and request tracing.
///
/// Kept separate from [`start_server`] so tests can drive the router
/// without binding a socket.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Booking details, address, price and instructions
        .merge(routes::booking::routes())
        // Day/time availability for rescheduling
        .merge(routes::availability::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(origins)
}

/// Starts the API server with the provided configuration and backend
///
/// Initializes logging, builds the router, applies CORS and request
/// timeouts, and serves until the listener fails.
///
/// # Example
///
/// ```no_run
/// use std::{sync::Arc, time::Duration};
/// use bookdesk_api::{backend::HttpBackend, config::ApiConfig, start_server};
///
/// # async fn run() -> eyre::Result<()> {
/// let config = ApiConfig::from_env()?;
/// let backend = HttpBackend::new(&config.backend_url, Duration::from_secs(config.request_timeout))?;
/// start_server(config, Arc::new(backend)).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig, backend: Arc<dyn BookingBackend>) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(backend));
    let app = router(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    // Add request timeout middleware
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)))
            .into_inner(),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(backend = %config.backend_url, "Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
