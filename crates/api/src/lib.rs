//! # Absence API
//!
//! The API crate provides the web server for the slot endpoints of the
//! absence-management backend.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate HTTP requests into slot service calls
//! - **Middleware**: Map domain errors onto HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework; persistence goes through the
//! `absence-db` slot service over a SQLx PostgreSQL pool.

/// Configuration module for API settings
pub mod config;
/// Request handlers for the slot endpoints
pub mod handlers;
/// Error mapping from domain errors to HTTP responses
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use absence_db::{repositories::PgSlotRepository, service::SlotService};
use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use eyre::{Result, WrapErr};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```ignore
/// let repo = Arc::new(PgSlotRepository::new(db_pool));
/// let state = Arc::new(ApiState { slots: SlotService::new(repo) });
/// let app = absence_api::app(state);
/// ```
pub struct ApiState {
    /// Slot data service, holding the persistence handle
    pub slots: SlotService,
}

/// Builds the application router with every route attached to `state`.
///
/// Kept separate from [`start_server`] so tests can drive the router
/// in-process.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Slot management endpoints
        .merge(routes::slot::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration and database connection
///
/// This function sets up logging, wires the PostgreSQL-backed slot service
/// into the router, applies CORS, tracing and timeout layers, and serves
/// HTTP until the process is stopped.
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and other settings
/// * `db_pool` - PostgreSQL connection pool for database operations
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let repo = Arc::new(PgSlotRepository::new(db_pool));
    let state = Arc::new(ApiState {
        slots: SlotService::new(repo),
    });

    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| origin.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .wrap_err("Invalid origin in API_CORS_ORIGINS")?;

        let cors = CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .allow_origin(origins);

        app.layer(cors)
    } else {
        app
    };

    // Add request tracing and timeout middleware
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
