// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod client;
mod config;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use phoenix_reg_api::{
    ApiError, ErrorResponse, ListEventsResponse, SubmissionAccepted, SubmissionGateway,
};
use phoenix_reg_domain::Event;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{error, info};

use crate::client::ClientKey;
use crate::config::Args;

/// Body returned for any non-POST request to the submission endpoint.
const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed.";

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The submission gateway and the catalog behind it.
    gateway: SubmissionGateway,
    /// The server version reported by the health endpoint.
    version: &'static str,
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Always `"ok"`.
    status: String,
    /// The current time (RFC 3339).
    timestamp: String,
    /// The server version.
    version: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::InvalidInput { .. } | ApiError::MalformedRequest { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.user_message(),
        }
    }
}

/// Handler for POST `/register-submission`.
///
/// The raw body is handed to the gateway so that rate limiting runs before
/// any decoding.
async fn handle_register_submission(
    AxumState(app_state): AxumState<AppState>,
    ClientKey(client_key): ClientKey,
    body: Bytes,
) -> Result<Json<SubmissionAccepted>, HttpError> {
    let accepted: SubmissionAccepted = app_state
        .gateway
        .submit(&client_key, &body, OffsetDateTime::now_utc())
        .await?;
    Ok(Json(accepted))
}

/// Handler for every other method on `/register-submission`.
async fn handle_method_not_allowed() -> HttpError {
    HttpError {
        status: StatusCode::METHOD_NOT_ALLOWED,
        message: String::from(METHOD_NOT_ALLOWED_MESSAGE),
    }
}

/// Handler for GET `/health`.
async fn handle_health(AxumState(app_state): AxumState<AppState>) -> Json<HealthResponse> {
    let timestamp: String = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default();
    Json(HealthResponse {
        status: String::from("ok"),
        timestamp,
        version: app_state.version.to_string(),
    })
}

/// Handler for GET `/events`.
async fn handle_list_events(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListEventsResponse> {
    Json(app_state.gateway.list_events())
}

/// Handler for GET `/events/{slug}`.
async fn handle_get_event(
    AxumState(app_state): AxumState<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Event>, HttpError> {
    let event: Event = app_state.gateway.event(&slug)?;
    Ok(Json(event))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/register-submission",
            post(handle_register_submission).fallback(handle_method_not_allowed),
        )
        .route("/health", get(handle_health))
        .route("/events", get(handle_list_events))
        .route("/events/{slug}", get(handle_get_event))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Phoenix registration server");

    let gateway: SubmissionGateway = config::build_gateway(&args).inspect_err(|e| {
        error!(error = %e, "Invalid configuration");
    })?;

    let app_state: AppState = AppState {
        gateway,
        version: env!("CARGO_PKG_VERSION"),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: SocketAddr = SocketAddr::new(args.host, args.port);
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests;
