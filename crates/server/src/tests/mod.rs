// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use axum::body::Body;
use axum::http::{Request, Response};
use phoenix_reg_api::{FixedWindowRateLimiter, RateLimitPolicy, SubmissionGateway};
use phoenix_reg_domain::EventCatalog;
use phoenix_reg_sheets::InMemorySheet;
use serde_json::Value;
use std::sync::Arc;

use crate::AppState;

/// Helper to create test app state backed by an in-memory sheet.
fn create_test_app_state() -> (AppState, Arc<InMemorySheet>) {
    let sheet: Arc<InMemorySheet> = Arc::new(InMemorySheet::new());
    let gateway: SubmissionGateway = SubmissionGateway::new(
        Arc::new(EventCatalog::festival()),
        Arc::new(FixedWindowRateLimiter::new(RateLimitPolicy::default())),
        sheet.clone(),
    );
    let app_state: AppState = AppState {
        gateway,
        version: "0.1.0-test",
    };
    (app_state, sheet)
}

/// Builds a JSON POST to the submission endpoint from `client`.
fn submission_request(client: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/register-submission")
        .header("content-type", "application/json")
        .header("x-forwarded-for", client)
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Reads a response body as JSON.
async fn json_body(response: Response<Body>) -> Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}
