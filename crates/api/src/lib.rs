// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The registration submission gateway.
//!
//! This crate is transport-agnostic: it takes a client key, a raw body, and a
//! receipt time, and returns either an acceptance or an [`ApiError`]. The
//! server crate owns the mapping to HTTP.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod gateway;
mod rate_limit;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, MALFORMED_REQUEST_MESSAGE, PERSISTENCE_FAILURE_MESSAGE, RATE_LIMITED_MESSAGE,
};
pub use gateway::SubmissionGateway;
pub use rate_limit::{
    CLEANUP_INTERVAL, DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW, FixedWindowRateLimiter, RateDecision,
    RateLimitPolicy, RateLimiter,
};
pub use request_response::{
    ErrorResponse, EventSummary, ListEventsResponse, RegistrationSubmission, SUCCESS_MESSAGE,
    SubmissionAccepted,
};
