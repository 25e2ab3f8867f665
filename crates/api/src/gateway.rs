// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use phoenix_reg_domain::{
    Event, EventCatalog, RegistrationDraft, RegistrationRecord, validate_registration,
};
use phoenix_reg_sheets::AppendService;
use std::sync::Arc;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{error, info, warn};

use crate::error::ApiError;
use crate::rate_limit::RateLimiter;
use crate::request_response::{
    EventSummary, ListEventsResponse, RegistrationSubmission, SubmissionAccepted,
};

/// The server-side gate in front of the spreadsheet.
///
/// Every submission passes, in order, through the rate limiter, the strict
/// decoder, validation against the catalog, and record construction. The
/// append is attempted only after all of those succeed, and success is
/// reported only after the append confirms.
#[derive(Clone)]
pub struct SubmissionGateway {
    catalog: Arc<EventCatalog>,
    rate_limiter: Arc<dyn RateLimiter>,
    append: Arc<dyn AppendService>,
}

impl SubmissionGateway {
    /// Creates a gateway.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The events submissions are validated against
    /// * `rate_limiter` - The per-client limiter
    /// * `append` - Where accepted records are written
    #[must_use]
    pub const fn new(
        catalog: Arc<EventCatalog>,
        rate_limiter: Arc<dyn RateLimiter>,
        append: Arc<dyn AppendService>,
    ) -> Self {
        Self {
            catalog,
            rate_limiter,
            append,
        }
    }

    /// Returns the catalog in use.
    #[must_use]
    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    /// Processes one raw submission.
    ///
    /// # Arguments
    ///
    /// * `client_key` - The caller's rate-limit key
    /// * `body` - The raw request body
    /// * `received_at` - The receipt time stamped on the record
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The client is over its allowance (`RateLimited`), whatever the body
    /// - The body does not decode (`MalformedRequest`)
    /// - A registration rule fails (`InvalidInput`)
    /// - The append fails (`Persistence`)
    pub async fn submit(
        &self,
        client_key: &str,
        body: &[u8],
        received_at: OffsetDateTime,
    ) -> Result<SubmissionAccepted, ApiError> {
        if !self
            .rate_limiter
            .check_and_increment(client_key)
            .await
            .is_allowed()
        {
            warn!(client_key = %client_key, "Submission rate limited");
            return Err(ApiError::RateLimited {
                client_key: client_key.to_string(),
            });
        }

        let submission: RegistrationSubmission =
            RegistrationSubmission::from_json(body).inspect_err(|e| {
                warn!(client_key = %client_key, error = %e, "Rejected malformed submission");
            })?;

        let record: RegistrationRecord = self.build_record(&submission.into_draft(), received_at)?;

        if let Err(e) = self.append.append_registration(&record).await {
            error!(
                client_key = %client_key,
                error = %e,
                "Failed to append registration"
            );
            return Err(e.into());
        }

        info!(
            client_key = %client_key,
            team_size = record.team_size(),
            event_count = record.event_titles().len(),
            "Registration recorded"
        );
        Ok(SubmissionAccepted::default())
    }

    /// Validates `draft` and builds the record to append.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` for the first rule that fails.
    pub fn build_record(
        &self,
        draft: &RegistrationDraft,
        received_at: OffsetDateTime,
    ) -> Result<RegistrationRecord, ApiError> {
        let events: Vec<&Event> = validate_registration(draft, &self.catalog).map_err(|e| {
            warn!(field = ?e.field(), error = %e, "Rejected invalid submission");
            ApiError::from(e)
        })?;

        let titles: Vec<String> = events.iter().map(|e| e.title.clone()).collect();
        let timestamp: String = received_at.format(&Rfc3339).map_err(|e| ApiError::Persistence {
            cause: format!("failed to format receipt timestamp: {e}"),
        })?;

        Ok(RegistrationRecord::from_validated(draft, titles, timestamp))
    }

    /// Lists every event in display order.
    #[must_use]
    pub fn list_events(&self) -> ListEventsResponse {
        ListEventsResponse {
            events: self.catalog.events().iter().map(EventSummary::from).collect(),
        }
    }

    /// Looks up one event by slug.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ResourceNotFound` if no event has `slug`.
    pub fn event(&self, slug: &str) -> Result<Event, ApiError> {
        self.catalog
            .get(slug)
            .cloned()
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("Event"),
                message: format!("Event \"{slug}\" does not exist."),
            })
    }
}
