// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire types for the registration endpoint.

use phoenix_reg_domain::{Event, RegistrationDraft, TeamMember};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Message returned with every accepted submission.
pub const SUCCESS_MESSAGE: &str = "Registration successful! Check your email for confirmation.";

/// The registration body as posted by the form.
///
/// Decoding is strict: unknown keys are rejected and every key except
/// `teamMembers` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegistrationSubmission {
    /// The leader's full name.
    pub name: String,
    /// The leader's email address.
    pub email: String,
    /// The leader's college or institution.
    pub college: String,
    /// The leader's phone number.
    pub phone: String,
    /// Total team size, leader included.
    pub team_size: i64,
    /// Selected event slugs.
    pub selected_events: Vec<String>,
    /// Additional members, in order.
    #[serde(default)]
    pub team_members: Vec<TeamMember>,
}

impl RegistrationSubmission {
    /// Decodes a submission from a raw JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MalformedRequest` if the body is not a JSON object
    /// of the expected shape.
    pub fn from_json(body: &[u8]) -> Result<Self, ApiError> {
        serde_json::from_slice(body).map_err(|e| ApiError::MalformedRequest {
            reason: e.to_string(),
        })
    }

    /// Converts the submission into a draft for validation.
    ///
    /// Non-positive team sizes become 0 and oversized ones saturate, so both
    /// fail validation rather than decoding. Repeated slugs keep only their
    /// first occurrence.
    #[must_use]
    pub fn into_draft(self) -> RegistrationDraft {
        let team_size: u32 = if self.team_size <= 0 {
            0
        } else {
            u32::try_from(self.team_size).unwrap_or(u32::MAX)
        };

        let mut draft: RegistrationDraft = RegistrationDraft {
            name: self.name,
            email: self.email,
            college: self.college,
            phone: self.phone,
            team_size,
            selected_events: Vec::with_capacity(self.selected_events.len()),
            team_members: self.team_members,
        };
        for slug in &self.selected_events {
            draft.select(slug);
        }
        draft
    }
}

impl From<&RegistrationDraft> for RegistrationSubmission {
    /// Builds the body the form posts for `draft`.
    ///
    /// Only the member slots implied by the team size are sent.
    fn from(draft: &RegistrationDraft) -> Self {
        Self {
            name: draft.name.clone(),
            email: draft.email.clone(),
            college: draft.college.clone(),
            phone: draft.phone.clone(),
            team_size: i64::from(draft.team_size),
            selected_events: draft.selected_events.clone(),
            team_members: draft
                .team_members
                .iter()
                .take(draft.expected_members())
                .cloned()
                .collect(),
        }
    }
}

/// Response body for an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAccepted {
    /// Always `true`.
    pub success: bool,
    /// Confirmation text for the registrant.
    pub message: String,
}

impl Default for SubmissionAccepted {
    fn default() -> Self {
        Self {
            success: true,
            message: String::from(SUCCESS_MESSAGE),
        }
    }
}

/// Response body for every rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable reason.
    pub error: String,
}

impl ErrorResponse {
    /// Creates an error body.
    #[must_use]
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

/// One entry of the event listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    /// Stable unique identifier.
    pub slug: String,
    /// Display name.
    pub title: String,
    /// Listing category.
    pub category: String,
    /// One-line teaser.
    pub description: String,
    /// Smallest permitted team.
    pub min_team_size: u32,
    /// Largest permitted team.
    pub max_team_size: u32,
    /// Human-readable schedule.
    pub schedule: String,
    /// Where the event takes place.
    pub venue: String,
}

impl From<&Event> for EventSummary {
    fn from(event: &Event) -> Self {
        Self {
            slug: event.slug.clone(),
            title: event.title.clone(),
            category: event.category.clone(),
            description: event.description.clone(),
            min_team_size: event.min_team_size,
            max_team_size: event.max_team_size,
            schedule: event.schedule.clone(),
            venue: event.venue.clone(),
        }
    }
}

/// Response body for the event listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEventsResponse {
    /// Events in display order.
    pub events: Vec<EventSummary>,
}
