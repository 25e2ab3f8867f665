// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use phoenix_reg_api::{RegistrationSubmission, SubmissionAccepted};
use phoenix_reg_domain::{
    DomainError, Event, EventCatalog, FormField, MAX_TEAM_SIZE, RegistrationDraft, TeamMember,
    TeamSizeRange, check_registration, resolve_team_size,
};
use std::ops::RangeInclusive;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::transport::{SubmissionTransport, TransportError};

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// The draft is editable and nothing is in flight.
    Editing,
    /// A submission is in flight; further submits are ignored.
    Pending,
    /// The last submission was accepted and the draft was cleared.
    Succeeded {
        /// Titles of the events that were registered.
        event_titles: Vec<String>,
        /// The server's confirmation text.
        message: String,
    },
    /// The last submission failed; the draft is kept for retry.
    Failed {
        /// The message to show the registrant.
        message: String,
    },
}

/// Owns one registrant's draft and the UI state derived from it.
#[derive(Debug, Clone)]
pub struct FormController {
    catalog: Arc<EventCatalog>,
    locked_event: Option<String>,
    draft: RegistrationDraft,
    errors: Vec<(FormField, String)>,
    status: SubmissionStatus,
}

impl FormController {
    /// Creates an empty form where any event may be selected.
    #[must_use]
    pub fn new(catalog: Arc<EventCatalog>) -> Self {
        Self {
            catalog,
            locked_event: None,
            draft: RegistrationDraft::default(),
            errors: Vec::new(),
            status: SubmissionStatus::Editing,
        }
    }

    /// Creates a form fixed to the event `slug`.
    ///
    /// The selection cannot be changed and the team size starts at the
    /// event's minimum.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownEvent` if `slug` is not in the catalog.
    pub fn with_locked_event(catalog: Arc<EventCatalog>, slug: &str) -> Result<Self, DomainError> {
        if !catalog.contains(slug) {
            return Err(DomainError::UnknownEvent {
                slug: slug.to_string(),
            });
        }

        let mut controller: Self = Self::new(catalog);
        controller.locked_event = Some(slug.to_string());
        controller.draft = controller.initial_draft();
        Ok(controller)
    }

    fn initial_draft(&self) -> RegistrationDraft {
        let mut draft: RegistrationDraft = RegistrationDraft::default();
        if let Some(event) = self.locked_event.as_deref().and_then(|s| self.catalog.get(s)) {
            draft.select(&event.slug);
            draft.set_team_size(event.min_team_size);
        }
        draft
    }

    /// Returns the current draft.
    #[must_use]
    pub const fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    /// Returns the catalog the form selects from.
    #[must_use]
    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    /// Returns the locked event slug, if any.
    #[must_use]
    pub fn locked_event(&self) -> Option<&str> {
        self.locked_event.as_deref()
    }

    /// Returns the submission status.
    #[must_use]
    pub const fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// The currently selected events, in selection order.
    #[must_use]
    pub fn selected_events(&self) -> Vec<&Event> {
        self.draft
            .selected_events
            .iter()
            .filter_map(|slug| self.catalog.get(slug))
            .collect()
    }

    /// The additional member slots to render.
    #[must_use]
    pub fn member_slots(&self) -> &[TeamMember] {
        &self.draft.team_members
    }

    /// The effective team-size range of the current selection.
    #[must_use]
    pub fn constraint(&self) -> TeamSizeRange {
        resolve_team_size(&self.draft.selected_events, &self.catalog)
    }

    /// The team sizes to offer; empty while the selection is in conflict.
    #[must_use]
    pub fn team_size_options(&self) -> RangeInclusive<u32> {
        self.constraint().options()
    }

    /// Returns whether the submit action should be enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.status != SubmissionStatus::Pending && !self.constraint().conflict
    }

    /// Recorded validation errors, in rule order.
    #[must_use]
    pub fn errors(&self) -> &[(FormField, String)] {
        &self.errors
    }

    /// The recorded error for `field`, if any.
    #[must_use]
    pub fn error_for(&self, field: FormField) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| message.as_str())
    }

    /// The field to focus: the first one with an error.
    #[must_use]
    pub fn focused_field(&self) -> Option<FormField> {
        self.errors.first().map(|(field, _)| *field)
    }

    fn clear_error(&mut self, field: FormField) {
        self.errors.retain(|(f, _)| *f != field);
    }

    fn touch(&mut self) {
        if self.status != SubmissionStatus::Pending {
            self.status = SubmissionStatus::Editing;
        }
    }

    /// Updates a leader or member text field and clears its error.
    ///
    /// Returns `false` if `field` is not a text field or names a member slot
    /// the current team size does not have.
    pub fn set_field(&mut self, field: FormField, value: &str) -> bool {
        let target: Option<&mut String> = match field {
            FormField::Name => Some(&mut self.draft.name),
            FormField::Email => Some(&mut self.draft.email),
            FormField::College => Some(&mut self.draft.college),
            FormField::Phone => Some(&mut self.draft.phone),
            FormField::MemberName(position) => position
                .checked_sub(2)
                .and_then(|i| self.draft.team_members.get_mut(i))
                .map(|m| &mut m.name),
            FormField::MemberEmail(position) => position
                .checked_sub(2)
                .and_then(|i| self.draft.team_members.get_mut(i))
                .map(|m| &mut m.email),
            FormField::Events | FormField::TeamSize => None,
        };

        let Some(target) = target else {
            return false;
        };
        *target = value.to_string();
        self.clear_error(field);
        self.touch();
        true
    }

    /// Adds or removes `slug` from the selection.
    ///
    /// A no-op on a locked form or for slugs outside the catalog. After a
    /// change, the team size is pulled into the new range unless the
    /// selection is in conflict.
    ///
    /// Returns whether the selection changed.
    pub fn toggle_event(&mut self, slug: &str) -> bool {
        if self.locked_event.is_some() || !self.catalog.contains(slug) {
            return false;
        }

        if !self.draft.deselect(slug) {
            self.draft.select(slug);
        }

        if let Some(team_size) = self.constraint().clamp(self.draft.team_size)
            && team_size != self.draft.team_size
        {
            debug!(from = self.draft.team_size, to = team_size, "Team size reclamped");
            self.set_team_size(team_size);
        }

        self.clear_error(FormField::Events);
        self.clear_error(FormField::TeamSize);
        self.touch();
        true
    }

    /// Sets the team size and resizes the member slots to match.
    ///
    /// Errors for member slots that no longer exist are dropped. Sizes
    /// outside `1..=MAX_TEAM_SIZE` are ignored.
    ///
    /// Returns whether the team size was applied.
    pub fn set_team_size(&mut self, team_size: u32) -> bool {
        if !(1..=MAX_TEAM_SIZE).contains(&team_size) {
            debug!(team_size, "Ignoring team size outside the sheet's capacity");
            return false;
        }

        self.draft.set_team_size(team_size);
        let slots: usize = self.draft.expected_members();
        self.errors.retain(|(field, _)| match field {
            FormField::MemberName(position) | FormField::MemberEmail(position) => {
                *position < slots + 2
            }
            FormField::TeamSize => false,
            _ => true,
        });
        self.touch();
        true
    }

    /// Runs every registration rule and records one error per field.
    ///
    /// Returns `true` when the draft is ready to submit.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();
        for issue in check_registration(&self.draft, &self.catalog) {
            let Some(field) = issue.field() else {
                continue;
            };
            if self.error_for(field).is_none() {
                self.errors.push((field, issue.to_string()));
            }
        }
        self.errors.is_empty()
    }

    /// Validates and, if valid, marks the form pending.
    ///
    /// Returns the body to send, or `None` if a submission is already in
    /// flight or validation failed.
    pub fn begin_submission(&mut self) -> Option<RegistrationSubmission> {
        if self.status == SubmissionStatus::Pending {
            return None;
        }

        if !self.validate() {
            debug!(error_count = self.errors.len(), "Submission blocked by validation");
            return None;
        }

        self.status = SubmissionStatus::Pending;
        Some(RegistrationSubmission::from(&self.draft))
    }

    /// Records the gateway's answer.
    ///
    /// On success the draft is cleared and the registered titles kept for the
    /// confirmation view. On failure the draft is left as it was.
    pub fn finish_submission(&mut self, outcome: Result<SubmissionAccepted, TransportError>) {
        match outcome {
            Ok(accepted) => {
                let event_titles: Vec<String> = self
                    .selected_events()
                    .iter()
                    .map(|e| e.title.clone())
                    .collect();
                self.draft = self.initial_draft();
                self.errors.clear();
                self.status = SubmissionStatus::Succeeded {
                    event_titles,
                    message: accepted.message,
                };
            }
            Err(e) => {
                warn!(error = %e, "Registration submission failed");
                self.status = SubmissionStatus::Failed {
                    message: e.user_message(),
                };
            }
        }
    }

    /// Validates, sends, and records the outcome of one submission.
    pub async fn submit<T>(&mut self, transport: &T) -> &SubmissionStatus
    where
        T: SubmissionTransport + ?Sized,
    {
        if let Some(submission) = self.begin_submission() {
            let outcome: Result<SubmissionAccepted, TransportError> =
                transport.submit(&submission).await;
            self.finish_submission(outcome);
        }
        &self.status
    }

    /// Discards the draft and starts over.
    pub fn reset(&mut self) {
        self.draft = self.initial_draft();
        self.errors.clear();
        self.status = SubmissionStatus::Editing;
    }
}
