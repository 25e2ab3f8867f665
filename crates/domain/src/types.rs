// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// The largest team the registration sheet can hold: the leader plus five members.
pub const MAX_TEAM_SIZE: u32 = 6;

/// The number of additional member column pairs in a registration row.
pub const MAX_ADDITIONAL_MEMBERS: usize = 5;

/// A single festival event.
///
/// Events are immutable once loaded into an [`crate::EventCatalog`]. Only the
/// slug, title, and team-size bounds are consumed by registration; the
/// remaining fields are descriptive content for the listing and detail views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Stable unique identifier.
    pub slug: String,
    /// Display name.
    pub title: String,
    /// Smallest permitted team, leader included.
    pub min_team_size: u32,
    /// Largest permitted team, leader included.
    pub max_team_size: u32,
    /// One-line teaser.
    #[serde(default)]
    pub description: String,
    /// Listing category (e.g. "Technology").
    #[serde(default)]
    pub category: String,
    /// Full description for the detail view.
    #[serde(default)]
    pub long_description: String,
    /// Event rules, in display order.
    #[serde(default)]
    pub rules: Vec<String>,
    /// Human-readable schedule (e.g. "March 5, 2026 — 10:00 AM to 4:00 PM").
    #[serde(default)]
    pub schedule: String,
    /// Where the event takes place.
    #[serde(default)]
    pub venue: String,
}

impl Event {
    /// Creates an event with the given team-size bounds and no descriptive content.
    ///
    /// # Arguments
    ///
    /// * `slug` - The unique identifier
    /// * `title` - The display name
    /// * `min_team_size` - The smallest permitted team
    /// * `max_team_size` - The largest permitted team
    #[must_use]
    pub fn new(slug: &str, title: &str, min_team_size: u32, max_team_size: u32) -> Self {
        Self {
            slug: slug.to_string(),
            title: title.to_string(),
            min_team_size,
            max_team_size,
            description: String::new(),
            category: String::new(),
            long_description: String::new(),
            rules: Vec::new(),
            schedule: String::new(),
            venue: String::new(),
        }
    }

    /// Returns whether `team_size` lies within this event's bounds.
    #[must_use]
    pub const fn accepts_team_size(&self, team_size: u32) -> bool {
        team_size >= self.min_team_size && team_size <= self.max_team_size
    }
}

/// One additional team member (member 2 and onward).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeamMember {
    /// The member's full name.
    pub name: String,
    /// The member's email address.
    pub email: String,
}

impl TeamMember {
    /// Creates a team member.
    #[must_use]
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

/// The in-progress registration held by one client session, and the typed
/// form of a decoded submission.
///
/// `selected_events` has set semantics: [`Self::select`] never inserts a
/// duplicate, and insertion order is kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationDraft {
    /// The leader's full name.
    pub name: String,
    /// The leader's email address.
    pub email: String,
    /// The leader's college or institution.
    pub college: String,
    /// The leader's phone number.
    pub phone: String,
    /// Total team size, leader included.
    pub team_size: u32,
    /// Selected event slugs.
    pub selected_events: Vec<String>,
    /// Additional members, in order.
    pub team_members: Vec<TeamMember>,
}

impl Default for RegistrationDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            college: String::new(),
            phone: String::new(),
            team_size: 1,
            selected_events: Vec::new(),
            team_members: Vec::new(),
        }
    }
}

impl RegistrationDraft {
    /// Returns whether `slug` is currently selected.
    #[must_use]
    pub fn is_selected(&self, slug: &str) -> bool {
        self.selected_events.iter().any(|s| s == slug)
    }

    /// Adds `slug` to the selection. Returns `false` if it was already selected.
    pub fn select(&mut self, slug: &str) -> bool {
        if self.is_selected(slug) {
            return false;
        }
        self.selected_events.push(slug.to_string());
        true
    }

    /// Removes `slug` from the selection. Returns `false` if it was not selected.
    pub fn deselect(&mut self, slug: &str) -> bool {
        let before: usize = self.selected_events.len();
        self.selected_events.retain(|s| s != slug);
        before != self.selected_events.len()
    }

    /// Number of additional members implied by the team size.
    #[must_use]
    pub fn expected_members(&self) -> usize {
        usize::try_from(self.team_size.saturating_sub(1)).unwrap_or(usize::MAX)
    }

    /// Sets the team size and resizes `team_members` to `team_size - 1`.
    ///
    /// Members that still fit keep their values and order; the tail is
    /// truncated or padded with empty members. Slots never exceed
    /// [`MAX_ADDITIONAL_MEMBERS`], whatever the team size.
    pub fn set_team_size(&mut self, team_size: u32) {
        self.team_size = team_size;
        let expected: usize = self.expected_members().min(MAX_ADDITIONAL_MEMBERS);
        self.team_members.resize_with(expected, TeamMember::default);
    }
}

/// A validated, normalized registration, ready to append as one sheet row.
///
/// Records are built once by the submission gateway and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRecord {
    timestamp: String,
    name: String,
    email: String,
    college: String,
    phone: String,
    event_titles: Vec<String>,
    team_size: u32,
    team_members: Vec<TeamMember>,
}

impl RegistrationRecord {
    /// Builds a record from a draft that has already passed validation.
    ///
    /// All strings are trimmed, the leader's email is lowercased, and the
    /// member list is truncated to `team_size - 1` entries. Member emails keep
    /// their case.
    ///
    /// # Arguments
    ///
    /// * `draft` - The validated draft
    /// * `event_titles` - Display titles of the selected events, in selection order
    /// * `timestamp` - The ISO-8601 receipt time
    #[must_use]
    pub fn from_validated(draft: &RegistrationDraft, event_titles: Vec<String>, timestamp: String) -> Self {
        let team_members: Vec<TeamMember> = draft
            .team_members
            .iter()
            .take(draft.expected_members())
            .map(|m| TeamMember::new(m.name.trim(), m.email.trim()))
            .collect();

        Self {
            timestamp,
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_lowercase(),
            college: draft.college.trim().to_string(),
            phone: draft.phone.trim().to_string(),
            event_titles,
            team_size: draft.team_size,
            team_members,
        }
    }

    /// Returns the ISO-8601 receipt timestamp.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Returns the leader's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the leader's lowercased email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the college or institution.
    #[must_use]
    pub fn college(&self) -> &str {
        &self.college
    }

    /// Returns the leader's phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns the selected event titles.
    #[must_use]
    pub fn event_titles(&self) -> &[String] {
        &self.event_titles
    }

    /// Returns the event titles as one comma-separated cell value.
    #[must_use]
    pub fn events_column(&self) -> String {
        self.event_titles.join(", ")
    }

    /// Returns the total team size.
    #[must_use]
    pub const fn team_size(&self) -> u32 {
        self.team_size
    }

    /// Returns the additional members (exactly `team_size - 1` of them).
    #[must_use]
    pub fn team_members(&self) -> &[TeamMember] {
        &self.team_members
    }
}
