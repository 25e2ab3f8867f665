// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Registration validation rules.
//!
//! The same ordered rule list backs both the client form (which collects every
//! failure) and the submission gateway (which stops at the first).

use crate::catalog::EventCatalog;
use crate::constraint::{DEFAULT_MAX_TEAM_SIZE, TeamSizeRange};
use crate::error::DomainError;
use crate::types::{Event, RegistrationDraft, TeamMember};

/// Returns whether `email` has a `local@domain.tld` shape.
///
/// The address must contain no whitespace, exactly one `@` with a non-empty
/// local part, and a domain with a `.` that has characters on both sides.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Returns whether `phone` is 7 to 20 characters of digits, whitespace,
/// `+`, `-`, `(`, `)`, or `.`.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    let length: usize = phone.chars().count();
    (7..=20).contains(&length)
        && phone.chars().all(|c| {
            c.is_ascii_digit() || c.is_whitespace() || matches!(c, '+' | '-' | '(' | ')' | '.')
        })
}

fn check_leader_fields(draft: &RegistrationDraft, issues: &mut Vec<DomainError>) {
    if draft.name.trim().is_empty() {
        issues.push(DomainError::MissingName);
    }

    let email: &str = draft.email.trim();
    if email.is_empty() {
        issues.push(DomainError::MissingEmail);
    } else if !is_valid_email(email) {
        issues.push(DomainError::InvalidEmail);
    }

    if draft.college.trim().is_empty() {
        issues.push(DomainError::MissingCollege);
    }

    let phone: &str = draft.phone.trim();
    if phone.is_empty() {
        issues.push(DomainError::MissingPhone);
    } else if !is_valid_phone(phone) {
        issues.push(DomainError::InvalidPhone);
    }
}

/// Checks `team_size` against each selected event.
///
/// A conflict between events is reported before any single event's range so
/// the user learns the selection itself is unsatisfiable.
fn check_team_size_fits(team_size: u32, events: &[&Event]) -> Result<(), DomainError> {
    let range: TeamSizeRange = TeamSizeRange::intersect(events.iter().copied());
    if range.conflict {
        return Err(DomainError::TeamSizeConflict {
            min: range.min,
            max: range.max,
            titles: events.iter().map(|e| e.title.clone()).collect(),
        });
    }

    match events.iter().find(|e| !e.accepts_team_size(team_size)) {
        Some(event) => Err(DomainError::TeamSizeOutOfRange {
            title: event.title.clone(),
            min: event.min_team_size,
            max: event.max_team_size,
        }),
        None => Ok(()),
    }
}

fn check_team_members(draft: &RegistrationDraft, issues: &mut Vec<DomainError>) {
    let empty: TeamMember = TeamMember::default();
    for index in 0..draft.expected_members() {
        let member: &TeamMember = draft.team_members.get(index).unwrap_or(&empty);
        let position: usize = index + 2;

        if member.name.trim().is_empty() {
            issues.push(DomainError::MissingMemberName { position });
        }

        let email: &str = member.email.trim();
        if email.is_empty() {
            issues.push(DomainError::MissingMemberEmail { position });
        } else if !is_valid_email(email) {
            issues.push(DomainError::InvalidMemberEmail { position });
        }
    }
}

/// Runs every registration rule and returns all failures in rule order.
///
/// At most one error is reported per form field. Team members are only
/// checked once the team size itself is acceptable, since the number of
/// member slots depends on it.
///
/// # Arguments
///
/// * `draft` - The registration to check
/// * `catalog` - The catalog the selected slugs must resolve in
#[must_use]
pub fn check_registration(draft: &RegistrationDraft, catalog: &EventCatalog) -> Vec<DomainError> {
    let mut issues: Vec<DomainError> = Vec::new();

    check_leader_fields(draft, &mut issues);

    if draft.selected_events.is_empty() {
        issues.push(DomainError::NoEventsSelected);
    }

    if draft.team_size == 0 {
        issues.push(DomainError::InvalidTeamSize);
    }

    let mut team_size_ok: bool = draft.team_size > 0;
    if draft.selected_events.is_empty() {
        // Nothing binds yet beyond what the sheet can hold.
        team_size_ok = team_size_ok && draft.team_size <= DEFAULT_MAX_TEAM_SIZE;
    } else {
        match catalog.resolve_all(&draft.selected_events) {
            Err(unknown) => {
                issues.push(unknown);
                team_size_ok = false;
            }
            Ok(events) if team_size_ok => {
                if let Err(e) = check_team_size_fits(draft.team_size, &events) {
                    issues.push(e);
                    team_size_ok = false;
                }
            }
            Ok(_) => {}
        }
    }

    if team_size_ok {
        check_team_members(draft, &mut issues);
    }

    issues
}

/// Validates a submission and resolves its selected events.
///
/// This is the server-side gate: it never trusts client-side checks and
/// reports only the first failing rule.
///
/// # Arguments
///
/// * `draft` - The decoded submission
/// * `catalog` - The catalog the selected slugs must resolve in
///
/// # Returns
///
/// * `Ok(events)` - the selected events, in selection order
/// * `Err(DomainError)` - the first rule that failed
///
/// # Errors
///
/// Returns the first failure reported by [`check_registration`].
pub fn validate_registration<'a>(
    draft: &RegistrationDraft,
    catalog: &'a EventCatalog,
) -> Result<Vec<&'a Event>, DomainError> {
    if let Some(first) = check_registration(draft, catalog).into_iter().next() {
        return Err(first);
    }
    catalog.resolve_all(&draft.selected_events)
}
