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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog;
mod constraint;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use catalog::EventCatalog;
pub use constraint::{DEFAULT_MAX_TEAM_SIZE, DEFAULT_MIN_TEAM_SIZE, TeamSizeRange, resolve_team_size};
pub use error::{DomainError, FormField};
pub use types::{
    Event, MAX_ADDITIONAL_MEMBERS, MAX_TEAM_SIZE, RegistrationDraft, RegistrationRecord, TeamMember,
};
pub use validation::{
    check_registration, is_valid_email, is_valid_phone, validate_registration,
};
