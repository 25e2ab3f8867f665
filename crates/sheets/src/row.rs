// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The persisted row layout.

use phoenix_reg_domain::{MAX_ADDITIONAL_MEMBERS, RegistrationRecord, TeamMember};

/// Number of columns in every row (`A` through `Q`).
pub const COLUMN_COUNT: usize = 7 + 2 * MAX_ADDITIONAL_MEMBERS;

/// Column labels, in order.
pub const HEADER_ROW: [&str; COLUMN_COUNT] = [
    "Timestamp",
    "Name",
    "Email",
    "College / Institution",
    "Phone",
    "Event(s)",
    "Team Size",
    "Member 2 – Name",
    "Member 2 – Email",
    "Member 3 – Name",
    "Member 3 – Email",
    "Member 4 – Name",
    "Member 4 – Email",
    "Member 5 – Name",
    "Member 5 – Email",
    "Member 6 – Name",
    "Member 6 – Email",
];

/// The header row as owned cells.
#[must_use]
pub fn header_row() -> Vec<String> {
    HEADER_ROW.iter().map(|label| (*label).to_string()).collect()
}

/// Lays out `record` as one row of [`COLUMN_COUNT`] cells.
///
/// Member slots past the record's team are empty strings.
#[must_use]
pub fn record_row(record: &RegistrationRecord) -> Vec<String> {
    let mut row: Vec<String> = Vec::with_capacity(COLUMN_COUNT);
    row.push(record.timestamp().to_string());
    row.push(record.name().to_string());
    row.push(record.email().to_string());
    row.push(record.college().to_string());
    row.push(record.phone().to_string());
    row.push(record.events_column());
    row.push(record.team_size().to_string());

    let empty: TeamMember = TeamMember::default();
    for index in 0..MAX_ADDITIONAL_MEMBERS {
        let member: &TeamMember = record.team_members().get(index).unwrap_or(&empty);
        row.push(member.name.clone());
        row.push(member.email.clone());
    }

    row
}
