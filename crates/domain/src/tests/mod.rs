// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod validation;

use crate::{Event, EventCatalog, RegistrationDraft, TeamMember};

/// A small catalog with the ranges the registration scenarios rely on.
pub fn create_test_catalog() -> EventCatalog {
    EventCatalog::new(vec![
        Event::new("code-a-thon-2026", "Code-NO-Thon 2026", 2, 4),
        Event::new("algorithm-arena", "Algorithm Arena", 1, 1),
        Event::new("the-grand-quiz", "The Grand Quiz", 3, 4),
        Event::new("synth-wave-night", "Synth-Wave Night", 1, 6),
    ])
    .unwrap()
}

/// A valid solo registration for Algorithm Arena.
pub fn create_solo_draft() -> RegistrationDraft {
    RegistrationDraft {
        name: String::from("Ann"),
        email: String::from("ann@x.com"),
        college: String::from("DSCE"),
        phone: String::from("9876543210"),
        team_size: 1,
        selected_events: vec![String::from("algorithm-arena")],
        team_members: Vec::new(),
    }
}

/// A valid three-person registration for Code-NO-Thon.
pub fn create_team_draft() -> RegistrationDraft {
    RegistrationDraft {
        team_size: 3,
        selected_events: vec![String::from("code-a-thon-2026")],
        team_members: vec![
            TeamMember::new("Bob", "bob@x.com"),
            TeamMember::new("Cy", "cy@x.com"),
        ],
        ..create_solo_draft()
    }
}
