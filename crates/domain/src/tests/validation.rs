// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, EventCatalog, RegistrationDraft, TeamMember, check_registration, is_valid_email,
    is_valid_phone, validate_registration,
};

use super::{create_solo_draft, create_team_draft, create_test_catalog};

#[test]
fn test_email_shape() {
    assert!(is_valid_email("ann@x.com"));
    assert!(is_valid_email("first.last+tag@mail.example.org"));
    assert!(!is_valid_email("ann"));
    assert!(!is_valid_email("ann@x"));
    assert!(!is_valid_email("@x.com"));
    assert!(!is_valid_email("ann@.com"));
    assert!(!is_valid_email("ann@x."));
    assert!(!is_valid_email("ann@@x.com"));
    assert!(!is_valid_email("a@b@x.com"));
    assert!(!is_valid_email("ann lee@x.com"));
}

#[test]
fn test_phone_shape() {
    assert!(is_valid_phone("9876543210"));
    assert!(is_valid_phone("+91 (98765) 43-210"));
    assert!(is_valid_phone("1234567"));
    assert!(is_valid_phone("12345678901234567890"));
    assert!(!is_valid_phone("123456"));
    assert!(!is_valid_phone("123456789012345678901"));
    assert!(!is_valid_phone("98765x3210"));
}

#[test]
fn test_valid_solo_registration_passes() {
    let catalog: EventCatalog = create_test_catalog();
    let draft: RegistrationDraft = create_solo_draft();
    assert!(check_registration(&draft, &catalog).is_empty());

    let events = validate_registration(&draft, &catalog).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].slug, "algorithm-arena");
}

#[test]
fn test_valid_team_registration_passes() {
    let catalog: EventCatalog = create_test_catalog();
    assert!(validate_registration(&create_team_draft(), &catalog).is_ok());
}

#[test]
fn test_leader_fields_are_required_in_order() {
    let catalog: EventCatalog = create_test_catalog();
    let draft: RegistrationDraft = RegistrationDraft {
        name: String::from("   "),
        email: String::new(),
        college: String::new(),
        phone: String::new(),
        ..create_solo_draft()
    };

    assert_eq!(
        check_registration(&draft, &catalog),
        vec![
            DomainError::MissingName,
            DomainError::MissingEmail,
            DomainError::MissingCollege,
            DomainError::MissingPhone,
        ]
    );
    assert_eq!(
        validate_registration(&draft, &catalog).unwrap_err(),
        DomainError::MissingName
    );
}

#[test]
fn test_shape_errors_for_email_and_phone() {
    let catalog: EventCatalog = create_test_catalog();
    let draft: RegistrationDraft = RegistrationDraft {
        email: String::from("ann-at-x"),
        phone: String::from("12"),
        ..create_solo_draft()
    };
    assert_eq!(
        check_registration(&draft, &catalog),
        vec![DomainError::InvalidEmail, DomainError::InvalidPhone]
    );
}

#[test]
fn test_no_events_selected() {
    let catalog: EventCatalog = create_test_catalog();
    let draft: RegistrationDraft = RegistrationDraft {
        selected_events: Vec::new(),
        ..create_solo_draft()
    };
    assert_eq!(
        validate_registration(&draft, &catalog).unwrap_err(),
        DomainError::NoEventsSelected
    );
}

#[test]
fn test_zero_team_size_is_invalid() {
    let catalog: EventCatalog = create_test_catalog();
    let draft: RegistrationDraft = RegistrationDraft {
        team_size: 0,
        ..create_solo_draft()
    };
    assert_eq!(
        validate_registration(&draft, &catalog).unwrap_err(),
        DomainError::InvalidTeamSize
    );
}

#[test]
fn test_unknown_slug_is_rejected_by_name() {
    let catalog: EventCatalog = create_test_catalog();
    let draft: RegistrationDraft = RegistrationDraft {
        selected_events: vec![String::from("algorithm-arena"), String::from("hackathon-x")],
        ..create_solo_draft()
    };
    assert_eq!(
        validate_registration(&draft, &catalog).unwrap_err(),
        DomainError::UnknownEvent {
            slug: String::from("hackathon-x")
        }
    );
}

#[test]
fn test_conflicting_events_are_rejected_before_range_checks() {
    let catalog: EventCatalog = create_test_catalog();
    let draft: RegistrationDraft = RegistrationDraft {
        team_size: 2,
        selected_events: vec![
            String::from("code-a-thon-2026"),
            String::from("algorithm-arena"),
        ],
        team_members: vec![TeamMember::new("Bob", "bob@x.com")],
        ..create_solo_draft()
    };
    assert_eq!(
        validate_registration(&draft, &catalog).unwrap_err(),
        DomainError::TeamSizeConflict {
            min: 2,
            max: 1,
            titles: vec![
                String::from("Code-NO-Thon 2026"),
                String::from("Algorithm Arena")
            ],
        }
    );
}

#[test]
fn test_team_size_at_bounds_is_accepted() {
    let catalog: EventCatalog = create_test_catalog();

    let mut at_min: RegistrationDraft = create_team_draft();
    at_min.set_team_size(2);
    assert!(validate_registration(&at_min, &catalog).is_ok());

    let mut at_max: RegistrationDraft = create_team_draft();
    at_max.team_members = vec![
        TeamMember::new("Bob", "bob@x.com"),
        TeamMember::new("Cy", "cy@x.com"),
        TeamMember::new("Di", "di@x.com"),
    ];
    at_max.team_size = 4;
    assert!(validate_registration(&at_max, &catalog).is_ok());
}

#[test]
fn test_team_size_outside_bounds_names_the_event() {
    let catalog: EventCatalog = create_test_catalog();
    let expected: DomainError = DomainError::TeamSizeOutOfRange {
        title: String::from("Code-NO-Thon 2026"),
        min: 2,
        max: 4,
    };

    let mut below: RegistrationDraft = create_team_draft();
    below.set_team_size(1);
    assert_eq!(validate_registration(&below, &catalog).unwrap_err(), expected);

    let mut above: RegistrationDraft = create_team_draft();
    above.set_team_size(5);
    assert_eq!(validate_registration(&above, &catalog).unwrap_err(), expected);
}

#[test]
fn test_range_check_reports_first_offending_event() {
    let catalog: EventCatalog = create_test_catalog();
    let mut draft: RegistrationDraft = create_team_draft();
    draft.selected_events = vec![
        String::from("synth-wave-night"),
        String::from("the-grand-quiz"),
        String::from("code-a-thon-2026"),
    ];
    draft.set_team_size(5);
    assert_eq!(
        validate_registration(&draft, &catalog).unwrap_err(),
        DomainError::TeamSizeOutOfRange {
            title: String::from("The Grand Quiz"),
            min: 3,
            max: 4,
        }
    );
}

#[test]
fn test_missing_member_is_reported_by_position() {
    let catalog: EventCatalog = create_test_catalog();
    let draft: RegistrationDraft = RegistrationDraft {
        team_members: vec![TeamMember::new("Bob", "bob@x.com")],
        ..create_team_draft()
    };
    let err: DomainError = validate_registration(&draft, &catalog).unwrap_err();
    assert_eq!(err, DomainError::MissingMemberName { position: 3 });
    assert_eq!(err.to_string(), "Name for team member 3 is required.");
}

#[test]
fn test_member_email_rules() {
    let catalog: EventCatalog = create_test_catalog();
    let draft: RegistrationDraft = RegistrationDraft {
        team_members: vec![
            TeamMember::new("Bob", ""),
            TeamMember::new("Cy", "cy-at-x"),
        ],
        ..create_team_draft()
    };
    assert_eq!(
        check_registration(&draft, &catalog),
        vec![
            DomainError::MissingMemberEmail { position: 2 },
            DomainError::InvalidMemberEmail { position: 3 },
        ]
    );
}

#[test]
fn test_excess_members_are_ignored() {
    let catalog: EventCatalog = create_test_catalog();
    let draft: RegistrationDraft = RegistrationDraft {
        team_members: vec![
            TeamMember::new("Bob", "bob@x.com"),
            TeamMember::new("Cy", "cy@x.com"),
            TeamMember::new("", "not-an-email"),
        ],
        ..create_team_draft()
    };
    assert!(validate_registration(&draft, &catalog).is_ok());
}

#[test]
fn test_members_are_not_checked_while_team_size_is_invalid() {
    let catalog: EventCatalog = create_test_catalog();
    let draft: RegistrationDraft = RegistrationDraft {
        team_size: 2,
        selected_events: vec![
            String::from("code-a-thon-2026"),
            String::from("algorithm-arena"),
        ],
        team_members: Vec::new(),
        ..create_solo_draft()
    };
    let issues: Vec<DomainError> = check_registration(&draft, &catalog);
    assert_eq!(issues.len(), 1);
    assert!(matches!(issues[0], DomainError::TeamSizeConflict { .. }));
}
