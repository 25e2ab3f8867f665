// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// A registration form field that a validation error can be attributed to.
///
/// Team member fields carry the member's ordinal position within the team.
/// The leader is member 1, so additional members start at position 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    /// The leader's full name.
    Name,
    /// The leader's email address.
    Email,
    /// The leader's college or institution.
    College,
    /// The leader's phone number.
    Phone,
    /// The set of selected events.
    Events,
    /// The total team size, leader included.
    TeamSize,
    /// The name of the team member at the given position.
    MemberName(usize),
    /// The email of the team member at the given position.
    MemberEmail(usize),
}

impl std::fmt::Display for FormField {
    /// Renders the field as its submission path, e.g. `teamMembers[0].email`
    /// for member 2.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Email => write!(f, "email"),
            Self::College => write!(f, "college"),
            Self::Phone => write!(f, "phone"),
            Self::Events => write!(f, "selectedEvents"),
            Self::TeamSize => write!(f, "teamSize"),
            Self::MemberName(position) => {
                write!(f, "teamMembers[{}].name", position.saturating_sub(2))
            }
            Self::MemberEmail(position) => {
                write!(f, "teamMembers[{}].email", position.saturating_sub(2))
            }
        }
    }
}

/// Errors that can occur during catalog construction or registration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The leader's name is empty.
    MissingName,
    /// The leader's email is empty.
    MissingEmail,
    /// The leader's email does not have a `local@domain.tld` shape.
    InvalidEmail,
    /// The college or institution is empty.
    MissingCollege,
    /// The leader's phone number is empty.
    MissingPhone,
    /// The phone number contains invalid characters or has the wrong length.
    InvalidPhone,
    /// No event was selected.
    NoEventsSelected,
    /// The team size is not a positive integer.
    InvalidTeamSize,
    /// A selected slug does not exist in the catalog.
    UnknownEvent {
        /// The unknown slug.
        slug: String,
    },
    /// The selected events have disjoint team-size ranges.
    TeamSizeConflict {
        /// The largest minimum across the selected events.
        min: u32,
        /// The smallest maximum across the selected events.
        max: u32,
        /// Titles of the selected events.
        titles: Vec<String>,
    },
    /// The team size falls outside one event's range.
    TeamSizeOutOfRange {
        /// The title of the offending event.
        title: String,
        /// The event's minimum team size.
        min: u32,
        /// The event's maximum team size.
        max: u32,
    },
    /// A team member's name is empty.
    MissingMemberName {
        /// The member's ordinal position (leader is 1).
        position: usize,
    },
    /// A team member's email is empty.
    MissingMemberEmail {
        /// The member's ordinal position (leader is 1).
        position: usize,
    },
    /// A team member's email does not have a valid shape.
    InvalidMemberEmail {
        /// The member's ordinal position (leader is 1).
        position: usize,
    },
    /// An event in the catalog has an empty slug.
    EmptyEventSlug,
    /// Two events in the catalog share a slug.
    DuplicateEventSlug(String),
    /// An event's team-size bounds are not `1 <= min <= max <= MAX_TEAM_SIZE`.
    InvalidTeamSizeBounds {
        /// The event slug.
        slug: String,
        /// The configured minimum.
        min: u32,
        /// The configured maximum.
        max: u32,
    },
}

impl DomainError {
    /// Returns the form field this error is attributed to.
    ///
    /// Catalog construction errors are not tied to a form field.
    #[must_use]
    pub const fn field(&self) -> Option<FormField> {
        match self {
            Self::MissingName => Some(FormField::Name),
            Self::MissingEmail | Self::InvalidEmail => Some(FormField::Email),
            Self::MissingCollege => Some(FormField::College),
            Self::MissingPhone | Self::InvalidPhone => Some(FormField::Phone),
            Self::NoEventsSelected | Self::UnknownEvent { .. } => Some(FormField::Events),
            Self::InvalidTeamSize
            | Self::TeamSizeConflict { .. }
            | Self::TeamSizeOutOfRange { .. } => Some(FormField::TeamSize),
            Self::MissingMemberName { position } => Some(FormField::MemberName(*position)),
            Self::MissingMemberEmail { position } | Self::InvalidMemberEmail { position } => {
                Some(FormField::MemberEmail(*position))
            }
            Self::EmptyEventSlug
            | Self::DuplicateEventSlug(_)
            | Self::InvalidTeamSizeBounds { .. } => None,
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingName => write!(f, "Full name is required."),
            Self::MissingEmail => write!(f, "Email address is required."),
            Self::InvalidEmail => write!(f, "Please enter a valid email address."),
            Self::MissingCollege => write!(f, "College / institution is required."),
            Self::MissingPhone => write!(f, "Phone number is required."),
            Self::InvalidPhone => {
                write!(f, "Please enter a valid phone number (7-20 digits).")
            }
            Self::NoEventsSelected => write!(f, "Please select at least one event."),
            Self::InvalidTeamSize => write!(f, "Invalid team size."),
            Self::UnknownEvent { slug } => write!(f, "Unknown event: \"{slug}\"."),
            Self::TeamSizeConflict { min, max, titles } => {
                write!(
                    f,
                    "The selected events cannot share one team ({}): they need at least {min} and at most {max} members. Deselect an event to continue.",
                    titles.join(", ")
                )
            }
            Self::TeamSizeOutOfRange { title, min, max } => {
                let range: String = if min == max {
                    format!("exactly {min}")
                } else {
                    format!("between {min} and {max}")
                };
                let plural: &str = if *max > 1 { "s" } else { "" };
                write!(
                    f,
                    "\"{title}\" requires {range} member{plural}. Adjust your team size."
                )
            }
            Self::MissingMemberName { position } => {
                write!(f, "Name for team member {position} is required.")
            }
            Self::MissingMemberEmail { position } => {
                write!(f, "Email for team member {position} is required.")
            }
            Self::InvalidMemberEmail { position } => {
                write!(f, "Please enter a valid email for team member {position}.")
            }
            Self::EmptyEventSlug => write!(f, "Event slug cannot be empty"),
            Self::DuplicateEventSlug(slug) => {
                write!(f, "Event slug '{slug}' appears more than once in the catalog")
            }
            Self::InvalidTeamSizeBounds { slug, min, max } => {
                write!(
                    f,
                    "Event '{slug}' has invalid team-size bounds [{min}, {max}]"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
