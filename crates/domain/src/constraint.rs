// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Team-size constraint resolution across a set of selected events.

use crate::catalog::EventCatalog;
use crate::types::{Event, MAX_TEAM_SIZE};

/// Lower bound reported when no event is selected.
pub const DEFAULT_MIN_TEAM_SIZE: u32 = 1;

/// Upper bound reported when no event is selected.
pub const DEFAULT_MAX_TEAM_SIZE: u32 = MAX_TEAM_SIZE;

/// The effective team-size range of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamSizeRange {
    /// The largest `min_team_size` over the selected events.
    pub min: u32,
    /// The smallest `max_team_size` over the selected events.
    pub max: u32,
    /// `true` when `min > max`, i.e. no team size satisfies every event.
    pub conflict: bool,
}

impl Default for TeamSizeRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_TEAM_SIZE,
            max: DEFAULT_MAX_TEAM_SIZE,
            conflict: false,
        }
    }
}

impl TeamSizeRange {
    /// Intersects the team-size bounds of `events`.
    ///
    /// Returns the permissive default when `events` is empty.
    #[must_use]
    pub fn intersect<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a Event>,
    {
        let mut bounds: Option<(u32, u32)> = None;
        for event in events {
            bounds = Some(match bounds {
                None => (event.min_team_size, event.max_team_size),
                Some((min, max)) => (min.max(event.min_team_size), max.min(event.max_team_size)),
            });
        }

        bounds.map_or_else(Self::default, |(min, max)| Self {
            min,
            max,
            conflict: min > max,
        })
    }

    /// Returns whether `team_size` satisfies every selected event.
    #[must_use]
    pub const fn contains(&self, team_size: u32) -> bool {
        !self.conflict && team_size >= self.min && team_size <= self.max
    }

    /// Pulls `team_size` to the nearest bound.
    ///
    /// Returns `None` when the range is in conflict; the team size is then
    /// left unresolved until the selection changes.
    #[must_use]
    pub const fn clamp(&self, team_size: u32) -> Option<u32> {
        if self.conflict {
            return None;
        }
        if team_size < self.min {
            Some(self.min)
        } else if team_size > self.max {
            Some(self.max)
        } else {
            Some(team_size)
        }
    }

    /// The team sizes a user may pick; empty when in conflict since `min > max`.
    #[must_use]
    pub const fn options(&self) -> std::ops::RangeInclusive<u32> {
        self.min..=self.max
    }
}

/// Resolves the effective team-size range of `selected` slugs.
///
/// Slugs that are not in `catalog` are skipped; rejecting them is the job of
/// submission validation. Pure and O(k) in the number of selected slugs.
///
/// # Arguments
///
/// * `selected` - The selected event slugs
/// * `catalog` - The event catalog to resolve against
#[must_use]
pub fn resolve_team_size<S: AsRef<str>>(selected: &[S], catalog: &EventCatalog) -> TeamSizeRange {
    TeamSizeRange::intersect(selected.iter().filter_map(|slug| catalog.get(slug.as_ref())))
}
