// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The read-only table of festival events.

use crate::error::DomainError;
use crate::types::{Event, MAX_TEAM_SIZE};
use std::collections::HashSet;

/// An immutable, validated set of events.
///
/// The catalog is passed explicitly to everything that needs it so tests can
/// substitute their own events. Lookup is a linear scan over a small table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    /// Creates a catalog from `events`, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An event has an empty slug
    /// - Two events share a slug
    /// - An event's bounds are not `1 <= min <= max <= MAX_TEAM_SIZE`
    pub fn new(events: Vec<Event>) -> Result<Self, DomainError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for event in &events {
            if event.slug.trim().is_empty() {
                return Err(DomainError::EmptyEventSlug);
            }
            if !seen.insert(event.slug.as_str()) {
                return Err(DomainError::DuplicateEventSlug(event.slug.clone()));
            }
            if event.min_team_size < 1
                || event.min_team_size > event.max_team_size
                || event.max_team_size > MAX_TEAM_SIZE
            {
                return Err(DomainError::InvalidTeamSizeBounds {
                    slug: event.slug.clone(),
                    min: event.min_team_size,
                    max: event.max_team_size,
                });
            }
        }
        Ok(Self { events })
    }

    /// The built-in Phoenix 3.0 event lineup.
    #[must_use]
    pub fn festival() -> Self {
        Self {
            events: festival_events(),
        }
    }

    /// Looks up an event by slug.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.slug == slug)
    }

    /// Returns whether `slug` names an event in this catalog.
    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.get(slug).is_some()
    }

    /// All events in display order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns whether the catalog has no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Resolves every slug to its event, in the given order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownEvent` naming the first slug not in the catalog.
    pub fn resolve_all<S: AsRef<str>>(&self, slugs: &[S]) -> Result<Vec<&Event>, DomainError> {
        slugs
            .iter()
            .map(|slug| {
                self.get(slug.as_ref()).ok_or_else(|| DomainError::UnknownEvent {
                    slug: slug.as_ref().to_string(),
                })
            })
            .collect()
    }
}

fn festival_event(
    (slug, title, min, max): (&str, &str, u32, u32),
    (category, description, long_description): (&str, &str, &str),
    rules: &[&str],
    (schedule, venue): (&str, &str),
) -> Event {
    Event {
        description: description.to_string(),
        category: category.to_string(),
        long_description: long_description.to_string(),
        rules: rules.iter().map(|r| (*r).to_string()).collect(),
        schedule: schedule.to_string(),
        venue: venue.to_string(),
        ..Event::new(slug, title, min, max)
    }
}

fn festival_events() -> Vec<Event> {
    vec![
        festival_event(
            ("code-a-thon-2026", "Code-NO-Thon 2026", 2, 4),
            (
                "Technology",
                "\"The ultimate battle of logic and speed where every millisecond counts.\"",
                "Code-No-Thon 2026 is the ultimate programming competition where teams compete to solve complex algorithmic challenges under extreme time pressure. Every millisecond counts as participants race to write the most efficient, bug-free code. The event features multiple rounds of increasing difficulty, from warm-up challenges to fiendishly complex optimization problems.",
            ),
            &[
                "Teams of 2–4 members",
                "3-hour time limit per round",
                "Standard competitive programming rules apply",
                "Languages: C++, Java, Python, JavaScript",
            ],
            ("March 5, 2026 — 10:00 AM to 4:00 PM", "Computer Science Block, Lab 301"),
        ),
        festival_event(
            ("beat-the-buzzer", "Beat the Buzzer", 1, 2),
            (
                "Quizzes",
                "\"Rapid fire trivia designed for the sharpest minds in the circuit.\"",
                "Beat the Buzzer is a rapid-fire trivia competition where contestants face off in high-speed rounds of questions spanning tech, science, pop culture, and general knowledge. Reflexes and breadth of knowledge are equally important — you must buzz in before your opponents and answer correctly under pressure.",
            ),
            &[
                "Individual or pairs participation (1–2 members)",
                "Buzzer-based elimination rounds",
                "Negative marking for wrong answers",
                "Final round is open for audience participation",
            ],
            ("March 5, 2026 — 2:00 PM to 5:00 PM", "Main Auditorium"),
        ),
        festival_event(
            ("synth-wave-night", "Synth-Wave Night", 1, 6),
            (
                "Cultural",
                "\"Lose yourself in the rhythm of the neon lights and retro beats.\"",
                "Synth-Wave Night is the cultural highlight of Phoenix 3.0 — an immersive evening of retro-futuristic music, neon aesthetics, and mesmerizing performances. DJs, live electronic acts, and visual artists come together to create an unforgettable sensory experience. Step into a world of synthwave beats and neon dreams.",
            ),
            &[
                "Open to all attendees (solo or group up to 6)",
                "Dress code: retro-futuristic encouraged",
                "Photo opportunities at neon installations",
                "Food and beverages available on-site",
            ],
            ("March 5, 2026 — 7:00 PM to 11:00 PM", "Open Air Theatre"),
        ),
        festival_event(
            ("algorithm-arena", "Algorithm Arena", 1, 1),
            (
                "Technology",
                "\"Solve complex problems under pressure in our dedicated sandbox.\"",
                "Algorithm Arena is a competitive programming event focusing on algorithmic thinking and problem-solving skills. Participants work in a dedicated sandbox environment to tackle increasingly complex problems, from sorting and searching to graph theory and dynamic programming. The arena is designed to push even experienced programmers to their limits.",
            ),
            &[
                "Individual participation only (solo)",
                "5 problems of increasing difficulty",
                "2-hour time window",
                "Scoring based on correctness and time",
            ],
            ("March 6, 2026 — 10:00 AM to 12:00 PM", "Computer Science Block, Lab 201"),
        ),
        festival_event(
            ("pixel-perfect", "Pixel Perfect", 1, 2),
            (
                "Design",
                "\"Design the future with precision and aesthetics. UI/UX masterclass.\"",
                "Pixel Perfect is a UI/UX design competition where participants create stunning, user-friendly interfaces within a strict time limit. From wireframing to high-fidelity mockups, contestants must demonstrate both creative vision and technical precision. Judges evaluate based on aesthetics, usability, accessibility, and innovation.",
            ),
            &[
                "Individual or team of 2",
                "Design tools: Figma, Adobe XD, or Sketch",
                "Theme revealed at start of competition",
                "4-hour design sprint",
            ],
            ("March 6, 2026 — 10:00 AM to 2:00 PM", "Design Lab, Block A"),
        ),
        festival_event(
            ("the-grand-quiz", "The Grand Quiz", 3, 4),
            (
                "Quizzes",
                "\"Test your knowledge across all domains in our flagship event.\"",
                "The Grand Quiz is Phoenix 3.0's flagship knowledge competition — an epic battle of wits spanning technology, science, history, literature, pop culture, and more. Teams go through multiple elimination rounds, each more challenging than the last, culminating in a thrilling grand finale on the main stage.",
            ),
            &[
                "Teams of 3–4 members",
                "Multiple elimination rounds",
                "Audio-visual rounds included",
                "Grand prize for the winning team",
            ],
            ("March 6, 2026 — 2:00 PM to 6:00 PM", "Main Auditorium"),
        ),
        festival_event(
            ("code-storm", "Code Storm", 1, 1),
            (
                "Technology",
                "\"Unleash the power of logic and speed. Competitive coding showdown.\"",
                "Code Storm is a high-intensity competitive programming event where participants tackle algorithmic challenges under strict time constraints. Contestants must demonstrate strong problem-solving skills, efficiency, and coding accuracy. Problems range from data structures and algorithms to real-world logical puzzles. Rankings are determined by correctness, speed, and optimization.",
            ),
            &[
                "Individual participation only (solo)",
                "Languages allowed: C++, Java, Python",
                "Internet access prohibited during contest",
                "3-hour coding challenge",
                "Top 10 advance to rapid-fire finale round",
            ],
            ("March 6, 2026 — 1:00 PM to 3:00 PM", "Innovation Hall, Tech Block"),
        ),
    ]
}
