use std::collections::BTreeSet;

use chrono::Weekday;
use log::debug;

use crate::{BodyPart, TimeWindow, WeeklyActivity};

/// Upper bound of heavy compound exercises for body parts loaded by a
/// conflicting activity.
pub const MAX_HEAVY_EXCLUDED: usize = 2;

const FULL_CONTACT: &[BodyPart] = &[
    BodyPart::Chest,
    BodyPart::Back,
    BodyPart::Shoulders,
    BodyPart::Arms,
    BodyPart::Legs,
    BodyPart::Glutes,
];
const STRIKING: &[BodyPart] = &[
    BodyPart::Chest,
    BodyPart::Back,
    BodyPart::Shoulders,
    BodyPart::Arms,
];
const PULLING: &[BodyPart] = &[BodyPart::Back, BodyPart::Shoulders, BodyPart::Arms];
const RACKET: &[BodyPart] = &[BodyPart::Shoulders, BodyPart::Arms];
const ENDURANCE: &[BodyPart] = &[BodyPart::Legs, BodyPart::Glutes];
const RECOVERY: &[BodyPart] = &[];

/// First matching row wins, so more specific sports come first.
const DEMAND: [(&[&str], &[BodyPart]); 6] = [
    (
        &[
            "mma",
            "wrestling",
            "jiu jitsu",
            "jiujitsu",
            "bjj",
            "crossfit",
            "hiit",
            "rugby",
            "martial arts",
        ],
        FULL_CONTACT,
    ),
    (&["boxing", "muay thai", "kickboxing"], STRIKING),
    (&["swimming", "rowing", "climbing", "bouldering"], PULLING),
    (
        &["tennis", "padel", "squash", "volleyball", "baseball"],
        RACKET,
    ),
    (
        &[
            "running",
            "cycling",
            "spinning",
            "soccer",
            "football",
            "basketball",
            "hiking",
            "skiing",
            "dance",
        ],
        ENDURANCE,
    ),
    (&["yoga", "pilates", "walking", "stretching"], RECOVERY),
];

/// Body parts an activity loads. Unknown activities are assumed to load
/// everything except core.
#[must_use]
pub fn loaded_body_parts(activity: &str) -> &'static [BodyPart] {
    let words = activity
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    // Keywords match whole words only.
    let name = format!(" {words} ");
    DEMAND
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| name.contains(&format!(" {k} "))))
        .map_or(FULL_CONTACT, |(_, body_parts)| *body_parts)
}

/// Hard activities competing with a training day.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ActivityConflicts {
    pub activities: Vec<String>,
    pub excluded_heavy: BTreeSet<BodyPart>,
}

impl ActivityConflicts {
    /// Collects hard activities on `day` and hard evening activities on the
    /// day before.
    #[must_use]
    pub fn on(activities: &[WeeklyActivity], day: Weekday) -> Self {
        let mut conflicts = Self::default();
        for activity in activities.iter().filter(|a| a.is_hard()) {
            let same_day = activity.day == day;
            let evening_before =
                activity.day == day.pred() && activity.time_window == TimeWindow::Evening;
            if !same_day && !evening_before {
                continue;
            }
            let body_parts = loaded_body_parts(&activity.name);
            debug!(
                "{} on {:?} conflicts with {day:?}, loads {body_parts:?}",
                activity.name, activity.day
            );
            conflicts.activities.push(activity.name.clone());
            conflicts.excluded_heavy.extend(body_parts);
        }
        conflicts
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}
