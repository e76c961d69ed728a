use std::collections::BTreeSet;

use chrono::Weekday;
use log::{debug, info};

use crate::{
    ActivityConflicts, BodyPart, Force, MAX_HEAVY_EXCLUDED, PreferredSplit, Region, UserProfile,
    weekday_index,
};

/// Muscle-group focus of a training day.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum::AsRefStr, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Archetype {
    Upper,
    Lower,
    Full,
    Push,
    Pull,
    Legs,
    Rest,
}

const UPPER_LOWER_FULL: [Archetype; 3] = [Archetype::Upper, Archetype::Lower, Archetype::Full];
const PUSH_PULL_LEGS: [Archetype; 3] = [Archetype::Push, Archetype::Pull, Archetype::Legs];
const FULL: [Archetype; 3] = [Archetype::Full; 3];

impl Archetype {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Archetype::Upper => "Upper Body Day",
            Archetype::Lower => "Lower Body Day",
            Archetype::Full => "Full Body Day",
            Archetype::Push => "Push Day",
            Archetype::Pull => "Pull Day",
            Archetype::Legs => "Leg Day",
            Archetype::Rest => "Rest Day",
        }
    }

    /// Body parts in priority order.
    #[must_use]
    pub fn focus(self) -> &'static [BodyPart] {
        match self {
            Archetype::Upper => &BodyPart::UPPER,
            Archetype::Lower | Archetype::Legs => &BodyPart::LOWER,
            Archetype::Full => &[
                BodyPart::Legs,
                BodyPart::Chest,
                BodyPart::Back,
                BodyPart::Glutes,
                BodyPart::Shoulders,
                BodyPart::Core,
                BodyPart::Arms,
            ],
            Archetype::Push => &[BodyPart::Chest, BodyPart::Shoulders, BodyPart::Arms],
            Archetype::Pull => &[BodyPart::Back, BodyPart::Shoulders, BodyPart::Arms],
            Archetype::Rest => &[],
        }
    }

    #[must_use]
    pub fn force(self) -> Option<Force> {
        match self {
            Archetype::Push => Some(Force::Push),
            Archetype::Pull => Some(Force::Pull),
            _ => None,
        }
    }

    #[must_use]
    pub fn region(self) -> Option<Region> {
        match self {
            Archetype::Upper | Archetype::Push | Archetype::Pull => Some(Region::Upper),
            Archetype::Lower | Archetype::Legs => Some(Region::Lower),
            Archetype::Full | Archetype::Rest => None,
        }
    }
}

/// Outcome of split planning for a single day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPlan {
    pub day: Weekday,
    pub archetype: Archetype,
    /// Archetype the rotation asked for before conflicts were considered.
    pub rotation: Archetype,
    pub focus: Vec<BodyPart>,
    pub force: Option<Force>,
    pub excluded_heavy: BTreeSet<BodyPart>,
    pub max_heavy_excluded: usize,
    pub conflicts: Vec<String>,
    pub scheduled: bool,
    pub position: usize,
}

impl DayPlan {
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.archetype != self.rotation
    }
}

/// Training days of a week, Sunday first.
#[must_use]
pub fn schedule(profile: &UserProfile) -> Vec<Weekday> {
    let days = profile.training_days.count();
    let gym_days = profile.gym_days();

    if gym_days.is_empty() {
        return (0..days)
            .filter_map(|i| crate::weekday_from_index(i64::try_from(i * 7 / days).ok()?).ok())
            .collect();
    }

    let mut scheduled = gym_days.to_vec();
    scheduled.sort_by_key(|d| weekday_index(*d));
    scheduled.dedup();
    if scheduled.len() < days {
        debug!(
            "only {} gym days available for {days} training days",
            scheduled.len()
        );
    }
    scheduled.truncate(days);
    scheduled
}

/// Decides the archetype and the heavy-movement exclusions for `day`.
#[must_use]
pub fn plan_day(profile: &UserProfile, day: Weekday, week_number: u32) -> DayPlan {
    let scheduled_days = schedule(profile);
    let week_number = week_number.max(1);
    let scheduled = scheduled_days.contains(&day);
    let position = scheduled_days
        .iter()
        .position(|d| *d == day)
        .unwrap_or_else(|| {
            scheduled_days
                .iter()
                .filter(|d| weekday_index(**d) < weekday_index(day))
                .count()
        });

    let rotation = match rotation(profile.preferred_split(), profile.training_days.count()) {
        r if r == PUSH_PULL_LEGS => {
            let offset = (week_number as usize - 1) * scheduled_days.len();
            r[(offset + position) % r.len()]
        }
        r => r[position % r.len()],
    };

    let conflicts = ActivityConflicts::on(profile.weekly_activities(), day);
    let overlaps = rotation.region().is_some_and(|region| {
        conflicts
            .excluded_heavy
            .iter()
            .any(|b| b.region() == region)
    });
    let archetype = if overlaps {
        info!(
            "{rotation} day on {day:?} conflicts with {:?}, falling back to full body",
            conflicts.activities
        );
        Archetype::Full
    } else {
        rotation
    };

    let mut focus = archetype
        .focus()
        .iter()
        .copied()
        .filter(|b| !profile.is_injured(*b))
        .collect::<Vec<_>>();
    if archetype == Archetype::Full {
        focus.sort_by_key(|b| conflicts.excluded_heavy.contains(b));
    }

    debug!(
        "planned {archetype} for {day:?} (week {week_number}, position {position}, scheduled {scheduled})"
    );

    DayPlan {
        day,
        archetype,
        rotation,
        focus,
        force: archetype.force(),
        excluded_heavy: conflicts.excluded_heavy,
        max_heavy_excluded: MAX_HEAVY_EXCLUDED,
        conflicts: conflicts.activities,
        scheduled,
        position,
    }
}

fn rotation(split: PreferredSplit, days: usize) -> [Archetype; 3] {
    match split {
        PreferredSplit::CoachChoice if days <= 2 => FULL,
        PreferredSplit::CoachChoice if days == 3 => UPPER_LOWER_FULL,
        PreferredSplit::CoachChoice | PreferredSplit::PushPullLegs => PUSH_PULL_LEGS,
        PreferredSplit::FullBody => FULL,
    }
}
