use log::debug;

use crate::{Category, Exercise, Experience, Force, Load, Mechanic, SessionDuration};

/// Inclusive bounds of the total exercise count of a workout, warmup and
/// cooldown included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeRange {
    pub min: u32,
    pub max: u32,
}

impl VolumeRange {
    pub const FLOOR: u32 = 2;
    pub const CEILING: u32 = 12;

    #[must_use]
    pub fn target(self) -> u32 {
        (self.min + self.max).div_ceil(2)
    }

    #[must_use]
    pub fn contains(self, count: usize) -> bool {
        u32::try_from(count).is_ok_and(|count| (self.min..=self.max).contains(&count))
    }

    #[must_use]
    pub fn slots(self) -> Slots {
        let target = self.target() as usize;
        if target >= 4 {
            Slots {
                warmups: 1,
                main: target - 2,
                cooldowns: 1,
            }
        } else {
            Slots {
                warmups: 0,
                main: target,
                cooldowns: 0,
            }
        }
    }
}

/// Number of exercises to pick per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slots {
    pub warmups: usize,
    pub main: usize,
    pub cooldowns: usize,
}

impl Slots {
    #[must_use]
    pub fn total(self) -> usize {
        self.warmups + self.main + self.cooldowns
    }
}

const VOLUME: [(Experience, u32, VolumeRange); 6] = [
    (Experience::Beginner, 30, VolumeRange { min: 3, max: 4 }),
    (Experience::Beginner, 45, VolumeRange { min: 4, max: 6 }),
    (Experience::Beginner, 60, VolumeRange { min: 5, max: 7 }),
    (Experience::Intermediate, 45, VolumeRange { min: 5, max: 7 }),
    (Experience::Intermediate, 60, VolumeRange { min: 7, max: 9 }),
    (Experience::Advanced, 45, VolumeRange { min: 6, max: 8 }),
];

/// Exercise count bounds for an experience level and session length.
///
/// Durations between two table rows are interpolated towards the middle,
/// durations outside the table shift the nearest row by one exercise per
/// quarter hour.
#[must_use]
pub fn volume(experience: Experience, duration: SessionDuration) -> VolumeRange {
    let minutes = duration.minutes();
    let rows = VOLUME
        .iter()
        .filter(|(e, _, _)| *e == experience)
        .map(|(_, m, r)| (*m, *r))
        .collect::<Vec<_>>();

    let Some(((first_minutes, first), (last_minutes, last))) = rows.first().zip(rows.last())
    else {
        return VolumeRange {
            min: VolumeRange::FLOOR,
            max: VolumeRange::FLOOR,
        };
    };

    let range = if let Some((_, exact)) = rows.iter().find(|(m, _)| *m == minutes) {
        *exact
    } else if minutes < *first_minutes {
        let steps = (first_minutes - minutes).div_ceil(15);
        let min = first.min.saturating_sub(steps).max(VolumeRange::FLOOR);
        VolumeRange {
            min,
            max: first.max.saturating_sub(steps).max(min),
        }
    } else if minutes > *last_minutes {
        let steps = (minutes - last_minutes) / 15;
        let max = (last.max + steps).min(VolumeRange::CEILING);
        VolumeRange {
            min: (last.min + steps).min(max),
            max,
        }
    } else {
        let (lower_minutes, lower, upper_minutes, upper) = rows
            .windows(2)
            .find(|w| w[0].0 < minutes && minutes < w[1].0)
            .map_or((*first_minutes, *first, *last_minutes, *last), |w| {
                (w[0].0, w[0].1, w[1].0, w[1].1)
            });
        let span = upper_minutes - lower_minutes;
        let offset = minutes - lower_minutes;
        let min = (lower.min * span + offset * (upper.min - lower.min))
            .div_ceil(span)
            .max(lower.min);
        let max = ((lower.max * span + offset * (upper.max - lower.max)) / span).min(upper.max);
        VolumeRange {
            min: min.min(max),
            max,
        }
    };

    debug!("volume for {experience:?} at {minutes} min: {range:?}");

    range
}

/// Every fourth week is a deload week.
#[must_use]
pub fn is_deload_week(week_number: u32) -> bool {
    week_number > 0 && week_number % 4 == 0
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum::AsRefStr, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SetType {
    Warmup,
    Straight,
    /// Reps count seconds.
    Hold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prescription {
    pub sets: u32,
    pub reps: u32,
    pub rest_seconds: Option<u32>,
    pub set_type: SetType,
}

#[must_use]
pub fn prescribe(experience: Experience, exercise: &Exercise, deload: bool) -> Prescription {
    match exercise.category {
        Category::Warmup => Prescription {
            sets: 1,
            reps: if experience == Experience::Beginner {
                10
            } else {
                12
            },
            rest_seconds: None,
            set_type: SetType::Warmup,
        },
        Category::Cooldown => Prescription {
            sets: 1,
            reps: if experience == Experience::Beginner {
                30
            } else {
                45
            },
            rest_seconds: None,
            set_type: SetType::Hold,
        },
        Category::Main => {
            let mut prescription = main_prescription(experience, exercise);
            if deload {
                prescription.sets = prescription.sets.saturating_sub(1).max(1);
            }
            prescription
        }
    }
}

fn main_prescription(experience: Experience, exercise: &Exercise) -> Prescription {
    if exercise.force == Force::Static {
        let (sets, seconds) = match experience {
            Experience::Beginner => (3, 30),
            Experience::Intermediate => (3, 40),
            Experience::Advanced => (4, 45),
        };
        return Prescription {
            sets,
            reps: seconds,
            rest_seconds: Some(60),
            set_type: SetType::Hold,
        };
    }

    let (sets, reps, rest) = match (experience, exercise.mechanic, exercise.load) {
        (_, Mechanic::Isolation, _) | (_, Mechanic::Compound, Load::Light) => (3, 12, 60),
        (Experience::Beginner, Mechanic::Compound, Load::Heavy) => (3, 10, 120),
        (Experience::Beginner, Mechanic::Compound, Load::Moderate)
        | (Experience::Intermediate, Mechanic::Compound, Load::Moderate) => (3, 10, 90),
        (Experience::Intermediate, Mechanic::Compound, Load::Heavy) => (4, 6, 150),
        (Experience::Advanced, Mechanic::Compound, Load::Heavy) => (5, 5, 180),
        (Experience::Advanced, Mechanic::Compound, Load::Moderate) => (4, 8, 120),
    };

    Prescription {
        sets,
        reps,
        rest_seconds: Some(rest),
        set_type: SetType::Straight,
    }
}
