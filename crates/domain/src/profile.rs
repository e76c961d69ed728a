use std::{collections::BTreeSet, slice::Iter};

use chrono::Weekday;
use derive_more::{Display, Into};

use crate::{BodyPart, Equipment, InputError, Property};

/// Training background of a user as supplied with every generation request.
///
/// The generator never mutates a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub experience: Experience,
    pub session_duration: SessionDuration,
    pub training_days: TrainingDays,
    pub available_equipment: BTreeSet<Equipment>,
    pub injuries: Vec<BodyPart>,
    pub questionnaire: Option<AdvancedQuestionnaire>,
}

impl UserProfile {
    #[must_use]
    pub fn new(
        experience: Experience,
        session_duration: SessionDuration,
        training_days: TrainingDays,
    ) -> Self {
        Self {
            experience,
            session_duration,
            training_days,
            available_equipment: BTreeSet::new(),
            injuries: vec![],
            questionnaire: None,
        }
    }

    #[must_use]
    pub fn owns_equipment(&self) -> bool {
        !self.available_equipment.is_empty()
    }

    #[must_use]
    pub fn is_injured(&self, body_part: BodyPart) -> bool {
        self.injuries.contains(&body_part)
    }

    #[must_use]
    pub fn gym_days(&self) -> &[Weekday] {
        self.questionnaire
            .as_ref()
            .map_or(&[], |q| q.gym_days.as_slice())
    }

    #[must_use]
    pub fn preferred_split(&self) -> PreferredSplit {
        self.questionnaire
            .as_ref()
            .map_or(PreferredSplit::default(), |q| q.preferred_split)
    }

    #[must_use]
    pub fn weekly_activities(&self) -> &[WeeklyActivity] {
        self.questionnaire
            .as_ref()
            .map_or(&[], |q| q.weekly_activities.as_slice())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AdvancedQuestionnaire {
    pub gym_days: Vec<Weekday>,
    pub preferred_split: PreferredSplit,
    pub weekly_activities: Vec<WeeklyActivity>,
}

/// Activity outside the gym that competes for recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyActivity {
    pub name: String,
    pub day: Weekday,
    pub time_window: TimeWindow,
    pub intensity: Intensity,
}

impl WeeklyActivity {
    #[must_use]
    pub fn is_hard(&self) -> bool {
        self.intensity == Intensity::Hard
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Experience {
    Beginner,
    Intermediate,
    Advanced,
}

impl Property for Experience {
    fn iter() -> Iter<'static, Experience> {
        static EXPERIENCE: [Experience; 3] = [
            Experience::Beginner,
            Experience::Intermediate,
            Experience::Advanced,
        ];
        EXPERIENCE.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Experience::Beginner => "Beginner",
            Experience::Intermediate => "Intermediate",
            Experience::Advanced => "Advanced",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Experience::Beginner => &["novice"],
            Experience::Intermediate => &[],
            Experience::Advanced => &["expert"],
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum PreferredSplit {
    #[default]
    CoachChoice,
    PushPullLegs,
    FullBody,
}

impl Property for PreferredSplit {
    fn iter() -> Iter<'static, PreferredSplit> {
        static SPLITS: [PreferredSplit; 3] = [
            PreferredSplit::CoachChoice,
            PreferredSplit::PushPullLegs,
            PreferredSplit::FullBody,
        ];
        SPLITS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            PreferredSplit::CoachChoice => "Coach Choice",
            PreferredSplit::PushPullLegs => "Push Pull Legs",
            PreferredSplit::FullBody => "Full Body",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            PreferredSplit::CoachChoice => &["coach", "auto", "any", "no preference"],
            PreferredSplit::PushPullLegs => &["ppl"],
            PreferredSplit::FullBody => &["full"],
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum TimeWindow {
    Morning,
    Afternoon,
    Evening,
    #[default]
    Anytime,
}

impl Property for TimeWindow {
    fn iter() -> Iter<'static, TimeWindow> {
        static TIME_WINDOWS: [TimeWindow; 4] = [
            TimeWindow::Morning,
            TimeWindow::Afternoon,
            TimeWindow::Evening,
            TimeWindow::Anytime,
        ];
        TIME_WINDOWS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            TimeWindow::Morning => "Morning",
            TimeWindow::Afternoon => "Afternoon",
            TimeWindow::Evening => "Evening",
            TimeWindow::Anytime => "Anytime",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            TimeWindow::Morning => &["am"],
            TimeWindow::Afternoon => &["midday", "noon"],
            TimeWindow::Evening => &["pm", "night"],
            TimeWindow::Anytime => &["flexible", "any"],
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Intensity {
    Light,
    #[default]
    Moderate,
    Hard,
}

impl Property for Intensity {
    fn iter() -> Iter<'static, Intensity> {
        static INTENSITIES: [Intensity; 3] =
            [Intensity::Light, Intensity::Moderate, Intensity::Hard];
        INTENSITIES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Intensity::Light => "Light",
            Intensity::Moderate => "Moderate",
            Intensity::Hard => "Hard",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Intensity::Light => &["low", "easy"],
            Intensity::Moderate => &["medium"],
            Intensity::Hard => &["high", "intense", "vigorous"],
        }
    }
}

/// Planned session length in minutes.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionDuration(u32);

impl SessionDuration {
    pub const MIN: u32 = 10;
    pub const MAX: u32 = 240;

    pub fn new(minutes: i64) -> Result<Self, InputError> {
        match u32::try_from(minutes) {
            Ok(minutes) if (Self::MIN..=Self::MAX).contains(&minutes) => Ok(Self(minutes)),
            _ => Err(InputError::OutOfRange {
                field: "sessionDuration",
                value: minutes,
            }),
        }
    }

    #[must_use]
    pub fn minutes(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrainingDays(u32);

impl TrainingDays {
    pub fn new(days: i64) -> Result<Self, InputError> {
        match u32::try_from(days) {
            Ok(days) if (1..=7).contains(&days) => Ok(Self(days)),
            _ => Err(InputError::OutOfRange {
                field: "trainingDaysPerWeek",
                value: days,
            }),
        }
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.0 as usize
    }
}

/// Maps a wire day index (0 = Sunday) to a weekday.
pub fn weekday_from_index(index: i64) -> Result<Weekday, InputError> {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 7)
        .and_then(|i| Weekday::try_from((i + 6) % 7).ok())
        .ok_or(InputError::OutOfRange {
            field: "dayOfWeek",
            value: index,
        })
}

#[must_use]
pub fn weekday_index(day: Weekday) -> u8 {
    u8::try_from(day.num_days_from_sunday()).unwrap_or_default()
}
