#![allow(clippy::missing_errors_doc)]

use chrono::NaiveDate;
use liftplan_domain::{self as domain, Property};
use uuid::Uuid;

/// Lowercase wire name of a property, words joined by underscores.
fn wire<P: Property>(property: P) -> String {
    property.name().to_lowercase().replace(' ', "_")
}

fn parse<P: Property>(field: &'static str, value: &str) -> Result<P, domain::InputError> {
    P::parse(value).ok_or_else(|| domain::InputError::Unknown {
        field,
        value: value.to_string(),
    })
}

fn parse_optional<P: Property + Default>(
    field: &'static str,
    value: Option<&str>,
) -> Result<P, domain::InputError> {
    value.map_or(Ok(P::default()), |value| parse(field, value))
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub user_profile: Option<UserProfile>,
    pub day_of_week: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_number: Option<i64>,
    #[serde(default)]
    pub recent_exercises: Vec<String>,
}

impl TryFrom<GenerationRequest> for domain::GenerationRequest {
    type Error = domain::InputError;

    fn try_from(value: GenerationRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            profile: value
                .user_profile
                .ok_or(domain::InputError::Missing("userProfile"))?
                .try_into()?,
            day: domain::weekday_from_index(
                value
                    .day_of_week
                    .ok_or(domain::InputError::Missing("dayOfWeek"))?,
            )?,
            week_number: week_number(value.week_number)?,
            recent_exercises: value.recent_exercises,
        })
    }
}

/// Input of a week plan: a profile without a day.
#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeekRequest {
    pub user_profile: Option<UserProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_number: Option<i64>,
}

impl WeekRequest {
    pub fn into_parts(self) -> Result<(domain::UserProfile, u32), domain::InputError> {
        Ok((
            self.user_profile
                .ok_or(domain::InputError::Missing("userProfile"))?
                .try_into()?,
            week_number(self.week_number)?,
        ))
    }
}

fn week_number(value: Option<i64>) -> Result<u32, domain::InputError> {
    value.map_or(Ok(1), |value| {
        u32::try_from(value).map_err(|_| domain::InputError::OutOfRange {
            field: "weekNumber",
            value,
        })
    })
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub experience: Option<String>,
    #[serde(alias = "sessionDurationMinutes")]
    pub session_duration: Option<i64>,
    pub training_days_per_week: Option<i64>,
    #[serde(default)]
    pub available_equipment: Vec<String>,
    #[serde(default)]
    pub injuries: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced_questionnaire: Option<AdvancedQuestionnaire>,
}

impl From<&domain::UserProfile> for UserProfile {
    fn from(value: &domain::UserProfile) -> Self {
        Self {
            experience: Some(wire(value.experience)),
            session_duration: Some(i64::from(value.session_duration.minutes())),
            training_days_per_week: i64::try_from(value.training_days.count()).ok(),
            available_equipment: value.available_equipment.iter().copied().map(wire).collect(),
            injuries: value.injuries.iter().copied().map(wire).collect(),
            advanced_questionnaire: value.questionnaire.as_ref().map(AdvancedQuestionnaire::from),
        }
    }
}

impl TryFrom<UserProfile> for domain::UserProfile {
    type Error = domain::InputError;

    fn try_from(value: UserProfile) -> Result<Self, Self::Error> {
        let experience = value
            .experience
            .as_deref()
            .ok_or(domain::InputError::Missing("experience"))?;
        let mut injuries = vec![];
        for injury in &value.injuries {
            let body_part = parse("injuries", injury)?;
            if !injuries.contains(&body_part) {
                injuries.push(body_part);
            }
        }
        Ok(Self {
            available_equipment: domain::Equipment::parse_list(&value.available_equipment)?,
            injuries,
            questionnaire: value
                .advanced_questionnaire
                .map(domain::AdvancedQuestionnaire::try_from)
                .transpose()?,
            ..domain::UserProfile::new(
                parse("experience", experience)?,
                domain::SessionDuration::new(
                    value
                        .session_duration
                        .ok_or(domain::InputError::Missing("sessionDuration"))?,
                )?,
                domain::TrainingDays::new(
                    value
                        .training_days_per_week
                        .ok_or(domain::InputError::Missing("trainingDaysPerWeek"))?,
                )?,
            )
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedQuestionnaire {
    #[serde(default)]
    pub gym_days_available: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_split: Option<String>,
    #[serde(default)]
    pub weekly_activities: Vec<WeeklyActivity>,
}

impl From<&domain::AdvancedQuestionnaire> for AdvancedQuestionnaire {
    fn from(value: &domain::AdvancedQuestionnaire) -> Self {
        Self {
            gym_days_available: value
                .gym_days
                .iter()
                .map(|d| i64::from(domain::weekday_index(*d)))
                .collect(),
            preferred_split: Some(wire(value.preferred_split)),
            weekly_activities: value
                .weekly_activities
                .iter()
                .map(WeeklyActivity::from)
                .collect(),
        }
    }
}

impl TryFrom<AdvancedQuestionnaire> for domain::AdvancedQuestionnaire {
    type Error = domain::InputError;

    fn try_from(value: AdvancedQuestionnaire) -> Result<Self, Self::Error> {
        Ok(Self {
            gym_days: value
                .gym_days_available
                .into_iter()
                .map(domain::weekday_from_index)
                .collect::<Result<_, _>>()?,
            preferred_split: parse_optional("preferredSplit", value.preferred_split.as_deref())?,
            weekly_activities: value
                .weekly_activities
                .into_iter()
                .map(domain::WeeklyActivity::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyActivity {
    pub name: String,
    pub day_of_week: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_window: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<String>,
}

impl From<&domain::WeeklyActivity> for WeeklyActivity {
    fn from(value: &domain::WeeklyActivity) -> Self {
        Self {
            name: value.name.clone(),
            day_of_week: i64::from(domain::weekday_index(value.day)),
            time_window: Some(wire(value.time_window)),
            intensity: Some(wire(value.intensity)),
        }
    }
}

impl TryFrom<WeeklyActivity> for domain::WeeklyActivity {
    type Error = domain::InputError;

    fn try_from(value: WeeklyActivity) -> Result<Self, Self::Error> {
        let name = value.name.trim();
        if name.is_empty() {
            return Err(domain::InputError::Invalid {
                field: "weeklyActivities",
                message: "activity name is empty".to_string(),
            });
        }
        Ok(Self {
            name: name.to_string(),
            day: domain::weekday_from_index(value.day_of_week)?,
            time_window: parse_optional("timeWindow", value.time_window.as_deref())?,
            intensity: parse_optional("intensity", value.intensity.as_deref())?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedWorkout {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub duration: u32,
    pub exercises: Vec<WorkoutExercise>,
    pub metadata: WorkoutMetadata,
}

impl From<domain::GeneratedWorkout> for GeneratedWorkout {
    fn from(value: domain::GeneratedWorkout) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::GeneratedWorkout> for GeneratedWorkout {
    fn from(value: &domain::GeneratedWorkout) -> Self {
        Self {
            title: value.title.clone(),
            kind: value.archetype.to_string(),
            duration: value.duration.minutes(),
            exercises: value.exercises.iter().map(WorkoutExercise::from).collect(),
            metadata: WorkoutMetadata::from(&value.metadata),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    pub exercise_id: Uuid,
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_type: Option<String>,
    pub body_part: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default)]
    pub heavy: bool,
}

impl From<&domain::WorkoutExercise> for WorkoutExercise {
    fn from(value: &domain::WorkoutExercise) -> Self {
        Self {
            exercise_id: *value.exercise_id,
            name: value.name.to_string(),
            sets: value.sets,
            reps: value.reps,
            category: wire(value.category),
            rest_time: value.rest_seconds,
            set_type: Some(value.set_type.to_string()),
            body_part: wire(value.body_part),
            video_url: value.video_url.clone(),
            heavy: value.heavy,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutMetadata {
    pub day_of_week: u8,
    pub week_number: u32,
    pub focus: Vec<String>,
    pub excluded_heavy: Vec<String>,
    pub max_heavy_excluded: usize,
    pub conflicts: Vec<String>,
    pub volume: Volume,
    pub deload: bool,
    pub notes: Vec<String>,
}

impl From<&domain::WorkoutMetadata> for WorkoutMetadata {
    fn from(value: &domain::WorkoutMetadata) -> Self {
        Self {
            day_of_week: domain::weekday_index(value.day),
            week_number: value.week_number,
            focus: value.focus.iter().copied().map(wire).collect(),
            excluded_heavy: value.excluded_heavy.iter().copied().map(wire).collect(),
            max_heavy_excluded: value.max_heavy_excluded,
            conflicts: value.conflicts.clone(),
            volume: Volume {
                min: value.volume.min,
                max: value.volume.max,
            },
            deload: value.deload,
            notes: value.notes.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volume {
    pub min: u32,
    pub max: u32,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeekPlan {
    pub week_number: u32,
    pub days: Vec<PlannedDay>,
}

impl From<&domain::WeekPlan> for WeekPlan {
    fn from(value: &domain::WeekPlan) -> Self {
        Self {
            week_number: value.week_number,
            days: value
                .days
                .iter()
                .map(|d| PlannedDay {
                    day_of_week: domain::weekday_index(d.day),
                    kind: d.archetype().to_string(),
                    workout: d.workout.as_ref().map(GeneratedWorkout::from),
                })
                .collect(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlannedDay {
    pub day_of_week: u8,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout: Option<GeneratedWorkout>,
}

/// Catalog file record.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub body_part: String,
    pub category: String,
    pub force: String,
    pub mechanic: String,
    pub load: String,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl From<domain::Exercise> for Exercise {
    fn from(value: domain::Exercise) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            body_part: wire(value.body_part),
            category: wire(value.category),
            force: wire(value.force),
            mechanic: wire(value.mechanic),
            load: wire(value.load),
            equipment: value.equipment.iter().copied().map(wire).collect(),
            video_url: value.video_url.clone(),
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = ExerciseError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            body_part: parse("bodyPart", &value.body_part)?,
            category: parse("category", &value.category)?,
            force: parse("force", &value.force)?,
            mechanic: parse("mechanic", &value.mechanic)?,
            load: parse("load", &value.load)?,
            equipment: domain::Equipment::parse_list(&value.equipment)?,
            video_url: value.video_url.filter(|url| !url.trim().is_empty()),
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ExerciseError {
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidInput(#[from] domain::InputError),
}

/// History file record: the exercises of one completed session.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub exercises: Vec<String>,
}
