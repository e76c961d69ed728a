#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod conflict;
mod error;
mod exercise;
mod name;
mod profile;
mod selection;
mod service;
mod split;
mod user;
mod volume;
mod week;
mod workout;

#[cfg(test)]
mod tests;

pub use catalog::Catalog;
pub use conflict::{ActivityConflicts, MAX_HEAVY_EXCLUDED, loaded_body_parts};
pub use error::{InputError, ReadError, StorageError};
pub use exercise::{
    BodyPart, Category, Equipment, Exercise, ExerciseFilter, ExerciseID, ExerciseRepository,
    Force, Load, Mechanic, Property, Region,
};
pub use name::{Name, NameError};
pub use profile::{
    AdvancedQuestionnaire, Experience, Intensity, PreferredSplit, SessionDuration, TimeWindow,
    TrainingDays, UserProfile, WeeklyActivity, weekday_from_index, weekday_index,
};
pub use selection::{Selection, select};
pub use service::{HistoryRepository, Service, WorkoutService};
pub use split::{Archetype, DayPlan, plan_day, schedule};
pub use user::UserID;
pub use volume::{
    Prescription, SetType, Slots, VolumeRange, is_deload_week, prescribe, volume,
};
pub use week::{PlannedDay, WeekPlan};
pub use workout::{
    GeneratedWorkout, GenerationRequest, PlanNote, WorkoutExercise, WorkoutGenerator,
    WorkoutMetadata,
};
