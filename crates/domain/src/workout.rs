use std::collections::BTreeSet;

use chrono::Weekday;
use log::{debug, info};

use crate::{
    Archetype, BodyPart, Catalog, Category, Exercise, ExerciseID, Name, SessionDuration, SetType,
    UserProfile, VolumeRange, is_deload_week, plan_day, prescribe, select, volume,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub profile: UserProfile,
    pub day: Weekday,
    /// 1-based, 0 is treated as the first week.
    pub week_number: u32,
    /// Names or ids of exercises used in recent sessions.
    pub recent_exercises: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedWorkout {
    pub title: String,
    pub archetype: Archetype,
    pub duration: SessionDuration,
    pub exercises: Vec<WorkoutExercise>,
    pub metadata: WorkoutMetadata,
}

impl GeneratedWorkout {
    #[must_use]
    pub fn count(&self, category: Category) -> usize {
        self.exercises
            .iter()
            .filter(|e| e.category == category)
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutExercise {
    pub exercise_id: ExerciseID,
    pub name: Name,
    pub body_part: BodyPart,
    pub category: Category,
    pub sets: u32,
    pub reps: u32,
    pub rest_seconds: Option<u32>,
    pub set_type: SetType,
    pub video_url: Option<String>,
    pub heavy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutMetadata {
    pub day: Weekday,
    pub week_number: u32,
    pub focus: Vec<BodyPart>,
    pub excluded_heavy: BTreeSet<BodyPart>,
    pub max_heavy_excluded: usize,
    pub conflicts: Vec<String>,
    pub volume: VolumeRange,
    pub deload: bool,
    pub notes: Vec<PlanNote>,
}

/// Recovered deviation from the ideal plan.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum::AsRefStr, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum PlanNote {
    /// The split archetype was replaced because of an activity conflict.
    DegradedSplit,
    /// Exercises outside the focus body parts had to be used.
    Relaxed,
    /// The catalog could not supply enough exercises.
    Underfilled,
}

/// Turns a profile and a day into a workout.
///
/// Generation borrows the catalog and keeps no state between calls, so the
/// same input always yields the same workout.
#[derive(Debug, Clone, Copy)]
pub struct WorkoutGenerator<'a> {
    catalog: &'a Catalog,
}

impl<'a> WorkoutGenerator<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn generate(&self, request: &GenerationRequest) -> GeneratedWorkout {
        let profile = &request.profile;
        let week_number = request.week_number.max(1);
        let plan = plan_day(profile, request.day, week_number);
        let volume = volume(profile.experience, profile.session_duration);
        let deload = is_deload_week(week_number);

        let mut notes = vec![];
        if plan.is_degraded() {
            info!(
                "degraded {} to {} on {:?} due to {:?}",
                plan.rotation, plan.archetype, plan.day, plan.conflicts
            );
            notes.push(PlanNote::DegradedSplit);
        }

        let selection = select(
            self.catalog.exercises(),
            profile,
            &plan,
            volume.slots(),
            &request.recent_exercises,
        );
        notes.extend(selection.notes.iter().copied());

        let exercises = selection
            .ordered()
            .map(|e| workout_exercise(profile, e, deload))
            .collect::<Vec<_>>();

        debug!(
            "generated {} with {} exercises for {:?} (week {week_number})",
            plan.archetype,
            exercises.len(),
            plan.day
        );

        GeneratedWorkout {
            title: plan.archetype.title().to_string(),
            archetype: plan.archetype,
            duration: profile.session_duration,
            exercises,
            metadata: WorkoutMetadata {
                day: plan.day,
                week_number,
                focus: plan.focus,
                excluded_heavy: plan.excluded_heavy,
                max_heavy_excluded: plan.max_heavy_excluded,
                conflicts: plan.conflicts,
                volume,
                deload,
                notes,
            },
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }
}

fn workout_exercise(profile: &UserProfile, exercise: &Exercise, deload: bool) -> WorkoutExercise {
    let prescription = prescribe(profile.experience, exercise, deload);
    WorkoutExercise {
        exercise_id: exercise.id,
        name: exercise.name.clone(),
        body_part: exercise.body_part,
        category: exercise.category,
        sets: prescription.sets,
        reps: prescription.reps,
        rest_seconds: prescription.rest_seconds,
        set_type: prescription.set_type,
        video_url: exercise.video_url.clone(),
        heavy: exercise.is_heavy_compound(),
    }
}
