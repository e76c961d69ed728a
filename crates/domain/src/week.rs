use chrono::Weekday;

use crate::{
    Archetype, GeneratedWorkout, GenerationRequest, UserProfile, WorkoutGenerator, schedule,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekPlan {
    pub week_number: u32,
    /// Sunday to Saturday.
    pub days: Vec<PlannedDay>,
}

impl WeekPlan {
    pub fn workouts(&self) -> impl Iterator<Item = &GeneratedWorkout> {
        self.days.iter().filter_map(|d| d.workout.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedDay {
    pub day: Weekday,
    /// `None` on rest days.
    pub workout: Option<GeneratedWorkout>,
}

impl PlannedDay {
    #[must_use]
    pub fn archetype(&self) -> Archetype {
        self.workout.as_ref().map_or(Archetype::Rest, |w| w.archetype)
    }
}

impl WorkoutGenerator<'_> {
    /// Generates a workout for every scheduled day of a week.
    ///
    /// Exercises of earlier days count as recent for later days.
    #[must_use]
    pub fn plan_week(
        &self,
        profile: &UserProfile,
        week_number: u32,
        recent_exercises: &[String],
    ) -> WeekPlan {
        let scheduled = schedule(profile);
        let mut recent = recent_exercises.to_vec();
        let mut day = Weekday::Sun;
        let mut days = Vec::with_capacity(7);

        for _ in 0..7 {
            let workout = scheduled.contains(&day).then(|| {
                let workout = self.generate(&GenerationRequest {
                    profile: profile.clone(),
                    day,
                    week_number,
                    recent_exercises: recent.clone(),
                });
                recent.extend(workout.exercises.iter().map(|e| e.name.to_string()));
                workout
            });
            days.push(PlannedDay { day, workout });
            day = day.succ();
        }

        WeekPlan {
            week_number: week_number.max(1),
            days,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        AdvancedQuestionnaire, Catalog, Equipment, Experience, PreferredSplit, Property,
        SessionDuration, TrainingDays,
    };

    use super::*;

    fn profile(days: i64) -> UserProfile {
        UserProfile {
            available_equipment: Equipment::iter().copied().collect(),
            ..UserProfile::new(
                Experience::Intermediate,
                SessionDuration::new(60).unwrap(),
                TrainingDays::new(days).unwrap(),
            )
        }
    }

    #[test]
    fn test_plan_week_three_days() {
        let week = WorkoutGenerator::new(Catalog::builtin()).plan_week(&profile(3), 1, &[]);
        assert_eq!(
            week.days.iter().map(PlannedDay::archetype).collect::<Vec<_>>(),
            vec![
                Archetype::Upper,
                Archetype::Rest,
                Archetype::Lower,
                Archetype::Rest,
                Archetype::Full,
                Archetype::Rest,
                Archetype::Rest,
            ]
        );
        assert_eq!(week.days[0].day, Weekday::Sun);
        assert_eq!(week.days[6].day, Weekday::Sat);
        assert_eq!(week.workouts().count(), 3);
    }

    #[test]
    fn test_plan_week_push_pull_legs_with_gym_days() {
        let mut profile = profile(4);
        profile.questionnaire = Some(AdvancedQuestionnaire {
            gym_days: vec![Weekday::Mon, Weekday::Tue, Weekday::Thu, Weekday::Fri],
            preferred_split: PreferredSplit::PushPullLegs,
            weekly_activities: vec![],
        });
        let week = WorkoutGenerator::new(Catalog::builtin()).plan_week(&profile, 2, &[]);
        assert_eq!(
            week.workouts().map(|w| w.archetype).collect::<Vec<_>>(),
            vec![
                Archetype::Pull,
                Archetype::Legs,
                Archetype::Push,
                Archetype::Pull
            ]
        );
    }

    #[test]
    fn test_plan_week_varies_exercises_across_days() {
        let mut profile = profile(4);
        profile.questionnaire = Some(AdvancedQuestionnaire {
            preferred_split: PreferredSplit::FullBody,
            ..AdvancedQuestionnaire::default()
        });
        let week = WorkoutGenerator::new(Catalog::builtin()).plan_week(&profile, 1, &[]);
        let workouts = week.workouts().collect::<Vec<_>>();
        assert_eq!(workouts.len(), 4);
        assert_ne!(workouts[0].exercises, workouts[1].exercises);
    }
}
