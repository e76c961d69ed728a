use std::collections::HashMap;

use log::{debug, warn};

use crate::{
    BodyPart, Category, DayPlan, Exercise, Experience, Load, Mechanic, PlanNote, Slots,
    UserProfile,
};

/// Exercises chosen for a workout, grouped by category.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Selection<'a> {
    pub warmups: Vec<&'a Exercise>,
    pub main: Vec<&'a Exercise>,
    pub cooldowns: Vec<&'a Exercise>,
    pub notes: Vec<PlanNote>,
}

impl<'a> Selection<'a> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.warmups.len() + self.main.len() + self.cooldowns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Warmups, then main exercises, then cooldowns.
    pub fn ordered(&self) -> impl Iterator<Item = &'a Exercise> + '_ {
        self.warmups
            .iter()
            .chain(self.main.iter())
            .chain(self.cooldowns.iter())
            .copied()
    }
}

/// Fills the slots of a workout from `exercises`.
///
/// Candidates the user cannot perform with the available equipment or that
/// load an injured body part are never selected. When a tier runs dry the
/// next, broader one is used, and a shortfall is reported as a note instead
/// of an error.
pub fn select<'a>(
    exercises: impl IntoIterator<Item = &'a Exercise>,
    profile: &UserProfile,
    plan: &DayPlan,
    slots: Slots,
    recent: &[String],
) -> Selection<'a> {
    let selector = Selector {
        candidates: exercises
            .into_iter()
            .filter(|e| e.available_with(&profile.available_equipment))
            .filter(|e| !loads_injury(profile, e))
            .collect(),
        profile,
        plan,
        recent,
    };

    let warmups = selector.accessories(Category::Warmup, slots.warmups);
    let cooldowns = selector.accessories(Category::Cooldown, slots.cooldowns);
    let (main, deepest_tier) =
        selector.main(slots.total() - warmups.len() - cooldowns.len());

    let mut selection = Selection {
        warmups,
        main,
        cooldowns,
        notes: vec![],
    };

    if deepest_tier >= 2 {
        selection.notes.push(PlanNote::Relaxed);
    }

    if selection.len() < slots.total() {
        warn!(
            "only {} of {} exercises available for {} day",
            selection.len(),
            slots.total(),
            plan.archetype
        );
        selection.notes.push(PlanNote::Underfilled);
    }

    selection
}

fn loads_injury(profile: &UserProfile, exercise: &Exercise) -> bool {
    profile.is_injured(exercise.body_part)
        || (exercise.body_part == BodyPart::FullBody && !profile.injuries.is_empty())
}

struct Selector<'a, 'b> {
    candidates: Vec<&'a Exercise>,
    profile: &'b UserProfile,
    plan: &'b DayPlan,
    recent: &'b [String],
}

type Rank = (usize, usize, u8, u8, bool, bool, String);

impl<'a> Selector<'a, '_> {
    fn accessories(&self, category: Category, count: usize) -> Vec<&'a Exercise> {
        let tiers: [&dyn Fn(&Exercise) -> bool; 4] = [
            &|e| self.plan.focus.contains(&e.body_part),
            &|e| e.body_part == BodyPart::FullBody,
            &|e| e.body_part == BodyPart::Core,
            &|_| true,
        ];

        let mut picked: Vec<&'a Exercise> = vec![];
        for tier in tiers {
            if picked.len() >= count {
                break;
            }
            let mut candidates = self
                .candidates
                .iter()
                .copied()
                .filter(|e| e.category == category && tier(e))
                .filter(|e| !picked.iter().any(|p| p.id == e.id))
                .collect::<Vec<_>>();
            candidates.sort_by_key(|e| (self.is_recent(e), !e.has_video(), e.name.key()));
            let missing = count - picked.len();
            picked.extend(candidates.into_iter().take(missing));
        }
        picked
    }

    /// Returns the main exercises and the deepest tier that had to be used.
    fn main(&self, count: usize) -> (Vec<&'a Exercise>, usize) {
        let mut picked: Vec<&'a Exercise> = vec![];
        let mut per_body_part = HashMap::<BodyPart, usize>::new();
        let mut heavy_excluded = 0;
        let mut deepest_tier = 0;

        while picked.len() < count {
            let next = (0..5).find_map(|tier| {
                self.candidates
                    .iter()
                    .copied()
                    .filter(|e| e.category == Category::Main)
                    .filter(|e| !picked.iter().any(|p| p.id == e.id))
                    .filter(|e| self.in_tier(tier, e))
                    .filter(|e| {
                        heavy_excluded < self.plan.max_heavy_excluded || !self.is_excluded_heavy(e)
                    })
                    .min_by_key(|e| self.rank(e, &per_body_part))
                    .map(|e| (tier, e))
            });

            let Some((tier, exercise)) = next else {
                break;
            };

            if tier > 0 {
                debug!("relaxed to tier {} for {}", tier + 1, exercise.name);
            }
            if self.is_excluded_heavy(exercise) {
                heavy_excluded += 1;
            }
            *per_body_part.entry(exercise.body_part).or_default() += 1;
            deepest_tier = deepest_tier.max(tier);
            picked.push(exercise);
        }

        (picked, deepest_tier)
    }

    fn in_tier(&self, tier: usize, exercise: &Exercise) -> bool {
        let in_focus = self.plan.focus.contains(&exercise.body_part);
        let force = self.plan.force.is_none_or(|f| f == exercise.force);
        match tier {
            0 => in_focus && force && !(self.profile.owns_equipment() && exercise.is_bodyweight()),
            1 => in_focus && force,
            2 => {
                force
                    && self
                        .plan
                        .archetype
                        .region()
                        .is_some_and(|r| r == exercise.body_part.region())
            }
            3 => matches!(exercise.body_part, BodyPart::Core | BodyPart::FullBody),
            _ => true,
        }
    }

    fn rank(&self, exercise: &Exercise, per_body_part: &HashMap<BodyPart, usize>) -> Rank {
        (
            per_body_part
                .get(&exercise.body_part)
                .copied()
                .unwrap_or_default(),
            self.plan
                .focus
                .iter()
                .position(|b| *b == exercise.body_part)
                .unwrap_or(self.plan.focus.len()),
            match exercise.mechanic {
                Mechanic::Compound => 0,
                Mechanic::Isolation => 1,
            },
            load_rank(self.profile.experience, exercise.load),
            self.is_recent(exercise),
            !exercise.has_video(),
            exercise.name.key(),
        )
    }

    fn is_recent(&self, exercise: &Exercise) -> bool {
        self.recent.iter().any(|r| exercise.is_referenced_by(r))
    }

    fn is_excluded_heavy(&self, exercise: &Exercise) -> bool {
        exercise.is_heavy_compound() && self.plan.excluded_heavy.contains(&exercise.body_part)
    }
}

fn load_rank(experience: Experience, load: Load) -> u8 {
    match (experience, load) {
        (Experience::Beginner, Load::Moderate) => 0,
        (Experience::Beginner, Load::Heavy) => 1,
        (Experience::Intermediate | Experience::Advanced, Load::Heavy) => 0,
        (Experience::Intermediate | Experience::Advanced, Load::Moderate) => 1,
        (_, Load::Light) => 2,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{
        Archetype, Catalog, Equipment, Force, MAX_HEAVY_EXCLUDED, Property, SessionDuration,
        TrainingDays, volume,
    };

    use super::*;

    fn profile(experience: Experience, equipment: &[Equipment]) -> UserProfile {
        UserProfile {
            available_equipment: equipment.iter().copied().collect(),
            ..UserProfile::new(
                experience,
                SessionDuration::new(45).unwrap(),
                TrainingDays::new(3).unwrap(),
            )
        }
    }

    fn plan(archetype: Archetype, excluded_heavy: &[BodyPart]) -> DayPlan {
        DayPlan {
            day: Weekday::Sun,
            archetype,
            rotation: archetype,
            focus: archetype.focus().to_vec(),
            force: archetype.force(),
            excluded_heavy: excluded_heavy.iter().copied().collect(),
            max_heavy_excluded: MAX_HEAVY_EXCLUDED,
            conflicts: vec![],
            scheduled: true,
            position: 0,
        }
    }

    fn slots(main: usize) -> Slots {
        Slots {
            warmups: 1,
            main,
            cooldowns: 1,
        }
    }

    fn names(exercises: &[&Exercise]) -> Vec<String> {
        exercises.iter().map(|e| e.name.to_string()).collect()
    }

    fn all_equipment() -> Vec<Equipment> {
        Equipment::iter().copied().collect()
    }

    #[test]
    fn test_select_upper_day_with_full_gym() {
        let selection = select(
            Catalog::builtin().exercises(),
            &profile(Experience::Beginner, &all_equipment()),
            &plan(Archetype::Upper, &[]),
            slots(3),
            &[],
        );
        assert_eq!(names(&selection.warmups), vec!["Arm Circles"]);
        assert_eq!(
            names(&selection.main),
            vec!["Dumbbell Bench Press", "Dumbbell Row", "Dumbbell Shoulder Press"]
        );
        assert_eq!(names(&selection.cooldowns), vec!["Child's Pose"]);
        assert_eq!(selection.notes, vec![]);
    }

    #[test]
    fn test_select_upper_day_bodyweight_only() {
        let selection = select(
            Catalog::builtin().exercises(),
            &profile(Experience::Beginner, &[]),
            &plan(Archetype::Upper, &[]),
            slots(3),
            &[],
        );
        assert_eq!(
            names(&selection.main),
            vec!["Push Up", "Superman", "Pike Push Up"]
        );
        assert!(selection.ordered().all(Exercise::is_bodyweight));
    }

    #[test]
    fn test_select_avoids_recent_exercises() {
        let selection = select(
            Catalog::builtin().exercises(),
            &profile(Experience::Beginner, &all_equipment()),
            &plan(Archetype::Upper, &[]),
            slots(3),
            &["dumbbell bench press".to_string(), "Arm Circles".to_string()],
        );
        assert_eq!(names(&selection.warmups), vec!["Band Pull Apart"]);
        assert_eq!(selection.main[0].name.to_string(), "Machine Chest Press");
    }

    #[test]
    fn test_select_caps_heavy_compounds_on_excluded_body_parts() {
        let selection = select(
            Catalog::builtin().exercises(),
            &profile(Experience::Advanced, &all_equipment()),
            &plan(Archetype::Upper, &BodyPart::UPPER),
            slots(4),
            &[],
        );
        assert_eq!(
            names(&selection.main),
            vec![
                "Barbell Bench Press",
                "Barbell Row",
                "Dumbbell Shoulder Press",
                "Bench Dip"
            ]
        );
        assert_eq!(
            selection
                .main
                .iter()
                .filter(|e| e.is_heavy_compound())
                .count(),
            2
        );
    }

    #[test]
    fn test_select_push_day_respects_force() {
        let selection = select(
            Catalog::builtin().exercises(),
            &profile(Experience::Intermediate, &all_equipment()),
            &plan(Archetype::Push, &[]),
            slots(5),
            &[],
        );
        assert_eq!(selection.main.len(), 5);
        assert!(selection.main.iter().all(|e| e.force == Force::Push));
    }

    #[rstest]
    #[case(Experience::Beginner, &[])]
    #[case(Experience::Intermediate, &[Equipment::Dumbbell])]
    #[case(Experience::Advanced, &[Equipment::ResistanceBand, Equipment::PullUpBar])]
    fn test_select_respects_equipment(
        #[case] experience: Experience,
        #[case] equipment: &[Equipment],
    ) {
        let profile = profile(experience, equipment);
        for archetype in [Archetype::Upper, Archetype::Lower, Archetype::Full] {
            let selection = select(
                Catalog::builtin().exercises(),
                &profile,
                &plan(archetype, &[]),
                slots(5),
                &[],
            );
            assert!(
                selection
                    .ordered()
                    .all(|e| e.available_with(&profile.available_equipment))
            );
        }
    }

    #[test]
    fn test_select_never_loads_injured_body_parts() {
        let mut profile = profile(Experience::Intermediate, &all_equipment());
        profile.injuries = vec![BodyPart::Chest, BodyPart::Shoulders];
        let selection = select(
            Catalog::builtin().exercises(),
            &profile,
            &plan(Archetype::Upper, &[]),
            slots(6),
            &[],
        );
        assert_eq!(selection.len(), 8);
        assert!(selection.ordered().all(|e| !matches!(
            e.body_part,
            BodyPart::Chest | BodyPart::Shoulders | BodyPart::FullBody
        )));
    }

    #[test]
    fn test_select_relaxes_to_other_body_parts() {
        let catalog = Catalog::new(
            Catalog::builtin()
                .exercises()
                .iter()
                .filter(|e| !BodyPart::LOWER.contains(&e.body_part))
                .cloned(),
        );
        let selection = select(
            catalog.exercises(),
            &profile(Experience::Beginner, &[]),
            &plan(Archetype::Lower, &[]),
            slots(3),
            &[],
        );
        assert_eq!(selection.main.len(), 3);
        assert_eq!(selection.notes, vec![PlanNote::Relaxed]);
        assert!(
            selection
                .main
                .iter()
                .all(|e| matches!(e.body_part, BodyPart::Core | BodyPart::FullBody))
        );
    }

    #[test]
    fn test_select_underfilled() {
        let catalog = Catalog::new(
            ["Push Up", "Plank"]
                .into_iter()
                .filter_map(|n| Catalog::builtin().get(n))
                .cloned(),
        );
        let selection = select(
            catalog.exercises(),
            &profile(Experience::Beginner, &[]),
            &plan(Archetype::Upper, &[]),
            slots(3),
            &[],
        );
        assert_eq!(names(&selection.main), vec!["Push Up", "Plank"]);
        assert_eq!(
            selection.notes,
            vec![PlanNote::Relaxed, PlanNote::Underfilled]
        );
    }

    #[test]
    fn test_select_fills_missing_accessories_with_main_exercises() {
        let catalog = Catalog::new(
            Catalog::builtin()
                .exercises()
                .iter()
                .filter(|e| e.category == Category::Main)
                .cloned(),
        );
        let range = volume(Experience::Beginner, SessionDuration::new(30).unwrap());
        let selection = select(
            catalog.exercises(),
            &profile(Experience::Beginner, &[]),
            &plan(Archetype::Upper, &[]),
            range.slots(),
            &[],
        );
        assert!(selection.warmups.is_empty());
        assert!(selection.cooldowns.is_empty());
        assert!(range.contains(selection.len()), "{}", selection.len());
        assert!(!selection.notes.contains(&PlanNote::Underfilled));
    }

    #[test]
    fn test_select_is_deterministic() {
        let profile = profile(Experience::Intermediate, &[Equipment::Dumbbell, Equipment::Bench]);
        let plan = plan(Archetype::Full, &[BodyPart::Legs]);
        assert_eq!(
            select(Catalog::builtin().exercises(), &profile, &plan, slots(6), &[]),
            select(Catalog::builtin().exercises(), &profile, &plan, slots(6), &[])
        );
    }

    #[test]
    fn test_select_empty_catalog() {
        let catalog = Catalog::default();
        let selection = select(
            catalog.exercises(),
            &profile(Experience::Beginner, &[]),
            &plan(Archetype::Full, &[]),
            slots(3),
            &[],
        );
        assert!(selection.is_empty());
        assert_eq!(selection.notes, vec![PlanNote::Underfilled]);
    }
}
