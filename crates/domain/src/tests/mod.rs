
use chrono::Weekday;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    Archetype, BodyPart, Catalog, Category, Equipment, Experience, GeneratedWorkout, Region,
    WorkoutGenerator, volume,
};

use data::{BOXING, FULL_GYM, HOME_GYM, profile, request, with_activities};

fn generate(request: &crate::GenerationRequest) -> GeneratedWorkout {
    WorkoutGenerator::new(Catalog::builtin()).generate(request)
}

fn count_region(workout: &GeneratedWorkout, region: Region) -> usize {
    workout
        .exercises
        .iter()
        .filter(|e| e.body_part.region() == region)
        .count()
}

#[rstest]
fn test_exercise_count_within_volume(
    #[values(
        (Experience::Beginner, 30),
        (Experience::Beginner, 45),
        (Experience::Beginner, 60),
        (Experience::Intermediate, 45),
        (Experience::Intermediate, 60),
        (Experience::Advanced, 45)
    )]
    row: (Experience, i64),
    #[values(&[], HOME_GYM, FULL_GYM.as_slice())] equipment: &[Equipment],
    #[values(Weekday::Sun, Weekday::Mon, Weekday::Tue, Weekday::Thu)] day: Weekday,
) {
    let (experience, minutes) = row;
    let profile = profile(experience, minutes, 3, equipment);
    let range = volume(profile.experience, profile.session_duration);
    let workout = generate(&request(profile, day));
    assert!(
        range.contains(workout.exercises.len()),
        "{} not in {range:?}",
        workout.exercises.len()
    );
    assert_eq!(workout.metadata.volume, range);
    assert!(workout.metadata.notes.is_empty(), "{:?}", workout.metadata.notes);
}

#[rstest]
#[case(&[])]
#[case(HOME_GYM)]
#[case(FULL_GYM.as_slice())]
fn test_beginner_45_minutes(#[case] equipment: &[Equipment]) {
    let workout = generate(&request(
        profile(Experience::Beginner, 45, 3, equipment),
        Weekday::Sun,
    ));
    assert!((4..=6).contains(&workout.exercises.len()));
    assert!(workout.count(Category::Warmup) >= 1);
    assert!(workout.count(Category::Cooldown) >= 1);
    assert!(count_region(&workout, Region::Upper) > count_region(&workout, Region::Lower));
    assert_eq!(workout.archetype, Archetype::Upper);
}

#[rstest]
#[case(&[])]
#[case(FULL_GYM.as_slice())]
fn test_advanced_45_minutes(#[case] equipment: &[Equipment]) {
    let workout = generate(&request(
        profile(Experience::Advanced, 45, 3, equipment),
        Weekday::Sun,
    ));
    assert!((6..=8).contains(&workout.exercises.len()));
}

#[rstest]
#[case(&[], &[])]
#[case(FULL_GYM.as_slice(), &[])]
#[case(HOME_GYM, &[Weekday::Mon, Weekday::Wed, Weekday::Fri])]
#[case(&[], &[Weekday::Tue, Weekday::Sat, Weekday::Thu])]
fn test_three_day_split_alternates_upper_and_lower(
    #[case] equipment: &[Equipment],
    #[case] gym_days: &[Weekday],
) {
    let profile = with_activities(
        profile(Experience::Beginner, 45, 3, equipment),
        gym_days,
        &[],
    );
    let days = crate::schedule(&profile);
    for week_number in 1..=3 {
        let first = generate(&crate::GenerationRequest {
            week_number,
            ..request(profile.clone(), days[0])
        });
        let second = generate(&crate::GenerationRequest {
            week_number,
            ..request(profile.clone(), days[1])
        });
        assert!(count_region(&first, Region::Upper) > count_region(&first, Region::Lower));
        assert!(count_region(&second, Region::Lower) > count_region(&second, Region::Upper));
        assert_ne!(first.archetype, second.archetype);
    }
}

#[rstest]
#[case(Experience::Beginner, 30, &[])]
#[case(Experience::Intermediate, 60, HOME_GYM)]
#[case(Experience::Advanced, 90, FULL_GYM.as_slice())]
fn test_generation_is_idempotent(
    #[case] experience: Experience,
    #[case] minutes: i64,
    #[case] equipment: &[Equipment],
) {
    let request = request(
        with_activities(
            profile(experience, minutes, 4, equipment),
            &[],
            &[BOXING.clone()],
        ),
        Weekday::Mon,
    );
    assert_eq!(generate(&request), generate(&request));
}

#[rstest]
fn test_equipment_is_respected(
    #[values(&[], HOME_GYM, &[Equipment::Machine, Equipment::Cable], &[Equipment::Kettlebell])]
    equipment: &[Equipment],
    #[values(1, 3, 5)] training_days: i64,
    #[values(Weekday::Sun, Weekday::Mon, Weekday::Wed)] day: Weekday,
) {
    let profile = profile(Experience::Intermediate, 60, training_days, equipment);
    let workout = generate(&request(profile.clone(), day));
    for exercise in &workout.exercises {
        let exercise = Catalog::builtin().get(&exercise.name.to_string()).unwrap();
        assert!(
            exercise.available_with(&profile.available_equipment),
            "{} needs {:?}",
            exercise.name,
            exercise.equipment
        );
    }
}

#[rstest]
#[case(Experience::Beginner, &[])]
#[case(Experience::Intermediate, HOME_GYM)]
#[case(Experience::Advanced, FULL_GYM.as_slice())]
fn test_boxing_limits_heavy_upper_work(
    #[case] experience: Experience,
    #[case] equipment: &[Equipment],
) {
    let mut boxing = BOXING.clone();
    boxing.time_window = crate::TimeWindow::Morning;
    let profile = with_activities(
        profile(experience, 60, 3, equipment),
        &[Weekday::Mon, Weekday::Wed, Weekday::Fri],
        &[boxing],
    );
    let workout = generate(&request(profile, Weekday::Mon));
    assert!(
        workout
            .exercises
            .iter()
            .filter(|e| e.heavy && e.body_part.region() == Region::Upper)
            .count()
            <= 2
    );
    assert_ne!(workout.archetype, Archetype::Upper);
    assert_ne!(workout.archetype.as_ref(), "upper");
    assert!(!workout.title.starts_with("Upper"));
    assert_eq!(workout.metadata.conflicts, vec!["Boxing"]);
    assert_eq!(workout.metadata.max_heavy_excluded, 2);
    assert!(workout.metadata.excluded_heavy.contains(&BodyPart::Shoulders));
}

#[test]
fn test_boxing_on_unscheduled_day() {
    let profile = with_activities(
        profile(Experience::Advanced, 45, 3, FULL_GYM.as_slice()),
        &[],
        &[BOXING.clone()],
    );
    let workout = generate(&request(profile, Weekday::Mon));
    assert_ne!(workout.archetype, Archetype::Upper);
    assert!(
        workout
            .exercises
            .iter()
            .filter(|e| e.heavy && e.body_part.region() == Region::Upper)
            .count()
            <= 2
    );
}

#[test]
fn test_boxing_evening_before_limits_next_day() {
    let profile = with_activities(
        profile(Experience::Advanced, 60, 3, FULL_GYM.as_slice()),
        &[Weekday::Tue, Weekday::Thu, Weekday::Sat],
        &[BOXING.clone()],
    );
    let workout = generate(&request(profile, Weekday::Tue));
    assert_eq!(workout.archetype, Archetype::Full);
    assert_eq!(workout.title, "Full Body Day");
    assert_eq!(
        workout.metadata.notes,
        vec![crate::PlanNote::DegradedSplit]
    );
}

#[rstest]
fn test_duration_is_echoed(
    #[values(Experience::Beginner, Experience::Intermediate, Experience::Advanced)]
    experience: Experience,
    #[values(10, 25, 45, 52, 60, 120, 240)] minutes: i64,
) {
    let workout = generate(&request(
        profile(experience, minutes, 3, HOME_GYM),
        Weekday::Sun,
    ));
    assert_eq!(i64::from(workout.duration.minutes()), minutes);
}
