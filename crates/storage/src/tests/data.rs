use std::sync::LazyLock;

use chrono::NaiveDate;
use liftplan_domain as domain;
use serde_json::json;
use uuid::Uuid;

use crate::json;

pub static PROFILE: LazyLock<domain::UserProfile> = LazyLock::new(|| {
    domain::UserProfile::new(
        domain::Experience::Beginner,
        domain::SessionDuration::new(45).unwrap(),
        domain::TrainingDays::new(3).unwrap(),
    )
});

pub static BOXING_REQUEST: LazyLock<serde_json::Value> = LazyLock::new(|| {
    json!({
        "userProfile": {
            "experience": "intermediate",
            "sessionDuration": 60,
            "trainingDaysPerWeek": 3,
            "availableEquipment": ["dumbbells", "pull-up bar"],
            "injuries": ["back", "lats"],
            "advancedQuestionnaire": {
                "gymDaysAvailable": [1, 3, 5],
                "preferredSplit": "coach_choice",
                "weeklyActivities": [
                    {
                        "name": "Boxing",
                        "dayOfWeek": 1,
                        "timeWindow": "evening",
                        "intensity": "hard"
                    }
                ]
            }
        },
        "dayOfWeek": 1,
        "weekNumber": 2,
        "recentExercises": ["Goblet Squat"]
    })
});

pub static EXERCISES: LazyLock<Vec<domain::Exercise>> =
    LazyLock::new(|| vec![EXERCISE.clone(), EXERCISE_2.clone()]);

pub static EXERCISE: LazyLock<domain::Exercise> = LazyLock::new(|| domain::Exercise {
    id: 1.into(),
    name: domain::Name::new("Kettlebell Swing").unwrap(),
    body_part: domain::BodyPart::Glutes,
    category: domain::Category::Main,
    force: domain::Force::Pull,
    mechanic: domain::Mechanic::Compound,
    load: domain::Load::Moderate,
    equipment: [domain::Equipment::Kettlebell].into(),
    video_url: Some("videos/kettlebell-swing.mp4".to_string()),
});

pub static EXERCISE_2: LazyLock<domain::Exercise> = LazyLock::new(|| domain::Exercise {
    id: 2.into(),
    name: domain::Name::new("Bird Dog").unwrap(),
    body_part: domain::BodyPart::Core,
    category: domain::Category::Warmup,
    force: domain::Force::Static,
    mechanic: domain::Mechanic::Isolation,
    load: domain::Load::Light,
    equipment: [].into(),
    video_url: None,
});

pub static EXERCISE_RECORD: LazyLock<json::Exercise> = LazyLock::new(|| json::Exercise {
    id: Uuid::from_u128(1),
    name: "Kettlebell Swing".to_string(),
    body_part: "glutes".to_string(),
    category: "main".to_string(),
    force: "pull".to_string(),
    mechanic: "compound".to_string(),
    load: "moderate".to_string(),
    equipment: vec!["kettlebell".to_string()],
    video_url: Some("videos/kettlebell-swing.mp4".to_string()),
});

pub static HISTORY: LazyLock<Vec<json::HistoryEntry>> = LazyLock::new(|| {
    vec![
        history_entry(1, (2026, 10, 5), &["Goblet Squat", "Plank"]),
        history_entry(2, (2026, 10, 6), &["Deadlift"]),
        history_entry(1, (2026, 10, 9), &["Push Up"]),
        history_entry(1, (2026, 10, 7), &["Lat Pulldown"]),
    ]
});

pub fn history_entry(user: u128, (y, m, d): (i32, u32, u32), exercises: &[&str]) -> json::HistoryEntry {
    json::HistoryEntry {
        user_id: Uuid::from_u128(user),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        exercises: exercises.iter().map(ToString::to_string).collect(),
    }
}

pub fn generation_request(value: serde_json::Value) -> json::GenerationRequest {
    serde_json::from_value(value).unwrap()
}
