use std::collections::BTreeSet;

use log::error;

use crate::{
    BodyPart, Category, Equipment, Exercise, ExerciseFilter, ExerciseRepository, Force, Load,
    Mechanic, Name, ReadError,
};

/// Immutable, name-sorted collection of exercises.
///
/// The generator only ever borrows a catalog, so a single instance loaded at
/// start-up can be shared between any number of concurrent generations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    exercises: Vec<Exercise>,
}

impl Catalog {
    /// Builds a catalog, keeping the first exercise for every name.
    pub fn new(exercises: impl IntoIterator<Item = Exercise>) -> Self {
        let mut exercises = exercises.into_iter().collect::<Vec<_>>();
        exercises.sort_by_key(|e| e.name.key());
        exercises.dedup_by(|a, b| a.name.key() == b.name.key());
        Self { exercises }
    }

    /// The seed catalog shipped with the crate.
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    #[must_use]
    pub fn find(&self, filter: &ExerciseFilter) -> Vec<&Exercise> {
        filter.exercises(self.exercises.iter())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.name.matches(name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

impl ExerciseRepository for Catalog {
    async fn find_exercises(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>, ReadError> {
        Ok(self.find(filter).into_iter().cloned().collect())
    }
}

static BUILTIN: std::sync::LazyLock<Catalog> = std::sync::LazyLock::new(|| {
    Catalog::new(
        SEED.iter()
            .flat_map(|base| {
                std::iter::once(base.exercise()).chain(
                    base.variants
                        .iter()
                        .map(|variant| variant.exercise(base)),
                )
            })
            .filter_map(|seed| match seed {
                Ok(exercise) => Some(exercise),
                Err(err) => {
                    error!("skipping seed exercise: {err}");
                    None
                }
            }),
    )
});

struct BaseExercise {
    id: u128,
    name: &'static str,
    body_part: BodyPart,
    category: Category,
    force: Force,
    mechanic: Mechanic,
    load: Load,
    equipment: &'static [Equipment],
    video: Option<&'static str>,
    variants: &'static [ExerciseVariant],
}

impl BaseExercise {
    fn exercise(&self) -> Result<Exercise, crate::NameError> {
        Ok(Exercise {
            id: self.id.into(),
            name: Name::new(self.name)?,
            body_part: self.body_part,
            category: self.category,
            force: self.force,
            mechanic: self.mechanic,
            load: self.load,
            equipment: self.equipment.iter().copied().collect::<BTreeSet<_>>(),
            video_url: self.video.map(str::to_string),
        })
    }
}

/// Variation of a base exercise. Unset fields are inherited from the base,
/// except the video which belongs to the base movement only.
struct ExerciseVariant {
    id: u128,
    name: &'static str,
    force: Option<Force>,
    mechanic: Option<Mechanic>,
    load: Option<Load>,
    equipment: Option<&'static [Equipment]>,
    video: Option<&'static str>,
}

impl ExerciseVariant {
    const fn default() -> Self {
        Self {
            id: 0,
            name: "",
            force: None,
            mechanic: None,
            load: None,
            equipment: None,
            video: None,
        }
    }

    fn exercise(&self, base: &BaseExercise) -> Result<Exercise, crate::NameError> {
        Ok(Exercise {
            id: self.id.into(),
            name: Name::new(self.name)?,
            body_part: base.body_part,
            category: base.category,
            force: self.force.unwrap_or(base.force),
            mechanic: self.mechanic.unwrap_or(base.mechanic),
            load: self.load.unwrap_or(base.load),
            equipment: self
                .equipment
                .unwrap_or(base.equipment)
                .iter()
                .copied()
                .collect::<BTreeSet<_>>(),
            video_url: self.video.map(str::to_string),
        })
    }
}

const BODYWEIGHT: &[Equipment] = &[];

const SEED: &[BaseExercise] = &[
    // Warmups
    BaseExercise {
        id: 101,
        name: "Arm Circles",
        body_part: BodyPart::Shoulders,
        category: Category::Warmup,
        force: Force::Static,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: Some("videos/arm-circles.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 102,
        name: "Band Pull Apart",
        body_part: BodyPart::Back,
        category: Category::Warmup,
        force: Force::Pull,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: &[Equipment::ResistanceBand],
        video: Some("videos/band-pull-apart.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 103,
        name: "Scapular Push Up",
        body_part: BodyPart::Chest,
        category: Category::Warmup,
        force: Force::Push,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: None,
        variants: &[],
    },
    BaseExercise {
        id: 104,
        name: "Cat Cow",
        body_part: BodyPart::Core,
        category: Category::Warmup,
        force: Force::Static,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: Some("videos/cat-cow.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 105,
        name: "Leg Swings",
        body_part: BodyPart::Legs,
        category: Category::Warmup,
        force: Force::Static,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: Some("videos/leg-swings.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 106,
        name: "Bodyweight Squat",
        body_part: BodyPart::Legs,
        category: Category::Warmup,
        force: Force::Push,
        mechanic: Mechanic::Compound,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: Some("videos/bodyweight-squat.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 107,
        name: "Glute Bridge",
        body_part: BodyPart::Glutes,
        category: Category::Warmup,
        force: Force::Push,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: Some("videos/glute-bridge.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 108,
        name: "Jumping Jacks",
        body_part: BodyPart::FullBody,
        category: Category::Warmup,
        force: Force::Static,
        mechanic: Mechanic::Compound,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: Some("videos/jumping-jacks.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 109,
        name: "World's Greatest Stretch",
        body_part: BodyPart::FullBody,
        category: Category::Warmup,
        force: Force::Static,
        mechanic: Mechanic::Compound,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: None,
        variants: &[],
    },
    BaseExercise {
        id: 110,
        name: "Band Dislocates",
        body_part: BodyPart::Shoulders,
        category: Category::Warmup,
        force: Force::Pull,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: &[Equipment::ResistanceBand],
        video: None,
        variants: &[],
    },
    BaseExercise {
        id: 111,
        name: "Arm Swings",
        body_part: BodyPart::Arms,
        category: Category::Warmup,
        force: Force::Static,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: None,
        variants: &[],
    },
    // Cooldowns
    BaseExercise {
        id: 201,
        name: "Doorway Chest Stretch",
        body_part: BodyPart::Chest,
        category: Category::Cooldown,
        force: Force::Static,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: Some("videos/doorway-chest-stretch.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 202,
        name: "Child's Pose",
        body_part: BodyPart::Back,
        category: Category::Cooldown,
        force: Force::Static,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: Some("videos/childs-pose.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 203,
        name: "Cross-Body Shoulder Stretch",
        body_part: BodyPart::Shoulders,
        category: Category::Cooldown,
        force: Force::Static,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: Some("videos/cross-body-shoulder-stretch.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 204,
        name: "Overhead Triceps Stretch",
        body_part: BodyPart::Arms,
        category: Category::Cooldown,
        force: Force::Static,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: None,
        variants: &[],
    },
    BaseExercise {
        id: 205,
        name: "Standing Quad Stretch",
        body_part: BodyPart::Legs,
        category: Category::Cooldown,
        force: Force::Static,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: Some("videos/standing-quad-stretch.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 206,
        name: "Seated Hamstring Stretch",
        body_part: BodyPart::Legs,
        category: Category::Cooldown,
        force: Force::Static,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: None,
        variants: &[],
    },
    BaseExercise {
        id: 207,
        name: "Pigeon Stretch",
        body_part: BodyPart::Glutes,
        category: Category::Cooldown,
        force: Force::Static,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: Some("videos/pigeon-stretch.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 208,
        name: "Cobra Stretch",
        body_part: BodyPart::Core,
        category: Category::Cooldown,
        force: Force::Static,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: None,
        variants: &[],
    },
    BaseExercise {
        id: 209,
        name: "Easy Walk",
        body_part: BodyPart::FullBody,
        category: Category::Cooldown,
        force: Force::Static,
        mechanic: Mechanic::Compound,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: None,
        variants: &[],
    },
    BaseExercise {
        id: 210,
        name: "Thread the Needle",
        body_part: BodyPart::Back,
        category: Category::Cooldown,
        force: Force::Static,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: None,
        variants: &[],
    },
    // Chest
    BaseExercise {
        id: 301,
        name: "Barbell Bench Press",
        body_part: BodyPart::Chest,
        category: Category::Main,
        force: Force::Push,
        mechanic: Mechanic::Compound,
        load: Load::Heavy,
        equipment: &[Equipment::Barbell, Equipment::Bench],
        video: Some("videos/barbell-bench-press.mp4"),
        variants: &[
            ExerciseVariant {
                id: 302,
                name: "Dumbbell Bench Press",
                load: Some(Load::Moderate),
                equipment: Some(&[Equipment::Dumbbell, Equipment::Bench]),
                video: Some("videos/dumbbell-bench-press.mp4"),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: 303,
                name: "Incline Dumbbell Press",
                load: Some(Load::Moderate),
                equipment: Some(&[Equipment::Dumbbell, Equipment::Bench]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: 304,
        name: "Machine Chest Press",
        body_part: BodyPart::Chest,
        category: Category::Main,
        force: Force::Push,
        mechanic: Mechanic::Compound,
        load: Load::Moderate,
        equipment: &[Equipment::Machine],
        video: Some("videos/machine-chest-press.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 305,
        name: "Push Up",
        body_part: BodyPart::Chest,
        category: Category::Main,
        force: Force::Push,
        mechanic: Mechanic::Compound,
        load: Load::Moderate,
        equipment: BODYWEIGHT,
        video: Some("videos/push-up.mp4"),
        variants: &[
            ExerciseVariant {
                id: 306,
                name: "Incline Push Up",
                load: Some(Load::Light),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: 307,
                name: "Decline Push Up",
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: 308,
        name: "Cable Fly",
        body_part: BodyPart::Chest,
        category: Category::Main,
        force: Force::Push,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: &[Equipment::Cable],
        video: Some("videos/cable-fly.mp4"),
        variants: &[ExerciseVariant {
            id: 309,
            name: "Dumbbell Fly",
            equipment: Some(&[Equipment::Dumbbell, Equipment::Bench]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: 310,
        name: "Band Chest Press",
        body_part: BodyPart::Chest,
        category: Category::Main,
        force: Force::Push,
        mechanic: Mechanic::Compound,
        load: Load::Moderate,
        equipment: &[Equipment::ResistanceBand],
        video: None,
        variants: &[],
    },
    // Back
    BaseExercise {
        id: 401,
        name: "Barbell Row",
        body_part: BodyPart::Back,
        category: Category::Main,
        force: Force::Pull,
        mechanic: Mechanic::Compound,
        load: Load::Heavy,
        equipment: &[Equipment::Barbell],
        video: Some("videos/barbell-row.mp4"),
        variants: &[ExerciseVariant {
            id: 402,
            name: "Dumbbell Row",
            load: Some(Load::Moderate),
            equipment: Some(&[Equipment::Dumbbell]),
            video: Some("videos/dumbbell-row.mp4"),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: 403,
        name: "Lat Pulldown",
        body_part: BodyPart::Back,
        category: Category::Main,
        force: Force::Pull,
        mechanic: Mechanic::Compound,
        load: Load::Heavy,
        equipment: &[Equipment::Cable],
        video: Some("videos/lat-pulldown.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 404,
        name: "Pull Up",
        body_part: BodyPart::Back,
        category: Category::Main,
        force: Force::Pull,
        mechanic: Mechanic::Compound,
        load: Load::Heavy,
        equipment: &[Equipment::PullUpBar],
        video: Some("videos/pull-up.mp4"),
        variants: &[ExerciseVariant {
            id: 405,
            name: "Band Assisted Pull Up",
            load: Some(Load::Moderate),
            equipment: Some(&[Equipment::PullUpBar, Equipment::ResistanceBand]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: 406,
        name: "Seated Cable Row",
        body_part: BodyPart::Back,
        category: Category::Main,
        force: Force::Pull,
        mechanic: Mechanic::Compound,
        load: Load::Moderate,
        equipment: &[Equipment::Cable],
        video: Some("videos/seated-cable-row.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 407,
        name: "Band Row",
        body_part: BodyPart::Back,
        category: Category::Main,
        force: Force::Pull,
        mechanic: Mechanic::Compound,
        load: Load::Moderate,
        equipment: &[Equipment::ResistanceBand],
        video: None,
        variants: &[],
    },
    BaseExercise {
        id: 408,
        name: "Superman",
        body_part: BodyPart::Back,
        category: Category::Main,
        force: Force::Static,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: Some("videos/superman.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 409,
        name: "Reverse Snow Angel",
        body_part: BodyPart::Back,
        category: Category::Main,
        force: Force::Pull,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: None,
        variants: &[],
    },
    BaseExercise {
        id: 410,
        name: "Chest Supported Row",
        body_part: BodyPart::Back,
        category: Category::Main,
        force: Force::Pull,
        mechanic: Mechanic::Compound,
        load: Load::Moderate,
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        video: None,
        variants: &[],
    },
    // Shoulders
    BaseExercise {
        id: 501,
        name: "Overhead Press",
        body_part: BodyPart::Shoulders,
        category: Category::Main,
        force: Force::Push,
        mechanic: Mechanic::Compound,
        load: Load::Heavy,
        equipment: &[Equipment::Barbell],
        video: Some("videos/overhead-press.mp4"),
        variants: &[
            ExerciseVariant {
                id: 502,
                name: "Dumbbell Shoulder Press",
                load: Some(Load::Moderate),
                equipment: Some(&[Equipment::Dumbbell]),
                video: Some("videos/dumbbell-shoulder-press.mp4"),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: 503,
                name: "Kettlebell Press",
                load: Some(Load::Moderate),
                equipment: Some(&[Equipment::Kettlebell]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: 504,
        name: "Lateral Raise",
        body_part: BodyPart::Shoulders,
        category: Category::Main,
        force: Force::Push,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: &[Equipment::Dumbbell],
        video: Some("videos/lateral-raise.mp4"),
        variants: &[ExerciseVariant {
            id: 505,
            name: "Cable Lateral Raise",
            equipment: Some(&[Equipment::Cable]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: 506,
        name: "Face Pull",
        body_part: BodyPart::Shoulders,
        category: Category::Main,
        force: Force::Pull,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: &[Equipment::Cable],
        video: Some("videos/face-pull.mp4"),
        variants: &[ExerciseVariant {
            id: 507,
            name: "Band Face Pull",
            equipment: Some(&[Equipment::ResistanceBand]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: 508,
        name: "Pike Push Up",
        body_part: BodyPart::Shoulders,
        category: Category::Main,
        force: Force::Push,
        mechanic: Mechanic::Compound,
        load: Load::Moderate,
        equipment: BODYWEIGHT,
        video: Some("videos/pike-push-up.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 509,
        name: "Reverse Fly",
        body_part: BodyPart::Shoulders,
        category: Category::Main,
        force: Force::Pull,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: &[Equipment::Dumbbell],
        video: None,
        variants: &[],
    },
    BaseExercise {
        id: 510,
        name: "Prone Y Raise",
        body_part: BodyPart::Shoulders,
        category: Category::Main,
        force: Force::Pull,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: None,
        variants: &[],
    },
    BaseExercise {
        id: 511,
        name: "Machine Shoulder Press",
        body_part: BodyPart::Shoulders,
        category: Category::Main,
        force: Force::Push,
        mechanic: Mechanic::Compound,
        load: Load::Moderate,
        equipment: &[Equipment::Machine],
        video: None,
        variants: &[],
    },
    // Arms
    BaseExercise {
        id: 601,
        name: "Dumbbell Curl",
        body_part: BodyPart::Arms,
        category: Category::Main,
        force: Force::Pull,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: &[Equipment::Dumbbell],
        video: Some("videos/dumbbell-curl.mp4"),
        variants: &[
            ExerciseVariant {
                id: 602,
                name: "Hammer Curl",
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: 603,
                name: "Cable Curl",
                equipment: Some(&[Equipment::Cable]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: 604,
                name: "Band Curl",
                equipment: Some(&[Equipment::ResistanceBand]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: 605,
        name: "Triceps Pushdown",
        body_part: BodyPart::Arms,
        category: Category::Main,
        force: Force::Push,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: &[Equipment::Cable],
        video: Some("videos/triceps-pushdown.mp4"),
        variants: &[ExerciseVariant {
            id: 606,
            name: "Band Triceps Pushdown",
            equipment: Some(&[Equipment::ResistanceBand]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: 607,
        name: "Bench Dip",
        body_part: BodyPart::Arms,
        category: Category::Main,
        force: Force::Push,
        mechanic: Mechanic::Compound,
        load: Load::Moderate,
        equipment: &[Equipment::Bench],
        video: Some("videos/bench-dip.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 608,
        name: "Overhead Triceps Extension",
        body_part: BodyPart::Arms,
        category: Category::Main,
        force: Force::Push,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: &[Equipment::Dumbbell],
        video: None,
        variants: &[],
    },
    BaseExercise {
        id: 609,
        name: "Diamond Push Up",
        body_part: BodyPart::Arms,
        category: Category::Main,
        force: Force::Push,
        mechanic: Mechanic::Compound,
        load: Load::Moderate,
        equipment: BODYWEIGHT,
        video: Some("videos/diamond-push-up.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 610,
        name: "Chin Up",
        body_part: BodyPart::Arms,
        category: Category::Main,
        force: Force::Pull,
        mechanic: Mechanic::Compound,
        load: Load::Moderate,
        equipment: &[Equipment::PullUpBar],
        video: Some("videos/chin-up.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 611,
        name: "Barbell Curl",
        body_part: BodyPart::Arms,
        category: Category::Main,
        force: Force::Pull,
        mechanic: Mechanic::Isolation,
        load: Load::Moderate,
        equipment: &[Equipment::Barbell],
        video: None,
        variants: &[],
    },
    // Legs
    BaseExercise {
        id: 701,
        name: "Back Squat",
        body_part: BodyPart::Legs,
        category: Category::Main,
        force: Force::Push,
        mechanic: Mechanic::Compound,
        load: Load::Heavy,
        equipment: &[Equipment::Barbell],
        video: Some("videos/back-squat.mp4"),
        variants: &[ExerciseVariant {
            id: 702,
            name: "Front Squat",
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: 703,
        name: "Goblet Squat",
        body_part: BodyPart::Legs,
        category: Category::Main,
        force: Force::Push,
        mechanic: Mechanic::Compound,
        load: Load::Moderate,
        equipment: &[Equipment::Dumbbell],
        video: Some("videos/goblet-squat.mp4"),
        variants: &[ExerciseVariant {
            id: 704,
            name: "Kettlebell Goblet Squat",
            equipment: Some(&[Equipment::Kettlebell]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: 705,
        name: "Leg Press",
        body_part: BodyPart::Legs,
        category: Category::Main,
        force: Force::Push,
        mechanic: Mechanic::Compound,
        load: Load::Heavy,
        equipment: &[Equipment::Machine],
        video: Some("videos/leg-press.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 706,
        name: "Romanian Deadlift",
        body_part: BodyPart::Legs,
        category: Category::Main,
        force: Force::Pull,
        mechanic: Mechanic::Compound,
        load: Load::Heavy,
        equipment: &[Equipment::Barbell],
        video: Some("videos/romanian-deadlift.mp4"),
        variants: &[ExerciseVariant {
            id: 707,
            name: "Dumbbell Romanian Deadlift",
            load: Some(Load::Moderate),
            equipment: Some(&[Equipment::Dumbbell]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: 708,
        name: "Deadlift",
        body_part: BodyPart::Legs,
        category: Category::Main,
        force: Force::Pull,
        mechanic: Mechanic::Compound,
        load: Load::Heavy,
        equipment: &[Equipment::Barbell],
        video: Some("videos/deadlift.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 709,
        name: "Walking Lunge",
        body_part: BodyPart::Legs,
        category: Category::Main,
        force: Force::Push,
        mechanic: Mechanic::Compound,
        load: Load::Moderate,
        equipment: BODYWEIGHT,
        video: Some("videos/walking-lunge.mp4"),
        variants: &[ExerciseVariant {
            id: 710,
            name: "Dumbbell Lunge",
            equipment: Some(&[Equipment::Dumbbell]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: 711,
        name: "Bulgarian Split Squat",
        body_part: BodyPart::Legs,
        category: Category::Main,
        force: Force::Push,
        mechanic: Mechanic::Compound,
        load: Load::Moderate,
        equipment: &[Equipment::Bench],
        video: Some("videos/bulgarian-split-squat.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 712,
        name: "Leg Extension",
        body_part: BodyPart::Legs,
        category: Category::Main,
        force: Force::Push,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: &[Equipment::Machine],
        video: None,
        variants: &[],
    },
    BaseExercise {
        id: 713,
        name: "Leg Curl",
        body_part: BodyPart::Legs,
        category: Category::Main,
        force: Force::Pull,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: &[Equipment::Machine],
        video: None,
        variants: &[],
    },
    BaseExercise {
        id: 714,
        name: "Calf Raise",
        body_part: BodyPart::Legs,
        category: Category::Main,
        force: Force::Push,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: Some("videos/calf-raise.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 715,
        name: "Jump Squat",
        body_part: BodyPart::Legs,
        category: Category::Main,
        force: Force::Push,
        mechanic: Mechanic::Compound,
        load: Load::Moderate,
        equipment: BODYWEIGHT,
        video: None,
        variants: &[],
    },
    BaseExercise {
        id: 716,
        name: "Wall Sit",
        body_part: BodyPart::Legs,
        category: Category::Main,
        force: Force::Static,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: None,
        variants: &[],
    },
    BaseExercise {
        id: 717,
        name: "Step Up",
        body_part: BodyPart::Legs,
        category: Category::Main,
        force: Force::Push,
        mechanic: Mechanic::Compound,
        load: Load::Moderate,
        equipment: &[Equipment::Bench],
        video: None,
        variants: &[],
    },
    // Glutes
    BaseExercise {
        id: 801,
        name: "Hip Thrust",
        body_part: BodyPart::Glutes,
        category: Category::Main,
        force: Force::Push,
        mechanic: Mechanic::Compound,
        load: Load::Heavy,
        equipment: &[Equipment::Barbell, Equipment::Bench],
        video: Some("videos/hip-thrust.mp4"),
        variants: &[ExerciseVariant {
            id: 802,
            name: "Single Leg Hip Thrust",
            load: Some(Load::Moderate),
            equipment: Some(BODYWEIGHT),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: 803,
        name: "Kettlebell Swing",
        body_part: BodyPart::Glutes,
        category: Category::Main,
        force: Force::Pull,
        mechanic: Mechanic::Compound,
        load: Load::Moderate,
        equipment: &[Equipment::Kettlebell],
        video: Some("videos/kettlebell-swing.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 804,
        name: "Cable Pull Through",
        body_part: BodyPart::Glutes,
        category: Category::Main,
        force: Force::Pull,
        mechanic: Mechanic::Compound,
        load: Load::Moderate,
        equipment: &[Equipment::Cable],
        video: None,
        variants: &[],
    },
    BaseExercise {
        id: 805,
        name: "Band Lateral Walk",
        body_part: BodyPart::Glutes,
        category: Category::Main,
        force: Force::Static,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: &[Equipment::ResistanceBand],
        video: None,
        variants: &[],
    },
    BaseExercise {
        id: 806,
        name: "Single Leg Glute Bridge",
        body_part: BodyPart::Glutes,
        category: Category::Main,
        force: Force::Push,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: None,
        variants: &[],
    },
    BaseExercise {
        id: 807,
        name: "Donkey Kick",
        body_part: BodyPart::Glutes,
        category: Category::Main,
        force: Force::Push,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: None,
        variants: &[],
    },
    // Core
    BaseExercise {
        id: 901,
        name: "Plank",
        body_part: BodyPart::Core,
        category: Category::Main,
        force: Force::Static,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: Some("videos/plank.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 902,
        name: "Dead Bug",
        body_part: BodyPart::Core,
        category: Category::Main,
        force: Force::Static,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: Some("videos/dead-bug.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 903,
        name: "Hanging Leg Raise",
        body_part: BodyPart::Core,
        category: Category::Main,
        force: Force::Pull,
        mechanic: Mechanic::Isolation,
        load: Load::Moderate,
        equipment: &[Equipment::PullUpBar],
        video: Some("videos/hanging-leg-raise.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 904,
        name: "Cable Crunch",
        body_part: BodyPart::Core,
        category: Category::Main,
        force: Force::Pull,
        mechanic: Mechanic::Isolation,
        load: Load::Moderate,
        equipment: &[Equipment::Cable],
        video: None,
        variants: &[],
    },
    BaseExercise {
        id: 905,
        name: "Russian Twist",
        body_part: BodyPart::Core,
        category: Category::Main,
        force: Force::Static,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: None,
        variants: &[],
    },
    BaseExercise {
        id: 906,
        name: "Side Plank",
        body_part: BodyPart::Core,
        category: Category::Main,
        force: Force::Static,
        mechanic: Mechanic::Isolation,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: None,
        variants: &[],
    },
    // Full body
    BaseExercise {
        id: 1001,
        name: "Burpee",
        body_part: BodyPart::FullBody,
        category: Category::Main,
        force: Force::Push,
        mechanic: Mechanic::Compound,
        load: Load::Moderate,
        equipment: BODYWEIGHT,
        video: Some("videos/burpee.mp4"),
        variants: &[],
    },
    BaseExercise {
        id: 1002,
        name: "Dumbbell Thruster",
        body_part: BodyPart::FullBody,
        category: Category::Main,
        force: Force::Push,
        mechanic: Mechanic::Compound,
        load: Load::Moderate,
        equipment: &[Equipment::Dumbbell],
        video: None,
        variants: &[],
    },
    BaseExercise {
        id: 1003,
        name: "Kettlebell Clean and Press",
        body_part: BodyPart::FullBody,
        category: Category::Main,
        force: Force::Push,
        mechanic: Mechanic::Compound,
        load: Load::Moderate,
        equipment: &[Equipment::Kettlebell],
        video: None,
        variants: &[],
    },
    BaseExercise {
        id: 1004,
        name: "Mountain Climber",
        body_part: BodyPart::FullBody,
        category: Category::Main,
        force: Force::Static,
        mechanic: Mechanic::Compound,
        load: Load::Light,
        equipment: BODYWEIGHT,
        video: None,
        variants: &[],
    },
];
