use std::{
    collections::{BTreeSet, HashSet},
    slice::Iter,
};

use derive_more::{Deref, Display};
use uuid::Uuid;

use crate::{InputError, Name, ReadError};

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn find_exercises(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub body_part: BodyPart,
    pub category: Category,
    pub force: Force,
    pub mechanic: Mechanic,
    pub load: Load,
    pub equipment: BTreeSet<Equipment>,
    pub video_url: Option<String>,
}

impl Exercise {
    /// Multi-joint, high-load movement such as a bench press or a squat.
    #[must_use]
    pub fn is_heavy_compound(&self) -> bool {
        self.mechanic == Mechanic::Compound && self.load == Load::Heavy
    }

    #[must_use]
    pub fn is_bodyweight(&self) -> bool {
        self.equipment.is_empty()
    }

    #[must_use]
    pub fn available_with(&self, equipment: &BTreeSet<Equipment>) -> bool {
        self.equipment.is_subset(equipment)
    }

    #[must_use]
    pub fn has_video(&self) -> bool {
        self.video_url.as_ref().is_some_and(|url| !url.trim().is_empty())
    }

    /// Whether a history entry (name or id) refers to this exercise.
    #[must_use]
    pub fn is_referenced_by(&self, entry: &str) -> bool {
        self.name.matches(entry) || self.id.to_string() == entry.trim().to_lowercase()
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum BodyPart {
    Chest,
    Back,
    Shoulders,
    Arms,
    Core,
    Legs,
    Glutes,
    FullBody,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Region {
    Upper,
    Lower,
    Neutral,
}

impl BodyPart {
    pub const UPPER: [BodyPart; 4] = [
        BodyPart::Chest,
        BodyPart::Back,
        BodyPart::Shoulders,
        BodyPart::Arms,
    ];
    pub const LOWER: [BodyPart; 2] = [BodyPart::Legs, BodyPart::Glutes];

    #[must_use]
    pub fn region(self) -> Region {
        match self {
            BodyPart::Chest | BodyPart::Back | BodyPart::Shoulders | BodyPart::Arms => {
                Region::Upper
            }
            BodyPart::Legs | BodyPart::Glutes => Region::Lower,
            BodyPart::Core | BodyPart::FullBody => Region::Neutral,
        }
    }
}

impl Property for BodyPart {
    fn iter() -> Iter<'static, BodyPart> {
        static BODY_PARTS: [BodyPart; 8] = [
            BodyPart::Chest,
            BodyPart::Back,
            BodyPart::Shoulders,
            BodyPart::Arms,
            BodyPart::Core,
            BodyPart::Legs,
            BodyPart::Glutes,
            BodyPart::FullBody,
        ];
        BODY_PARTS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            BodyPart::Chest => "Chest",
            BodyPart::Back => "Back",
            BodyPart::Shoulders => "Shoulders",
            BodyPart::Arms => "Arms",
            BodyPart::Core => "Core",
            BodyPart::Legs => "Legs",
            BodyPart::Glutes => "Glutes",
            BodyPart::FullBody => "Full Body",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            BodyPart::Chest => &["pecs"],
            BodyPart::Back => &["lats", "upper back"],
            BodyPart::Shoulders => &["delts"],
            BodyPart::Arms => &["biceps", "triceps"],
            BodyPart::Core => &["abs", "abdominals"],
            BodyPart::Legs => &["quads", "hamstrings", "calves"],
            BodyPart::Glutes => &["hips"],
            BodyPart::FullBody => &["full", "total body"],
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Category {
    Warmup,
    Main,
    Cooldown,
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORY: [Category; 3] = [Category::Warmup, Category::Main, Category::Cooldown];
        CATEGORY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Category::Warmup => "Warmup",
            Category::Main => "Main",
            Category::Cooldown => "Cooldown",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Category::Warmup => &["warm-up"],
            Category::Main => &["strength", "workout"],
            Category::Cooldown => &["cool-down", "stretch"],
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Force {
    Push,
    Pull,
    Static,
}

impl Property for Force {
    fn iter() -> Iter<'static, Force> {
        static FORCE: [Force; 3] = [Force::Push, Force::Pull, Force::Static];
        FORCE.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Force::Push => "Push",
            Force::Pull => "Pull",
            Force::Static => "Static",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Mechanic {
    Compound,
    Isolation,
}

impl Property for Mechanic {
    fn iter() -> Iter<'static, Mechanic> {
        static MECHANIC: [Mechanic; 2] = [Mechanic::Compound, Mechanic::Isolation];
        MECHANIC.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Mechanic::Compound => "Compound",
            Mechanic::Isolation => "Isolation",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Load {
    Heavy,
    Moderate,
    Light,
}

impl Property for Load {
    fn iter() -> Iter<'static, Load> {
        static LOAD: [Load; 3] = [Load::Heavy, Load::Moderate, Load::Light];
        LOAD.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Load::Heavy => "Heavy",
            Load::Moderate => "Moderate",
            Load::Light => "Light",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Equipment {
    Barbell,
    Bench,
    Cable,
    Dumbbell,
    Kettlebell,
    Machine,
    PullUpBar,
    ResistanceBand,
}

impl Equipment {
    /// Parses a list of user-supplied equipment names. Entries meaning "no
    /// equipment" are accepted and contribute nothing to the set.
    pub fn parse_list<S: AsRef<str>>(values: &[S]) -> Result<BTreeSet<Equipment>, InputError> {
        let mut result = BTreeSet::new();
        for value in values {
            let value = value.as_ref();
            if matches!(normalize(value).as_str(), "none" | "bodyweight" | "noequipment") {
                continue;
            }
            result.insert(Equipment::parse(value).ok_or_else(|| InputError::Unknown {
                field: "equipment",
                value: value.to_string(),
            })?);
        }
        Ok(result)
    }
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 8] = [
            Equipment::Barbell,
            Equipment::Bench,
            Equipment::Cable,
            Equipment::Dumbbell,
            Equipment::Kettlebell,
            Equipment::Machine,
            Equipment::PullUpBar,
            Equipment::ResistanceBand,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Barbell => "Barbell",
            Equipment::Bench => "Bench",
            Equipment::Cable => "Cable",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::Machine => "Machine",
            Equipment::PullUpBar => "Pull Up Bar",
            Equipment::ResistanceBand => "Resistance Band",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Equipment::Cable => &["cable machine", "cable station"],
            Equipment::Machine => &["machines", "gym machine"],
            Equipment::PullUpBar => &["chin up bar"],
            Equipment::ResistanceBand => &["band"],
            _ => &[],
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExerciseFilter {
    pub name: String,
    pub body_parts: HashSet<BodyPart>,
    pub categories: HashSet<Category>,
    pub forces: HashSet<Force>,
    pub mechanics: HashSet<Mechanic>,
    pub available_equipment: Option<BTreeSet<Equipment>>,
}

impl ExerciseFilter {
    /// Filter for everything a user can perform with the given equipment.
    #[must_use]
    pub fn available_with(equipment: &BTreeSet<Equipment>) -> Self {
        Self {
            available_equipment: Some(equipment.clone()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn matches(&self, exercise: &Exercise) -> bool {
        exercise
            .name
            .key()
            .contains(self.name.to_lowercase().trim())
            && (self.body_parts.is_empty() || self.body_parts.contains(&exercise.body_part))
            && (self.categories.is_empty() || self.categories.contains(&exercise.category))
            && (self.forces.is_empty() || self.forces.contains(&exercise.force))
            && (self.mechanics.is_empty() || self.mechanics.contains(&exercise.mechanic))
            && self
                .available_equipment
                .as_ref()
                .is_none_or(|available| exercise.available_with(available))
    }

    #[must_use]
    pub fn exercises<'a>(
        &self,
        exercises: impl Iterator<Item = &'a Exercise>,
    ) -> Vec<&'a Exercise> {
        exercises.filter(|e| self.matches(e)).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
            && self.body_parts.is_empty()
            && self.categories.is_empty()
            && self.forces.is_empty()
            && self.mechanics.is_empty()
            && self.available_equipment.is_none()
    }
}

pub trait Property: Clone + Copy + Sized + 'static {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
    fn aliases(self) -> &'static [&'static str] {
        &[]
    }

    /// Case-, separator- and plural-insensitive lookup by name or alias.
    fn parse(value: &str) -> Option<Self> {
        let wanted = normalize(value);
        if wanted.is_empty() {
            return None;
        }
        Self::iter().copied().find(|p| {
            normalize(p.name()) == wanted || p.aliases().iter().any(|a| normalize(a) == wanted)
        })
    }
}

fn normalize(value: &str) -> String {
    let normalized = value
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase();
    normalized
        .strip_suffix('s')
        .map_or(normalized.clone(), str::to_string)
}
