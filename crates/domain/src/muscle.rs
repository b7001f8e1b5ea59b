use derive_more::Deref;
use strum::{Display, EnumIter, EnumString};
use uuid::Uuid;

use crate::{CreateError, Name, ReadError};

pub trait MuscleRepository: Send + Sync + 'static {
    fn read_muscles(&self) -> Result<Vec<Muscle>, ReadError>;
    fn read_muscles_by_group(&self, group: MuscleGroup) -> Result<Vec<Muscle>, ReadError>;
    fn create_muscle(&self, name: Name, group: MuscleGroup) -> Result<Muscle, CreateError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Muscle {
    pub id: MuscleID,
    pub name: Name,
    pub group: MuscleGroup,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct MuscleID(Uuid);

impl From<Uuid> for MuscleID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for MuscleID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// The canonical vocabulary that free-text section headers are translated into.
#[derive(
    Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, PartialEq, PartialOrd, Ord,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum MuscleGroup {
    Chest,
    Deltoids,
    Shoulders,
    Biceps,
    Triceps,
    Back,
    Forearms,
    Glutes,
    Legs,
    Calves,
}

impl MuscleGroup {
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Deltoids => "Deltoids",
            MuscleGroup::Shoulders => "Shoulders and upper back",
            MuscleGroup::Biceps => "Front of upper arms",
            MuscleGroup::Triceps => "Back of upper arms",
            MuscleGroup::Back => "Back",
            MuscleGroup::Forearms => "Forearms",
            MuscleGroup::Glutes => "Buttocks",
            MuscleGroup::Legs => "Thighs",
            MuscleGroup::Calves => "Back of lower legs",
        }
    }
}

/// Muscles a fresh catalog is seeded with.
pub const DEFAULT_MUSCLES: &[(&str, MuscleGroup)] = &[
    // Chest
    ("Pectoralis Major", MuscleGroup::Chest),
    ("Pectoralis Minor", MuscleGroup::Chest),
    // Deltoids
    ("Anterior Deltoid", MuscleGroup::Deltoids),
    ("Lateral Deltoid", MuscleGroup::Deltoids),
    ("Posterior Deltoid", MuscleGroup::Deltoids),
    // Shoulders
    ("Trapezius", MuscleGroup::Shoulders),
    // Biceps
    ("Biceps Brachii", MuscleGroup::Biceps),
    ("Brachialis", MuscleGroup::Biceps),
    // Triceps
    ("Triceps Brachii", MuscleGroup::Triceps),
    // Back
    ("Latissimus Dorsi", MuscleGroup::Back),
    ("Rhomboids", MuscleGroup::Back),
    ("Erector Spinae", MuscleGroup::Back),
    // Forearms
    ("Forearm Flexors", MuscleGroup::Forearms),
    ("Forearm Extensors", MuscleGroup::Forearms),
    // Glutes
    ("Gluteus Maximus", MuscleGroup::Glutes),
    ("Gluteus Medius", MuscleGroup::Glutes),
    // Legs
    ("Quadriceps", MuscleGroup::Legs),
    ("Hamstrings", MuscleGroup::Legs),
    ("Adductors", MuscleGroup::Legs),
    ("Abductors", MuscleGroup::Legs),
    // Calves
    ("Gastrocnemius", MuscleGroup::Calves),
    ("Soleus", MuscleGroup::Calves),
];
