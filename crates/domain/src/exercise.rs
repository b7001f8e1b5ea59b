use std::collections::BTreeSet;

use derive_more::Deref;
use uuid::Uuid;

use crate::{CreateError, Muscle, MuscleGroup, Name, ReadError, UpdateError};

pub trait ExerciseRepository: Send + Sync + 'static {
    fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    fn read_exercise_by_name(&self, name: &Name) -> Result<Option<Exercise>, ReadError>;
    fn create_exercise(
        &self,
        name: Name,
        video_url: Option<String>,
        muscles: Vec<Muscle>,
    ) -> Result<Exercise, CreateError>;
    fn replace_exercise(&self, exercise: Exercise) -> Result<Exercise, UpdateError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub video_url: Option<String>,
    pub muscles: Vec<Muscle>,
}

impl Exercise {
    /// An exercise that has not been persisted yet.
    #[must_use]
    pub fn new(name: Name) -> Self {
        Self {
            id: ExerciseID::nil(),
            name,
            video_url: None,
            muscles: vec![],
        }
    }

    #[must_use]
    pub fn is_new(&self) -> bool {
        self.id.is_nil()
    }

    /// Last write wins. A missing or empty URL keeps the stored one.
    pub fn set_video_url(&mut self, video_url: Option<&str>) {
        if let Some(video_url) = video_url.filter(|url| !url.is_empty()) {
            self.video_url = Some(video_url.to_string());
        }
    }

    /// Adds every muscle not yet associated, never removing an existing association.
    ///
    /// An exercise without muscles takes over the given muscles as they are.
    pub fn merge_muscles(&mut self, muscles: impl IntoIterator<Item = Muscle>) {
        for muscle in muscles {
            if self.muscles.iter().all(|m| m.id != muscle.id) {
                self.muscles.push(muscle);
            }
        }
    }

    #[must_use]
    pub fn muscle_groups(&self) -> BTreeSet<MuscleGroup> {
        self.muscles.iter().map(|m| m.group).collect()
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
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
