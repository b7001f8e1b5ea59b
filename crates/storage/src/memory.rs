use std::sync::{Mutex, MutexGuard};

use kraftlog_domain as domain;
use log::debug;
use uuid::Uuid;

/// Exercise catalog held in memory.
#[derive(Default)]
pub struct Catalog {
    state: Mutex<State>,
}

#[derive(Default, Clone)]
struct State {
    exercises: Vec<domain::Exercise>,
    muscles: Vec<domain::Muscle>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_parts(exercises: Vec<domain::Exercise>, muscles: Vec<domain::Muscle>) -> Self {
        Self {
            state: Mutex::new(State { exercises, muscles }),
        }
    }

    pub fn with_default_muscles() -> Result<Self, domain::CreateError> {
        let catalog = Self::new();
        catalog.seed_default_muscles()?;
        Ok(catalog)
    }

    /// Creates the default muscles if the catalog has no muscles yet.
    ///
    /// Returns the number of created muscles.
    pub fn seed_default_muscles(&self) -> Result<usize, domain::CreateError> {
        if !self.lock()?.muscles.is_empty() {
            return Ok(0);
        }

        for (name, group) in domain::DEFAULT_MUSCLES {
            let name =
                domain::Name::new(name).map_err(|err| domain::CreateError::Other(err.into()))?;
            domain::MuscleRepository::create_muscle(self, name, *group)?;
        }

        Ok(domain::DEFAULT_MUSCLES.len())
    }

    pub fn snapshot(
        &self,
    ) -> Result<(Vec<domain::Exercise>, Vec<domain::Muscle>), domain::StorageError> {
        let state = self.lock()?;
        Ok((state.exercises.clone(), state.muscles.clone()))
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, domain::StorageError> {
        self.state
            .lock()
            .map_err(|_| domain::StorageError::Poisoned)
    }
}

impl domain::ExerciseRepository for Catalog {
    fn read_exercises(&self) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        Ok(self.lock()?.exercises.clone())
    }

    fn read_exercise_by_name(
        &self,
        name: &domain::Name,
    ) -> Result<Option<domain::Exercise>, domain::ReadError> {
        Ok(self
            .lock()?
            .exercises
            .iter()
            .find(|e| e.name == *name)
            .cloned())
    }

    fn create_exercise(
        &self,
        name: domain::Name,
        video_url: Option<String>,
        muscles: Vec<domain::Muscle>,
    ) -> Result<domain::Exercise, domain::CreateError> {
        let mut state = self.lock()?;

        if state.exercises.iter().any(|e| e.name == name) {
            return Err(domain::CreateError::Conflict);
        }

        let exercise = domain::Exercise {
            id: Uuid::new_v4().into(),
            name,
            video_url,
            muscles,
        };
        debug!("storing new exercise {} ({})", exercise.name, *exercise.id);
        state.exercises.push(exercise.clone());

        Ok(exercise)
    }

    fn replace_exercise(
        &self,
        exercise: domain::Exercise,
    ) -> Result<domain::Exercise, domain::UpdateError> {
        let mut state = self.lock()?;

        if state
            .exercises
            .iter()
            .any(|e| e.id != exercise.id && e.name == exercise.name)
        {
            return Err(domain::UpdateError::Conflict);
        }

        let Some(stored) = state.exercises.iter_mut().find(|e| e.id == exercise.id) else {
            return Err(domain::UpdateError::NotFound);
        };
        *stored = exercise.clone();

        Ok(exercise)
    }
}

impl domain::MuscleRepository for Catalog {
    fn read_muscles(&self) -> Result<Vec<domain::Muscle>, domain::ReadError> {
        Ok(self.lock()?.muscles.clone())
    }

    fn read_muscles_by_group(
        &self,
        group: domain::MuscleGroup,
    ) -> Result<Vec<domain::Muscle>, domain::ReadError> {
        Ok(self
            .lock()?
            .muscles
            .iter()
            .filter(|m| m.group == group)
            .cloned()
            .collect())
    }

    fn create_muscle(
        &self,
        name: domain::Name,
        group: domain::MuscleGroup,
    ) -> Result<domain::Muscle, domain::CreateError> {
        let mut state = self.lock()?;

        if state.muscles.iter().any(|m| m.name == name) {
            return Err(domain::CreateError::Conflict);
        }

        let muscle = domain::Muscle {
            id: Uuid::new_v4().into(),
            name,
            group,
        };
        state.muscles.push(muscle.clone());

        Ok(muscle)
    }
}
