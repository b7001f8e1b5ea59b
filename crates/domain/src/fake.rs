use std::sync::Mutex;

use crate::{
    CreateError, DEFAULT_MUSCLES, Exercise, ExerciseRepository, Muscle, MuscleGroup,
    MuscleRepository, Name, ReadError, StorageError, UpdateError,
};

#[derive(Default)]
struct State {
    exercises: Vec<Exercise>,
    muscles: Vec<Muscle>,
    failing: Vec<String>,
    next_id: u128,
    created: usize,
    replaced: usize,
}

impl State {
    fn next_id(&mut self) -> u128 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct Repository {
    state: Mutex<State>,
}

impl Repository {
    pub fn with_muscles() -> Self {
        let repository = Self::default();
        for (name, group) in DEFAULT_MUSCLES {
            repository
                .create_muscle(Name::new(name).unwrap(), *group)
                .unwrap();
        }
        repository
    }

    pub fn fail_on(&self, name: &str) {
        self.state.lock().unwrap().failing.push(name.to_string());
    }

    pub fn insert(&self, mut exercise: Exercise) {
        let mut state = self.state.lock().unwrap();
        exercise.id = state.next_id().into();
        state.exercises.push(exercise);
    }

    pub fn exercises(&self) -> Vec<Exercise> {
        self.state.lock().unwrap().exercises.clone()
    }

    pub fn muscles_of(&self, group: MuscleGroup) -> Vec<Muscle> {
        self.read_muscles_by_group(group).unwrap()
    }

    pub fn created(&self) -> usize {
        self.state.lock().unwrap().created
    }

    pub fn replaced(&self) -> usize {
        self.state.lock().unwrap().replaced
    }
}

impl ExerciseRepository for Repository {
    fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        Ok(self.exercises())
    }

    fn read_exercise_by_name(&self, name: &Name) -> Result<Option<Exercise>, ReadError> {
        let state = self.state.lock().unwrap();
        if state.failing.iter().any(|n| n == name.as_str()) {
            return Err(StorageError::Unavailable.into());
        }
        Ok(state.exercises.iter().find(|e| e.name == *name).cloned())
    }

    fn create_exercise(
        &self,
        name: Name,
        video_url: Option<String>,
        muscles: Vec<Muscle>,
    ) -> Result<Exercise, CreateError> {
        let mut state = self.state.lock().unwrap();
        let exercise = Exercise {
            id: state.next_id().into(),
            name,
            video_url,
            muscles,
        };
        state.exercises.push(exercise.clone());
        state.created += 1;
        Ok(exercise)
    }

    fn replace_exercise(&self, exercise: Exercise) -> Result<Exercise, UpdateError> {
        let mut state = self.state.lock().unwrap();
        let Some(stored) = state.exercises.iter_mut().find(|e| e.id == exercise.id) else {
            return Err(UpdateError::NotFound);
        };
        *stored = exercise.clone();
        state.replaced += 1;
        Ok(exercise)
    }
}

impl MuscleRepository for Repository {
    fn read_muscles(&self) -> Result<Vec<Muscle>, ReadError> {
        Ok(self.state.lock().unwrap().muscles.clone())
    }

    fn read_muscles_by_group(&self, group: MuscleGroup) -> Result<Vec<Muscle>, ReadError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .muscles
            .iter()
            .filter(|m| m.group == group)
            .cloned()
            .collect())
    }

    fn create_muscle(&self, name: Name, group: MuscleGroup) -> Result<Muscle, CreateError> {
        let mut state = self.state.lock().unwrap();
        let muscle = Muscle {
            id: state.next_id().into(),
            name,
            group,
        };
        state.muscles.push(muscle.clone());
        Ok(muscle)
    }
}
