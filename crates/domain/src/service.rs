use std::sync::Arc;

use log::{debug, error};

use crate::{
    Exercise, ExerciseRepository, ImportError, ImportResult, ImportService, Muscle,
    MuscleGroupDictionary, MuscleRepository, ReadError, import,
};

pub trait ExerciseService {
    fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
}

pub trait MuscleService {
    fn get_muscles(&self) -> Result<Vec<Muscle>, ReadError>;
}

pub struct Service<R> {
    repository: R,
    dictionary: Arc<MuscleGroupDictionary>,
}

impl<R> Service<R> {
    pub fn new(repository: R, dictionary: Arc<MuscleGroupDictionary>) -> Self {
        Self {
            repository,
            dictionary,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn dictionary(&self) -> &MuscleGroupDictionary {
        &self.dictionary
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::Unavailable) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ExerciseRepository> ExerciseService for Service<R> {
    fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.repository.read_exercises(),
            ReadError,
            "get",
            "exercises"
        )
    }
}

impl<R: MuscleRepository> MuscleService for Service<R> {
    fn get_muscles(&self) -> Result<Vec<Muscle>, ReadError> {
        log_on_error!(self.repository.read_muscles(), ReadError, "get", "muscles")
    }
}

impl<R: ExerciseRepository + MuscleRepository> ImportService for Service<R> {
    fn import_exercises(&self, text: &str) -> Result<ImportResult, ImportError> {
        let result = import::import_from_text(text, &self.dictionary, &self.repository);
        if let Err(ref err) = result {
            error!("failed to import exercises: {err}");
        }
        result
    }
}
