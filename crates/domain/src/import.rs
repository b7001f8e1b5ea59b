use log::{debug, info, warn};

use crate::{
    CreateError, Exercise, ExerciseRepository, MuscleGroup, MuscleGroupDictionary,
    MuscleRepository, Name, NameError, ReadError, UpdateError,
    parser::{self, ParsedExerciseRecord},
};

pub trait ImportService {
    fn import_exercises(&self, text: &str) -> Result<ImportResult, ImportError>;
}

/// Outcome of one import run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportResult {
    success_count: usize,
    failures: Vec<ImportFailure>,
}

impl ImportResult {
    #[must_use]
    pub fn success_count(&self) -> usize {
        self.success_count
    }

    #[must_use]
    pub fn failures(&self) -> &[ImportFailure] {
        &self.failures
    }

    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.success_count + self.failures.len()
    }

    fn record<T>(&mut self, exercise_name: &str, outcome: Result<T, ImportRecordError>) {
        match outcome {
            Ok(_) => self.success_count += 1,
            Err(err) => {
                warn!("failed to import exercise: {exercise_name} - {err}");
                self.failures.push(ImportFailure {
                    exercise_name: exercise_name.to_string(),
                    reason: err.to_string(),
                });
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportFailure {
    pub exercise_name: String,
    pub reason: String,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImportError {
    #[error("no exercises found in import text")]
    NoExercises,
}

#[derive(thiserror::Error, Debug)]
pub enum ImportRecordError {
    #[error(transparent)]
    InvalidName(#[from] NameError),
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Create(#[from] CreateError),
    #[error(transparent)]
    Update(#[from] UpdateError),
}

/// Parses `text` and upserts every parsed exercise into the catalog.
///
/// Fails without touching the catalog if the text contains no exercises. Errors of single
/// exercises are collected in the result and do not stop the import.
pub fn import_from_text<R>(
    text: &str,
    dictionary: &MuscleGroupDictionary,
    repository: &R,
) -> Result<ImportResult, ImportError>
where
    R: ExerciseRepository + MuscleRepository,
{
    let records = parser::parse(text, dictionary);

    if records.is_empty() {
        return Err(ImportError::NoExercises);
    }

    info!("importing {} parsed exercises", records.len());

    let result = import_records(&records, dictionary, repository);

    info!(
        "exercise import completed: {} succeeded, {} failed",
        result.success_count(),
        result.failure_count()
    );

    Ok(result)
}

pub fn import_records<R>(
    records: &[ParsedExerciseRecord],
    dictionary: &MuscleGroupDictionary,
    repository: &R,
) -> ImportResult
where
    R: ExerciseRepository + MuscleRepository,
{
    records
        .iter()
        .map(|record| (record, import_record(record, dictionary, repository)))
        .fold(ImportResult::default(), |mut result, (record, outcome)| {
            result.record(&record.name, outcome);
            result
        })
}

pub fn import_record<R>(
    record: &ParsedExerciseRecord,
    dictionary: &MuscleGroupDictionary,
    repository: &R,
) -> Result<Exercise, ImportRecordError>
where
    R: ExerciseRepository + MuscleRepository,
{
    let name = Name::new(&record.name)?;
    let mut exercise = repository
        .read_exercise_by_name(&name)?
        .unwrap_or_else(|| Exercise::new(name));

    exercise.set_video_url(record.video_url.as_deref());

    if let Some(group) = translate(record.muscle_group_token.as_deref(), dictionary) {
        exercise.merge_muscles(repository.read_muscles_by_group(group)?);
    }

    if exercise.is_new() {
        let exercise =
            repository.create_exercise(exercise.name, exercise.video_url, exercise.muscles)?;
        debug!("created exercise: {}", exercise.name);
        Ok(exercise)
    } else {
        let exercise = repository.replace_exercise(exercise)?;
        debug!("updated existing exercise: {}", exercise.name);
        Ok(exercise)
    }
}

fn translate(token: Option<&str>, dictionary: &MuscleGroupDictionary) -> Option<MuscleGroup> {
    let token = token?;

    if !dictionary.has_configuration() {
        debug!("no muscle group configuration loaded, skipping muscle group '{token}'");
        return None;
    }

    let group = dictionary.translate(token);

    if group.is_none() {
        warn!("unknown muscle group '{token}', check the muscle group configuration");
    }

    group
}
