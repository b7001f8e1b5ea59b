//! Catalog snapshots stored as a JSON document.

use std::{fs, io, path::Path};

use kraftlog_domain as domain;
use log::{debug, info};
use uuid::Uuid;

use crate::memory::Catalog;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    InvalidMuscle(#[from] MuscleError),
    #[error(transparent)]
    InvalidExercise(#[from] ExerciseError),
    #[error(transparent)]
    Storage(#[from] domain::StorageError),
}

/// Loads a catalog snapshot. A missing file yields an empty catalog.
pub fn load(path: &Path) -> Result<Catalog, Error> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("no catalog at {}, starting empty", path.display());
            return Ok(Catalog::new());
        }
        Err(err) => return Err(err.into()),
    };

    let snapshot: Snapshot = serde_json::from_str(&content)?;
    let (exercises, muscles) = snapshot.try_into_domain()?;

    info!(
        "loaded catalog with {} exercises and {} muscles from {}",
        exercises.len(),
        muscles.len(),
        path.display()
    );

    Ok(Catalog::from_parts(exercises, muscles))
}

pub fn store(path: &Path, catalog: &Catalog) -> Result<(), Error> {
    let (exercises, muscles) = catalog.snapshot()?;
    let snapshot = Snapshot {
        muscles: muscles.iter().map(Muscle::from).collect(),
        exercises: exercises.iter().map(Exercise::from).collect(),
    };

    fs::write(path, serde_json::to_string_pretty(&snapshot)?)?;
    debug!("stored catalog at {}", path.display());

    Ok(())
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    #[serde(default)]
    pub muscles: Vec<Muscle>,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl Snapshot {
    fn try_into_domain(self) -> Result<(Vec<domain::Exercise>, Vec<domain::Muscle>), Error> {
        let muscles = self
            .muscles
            .into_iter()
            .map(domain::Muscle::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let exercises = self
            .exercises
            .into_iter()
            .map(|e| e.try_into_domain(&muscles))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((exercises, muscles))
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Muscle {
    pub id: Uuid,
    pub name: String,
    pub group: String,
}

impl From<&domain::Muscle> for Muscle {
    fn from(value: &domain::Muscle) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            group: value.group.to_string(),
        }
    }
}

impl TryFrom<Muscle> for domain::Muscle {
    type Error = MuscleError;

    fn try_from(value: Muscle) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            group: value
                .group
                .parse()
                .map_err(|_| MuscleError::InvalidGroup(value.group.clone()))?,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MuscleError {
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error("invalid muscle group: {0}")]
    InvalidGroup(String),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default)]
    pub muscles: Vec<Uuid>,
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            video_url: value.video_url.clone(),
            muscles: value.muscles.iter().map(|m| *m.id).collect(),
        }
    }
}

impl Exercise {
    fn try_into_domain(
        self,
        muscles: &[domain::Muscle],
    ) -> Result<domain::Exercise, ExerciseError> {
        Ok(domain::Exercise {
            id: self.id.into(),
            name: domain::Name::new(&self.name)?,
            video_url: self.video_url,
            muscles: self
                .muscles
                .into_iter()
                .map(|id| {
                    muscles
                        .iter()
                        .find(|m| *m.id == id)
                        .cloned()
                        .ok_or(ExerciseError::UnknownMuscle(id))
                })
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ExerciseError {
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error("unknown muscle: {0}")]
    UnknownMuscle(Uuid),
}
