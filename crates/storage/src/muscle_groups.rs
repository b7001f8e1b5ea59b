//! Muscle group dictionary source.
//!
//! The source is a flat YAML mapping from section header to canonical muscle group:
//!
//! ```yaml
//! PEITO: CHEST
//! COSTAS: BACK
//! ```
//!
//! Loading never fails. Without a readable source the dictionary is empty and exercises
//! are imported without muscle associations.

use std::{fs::File, io::Read, path::Path};

use kraftlog_domain::MuscleGroupDictionary;
use log::{debug, info, warn};
use serde_yaml::Value;

pub const CONFIG_PATH_ENV: &str = "EXERCISE_MUSCLE_GROUPS_CONFIG_PATH";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error("document is empty")]
    Empty,
    #[error("document is not a mapping")]
    NotAMapping,
}

#[must_use]
pub fn load(path: Option<&Path>) -> MuscleGroupDictionary {
    let Some(path) = path else {
        warn!(
            "no muscle group configuration file specified, set {CONFIG_PATH_ENV} to import exercises with muscle groups"
        );
        return MuscleGroupDictionary::empty();
    };

    info!("loading muscle group configuration from {}", path.display());

    match File::open(path)
        .map_err(Error::from)
        .and_then(read_entries)
    {
        Ok(entries) => dictionary(entries),
        Err(err) => {
            warn!(
                "could not load muscle group configuration from {}: {err}, exercises will be imported without muscle groups",
                path.display()
            );
            MuscleGroupDictionary::empty()
        }
    }
}

#[must_use]
pub fn from_reader<R: Read>(reader: R) -> MuscleGroupDictionary {
    match read_entries(reader) {
        Ok(entries) => dictionary(entries),
        Err(err) => {
            warn!("could not load muscle group configuration: {err}");
            MuscleGroupDictionary::empty()
        }
    }
}

fn dictionary(entries: Vec<(String, String)>) -> MuscleGroupDictionary {
    let dictionary = MuscleGroupDictionary::new(entries);

    info!("loaded {} muscle group mappings", dictionary.len());
    for (header, group) in dictionary.entries() {
        debug!("  mapping: {header} -> {group}");
    }

    dictionary
}

fn read_entries<R: Read>(reader: R) -> Result<Vec<(String, String)>, Error> {
    let mapping = match serde_yaml::from_reader::<_, Value>(reader)? {
        Value::Mapping(mapping) => mapping,
        Value::Null => return Err(Error::Empty),
        _ => return Err(Error::NotAMapping),
    };

    Ok(mapping
        .into_iter()
        .filter_map(|(key, value)| {
            let Some(key) = scalar(&key) else {
                warn!("ignoring muscle group mapping with non-scalar header: {key:?}");
                return None;
            };
            match value {
                Value::Null => None,
                value => match scalar(&value) {
                    Some(value) => Some((key, value)),
                    None => {
                        warn!("ignoring non-scalar muscle group for header '{key}'");
                        None
                    }
                },
            }
        })
        .collect())
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
