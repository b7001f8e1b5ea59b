use kraftlog_domain::{Exercise, ImportResult, Muscle};
use serde::Serialize;

/// Outcome of an import as printed on stdout.
#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub status: Status,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_processed: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failures: Option<Vec<Failure>>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Failure {
    pub exercise_name: String,
    pub reason: String,
}

impl Report {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
            total_processed: None,
            successful: None,
            failed: None,
            failures: None,
        }
    }
}

impl From<&ImportResult> for Report {
    fn from(value: &ImportResult) -> Self {
        Self {
            status: Status::Success,
            message: "Import completed".to_string(),
            total_processed: Some(value.total_count()),
            successful: Some(value.success_count()),
            failed: Some(value.failure_count()),
            failures: Some(
                value
                    .failures()
                    .iter()
                    .map(|f| Failure {
                        exercise_name: f.exercise_name.clone(),
                        reason: f.reason.clone(),
                    })
                    .collect(),
            ),
        }
    }
}

/// Rejects an input file without any content.
pub fn check_input(text: &str) -> Result<(), Report> {
    if text.is_empty() {
        return Err(Report::error("file is empty"));
    }
    Ok(())
}

/// One line per exercise: name, muscle groups and video link.
pub fn exercise_line(exercise: &Exercise) -> String {
    let groups = exercise
        .muscle_groups()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    let mut line = exercise.name.to_string();
    if !groups.is_empty() {
        line.push_str(&format!(" [{}]", groups.join(", ")));
    }
    if let Some(video_url) = &exercise.video_url {
        line.push_str(&format!(" {video_url}"));
    }
    line
}

pub fn muscle_line(muscle: &Muscle) -> String {
    format!(
        "{} [{}] {}",
        muscle.name,
        muscle.group,
        muscle.group.description()
    )
}

#[cfg(test)]
mod tests {
    use kraftlog_domain::{
        ExerciseID, Muscle, MuscleGroup, MuscleGroupDictionary, Name, ParsedExerciseRecord,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_error_report() {
        assert_eq!(
            serde_json::to_value(Report::error("file is empty")).unwrap(),
            json!({ "status": "error", "message": "file is empty" })
        );
    }

    #[rstest]
    #[case::empty("", Err(Report::error("file is empty")))]
    #[case::whitespace(" \n\t\n", Ok(()))]
    #[case::text("PEITO\nSupino Reto\n", Ok(()))]
    fn test_check_input(#[case] text: &str, #[case] expected: Result<(), Report>) {
        assert_eq!(check_input(text), expected);
    }

    #[test]
    fn test_import_report() {
        let records = [
            ParsedExerciseRecord {
                name: "Supino Reto".to_string(),
                video_url: None,
                muscle_group_token: Some("PEITO".to_string()),
            },
            ParsedExerciseRecord {
                name: " ".to_string(),
                video_url: None,
                muscle_group_token: Some("PEITO".to_string()),
            },
        ];
        let catalog = kraftlog_storage::memory::Catalog::new();
        let result =
            kraftlog_domain::import_records(&records, &MuscleGroupDictionary::empty(), &catalog);

        assert_eq!(
            serde_json::to_value(Report::from(&result)).unwrap(),
            json!({
                "status": "success",
                "message": "Import completed",
                "totalProcessed": 2,
                "successful": 1,
                "failed": 1,
                "failures": [{
                    "exerciseName": " ",
                    "reason": "Name must not be empty",
                }],
            })
        );
    }

    #[rstest]
    #[case::bare(None, vec![], "Prancha")]
    #[case::video(Some("https://youtu.be/p"), vec![], "Prancha https://youtu.be/p")]
    #[case::groups(
        Some("https://youtu.be/p"),
        vec![MuscleGroup::Back, MuscleGroup::Chest, MuscleGroup::Chest],
        "Prancha [CHEST, BACK] https://youtu.be/p"
    )]
    fn test_exercise_line(
        #[case] video_url: Option<&str>,
        #[case] groups: Vec<MuscleGroup>,
        #[case] expected: &str,
    ) {
        let exercise = Exercise {
            id: ExerciseID::from(1),
            name: Name::new("Prancha").unwrap(),
            video_url: video_url.map(str::to_string),
            muscles: groups
                .into_iter()
                .enumerate()
                .map(|(i, group)| Muscle {
                    id: (i as u128).into(),
                    name: Name::new(&format!("Muscle {i}")).unwrap(),
                    group,
                })
                .collect(),
        };

        assert_eq!(exercise_line(&exercise), expected);
    }

    #[test]
    fn test_muscle_line() {
        let muscle = Muscle {
            id: 1.into(),
            name: Name::new("Soleus").unwrap(),
            group: MuscleGroup::Calves,
        };

        assert_eq!(muscle_line(&muscle), "Soleus [CALVES] Back of lower legs");
    }
}
