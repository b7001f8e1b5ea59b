//! Turns the plain text of an exercise table into parsed exercise records.
//!
//! The text is scanned line by line. A line containing a configured header token opens a
//! muscle group section, table column titles and blank lines are skipped, and every other
//! line inside a section is read as an exercise row with an optional video link.

use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;

use crate::MuscleGroupDictionary;

static VIDEO_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https://(?:(?:www\.)?youtube\.com/watch\?v=|youtu\.be/)[A-Za-z0-9_-]+").unwrap()
});
static TABLE_ARTIFACT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[|\t]+").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static ROW_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9.\-\s]+").unwrap());

/// Column titles of the exercise table.
pub const TABLE_HEADER_MARKERS: &[&str] = &["EXERCÍCIO", "VÍDEO"];

const MIN_NAME_LEN: usize = 3;
const URL_FRAGMENTS: &[&str] = &["http", "youtu"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExerciseRecord {
    pub name: String,
    pub video_url: Option<String>,
    pub muscle_group_token: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Start of a muscle group section, carrying the matched header token.
    Header(&'a str),
    Noise,
    Row(&'a str),
}

#[must_use]
pub fn parse(text: &str, dictionary: &MuscleGroupDictionary) -> Vec<ParsedExerciseRecord> {
    text.lines()
        .fold(ParserState::default(), |state, line| {
            state.advance(line, dictionary)
        })
        .records
}

#[derive(Debug, Default)]
struct ParserState {
    muscle_group_token: Option<String>,
    records: Vec<ParsedExerciseRecord>,
}

impl ParserState {
    fn advance(mut self, line: &str, dictionary: &MuscleGroupDictionary) -> Self {
        match classify(line, dictionary) {
            Line::Header(token) => {
                debug!("found muscle group: {token}");
                self.muscle_group_token = Some(token.to_string());
            }
            Line::Noise => {}
            Line::Row(row) => {
                // Rows before the first header have no section and are dropped.
                if let Some(token) = &self.muscle_group_token {
                    if let Some(record) = parse_row(row, token) {
                        debug!("parsed exercise: {} - {token}", record.name);
                        self.records.push(record);
                    }
                }
            }
        }
        self
    }
}

/// Header detection is a case-insensitive substring match. If several tokens occur in the
/// same line, the first one in dictionary order wins.
#[must_use]
pub fn classify<'a>(line: &'a str, dictionary: &'a MuscleGroupDictionary) -> Line<'a> {
    let line = line.trim();
    let upper_line = line.to_uppercase();

    if let Some(token) = dictionary
        .header_tokens()
        .find(|token| upper_line.contains(token))
    {
        return Line::Header(token);
    }

    if line.is_empty()
        || TABLE_HEADER_MARKERS
            .iter()
            .any(|marker| line.starts_with(marker))
    {
        return Line::Noise;
    }

    Line::Row(line)
}

#[must_use]
pub fn parse_row(row: &str, muscle_group_token: &str) -> Option<ParsedExerciseRecord> {
    let (name, video_url) = match VIDEO_URL_RE.find(row) {
        Some(m) => (&row[..m.start()], Some(m.as_str().to_string())),
        None => (row, None),
    };

    let name = clean_name(name);

    if name.chars().count() < MIN_NAME_LEN {
        return None;
    }

    if URL_FRAGMENTS.iter().any(|fragment| name.contains(fragment)) {
        warn!("exercise name still contains URL fragments: {name}");
        return None;
    }

    Some(ParsedExerciseRecord {
        name,
        video_url,
        muscle_group_token: Some(muscle_group_token.to_string()),
    })
}

/// Removes table artifacts and row numbering from an exercise name.
///
/// Cleaning is idempotent.
#[must_use]
pub fn clean_name(name: &str) -> String {
    let name = TABLE_ARTIFACT_RE.replace_all(name, " ");
    let name = WHITESPACE_RE.replace_all(&name, " ");
    let name = ROW_NUMBER_RE.replace(name.trim(), "");
    name.trim().to_string()
}
