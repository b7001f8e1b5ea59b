#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod dictionary;
mod error;
mod exercise;
mod import;
mod muscle;
mod name;
pub mod parser;
mod service;

#[cfg(test)]
mod fake;

pub use dictionary::*;
pub use error::*;
pub use exercise::*;
pub use import::{
    ImportError, ImportFailure, ImportRecordError, ImportResult, ImportService,
    import_from_text, import_record, import_records,
};
pub use muscle::*;
pub use name::*;
pub use parser::ParsedExerciseRecord;
pub use service::*;
