#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod json_file;
pub mod memory;
pub mod muscle_groups;
