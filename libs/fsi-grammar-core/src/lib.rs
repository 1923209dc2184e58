//! Core library for building the German FSI grammar note set.
//!
//! Provides:
//! - Tab-separated loaders for the notes, model and prefix tables
//! - Original/corrected text resolution
//! - Key validation and the two table joins
//! - The `{F1}`/`{F2}`/`{F3}` answer template renderer
//! - Writers for the note file and its field manifest

pub mod error;
pub mod format;
pub mod join;
pub mod loader;
pub mod pipeline;
pub mod report;
pub mod template;
pub mod types;
pub mod validate;
pub mod variant;
pub mod writer;

#[cfg(test)]
mod fixtures;

pub use error::{BuildError, DuplicateKey, Result, SchemaError, ValidationError};
pub use pipeline::{build, load_tables, write_outputs, BuildOutput, InputPaths, OutputPaths};
pub use report::{ValidationReport, Warning};
pub use template::{render, Rendered};
pub use types::{
    Card, FillPattern, MergedRow, ModelKey, ModelRow, NoteRow, PrefixRow, Table, Tables, TextMode,
};
pub use writer::COLUMNS;
