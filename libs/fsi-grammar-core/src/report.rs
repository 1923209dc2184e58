//! Non-fatal findings of a build run.

use crate::types::TextMode;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// A row dropped or left incomplete by one of the joins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// Note with no model row; dropped from the output.
    NoteWithoutModel { id: u64, line: u64, key: String },
    /// Model row no note refers to.
    ModelWithoutNote { line: u64, key: String },
    /// Pattern-1 note whose `R1` has no prefix; kept with an empty prefix.
    NoteWithoutPrefix { id: u64, line: u64, r1: String },
    /// Prefix row no note refers to.
    PrefixWithoutNote { line: u64, r1: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoteWithoutModel { id, line, key } => write!(
                f,
                "Notes.txt line {line}: note {id} has no row in Model.txt ({key})"
            ),
            Self::ModelWithoutNote { line, key } => {
                write!(f, "Model.txt line {line}: no note in Notes.txt ({key})")
            }
            Self::NoteWithoutPrefix { id, line, r1 } => write!(
                f,
                "Notes.txt line {line}: note {id} has no row in FillPatt_R1.txt (R1={r1})"
            ),
            Self::PrefixWithoutNote { line, r1 } => write!(
                f,
                "FillPatt_R1.txt line {line}: no note in Notes.txt (R1={r1})"
            ),
        }
    }
}

/// Summary of a build, written next to the output files.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub generated_at: DateTime<Utc>,
    pub text_mode: TextMode,
    pub notes_loaded: usize,
    pub models_loaded: usize,
    pub prefixes_loaded: usize,
    pub rows_written: usize,
    /// Sorted, distinct rule identifiers of the written rows.
    pub rules: Vec<String>,
    pub warnings: Vec<Warning>,
}

impl ValidationReport {
    pub fn new(generated_at: DateTime<Utc>, text_mode: TextMode) -> Self {
        Self {
            generated_at,
            text_mode,
            notes_loaded: 0,
            models_loaded: 0,
            prefixes_loaded: 0,
            rows_written: 0,
            rules: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
