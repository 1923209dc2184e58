//! The whole build: load, validate, join, render, write.

use crate::error::{BuildError, Result, SchemaError};
use crate::join::{assign_sequence, attach_prefixes, join_models};
use crate::loader::{load_models, load_notes, load_prefixes};
use crate::report::ValidationReport;
use crate::types::{Card, Table, Tables, TextMode};
use crate::validate::check_unique_keys;
use crate::variant::resolve_variants;
use crate::writer::{write_cards, write_fields};
use chrono::{DateTime, Utc};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const DATA_FILE: &str = "German-FSI-Grammar.txt";
pub const FIELDS_FILE: &str = "German-FSI-Grammar_fields.txt";
pub const REPORT_FILE: &str = "German-FSI-Grammar_report.json";

/// Locations of the three input tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    pub notes: PathBuf,
    pub model: PathBuf,
    pub prefixes: PathBuf,
}

impl InputPaths {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            notes: dir.join(Table::Notes.file_name()),
            model: dir.join(Table::Model.file_name()),
            prefixes: dir.join(Table::Prefixes.file_name()),
        }
    }
}

/// Locations of the generated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub dir: PathBuf,
    pub data: PathBuf,
    pub fields: PathBuf,
    pub report: PathBuf,
}

impl OutputPaths {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            dir: dir.to_path_buf(),
            data: dir.join(DATA_FILE),
            fields: dir.join(FIELDS_FILE),
            report: dir.join(REPORT_FILE),
        }
    }
}

/// Cards in note-file order plus the findings of the run.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOutput {
    pub cards: Vec<Card>,
    pub report: ValidationReport,
}

/// Load all three tables.
pub fn load_tables(inputs: &InputPaths) -> std::result::Result<Tables, SchemaError> {
    Ok(Tables {
        notes: load_notes(&inputs.notes)?,
        models: load_models(&inputs.model)?,
        prefixes: load_prefixes(&inputs.prefixes)?,
    })
}

/// Turn loaded tables into cards.
///
/// Fails before joining if any key is duplicated. Rows lost in the joins are
/// recorded in the report instead.
pub fn build(tables: Tables, mode: TextMode, generated_at: DateTime<Utc>) -> Result<BuildOutput> {
    let mut report = ValidationReport::new(generated_at, mode);
    report.notes_loaded = tables.notes.len();
    report.models_loaded = tables.models.len();
    report.prefixes_loaded = tables.prefixes.len();

    let tables = resolve_variants(tables, mode);
    check_unique_keys(&tables)?;

    let mut rows = join_models(&tables.notes, &tables.models, &mut report.warnings);
    assign_sequence(&mut rows);
    attach_prefixes(&mut rows, &tables.prefixes, &mut report.warnings);

    let mut rules: Vec<String> = rows.iter().map(|row| row.rules.clone()).collect();
    rules.sort();
    rules.dedup();
    report.rules = rules;

    let mut cards: Vec<Card> = rows.into_iter().map(|row| row.into_card()).collect();
    cards.sort_by_key(|card| card.sort_order);
    report.rows_written = cards.len();

    Ok(BuildOutput { cards, report })
}

/// Write the note file and the field manifest, creating the directory if needed.
pub fn write_outputs(cards: &[Card], outputs: &OutputPaths) -> Result<()> {
    fs::create_dir_all(&outputs.dir).map_err(|source| BuildError::Io {
        path: outputs.dir.clone(),
        source,
    })?;

    write_file(&outputs.data, |out| write_cards(out, cards))?;
    write_file(&outputs.fields, |out| write_fields(out))?;
    Ok(())
}

fn write_file(
    path: &Path,
    write: impl FnOnce(&mut BufWriter<File>) -> csv::Result<()>,
) -> Result<()> {
    let file = File::create(path).map_err(|source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    write(&mut out).map_err(|source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    out.flush().map_err(|source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    })
}
