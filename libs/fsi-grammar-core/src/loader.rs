//! Loaders for the tab-separated input tables.
//!
//! # Format
//! ```text
//! Id	Unit	Qtype	Qpart	Qnum	Qlet	Prompt2	R1	...
//! 1	1	A		1		Bier	das	...
//! ```
//!
//! Every file has a header row. Fields are taken literally: no quoting, no
//! escaping, and an empty field is an empty string.

use crate::error::{FillPatternViolation, SchemaError};
use crate::types::{FillPattern, ModelRow, NoteRow, PrefixRow, Table};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const NOTE_COLUMNS: &[&str] = &[
    "Id",
    "Unit",
    "Qtype",
    "Qpart",
    "Qnum",
    "Qlet",
    "Prompt2",
    "R1",
    "R2",
    "R3",
    "Orig_Prompt2",
    "Orig_R1",
    "Orig_R2",
];

pub const MODEL_COLUMNS: &[&str] = &[
    "Unit",
    "Qtype",
    "Qpart",
    "Qnum",
    "Pattern",
    "ModF1",
    "ModF2",
    "ModF3",
    "FillPatt",
    "Rules",
    "Orig_Pattern",
    "Orig_ModF1",
    "Orig_ModF2",
];

pub const PREFIX_COLUMNS: &[&str] = &["R1", "PrePrompt", "Orig_R1", "Orig_PrePrompt"];

#[derive(Debug, Deserialize)]
struct RawNote {
    #[serde(rename = "Id")]
    id: String,
    #[serde(rename = "Unit")]
    unit: String,
    #[serde(rename = "Qtype")]
    qtype: String,
    #[serde(rename = "Qpart")]
    qpart: String,
    #[serde(rename = "Qnum")]
    qnum: String,
    #[serde(rename = "Qlet")]
    qlet: String,
    #[serde(rename = "Prompt2")]
    prompt2: String,
    #[serde(rename = "R1")]
    r1: String,
    #[serde(rename = "R2")]
    r2: String,
    #[serde(rename = "R3")]
    r3: String,
    #[serde(rename = "Orig_Prompt2")]
    orig_prompt2: String,
    #[serde(rename = "Orig_R1")]
    orig_r1: String,
    #[serde(rename = "Orig_R2")]
    orig_r2: String,
}

#[derive(Debug, Deserialize)]
struct RawModel {
    #[serde(rename = "Unit")]
    unit: String,
    #[serde(rename = "Qtype")]
    qtype: String,
    #[serde(rename = "Qpart")]
    qpart: String,
    #[serde(rename = "Qnum")]
    qnum: String,
    #[serde(rename = "Pattern")]
    pattern: String,
    #[serde(rename = "ModF1")]
    mod_f1: String,
    #[serde(rename = "ModF2")]
    mod_f2: String,
    #[serde(rename = "ModF3")]
    mod_f3: String,
    #[serde(rename = "FillPatt")]
    fill_patt: String,
    #[serde(rename = "Rules")]
    rules: String,
    #[serde(rename = "Orig_Pattern")]
    orig_pattern: String,
    #[serde(rename = "Orig_ModF1")]
    orig_mod_f1: String,
    #[serde(rename = "Orig_ModF2")]
    orig_mod_f2: String,
}

#[derive(Debug, Deserialize)]
struct RawPrefix {
    #[serde(rename = "R1")]
    r1: String,
    #[serde(rename = "PrePrompt")]
    pre_prompt: String,
    #[serde(rename = "Orig_R1")]
    orig_r1: String,
    #[serde(rename = "Orig_PrePrompt")]
    orig_pre_prompt: String,
}

/// Load `Notes.txt`.
pub fn load_notes(path: &Path) -> Result<Vec<NoteRow>, SchemaError> {
    read_notes(open(path, Table::Notes)?)
}

/// Load `Model.txt`.
pub fn load_models(path: &Path) -> Result<Vec<ModelRow>, SchemaError> {
    read_models(open(path, Table::Model)?)
}

/// Load `FillPatt_R1.txt`.
pub fn load_prefixes(path: &Path) -> Result<Vec<PrefixRow>, SchemaError> {
    read_prefixes(open(path, Table::Prefixes)?)
}

/// Parse the notes table. `sort_order` follows file order.
pub fn read_notes<R: Read>(input: R) -> Result<Vec<NoteRow>, SchemaError> {
    let table = Table::Notes;
    read_table::<_, RawNote>(input, table, NOTE_COLUMNS)?
        .into_iter()
        .enumerate()
        .map(|(sort_order, (line, raw))| -> Result<NoteRow, SchemaError> {
            Ok(NoteRow {
                id: parse_field(&raw.id, table, line, "Id")?,
                unit: parse_field(&raw.unit, table, line, "Unit")?,
                qnum: parse_qnum(&raw.qnum, table, line)?,
                qtype: raw.qtype,
                qpart: raw.qpart,
                qlet: raw.qlet,
                prompt2: raw.prompt2,
                r1: raw.r1,
                r2: raw.r2,
                r3: raw.r3,
                orig_prompt2: raw.orig_prompt2,
                orig_r1: raw.orig_r1,
                orig_r2: raw.orig_r2,
                sort_order,
                line,
                modified: false,
            })
        })
        .collect()
}

/// Parse the model table.
///
/// Every `FillPatt` is checked before returning so that all bad rows are
/// reported together.
pub fn read_models<R: Read>(input: R) -> Result<Vec<ModelRow>, SchemaError> {
    let table = Table::Model;
    let raws = read_table::<_, RawModel>(input, table, MODEL_COLUMNS)?;

    let mut parsed = Vec::with_capacity(raws.len());
    let mut violations = Vec::new();
    for (line, raw) in raws {
        match FillPattern::from_code(&raw.fill_patt) {
            Some(fill_patt) => parsed.push((line, raw, fill_patt)),
            None => violations.push(FillPatternViolation {
                line,
                value: raw.fill_patt,
            }),
        }
    }
    if !violations.is_empty() {
        return Err(SchemaError::InvalidFillPattern {
            table,
            rows: violations,
        });
    }

    parsed
        .into_iter()
        .map(|(line, raw, fill_patt)| -> Result<ModelRow, SchemaError> {
            Ok(ModelRow {
                unit: parse_field(&raw.unit, table, line, "Unit")?,
                qnum: parse_qnum(&raw.qnum, table, line)?,
                qtype: raw.qtype,
                qpart: raw.qpart,
                pattern: raw.pattern,
                mod_f1: raw.mod_f1,
                mod_f2: raw.mod_f2,
                mod_f3: raw.mod_f3,
                fill_patt,
                rules: raw.rules,
                orig_pattern: raw.orig_pattern,
                orig_mod_f1: raw.orig_mod_f1,
                orig_mod_f2: raw.orig_mod_f2,
                line,
                modified: false,
            })
        })
        .collect()
}

/// Parse the prefix lookup table.
pub fn read_prefixes<R: Read>(input: R) -> Result<Vec<PrefixRow>, SchemaError> {
    let rows = read_table::<_, RawPrefix>(input, Table::Prefixes, PREFIX_COLUMNS)?
        .into_iter()
        .map(|(line, raw)| PrefixRow {
            r1: raw.r1,
            pre_prompt: raw.pre_prompt,
            orig_r1: raw.orig_r1,
            orig_pre_prompt: raw.orig_pre_prompt,
            line,
            modified: false,
        })
        .collect();
    Ok(rows)
}

fn open(path: &Path, table: Table) -> Result<File, SchemaError> {
    File::open(path).map_err(|source| SchemaError::Io { table, source })
}

/// Read a table, checking the header first, and pair each record with its line number.
fn read_table<R: Read, T: DeserializeOwned>(
    input: R,
    table: Table,
    required: &[&str],
) -> Result<Vec<(u64, T)>, SchemaError> {
    let malformed = |source| SchemaError::Malformed { table, source };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .has_headers(true)
        .from_reader(input);

    let headers = reader.headers().map_err(malformed)?.clone();
    let missing: Vec<String> = required
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(SchemaError::MissingColumns {
            table,
            columns: missing,
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(malformed)?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let row = record.deserialize(Some(&headers)).map_err(malformed)?;
        rows.push((line, row));
    }
    Ok(rows)
}

fn parse_field<T: std::str::FromStr>(
    value: &str,
    table: Table,
    line: u64,
    column: &'static str,
) -> Result<T, SchemaError> {
    value.trim().parse().map_err(|_| SchemaError::InvalidValue {
        table,
        line,
        column,
        value: value.to_string(),
    })
}

fn parse_qnum(value: &str, table: Table, line: u64) -> Result<f64, SchemaError> {
    let qnum: f64 = parse_field(value, table, line, "Qnum")?;
    if qnum.is_finite() {
        Ok(qnum)
    } else {
        Err(SchemaError::InvalidValue {
            table,
            line,
            column: "Qnum",
            value: value.to_string(),
        })
    }
}
