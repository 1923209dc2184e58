//! Error types for fsi-grammar-core.

use crate::types::Table;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using BuildError.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Errors raised while reading an input table.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to read {table}: {source}")]
    Io {
        table: Table,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed {table}: {source}")]
    Malformed {
        table: Table,
        #[source]
        source: csv::Error,
    },

    #[error("{table} is missing required column(s): {}", .columns.join(", "))]
    MissingColumns { table: Table, columns: Vec<String> },

    #[error("{table} line {line}: invalid {column} value '{value}'")]
    InvalidValue {
        table: Table,
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("{table}: FillPatt must be one of 1-6, found {}", describe_fill_violations(.rows))]
    InvalidFillPattern {
        table: Table,
        rows: Vec<FillPatternViolation>,
    },
}

/// A model row whose `FillPatt` is empty or outside the known codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillPatternViolation {
    pub line: u64,
    pub value: String,
}

fn describe_fill_violations(rows: &[FillPatternViolation]) -> String {
    rows.iter()
        .map(|r| format!("'{}' at line {}", r.value, r.line))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A key that occurs more than once in its table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKey {
    pub table: Table,
    pub key: String,
    pub lines: Vec<u64>,
}

/// Duplicate join keys. Raised before any join is attempted.
#[derive(Debug, Error)]
#[error("duplicate keys: {}", describe_duplicates(.duplicates))]
pub struct ValidationError {
    pub duplicates: Vec<DuplicateKey>,
}

fn describe_duplicates(duplicates: &[DuplicateKey]) -> String {
    duplicates
        .iter()
        .map(|d| {
            let lines = d
                .lines
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} [{}] at lines {}", d.table, d.key, lines)
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Top-level error for a build run.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to create {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
