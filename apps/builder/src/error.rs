//! Error handling for the builder

use fsi_grammar_core::BuildError;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status when the notes were written and nothing was dropped.
pub const EXIT_OK: u8 = 0;
/// Exit status when the notes were written but the report has warnings.
pub const EXIT_WARNINGS: u8 = 1;
/// Exit status when the run aborted before writing any notes.
pub const EXIT_FATAL: u8 = 2;

/// Fatal run errors
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("failed to write report {}: {source}", .path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RunError {
    /// Short name of the error class, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RunError::Build(BuildError::Schema(_)) => "schema_error",
            RunError::Build(BuildError::Validation(_)) => "validation_error",
            RunError::Build(BuildError::Write { .. } | BuildError::Io { .. }) => "output_error",
            RunError::Report { .. } => "report_error",
        }
    }
}

/// Result type alias for builder operations
pub type Result<T> = std::result::Result<T, RunError>;
