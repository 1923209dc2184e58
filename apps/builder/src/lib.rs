pub mod config;
pub mod error;
pub mod report;

use std::process::ExitCode;

use chrono::{DateTime, Utc};
use clap::Parser;
use fsi_grammar_core::{
    build, load_tables, write_outputs, BuildError, OutputPaths, ValidationReport,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Args, Config};
use crate::error::{Result, RunError, EXIT_FATAL, EXIT_OK, EXIT_WARNINGS};

/// What a completed run produced
#[derive(Debug)]
pub struct Outcome {
    pub report: ValidationReport,
    pub outputs: OutputPaths,
}

impl Outcome {
    /// Process exit status for this outcome.
    pub fn exit_status(&self, allow_warnings: bool) -> u8 {
        if self.report.has_warnings() && !allow_warnings {
            EXIT_WARNINGS
        } else {
            EXIT_OK
        }
    }
}

pub fn run() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from(Args::parse());

    match execute(&config, Utc::now()) {
        Ok(outcome) => Ok(ExitCode::from(outcome.exit_status(config.allow_warnings))),
        Err(err) => Err(fatal_error(err)),
    }
}

/// Wrap a fatal run error for the single report printed by `main`.
pub fn fatal_error(err: RunError) -> anyhow::Error {
    let kind = err.kind();
    anyhow::Error::new(err).context(format!("{kind}: no notes were written"))
}

/// Load, build and write everything described by `config`.
///
/// Nothing is written when loading or key validation fails.
pub fn execute(config: &Config, now: DateTime<Utc>) -> Result<Outcome> {
    tracing::info!("Loading tables from {}", config.inputs.notes.display());
    let tables = load_tables(&config.inputs).map_err(BuildError::from)?;

    tracing::info!("Building notes ({:?} text)...", config.text_mode);
    let output = build(tables, config.text_mode, now)?;

    tracing::info!("Writing {}", config.outputs.data.display());
    write_outputs(&output.cards, &config.outputs)?;

    report::write_report(&output.report, &config.outputs.report).map_err(|source| {
        RunError::Report {
            path: config.outputs.report.clone(),
            source,
        }
    })?;
    report::log_report(&output.report);

    Ok(Outcome {
        report: output.report,
        outputs: config.outputs.clone(),
    })
}

/// Exit status for a run that failed before producing output.
pub fn fatal_exit_code() -> ExitCode {
    ExitCode::from(EXIT_FATAL)
}
