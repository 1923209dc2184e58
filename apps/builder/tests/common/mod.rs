//! Common test utilities for builder integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for a throwaway input/output directory pair
//! - Helpers for writing the three input tables and reading the outputs

#![allow(dead_code)]

pub mod fixtures;

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;

use fsi_grammar_builder::config::Config;

/// Test context holding a temporary directory with `input/` and `output/`.
///
/// The directory is removed when the context is dropped.
pub struct TestContext {
    _dir: TempDir,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl TestContext {
    /// Create a new test context with an empty input directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input_dir = dir.path().join("input");
        let output_dir = dir.path().join("output");
        fs::create_dir_all(&input_dir).expect("Failed to create input dir");

        Self {
            _dir: dir,
            input_dir,
            output_dir,
        }
    }

    /// Create a context with the three tables already written.
    pub fn with_tables(notes: &str, model: &str, prefixes: &str) -> Self {
        let ctx = Self::new();
        ctx.write_input("Notes.txt", notes);
        ctx.write_input("Model.txt", model);
        ctx.write_input("FillPatt_R1.txt", prefixes);
        ctx
    }

    pub fn write_input(&self, name: &str, content: &str) {
        fs::write(self.input_dir.join(name), content).expect("Failed to write input table");
    }

    /// Config pointing at this context's directories, default settings.
    pub fn config(&self) -> Config {
        Config::new(&self.input_dir, &self.output_dir)
    }

    pub fn read_output(&self, name: &str) -> String {
        fs::read_to_string(self.output_dir.join(name)).expect("Failed to read output file")
    }

    pub fn output_exists(&self, name: &str) -> bool {
        self.output_dir.join(name).exists()
    }

    /// Output data lines split into fields.
    pub fn output_rows(&self) -> Vec<Vec<String>> {
        self.read_output("German-FSI-Grammar.txt")
            .lines()
            .map(|line| line.split('\t').map(str::to_string).collect())
            .collect()
    }
}

/// Fixed timestamp so reports are comparable.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 2, 7, 9, 30, 0).unwrap()
}
