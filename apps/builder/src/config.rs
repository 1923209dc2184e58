//! Command line and environment configuration.

use clap::builder::BoolishValueParser;
use clap::Parser;
use fsi_grammar_core::{InputPaths, OutputPaths, TextMode};
use std::path::{Path, PathBuf};

/// Build the German FSI grammar notes from the tab-separated course tables
#[derive(Parser, Debug)]
#[command(name = "fsi-grammar", author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding Notes.txt, Model.txt and FillPatt_R1.txt
    #[arg(long, env = "FSI_INPUT_DIR", default_value = "input")]
    pub input_dir: PathBuf,

    /// Directory the note file, field manifest and report are written to
    #[arg(long, env = "FSI_OUTPUT_DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Use the text of the original publication instead of the corrected columns
    #[arg(long, env = "FSI_KEEP_ORIGINAL_TEXT", value_parser = BoolishValueParser::new())]
    pub keep_original_text: bool,

    /// Exit successfully even when rows were dropped by the joins
    #[arg(long, env = "FSI_ALLOW_WARNINGS", value_parser = BoolishValueParser::new())]
    pub allow_warnings: bool,
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub inputs: InputPaths,
    pub outputs: OutputPaths,
    pub text_mode: TextMode,
    pub allow_warnings: bool,
}

impl Config {
    pub fn new(input_dir: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Self {
        Self {
            inputs: InputPaths::in_dir(input_dir),
            outputs: OutputPaths::in_dir(output_dir),
            text_mode: TextMode::default(),
            allow_warnings: false,
        }
    }

    pub fn with_text_mode(mut self, text_mode: TextMode) -> Self {
        self.text_mode = text_mode;
        self
    }

    pub fn with_allow_warnings(mut self, allow_warnings: bool) -> Self {
        self.allow_warnings = allow_warnings;
        self
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config::new(&args.input_dir, &args.output_dir)
            .with_text_mode(TextMode::from_keep_original(args.keep_original_text))
            .with_allow_warnings(args.allow_warnings)
    }
}
