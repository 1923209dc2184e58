//! Core types for the grammar note builder.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three input tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Notes,
    Model,
    Prefixes,
}

impl Table {
    /// File name of the table inside the input directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Notes => "Notes.txt",
            Self::Model => "Model.txt",
            Self::Prefixes => "FillPatt_R1.txt",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Which text columns feed the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextMode {
    /// Use the corrected columns and tag rows that differ from the 1960 text.
    Corrected,
    /// Overwrite working columns with the original text wherever it is recorded.
    Original,
}

impl Default for TextMode {
    fn default() -> Self {
        Self::Corrected
    }
}

impl TextMode {
    pub fn from_keep_original(keep_original: bool) -> Self {
        if keep_original {
            Self::Original
        } else {
            Self::Corrected
        }
    }
}

/// Substitution policy of a model template (`FillPatt` 1-6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillPattern {
    /// Determiner + noun. The prompt gets a prefix from the lookup table and
    /// the first blank of the example is never filled.
    One,
    Two,
    Three,
    /// Only `{F1}` is underlined in the example.
    Four,
    /// The answer is one whole sentence.
    Five,
    /// The answer is two whole sentences joined by a line break.
    Six,
}

impl FillPattern {
    /// Parse the code stored in `Model.txt`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "1" => Some(Self::One),
            "2" => Some(Self::Two),
            "3" => Some(Self::Three),
            "4" => Some(Self::Four),
            "5" => Some(Self::Five),
            "6" => Some(Self::Six),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
        }
    }

    /// Whether rows of this pattern need a `FillPatt_R1.txt` prefix.
    pub fn uses_prefix(self) -> bool {
        self == Self::One
    }

    /// Whether `{F2}`/`{F3}` are underlined in the example sentence.
    pub fn underlines_example_extras(self) -> bool {
        self != Self::Four
    }

    /// Whether the answer is the response text itself rather than the filled pattern.
    pub fn answer_is_sentence(self) -> bool {
        matches!(self, Self::Five | Self::Six)
    }

    /// Whether the second response is joined onto the first with a line break.
    pub fn joins_second_sentence(self) -> bool {
        self == Self::Six
    }
}

impl fmt::Display for FillPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Composite key joining notes to models.
///
/// `Qnum` is compared as a number so `3.10` and `3.1` address the same question.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelKey {
    pub unit: u32,
    pub qtype: String,
    pub qpart: String,
    qnum_bits: u64,
}

impl ModelKey {
    pub fn new(unit: u32, qtype: &str, qpart: &str, qnum: f64) -> Self {
        // -0.0 and 0.0 must hash alike
        let qnum = if qnum == 0.0 { 0.0 } else { qnum };
        Self {
            unit,
            qtype: qtype.to_string(),
            qpart: qpart.to_string(),
            qnum_bits: qnum.to_bits(),
        }
    }

    pub fn qnum(&self) -> f64 {
        f64::from_bits(self.qnum_bits)
    }
}

impl fmt::Display for ModelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unit={} Qtype={} Qpart={} Qnum={}",
            self.unit,
            self.qtype,
            self.qpart,
            self.qnum()
        )
    }
}

/// One row of `Notes.txt`.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteRow {
    pub id: u64,
    pub unit: u32,
    pub qtype: String,
    pub qpart: String,
    pub qnum: f64,
    pub qlet: String,
    pub prompt2: String,
    pub r1: String,
    pub r2: String,
    pub r3: String,
    pub orig_prompt2: String,
    pub orig_r1: String,
    pub orig_r2: String,
    /// Position in the input file, 0-based.
    pub sort_order: usize,
    pub line: u64,
    pub modified: bool,
}

impl NoteRow {
    pub fn key(&self) -> ModelKey {
        ModelKey::new(self.unit, &self.qtype, &self.qpart, self.qnum)
    }
}

/// One row of `Model.txt`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRow {
    pub unit: u32,
    pub qtype: String,
    pub qpart: String,
    pub qnum: f64,
    pub pattern: String,
    pub mod_f1: String,
    pub mod_f2: String,
    pub mod_f3: String,
    pub fill_patt: FillPattern,
    pub rules: String,
    pub orig_pattern: String,
    pub orig_mod_f1: String,
    pub orig_mod_f2: String,
    pub line: u64,
    pub modified: bool,
}

impl ModelRow {
    pub fn key(&self) -> ModelKey {
        ModelKey::new(self.unit, &self.qtype, &self.qpart, self.qnum)
    }
}

/// One row of `FillPatt_R1.txt`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixRow {
    pub r1: String,
    pub pre_prompt: String,
    pub orig_r1: String,
    pub orig_pre_prompt: String,
    pub line: u64,
    pub modified: bool,
}

/// All three input tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tables {
    pub notes: Vec<NoteRow>,
    pub models: Vec<ModelRow>,
    pub prefixes: Vec<PrefixRow>,
}

/// A note joined with its model, enriched step by step until it becomes a [`Card`].
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRow {
    pub id: u64,
    pub sort_order: usize,
    /// Line of the note in `Notes.txt`.
    pub line: u64,
    pub unit: u32,
    pub qtype: String,
    pub qpart: String,
    pub qnum: f64,
    pub qlet: String,
    pub prompt2: String,
    pub r1: String,
    pub r2: String,
    pub r3: String,
    pub pattern: String,
    pub mod_f1: String,
    pub mod_f2: String,
    pub mod_f3: String,
    pub fill_patt: FillPattern,
    pub rules: String,
    pub note_modified: bool,
    pub model_modified: bool,
    pub prefix_modified: bool,
    pub qseq: usize,
    pub grpsize: usize,
    pub note_id: String,
    pub tags: String,
    pub pre_prompt: String,
}

impl MergedRow {
    pub fn new(note: &NoteRow, model: &ModelRow) -> Self {
        Self {
            id: note.id,
            sort_order: note.sort_order,
            line: note.line,
            unit: note.unit,
            qtype: note.qtype.clone(),
            qpart: note.qpart.clone(),
            qnum: note.qnum,
            qlet: note.qlet.clone(),
            prompt2: note.prompt2.clone(),
            r1: note.r1.clone(),
            r2: note.r2.clone(),
            r3: note.r3.clone(),
            pattern: model.pattern.clone(),
            mod_f1: model.mod_f1.clone(),
            mod_f2: model.mod_f2.clone(),
            mod_f3: model.mod_f3.clone(),
            fill_patt: model.fill_patt,
            rules: model.rules.clone(),
            note_modified: note.modified,
            model_modified: model.modified,
            prefix_modified: false,
            qseq: 0,
            grpsize: 1,
            note_id: String::new(),
            tags: String::new(),
            pre_prompt: String::new(),
        }
    }

    pub fn is_modified(&self) -> bool {
        self.note_modified || self.model_modified || self.prefix_modified
    }
}

/// A finished note as written to the output file.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub note_id: String,
    pub prompt1: String,
    pub prompt2: String,
    pub answer: String,
    pub unit: u32,
    pub qtype: String,
    pub qpart: String,
    pub qnum: f64,
    pub qlet: String,
    pub qseq: usize,
    pub sort_order: usize,
    pub tags: String,
}
