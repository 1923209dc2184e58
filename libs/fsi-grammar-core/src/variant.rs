//! Original vs. corrected text.
//!
//! Each table carries `Orig_*` shadow columns holding the 1960 wording wherever
//! the working column was corrected. [`TextMode::Original`] puts that wording
//! back; [`TextMode::Corrected`] keeps the corrections and flags the rows
//! they touch.

use crate::types::{FillPattern, ModelRow, NoteRow, PrefixRow, Tables, TextMode};

/// Resolve the working text of every table for the given mode.
pub fn resolve_variants(mut tables: Tables, mode: TextMode) -> Tables {
    match mode {
        TextMode::Original => {
            tables.prefixes.iter_mut().for_each(PrefixRow::restore_original);
            tables.models.iter_mut().for_each(ModelRow::restore_original);
            tables.notes.iter_mut().for_each(NoteRow::restore_original);
        }
        TextMode::Corrected => {
            for prefix in &mut tables.prefixes {
                prefix.modified = prefix.has_correction();
            }
            for model in &mut tables.models {
                model.modified = model.has_correction();
            }
            for note in &mut tables.notes {
                note.modified = note.has_correction();
            }
        }
    }
    tables
}

fn restore(working: &mut String, original: &str) {
    if !original.is_empty() {
        *working = original.to_string();
    }
}

impl PrefixRow {
    pub fn restore_original(&mut self) {
        restore(&mut self.r1, &self.orig_r1);
        restore(&mut self.pre_prompt, &self.orig_pre_prompt);
    }

    /// Only the prefix text counts; a corrected `R1` changes the join, not the card.
    pub fn has_correction(&self) -> bool {
        !self.orig_pre_prompt.is_empty()
    }
}

impl ModelRow {
    pub fn restore_original(&mut self) {
        restore(&mut self.pattern, &self.orig_pattern);
        restore(&mut self.mod_f1, &self.orig_mod_f1);
        restore(&mut self.mod_f2, &self.orig_mod_f2);
    }

    /// `ModF1` is always blanked for pattern 1, so a correction there is invisible.
    pub fn has_correction(&self) -> bool {
        (!self.orig_mod_f1.is_empty() && self.fill_patt != FillPattern::One)
            || !self.orig_mod_f2.is_empty()
            || !self.orig_pattern.is_empty()
    }
}

impl NoteRow {
    pub fn restore_original(&mut self) {
        restore(&mut self.prompt2, &self.orig_prompt2);
        restore(&mut self.r1, &self.orig_r1);
        restore(&mut self.r2, &self.orig_r2);
    }

    pub fn has_correction(&self) -> bool {
        !self.orig_prompt2.is_empty() || !self.orig_r1.is_empty() || !self.orig_r2.is_empty()
    }
}
