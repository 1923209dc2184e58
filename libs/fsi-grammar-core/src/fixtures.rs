//! Row builders shared by unit tests.

use crate::types::{FillPattern, ModelRow, NoteRow, PrefixRow};

pub fn note(id: u64, qnum: f64, prompt2: &str, r1: &str) -> NoteRow {
    NoteRow {
        id,
        unit: 1,
        qtype: "A".to_string(),
        qpart: String::new(),
        qnum,
        qlet: String::new(),
        prompt2: prompt2.to_string(),
        r1: r1.to_string(),
        r2: String::new(),
        r3: String::new(),
        orig_prompt2: String::new(),
        orig_r1: String::new(),
        orig_r2: String::new(),
        sort_order: id as usize,
        line: id + 2,
        modified: false,
    }
}

pub fn model(qnum: f64, pattern: &str, fill_patt: FillPattern) -> ModelRow {
    ModelRow {
        unit: 1,
        qtype: "A".to_string(),
        qpart: String::new(),
        qnum,
        pattern: pattern.to_string(),
        mod_f1: String::new(),
        mod_f2: String::new(),
        mod_f3: String::new(),
        fill_patt,
        rules: "R".to_string(),
        orig_pattern: String::new(),
        orig_mod_f1: String::new(),
        orig_mod_f2: String::new(),
        line: 2,
        modified: false,
    }
}

pub fn prefix(r1: &str, pre_prompt: &str) -> PrefixRow {
    PrefixRow {
        r1: r1.to_string(),
        pre_prompt: pre_prompt.to_string(),
        orig_r1: String::new(),
        orig_pre_prompt: String::new(),
        line: 2,
        modified: false,
    }
}
