//! Joining notes with their models and prefixes, and deriving the card fields.
//!
//! The steps run in a fixed order:
//! 1. [`join_models`] pairs every note with the model sharing its key.
//! 2. [`assign_sequence`] floors `Qnum`, numbers rows that share a question
//!    and builds the note id and address tags.
//! 3. [`attach_prefixes`] looks up the `FillPatt_R1.txt` prefix by `R1`.
//! 4. [`MergedRow::into_card`] fills in defaults and renders the template.

use crate::format::{address_tag, note_id, BLANK_FILL};
use crate::report::Warning;
use crate::template::{render, Fills};
use crate::types::{Card, MergedRow, ModelKey, ModelRow, NoteRow, PrefixRow};
use std::collections::{HashMap, HashSet};

/// Pair notes with models on (`Unit`, `Qtype`, `Qpart`, `Qnum`).
///
/// Unmatched rows on either side are dropped and recorded as warnings.
/// Output follows note order.
pub fn join_models(
    notes: &[NoteRow],
    models: &[ModelRow],
    warnings: &mut Vec<Warning>,
) -> Vec<MergedRow> {
    let by_key: HashMap<ModelKey, &ModelRow> = models.iter().map(|m| (m.key(), m)).collect();
    let mut matched: HashSet<ModelKey> = HashSet::new();
    let mut rows = Vec::with_capacity(notes.len());

    for note in notes {
        let key = note.key();
        match by_key.get(&key) {
            Some(model) => {
                rows.push(MergedRow::new(note, model));
                matched.insert(key);
            }
            None => warnings.push(Warning::NoteWithoutModel {
                id: note.id,
                line: note.line,
                key: key.to_string(),
            }),
        }
    }

    for model in models {
        let key = model.key();
        if !matched.contains(&key) {
            warnings.push(Warning::ModelWithoutNote {
                line: model.line,
                key: key.to_string(),
            });
        }
    }

    rows
}

type GroupKey = (u32, String, String, u64, String);

fn group_key(row: &MergedRow) -> GroupKey {
    (
        row.unit,
        row.qtype.clone(),
        row.qpart.clone(),
        row.qnum.to_bits(),
        row.qlet.clone(),
    )
}

/// Floor `Qnum`, then rank rows within (`Unit`, `Qtype`, `Qpart`, `Qnum`, `Qlet`).
///
/// `qseq` is 0-based in input order and `grpsize` is the size of the group.
/// Also sets `note_id` and the address part of `tags`.
pub fn assign_sequence(rows: &mut [MergedRow]) {
    for row in rows.iter_mut() {
        row.qnum = row.qnum.floor();
        if row.qnum == 0.0 {
            row.qnum = 0.0;
        }
    }

    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.sort_by_key(|&i| rows[i].sort_order);

    let mut sizes: HashMap<GroupKey, usize> = HashMap::new();
    for row in rows.iter() {
        *sizes.entry(group_key(row)).or_default() += 1;
    }

    let mut next_seq: HashMap<GroupKey, usize> = HashMap::new();
    for i in order {
        let key = group_key(&rows[i]);
        let grpsize = sizes.get(&key).copied().unwrap_or(1);
        let seq = next_seq.entry(key).or_default();
        let row = &mut rows[i];
        row.qseq = *seq;
        row.grpsize = grpsize;
        *seq += 1;

        row.note_id = note_id(row.id);
        row.tags = address_tag(
            row.unit, &row.qtype, &row.qpart, row.qnum, &row.qlet, row.qseq, row.grpsize,
        );
    }
}

/// Look up each row's prefix by `R1`.
///
/// A missing prefix is only a problem for pattern 1; such rows keep an empty
/// prefix. Prefix rows no note uses are recorded as warnings.
pub fn attach_prefixes(
    rows: &mut [MergedRow],
    prefixes: &[PrefixRow],
    warnings: &mut Vec<Warning>,
) {
    let by_r1: HashMap<&str, &PrefixRow> = prefixes.iter().map(|p| (p.r1.as_str(), p)).collect();
    let mut used: HashSet<&str> = HashSet::new();

    for row in rows.iter_mut() {
        match by_r1.get(row.r1.as_str()) {
            Some(prefix) => {
                row.pre_prompt = prefix.pre_prompt.clone();
                row.prefix_modified = prefix.modified;
                used.insert(prefix.r1.as_str());
            }
            None if row.fill_patt.uses_prefix() => warnings.push(Warning::NoteWithoutPrefix {
                id: row.id,
                line: row.line,
                r1: row.r1.clone(),
            }),
            None => {}
        }
    }

    for prefix in prefixes {
        if !used.contains(prefix.r1.as_str()) {
            warnings.push(Warning::PrefixWithoutNote {
                line: prefix.line,
                r1: prefix.r1.clone(),
            });
        }
    }
}

fn or_blank(value: String) -> String {
    if value.is_empty() {
        BLANK_FILL.to_string()
    } else {
        value
    }
}

impl MergedRow {
    /// Finish the row: tags, blank defaults, prompt prefix and rendered template.
    pub fn into_card(self) -> Card {
        let modified = self.is_modified();
        let mut tags = self.tags;
        if modified {
            tags.push_str(" Modified");
        }
        tags.push(' ');
        tags.push_str(&self.rules);

        let mut mod_f1 = or_blank(self.mod_f1);
        let mod_f2 = or_blank(self.mod_f2);
        let mod_f3 = or_blank(self.mod_f3);

        let mut int_r1 = self.r1.clone();
        if self.fill_patt.uses_prefix() {
            int_r1 = format!("{} {}", self.r1, self.prompt2);
        }
        if self.fill_patt.joins_second_sentence() {
            int_r1 = format!("{}<br>{}", int_r1, self.r2);
        }

        let prompt2 = if self.fill_patt.uses_prefix() {
            format!("{} {}", self.pre_prompt, self.prompt2)
        } else {
            self.prompt2
        };
        let prompt2 = prompt2.trim().to_string();

        if self.fill_patt.uses_prefix() {
            mod_f1 = BLANK_FILL.to_string();
        }

        let rendered = render(
            &self.pattern,
            Fills {
                f1: &mod_f1,
                f2: &mod_f2,
                f3: &mod_f3,
            },
            Fills {
                f1: &int_r1,
                f2: &self.r2,
                f3: &self.r3,
            },
            self.fill_patt,
        );

        Card {
            note_id: self.note_id,
            prompt1: rendered.example,
            prompt2,
            answer: rendered.answer,
            unit: self.unit,
            qtype: self.qtype,
            qpart: self.qpart,
            qnum: self.qnum,
            qlet: self.qlet,
            qseq: self.qseq,
            sort_order: self.sort_order,
            tags,
        }
    }
}
