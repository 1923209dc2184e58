//! Test fixtures and factory functions for the input tables.

pub const NOTES_HEADER: &str =
    "Id\tUnit\tQtype\tQpart\tQnum\tQlet\tPrompt2\tR1\tR2\tR3\tOrig_Prompt2\tOrig_R1\tOrig_R2";

pub const MODEL_HEADER: &str = "Unit\tQtype\tQpart\tQnum\tPattern\tModF1\tModF2\tModF3\tFillPatt\tRules\tOrig_Pattern\tOrig_ModF1\tOrig_ModF2";

pub const PREFIX_HEADER: &str = "R1\tPrePrompt\tOrig_R1\tOrig_PrePrompt";

/// A note row with no original-text columns filled.
pub fn note(id: u64, unit: u32, qtype: &str, qnum: &str, qlet: &str, prompt2: &str, r1: &str) -> String {
    note_full(id, unit, qtype, qnum, qlet, prompt2, [r1, "", ""], ["", "", ""])
}

/// A note row with every column given.
///
/// # Arguments
/// * `responses` - `R1`, `R2`, `R3`
/// * `originals` - `Orig_Prompt2`, `Orig_R1`, `Orig_R2`
#[allow(clippy::too_many_arguments)]
pub fn note_full(
    id: u64,
    unit: u32,
    qtype: &str,
    qnum: &str,
    qlet: &str,
    prompt2: &str,
    responses: [&str; 3],
    originals: [&str; 3],
) -> String {
    [
        id.to_string().as_str(),
        unit.to_string().as_str(),
        qtype,
        "",
        qnum,
        qlet,
        prompt2,
        responses[0],
        responses[1],
        responses[2],
        originals[0],
        originals[1],
        originals[2],
    ]
    .join("\t")
}

/// A model row with no original-text columns filled.
pub fn model(unit: u32, qtype: &str, qnum: &str, pattern: &str, mod_f1: &str, fill_patt: &str, rules: &str) -> String {
    [
        unit.to_string().as_str(),
        qtype,
        "",
        qnum,
        pattern,
        mod_f1,
        "",
        "",
        fill_patt,
        rules,
        "",
        "",
        "",
    ]
    .join("\t")
}

pub fn prefix(r1: &str, pre_prompt: &str, orig_pre_prompt: &str) -> String {
    [r1, pre_prompt, "", orig_pre_prompt].join("\t")
}

/// Header plus rows, newline terminated.
pub fn table(header: &str, rows: &[String]) -> String {
    let mut content = String::from(header);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    content
}

/// A small but complete course: one determiner model with two notes, one
/// two-sentence model and one pattern-4 model.
pub fn sample_course() -> (String, String, String) {
    let notes = table(
        NOTES_HEADER,
        &[
            note(10, 1, "A", "1", "", "Bier", "das"),
            note(11, 1, "A", "1", "", "Wein", "der"),
            note_full(
                12,
                1,
                "B",
                "2",
                "",
                "",
                ["Ich komme.", "Du gehst.", ""],
                ["", "", ""],
            ),
            note_full(
                255,
                2,
                "C",
                "3",
                "a",
                "heute",
                ["Er", "kommt", "morgen"],
                ["", "", ""],
            ),
        ],
    );
    let model = table(
        MODEL_HEADER,
        &[
            model(1, "A", "1", "{F1} ist kalt.", "Das Wasser", "1", "Art-1"),
            model(1, "B", "2", "{F1}", "", "6", "Satz-2"),
            model(2, "C", "3", "{F1} {F2} {F3}.", "Sie", "4", "Verb-3"),
        ],
    );
    let prefixes = table(
        PREFIX_HEADER,
        &[prefix("das", "d-", ""), prefix("der", "d-", "")],
    );
    (notes, model, prefixes)
}
