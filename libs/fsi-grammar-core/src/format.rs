//! Text formatting for note ids, question numbers and tags.

/// Filler used where a template blank has no example value.
pub const BLANK_FILL: &str = "&nbsp;&nbsp;&nbsp;&nbsp;&nbsp";

/// Prefix of every generated note id.
pub const NOTE_ID_PREFIX: &str = "FSIDE";

/// Format a question number, dropping the fraction when it is (nearly) whole.
///
/// `3.0` prints as `3`, `3.1` stays `3.1`.
pub fn format_qnum(qnum: f64) -> String {
    let whole = qnum.trunc();
    if (qnum - whole).abs() < 0.001 {
        // -0.0004 truncates to -0.0, which prints as "-0"
        let whole = if whole == 0.0 { 0.0 } else { whole };
        format!("{:.0}", whole)
    } else {
        format!("{}", qnum)
    }
}

/// Note id: prefix plus the id as uppercase hex, at least four digits.
pub fn note_id(id: u64) -> String {
    format!("{}{:04X}", NOTE_ID_PREFIX, id)
}

/// Suffix distinguishing rows that share a question: empty for a lone row, `.N` otherwise.
pub fn sequence_suffix(qseq: usize, grpsize: usize) -> String {
    if grpsize == 1 {
        String::new()
    } else {
        format!(".{}", qseq)
    }
}

/// Addressing part of the tags, e.g. `U03 AB Q4a.1`.
pub fn address_tag(
    unit: u32,
    qtype: &str,
    qpart: &str,
    qnum: f64,
    qlet: &str,
    qseq: usize,
    grpsize: usize,
) -> String {
    format!(
        "U{:02} {}{} Q{}{}{}",
        unit,
        qtype,
        qpart,
        format_qnum(qnum),
        qlet,
        sequence_suffix(qseq, grpsize)
    )
}
