//! Writers for the note file and its field manifest.
//!
//! Both files are tab-separated with fields written literally. The note file
//! has no header; the manifest is the header alone.

use crate::format::format_qnum;
use crate::types::Card;
use std::io::Write;

/// Output columns, in file order.
pub const COLUMNS: [&str; 12] = [
    "NOTE_ID",
    "Prompt1",
    "Prompt2",
    "Answer",
    "Unit",
    "Qtype",
    "Qpart",
    "Qnum",
    "Qlet",
    "Qseq",
    "SortOrder",
    "Tags",
];

fn tsv_writer<W: Write>(out: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .has_headers(false)
        .from_writer(out)
}

impl Card {
    /// Field values in [`COLUMNS`] order.
    pub fn to_record(&self) -> [String; 12] {
        [
            self.note_id.clone(),
            self.prompt1.clone(),
            self.prompt2.clone(),
            self.answer.clone(),
            self.unit.to_string(),
            self.qtype.clone(),
            self.qpart.clone(),
            format_qnum(self.qnum),
            self.qlet.clone(),
            self.qseq.to_string(),
            self.sort_order.to_string(),
            self.tags.clone(),
        ]
    }
}

/// Write cards, one per line, without a header.
pub fn write_cards<W: Write>(out: W, cards: &[Card]) -> csv::Result<()> {
    let mut writer = tsv_writer(out);
    for card in cards {
        writer.write_record(card.to_record())?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the header-only field manifest.
pub fn write_fields<W: Write>(out: W) -> csv::Result<()> {
    let mut writer = tsv_writer(out);
    writer.write_record(COLUMNS)?;
    writer.flush()?;
    Ok(())
}
