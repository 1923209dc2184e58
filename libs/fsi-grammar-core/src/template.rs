//! Answer template rendering.
//!
//! A model `Pattern` is plain text with up to three blanks, `{F1}`, `{F2}`
//! and `{F3}`. The example sentence fills them with the model's sample values,
//! the answer with the note's responses. Markers that are absent from the
//! pattern are simply not filled.

use crate::types::FillPattern;

/// A blank in a model pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    F1,
    F2,
    F3,
}

impl Placeholder {
    pub const ALL: [Placeholder; 3] = [Self::F1, Self::F2, Self::F3];

    pub fn token(self) -> &'static str {
        match self {
            Self::F1 => "{F1}",
            Self::F2 => "{F2}",
            Self::F3 => "{F3}",
        }
    }
}

/// Wrap a value in the viewer's underline markup.
pub fn underline(value: &str) -> String {
    format!("<u>{}</u>", value)
}

/// Values for the three blanks, in placeholder order.
#[derive(Debug, Clone, Copy)]
pub struct Fills<'a> {
    pub f1: &'a str,
    pub f2: &'a str,
    pub f3: &'a str,
}

impl<'a> Fills<'a> {
    fn get(&self, placeholder: Placeholder) -> &'a str {
        match placeholder {
            Placeholder::F1 => self.f1,
            Placeholder::F2 => self.f2,
            Placeholder::F3 => self.f3,
        }
    }
}

/// Rendered front and back of a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub example: String,
    pub answer: String,
}

/// Render the example sentence and the answer for one note.
pub fn render(
    pattern: &str,
    example: Fills<'_>,
    answer: Fills<'_>,
    fill_patt: FillPattern,
) -> Rendered {
    let example = fill(pattern, |placeholder| {
        let value = example.get(placeholder);
        if placeholder == Placeholder::F1 || fill_patt.underlines_example_extras() {
            underline(value)
        } else {
            value.to_string()
        }
    });

    let answer = if fill_patt.answer_is_sentence() {
        answer.f1.to_string()
    } else {
        fill(pattern, |placeholder| underline(answer.get(placeholder)))
    };

    Rendered { example, answer }
}

/// Replace each marker in turn with the value produced for it.
fn fill(pattern: &str, mut value: impl FnMut(Placeholder) -> String) -> String {
    Placeholder::ALL
        .into_iter()
        .fold(pattern.to_string(), |text, placeholder| {
            if text.contains(placeholder.token()) {
                text.replace(placeholder.token(), &value(placeholder))
            } else {
                text
            }
        })
}
