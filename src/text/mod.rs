//! # Text Wrapping
//!
//! Greedy word wrap. Words are accumulated onto a line until the next one
//! would overflow the width limit, then the line is emitted. A word is never
//! split: a word wider than the limit gets a line to itself.
//!
//! Wrapping is lazy. [`wrap`] returns an iterator, and each call to `next`
//! measures only the words it consumes.

use std::str::SplitWhitespace;

use crate::font::SizedFont;

/// Anything that can report the rendered width of a run of text.
pub trait TextMeasure {
    fn width(&self, text: &str) -> f64;
}

impl TextMeasure for SizedFont {
    fn width(&self, text: &str) -> f64 {
        self.font.measure(text, self.size)
    }
}

/// Lines of a string wrapped to a maximum width. See [`wrap`].
#[derive(Debug, Clone)]
pub struct WrappedLines<'a, M> {
    words: SplitWhitespace<'a>,
    /// First word of the next line, already pulled from `words`.
    carry: Option<&'a str>,
    max_width: f64,
    space_width: f64,
    measure: M,
}

/// Wrap `text` into lines no wider than `max_width`.
///
/// Whitespace runs collapse to a single space. Empty or blank input yields
/// no lines at all.
pub fn wrap<M: TextMeasure>(text: &str, max_width: f64, measure: M) -> WrappedLines<'_, M> {
    WrappedLines {
        words: text.split_whitespace(),
        carry: None,
        max_width,
        space_width: measure.width(" "),
        measure,
    }
}

impl<M: TextMeasure> Iterator for WrappedLines<'_, M> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let first = self.carry.take().or_else(|| self.words.next())?;
        let mut line = String::from(first);
        let mut width = self.measure.width(first);

        for word in self.words.by_ref() {
            let word_width = self.measure.width(word);
            if width + self.space_width + word_width > self.max_width {
                self.carry = Some(word);
                break;
            }
            line.push(' ');
            line.push_str(word);
            width += self.space_width + word_width;
        }

        Some(line)
    }
}
