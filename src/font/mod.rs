//! # Font Metrics
//!
//! Exported plans are set in the standard PDF fonts, which every viewer
//! ships, so nothing is embedded. Measuring text still needs the real
//! advance widths: line wrapping and link rectangles both depend on them.
//!
//! Widths come from the Adobe AFM files, in 1/1000 em, for the printable
//! WinAnsi characters the exporter can actually draw.

pub mod metrics;

/// The standard fonts the exporter draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

impl StandardFont {
    /// The PDF name for this font.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Advance width of one character in points.
    pub fn char_width(&self, ch: char, font_size: f64) -> f64 {
        let units = match self {
            Self::Helvetica => metrics::helvetica_width(ch),
            Self::HelveticaBold => metrics::helvetica_bold_width(ch),
        };
        units as f64 / 1000.0 * font_size
    }

    /// Width of a string set on a single line, in points. No kerning.
    pub fn measure(&self, text: &str, font_size: f64) -> f64 {
        text.chars().map(|ch| self.char_width(ch, font_size)).sum()
    }
}

/// A font at a fixed size: everything needed to measure a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizedFont {
    pub font: StandardFont,
    pub size: f64,
}

impl SizedFont {
    pub fn new(font: StandardFont, size: f64) -> Self {
        Self { font, size }
    }
}
