//! # Text Styles
//!
//! Every draw instruction carries one of a handful of semantic styles. The
//! paginator only needs a style's font and size to measure; backends use the
//! rest (colour, link treatment) when drawing.

use serde::{Deserialize, Serialize};

use crate::font::{SizedFont, StandardFont};

/// The semantic role of a line of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextStyle {
    /// Document title.
    Title,
    /// Section heading ("Topics", "Weekly Schedule", ...).
    Heading,
    /// Topic name or week header.
    Subheading,
    /// Running text and list items.
    Body,
    /// A resource URL.
    Link,
}

impl TextStyle {
    /// Font and size used to draw and measure this style.
    pub fn font(&self) -> SizedFont {
        match self {
            TextStyle::Title => SizedFont::new(StandardFont::HelveticaBold, 18.0),
            TextStyle::Heading => SizedFont::new(StandardFont::HelveticaBold, 14.0),
            TextStyle::Subheading => SizedFont::new(StandardFont::HelveticaBold, 12.0),
            TextStyle::Body | TextStyle::Link => SizedFont::new(StandardFont::Helvetica, 11.0),
        }
    }

    pub fn color(&self) -> Color {
        match self {
            TextStyle::Title | TextStyle::Heading => Color::rgb(0.10, 0.10, 0.15),
            TextStyle::Subheading | TextStyle::Body => Color::BLACK,
            TextStyle::Link => Color::rgb(0.05, 0.33, 0.80),
        }
    }

    /// Class name backends use for this style.
    pub fn name(&self) -> &'static str {
        match self {
            TextStyle::Title => "title",
            TextStyle::Heading => "heading",
            TextStyle::Subheading => "subheading",
            TextStyle::Body => "body",
            TextStyle::Link => "link",
        }
    }
}

/// An RGB colour, components in 0.0 - 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form, for CSS.
    pub fn to_hex(&self) -> String {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", channel(self.r), channel(self.g), channel(self.b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}
