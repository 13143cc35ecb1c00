//! # HTML View
//!
//! Renders the paginated plan as a standalone HTML page for on-screen
//! viewing. It draws from the same layout pass as the PDF export: every
//! page becomes a fixed-size sheet, every draw instruction an absolutely
//! positioned line, so the screen and the download never disagree.

use std::fmt::Write;

use crate::font::StandardFont;
use crate::layout::{is_safe_link, DrawInstruction, PlanDocument};
use crate::style::TextStyle;

const STYLES: [TextStyle; 5] = [
    TextStyle::Title,
    TextStyle::Heading,
    TextStyle::Subheading,
    TextStyle::Body,
    TextStyle::Link,
];

pub struct HtmlWriter;

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write a paginated plan as an HTML document.
    pub fn write(&self, document: &PlanDocument) -> String {
        let mut html = String::new();
        let _ = write!(
            html,
            "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n",
            document.locale.tag(),
            escape(&document.title)
        );
        html.push_str("<style>\n");
        html.push_str(&self.stylesheet(document));
        html.push_str("</style>\n</head>\n<body>\n");

        for (index, page) in document.pages.iter().enumerate() {
            let _ = writeln!(
                html,
                "<section class=\"page\" data-page=\"{}\" style=\"width:{:.2}pt;height:{:.2}pt\">",
                index + 1,
                page.width,
                page.height
            );
            for line in &page.lines {
                self.write_line(&mut html, line);
            }
            html.push_str("</section>\n");
        }

        html.push_str("</body>\n</html>\n");
        html
    }

    fn stylesheet(&self, document: &PlanDocument) -> String {
        let mut css = String::from(
            "body{margin:0;background:#e5e5e5;font-family:Helvetica,Arial,sans-serif}\n\
             .page{position:relative;margin:16pt auto;background:#fff;overflow:hidden;\
             box-shadow:0 1pt 4pt rgba(0,0,0,.3)}\n",
        );
        let _ = writeln!(
            css,
            ".line{{position:absolute;margin:0;white-space:pre;height:{h:.2}pt;line-height:{h:.2}pt}}",
            h = document.geometry.line_height
        );
        for style in STYLES {
            let font = style.font();
            let weight = if font.font == StandardFont::HelveticaBold {
                700
            } else {
                400
            };
            let _ = writeln!(
                css,
                ".{}{{font-size:{:.1}pt;font-weight:{};color:{}}}",
                style.name(),
                font.size,
                weight,
                style.color().to_hex()
            );
        }
        css
    }

    fn write_line(&self, html: &mut String, line: &DrawInstruction) {
        let position = format!("left:{:.2}pt;top:{:.2}pt", line.x, line.y);
        match line.href.as_deref().filter(|href| is_safe_link(href)) {
            Some(href) => {
                let _ = writeln!(
                    html,
                    "<a class=\"line {}\" style=\"{}\" href=\"{}\">{}</a>",
                    line.style.name(),
                    position,
                    escape(href),
                    escape(&line.text)
                );
            }
            None => {
                let _ = writeln!(
                    html,
                    "<p class=\"line {}\" style=\"{}\">{}</p>",
                    line.style.name(),
                    position,
                    escape(&line.text)
                );
            }
        }
    }
}

/// Escape text for use in HTML content and double-quoted attributes.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Page;
    use crate::locale::Locale;
    use crate::model::PageGeometry;

    fn document(lines: Vec<DrawInstruction>) -> PlanDocument {
        let geometry = PageGeometry::default();
        PlanDocument {
            title: "Learning Plan: <Test>".to_string(),
            subject: None,
            locale: Locale::French,
            geometry,
            pages: vec![
                Page {
                    width: geometry.width(),
                    height: geometry.height(),
                    lines,
                },
                Page {
                    width: geometry.width(),
                    height: geometry.height(),
                    lines: vec![],
                },
            ],
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_one_section_per_page() {
        let html = HtmlWriter::new().write(&document(vec![]));
        assert_eq!(html.matches("<section class=\"page\"").count(), 2);
        assert!(html.contains("data-page=\"2\""));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"fr\">"));
    }

    #[test]
    fn test_lines_are_positioned_and_escaped() {
        let html = HtmlWriter::new().write(&document(vec![DrawInstruction {
            x: 56.69,
            y: 100.0,
            text: "<script>alert(1)</script>".to_string(),
            style: TextStyle::Body,
            href: None,
        }]));
        assert!(html.contains("left:56.69pt;top:100.00pt"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("<title>Learning Plan: &lt;Test&gt;</title>"));
    }

    #[test]
    fn test_links_become_anchors() {
        let html = HtmlWriter::new().write(&document(vec![DrawInstruction {
            x: 85.0,
            y: 60.0,
            text: "https://example.com/?a=1&b=2".to_string(),
            style: TextStyle::Link,
            href: Some("https://example.com/?a=1&b=2".to_string()),
        }]));
        assert!(html.contains("<a class=\"line link\""));
        assert!(html.contains("href=\"https://example.com/?a=1&amp;b=2\""));
    }

    #[test]
    fn test_script_links_are_not_anchors() {
        let html = HtmlWriter::new().write(&document(vec![DrawInstruction {
            x: 85.0,
            y: 60.0,
            text: "javascript:alert(document.cookie)".to_string(),
            style: TextStyle::Link,
            href: Some("javascript:alert(document.cookie)".to_string()),
        }]));
        assert!(!html.contains("<a "));
        assert!(!html.contains("href="));
        assert!(html.contains("<p class=\"line link\""));
    }

    #[test]
    fn test_stylesheet_has_every_style() {
        let html = HtmlWriter::new().write(&document(vec![]));
        for style in STYLES {
            assert!(html.contains(&format!(".{}{{", style.name())));
        }
    }
}
