//! # PDF Serializer
//!
//! Takes the paginated plan and writes a valid PDF file.
//!
//! This is a from-scratch PDF 1.7 writer. Exports only ever contain text in
//! the standard fonts, so the subset of the format needed is small: a page
//! tree, unembedded Type 1 fonts, compressed content streams and link
//! annotations for resource URLs.
//!
//! ## PDF Structure (simplified)
//!
//! ```text
//! %PDF-1.7            <- header
//! 1 0 obj ... endobj  <- objects (fonts, pages, content streams, etc.)
//! 2 0 obj ... endobj
//! ...
//! xref                <- cross-reference table (byte offsets of each object)
//! trailer             <- points to the root object
//! %%EOF
//! ```
//!
//! Nothing time-dependent is written, so the same document always produces
//! the same bytes.

use std::collections::BTreeSet;
use std::io::Write;

use miniz_oxide::deflate::compress_to_vec_zlib;

use crate::font::StandardFont;
use crate::layout::{is_safe_link, DrawInstruction, Page, PlanDocument};

pub struct PdfWriter;

/// Tracks allocated PDF objects during writing.
struct PdfBuilder {
    /// Index is the object number. Slot 0 is the free-list head.
    objects: Vec<Vec<u8>>,
    /// Font and its object number, in resource-name order (/F0, /F1, ...).
    font_objects: Vec<(StandardFont, usize)>,
}

impl PdfBuilder {
    fn add(&mut self, data: Vec<u8>) -> usize {
        self.objects.push(data);
        self.objects.len() - 1
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write a paginated plan to a PDF byte vector.
    pub fn write(&self, document: &PlanDocument) -> Vec<u8> {
        // 0 = placeholder (PDF objects are 1-indexed)
        // 1 = Catalog
        // 2 = Pages (page tree root)
        // 3+ = fonts, then per page: content stream, annotations, page
        let mut builder = PdfBuilder {
            objects: vec![Vec::new(), Vec::new(), Vec::new()],
            font_objects: Vec::new(),
        };

        self.register_fonts(&mut builder, &document.pages);

        let mut page_obj_ids = Vec::with_capacity(document.pages.len());
        for page in &document.pages {
            let content = self.build_content_stream(document, page, &builder.font_objects);
            let compressed = compress_to_vec_zlib(&content, 6);

            let mut content_data = Vec::new();
            let _ = write!(
                content_data,
                "<< /Length {} /Filter /FlateDecode >>\nstream\n",
                compressed.len()
            );
            content_data.extend_from_slice(&compressed);
            content_data.extend_from_slice(b"\nendstream");
            let content_obj_id = builder.add(content_data);

            let annot_ids: Vec<usize> = page
                .lines
                .iter()
                .filter_map(|line| {
                    let href = line.href.as_deref().filter(|href| is_safe_link(href))?;
                    Some(builder.add(self.link_annotation(document, page, line, href)))
                })
                .collect();

            let annots = if annot_ids.is_empty() {
                String::new()
            } else {
                format!(" /Annots [{}]", references(&annot_ids))
            };
            let page_dict = format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Contents {} 0 R /Resources << /Font << {} >> >>{} >>",
                page.width,
                page.height,
                content_obj_id,
                self.build_font_resource_dict(&builder.font_objects),
                annots
            );
            page_obj_ids.push(builder.add(page_dict.into_bytes()));
        }

        builder.objects[1] = format!(
            "<< /Type /Catalog /Pages 2 0 R /Lang ({}) >>",
            document.locale.tag()
        )
        .into_bytes();

        builder.objects[2] = format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            references(&page_obj_ids),
            page_obj_ids.len()
        )
        .into_bytes();

        let mut info = b"<< /Title ".to_vec();
        write_pdf_string(&mut info, &document.title);
        if let Some(subject) = &document.subject {
            info.extend_from_slice(b" /Subject ");
            write_pdf_string(&mut info, subject);
        }
        info.extend_from_slice(b" /Producer (studyplan) /Creator (studyplan) >>");
        let info_obj_id = builder.add(info);

        self.serialize(&builder, info_obj_id)
    }

    /// Build the PDF content stream for a single page.
    ///
    /// Each line gets its own text object with an absolute text matrix, so
    /// lines can be drawn in any order.
    fn build_content_stream(
        &self,
        document: &PlanDocument,
        page: &Page,
        font_objects: &[(StandardFont, usize)],
    ) -> Vec<u8> {
        let mut stream = Vec::new();

        for line in &page.lines {
            let font = line.style.font();
            let color = line.style.color();
            let pdf_y = page.height - document.baseline(line);
            let _ = write!(
                stream,
                "BT\n{:.3} {:.3} {:.3} rg\n/F{} {:.1} Tf\n1 0 0 1 {:.2} {:.2} Tm\n",
                color.r,
                color.g,
                color.b,
                font_index(font.font, font_objects),
                font.size,
                line.x,
                pdf_y
            );
            write_pdf_string(&mut stream, &line.text);
            stream.extend_from_slice(b" Tj\nET\n");
        }

        stream
    }

    /// A URI link annotation covering the measured extent of a line.
    fn link_annotation(
        &self,
        document: &PlanDocument,
        page: &Page,
        line: &DrawInstruction,
        href: &str,
    ) -> Vec<u8> {
        let font = line.style.font();
        let width = font.font.measure(&line.text, font.size);
        let baseline = page.height - document.baseline(line);

        let mut annot = Vec::new();
        let _ = write!(
            annot,
            "<< /Type /Annot /Subtype /Link /Rect [{:.2} {:.2} {:.2} {:.2}] /Border [0 0 0] \
             /A << /S /URI /URI ",
            line.x,
            baseline - 0.25 * font.size,
            line.x + width,
            baseline + 0.85 * font.size
        );
        write_pdf_string(&mut annot, href);
        annot.extend_from_slice(b" >> >>");
        annot
    }

    /// Register one font object per standard font the pages use.
    fn register_fonts(&self, builder: &mut PdfBuilder, pages: &[Page]) {
        let mut fonts: BTreeSet<StandardFont> = pages
            .iter()
            .flat_map(|p| p.lines.iter().map(|l| l.style.font().font))
            .collect();

        if fonts.is_empty() {
            fonts.insert(StandardFont::Helvetica);
        }

        for font in fonts {
            let font_dict = format!(
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
                font.pdf_name()
            );
            let obj_id = builder.add(font_dict.into_bytes());
            builder.font_objects.push((font, obj_id));
        }
    }

    fn build_font_resource_dict(&self, font_objects: &[(StandardFont, usize)]) -> String {
        font_objects
            .iter()
            .enumerate()
            .map(|(i, (_, obj_id))| format!("/F{} {} 0 R", i, obj_id))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Serialize all objects into the final PDF byte stream.
    fn serialize(&self, builder: &PdfBuilder, info_obj_id: usize) -> Vec<u8> {
        let mut output: Vec<u8> = Vec::new();
        let mut offsets: Vec<usize> = vec![0; builder.objects.len()];

        // Header
        output.extend_from_slice(b"%PDF-1.7\n");
        output.extend_from_slice(b"%\xe2\xe3\xcf\xd3\n");

        for (i, data) in builder.objects.iter().enumerate().skip(1) {
            offsets[i] = output.len();
            let _ = write!(output, "{} 0 obj\n", i);
            output.extend_from_slice(data);
            output.extend_from_slice(b"\nendobj\n\n");
        }

        let xref_offset = output.len();
        let _ = write!(output, "xref\n0 {}\n", builder.objects.len());
        let _ = write!(output, "0000000000 65535 f \n");
        for offset in offsets.iter().skip(1) {
            let _ = write!(output, "{:010} 00000 n \n", offset);
        }

        let _ = write!(
            output,
            "trailer\n<< /Size {} /Root 1 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            builder.objects.len(),
            info_obj_id,
            xref_offset
        );

        output
    }
}

/// "3 0 R 5 0 R ..." for a list of object numbers.
fn references(ids: &[usize]) -> String {
    ids.iter()
        .map(|id| format!("{} 0 R", id))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resource index (/F0, /F1, ...) of a registered font.
fn font_index(font: StandardFont, font_objects: &[(StandardFont, usize)]) -> usize {
    font_objects
        .iter()
        .position(|(f, _)| *f == font)
        .unwrap_or(0)
}

/// Write `s` as a PDF literal string in WinAnsi encoding, parentheses
/// included. Characters WinAnsi lacks are written as `?`.
fn write_pdf_string(out: &mut Vec<u8>, s: &str) {
    out.push(b'(');
    for ch in s.chars() {
        let byte = unicode_to_winansi(ch).unwrap_or(b'?');
        if matches!(byte, b'\\' | b'(' | b')') {
            out.push(b'\\');
        }
        out.push(byte);
    }
    out.push(b')');
}

/// Map a Unicode codepoint to a WinAnsiEncoding byte value.
///
/// WinAnsiEncoding is based on Windows-1252. Most codepoints in
/// 0x20..=0x7E and 0xA0..=0xFF map directly. The 0x80..=0x9F range
/// contains special mappings for smart quotes, bullets, dashes, etc.
fn unicode_to_winansi(ch: char) -> Option<u8> {
    let cp = ch as u32;
    if (0x20..=0x7E).contains(&cp) || (0xA0..=0xFF).contains(&cp) {
        return Some(cp as u8);
    }
    match cp {
        0x20AC => Some(0x80), // Euro sign
        0x201A => Some(0x82), // Single low-9 quotation mark
        0x0192 => Some(0x83), // Latin small letter f with hook
        0x201E => Some(0x84), // Double low-9 quotation mark
        0x2026 => Some(0x85), // Horizontal ellipsis
        0x2020 => Some(0x86), // Dagger
        0x2021 => Some(0x87), // Double dagger
        0x02C6 => Some(0x88), // Modifier letter circumflex accent
        0x2030 => Some(0x89), // Per mille sign
        0x0160 => Some(0x8A), // Latin capital letter S with caron
        0x2039 => Some(0x8B), // Single left-pointing angle quotation
        0x0152 => Some(0x8C), // Latin capital ligature OE
        0x017D => Some(0x8E), // Latin capital letter Z with caron
        0x2018 => Some(0x91), // Left single quotation mark
        0x2019 => Some(0x92), // Right single quotation mark
        0x201C => Some(0x93), // Left double quotation mark
        0x201D => Some(0x94), // Right double quotation mark
        0x2022 => Some(0x95), // Bullet
        0x2013 => Some(0x96), // En dash
        0x2014 => Some(0x97), // Em dash
        0x02DC => Some(0x98), // Small tilde
        0x2122 => Some(0x99), // Trade mark sign
        0x0161 => Some(0x9A), // Latin small letter s with caron
        0x203A => Some(0x9B), // Single right-pointing angle quotation
        0x0153 => Some(0x9C), // Latin small ligature oe
        0x017E => Some(0x9E), // Latin small letter z with caron
        0x0178 => Some(0x9F), // Latin capital letter Y with diaeresis
        _ => None,
    }
}
