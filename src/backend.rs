//! Rendering backends: one layout pass, several output files.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::PlanError;
use crate::html::HtmlWriter;
use crate::layout::PlanDocument;
use crate::pdf::PdfWriter;

/// Something that turns a paginated plan into file bytes.
pub trait RenderBackend {
    fn render(&self, document: &PlanDocument) -> Result<Vec<u8>, PlanError>;

    /// Extension (without the dot) for files this backend produces.
    fn file_extension(&self) -> &'static str;
}

impl RenderBackend for PdfWriter {
    fn render(&self, document: &PlanDocument) -> Result<Vec<u8>, PlanError> {
        Ok(self.write(document))
    }

    fn file_extension(&self) -> &'static str {
        "pdf"
    }
}

impl RenderBackend for HtmlWriter {
    fn render(&self, document: &PlanDocument) -> Result<Vec<u8>, PlanError> {
        Ok(self.write(document).into_bytes())
    }

    fn file_extension(&self) -> &'static str {
        "html"
    }
}

/// Pretty-printed JSON of the layout itself, for inspecting positions.
pub struct LayoutJson;

impl RenderBackend for LayoutJson {
    fn render(&self, document: &PlanDocument) -> Result<Vec<u8>, PlanError> {
        serde_json::to_vec_pretty(document).map_err(|e| PlanError::RenderError(e.to_string()))
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }
}

/// The output formats the exporter knows by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Pdf,
    Html,
    Json,
}

impl OutputFormat {
    pub fn backend(&self) -> Box<dyn RenderBackend> {
        debug!(format = %self, "selecting backend");
        match self {
            OutputFormat::Pdf => Box::new(PdfWriter::new()),
            OutputFormat::Html => Box::new(HtmlWriter::new()),
            OutputFormat::Json => Box::new(LayoutJson),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(OutputFormat::Pdf),
            "html" | "htm" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown format '{}', expected pdf, html or json", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Page;
    use crate::locale::Locale;
    use crate::model::PageGeometry;

    fn document() -> PlanDocument {
        let geometry = PageGeometry::default();
        PlanDocument {
            title: "Learning Plan".to_string(),
            subject: None,
            locale: Locale::English,
            geometry,
            pages: vec![Page {
                width: geometry.width(),
                height: geometry.height(),
                lines: vec![],
            }],
        }
    }

    #[test]
    fn test_format_names() {
        assert_eq!("PDF".parse::<OutputFormat>().unwrap(), OutputFormat::Pdf);
        assert_eq!("htm".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert!("docx".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_extensions_match_format() {
        for format in [OutputFormat::Pdf, OutputFormat::Html, OutputFormat::Json] {
            assert_eq!(format.backend().file_extension(), format.to_string());
        }
    }

    #[test]
    fn test_layout_json_round_trips_as_value() {
        let bytes = LayoutJson.render(&document()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["title"], "Learning Plan");
        assert_eq!(value["locale"], "en");
        assert_eq!(value["pages"].as_array().unwrap().len(), 1);
        assert!(value["geometry"]["lineHeight"].is_number());
    }
}
