//! Structured error types for the plan exporter.
//!
//! Pagination itself cannot fail. Errors come from the edges: parsing input,
//! loading options, refusing to export a non-plan, and backend output.

use std::path::PathBuf;

use thiserror::Error;

/// The unified error type returned by all public studyplan API functions.
#[derive(Debug, Error)]
pub enum PlanError {
    /// JSON input failed to parse as a plan or as export options.
    #[error("{}", parse_message(.source, .hint))]
    ParseError {
        #[source]
        source: serde_json::Error,
        hint: String,
    },

    /// The service answered that the goal was not about learning; there is
    /// no plan to export.
    #[error("{}", not_learning_message(.message.as_deref(), .suggestion.as_deref()))]
    NotLearningRelated {
        message: Option<String>,
        suggestion: Option<String>,
    },

    /// Page geometry that leaves nowhere to put text.
    #[error("Invalid export options: {0}")]
    InvalidOptions(String),

    /// A file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A backend failed to produce output.
    #[error("Render error: {0}")]
    RenderError(String),
}

fn parse_message(source: &serde_json::Error, hint: &str) -> String {
    if hint.is_empty() {
        format!("Failed to parse input: {}", source)
    } else {
        format!("Failed to parse input: {}\n  Hint: {}", source, hint)
    }
}

fn not_learning_message(message: Option<&str>, suggestion: Option<&str>) -> String {
    let mut out = String::from("The response is not a learning plan");
    if let Some(message) = message {
        out.push_str(": ");
        out.push_str(message);
    }
    if let Some(suggestion) = suggestion {
        out.push_str("\n  Suggestion: ");
        out.push_str(suggestion);
    }
    out
}

impl From<serde_json::Error> for PlanError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters.".to_string()
            }
            serde_json::error::Category::Data => {
                "The JSON is valid but doesn't match the expected shape. Check field names and types; `isLearningRelated` is required.".to_string()
            }
            serde_json::error::Category::Eof => {
                "Unexpected end of input. Is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => String::new(),
        };
        PlanError::ParseError { source: e, hint }
    }
}
