//! Export options: page geometry, label language and break policy.
//!
//! Options are plain data with a default for every field, so an options
//! file only needs the keys it wants to change:
//!
//! ```json
//! { "page": { "size": "Letter", "lineHeight": 16 }, "locale": "fr" }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::layout::BreakPolicy;
use crate::locale::Locale;
use crate::model::PageGeometry;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    pub page: PageGeometry,
    /// Label language. When unset, follows the plan's `responseLanguage`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    pub break_policy: BreakPolicy,
}

impl ExportOptions {
    /// Parse options from JSON. The result is validated.
    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        let options: ExportOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Read and parse an options file.
    pub fn load(path: &Path) -> Result<Self, PlanError> {
        let json = std::fs::read_to_string(path).map_err(|source| PlanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Reject geometry that leaves no room for text.
    pub fn validate(&self) -> Result<(), PlanError> {
        match self.page.problem() {
            Some(problem) => Err(PlanError::InvalidOptions(problem)),
            None => Ok(()),
        }
    }
}
