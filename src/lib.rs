//! # studyplan
//!
//! Lays out generated learning plans into fixed-size pages and exports them.
//!
//! A plan-generation service answers a learner's goal with a structured
//! study plan. This crate takes that plan, walks it section by section into
//! pages of positioned, styled text lines, and hands the pages to a backend:
//! a PDF for download, an HTML page for the screen, or the layout as JSON.
//!
//! ## Architecture
//!
//! ```text
//! Input (JSON)
//!       ↓
//!   [model]    LearningPlan, page geometry
//!       ↓
//!   [layout]   Paginator: cursor, wrapping, page breaks
//!       ↓                    (uses [text], [font], [style], [locale])
//!   [backend]  PdfWriter | HtmlWriter | LayoutJson
//!       ↓
//!   bytes
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod font;
pub mod html;
pub mod layout;
pub mod locale;
pub mod model;
pub mod pdf;
pub mod style;
pub mod text;

#[cfg(feature = "wasm")]
pub mod wasm;

use tracing::debug;

pub use backend::{OutputFormat, RenderBackend};
pub use config::ExportOptions;
pub use error::PlanError;
pub use layout::{Paginator, PlanDocument};
pub use model::LearningPlan;

use locale::Locale;
use pdf::PdfWriter;

/// Parse a plan-generation response.
pub fn parse_plan(json: &str) -> Result<LearningPlan, PlanError> {
    Ok(serde_json::from_str(json)?)
}

/// Lay a plan out into pages. Never fails.
///
/// Section labels follow `options.locale`, or the plan's own
/// `responseLanguage` when no locale is set.
pub fn layout(plan: &LearningPlan, options: &ExportOptions) -> PlanDocument {
    let locale = Locale::resolve(options.locale, plan.response_language.as_deref());
    let paginator = Paginator::new(options.page, locale, options.break_policy);
    let pages = paginator.paginate(plan);
    debug!(
        pages = pages.len(),
        locale = %locale,
        policy = ?options.break_policy,
        "paginated plan"
    );

    PlanDocument {
        title: layout::document_title(plan, locale.labels()),
        subject: plan.subject_text().map(str::to_string),
        locale,
        geometry: options.page,
        pages,
    }
}

/// Lay out and render a plan with the given backend.
///
/// Responses the service flagged as not learning related carry no plan;
/// they are refused with [`PlanError::NotLearningRelated`].
pub fn export(
    plan: &LearningPlan,
    options: &ExportOptions,
    backend: &dyn RenderBackend,
) -> Result<Vec<u8>, PlanError> {
    if !plan.is_learning_related {
        return Err(PlanError::NotLearningRelated {
            message: plan.message.clone(),
            suggestion: plan.suggestion.clone(),
        });
    }
    options.validate()?;
    let document = layout(plan, options);
    backend.render(&document)
}

/// Render a plan to PDF bytes with default options.
pub fn render(plan: &LearningPlan) -> Result<Vec<u8>, PlanError> {
    export(plan, &ExportOptions::default(), &PdfWriter::new())
}

/// Render a plan described as JSON to PDF bytes.
pub fn render_json(json: &str) -> Result<Vec<u8>, PlanError> {
    let plan = parse_plan(json)?;
    render(&plan)
}
