//! Browser entry points: export a plan JSON string to PDF bytes or HTML.

use wasm_bindgen::prelude::*;

use crate::{export, parse_plan, ExportOptions};
use crate::html::HtmlWriter;
use crate::pdf::PdfWriter;

#[wasm_bindgen]
pub fn render_plan_pdf(json: &str) -> Result<Vec<u8>, JsValue> {
    let plan = parse_plan(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    export(&plan, &ExportOptions::default(), &PdfWriter::new())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn render_plan_html(json: &str) -> Result<String, JsValue> {
    let plan = parse_plan(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let bytes = export(&plan, &ExportOptions::default(), &HtmlWriter::new())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| JsValue::from_str(&e.to_string()))
}
