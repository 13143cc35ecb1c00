//! Page geometry: the fixed page size, margin and line pitch the paginator
//! lays lines into. All values are PDF points (1/72 inch).

use serde::{Deserialize, Serialize};

/// Points per millimetre.
pub const MM: f64 = 72.0 / 25.4;

/// Standard page sizes in points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum PageSize {
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Custom {
        width: f64,
        height: f64,
    },
}

impl PageSize {
    /// Returns (width, height) in points.
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::A5 => (419.53, 595.28),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }
}

/// Size, margin and line pitch of every page in an exported document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageGeometry {
    pub size: PageSize,
    /// Uniform margin on all four sides. Also the unit of horizontal indent.
    pub margin: f64,
    /// Vertical advance of every emitted line.
    pub line_height: f64,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            size: PageSize::A4,
            margin: 10.0 * MM,
            line_height: 7.0 * MM,
        }
    }
}

impl PageGeometry {
    pub fn width(&self) -> f64 {
        self.size.dimensions().0
    }

    pub fn height(&self) -> f64 {
        self.size.dimensions().1
    }

    /// Width between the left and right margins.
    pub fn printable_width(&self) -> f64 {
        self.width() - 2.0 * self.margin
    }

    /// Lowest y (measured from the top edge) a line may start at.
    pub fn bottom_limit(&self) -> f64 {
        self.height() - self.margin
    }

    /// Why this geometry cannot hold any text, if it can't.
    pub fn problem(&self) -> Option<String> {
        let (width, height) = self.size.dimensions();
        if !(width > 0.0 && height > 0.0) {
            return Some(format!("page size must be positive, got {}x{}", width, height));
        }
        if !(self.margin >= 0.0) {
            return Some(format!("margin must not be negative, got {}", self.margin));
        }
        if !(self.line_height > 0.0) {
            return Some(format!("line height must be positive, got {}", self.line_height));
        }
        if self.printable_width() <= 0.0 || self.bottom_limit() <= self.margin {
            return Some(format!(
                "margin {} leaves no printable area on a {}x{} page",
                self.margin, width, height
            ));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_a4_with_ten_mm_margin() {
        let g = PageGeometry::default();
        assert_eq!(g.width(), 595.28);
        assert!((g.margin - 28.346).abs() < 0.01);
        assert!((g.printable_width() - (595.28 - 2.0 * g.margin)).abs() < 1e-9);
        assert!(g.problem().is_none());
    }

    #[test]
    fn test_margins_meeting_is_a_problem() {
        let g = PageGeometry {
            size: PageSize::Custom { width: 100.0, height: 100.0 },
            margin: 50.0,
            line_height: 10.0,
        };
        assert!(g.problem().is_some());
    }

    #[test]
    fn test_zero_line_height_is_a_problem() {
        let g = PageGeometry {
            line_height: 0.0,
            ..Default::default()
        };
        assert!(g.problem().unwrap().contains("line height"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let g: PageGeometry = serde_json::from_str(r#"{ "size": "Letter" }"#).unwrap();
        assert_eq!(g.size, PageSize::Letter);
        assert_eq!(g.line_height, PageGeometry::default().line_height);
    }
}
