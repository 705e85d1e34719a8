use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Identifies one icon inside an atlas.
///
/// Two addressing modes may be filled in at once: grid addressing (`index`,
/// or `row` + `col`) and rect addressing (`x`, `y`, `w`, `h`). When the atlas
/// has a grid, grid addressing takes precedence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpriteDescriptor {
    /// Used for the accessible label and in error messages. Need not be unique.
    pub name: String,
    /// Row-major position in the grid, 0-based.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<f64>,
}

impl SpriteDescriptor {
    /// A descriptor with a name and no addressing data.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Address by row-major grid index.
    pub fn indexed(name: impl Into<String>, index: u32) -> Self {
        Self {
            index: Some(index),
            ..Self::named(name)
        }
    }

    /// Address by explicit grid row and column.
    pub fn cell(name: impl Into<String>, row: u32, col: u32) -> Self {
        Self {
            row: Some(row),
            col: Some(col),
            ..Self::named(name)
        }
    }

    /// Address by an explicit pixel rectangle.
    pub fn rect(name: impl Into<String>, x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::named(name).with_rect(Rect::new(x, y, w, h))
    }

    /// Add (or replace) the explicit rectangle, used when grid addressing
    /// does not apply.
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.x = Some(rect.x);
        self.y = Some(rect.y);
        self.w = Some(rect.w);
        self.h = Some(rect.h);
        self
    }

    /// The explicit rectangle, if all four fields are present.
    pub fn explicit_rect(&self) -> Option<Rect> {
        Some(Rect::new(self.x?, self.y?, self.w?, self.h?))
    }
}
