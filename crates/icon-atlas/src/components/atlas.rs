//! Sprite-sheet metadata.
//!
//! An atlas is one image holding many icons. It is described by its natural
//! pixel size and, for uniform sheets, a column/row grid.

use serde::{Deserialize, Serialize};

use crate::api::error::AtlasError;

/// Describes a whole sprite sheet.
///
/// The declared `image_width`/`image_height` must match the asset's natural
/// pixel size; nothing here inspects the image itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtlasMeta {
    /// Full sheet width in pixels.
    pub image_width: f64,
    /// Full sheet height in pixels.
    pub image_height: f64,
    /// Number of grid columns. Only meaningful together with `rows`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    /// Number of grid rows. Only meaningful together with `columns`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    /// Explicit square tile edge in source pixels. Overrides the derived
    /// tile width and height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tile_size: Option<f64>,
}

/// Tile geometry of a uniform grid atlas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileGrid {
    pub columns: u32,
    pub rows: u32,
    pub tile_w: f64,
    pub tile_h: f64,
}

impl AtlasMeta {
    /// Metadata for a sheet without a grid (rect addressing only).
    pub fn new(image_width: f64, image_height: f64) -> Self {
        Self {
            image_width,
            image_height,
            columns: None,
            rows: None,
            tile_size: None,
        }
    }

    /// Treat the sheet as a uniform `columns` x `rows` grid.
    pub fn with_grid(mut self, columns: u32, rows: u32) -> Self {
        self.columns = Some(columns);
        self.rows = Some(rows);
        self
    }

    /// Set an explicit square tile edge.
    pub fn with_tile_size(mut self, tile_size: f64) -> Self {
        self.tile_size = Some(tile_size);
        self
    }

    /// Grid geometry, present only when both `columns` and `rows` are set.
    ///
    /// Without `tile_size` the tile edges are the exact quotients
    /// `image_width / columns` and `image_height / rows`.
    pub fn grid(&self) -> Option<TileGrid> {
        let (columns, rows) = (self.columns?, self.rows?);
        let (tile_w, tile_h) = match self.tile_size {
            Some(size) => (size, size),
            None => (
                self.image_width / columns as f64,
                self.image_height / rows as f64,
            ),
        };
        Some(TileGrid { columns, rows, tile_w, tile_h })
    }

    /// Check the metadata invariants. `label` names the atlas in errors.
    pub fn validate(&self, label: &str) -> Result<(), AtlasError> {
        let invalid = |reason: String| AtlasError::InvalidMeta {
            atlas: label.to_string(),
            reason,
        };

        if !(self.image_width > 0.0 && self.image_height > 0.0) {
            return Err(invalid(format!(
                "image dimensions must be positive, got {}x{}",
                self.image_width, self.image_height
            )));
        }
        if self.columns == Some(0) || self.rows == Some(0) {
            return Err(invalid("grid columns and rows must be non-zero".into()));
        }
        if self.columns.is_some() != self.rows.is_some() {
            log::warn!("atlas `{label}`: only one of columns/rows set, grid addressing disabled");
        }
        if let Some(size) = self.tile_size {
            if !(size > 0.0) {
                return Err(invalid(format!("tile size must be positive, got {size}")));
            }
        }
        Ok(())
    }
}

impl TileGrid {
    /// Row-major `(row, col)` for a linear index.
    pub fn cell_of(&self, index: u32) -> (u32, u32) {
        (index / self.columns, index % self.columns)
    }
}
