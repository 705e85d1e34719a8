//! Rect resolution: metadata + descriptor -> source rectangle.

use crate::api::error::AddressingError;
use crate::components::atlas::AtlasMeta;
use crate::components::rect::Rect;
use crate::components::sprite::SpriteDescriptor;

/// Resolve the source-pixel rectangle of `sprite` within the atlas.
///
/// Grid addressing is tried first, and only when the metadata defines both
/// `columns` and `rows`: explicit `row`/`col` if both are given, else the
/// row-major `index`. Grid addresses are not bounds-checked; an index past
/// the last tile resolves to coordinates outside the sheet.
///
/// Otherwise a complete `x`/`y`/`w`/`h` on the descriptor is returned as is.
pub fn resolve(meta: &AtlasMeta, sprite: &SpriteDescriptor) -> Result<Rect, AddressingError> {
    if let Some(grid) = meta.grid() {
        let cell = match (sprite.row, sprite.col, sprite.index) {
            (Some(row), Some(col), _) => Some((row, col)),
            // A zero-column grid has no row-major layout.
            (_, _, Some(index)) if grid.columns > 0 => Some(grid.cell_of(index)),
            _ => None,
        };
        if let Some((row, col)) = cell {
            return Ok(Rect::new(
                col as f64 * grid.tile_w,
                row as f64 * grid.tile_h,
                grid.tile_w,
                grid.tile_h,
            ));
        }
    }

    sprite
        .explicit_rect()
        .ok_or_else(|| AddressingError::new(sprite.name.as_str()))
}
