//! Draw-call output for canvas-like targets.
//!
//! Mirrors a `drawImage(src, sx, sy, sw, sh, dx, dy, dw, dh)` blit: the source
//! rectangle is copied straight from the sheet and stretched into the
//! destination, so there is no background offset to apply.

use super::traits::IconSurface;
use crate::components::rect::Rect;
use crate::systems::placement::{FrameStyle, Placement};

#[derive(Debug, Clone, Copy, Default)]
pub struct DrawSurface;

/// One clipped image blit, in the icon's local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub source: String,
    /// Region of the sheet, in source pixels.
    pub src: Rect,
    /// Where it lands, origin at the icon's top-left.
    pub dst: Rect,
    /// Frame stroke and glow around `dst`.
    pub frame: Option<FrameStyle>,
    pub label: String,
}

impl IconSurface for DrawSurface {
    type Output = DrawCall;

    fn compose(&self, source: &str, placement: &Placement) -> DrawCall {
        DrawCall {
            source: source.to_string(),
            src: placement.rect,
            dst: Rect::new(0.0, 0.0, placement.size, placement.scaled_height()),
            frame: placement.frame.clone(),
            label: placement.label.clone(),
        }
    }
}
