use serde::{Deserialize, Serialize};

/// Default frame border width in CSS pixels.
pub const DEFAULT_BORDER_WIDTH: f64 = 2.0;
/// Default frame glow radius in CSS pixels.
pub const DEFAULT_GLOW_RADIUS: f64 = 16.0;
/// Accessible role attached to every placed icon.
pub const ICON_ROLE: &str = "img";

/// Rendering defaults applied when a caller leaves a frame option unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconConfig {
    /// Frame border width in pixels (default: 2).
    pub border_width: f64,
    /// Frame glow blur radius in pixels (default: 16).
    pub glow_radius: f64,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            border_width: DEFAULT_BORDER_WIDTH,
            glow_radius: DEFAULT_GLOW_RADIUS,
        }
    }
}
