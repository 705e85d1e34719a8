//! Scaled placement of a resolved sprite inside a square viewport.
//!
//! Scaling is driven by the rectangle's width only: `scale = size / rect.w`
//! and the height is scaled by the same factor. Non-square source rectangles
//! are therefore stretched or cropped vertically inside the square viewport.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::api::config::{IconConfig, ICON_ROLE};
use crate::api::error::AddressingError;
use crate::components::atlas::AtlasMeta;
use crate::components::rect::Rect;
use crate::components::sprite::SpriteDescriptor;
use crate::systems::resolve::resolve;

/// Optional rarity-style frame and labeling for one placed icon.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrameOptions {
    /// Frame color (any CSS color). No frame is drawn without it.
    pub color: Option<String>,
    pub border_width: Option<f64>,
    pub glow_radius: Option<f64>,
    /// Accessible label; falls back to the sprite name.
    pub title: Option<String>,
}

impl FrameOptions {
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_border_width(mut self, width: f64) -> Self {
        self.border_width = Some(width);
        self
    }

    pub fn with_glow_radius(mut self, radius: f64) -> Self {
        self.glow_radius = Some(radius);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Border and glow applied around a framed icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameStyle {
    pub color: String,
    pub border_width: f64,
    pub glow_radius: f64,
}

/// Everything a host surface needs to show one icon: which part of the sheet,
/// how large the sheet is drawn, where it is shifted to, and how it is labeled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// Resolved source rectangle.
    pub rect: Rect,
    /// Edge of the square viewport in pixels.
    pub size: f64,
    /// `size / rect.w`.
    pub scale: f64,
    /// Full sheet dimensions after scaling.
    pub sheet_size: DVec2,
    /// Sheet offset that puts the rectangle's top-left at the viewport's top-left.
    pub offset: DVec2,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<FrameStyle>,
    /// Always `"img"`.
    pub role: String,
    pub label: String,
}

/// Place `sprite` at a `size` x `size` viewport with the default frame settings.
pub fn place(
    meta: &AtlasMeta,
    sprite: &SpriteDescriptor,
    size: f64,
    frame: &FrameOptions,
) -> Result<Placement, AddressingError> {
    place_with(&IconConfig::default(), meta, sprite, size, frame)
}

/// Like [`place`], with frame defaults taken from `config`.
///
/// Fails only when the sprite cannot be resolved. Degenerate inputs such as
/// a zero-width rectangle or a negative size are not rejected and yield
/// non-finite or negative placement values.
pub fn place_with(
    config: &IconConfig,
    meta: &AtlasMeta,
    sprite: &SpriteDescriptor,
    size: f64,
    frame: &FrameOptions,
) -> Result<Placement, AddressingError> {
    let rect = resolve(meta, sprite)?;
    let scale = size / rect.w;

    let sheet_size = DVec2::new(meta.image_width, meta.image_height) * scale;
    let offset = -rect.origin() * scale;

    let frame_style = frame.color.as_ref().map(|color| FrameStyle {
        color: color.clone(),
        border_width: frame.border_width.unwrap_or(config.border_width),
        glow_radius: frame.glow_radius.unwrap_or(config.glow_radius),
    });

    let label = frame.title.clone().unwrap_or_else(|| sprite.name.clone());

    log::debug!(
        "placed `{}` at {size}px: scale {scale}, offset ({}, {})",
        sprite.name,
        offset.x,
        offset.y
    );

    Ok(Placement {
        rect,
        size,
        scale,
        sheet_size,
        offset,
        frame: frame_style,
        role: ICON_ROLE.to_string(),
        label,
    })
}

impl Placement {
    /// Source rectangle height after the width-driven scale.
    pub fn scaled_height(&self) -> f64 {
        self.rect.h * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> AtlasMeta {
        AtlasMeta::new(440.0, 440.0).with_grid(10, 10)
    }

    #[test]
    fn native_size_has_unit_scale() {
        let sprite = SpriteDescriptor::indexed("x", 23);
        let p = place(&sheet(), &sprite, 44.0, &FrameOptions::default()).unwrap();
        assert_eq!(p.scale, 1.0);
        assert_eq!(p.sheet_size, DVec2::new(440.0, 440.0));
        assert_eq!(p.offset, DVec2::new(-132.0, -88.0));
    }

    #[test]
    fn double_size_doubles_sheet_and_offset() {
        let sprite = SpriteDescriptor::indexed("x", 23);
        let unit = place(&sheet(), &sprite, 44.0, &FrameOptions::default()).unwrap();
        let p = place(&sheet(), &sprite, 88.0, &FrameOptions::default()).unwrap();

        assert_eq!(p.scale, 2.0);
        assert_eq!(p.sheet_size, DVec2::new(880.0, 880.0));
        assert_eq!(p.offset, DVec2::new(-264.0, -176.0));
        assert_eq!(p.offset, unit.offset * 2.0);
        assert_eq!(p.rect, Rect::new(132.0, 88.0, 44.0, 44.0));
    }

    #[test]
    fn explicit_rect_at_double_size() {
        let meta = AtlasMeta::new(440.0, 440.0);
        let sprite = SpriteDescriptor::rect("x", 120.0, 80.0, 44.0, 44.0);
        let p = place(&meta, &sprite, 88.0, &FrameOptions::default()).unwrap();

        assert_eq!(p.rect, Rect::new(120.0, 80.0, 44.0, 44.0));
        assert_eq!(p.scale, 2.0);
        assert_eq!(p.sheet_size, DVec2::new(880.0, 880.0));
        assert_eq!(p.offset, DVec2::new(-240.0, -160.0));
    }

    #[test]
    fn scale_uses_width_only() {
        let meta = AtlasMeta::new(200.0, 100.0);
        let sprite = SpriteDescriptor::rect("wide", 10.0, 5.0, 40.0, 20.0);
        let p = place(&meta, &sprite, 80.0, &FrameOptions::default()).unwrap();
        assert_eq!(p.scale, 2.0);
        assert_eq!(p.scaled_height(), 40.0);
        assert_eq!(p.sheet_size, DVec2::new(400.0, 200.0));
    }

    #[test]
    fn no_color_means_no_frame() {
        let opts = FrameOptions::default().with_border_width(5.0);
        let p = place(&sheet(), &SpriteDescriptor::indexed("x", 0), 44.0, &opts).unwrap();
        assert!(p.frame.is_none());
    }

    #[test]
    fn frame_defaults() {
        let opts = FrameOptions::default().with_color("#a335ee");
        let p = place(&sheet(), &SpriteDescriptor::indexed("x", 0), 44.0, &opts).unwrap();
        assert_eq!(
            p.frame,
            Some(FrameStyle {
                color: "#a335ee".into(),
                border_width: 2.0,
                glow_radius: 16.0,
            })
        );
    }

    #[test]
    fn frame_overrides_and_config_defaults() {
        let config = IconConfig { border_width: 1.0, glow_radius: 4.0 };
        let opts = FrameOptions::default().with_color("gold").with_glow_radius(24.0);
        let sprite = SpriteDescriptor::indexed("x", 0);
        let p = place_with(&config, &sheet(), &sprite, 44.0, &opts).unwrap();
        let frame = p.frame.unwrap();
        assert_eq!(frame.border_width, 1.0);
        assert_eq!(frame.glow_radius, 24.0);
    }

    #[test]
    fn label_prefers_title() {
        let sprite = SpriteDescriptor::indexed("sword_03", 3);
        let p = place(&sheet(), &sprite, 44.0, &FrameOptions::default()).unwrap();
        assert_eq!(p.label, "sword_03");
        assert_eq!(p.role, "img");

        let titled = FrameOptions::default().with_title("Sword");
        let p = place(&sheet(), &sprite, 44.0, &titled).unwrap();
        assert_eq!(p.label, "Sword");
    }

    #[test]
    fn resolution_failure_propagates() {
        let err = place(
            &AtlasMeta::new(200.0, 100.0),
            &SpriteDescriptor::named("nothing"),
            32.0,
            &FrameOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err, AddressingError::new("nothing"));
    }

    #[test]
    fn zero_width_rect_is_degenerate_not_fatal() {
        let meta = AtlasMeta::new(200.0, 100.0);
        let sprite = SpriteDescriptor::rect("flat", 10.0, 0.0, 0.0, 4.0);
        let p = place(&meta, &sprite, 32.0, &FrameOptions::default()).unwrap();
        assert!(p.scale.is_infinite());
    }

    #[test]
    fn value_types_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AtlasMeta>();
        assert_send_sync::<SpriteDescriptor>();
        assert_send_sync::<FrameOptions>();
        assert_send_sync::<Placement>();
    }

    #[test]
    fn serializes_camel_case() {
        let sprite = SpriteDescriptor::indexed("x", 23);
        let p = place(&sheet(), &sprite, 88.0, &FrameOptions::default()).unwrap();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["sheetSize"], serde_json::json!([880.0, 880.0]));
        assert_eq!(json["offset"], serde_json::json!([-264.0, -176.0]));
        assert!(json.get("frame").is_none());
    }
}
