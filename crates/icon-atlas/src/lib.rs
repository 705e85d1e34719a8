//! Texture-atlas icon addressing and scaled placement.
//!
//! Given a sprite sheet's metadata and an icon descriptor, [`resolve`] finds
//! the icon's source rectangle and [`place`] computes how to crop and scale
//! the sheet so only that icon fills a square viewport. Surfaces in
//! [`renderer`] turn a placement into CSS or a draw call.

pub mod api;
pub mod assets;
pub mod components;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::{IconConfig, DEFAULT_BORDER_WIDTH, DEFAULT_GLOW_RADIUS, ICON_ROLE};
pub use api::error::{AddressingError, AtlasError};
pub use assets::manifest::{AtlasManifest, AtlasDescriptor, IconDescriptor};
pub use assets::registry::{IconRegistry, IconEntry};
pub use components::atlas::{AtlasMeta, TileGrid};
pub use components::rect::Rect;
pub use components::sprite::SpriteDescriptor;
pub use renderer::{CssSurface, DrawCall, DrawSurface, IconStyle, IconSurface};
pub use systems::placement::{place, place_with, FrameOptions, FrameStyle, Placement};
pub use systems::resolve::resolve;
