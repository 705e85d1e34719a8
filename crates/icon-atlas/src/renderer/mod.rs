pub mod css;
pub mod draw;
pub mod traits;

// Re-export key types for convenient access
pub use css::{CssSurface, IconStyle};
pub use draw::{DrawCall, DrawSurface};
pub use traits::IconSurface;
