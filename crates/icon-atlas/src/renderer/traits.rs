//! Host surface contract.
//!
//! Placement math is surface-agnostic. A surface turns a [`Placement`] plus
//! the sheet's image source into whatever it draws with: CSS declarations for
//! a styled element ([`CssSurface`](super::css::CssSurface)) or a clipped
//! image blit for canvas-like targets ([`DrawSurface`](super::draw::DrawSurface)).

use crate::systems::placement::Placement;

/// Something that can show a placed icon.
pub trait IconSurface {
    type Output;

    /// Produce the surface output for one icon. `source` is the image URL or
    /// path of the atlas sheet; it is passed through, never loaded.
    fn compose(&self, source: &str, placement: &Placement) -> Self::Output;
}
