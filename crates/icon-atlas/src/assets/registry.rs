use std::collections::HashMap;
use crate::api::config::IconConfig;
use crate::api::error::AtlasError;
use crate::assets::manifest::AtlasManifest;
use crate::components::atlas::AtlasMeta;
use crate::components::rect::Rect;
use crate::components::sprite::SpriteDescriptor;
use crate::renderer::traits::IconSurface;
use crate::systems::placement::{place_with, FrameOptions, Placement};
use crate::systems::resolve::resolve;

/// A named icon together with the sheet it lives on.
#[derive(Debug, Clone, PartialEq)]
pub struct IconEntry {
    /// Image URL or path of the sheet.
    pub path: String,
    pub meta: AtlasMeta,
    pub sprite: SpriteDescriptor,
    /// Default accessible label from the manifest.
    pub title: Option<String>,
}

/// Registry of named icons, built from an AtlasManifest.
/// Provides name-based resolution and placement for page code.
#[derive(Debug, Default)]
pub struct IconRegistry {
    icons: HashMap<String, IconEntry>,
    config: IconConfig,
}

impl IconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a manifest, validating it first.
    ///
    /// Icons that do not resolve against their atlas are kept and logged; the
    /// addressing error is returned when they are used.
    pub fn from_manifest(manifest: &AtlasManifest) -> Result<Self, AtlasError> {
        manifest.validate()?;

        let mut icons = HashMap::with_capacity(manifest.icons.len());
        for (name, desc) in &manifest.icons {
            let atlas = manifest.atlas(&desc.atlas).ok_or_else(|| AtlasError::UnknownAtlas {
                icon: name.clone(),
                atlas: desc.atlas.clone(),
            })?;
            let sprite = desc.to_sprite(name);

            match resolve(&atlas.meta, &sprite) {
                Ok(rect) if !rect.fits_within(atlas.meta.image_width, atlas.meta.image_height) => {
                    log::warn!("icon `{name}` resolves outside atlas `{}`: {rect:?}", atlas.name);
                }
                Ok(_) => {}
                Err(e) => log::warn!("{e}"),
            }

            icons.insert(name.clone(), IconEntry {
                path: atlas.path.clone(),
                meta: atlas.meta.clone(),
                sprite,
                title: desc.title.clone(),
            });
        }

        log::info!(
            "icon registry: {} atlases, {} icons",
            manifest.atlases.len(),
            icons.len()
        );
        Ok(Self { icons, config: IconConfig::default() })
    }

    /// Replace the frame defaults used by [`place`](Self::place).
    pub fn with_config(mut self, config: IconConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &IconConfig {
        &self.config
    }

    /// Look up an icon by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<&IconEntry> {
        self.icons.get(name)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    fn entry(&self, name: &str) -> Result<&IconEntry, AtlasError> {
        self.get(name).ok_or_else(|| AtlasError::UnknownIcon(name.to_string()))
    }

    /// Source rectangle of a named icon.
    pub fn resolve(&self, name: &str) -> Result<Rect, AtlasError> {
        let entry = self.entry(name)?;
        Ok(resolve(&entry.meta, &entry.sprite)?)
    }

    /// Place a named icon at `size` x `size`. The manifest title is the
    /// default label; `frame.title` overrides it.
    pub fn place(
        &self,
        name: &str,
        size: f64,
        frame: &FrameOptions,
    ) -> Result<Placement, AtlasError> {
        let entry = self.entry(name)?;
        let mut frame = frame.clone();
        if frame.title.is_none() {
            frame.title = entry.title.clone();
        }
        Ok(place_with(&self.config, &entry.meta, &entry.sprite, size, &frame)?)
    }

    /// Place a named icon and hand it to a surface.
    pub fn compose<S: IconSurface>(
        &self,
        surface: &S,
        name: &str,
        size: f64,
        frame: &FrameOptions,
    ) -> Result<S::Output, AtlasError> {
        let placement = self.place(name, size, frame)?;
        let path = &self.entry(name)?.path;
        Ok(surface.compose(path, &placement))
    }
}
