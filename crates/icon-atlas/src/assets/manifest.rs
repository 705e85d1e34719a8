use std::collections::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::api::error::AtlasError;
use crate::components::atlas::AtlasMeta;
use crate::components::sprite::SpriteDescriptor;

/// Asset manifest describing a site's sprite sheets and named icons.
/// Loaded from a JSON file at build or run time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasManifest {
    /// List of sprite sheets.
    pub atlases: Vec<AtlasDescriptor>,
    /// Named icon lookup: name → atlas name + addressing data.
    #[serde(default)]
    pub icons: HashMap<String, IconDescriptor>,
}

/// Describes a single sprite sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasDescriptor {
    /// Name icons refer to (e.g., "items").
    pub name: String,
    /// Image URL or path of the sheet (e.g., "img/items.png").
    pub path: String,
    /// Sheet dimensions and optional grid.
    #[serde(flatten)]
    pub meta: AtlasMeta,
}

/// Describes a named icon within an atlas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IconDescriptor {
    /// Name of the atlas this icon lives in.
    pub atlas: String,
    /// Default accessible label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
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

impl IconDescriptor {
    /// Sprite descriptor carrying this icon's addressing data under `name`.
    pub fn to_sprite(&self, name: &str) -> SpriteDescriptor {
        SpriteDescriptor {
            name: name.to_string(),
            index: self.index,
            row: self.row,
            col: self.col,
            x: self.x,
            y: self.y,
            w: self.w,
            h: self.h,
        }
    }
}

impl AtlasManifest {
    /// Parse a manifest from a JSON string. Does not validate it.
    pub fn from_json(json: &str) -> Result<Self, AtlasError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Find an atlas by name.
    pub fn atlas(&self, name: &str) -> Option<&AtlasDescriptor> {
        self.atlases.iter().find(|a| a.name == name)
    }

    /// Check every atlas' metadata, atlas name uniqueness, and that each icon
    /// refers to a declared atlas.
    pub fn validate(&self) -> Result<(), AtlasError> {
        let mut names = HashSet::with_capacity(self.atlases.len());
        for atlas in &self.atlases {
            if !names.insert(atlas.name.as_str()) {
                return Err(AtlasError::DuplicateAtlas(atlas.name.clone()));
            }
            atlas.meta.validate(&atlas.name)?;
        }

        for (icon, desc) in &self.icons {
            if !names.contains(desc.atlas.as_str()) {
                return Err(AtlasError::UnknownAtlas {
                    icon: icon.clone(),
                    atlas: desc.atlas.clone(),
                });
            }
        }
        Ok(())
    }
}
