use thiserror::Error;

/// A sprite descriptor could not be turned into a rectangle against the
/// supplied metadata: it carries neither usable grid coordinates nor a
/// complete explicit rectangle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "sprite `{name}`: insufficient addressing data \
     (needs index, row/col on a grid atlas, or x/y/w/h)"
)]
pub struct AddressingError {
    pub name: String,
}

impl AddressingError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Errors raised while loading manifests and looking up named icons.
#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("failed to parse atlas manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("atlas `{atlas}`: {reason}")]
    InvalidMeta { atlas: String, reason: String },

    #[error("atlas `{0}` is declared more than once")]
    DuplicateAtlas(String),

    #[error("icon `{icon}` references unknown atlas `{atlas}`")]
    UnknownAtlas { icon: String, atlas: String },

    #[error("no icon named `{0}`")]
    UnknownIcon(String),

    #[error(transparent)]
    Addressing(#[from] AddressingError),

    #[error("failed to encode placement: {0}")]
    Encode(serde_json::Error),

    #[error("no manifest loaded")]
    NotLoaded,
}
