//! Error types for glyph images and flags

use std::path::PathBuf;
use thiserror::Error;

use crate::glyph::ImageKind;

/// Everything that can go wrong while loading, scaling, copying or saving
/// a glyph. None of these are retried; each one ends the call that raised it.
#[derive(Debug, Error)]
pub enum GlyphError {
    /// The file is neither a readable SVG nor a decodable raster image
    #[error("could not decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    /// Load or copy into an image that already holds content.
    /// The existing content is left as it was.
    #[error("image already holds {existing:?} content")]
    ReentrantLoad { existing: ImageKind },

    /// A vector image can only be copied once it was written to a cache path
    #[error("vector image has no cached source to copy from")]
    MissingCacheSource,

    /// Pristine pixels were requested from an image that has none
    #[error("no original pixel data available (image is {kind:?})")]
    NoOriginalData { kind: ImageKind },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The operation needs content but the image was never loaded
    #[error("image is empty")]
    Empty,

    #[error("invalid scale factor {0}")]
    InvalidScale(f64),

    #[error("could not determine a cache directory")]
    NoCacheDir,

    /// Name cannot be used as a resource file name
    #[error("invalid resource name: {0:?}")]
    InvalidName(String),

    /// Catalog already has a flag with this name
    #[error("duplicate flag name: {0}")]
    DuplicateFlag(String),
}

pub type Result<T> = std::result::Result<T, GlyphError>;
