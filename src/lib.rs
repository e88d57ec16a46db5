//! Flag glyphs for mind-map style documents
//!
//! - `glyph`: the vector/raster `Image` a flag draws
//! - `flag`: the `Flag` marker, its catalog definition and per-node state
//! - `catalog`: the collection of flags shared by a document
//! - `cache`: cache directory and resource file naming

pub mod cache;
pub mod catalog;
pub mod error;
pub mod flag;
pub mod geometry;
pub mod glyph;

pub use catalog::FlagCatalog;
pub use error::{GlyphError, Result};
pub use flag::{ActionId, Flag, FlagDefinition, FlagKind, FlagState};
pub use geometry::{Point, Rect, SceneItem};
pub use glyph::{Image, ImageKind};
