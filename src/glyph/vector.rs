/// SVG-backed glyphs
///
/// A vector glyph keeps the parsed tree plus the file it came from. It is
/// drawn by rasterizing the tree offscreen at the requested scale and saved
/// by writing the tree back out as an SVG document.

use image::{Rgba, RgbaImage};
use resvg::{tiny_skia, usvg};
use std::fs;
use std::path::{Path, PathBuf};

use super::MAX_SCALED_DIMENSION;
use crate::error::{GlyphError, Result};

/// Extensions (lowercase, without the dot) loaded as vector documents
const VECTOR_EXTENSIONS: [&str; 2] = ["svg", "svgz"];

/// Attached to every exported SVG
const SVG_DESCRIPTION: &str = "A glyph drawing exported by flag-glyph";

/// Whether `path` names a vector document
pub fn is_vector_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| VECTOR_EXTENSIONS.contains(&ext.as_str()))
}

/// A parsed SVG and the path it was read from
pub struct VectorGlyph {
    tree: usvg::Tree,
    source: PathBuf,
}

impl VectorGlyph {
    /// Read and parse an SVG file (plain or gzipped)
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read(path).map_err(|e| GlyphError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let tree = usvg::Tree::from_data(&data, &usvg::Options::default()).map_err(|e| {
            GlyphError::Decode {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            tree,
            source: path.to_path_buf(),
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Unscaled document size
    pub fn size(&self) -> (f64, f64) {
        let size = self.tree.size();
        (size.width() as f64, size.height() as f64)
    }

    /// Whole pixels covered when drawn at `scale`
    pub fn pixel_size(&self, scale: f64) -> (u32, u32) {
        let (width, height) = self.size();
        ((width * scale).ceil() as u32, (height * scale).ceil() as u32)
    }

    /// Whether drawing at `scale` stays within `MAX_SCALED_DIMENSION`
    pub fn fits_scaled(&self, scale: f64) -> bool {
        let (width, height) = self.size();
        let limit = MAX_SCALED_DIMENSION as f64;
        (width * scale).ceil() <= limit && (height * scale).ceil() <= limit
    }

    /// Draw the tree offscreen at `scale` and return straight-alpha pixels.
    ///
    /// Returns `None` when the scaled size rounds to an empty pixmap or
    /// exceeds `MAX_SCALED_DIMENSION`.
    pub fn rasterize(&self, scale: f64) -> Option<RgbaImage> {
        if !self.fits_scaled(scale) {
            return None;
        }
        let (width, height) = self.pixel_size(scale);

        let mut pixmap = tiny_skia::Pixmap::new(width, height)?;
        let transform = tiny_skia::Transform::from_scale(scale as f32, scale as f32);
        resvg::render(&self.tree, transform, &mut pixmap.as_mut());

        // tiny-skia stores premultiplied alpha, image expects straight alpha
        let mut out = RgbaImage::new(width, height);
        for (dst, src) in out.pixels_mut().zip(pixmap.pixels()) {
            let c = src.demultiply();
            *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }

        Some(out)
    }

    /// Write the current drawing back out as an SVG document
    pub fn save(&self, path: &Path) -> Result<()> {
        let svg = self.tree.to_string(&usvg::WriteOptions::default());
        fs::write(path, with_description(&svg, SVG_DESCRIPTION))?;
        Ok(())
    }
}

/// Insert a `<desc>` element right after the root `<svg ...>` tag.
///
/// Self-closing or unrecognised documents are returned unchanged.
fn with_description(svg: &str, description: &str) -> String {
    let Some(start) = svg.find("<svg") else {
        return svg.to_string();
    };
    let Some(end) = svg[start..].find('>').map(|i| start + i) else {
        return svg.to_string();
    };
    if svg[..end].ends_with('/') {
        return svg.to_string();
    }

    format!("{}<desc>{}</desc>{}", &svg[..=end], description, &svg[end + 1..])
}
