//! Glyph images
//!
//! An `Image` is a single drawable that is backed by exactly one of:
//! - nothing yet (`Unset`)
//! - an SVG document (`Vector`)
//! - decoded pixels at native resolution (`Raster`)
//! - resampled pixels plus the pristine pixels they were made from (`ScaledRaster`)
//!
//! The host scene only sees the `SceneItem` contract. Which backing is
//! active is decided once at load time; the only later change is the
//! promotion of a raster to a scaled raster on the first non-identity scale.

pub mod raster;
pub mod vector;

use image::imageops;
use image::RgbaImage;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use crate::error::{GlyphError, Result};
use crate::geometry::{Point, Rect, SceneItem};
use vector::VectorGlyph;

/// Extension used when a vector image is written to disk
pub const VECTOR_EXTENSION: &str = ".svg";

/// Extension used when a raster image is written to disk
pub const RASTER_EXTENSION: &str = ".png";

/// Largest width or height, in pixels, a scaled glyph may reach
pub const MAX_SCALED_DIMENSION: u32 = 16384;

/// Which representation backs an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Unset,
    Vector,
    Raster,
    ScaledRaster,
}

/// Owned content for each representation
enum Content {
    Unset,
    Vector(VectorGlyph),
    Raster(RgbaImage),
    ScaledRaster {
        /// What gets painted, resampled from `original`
        display: RgbaImage,
        /// Pixels as first loaded, never modified
        original: RgbaImage,
    },
}

/// A vector or raster glyph positioned in the host's scene
pub struct Image {
    content: Content,
    scale_factor: f64,
    /// Where this image was last shared to, reusable as a copy source
    cache_path: Option<PathBuf>,
    pos: Point,
    z_value: f64,
    visible: bool,
}

impl Default for Image {
    fn default() -> Self {
        Self {
            content: Content::Unset,
            scale_factor: 1.0,
            cache_path: None,
            pos: Point::default(),
            z_value: 0.0,
            // Hidden until the host decides otherwise
            visible: false,
        }
    }
}

impl Image {
    /// Create an empty image
    pub fn new() -> Self {
        Self::default()
    }

    /// The active representation
    pub fn kind(&self) -> ImageKind {
        match self.content {
            Content::Unset => ImageKind::Unset,
            Content::Vector(_) => ImageKind::Vector,
            Content::Raster(_) => ImageKind::Raster,
            Content::ScaledRaster { .. } => ImageKind::ScaledRaster,
        }
    }

    /// Refuse to load into an image that already has content
    fn ensure_unset(&self, what: &str) -> Result<()> {
        let existing = self.kind();
        if existing != ImageKind::Unset {
            warn!("⚠️  {} into existing image of kind {:?}, keeping old content", what, existing);
            return Err(GlyphError::ReentrantLoad { existing });
        }
        Ok(())
    }

    /// Load from a file.
    ///
    /// `.svg`/`.svgz` files become `Vector`; anything else is decoded as a
    /// raster. On failure the image stays `Unset`.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.ensure_unset(&format!("load ({})", path.display()))?;

        if vector::is_vector_path(path) {
            let glyph = VectorGlyph::load(path).inspect_err(|e| warn!("SVG load failed: {}", e))?;
            let (width, height) = glyph.size();
            info!("Loaded vector glyph {} ({}x{})", path.display(), width, height);
            self.content = Content::Vector(glyph);
        } else {
            let bitmap = raster::decode(path).inspect_err(|e| warn!("Raster load failed: {}", e))?;
            info!("Loaded raster glyph {} ({}x{})", path.display(), bitmap.width(), bitmap.height());
            self.content = Content::Raster(bitmap);
        }

        Ok(())
    }

    /// Load from in-memory pixels, bypassing any file decode
    pub fn load_pixels(&mut self, pixels: RgbaImage) -> Result<()> {
        self.ensure_unset("load pixels")?;
        debug!("Loaded {}x{} raster from memory", pixels.width(), pixels.height());
        self.content = Content::Raster(pixels);
        Ok(())
    }

    /// Deep-copy `other` into this (empty) image.
    ///
    /// Vector sources are re-read from their cache path, so they must have
    /// been shared with `share_to_cache` first. A scaled raster copies as a
    /// scaled raster: same factor, its own copy of the pristine pixels.
    /// The copy takes this image's visibility.
    pub fn copy_from(&mut self, other: &Image) -> Result<()> {
        self.ensure_unset("copy")?;

        self.content = match &other.content {
            Content::Unset => {
                warn!("⚠️  copy from an empty image");
                return Err(GlyphError::Empty);
            }
            Content::Vector(_) => {
                let Some(cache_path) = &other.cache_path else {
                    warn!("⚠️  copy of vector image without cache path");
                    return Err(GlyphError::MissingCacheSource);
                };
                let glyph = VectorGlyph::load(cache_path)?;
                self.cache_path = Some(cache_path.clone());
                Content::Vector(glyph)
            }
            Content::Raster(bitmap) => Content::Raster(bitmap.clone()),
            Content::ScaledRaster { display, original } => Content::ScaledRaster {
                display: display.clone(),
                original: original.clone(),
            },
        };
        self.scale_factor = other.scale_factor;

        Ok(())
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Scale the image.
    ///
    /// Vectors are drawn at the new factor. The first non-identity factor on
    /// a raster snapshots its pixels and turns it into a scaled raster;
    /// from then on every factor resamples that snapshot.
    ///
    /// Factors that would push either side past `MAX_SCALED_DIMENSION` are
    /// rejected and leave the image as it was. An empty image has nothing
    /// to scale and keeps its factor of 1.
    pub fn set_scale_factor(&mut self, factor: f64) -> Result<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(GlyphError::InvalidScale(factor));
        }

        let fits = match &self.content {
            Content::Unset => return Err(GlyphError::Empty),
            Content::Vector(glyph) => glyph.fits_scaled(factor),
            Content::Raster(bitmap) | Content::ScaledRaster { original: bitmap, .. } => {
                raster::fits_scaled(bitmap.width(), bitmap.height(), factor)
            }
        };
        if !fits {
            warn!("⚠️  scale factor {} exceeds {} pixels", factor, MAX_SCALED_DIMENSION);
            return Err(GlyphError::InvalidScale(factor));
        }

        match std::mem::replace(&mut self.content, Content::Unset) {
            Content::Raster(bitmap) if factor != 1.0 => {
                debug!("Promoting raster to scaled raster at {}", factor);
                self.content = Content::ScaledRaster {
                    display: raster::resample(&bitmap, factor),
                    original: bitmap,
                };
            }
            Content::ScaledRaster { original, .. } => {
                self.content = Content::ScaledRaster {
                    display: raster::resample(&original, factor),
                    original,
                };
            }
            other => self.content = other,
        }

        self.scale_factor = factor;
        Ok(())
    }

    /// Pixels currently painted for raster kinds
    pub fn bitmap(&self) -> Option<&RgbaImage> {
        match &self.content {
            Content::Raster(bitmap) => Some(bitmap),
            Content::ScaledRaster { display, .. } => Some(display),
            _ => None,
        }
    }

    /// The untouched pixels a scaled raster resamples from
    pub fn original_bitmap(&self) -> Result<&RgbaImage> {
        match &self.content {
            Content::ScaledRaster { original, .. } => Ok(original),
            _ => Err(GlyphError::NoOriginalData { kind: self.kind() }),
        }
    }

    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn set_pos_xy(&mut self, x: f64, y: f64) {
        self.set_pos(Point::new(x, y));
    }

    pub fn z_value(&self) -> f64 {
        self.z_value
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Last path this image was shared to
    pub fn cache_path(&self) -> Option<&Path> {
        self.cache_path.as_deref()
    }

    /// Write the image to `path`.
    ///
    /// Vectors are written as SVG, rasters as PNG. A scaled raster saves its
    /// pristine pixels, not the resampled ones.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        match &self.content {
            Content::Unset => return Err(GlyphError::Empty),
            Content::Vector(glyph) => glyph.save(path)?,
            Content::Raster(bitmap) => raster::encode_png(bitmap, path)?,
            Content::ScaledRaster { original, .. } => raster::encode_png(original, path)?,
        }

        debug!("Saved {:?} image to {}", self.kind(), path.display());
        Ok(())
    }

    /// Save to `path` and remember it as the source for later copies
    pub fn share_to_cache(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.save(path)?;
        self.cache_path = Some(path.to_path_buf());
        Ok(())
    }

    /// File extension matching the content, empty for `Unset`
    pub fn extension(&self) -> &'static str {
        match self.kind() {
            ImageKind::Vector => VECTOR_EXTENSION,
            ImageKind::Raster | ImageKind::ScaledRaster => RASTER_EXTENSION,
            ImageKind::Unset => "",
        }
    }

    /// Preview pixels for menus and toolbars.
    ///
    /// Vectors are re-read from their cache path, rasters hand out a copy of
    /// their current pixels.
    pub fn icon(&self) -> Result<RgbaImage> {
        match &self.content {
            Content::Unset => Err(GlyphError::Empty),
            Content::Vector(_) => {
                let cache_path = self.cache_path.as_ref().ok_or(GlyphError::MissingCacheSource)?;
                VectorGlyph::load(cache_path)?
                    .rasterize(1.0)
                    .ok_or(GlyphError::Empty)
            }
            Content::Raster(bitmap) | Content::ScaledRaster { display: bitmap, .. } => {
                Ok(bitmap.clone())
            }
        }
    }
}

impl SceneItem for Image {
    fn set_pos(&mut self, pos: Point) {
        self.pos = pos;
    }

    fn set_z_value(&mut self, z: f64) {
        self.z_value = z;
    }

    fn set_visibility(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Pixels a vector covers at its scale factor; raster pixels as they are
    fn bounding_rect(&self) -> Rect {
        match &self.content {
            Content::Unset => Rect::default(),
            Content::Vector(glyph) => {
                let (width, height) = glyph.pixel_size(self.scale_factor);
                Rect::from_size(width as f64, height as f64)
            }
            Content::Raster(bitmap) | Content::ScaledRaster { display: bitmap, .. } => {
                Rect::from_size(bitmap.width() as f64, bitmap.height() as f64)
            }
        }
    }

    fn paint(&self, surface: &mut RgbaImage) {
        if !self.visible {
            return;
        }

        let x = self.pos.x.round() as i64;
        let y = self.pos.y.round() as i64;

        match &self.content {
            Content::Unset => {}
            Content::Vector(glyph) => {
                if let Some(pixels) = glyph.rasterize(self.scale_factor) {
                    imageops::overlay(surface, &pixels, x, y);
                }
            }
            Content::Raster(bitmap) | Content::ScaledRaster { display: bitmap, .. } => {
                imageops::overlay(surface, bitmap, x, y);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::fs;
    use tempfile::TempDir;

    const RECT_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="8" viewBox="0 0 16 8"><rect x="0" y="0" width="16" height="8" fill="#00ff00"/></svg>"##;

    /// 64x64 gradient so resampling actually changes pixels
    fn icon_pixels() -> RgbaImage {
        RgbaImage::from_fn(64, 64, |x, y| Rgba([(x * 4) as u8, (y * 4) as u8, 128, 255]))
    }

    fn write_icon_png(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("icon.png");
        icon_pixels().save(&path).unwrap();
        path
    }

    fn write_rect_svg(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("rect.svg");
        fs::write(&path, RECT_SVG).unwrap();
        path
    }

    fn extent(image: &Image) -> (f64, f64) {
        let rect = image.bounding_rect();
        (rect.width, rect.height)
    }

    #[test]
    fn test_new_image_is_unset() {
        let image = Image::new();
        assert_eq!(image.kind(), ImageKind::Unset);
        assert_eq!(image.scale_factor(), 1.0);
        assert!(!image.is_visible());
        assert!(image.bounding_rect().is_empty());
    }

    #[test]
    fn test_raster_load_has_native_size() {
        let dir = tempfile::tempdir().unwrap();
        let mut image = Image::new();
        image.load(write_icon_png(&dir)).unwrap();

        assert_eq!(image.kind(), ImageKind::Raster);
        assert_eq!(image.scale_factor(), 1.0);
        assert_eq!(extent(&image), (64.0, 64.0));
    }

    #[test]
    fn test_scale_resamples_from_original() {
        let dir = tempfile::tempdir().unwrap();
        let mut image = Image::new();
        image.load(write_icon_png(&dir)).unwrap();

        image.set_scale_factor(2.0).unwrap();
        assert_eq!(image.kind(), ImageKind::ScaledRaster);
        assert_eq!(extent(&image), (128.0, 128.0));

        image.set_scale_factor(0.5).unwrap();
        assert_eq!(extent(&image), (32.0, 32.0));
        assert_eq!(image.original_bitmap().unwrap(), &icon_pixels());
    }

    #[test]
    fn test_chained_scaling_does_not_compound() {
        let mut chained = Image::new();
        chained.load_pixels(icon_pixels()).unwrap();
        chained.set_scale_factor(3.0).unwrap();
        chained.set_scale_factor(0.75).unwrap();

        let mut direct = Image::new();
        direct.load_pixels(icon_pixels()).unwrap();
        direct.set_scale_factor(0.75).unwrap();

        assert_eq!(chained.bitmap(), direct.bitmap());
    }

    #[test]
    fn test_identity_scale_keeps_raster() {
        let mut image = Image::new();
        image.load_pixels(icon_pixels()).unwrap();
        image.set_scale_factor(1.0).unwrap();

        assert_eq!(image.kind(), ImageKind::Raster);
        assert!(matches!(
            image.original_bitmap(),
            Err(GlyphError::NoOriginalData { kind: ImageKind::Raster })
        ));
    }

    #[test]
    fn test_scaled_raster_back_to_one_stays_scaled() {
        let mut image = Image::new();
        image.load_pixels(icon_pixels()).unwrap();
        image.set_scale_factor(2.0).unwrap();
        image.set_scale_factor(1.0).unwrap();

        assert_eq!(image.kind(), ImageKind::ScaledRaster);
        assert_eq!(image.bitmap(), Some(&icon_pixels()));
    }

    #[test]
    fn test_invalid_scale_rejected() {
        let mut image = Image::new();
        image.load_pixels(icon_pixels()).unwrap();

        assert!(matches!(image.set_scale_factor(0.0), Err(GlyphError::InvalidScale(_))));
        assert!(matches!(image.set_scale_factor(f64::NAN), Err(GlyphError::InvalidScale(_))));
        assert_eq!(image.kind(), ImageKind::Raster);
    }

    #[test]
    fn test_huge_scale_rejected_without_change() {
        let mut image = Image::new();
        image.load_pixels(icon_pixels()).unwrap();

        assert!(matches!(image.set_scale_factor(1e12), Err(GlyphError::InvalidScale(_))));
        assert_eq!(image.kind(), ImageKind::Raster);
        assert_eq!(image.scale_factor(), 1.0);
        assert_eq!(extent(&image), (64.0, 64.0));

        image.set_scale_factor(2.0).unwrap();
        assert!(matches!(image.set_scale_factor(1e12), Err(GlyphError::InvalidScale(_))));
        assert_eq!(image.scale_factor(), 2.0);
        assert_eq!(extent(&image), (128.0, 128.0));
    }

    #[test]
    fn test_huge_vector_scale_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut image = Image::new();
        image.load(write_rect_svg(&dir)).unwrap();

        assert!(matches!(image.set_scale_factor(1e9), Err(GlyphError::InvalidScale(_))));
        assert_eq!(image.scale_factor(), 1.0);
    }

    #[test]
    fn test_scaling_unset_is_refused() {
        let mut image = Image::new();
        assert!(matches!(image.set_scale_factor(2.0), Err(GlyphError::Empty)));
        assert_eq!(image.scale_factor(), 1.0);

        image.load_pixels(icon_pixels()).unwrap();
        assert_eq!(image.kind(), ImageKind::Raster);
        assert_eq!(image.scale_factor(), 1.0);
    }

    #[test]
    fn test_vector_bounds_cover_painted_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let mut image = Image::new();
        image.load(write_rect_svg(&dir)).unwrap();
        image.set_scale_factor(1.3).unwrap();
        image.set_visibility(true);

        assert_eq!(extent(&image), (21.0, 11.0));

        let mut surface = RgbaImage::new(32, 32);
        image.paint(&mut surface);
        assert!(surface.get_pixel(20, 10)[3] > 0);
        assert_eq!(surface.get_pixel(21, 5)[3], 0);
        assert_eq!(surface.get_pixel(5, 11)[3], 0);
    }

    #[test]
    fn test_vector_bounds_follow_scale() {
        let dir = tempfile::tempdir().unwrap();
        let mut image = Image::new();
        image.load(write_rect_svg(&dir)).unwrap();

        assert_eq!(image.kind(), ImageKind::Vector);
        assert_eq!(extent(&image), (16.0, 8.0));

        image.set_scale_factor(2.0).unwrap();
        assert_eq!(image.kind(), ImageKind::Vector);
        assert_eq!(extent(&image), (32.0, 16.0));
    }

    #[test]
    fn test_second_load_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let mut image = Image::new();
        image.load_pixels(icon_pixels()).unwrap();

        let err = image.load(write_rect_svg(&dir)).unwrap_err();
        assert!(matches!(err, GlyphError::ReentrantLoad { existing: ImageKind::Raster }));
        assert_eq!(image.kind(), ImageKind::Raster);
        assert_eq!(image.bitmap(), Some(&icon_pixels()));
    }

    #[test]
    fn test_failed_load_stays_unset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        fs::write(&path, b"nope").unwrap();

        let mut image = Image::new();
        assert!(matches!(image.load(&path), Err(GlyphError::Decode { .. })));
        assert_eq!(image.kind(), ImageKind::Unset);
        assert!(image.load(dir.path().join("missing.png")).is_err());
        assert_eq!(image.kind(), ImageKind::Unset);
    }

    #[test]
    fn test_extension_per_kind() {
        let dir = tempfile::tempdir().unwrap();
        let mut image = Image::new();
        assert_eq!(image.extension(), "");

        image.load_pixels(icon_pixels()).unwrap();
        assert_eq!(image.extension(), RASTER_EXTENSION);
        image.set_scale_factor(2.0).unwrap();
        assert_eq!(image.extension(), RASTER_EXTENSION);

        let mut vector = Image::new();
        vector.load(write_rect_svg(&dir)).unwrap();
        assert_eq!(vector.extension(), VECTOR_EXTENSION);
    }

    #[test]
    fn test_save_raster_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut image = Image::new();
        image.load(write_icon_png(&dir)).unwrap();

        let out = dir.path().join("saved.png");
        image.save(&out).unwrap();

        let mut reloaded = Image::new();
        reloaded.load(&out).unwrap();
        assert_eq!(reloaded.bitmap(), Some(&icon_pixels()));
    }

    #[test]
    fn test_save_scaled_raster_writes_original() {
        let dir = tempfile::tempdir().unwrap();
        let mut image = Image::new();
        image.load_pixels(icon_pixels()).unwrap();
        image.set_scale_factor(2.0).unwrap();

        let out = dir.path().join("scaled.png");
        image.save(&out).unwrap();

        assert_eq!(raster::decode(&out).unwrap(), icon_pixels());
    }

    #[test]
    fn test_save_unset_fails_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nothing.png");

        assert!(matches!(Image::new().save(&out), Err(GlyphError::Empty)));
        assert!(!out.exists());
    }

    #[test]
    fn test_vector_copy_needs_cache() {
        let dir = tempfile::tempdir().unwrap();
        let mut source = Image::new();
        source.load(write_rect_svg(&dir)).unwrap();

        let mut copy = Image::new();
        assert!(matches!(copy.copy_from(&source), Err(GlyphError::MissingCacheSource)));
        assert_eq!(copy.kind(), ImageKind::Unset);
    }

    #[test]
    fn test_vector_copy_from_cache_paints_the_same() {
        let dir = tempfile::tempdir().unwrap();
        let mut source = Image::new();
        source.load(write_rect_svg(&dir)).unwrap();
        source.set_visibility(true);

        let cached = dir.path().join("cached.svg");
        source.share_to_cache(&cached).unwrap();
        assert_eq!(source.cache_path(), Some(cached.as_path()));

        let mut copy = Image::new();
        copy.set_visibility(true);
        copy.copy_from(&source).unwrap();
        assert_eq!(copy.kind(), ImageKind::Vector);
        assert_eq!(copy.bounding_rect(), source.bounding_rect());

        let mut expected = RgbaImage::new(32, 32);
        let mut actual = RgbaImage::new(32, 32);
        source.paint(&mut expected);
        copy.paint(&mut actual);
        assert_eq!(actual, expected);
        assert_eq!(actual.get_pixel(4, 4), &Rgba([0, 255, 0, 255]));
    }

    #[test]
    fn test_raster_copy_is_deep() {
        let mut source = Image::new();
        source.load_pixels(icon_pixels()).unwrap();

        let mut copy = Image::new();
        copy.copy_from(&source).unwrap();
        copy.set_scale_factor(2.0).unwrap();

        assert_eq!(source.kind(), ImageKind::Raster);
        assert_eq!(extent(&source), (64.0, 64.0));
        assert_eq!(extent(&copy), (128.0, 128.0));
    }

    #[test]
    fn test_scaled_raster_copy_keeps_scale_and_original() {
        let mut source = Image::new();
        source.load_pixels(icon_pixels()).unwrap();
        source.set_scale_factor(2.0).unwrap();

        let mut copy = Image::new();
        copy.copy_from(&source).unwrap();

        assert_eq!(copy.kind(), ImageKind::ScaledRaster);
        assert_eq!(copy.scale_factor(), 2.0);
        assert_eq!(extent(&copy), (128.0, 128.0));
        assert_eq!(copy.original_bitmap().unwrap(), &icon_pixels());

        copy.set_scale_factor(0.5).unwrap();
        assert_eq!(extent(&copy), (32.0, 32.0));
    }

    #[test]
    fn test_copy_into_populated_or_from_empty_fails() {
        let mut source = Image::new();
        source.load_pixels(icon_pixels()).unwrap();

        let mut target = Image::new();
        assert!(matches!(target.copy_from(&Image::new()), Err(GlyphError::Empty)));

        target.load_pixels(RgbaImage::new(2, 2)).unwrap();
        assert!(matches!(target.copy_from(&source), Err(GlyphError::ReentrantLoad { .. })));
        assert_eq!(extent(&target), (2.0, 2.0));
    }

    #[test]
    fn test_paint_respects_visibility_and_position() {
        let mut image = Image::new();
        image.load_pixels(RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255]))).unwrap();
        image.set_pos_xy(3.0, 1.0);
        image.set_z_value(5.0);

        let mut surface = RgbaImage::new(8, 8);
        image.paint(&mut surface);
        assert!(surface.pixels().all(|p| p.0 == [0, 0, 0, 0]));

        image.set_visibility(true);
        image.paint(&mut surface);
        assert_eq!(surface.get_pixel(3, 1), &Rgba([255, 255, 255, 255]));
        assert_eq!(surface.get_pixel(4, 2), &Rgba([255, 255, 255, 255]));
        assert_eq!(surface.get_pixel(2, 1), &Rgba([0, 0, 0, 0]));
        assert_eq!(image.pos(), Point::new(3.0, 1.0));
        assert_eq!(image.z_value(), 5.0);
    }

    #[test]
    fn test_icon() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(Image::new().icon(), Err(GlyphError::Empty)));

        let mut raster = Image::new();
        raster.load_pixels(icon_pixels()).unwrap();
        assert_eq!(raster.icon().unwrap(), icon_pixels());

        let mut vector = Image::new();
        vector.load(write_rect_svg(&dir)).unwrap();
        assert!(matches!(vector.icon(), Err(GlyphError::MissingCacheSource)));

        vector.share_to_cache(dir.path().join("shared.svg")).unwrap();
        assert_eq!(vector.icon().unwrap().dimensions(), (16, 8));
    }
}
