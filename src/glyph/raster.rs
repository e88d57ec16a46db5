/// Raster helpers: decode, resample and the fixed-quality PNG encoder
///
/// Resampling always reads from the pixels it is handed and returns a new
/// buffer. Callers pass the pristine snapshot so repeated scaling never
/// compounds.

use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, ImageReader, RgbaImage};
use std::fs;
use std::path::Path;

use super::MAX_SCALED_DIMENSION;
use crate::error::{GlyphError, Result};

/// Filter used for every scale operation
const SCALE_FILTER: FilterType = FilterType::Lanczos3;

/// PNG settings for saved rasters (lossless, smallest output)
const PNG_COMPRESSION: CompressionType = CompressionType::Best;
const PNG_FILTER: PngFilter = PngFilter::Adaptive;

/// Decode a raster file into RGBA pixels.
///
/// The format is sniffed from the file content first and the extension
/// second, so a PNG saved as `.img` still loads.
pub fn decode(path: &Path) -> Result<RgbaImage> {
    let decode_error = |reason: String| GlyphError::Decode {
        path: path.to_path_buf(),
        reason,
    };

    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| decode_error(e.to_string()))?;

    let img = reader.decode().map_err(|e| decode_error(e.to_string()))?;

    Ok(img.to_rgba8())
}

/// Pixel size of `width` x `height` scaled by `factor`, never below 1x1
pub fn scaled_size(width: u32, height: u32, factor: f64) -> (u32, u32) {
    let scale = |v: u32| ((v as f64 * factor).round() as u32).max(1);
    (scale(width), scale(height))
}

/// Whether scaling by `factor` stays within `MAX_SCALED_DIMENSION` on both axes
pub fn fits_scaled(width: u32, height: u32, factor: f64) -> bool {
    let limit = MAX_SCALED_DIMENSION as f64;
    (width as f64 * factor).round() <= limit && (height as f64 * factor).round() <= limit
}

/// Resample `original` by `factor` into a fresh buffer
pub fn resample(original: &RgbaImage, factor: f64) -> RgbaImage {
    let (width, height) = scaled_size(original.width(), original.height(), factor);

    if (width, height) == original.dimensions() {
        return original.clone();
    }

    imageops::resize(original, width, height, SCALE_FILTER)
}

/// Encode `bitmap` as PNG and write it to `path`.
///
/// The file is only touched once encoding succeeded.
pub fn encode_png(bitmap: &RgbaImage, path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut buffer, PNG_COMPRESSION, PNG_FILTER);
    encoder.write_image(
        bitmap.as_raw(),
        bitmap.width(),
        bitmap.height(),
        ExtendedColorType::Rgba8,
    )?;

    fs::write(path, &buffer)?;
    Ok(())
}
