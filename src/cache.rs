/// Where glyph resources get written
///
/// Resource files are named `<baseName><extension>`, with the extension
/// taken from the image so the name always matches the content type.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GlyphError, Result};
use crate::glyph::Image;

/// Get the glyph cache directory
/// Returns ~/.cache/flag-glyph/glyphs on Linux
pub fn glyph_cache_dir() -> Result<PathBuf> {
    let mut path = dirs_next::cache_dir()
        .or_else(dirs_next::home_dir)
        .ok_or(GlyphError::NoCacheDir)?;

    path.push("flag-glyph");
    path.push("glyphs");

    // Ensure the directory exists
    fs::create_dir_all(&path)?;

    Ok(path)
}

/// Path for `image` saved as `base_name` inside `dir`.
///
/// The base name must be a plain file name: not empty, no path
/// separators and no `..`, so the result always stays inside `dir`.
pub fn resource_path(dir: &Path, base_name: &str, image: &Image) -> Result<PathBuf> {
    let is_plain = !base_name.is_empty()
        && base_name != "."
        && !base_name.contains("..")
        && !base_name.contains(['/', '\\', '\0']);
    if !is_plain {
        return Err(GlyphError::InvalidName(base_name.to_string()));
    }

    Ok(dir.join(format!("{}{}", base_name, image.extension())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn test_resource_path_uses_content_extension() {
        let dir = Path::new("/tmp/flags");
        let mut image = Image::new();
        assert_eq!(resource_path(dir, "flag-ok", &image).unwrap(), dir.join("flag-ok"));

        image.load_pixels(RgbaImage::new(4, 4)).unwrap();
        assert_eq!(resource_path(dir, "flag-ok", &image).unwrap(), dir.join("flag-ok.png"));
    }

    #[test]
    fn test_resource_path_rejects_names_leaving_dir() {
        let dir = Path::new("/tmp/flags");
        let image = Image::new();

        for name in ["", ".", "..", "../escaped", "sub/name", "sub\\name", "a..b"] {
            assert!(
                matches!(resource_path(dir, name, &image), Err(GlyphError::InvalidName(_))),
                "accepted {:?}",
                name
            );
        }
    }
}
