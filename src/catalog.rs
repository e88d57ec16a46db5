use log::{info, warn};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::cache;
use crate::error::{GlyphError, Result};
use crate::flag::{Flag, FlagDefinition};

/// The FlagCatalog holds every flag definition shared by a document.
/// Nodes refer to flags by name or uuid; the catalog owns the flags.
///
/// Group exclusivity is not enforced here. `group_members` lets the host
/// find the flags it has to switch off.
#[derive(Debug, Default)]
pub struct FlagCatalog {
    flags: Vec<Flag>,
}

impl FlagCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an image-less catalog from a JSON array of definitions
    pub fn load_definitions(json: &str) -> Result<Self> {
        let definitions: Vec<FlagDefinition> = serde_json::from_str(json)?;

        let mut catalog = Self::new();
        for def in &definitions {
            catalog.add(Flag::from_definition(def))?;
        }

        info!("Loaded {} flag definitions", catalog.len());
        Ok(catalog)
    }

    /// Add a flag. Names must be unique within the catalog.
    pub fn add(&mut self, flag: Flag) -> Result<()> {
        if self.get(flag.name()).is_some() {
            return Err(GlyphError::DuplicateFlag(flag.name().to_string()));
        }
        self.flags.push(flag);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Flag> {
        self.flags.iter().find(|f| f.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Flag> {
        self.flags.iter_mut().find(|f| f.name() == name)
    }

    /// Look up a flag by identity, which survives renames
    pub fn find_by_uuid(&self, uuid: Uuid) -> Option<&Flag> {
        self.flags.iter().find(|f| f.uuid() == uuid)
    }

    /// All flags in `group`, in catalog order
    pub fn group_members<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a Flag> + 'a {
        self.flags.iter().filter(move |f| f.group() == Some(group))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flag> {
        self.flags.iter()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Every definition as one JSON array
    pub fn definitions_json(&self) -> Result<String> {
        let definitions: Vec<FlagDefinition> = self.flags.iter().map(Flag::definition).collect();
        Ok(serde_json::to_string_pretty(&definitions)?)
    }

    /// Write each flag's glyph as `flag-<name><extension>` into `dir`.
    ///
    /// Flags without a glyph are skipped. Returns the written paths.
    pub fn save_data_to_dir(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for flag in self.flags.iter().filter(|f| !f.image().extension().is_empty()) {
            written.push(flag.save_data_to_dir(dir, &format!("flag-{}", flag.name()))?);
        }

        info!("Saved {} flag glyphs to {}", written.len(), dir.display());
        Ok(written)
    }

    /// Share every loaded glyph into `dir` so copies can be made from it.
    ///
    /// Stops at the first flag that cannot be shared and returns its error;
    /// flags before it stay shared.
    pub fn share_images_to(&mut self, dir: &Path) -> Result<usize> {
        let mut shared = 0;
        for flag in self.flags.iter_mut() {
            if flag.image().extension().is_empty() {
                continue;
            }
            let name = flag.name().to_string();
            flag.share_to_cache(dir)
                .inspect_err(|e| warn!("⚠️  Could not share glyph for '{}': {}", name, e))?;
            shared += 1;
        }
        Ok(shared)
    }

    /// `share_images_to` the user's glyph cache directory
    pub fn share_images(&mut self) -> Result<usize> {
        let dir = cache::glyph_cache_dir()?;
        self.share_images_to(&dir)
    }
}
