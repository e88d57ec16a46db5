/// Flags: named markers that document nodes can carry
///
/// A flag owns exactly one glyph image and records its own attributes.
/// Group exclusivity and the toggle command live with the host; the flag
/// only stores its group name and an opaque handle to the command.

use image::RgbaImage;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::cache;
use crate::error::Result;
use crate::glyph::Image;

/// Where a flag came from
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FlagKind {
    System,
    Standard,
    User,
    Imported,
    #[default]
    Undefined,
}

/// Handle to a host-owned toggle command. The host resolves it; the flag
/// never looks inside.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(pub u64);

/// Static attributes of a flag, as stored in the flag catalog
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FlagDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    pub kind: FlagKind,
    pub uuid: Uuid,
}

impl FlagDefinition {
    /// Convert to JSON string for catalog storage
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Toggle state of a flag on one node
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FlagState {
    pub name: String,
    pub uuid: Uuid,
    pub state: bool,
}

impl FlagState {
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// One flag and its glyph
pub struct Flag {
    name: String,
    /// File the glyph was loaded from
    path: Option<PathBuf>,
    group: Option<String>,
    tooltip: String,
    visible: bool,
    used: bool,
    state: bool,
    kind: FlagKind,
    uuid: Uuid,
    action: Option<ActionId>,
    image: Image,
}

impl Default for Flag {
    fn default() -> Self {
        Self {
            name: String::new(),
            path: None,
            group: None,
            tooltip: String::new(),
            visible: true,
            used: false,
            state: false,
            kind: FlagKind::Undefined,
            uuid: Uuid::new_v4(),
            action: None,
            image: Image::new(),
        }
    }
}

impl Flag {
    /// Create an unnamed flag with a fresh identity and no image
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a flag and load its glyph from `path`
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut flag = Self::new();
        flag.load(path)?;
        Ok(flag)
    }

    /// Create an image-less flag from its catalog definition
    pub fn from_definition(def: &FlagDefinition) -> Self {
        Self {
            name: def.name.clone(),
            group: def.group.clone(),
            tooltip: def.tooltip.clone().unwrap_or_default(),
            kind: def.kind,
            uuid: def.uuid,
            ..Self::default()
        }
    }

    /// Copy attributes, identity and a deep copy of the glyph from `other`.
    ///
    /// The glyph copy follows `Image::copy_from`, so this fails if the glyph
    /// was already loaded or the source is an unshared vector.
    pub fn copy_from(&mut self, other: &Flag) -> Result<()> {
        self.image.copy_from(&other.image)?;

        self.name = other.name.clone();
        self.path = other.path.clone();
        self.group = other.group.clone();
        self.tooltip = other.tooltip.clone();
        self.visible = other.visible;
        self.used = other.used;
        self.state = other.state;
        self.kind = other.kind;
        self.uuid = other.uuid;
        self.action = other.action;

        Ok(())
    }

    /// Load the glyph from a file
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.image.load(path)?;
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Use in-memory pixels as the glyph
    pub fn load_pixels(&mut self, pixels: RgbaImage) -> Result<()> {
        self.image.load_pixels(pixels)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Join `group`. An empty name means no group.
    pub fn set_group(&mut self, group: impl Into<String>) {
        let group = group.into();
        self.group = (!group.is_empty()).then_some(group);
    }

    pub fn unset_group(&mut self) {
        self.group = None;
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    pub fn set_tooltip(&mut self, tooltip: impl Into<String>) {
        self.tooltip = tooltip.into();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_used(&self) -> bool {
        self.used
    }

    pub fn set_used(&mut self, used: bool) {
        self.used = used;
    }

    pub fn state(&self) -> bool {
        self.state
    }

    pub fn set_state(&mut self, state: bool) {
        self.state = state;
    }

    /// Flip the toggle state and return the new value
    pub fn toggle(&mut self) -> bool {
        self.state = !self.state;
        self.state
    }

    pub fn kind(&self) -> FlagKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: FlagKind) {
        self.kind = kind;
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn set_uuid(&mut self, uuid: Uuid) {
        self.uuid = uuid;
    }

    pub fn action(&self) -> Option<ActionId> {
        self.action
    }

    pub fn set_action(&mut self, action: ActionId) {
        self.action = Some(action);
    }

    pub fn clear_action(&mut self) {
        self.action = None;
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn image_mut(&mut self) -> &mut Image {
        &mut self.image
    }

    /// Static attributes for the flag catalog
    pub fn definition(&self) -> FlagDefinition {
        FlagDefinition {
            name: self.name.clone(),
            group: self.group.clone(),
            tooltip: (!self.tooltip.is_empty()).then(|| self.tooltip.clone()),
            kind: self.kind,
            uuid: self.uuid,
        }
    }

    /// Serialized catalog definition
    pub fn save_definition(&self) -> Result<String> {
        Ok(self.definition().to_json()?)
    }

    /// Serialized toggle state for one node reference
    pub fn save_state(&self) -> Result<String> {
        let state = FlagState {
            name: self.name.clone(),
            uuid: self.uuid,
            state: self.state,
        };
        Ok(state.to_json()?)
    }

    /// Write the glyph to `<dir>/<base_name><extension>`
    pub fn save_data_to_dir(&self, dir: impl AsRef<Path>, base_name: &str) -> Result<PathBuf> {
        let path = cache::resource_path(dir.as_ref(), base_name, &self.image)?;
        self.image.save(&path)?;
        debug!("Saved flag '{}' glyph to {}", self.name, path.display());
        Ok(path)
    }

    /// Share the glyph as `<dir>/<name><extension>` so copies can reuse it
    pub fn share_to_cache(&mut self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = cache::resource_path(dir.as_ref(), &self.name, &self.image)?;
        self.image.share_to_cache(&path)?;
        Ok(path)
    }
}

impl std::fmt::Debug for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Flag")
            .field("name", &self.name)
            .field("group", &self.group)
            .field("kind", &self.kind)
            .field("uuid", &self.uuid)
            .field("image", &self.image.kind())
            .finish()
    }
}
