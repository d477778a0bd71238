//! Named viewport presets with JSON file persistence
//!
//! Editors and debug tooling keep a handful of region setups around (full
//! view, split halves, a picture-in-picture corner). A [`PresetLibrary`]
//! maps preset names to wire records and reads or writes the whole set as a
//! single JSON file.

use std::path::Path;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::data::ViewportData;
use crate::viewport::{Anchor, SizeMode, Viewport};

/// Error type for preset storage and lookup.
#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    #[error("Failed to read or write preset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse preset file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}

/// Named collection of viewport records.
///
/// Lookup order is arbitrary; names are case-sensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PresetLibrary {
    /// Preset name to wire record
    #[serde(default)]
    presets: HashMap<String, ViewportData>,
}

impl PresetLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored presets
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Store a record under `name`, replacing any existing entry
    pub fn insert(&mut self, name: impl Into<String>, data: ViewportData) {
        self.presets.insert(name.into(), data);
    }

    /// Look up a record by name
    pub fn get(&self, name: &str) -> Option<&ViewportData> {
        self.presets.get(name)
    }

    /// Remove a record by name, returning it if present
    pub fn remove(&mut self, name: &str) -> Option<ViewportData> {
        self.presets.remove(name)
    }

    /// Iterate over (name, record) pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ViewportData)> {
        self.presets.iter().map(|(name, data)| (name.as_str(), data))
    }

    /// Build a typed viewport from the named preset
    pub fn resolve(&self, name: &str) -> Result<Viewport, PresetError> {
        self.get(name)
            .map(Viewport::from_data)
            .ok_or_else(|| PresetError::UnknownPreset(name.to_string()))
    }

    /// Load a preset file.
    ///
    /// Suspect entries are logged but kept as stored: non-positive sizes and
    /// unknown mode or anchor codes degrade at use time, not at load time.
    pub fn load(path: &Path) -> Result<Self, PresetError> {
        let content = std::fs::read_to_string(path)?;
        let library: Self = serde_json::from_str(&content)?;

        for (name, data) in library.iter() {
            if data.size[0] <= 0.0 || data.size[1] <= 0.0 {
                warn!("Preset '{}' has non-positive size {:?}", name, data.size);
            }
            if SizeMode::from_u32(data.mode) as u32 != data.mode {
                warn!("Preset '{}' has unknown size mode code {}", name, data.mode);
            }
            if Anchor::from_u32(data.anchor) as u32 != data.anchor {
                warn!("Preset '{}' has unknown anchor code {}", name, data.anchor);
            }
        }

        debug!("Loaded {} viewport presets from {}", library.len(), path.display());
        Ok(library)
    }

    /// Write the preset file as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<(), PresetError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
