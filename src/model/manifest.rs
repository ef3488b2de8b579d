//! Asset manifest: embedded-object id to downloaded file metadata.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Downloaded asset metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ManifestFile {
    /// File name relative to the asset directory
    pub filename: String,

    /// Width in pixels (0 when unknown)
    pub width: u32,

    /// Height in pixels (0 when unknown)
    pub height: u32,
}

impl ManifestFile {
    /// Create a manifest entry.
    pub fn new(filename: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            filename: filename.into(),
            width,
            height,
        }
    }
}

// Older manifests stored a bare filename per object.
#[derive(Deserialize)]
#[serde(untagged)]
enum ManifestEntry {
    Full {
        filename: String,
        #[serde(default)]
        width: u32,
        #[serde(default)]
        height: u32,
    },
    Filename(String),
}

impl<'de> Deserialize<'de> for ManifestFile {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match ManifestEntry::deserialize(deserializer)? {
            ManifestEntry::Full {
                filename,
                width,
                height,
            } => ManifestFile::new(filename, width, height),
            ManifestEntry::Filename(filename) => ManifestFile::new(filename, 0, 0),
        })
    }
}

/// Mapping from embedded-object identifier to file metadata.
///
/// Read-only to the converter. Missing entries are not an error: images
/// without an entry are dropped from the output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    files: HashMap<String, ManifestFile>,
}

impl Manifest {
    /// Create an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a manifest from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and decode a manifest file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Add an entry.
    pub fn insert(&mut self, object_id: impl Into<String>, file: ManifestFile) {
        self.files.insert(object_id.into(), file);
    }

    /// Builder variant of [`Manifest::insert`].
    pub fn with_file(mut self, object_id: impl Into<String>, file: ManifestFile) -> Self {
        self.insert(object_id, file);
        self
    }

    /// Resolve an object id.
    pub fn get(&self, object_id: &str) -> Option<&ManifestFile> {
        self.files.get(object_id)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if the manifest has no entries.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_from_json() {
        let json = r#"{
            "kix.abc": { "filename": "kix.abc.png", "width": 640, "height": 480 },
            "kix.def": "kix.def.jpg"
        }"#;
        let manifest = Manifest::from_json(json).unwrap();

        assert_eq!(manifest.len(), 2);
        assert_eq!(
            manifest.get("kix.abc"),
            Some(&ManifestFile::new("kix.abc.png", 640, 480))
        );
        assert_eq!(
            manifest.get("kix.def"),
            Some(&ManifestFile::new("kix.def.jpg", 0, 0))
        );
        assert!(manifest.get("kix.missing").is_none());
    }

    #[test]
    fn test_manifest_rejects_bad_entry() {
        assert!(Manifest::from_json(r#"{ "a": 42 }"#).is_err());
    }

    #[test]
    fn test_manifest_builder() {
        let manifest = Manifest::new().with_file("img1", ManifestFile::new("img1.png", 1, 2));
        assert!(!manifest.is_empty());
        assert_eq!(manifest.get("img1").unwrap().height, 2);
    }
}
