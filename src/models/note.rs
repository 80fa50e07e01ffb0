use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata key holding the publish flag, at both note and folder level.
pub const PUBLISH_KEY: &str = "publish";

/// Free-form metadata attached to a note or a folder.
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// Folder metadata keyed by folder path (e.g. `"blog/2024"`).
pub type FolderMetadata = BTreeMap<String, Metadata>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub metadata: Metadata,
    /// Computed by the visibility resolver; recompute after changing metadata.
    #[serde(default)]
    pub is_public: bool,
}

impl Note {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}
