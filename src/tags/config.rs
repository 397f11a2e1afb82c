use serde::{Deserialize, Serialize};

use super::TagSet;

/// Prefix of tag keys reserved by AWS.
pub const AWS_TAG_PREFIX: &str = "aws:";

/// Tags applied by the provider to every resource it manages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultTagsConfig {
    #[serde(default)]
    pub tags: TagSet,
}

impl DefaultTagsConfig {
    /// Overlays `tags` on top of the default tags; resource tags win.
    pub fn merge_tags(&self, tags: &TagSet) -> TagSet {
        let mut merged = self.tags.clone();
        for (key, value) in tags.iter() {
            merged.insert(key, value);
        }
        merged
    }

    /// Strips entries whose key and value both match a default tag.
    pub fn remove_default_config(&self, tags: &TagSet) -> TagSet {
        tags.iter()
            .filter(|(key, value)| self.tags.get(key) != Some(*value))
            .collect()
    }
}

/// Tag keys that the provider never manages nor reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IgnoreTagsConfig {
    #[serde(default)]
    pub keys: Vec<String>,
    #[serde(default)]
    pub key_prefixes: Vec<String>,
}

impl IgnoreTagsConfig {
    pub fn apply(&self, tags: TagSet) -> TagSet {
        tags.ignore_keys(&self.keys)
            .ignore_prefixes(&self.key_prefixes)
    }
}
