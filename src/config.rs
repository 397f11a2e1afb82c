use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::arn::Arn;
use crate::tags::{DefaultTagsConfig, IgnoreTagsConfig, TagSet};

const DEFAULT_PARTITION: &str = "aws";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("missing setting: {0}")]
    Missing(&'static str),
}

/// Provider-level settings shared by every resource handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub partition: String,
    pub region: Option<String>,
    pub account_id: Option<String>,
    pub endpoint_url: Option<String>,
    pub default_tags: DefaultTagsConfig,
    pub ignore_tags: IgnoreTagsConfig,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            partition: DEFAULT_PARTITION.to_string(),
            region: None,
            account_id: None,
            endpoint_url: None,
            default_tags: DefaultTagsConfig::default(),
            ignore_tags: IgnoreTagsConfig::default(),
        }
    }
}

impl ProviderConfig {
    /// `$XDG_CONFIG_HOME/tagsync/config.json` (or the platform equivalent).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tagsync").join("config.json"))
    }

    /// Loads `path` when given; otherwise the default location, falling back
    /// to built-in defaults when no file exists there.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(
            path = %path.display(),
            default_tags = config.default_tags.tags.len(),
            "config loaded"
        );

        Ok(config)
    }

    pub fn identity_pool_arn(&self, pool_id: &str) -> Result<Arn, ConfigError> {
        let region = self.region.as_deref().ok_or(ConfigError::Missing("region"))?;
        let account_id = self
            .account_id
            .as_deref()
            .ok_or(ConfigError::Missing("account_id"))?;

        Ok(Arn::identity_pool(
            &self.partition,
            region,
            account_id,
            pool_id,
        ))
    }

    /// Effective tags of a resource: defaults merged with `tags`, minus
    /// AWS-reserved and ignored keys.
    pub fn effective_tags(&self, tags: &TagSet) -> TagSet {
        self.ignore_tags
            .apply(self.default_tags.merge_tags(tags).ignore_aws())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "tagsync-config-{}-{}.json",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = ProviderConfig::default();
        assert_eq!(config.partition, "aws");
        assert!(config.region.is_none());
        assert!(config.default_tags.tags.is_empty());
    }

    #[test]
    fn test_from_file() {
        let path = temp_file(
            "full",
            r#"{
                "region": "eu-central-1",
                "account_id": "123456789012",
                "default_tags": { "tags": { "managed-by": "tagsync" } },
                "ignore_tags": { "key_prefixes": ["kubernetes.io/"] }
            }"#,
        );

        let config = ProviderConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.partition, "aws");
        assert_eq!(config.region.as_deref(), Some("eu-central-1"));
        assert_eq!(config.default_tags.tags.get("managed-by"), Some("tagsync"));
        assert_eq!(config.ignore_tags.key_prefixes, vec!["kubernetes.io/"]);
    }

    #[test]
    fn test_from_file_parse_error() {
        let path = temp_file("broken", "{ not json");

        let err = ProviderConfig::from_file(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("failed to parse config file"));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("tagsync-config-does-not-exist.json");
        let err = ProviderConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    #[serial]
    #[cfg(target_os = "linux")]
    fn test_load_without_file_uses_defaults() {
        let backup = std::env::var("XDG_CONFIG_HOME").ok();
        let home = std::env::temp_dir().join(format!("tagsync-xdg-{}", std::process::id()));
        std::fs::create_dir_all(&home).unwrap();
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", &home);
        }

        let path = ProviderConfig::default_path();
        let config = ProviderConfig::load(None);

        unsafe {
            match backup {
                Some(dir) => std::env::set_var("XDG_CONFIG_HOME", dir),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }
        std::fs::remove_dir_all(&home).unwrap();

        assert_eq!(path, Some(home.join("tagsync").join("config.json")));
        assert_eq!(config.unwrap(), ProviderConfig::default());
    }

    #[test]
    fn test_identity_pool_arn_requires_region_and_account() {
        let mut config = ProviderConfig::default();
        assert!(matches!(
            config.identity_pool_arn("id"),
            Err(ConfigError::Missing("region"))
        ));

        config.region = Some("us-east-1".to_string());
        assert!(matches!(
            config.identity_pool_arn("id"),
            Err(ConfigError::Missing("account_id"))
        ));

        config.account_id = Some("123456789012".to_string());
        assert_eq!(
            config.identity_pool_arn("id").unwrap().to_string(),
            "arn:aws:cognito-identity:us-east-1:123456789012:identitypool/id"
        );
    }

    #[test]
    fn test_effective_tags() {
        let mut config = ProviderConfig::default();
        config.default_tags.tags.insert("managed-by", "tagsync");
        config.ignore_tags.keys.push("scratch".to_string());

        let resource: TagSet = [("env", "prod"), ("scratch", "1"), ("aws:x", "y")]
            .into_iter()
            .collect();

        let expected: TagSet = [("env", "prod"), ("managed-by", "tagsync")]
            .into_iter()
            .collect();
        assert_eq!(config.effective_tags(&resource), expected);
    }
}
