//! Decoding of JSON documents handed to the CLI into typed values.

use std::path::Path;

use crate::error::TagsyncError;
use crate::resource::IdentityPoolConfig;
use crate::tags::TagSet;

fn read_json(path: &Path) -> Result<serde_json::Value, TagsyncError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|source| TagsyncError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// Reads a JSON object of string values. A missing document body (`null`)
/// is an empty tag set.
pub fn tags_from_file(path: &Path) -> Result<TagSet, TagsyncError> {
    let value = read_json(path)?;
    TagSet::from_value(&value).map_err(|source| TagsyncError::Tags {
        path: path.display().to_string(),
        source,
    })
}

pub fn pool_config_from_file(path: &Path) -> Result<IdentityPoolConfig, TagsyncError> {
    let value = read_json(path)?;
    serde_json::from_value(value).map_err(|source| TagsyncError::Json {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "tagsync-load-{}-{}.json",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_tags_from_file() {
        let path = temp_file("tags", r#"{"env": "prod"}"#);
        let tags = tags_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(tags.get("env"), Some("prod"));
    }

    #[test]
    fn test_tags_from_file_null() {
        let path = temp_file("null", "null");
        let tags = tags_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(tags.is_empty());
    }

    #[test]
    fn test_tags_from_file_names_path_on_bad_value() {
        let path = temp_file("bad", r#"{"env": true}"#);
        let err = tags_from_file(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(err, TagsyncError::Tags { .. }));
        assert!(err.to_string().contains("tagsync-load-"));
        assert!(err.to_string().contains("'env'"));
    }

    #[test]
    fn test_tags_from_missing_file() {
        let err = tags_from_file(Path::new("/nonexistent/tagsync/tags.json")).unwrap_err();
        assert!(matches!(err, TagsyncError::Io(_)));
    }

    #[test]
    fn test_pool_config_from_file() {
        let path = temp_file(
            "pool",
            r#"{"identity_pool_name": "identity pool", "allow_classic_flow": true}"#,
        );
        let config = pool_config_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.identity_pool_name, "identity pool");
        assert!(config.allow_classic_flow);
    }

    #[test]
    fn test_pool_config_missing_name() {
        let path = temp_file("pool-missing", r#"{"allow_classic_flow": true}"#);
        let err = pool_config_from_file(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(err, TagsyncError::Json { .. }));
    }
}
