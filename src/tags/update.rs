use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use super::{TagDiff, TagSet, reconcile};
use crate::providers::ProviderError;

/// Remote tagging capability for a single service.
#[async_trait]
pub trait TaggingClient: Send + Sync {
    fn service(&self) -> &str;
    async fn untag_resource(&self, identifier: &str, keys: &[String]) -> Result<(), ProviderError>;
    async fn tag_resource(&self, identifier: &str, tags: &TagSet) -> Result<(), ProviderError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagPhase {
    Remove,
    Update,
}

impl fmt::Display for TagPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagPhase::Remove => f.write_str("remove"),
            TagPhase::Update => f.write_str("update"),
        }
    }
}

#[derive(Debug, Error)]
#[error("tagging operation failed ({phase} phase) for resource ({identifier}): {source}")]
pub struct TaggingError {
    pub phase: TagPhase,
    pub identifier: String,
    pub source: ProviderError,
}

/// Moves the tags of `identifier` from `old` to `new`.
///
/// Removal runs first and a failed removal aborts before any tags are set.
/// Empty key lists and tag sets are never sent. Returns the diff that was
/// applied, with AWS-reserved keys filtered out.
pub async fn update_tags(
    client: &dyn TaggingClient,
    identifier: &str,
    old: &TagSet,
    new: &TagSet,
) -> Result<TagDiff, TaggingError> {
    let diff = reconcile(old, new);
    let applied = TagDiff {
        removed: diff
            .removed
            .into_iter()
            .filter(|k| !k.starts_with(super::AWS_TAG_PREFIX))
            .collect(),
        updated: diff.updated.ignore_aws(),
    };

    if !applied.removed.is_empty() {
        let keys: Vec<String> = applied.removed.iter().cloned().collect();
        tracing::debug!(
            service = client.service(),
            identifier,
            count = keys.len(),
            "removing tags"
        );

        client
            .untag_resource(identifier, &keys)
            .await
            .map_err(|source| TaggingError {
                phase: TagPhase::Remove,
                identifier: identifier.to_string(),
                source,
            })?;
    }

    if !applied.updated.is_empty() {
        tracing::debug!(
            service = client.service(),
            identifier,
            count = applied.updated.len(),
            "setting tags"
        );

        client
            .tag_resource(identifier, &applied.updated)
            .await
            .map_err(|source| TaggingError {
                phase: TagPhase::Update,
                identifier: identifier.to_string(),
                source,
            })?;
    }

    Ok(applied)
}
