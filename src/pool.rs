//! Cognito Identity Pool resource handlers.
//!
//! Each handler takes its collaborators explicitly: the identity pool API
//! (which also provides tagging) and the provider configuration.

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{ConfigError, ProviderConfig};
use crate::providers::ProviderError;
use crate::resource::{IdentityPoolConfig, IdentityPoolState};
use crate::tags::{TaggingClient, TaggingError, update_tags};

/// An identity pool as reported by the remote API. `config.tags` holds the
/// raw remote tags.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityPool {
    pub id: String,
    pub config: IdentityPoolConfig,
}

#[async_trait]
pub trait IdentityPoolApi: TaggingClient {
    /// Creates a pool from `config`, tagging it with `config.tags`.
    async fn create_identity_pool(
        &self,
        config: &IdentityPoolConfig,
    ) -> Result<IdentityPool, ProviderError>;

    async fn describe_identity_pool(&self, id: &str) -> Result<IdentityPool, ProviderError>;

    /// Replaces every non-tag attribute of the pool with those of `config`.
    async fn update_identity_pool(
        &self,
        id: &str,
        config: &IdentityPoolConfig,
    ) -> Result<(), ProviderError>;

    async fn delete_identity_pool(&self, id: &str) -> Result<(), ProviderError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolAction {
    Creating,
    Reading,
    Updating,
    Deleting,
}

impl fmt::Display for PoolAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self {
            PoolAction::Creating => "creating",
            PoolAction::Reading => "reading",
            PoolAction::Updating => "updating",
            PoolAction::Deleting => "deleting",
        };
        f.write_str(action)
    }
}

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("{action} Cognito Identity Pool ({id}): {source}")]
    Api {
        action: PoolAction,
        id: String,
        source: ProviderError,
    },

    #[error("updating Cognito Identity Pool ({id}) tags: {source}")]
    Tags { id: String, source: TaggingError },

    #[error("Cognito Identity Pool ({id}) not found")]
    NotFound { id: String },

    #[error("Cognito Identity Pool ({id}): {field} cannot be changed in place, replace the pool")]
    RequiresReplacement { id: String, field: &'static str },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub struct IdentityPoolResource<'a, A> {
    api: &'a A,
    config: &'a ProviderConfig,
}

impl<'a, A: IdentityPoolApi> IdentityPoolResource<'a, A> {
    pub fn new(api: &'a A, config: &'a ProviderConfig) -> Self {
        Self { api, config }
    }

    pub async fn create(
        &self,
        desired: &IdentityPoolConfig,
    ) -> Result<IdentityPoolState, PoolError> {
        tracing::debug!(name = %desired.identity_pool_name, "creating Cognito Identity Pool");

        let request = IdentityPoolConfig {
            tags: self.config.effective_tags(&desired.tags),
            ..desired.clone()
        };

        let created = self
            .api
            .create_identity_pool(&request)
            .await
            .map_err(|source| PoolError::Api {
                action: PoolAction::Creating,
                id: desired.identity_pool_name.clone(),
                source,
            })?;

        tracing::info!(id = %created.id, "Cognito Identity Pool created");

        self.read(&created.id, true)
            .await?
            .ok_or_else(|| PoolError::NotFound {
                id: created.id.clone(),
            })
    }

    /// Returns `None` when an existing pool has disappeared remotely, so the
    /// caller can drop it from its state.
    pub async fn read(
        &self,
        id: &str,
        is_new: bool,
    ) -> Result<Option<IdentityPoolState>, PoolError> {
        tracing::debug!(id, "reading Cognito Identity Pool");

        let pool = match self.api.describe_identity_pool(id).await {
            Ok(pool) => pool,
            Err(e) if e.is_not_found() && !is_new => {
                tracing::warn!(id, "Cognito Identity Pool not found, removing from state");
                return Ok(None);
            }
            Err(source) => {
                return Err(PoolError::Api {
                    action: PoolAction::Reading,
                    id: id.to_string(),
                    source,
                });
            }
        };

        let arn = self.config.identity_pool_arn(&pool.id)?;
        let tags_all = self.config.ignore_tags.apply(pool.config.tags.clone().ignore_aws());
        let tags = self.config.default_tags.remove_default_config(&tags_all);

        Ok(Some(IdentityPoolState {
            id: pool.id,
            arn: arn.to_string(),
            config: IdentityPoolConfig {
                tags,
                ..pool.config
            },
            tags_all,
        }))
    }

    pub async fn update(
        &self,
        prior: &IdentityPoolState,
        desired: &IdentityPoolConfig,
    ) -> Result<IdentityPoolState, PoolError> {
        tracing::debug!(id = %prior.id, "updating Cognito Identity Pool");

        if let Some(field) = desired.replacement_reason(&prior.config) {
            return Err(PoolError::RequiresReplacement {
                id: prior.id.clone(),
                field,
            });
        }

        if desired.has_changes_except_tags(&prior.config) {
            self.api
                .update_identity_pool(&prior.id, desired)
                .await
                .map_err(|source| PoolError::Api {
                    action: PoolAction::Updating,
                    id: prior.id.clone(),
                    source,
                })?;
        }

        let tags_all = self.config.effective_tags(&desired.tags);
        if tags_all != prior.tags_all {
            let diff = update_tags(self.api, &prior.arn, &prior.tags_all, &tags_all)
                .await
                .map_err(|source| PoolError::Tags {
                    id: prior.id.clone(),
                    source,
                })?;

            tracing::info!(
                id = %prior.id,
                removed = diff.removed.len(),
                updated = diff.updated.len(),
                "Cognito Identity Pool tags updated"
            );
        }

        self.read(&prior.id, false)
            .await?
            .ok_or_else(|| PoolError::NotFound {
                id: prior.id.clone(),
            })
    }

    pub async fn delete(&self, id: &str) -> Result<(), PoolError> {
        tracing::debug!(id, "deleting Cognito Identity Pool");

        self.api
            .delete_identity_pool(id)
            .await
            .map_err(|source| PoolError::Api {
                action: PoolAction::Deleting,
                id: id.to_string(),
                source,
            })
    }

    /// Adopts an existing pool by id.
    pub async fn import(&self, id: &str) -> Result<IdentityPoolState, PoolError> {
        self.read(id, false)
            .await?
            .ok_or_else(|| PoolError::NotFound { id: id.to_string() })
    }
}
