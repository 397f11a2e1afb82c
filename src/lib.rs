//! tagsync - tag reconciliation for AWS resources
//!
//! Computes the minimal remove/set operations that move a resource's tags
//! from one set to another, applies them through a pluggable tagging client,
//! and manages Cognito Identity Pools with the same machinery.

pub mod arn;
pub mod config;
pub mod load;
pub mod output;
pub mod pool;
pub mod providers;
pub mod resource;
pub mod tags;

mod error;

pub use config::{ConfigError, ProviderConfig};
pub use error::TagsyncError;
pub use pool::{IdentityPool, IdentityPoolApi, IdentityPoolResource, PoolAction, PoolError};
pub use providers::ProviderError;
pub use resource::{CognitoIdentityProvider, IdentityPoolConfig, IdentityPoolState};
pub use tags::{TagDiff, TagPhase, TagSet, TaggingClient, TaggingError, reconcile, update_tags};
