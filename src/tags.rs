mod config;
mod key_value;
mod update;

pub use config::{AWS_TAG_PREFIX, DefaultTagsConfig, IgnoreTagsConfig};
pub use key_value::{TagDiff, TagSet, reconcile};
pub use update::{TagPhase, TaggingClient, TaggingError, update_tags};

use thiserror::Error;

/// Errors raised while converting untyped documents into tag sets.
#[derive(Debug, Error, PartialEq)]
pub enum TagError {
    #[error("tags must be a JSON object, got {kind}")]
    NotAnObject { kind: &'static str },

    #[error("tag '{key}' must have a string value, got {kind}")]
    NonStringValue { key: String, kind: &'static str },
}
