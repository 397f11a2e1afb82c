use thiserror::Error;

#[derive(Debug, Error)]
pub enum TagsyncError {
    #[error(transparent)]
    Provider(#[from] crate::providers::ProviderError),

    #[error(transparent)]
    Tagging(#[from] crate::tags::TaggingError),

    #[error(transparent)]
    Pool(#[from] crate::pool::PoolError),

    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    #[error("invalid tags in {path}: {source}")]
    Tags {
        path: String,
        source: crate::tags::TagError,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
