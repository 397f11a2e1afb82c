pub mod aws;

use aws_config::SdkConfig;
use thiserror::Error;

use crate::tags::TaggingClient;

/// Services whose resources can be re-tagged with `tagsync tags apply`.
pub const TAGGING_SERVICES: &[&str] = &["lambda", "cognito-identity"];

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unknown service: {0}")]
    UnknownService(String),

    #[error("{service}: resource not found: {identifier}")]
    NotFound { service: String, identifier: String },

    #[error("{service} API error: {message}")]
    Api { service: String, message: String },
}

impl ProviderError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::NotFound { .. })
    }
}

pub fn tagging_client(
    service: &str,
    sdk_config: &SdkConfig,
) -> Result<Box<dyn TaggingClient>, ProviderError> {
    match service {
        "lambda" => Ok(Box::new(aws::LambdaTagging::new(sdk_config))),
        "cognito-identity" => Ok(Box::new(aws::CognitoIdentity::new(sdk_config))),
        other => Err(ProviderError::UnknownService(other.to_string())),
    }
}
