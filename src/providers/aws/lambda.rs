use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_lambda::error::DisplayErrorContext;

use crate::providers::ProviderError;
use crate::tags::{TagSet, TaggingClient};

const SERVICE: &str = "lambda";

/// Tags Lambda functions, layers and event source mappings by ARN.
#[derive(Debug, Clone)]
pub struct LambdaTagging {
    client: aws_sdk_lambda::Client,
}

impl LambdaTagging {
    pub fn new(config: &SdkConfig) -> Self {
        Self::from_client(aws_sdk_lambda::Client::new(config))
    }

    pub fn from_client(client: aws_sdk_lambda::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TaggingClient for LambdaTagging {
    fn service(&self) -> &str {
        SERVICE
    }

    async fn untag_resource(&self, identifier: &str, keys: &[String]) -> Result<(), ProviderError> {
        self.client
            .untag_resource()
            .resource(identifier)
            .set_tag_keys(Some(keys.to_vec()))
            .send()
            .await
            .map_err(|e| {
                let not_found = e
                    .as_service_error()
                    .is_some_and(|se| se.is_resource_not_found_exception());
                api_error(identifier, not_found, e)
            })?;

        Ok(())
    }

    async fn tag_resource(&self, identifier: &str, tags: &TagSet) -> Result<(), ProviderError> {
        self.client
            .tag_resource()
            .resource(identifier)
            .set_tags(Some(tags.to_hash_map()))
            .send()
            .await
            .map_err(|e| {
                let not_found = e
                    .as_service_error()
                    .is_some_and(|se| se.is_resource_not_found_exception());
                api_error(identifier, not_found, e)
            })?;

        Ok(())
    }
}

fn api_error<E: std::error::Error>(identifier: &str, not_found: bool, err: E) -> ProviderError {
    if not_found {
        return ProviderError::NotFound {
            service: SERVICE.to_string(),
            identifier: identifier.to_string(),
        };
    }
    ProviderError::Api {
        service: SERVICE.to_string(),
        message: DisplayErrorContext(err).to_string(),
    }
}
