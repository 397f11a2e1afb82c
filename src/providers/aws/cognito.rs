use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_cognitoidentity::error::DisplayErrorContext;
use aws_sdk_cognitoidentity::types::CognitoIdentityProvider as SdkIdentityProvider;

use crate::pool::{IdentityPool, IdentityPoolApi};
use crate::providers::ProviderError;
use crate::resource::{CognitoIdentityProvider, IdentityPoolConfig};
use crate::tags::{TagSet, TaggingClient};

const SERVICE: &str = "cognito-identity";

/// Cognito Identity (federated identities) client: identity pools and their tags.
#[derive(Debug, Clone)]
pub struct CognitoIdentity {
    client: aws_sdk_cognitoidentity::Client,
}

impl CognitoIdentity {
    pub fn new(config: &SdkConfig) -> Self {
        Self::from_client(aws_sdk_cognitoidentity::Client::new(config))
    }

    pub fn from_client(client: aws_sdk_cognitoidentity::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TaggingClient for CognitoIdentity {
    fn service(&self) -> &str {
        SERVICE
    }

    async fn untag_resource(&self, identifier: &str, keys: &[String]) -> Result<(), ProviderError> {
        self.client
            .untag_resource()
            .resource_arn(identifier)
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
            .resource_arn(identifier)
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

#[async_trait]
impl IdentityPoolApi for CognitoIdentity {
    async fn create_identity_pool(
        &self,
        config: &IdentityPoolConfig,
    ) -> Result<IdentityPool, ProviderError> {
        // Optional attributes are only sent when set.
        let output = self
            .client
            .create_identity_pool()
            .identity_pool_name(&config.identity_pool_name)
            .allow_unauthenticated_identities(config.allow_unauthenticated_identities)
            .allow_classic_flow(config.allow_classic_flow)
            .set_developer_provider_name(config.developer_provider_name.clone())
            .set_supported_login_providers(non_empty_map(&config.supported_login_providers))
            .set_cognito_identity_providers(non_empty(expand_providers(config)))
            .set_saml_provider_arns(non_empty(config.saml_provider_arns.clone()))
            .set_open_id_connect_provider_arns(non_empty(
                config.openid_connect_provider_arns.iter().cloned().collect(),
            ))
            .set_identity_pool_tags((!config.tags.is_empty()).then(|| config.tags.to_hash_map()))
            .send()
            .await
            .map_err(|e| api_error(&config.identity_pool_name, false, e))?;

        Ok(IdentityPool {
            id: output.identity_pool_id,
            config: config.clone(),
        })
    }

    async fn describe_identity_pool(&self, id: &str) -> Result<IdentityPool, ProviderError> {
        let output = self
            .client
            .describe_identity_pool()
            .identity_pool_id(id)
            .send()
            .await
            .map_err(|e| {
                let not_found = e
                    .as_service_error()
                    .is_some_and(|se| se.is_resource_not_found_exception());
                api_error(id, not_found, e)
            })?;

        let config = IdentityPoolConfig {
            identity_pool_name: output.identity_pool_name,
            allow_unauthenticated_identities: output.allow_unauthenticated_identities,
            allow_classic_flow: output.allow_classic_flow.unwrap_or(false),
            developer_provider_name: output.developer_provider_name,
            cognito_identity_providers: output
                .cognito_identity_providers
                .unwrap_or_default()
                .into_iter()
                .map(flatten_provider)
                .collect(),
            openid_connect_provider_arns: output
                .open_id_connect_provider_arns
                .unwrap_or_default()
                .into_iter()
                .collect(),
            saml_provider_arns: output.saml_provider_arns.unwrap_or_default(),
            supported_login_providers: output
                .supported_login_providers
                .unwrap_or_default()
                .into_iter()
                .collect(),
            tags: output.identity_pool_tags.unwrap_or_default().into(),
        };

        Ok(IdentityPool {
            id: output.identity_pool_id,
            config,
        })
    }

    async fn update_identity_pool(
        &self,
        id: &str,
        config: &IdentityPoolConfig,
    ) -> Result<(), ProviderError> {
        // Collections are always sent so that removed entries are cleared.
        self.client
            .update_identity_pool()
            .identity_pool_id(id)
            .identity_pool_name(&config.identity_pool_name)
            .allow_unauthenticated_identities(config.allow_unauthenticated_identities)
            .allow_classic_flow(config.allow_classic_flow)
            .set_cognito_identity_providers(Some(expand_providers(config)))
            .set_supported_login_providers(Some(
                config.supported_login_providers.clone().into_iter().collect(),
            ))
            .set_open_id_connect_provider_arns(Some(
                config.openid_connect_provider_arns.iter().cloned().collect(),
            ))
            .set_saml_provider_arns(Some(config.saml_provider_arns.clone()))
            .send()
            .await
            .map_err(|e| {
                let not_found = e
                    .as_service_error()
                    .is_some_and(|se| se.is_resource_not_found_exception());
                api_error(id, not_found, e)
            })?;

        Ok(())
    }

    async fn delete_identity_pool(&self, id: &str) -> Result<(), ProviderError> {
        self.client
            .delete_identity_pool()
            .identity_pool_id(id)
            .send()
            .await
            .map_err(|e| {
                let not_found = e
                    .as_service_error()
                    .is_some_and(|se| se.is_resource_not_found_exception());
                api_error(id, not_found, e)
            })?;

        Ok(())
    }
}

fn expand_providers(config: &IdentityPoolConfig) -> Vec<SdkIdentityProvider> {
    config
        .cognito_identity_providers
        .iter()
        .map(|p| {
            SdkIdentityProvider::builder()
                .set_client_id(p.client_id.clone())
                .set_provider_name(p.provider_name.clone())
                .server_side_token_check(p.server_side_token_check)
                .build()
        })
        .collect()
}

fn flatten_provider(provider: SdkIdentityProvider) -> CognitoIdentityProvider {
    CognitoIdentityProvider {
        client_id: provider.client_id,
        provider_name: provider.provider_name,
        server_side_token_check: provider.server_side_token_check.unwrap_or(false),
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}

fn non_empty_map(map: &BTreeMap<String, String>) -> Option<HashMap<String, String>> {
    (!map.is_empty()).then(|| map.clone().into_iter().collect())
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
