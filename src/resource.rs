use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::tags::TagSet;

/// Desired configuration of a Cognito Identity Pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct IdentityPoolConfig {
    pub identity_pool_name: String,
    #[serde(default)]
    pub allow_unauthenticated_identities: bool,
    #[serde(default)]
    pub allow_classic_flow: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_provider_name: Option<String>,
    #[serde(default)]
    pub cognito_identity_providers: BTreeSet<CognitoIdentityProvider>,
    #[serde(default)]
    pub openid_connect_provider_arns: BTreeSet<String>,
    #[serde(default)]
    pub saml_provider_arns: Vec<String>,
    #[serde(default)]
    pub supported_login_providers: BTreeMap<String, String>,
    #[serde(default)]
    pub tags: TagSet,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CognitoIdentityProvider {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub server_side_token_check: bool,
}

/// Recorded state of a Cognito Identity Pool after a create, read or update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct IdentityPoolState {
    pub id: String,
    pub arn: String,
    #[serde(flatten)]
    pub config: IdentityPoolConfig,
    #[serde(default)]
    pub tags_all: TagSet,
}

impl IdentityPoolConfig {
    /// Whether any attribute other than the tags differs from `other`.
    pub fn has_changes_except_tags(&self, other: &IdentityPoolConfig) -> bool {
        self.identity_pool_name != other.identity_pool_name
            || self.allow_unauthenticated_identities != other.allow_unauthenticated_identities
            || self.allow_classic_flow != other.allow_classic_flow
            || self.developer_provider_name != other.developer_provider_name
            || self.cognito_identity_providers != other.cognito_identity_providers
            || self.openid_connect_provider_arns != other.openid_connect_provider_arns
            || self.saml_provider_arns != other.saml_provider_arns
            || self.supported_login_providers != other.supported_login_providers
    }

    /// Name of the first attribute that cannot be changed in place, if any.
    pub fn replacement_reason(&self, other: &IdentityPoolConfig) -> Option<&'static str> {
        if self.identity_pool_name != other.identity_pool_name {
            return Some("identity_pool_name");
        }
        if self.developer_provider_name != other.developer_provider_name {
            return Some("developer_provider_name");
        }
        None
    }
}
