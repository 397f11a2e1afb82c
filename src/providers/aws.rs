mod cognito;
mod lambda;

pub use cognito::CognitoIdentity;
pub use lambda::LambdaTagging;

use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Loads shared SDK configuration from the environment, with optional
/// region and endpoint overrides (the latter for local emulators).
pub async fn load_sdk_config(region: Option<&str>, endpoint_url: Option<&str>) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = region {
        loader = loader.region(Region::new(region.to_string()));
    }
    if let Some(endpoint_url) = endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }

    let config = loader.load().await;

    tracing::debug!(
        region = ?config.region(),
        endpoint_override = endpoint_url.is_some(),
        "AWS SDK configuration loaded"
    );

    config
}
