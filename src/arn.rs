use std::fmt;

/// Amazon Resource Name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arn {
    pub partition: String,
    pub service: String,
    pub region: String,
    pub account_id: String,
    pub resource: String,
}

impl Arn {
    pub fn identity_pool(partition: &str, region: &str, account_id: &str, pool_id: &str) -> Self {
        Self {
            partition: partition.to_string(),
            service: "cognito-identity".to_string(),
            region: region.to_string(),
            account_id: account_id.to_string(),
            resource: format!("identitypool/{}", pool_id),
        }
    }
}

impl fmt::Display for Arn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arn:{}:{}:{}:{}:{}",
            self.partition, self.service, self.region, self.account_id, self.resource
        )
    }
}
