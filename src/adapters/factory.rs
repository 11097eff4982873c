//! Client factory
//!
//! Builds the CloudWatch Logs and S3 clients once per process from a single
//! shared SDK configuration.

use crate::adapters::logs::{CloudWatchLogSource, LogSource};
use crate::adapters::storage::{ObjectStore, S3ObjectStore};
use crate::config::{AwsConfig, LogVaultConfig};
use crate::domain::{LogVaultError, Result};
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_s3::config::Credentials;
use secrecy::ExposeSecret;
use std::sync::Arc;

const CREDENTIALS_PROVIDER_NAME: &str = "logvault-config";

/// Process-lifetime pair of client handles
#[derive(Clone)]
pub struct ExportClients {
    /// Log source
    pub log_source: Arc<dyn LogSource>,

    /// Object store
    pub object_store: Arc<dyn ObjectStore>,
}

impl ExportClients {
    /// Pair arbitrary implementations, e.g. test doubles
    pub fn new(log_source: Arc<dyn LogSource>, object_store: Arc<dyn ObjectStore>) -> Self {
        Self {
            log_source,
            object_store,
        }
    }
}

/// Create CloudWatch Logs and S3 clients from configuration
///
/// # Errors
///
/// Returns a configuration error if no region can be resolved from the
/// config file, environment or instance metadata.
pub async fn build_clients(config: &LogVaultConfig) -> Result<ExportClients> {
    let sdk_config = load_sdk_config(&config.aws).await;

    let region = sdk_config.region().ok_or_else(|| {
        LogVaultError::Configuration(
            "No AWS region configured. Set aws.region or AWS_REGION".to_string(),
        )
    })?;

    tracing::info!(
        region = %region,
        endpoint_url = config.aws.endpoint_url.as_deref().unwrap_or("default"),
        static_credentials = config.aws.has_static_credentials(),
        "Creating AWS clients"
    );

    let logs_client = aws_sdk_cloudwatchlogs::Client::new(&sdk_config);

    let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
        .force_path_style(config.aws.force_path_style)
        .build();
    let s3_client = aws_sdk_s3::Client::from_conf(s3_config);

    Ok(ExportClients::new(
        Arc::new(CloudWatchLogSource::new(logs_client)),
        Arc::new(S3ObjectStore::new(s3_client)),
    ))
}

/// Resolve the shared SDK configuration
///
/// Unset fields fall through to the SDK's default provider chain.
pub async fn load_sdk_config(aws: &AwsConfig) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = &aws.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(endpoint) = &aws.endpoint_url {
        loader = loader.endpoint_url(endpoint.clone());
    }
    if let Some(credentials) = static_credentials(aws) {
        loader = loader.credentials_provider(credentials);
    }

    loader.load().await
}

fn static_credentials(aws: &AwsConfig) -> Option<Credentials> {
    let access_key_id = aws.access_key_id.as_ref()?;
    let secret_access_key = aws.secret_access_key.as_ref()?;
    let session_token = aws
        .session_token
        .as_ref()
        .map(|t| t.expose_secret().as_ref().to_string());

    Some(Credentials::new(
        access_key_id.clone(),
        secret_access_key.expose_secret().as_ref().to_string(),
        session_token,
        None,
        CREDENTIALS_PROVIDER_NAME,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    #[test]
    fn test_static_credentials_absent_by_default() {
        assert!(static_credentials(&AwsConfig::default()).is_none());
    }

    #[test]
    fn test_static_credentials_built_from_config() {
        let aws = AwsConfig {
            access_key_id: Some("AKIDEXAMPLE".to_string()),
            secret_access_key: Some(secret_string("wJalrXUtnFEMI".to_string())),
            session_token: Some(secret_string("token".to_string())),
            ..Default::default()
        };

        let creds = static_credentials(&aws).unwrap();
        assert_eq!(creds.access_key_id(), "AKIDEXAMPLE");
        assert_eq!(creds.secret_access_key(), "wJalrXUtnFEMI");
        assert_eq!(creds.session_token(), Some("token"));
    }

    #[tokio::test]
    async fn test_load_sdk_config_uses_configured_region() {
        let aws = AwsConfig {
            region: Some("eu-west-1".to_string()),
            access_key_id: Some("AKIDEXAMPLE".to_string()),
            secret_access_key: Some(secret_string("secret".to_string())),
            ..Default::default()
        };

        let sdk_config = load_sdk_config(&aws).await;
        assert_eq!(sdk_config.region().map(|r| r.as_ref()), Some("eu-west-1"));
    }
}
