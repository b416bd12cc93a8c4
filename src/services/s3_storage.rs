//! S3 blob store backend.
//!
//! Objects are stored under the client-supplied filename, unmodified.
//! Credentials come from the standard AWS chain (env vars,
//! `~/.aws/credentials`, IAM role, etc.).

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::{
    config::{BehaviorVersion, Region},
    presigning::PresigningConfig,
    primitives::ByteStream,
    Client,
};
use tracing::{debug, info};

use crate::{
    application::{error::ApplicationError, services::StorageService},
    domain::{config::settings::StorageSettings, models::file::FileData},
    services::StorageError,
};

const FALLBACK_REGION: &str = "us-east-1";

pub struct S3StorageService {
    client: Client,
    bucket: String,
}

impl S3StorageService {
    pub fn new(client: Client, bucket: String) -> Self {
        Self { client, bucket }
    }

    pub async fn from_settings(settings: &StorageSettings) -> Self {
        let mut config_loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(ref region) = settings.region {
            config_loader = config_loader.region(Region::new(region.clone()));
        }
        if let Some(ref endpoint) = settings.endpoint_url {
            config_loader = config_loader.endpoint_url(endpoint);
        }

        let sdk_config = config_loader.load().await;

        let mut s3_config_builder = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(settings.force_path_style);
        if sdk_config.region().is_none() {
            s3_config_builder = s3_config_builder.region(Region::new(FALLBACK_REGION));
        }

        info!(
            "S3 storage initialized: bucket={} endpoint={:?} path_style={}",
            settings.bucket, settings.endpoint_url, settings.force_path_style
        );

        Self::new(
            Client::from_conf(s3_config_builder.build()),
            settings.bucket.clone(),
        )
    }
}

#[async_trait]
impl StorageService for S3StorageService {
    async fn upload(&self, file_data: FileData) -> Result<String, ApplicationError> {
        let key = file_data.storage_key().to_string();

        debug!(
            "S3 put_object: bucket={} key={} size={}",
            self.bucket,
            key,
            file_data.size()
        );

        let mut request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(file_data.content));
        if let Some(content_type) = file_data.content_type {
            request = request.content_type(content_type);
        }

        request.send().await.map_err(StorageError::from_sdk)?;

        Ok(key)
    }

    async fn presigned_download_url(
        &self,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, ApplicationError> {
        let presigning_config = PresigningConfig::expires_in(expires_in)
            .map_err(|e| StorageError::InvalidConfiguration(e.to_string()))?;

        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning_config)
            .await
            .map_err(StorageError::from_sdk)?;

        Ok(presigned.uri().to_string())
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::config::Credentials;

    use super::*;

    fn offline_service(endpoint: Option<&str>, path_style: bool) -> S3StorageService {
        let mut builder = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::new(
                "AKIDEXAMPLE",
                "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY",
                None,
                None,
                "test",
            ))
            .force_path_style(path_style);
        if let Some(endpoint) = endpoint {
            builder = builder.endpoint_url(endpoint);
        }
        S3StorageService::new(Client::from_conf(builder.build()), "uploads".to_string())
    }

    #[tokio::test]
    async fn presigned_url_carries_bucket_key_and_expiry() {
        let service = offline_service(None, false);

        let url = service
            .presigned_download_url("a.txt", Duration::from_secs(3600))
            .await
            .unwrap();

        assert!(url.starts_with("https://uploads.s3"), "{url}");
        assert!(url.contains("/a.txt?"), "{url}");
        assert!(url.contains("X-Amz-Expires=3600"), "{url}");
        assert!(url.contains("X-Amz-Signature="), "{url}");
    }

    #[tokio::test]
    async fn presigned_url_honours_custom_endpoint() {
        let service = offline_service(Some("http://localhost:9000"), true);

        let url = service
            .presigned_download_url("never-uploaded.bin", Duration::from_secs(60))
            .await
            .unwrap();

        assert!(
            url.starts_with("http://localhost:9000/uploads/never-uploaded.bin?"),
            "{url}"
        );
    }

    #[tokio::test]
    async fn expiry_beyond_one_week_is_rejected() {
        let service = offline_service(None, false);

        let result = service
            .presigned_download_url("a.txt", Duration::from_secs(8 * 24 * 3600))
            .await;

        assert!(matches!(result, Err(ApplicationError::StorageError(_))));
    }
}
