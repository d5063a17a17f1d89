//! Configuration module
//!
//! Environment-backed configuration for the API. `Config::from_env()`
//! reads everything up front; `validate()` fails fast on combinations
//! that cannot work (missing bucket for the S3 backend, zero TTLs).

use std::env;
use std::str::FromStr;

use crate::constants::{DEFAULT_DOWNLOAD_URL_TTL_SECS, DEFAULT_UPLOAD_URL_TTL_SECS};
use crate::storage_types::StorageBackend;

const DEFAULT_PORT: u16 = 3000;
const MAX_CONNECTIONS: u32 = 20;
const CONNECTION_TIMEOUT_SECS: u64 = 30;
// Requests are JSON-only; file bytes go directly to blob storage.
const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// How the retrieval service hands blob bytes to a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetrievalStrategy {
    /// Fetch the blob and pipe its bytes through this service.
    Proxy,
    /// Issue a short-lived presigned GET URL and redirect the caller.
    Redirect,
}

impl FromStr for RetrievalStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "proxy" => Ok(RetrievalStrategy::Proxy),
            "redirect" => Ok(RetrievalStrategy::Redirect),
            other => Err(format!(
                "Unknown retrieval strategy '{}', expected 'proxy' or 'redirect'",
                other
            )),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    pub storage_backend: StorageBackend,
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>,
    pub aws_region: Option<String>,
    pub upload_url_ttl_secs: u64,
    pub download_url_ttl_secs: u64,
    pub retrieval_strategy: RetrievalStrategy,
    pub max_request_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        // Load .env if present; real env vars win.
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let storage_backend = env::var("STORAGE_BACKEND")
            .ok()
            .map(|s| StorageBackend::from_str(&s))
            .transpose()
            .map_err(anyhow::Error::msg)?
            .unwrap_or(StorageBackend::S3);

        let retrieval_strategy = env::var("RETRIEVAL_STRATEGY")
            .ok()
            .map(|s| RetrievalStrategy::from_str(&s))
            .transpose()
            .map_err(anyhow::Error::msg)?
            .unwrap_or(RetrievalStrategy::Proxy);

        let config = Config {
            server_port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            cors_origins,
            environment,
            database_url: env::var("DATABASE_URL").unwrap_or_default(),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(MAX_CONNECTIONS),
            db_timeout_seconds: env::var("DB_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(CONNECTION_TIMEOUT_SECS),
            storage_backend,
            s3_bucket: env::var("S3_BUCKET_NAME").ok(),
            s3_region: env::var("S3_REGION").ok(),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            aws_region: env::var("AWS_REGION").ok(),
            upload_url_ttl_secs: env::var("UPLOAD_URL_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_UPLOAD_URL_TTL_SECS),
            download_url_ttl_secs: env::var("DOWNLOAD_URL_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_DOWNLOAD_URL_TTL_SECS),
            retrieval_strategy,
            max_request_body_bytes: env::var("MAX_REQUEST_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_BODY_BYTES),
        };

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.database_url.is_empty() {
            anyhow::bail!("DATABASE_URL is required");
        }
        if self.storage_backend == StorageBackend::S3 {
            if self.s3_bucket.as_deref().unwrap_or("").is_empty() {
                anyhow::bail!("S3_BUCKET_NAME is required for the s3 storage backend");
            }
            if self.s3_region.is_none() && self.aws_region.is_none() {
                anyhow::bail!("S3_REGION or AWS_REGION is required for the s3 storage backend");
            }
        }
        if self.upload_url_ttl_secs == 0 || self.download_url_ttl_secs == 0 {
            anyhow::bail!("Presigned URL TTLs must be greater than zero");
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production" || self.environment == "prod"
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.cors_origins
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
    }

    pub fn db_timeout_seconds(&self) -> u64 {
        self.db_timeout_seconds
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.storage_backend
    }

    pub fn s3_bucket(&self) -> Option<&str> {
        self.s3_bucket.as_deref()
    }

    pub fn s3_region(&self) -> Option<&str> {
        self.s3_region.as_deref()
    }

    pub fn s3_endpoint(&self) -> Option<&str> {
        self.s3_endpoint.as_deref()
    }

    pub fn aws_region(&self) -> Option<&str> {
        self.aws_region.as_deref()
    }

    pub fn upload_url_ttl_secs(&self) -> u64 {
        self.upload_url_ttl_secs
    }

    pub fn download_url_ttl_secs(&self) -> u64 {
        self.download_url_ttl_secs
    }

    pub fn retrieval_strategy(&self) -> RetrievalStrategy {
        self.retrieval_strategy
    }

    pub fn max_request_body_bytes(&self) -> usize {
        self.max_request_body_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            server_port: 3000,
            cors_origins: vec!["*".to_string()],
            environment: "development".to_string(),
            database_url: "postgres://localhost/vocast".to_string(),
            db_max_connections: 20,
            db_timeout_seconds: 30,
            storage_backend: StorageBackend::Memory,
            s3_bucket: None,
            s3_region: None,
            s3_endpoint: None,
            aws_region: None,
            upload_url_ttl_secs: 300,
            download_url_ttl_secs: 300,
            retrieval_strategy: RetrievalStrategy::Proxy,
            max_request_body_bytes: 64 * 1024,
        }
    }

    #[test]
    fn memory_backend_needs_no_bucket() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn s3_backend_requires_bucket_and_region() {
        let mut config = base_config();
        config.storage_backend = StorageBackend::S3;
        assert!(config.validate().is_err());

        config.s3_bucket = Some("voiceovers".to_string());
        assert!(config.validate().is_err());

        config.aws_region = Some("us-east-1".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_database_url_is_rejected() {
        let mut config = base_config();
        config.database_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn retrieval_strategy_parses() {
        assert_eq!(
            "redirect".parse::<RetrievalStrategy>().unwrap(),
            RetrievalStrategy::Redirect
        );
        assert!("push".parse::<RetrievalStrategy>().is_err());
    }
}
