use std::env;
use std::fmt;
use url::Url;

use crate::{Error, Result};

pub const ENDPOINT_ENV: &str = "NT_ENDPOINT_URL";
pub const ADMIN_SECRET_ENV: &str = "NT_ADMIN_SECRET";
pub const SECRET_HEADER_ENV: &str = "NT_SECRET_HEADER";
pub const DEFAULT_SECRET_HEADER: &str = "x-hasura-admin-secret";

/// Where the summaries live and how to authenticate against it.
#[derive(Clone)]
pub struct ProviderConfig {
    pub endpoint_url: Url,
    pub admin_secret: String,
    pub secret_header: String,
}

impl ProviderConfig {
    pub fn new(endpoint_url: &str, admin_secret: impl Into<String>) -> Result<Self> {
        let endpoint_url = Url::parse(endpoint_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", endpoint_url, e)))?;
        if !matches!(endpoint_url.scheme(), "http" | "https") {
            return Err(Error::InvalidUrl(format!(
                "{}: unsupported scheme {}",
                endpoint_url,
                endpoint_url.scheme()
            )));
        }

        Ok(Self {
            endpoint_url,
            admin_secret: admin_secret.into(),
            secret_header: DEFAULT_SECRET_HEADER.to_string(),
        })
    }

    pub fn with_secret_header(mut self, header: impl Into<String>) -> Self {
        self.secret_header = header.into();
        self
    }

    pub fn from_env() -> Result<Self> {
        let endpoint = env::var(ENDPOINT_ENV)
            .map_err(|_| Error::Config(format!("{} is not set", ENDPOINT_ENV)))?;
        let secret = env::var(ADMIN_SECRET_ENV)
            .map_err(|_| Error::Config(format!("{} is not set", ADMIN_SECRET_ENV)))?;

        let config = Self::new(&endpoint, secret)?;
        Ok(match env::var(SECRET_HEADER_ENV) {
            Ok(header) if !header.is_empty() => config.with_secret_header(header),
            _ => config,
        })
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("endpoint_url", &self.endpoint_url.as_str())
            .field("admin_secret", &"<redacted>")
            .field("secret_header", &self.secret_header)
            .finish()
    }
}
