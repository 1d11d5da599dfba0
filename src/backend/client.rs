use anyhow::{Context, Result};
use reqwest::cookie::Jar;
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use std::sync::Arc;

use crate::config::Config;
use crate::error::FetchError;

/// HTTP klient pro aggregation API
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    client: Client,
}

impl BackendClient {
    pub fn new(config: &Config) -> Result<Self> {
        let url: Url = config
            .backend_url
            .parse()
            .with_context(|| format!("Invalid backend URL: {}", config.backend_url))?;

        // Credentials-included: session cookie jde s každým requestem,
        // cookies nastavené backendem zůstávají v jaru
        let jar = Arc::new(Jar::default());
        if let Some(session) = &config.session {
            jar.add_cookie_str(session, &url);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .cookie_provider(jar)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url: config.backend_url.clone(),
            client,
        })
    }

    /// Univerzální GET request
    pub async fn get<T>(&self, path: &str) -> Result<T, FetchError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = self.send(path).await?;
        response.json::<T>().await.map_err(FetchError::from)
    }

    /// GET bez čtení těla, jen kontrola statusu
    pub async fn get_ok(&self, path: &str) -> Result<(), FetchError> {
        self.send(path).await.map(drop)
    }

    async fn send(&self, path: &str) -> Result<Response, FetchError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        Self::check_status(response).await
    }

    async fn check_status(response: Response) -> Result<Response, FetchError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error response".to_string());
        Err(FetchError::http(status.as_u16(), error_text.trim()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_rejects_invalid_url() {
        let config = Config::new("not a url", Duration::from_secs(1), None);
        assert!(BackendClient::new(&config).is_err());
    }

    #[test]
    fn test_keeps_trimmed_base_url() {
        let config = Config::new("http://127.0.0.1:9/", Duration::from_secs(1), Some("sid".into()));
        let client = BackendClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9");
    }
}
