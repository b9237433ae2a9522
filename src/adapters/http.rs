use crate::core::{AnimalLookup, AnimalRecord};
use crate::utils::error::{AnimalsError, Result};
use reqwest::{Client, StatusCode};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.api-ninjas.com/v1/animals";
pub const API_KEY_HEADER: &str = "X-Api-Key";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout_seconds: None,
        }
    }
}

/// API Ninjas 動物查詢
pub struct ApiSource {
    client: Client,
    settings: ApiSettings,
}

impl ApiSource {
    pub fn new(settings: ApiSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    async fn request(&self, name: &str) -> Result<Vec<AnimalRecord>> {
        let mut request = self
            .client
            .get(&self.settings.base_url)
            .query(&[("name", name)]);

        if let Some(api_key) = &self.settings.api_key {
            request = request.header(API_KEY_HEADER, api_key);
        }

        if let Some(timeout) = self.settings.timeout_seconds {
            request = request.timeout(Duration::from_secs(timeout));
        }

        tracing::debug!(
            "Making API request to: {} (name={})",
            self.settings.base_url,
            name
        );

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status != StatusCode::OK {
            return Err(AnimalsError::ApiStatusError {
                status: status.as_u16(),
            });
        }

        let animals: Vec<AnimalRecord> = response.json().await?;
        Ok(animals)
    }
}

#[async_trait::async_trait]
impl AnimalLookup for ApiSource {
    async fn lookup(&self, name: &str) -> Vec<AnimalRecord> {
        match self.request(name).await {
            Ok(animals) => animals,
            Err(e) => {
                tracing::warn!("⚠️ Lookup for '{}' failed: {}", name, e);
                Vec::new()
            }
        }
    }
}
