#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::http::ApiSettings;
use crate::adapters::retry::RetryPolicy;
use crate::core::ConfigProvider;
use crate::utils::error::{AnimalsError, Result};
use crate::utils::validation::{self, Validate};
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_TEMPLATE_PATH: &str = "animals_template.html";
pub const DEFAULT_OUTPUT_PATH: &str = "animals.html";
pub const DEFAULT_DATA_FILE: &str = "animals_data.json";

/// 載入目前目錄（或其上層）的 `.env`，已存在的環境變數不會被覆蓋
pub fn load_dotenv() -> bool {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!("Loaded environment from {}", path.display());
            true
        }
        Err(e) if e.not_found() => {
            tracing::debug!("No .env file found, using the process environment");
            false
        }
        Err(e) => {
            tracing::warn!("⚠️ Ignoring unreadable .env file: {}", e);
            false
        }
    }
}

/// Loads a specific env file, same rules as [`load_dotenv`].
pub fn load_env_file<P: AsRef<Path>>(path: P) -> bool {
    match dotenvy::from_path(path.as_ref()) {
        Ok(()) => {
            tracing::debug!("Loaded environment from {}", path.as_ref().display());
            true
        }
        Err(e) => {
            tracing::debug!("Skipping env file {}: {}", path.as_ref().display(), e);
            false
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SourceKind {
    /// Query the remote animal service by name
    #[default]
    Api,
    /// Read animals from a local JSON file
    File,
}

impl FromStr for SourceKind {
    type Err = AnimalsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "api" => Ok(SourceKind::Api),
            "file" => Ok(SourceKind::File),
            other => Err(AnimalsError::InvalidConfigValueError {
                field: "source.type".to_string(),
                value: other.to_string(),
                reason: "Unsupported source. Valid sources: api, file".to_string(),
            }),
        }
    }
}

/// 合併 CLI 與設定檔後的最終設定，建構時一次傳入各元件
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub source: SourceKind,
    pub api: ApiSettings,
    pub data_file: String,
    pub template_path: String,
    pub output_path: String,
    pub retry: Option<RetryPolicy>,
    pub escape_html: bool,
    pub name: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            api: ApiSettings::default(),
            data_file: DEFAULT_DATA_FILE.to_string(),
            template_path: DEFAULT_TEMPLATE_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            retry: None,
            escape_html: false,
            name: None,
        }
    }
}

impl ConfigProvider for AppConfig {
    fn template_path(&self) -> &str {
        &self.template_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn escape_html(&self) -> bool {
        self.escape_html
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("template", &self.template_path)?;
        validation::validate_path("output", &self.output_path)?;

        match self.source {
            SourceKind::Api => {
                validation::validate_url("source.base_url", &self.api.base_url)?;
                let api_key = validation::validate_required_field("API_KEY", &self.api.api_key)?;
                validation::validate_non_empty_string("API_KEY", api_key)?;
            }
            SourceKind::File => {
                validation::validate_path("source.data_file", &self.data_file)?;
            }
        }

        if let Some(policy) = &self.retry {
            validation::validate_positive_number("retry.max_attempts", policy.max_attempts, 1)?;
            validation::validate_non_empty_string("retry.default_animal", &policy.default_animal)?;
        }

        Ok(())
    }
}
