use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnimalsError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Request failed with status code {status}")]
    ApiStatusError { status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Template error: {message}")]
    TemplateError { message: String },

    #[error("Input error: {message}")]
    InputError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    FileSystem,
    Data,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AnimalsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AnimalsError::ApiError(_) | AnimalsError::ApiStatusError { .. } => {
                ErrorCategory::Network
            }
            AnimalsError::IoError(_) => ErrorCategory::FileSystem,
            AnimalsError::SerializationError(_) | AnimalsError::TemplateError { .. } => {
                ErrorCategory::Data
            }
            AnimalsError::ConfigError { .. }
            | AnimalsError::ConfigValidationError { .. }
            | AnimalsError::InvalidConfigValueError { .. }
            | AnimalsError::MissingConfigError { .. } => ErrorCategory::Configuration,
            AnimalsError::InputError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::FileSystem => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AnimalsError::ApiError(_) => {
                "Check the network connection and the API base URL".to_string()
            }
            AnimalsError::ApiStatusError { status: 401 | 403 } => {
                "Check that API_KEY holds a valid API Ninjas key".to_string()
            }
            AnimalsError::ApiStatusError { .. } => {
                "The animal service rejected the request, try again later".to_string()
            }
            AnimalsError::IoError(_) => {
                "Make sure the template and data files exist and are readable".to_string()
            }
            AnimalsError::SerializationError(_) => {
                "The data file must contain a JSON array of animal objects".to_string()
            }
            AnimalsError::ConfigError { .. }
            | AnimalsError::ConfigValidationError { .. }
            | AnimalsError::InvalidConfigValueError { .. } => {
                "Review the command line flags and the TOML config file".to_string()
            }
            AnimalsError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            AnimalsError::TemplateError { .. } => format!(
                "The template must contain the {} marker",
                crate::core::composer::PLACEHOLDER
            ),
            AnimalsError::InputError { .. } => {
                "Enter an animal name or pass one with --name".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the animal service: {}", self),
            ErrorCategory::FileSystem => format!("File access failed: {}", self),
            ErrorCategory::Data => format!("Could not read animal data: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Input => format!("No usable input: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnimalsError>;
