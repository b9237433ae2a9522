pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{
    ApiSettings, ApiSource, FileSource, FixedName, LocalStorage, PromptedSource, RetryPolicy,
    RetryingSource, StdinPrompt,
};
pub use config::{toml_config::TomlConfig, AppConfig, SourceKind};
pub use core::{engine::GeneratorEngine, pipeline::PagePipeline};
pub use utils::error::{AnimalsError, Result};
