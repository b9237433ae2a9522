use crate::adapters::http::ApiSettings;
use crate::adapters::retry::{RetryPolicy, DEFAULT_ANIMAL, DEFAULT_MAX_ATTEMPTS};
use crate::config::toml_config::TomlConfig;
use crate::config::{
    AppConfig, SourceKind, DEFAULT_DATA_FILE, DEFAULT_OUTPUT_PATH, DEFAULT_TEMPLATE_PATH,
};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "animals-web")]
#[command(about = "Generate an HTML page of animal profiles")]
pub struct CliConfig {
    /// Where animal data comes from
    #[arg(long, value_enum)]
    pub source: Option<SourceKind>,

    /// Animal to look up; prompts on stdin when omitted
    #[arg(short, long)]
    pub name: Option<String>,

    /// JSON file used by the file source
    #[arg(long)]
    pub data_file: Option<String>,

    /// HTML template containing the __REPLACE_ANIMALS_INFO__ marker
    #[arg(short, long)]
    pub template: Option<String>,

    /// Output HTML file
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(long)]
    pub base_url: Option<String>,

    /// API Ninjas key; falls back to the API_KEY environment variable
    #[arg(long)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Re-prompt when an animal is not found, then fall back to a default animal
    #[arg(long)]
    pub retry: bool,

    #[arg(long)]
    pub max_attempts: Option<usize>,

    #[arg(long)]
    pub default_animal: Option<String>,

    /// Escape HTML special characters in animal data
    #[arg(long)]
    pub escape_html: bool,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    /// 命令列參數優先，其次設定檔，最後才是環境變數與預設值
    pub fn resolve(&self, file: &TomlConfig, env_api_key: Option<String>) -> Result<AppConfig> {
        let source_section = file.source();
        let retry_section = file.retry();
        let render_section = file.render();
        let output_section = file.output();

        let source = match (self.source, source_section.r#type.as_deref()) {
            (Some(kind), _) => kind,
            (None, Some(kind)) => kind.parse()?,
            (None, None) => SourceKind::default(),
        };

        let api = ApiSettings {
            base_url: self
                .base_url
                .clone()
                .or(source_section.base_url)
                .unwrap_or_else(|| ApiSettings::default().base_url),
            api_key: self.api_key.clone().or(source_section.api_key).or(env_api_key),
            timeout_seconds: self.timeout.or(source_section.timeout_seconds),
        };

        let retry_enabled = self.retry || retry_section.enabled.unwrap_or(false);
        let retry = retry_enabled.then(|| RetryPolicy {
            max_attempts: self
                .max_attempts
                .or(retry_section.max_attempts)
                .unwrap_or(DEFAULT_MAX_ATTEMPTS),
            default_animal: self
                .default_animal
                .clone()
                .or(retry_section.default_animal)
                .unwrap_or_else(|| DEFAULT_ANIMAL.to_string()),
        });

        Ok(AppConfig {
            source,
            api,
            data_file: self
                .data_file
                .clone()
                .or(source_section.data_file)
                .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string()),
            template_path: self
                .template
                .clone()
                .or(render_section.template)
                .unwrap_or_else(|| DEFAULT_TEMPLATE_PATH.to_string()),
            output_path: self
                .output
                .clone()
                .or(output_section.path)
                .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string()),
            retry,
            escape_html: self.escape_html || render_section.escape_html.unwrap_or(false),
            name: self.name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from([
            "animals-web",
            "--source",
            "file",
            "--data-file",
            "zoo.json",
            "-o",
            "out.html",
            "--escape-html",
        ]);

        assert_eq!(cli.source, Some(SourceKind::File));
        assert_eq!(cli.data_file.as_deref(), Some("zoo.json"));
        assert_eq!(cli.output.as_deref(), Some("out.html"));
        assert!(cli.escape_html);
    }

    #[test]
    fn test_resolve_defaults() {
        let config = CliConfig::default()
            .resolve(&TomlConfig::default(), Some("env-key".to_string()))
            .unwrap();

        assert_eq!(config.source, SourceKind::Api);
        assert_eq!(config.api.base_url, "https://api.api-ninjas.com/v1/animals");
        assert_eq!(config.api.api_key.as_deref(), Some("env-key"));
        assert_eq!(config.template_path, "animals_template.html");
        assert_eq!(config.output_path, "animals.html");
        assert_eq!(config.data_file, "animals_data.json");
        assert!(config.retry.is_none());
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = TomlConfig::from_toml_str(
            r#"
[source]
type = "file"
api_key = "file-key"

[retry]
enabled = true
max_attempts = 5

[output]
path = "from-file.html"
"#,
        )
        .unwrap();

        let cli = CliConfig {
            source: Some(SourceKind::Api),
            output: Some("from-cli.html".to_string()),
            default_animal: Some("owl".to_string()),
            ..CliConfig::default()
        };

        let config = cli.resolve(&file, Some("env-key".to_string())).unwrap();

        assert_eq!(config.source, SourceKind::Api);
        assert_eq!(config.api.api_key.as_deref(), Some("file-key"));
        assert_eq!(config.output_path, "from-cli.html");
        assert_eq!(
            config.retry,
            Some(RetryPolicy {
                max_attempts: 5,
                default_animal: "owl".to_string(),
            })
        );
    }

    #[test]
    fn test_bad_source_type_in_file() {
        let file = TomlConfig::from_toml_str("[source]\ntype = \"carrier-pigeon\"\n").unwrap();
        assert!(CliConfig::default().resolve(&file, None).is_err());
    }
}
