use animals_web::config;
use animals_web::core::{AnimalSource, NamePrompt};
use animals_web::utils::error::ErrorSeverity;
use animals_web::utils::{logger, validation::Validate};
use animals_web::{
    AnimalsError, ApiSource, AppConfig, CliConfig, FileSource, FixedName, GeneratorEngine,
    LocalStorage, PagePipeline, PromptedSource, RetryingSource, SourceKind, StdinPrompt,
    TomlConfig,
};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting animals-web");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let file_config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            }
        }
        None => TomlConfig::default(),
    };

    // API 金鑰只在啟動時讀取一次，.env 先載入
    config::load_dotenv();
    let config = match cli.resolve(&file_config, std::env::var("API_KEY").ok()) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let result = match config.source {
        SourceKind::File => run(FileSource::new(config.data_file.clone()), config).await,
        SourceKind::Api => {
            let api = ApiSource::new(config.api.clone());
            let prompt: Box<dyn NamePrompt> = match &config.name {
                Some(name) => Box::new(FixedName::new(name)),
                None => Box::new(StdinPrompt::new()),
            };

            match config.retry.clone() {
                Some(policy) => run(RetryingSource::new(api, prompt, policy), config).await,
                None => run(PromptedSource::new(api, prompt), config).await,
            }
        }
    };

    match result {
        Ok(output_path) => {
            println!("✅ Website was successfully generated to the file {}", output_path);
        }
        Err(e) => fail(&e),
    }

    Ok(())
}

async fn run<A: AnimalSource>(source: A, config: AppConfig) -> animals_web::Result<String> {
    let storage = LocalStorage::new(".".to_string());
    let pipeline = PagePipeline::new(source, storage, config);
    GeneratorEngine::new(pipeline).run().await
}

fn fail(e: &AnimalsError) -> ! {
    tracing::error!(
        "❌ Page generation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
