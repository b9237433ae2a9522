use animals_web::{
    ApiSettings, ApiSource, AppConfig, FileSource, FixedName, GeneratorEngine, LocalStorage,
    PagePipeline, PromptedSource, RetryPolicy, RetryingSource, SourceKind,
};
use anyhow::Result;
use httpmock::prelude::*;
use tempfile::TempDir;

const TEMPLATE: &str = "<html>\n<body>\n<ul class=\"cards\">\n__REPLACE_ANIMALS_INFO__</ul>\n</body>\n</html>\n";

fn workspace() -> Result<(TempDir, LocalStorage)> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("animals_template.html"), TEMPLATE)?;
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    Ok((temp_dir, storage))
}

fn api_config(server: &MockServer) -> AppConfig {
    AppConfig {
        source: SourceKind::Api,
        api: ApiSettings {
            base_url: server.url("/v1/animals"),
            api_key: Some("integration-key".to_string()),
            timeout_seconds: Some(5),
        },
        ..AppConfig::default()
    }
}

fn read_output(temp_dir: &TempDir) -> Result<String> {
    Ok(std::fs::read_to_string(
        temp_dir.path().join("animals.html"),
    )?)
}

#[tokio::test]
async fn test_end_to_end_api_lookup() -> Result<()> {
    let (temp_dir, storage) = workspace()?;

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/animals")
            .query_param("name", "fox")
            .header("x-api-key", "integration-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {
                    "name": "Fox",
                    "characteristics": {"diet": "Omnivore"},
                    "locations": ["Europe", "Asia"]
                },
                {
                    "name": "Fennec Fox",
                    "characteristics": {
                        "type": "Mammal",
                        "top_speed": "20 mph",
                        "color": ""
                    },
                    "locations": []
                }
            ]));
    });

    let config = api_config(&server);
    let source = PromptedSource::new(ApiSource::new(config.api.clone()), FixedName::new("  FOX "));
    let engine = GeneratorEngine::new(PagePipeline::new(source, storage, config));

    let output_path = engine.run().await?;
    api_mock.assert();
    assert_eq!(output_path, "animals.html");

    let html = read_output(&temp_dir)?;
    assert!(html.starts_with("<html>\n<body>\n<ul class=\"cards\">\n    <li class=\"cards__item\">"));
    assert!(html.ends_with("    </li>\n</ul>\n</body>\n</html>\n"));
    assert_eq!(html.matches("<li class=\"cards__item\">").count(), 2);

    assert!(html.contains("<div class=\"card__title\">Fox</div>"));
    assert!(html.contains("<strong>Diet</strong>: Omnivore"));
    assert!(html.contains("<strong>Location</strong>: Europe"));
    assert!(!html.contains("Asia"));

    assert!(html.contains("<strong>Type</strong>: Mammal"));
    assert!(html.contains("<strong>Speed</strong>: 20 mph"));
    assert!(!html.contains("<strong>Color</strong>"));
    assert!(!html.contains("__REPLACE_ANIMALS_INFO__"));
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_not_found() -> Result<()> {
    let (temp_dir, storage) = workspace()?;

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/animals")
            .query_param("name", "dragon");
        then.status(200).json_body(serde_json::json!([]));
    });

    let config = api_config(&server);
    let source = PromptedSource::new(ApiSource::new(config.api.clone()), FixedName::new("Dragon"));
    GeneratorEngine::new(PagePipeline::new(source, storage, config))
        .run()
        .await?;

    api_mock.assert();
    let html = read_output(&temp_dir)?;
    assert!(html.contains("<ul class=\"cards\">\n<h2>The animal \"dragon\" does not exist.</h2></ul>"));
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_api_failure_is_not_fatal() -> Result<()> {
    let (temp_dir, storage) = workspace()?;

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/v1/animals");
        then.status(500);
    });

    let config = api_config(&server);
    let source = PromptedSource::new(ApiSource::new(config.api.clone()), FixedName::new("cat"));
    let result = GeneratorEngine::new(PagePipeline::new(source, storage, config))
        .run()
        .await;

    assert!(result.is_ok());
    api_mock.assert();
    assert!(read_output(&temp_dir)?.contains("The animal \"cat\" does not exist."));
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_retry_fallback() -> Result<()> {
    let (temp_dir, storage) = workspace()?;

    let server = MockServer::start();
    let missing_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/animals")
            .query_param("name", "yeti");
        then.status(200).json_body(serde_json::json!([]));
    });
    let fallback_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/animals")
            .query_param("name", "owl");
        then.status(200)
            .json_body(serde_json::json!([{"name": "Barn Owl", "characteristics": {"diet": "Carnivore"}}]));
    });

    let config = api_config(&server);
    let source = RetryingSource::new(
        ApiSource::new(config.api.clone()),
        FixedName::new("yeti"),
        RetryPolicy {
            max_attempts: 3,
            default_animal: "owl".to_string(),
        },
    );
    GeneratorEngine::new(PagePipeline::new(source, storage, config))
        .run()
        .await?;

    missing_mock.assert_hits(1);
    fallback_mock.assert_hits(1);
    let html = read_output(&temp_dir)?;
    assert!(html.contains("<div class=\"card__title\">Barn Owl</div>"));
    assert!(!html.contains("does not exist"));
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_local_file() -> Result<()> {
    let (temp_dir, storage) = workspace()?;
    let data_path = temp_dir.path().join("animals_data.json");
    std::fs::write(
        &data_path,
        r#"[
            {"name": "American Foxhound", "characteristics": {"diet": "Omnivore", "lifespan": "11 - 13 years"}, "locations": ["North-America"]},
            {"name": "Arctic Fox", "characteristics": {}}
        ]"#,
    )?;

    let config = AppConfig {
        source: SourceKind::File,
        data_file: data_path.to_str().unwrap().to_string(),
        ..AppConfig::default()
    };
    let source = FileSource::new(config.data_file.clone());
    GeneratorEngine::new(PagePipeline::new(source, storage, config))
        .run()
        .await?;

    let html = read_output(&temp_dir)?;
    let first = html.find("American Foxhound").unwrap();
    let second = html.find("Arctic Fox").unwrap();
    assert!(first < second);
    assert!(html.contains("<strong>Life-span</strong>: 11 - 13 years"));
    assert!(html.contains("<strong>Location</strong>: North-America"));
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_empty_local_file() -> Result<()> {
    let (temp_dir, storage) = workspace()?;
    let data_path = temp_dir.path().join("empty.json");
    std::fs::write(&data_path, "[]")?;

    let config = AppConfig {
        source: SourceKind::File,
        data_file: data_path.to_str().unwrap().to_string(),
        ..AppConfig::default()
    };
    GeneratorEngine::new(PagePipeline::new(
        FileSource::new(data_path),
        storage,
        config,
    ))
    .run()
    .await?;

    let html = read_output(&temp_dir)?;
    assert_eq!(html, TEMPLATE.replace("__REPLACE_ANIMALS_INFO__", ""));
    Ok(())
}

#[tokio::test]
async fn test_missing_data_file_fails_run() -> Result<()> {
    let (temp_dir, storage) = workspace()?;
    let config = AppConfig {
        source: SourceKind::File,
        ..AppConfig::default()
    };

    let result = GeneratorEngine::new(PagePipeline::new(
        FileSource::new(temp_dir.path().join("missing.json")),
        storage,
        config,
    ))
    .run()
    .await;

    assert!(result.is_err());
    assert!(!temp_dir.path().join("animals.html").exists());
    Ok(())
}
