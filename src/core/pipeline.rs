use crate::core::composer::{self, PLACEHOLDER};
use crate::core::serializer::HtmlSerializer;
use crate::core::{AnimalSource, ConfigProvider, Lookup, Pipeline, RenderedPage, Storage};
use crate::utils::error::{AnimalsError, Result};

/// 動物網頁管道：取得資料、套用模板、寫出 HTML
pub struct PagePipeline<A: AnimalSource, S: Storage, C: ConfigProvider> {
    source: A,
    storage: S,
    config: C,
}

impl<A: AnimalSource, S: Storage, C: ConfigProvider> PagePipeline<A, S, C> {
    pub fn new(source: A, storage: S, config: C) -> Self {
        Self {
            source,
            storage,
            config,
        }
    }

    async fn load_template(&self) -> Result<String> {
        let path = self.config.template_path();
        tracing::debug!("Reading template from: {}", path);

        let bytes = self.storage.read_file(path).await?;
        let template = String::from_utf8(bytes).map_err(|e| AnimalsError::TemplateError {
            message: format!("{} is not valid UTF-8: {}", path, e),
        })?;

        if !composer::contains_placeholder(&template) {
            tracing::warn!(
                "⚠️ Template {} has no {} marker, it will be written unchanged",
                path,
                PLACEHOLDER
            );
        }

        Ok(template)
    }
}

#[async_trait::async_trait]
impl<A: AnimalSource, S: Storage, C: ConfigProvider> Pipeline for PagePipeline<A, S, C> {
    async fn extract(&self) -> Result<Lookup> {
        self.source.fetch().await
    }

    async fn transform(&self, lookup: Lookup) -> Result<RenderedPage> {
        let template = self.load_template().await?;

        let serializer = HtmlSerializer::with_escaping(self.config.escape_html());

        // 具名查詢沒有結果時，以訊息取代清單；名稱同樣套用跳脫設定
        let fragment = match &lookup.query {
            Some(name) if lookup.is_empty() => {
                tracing::info!("🔎 No animal found for '{}'", name);
                composer::not_found_message(&serializer.text(name))
            }
            _ => serializer.serialize(&lookup.animals),
        };

        Ok(RenderedPage {
            html: composer::compose(&template, &fragment),
            animal_count: lookup.animals.len(),
            found: !lookup.is_empty(),
        })
    }

    async fn load(&self, page: RenderedPage) -> Result<String> {
        let output_path = self.config.output_path();

        tracing::debug!(
            "Writing {} bytes of HTML to {}",
            page.html.len(),
            output_path
        );
        self.storage
            .write_file(output_path, page.html.as_bytes())
            .await?;

        Ok(output_path.to_string())
    }
}
