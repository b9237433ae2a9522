use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct GeneratorEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> GeneratorEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("🚀 Starting page generation");

        // Extract
        let lookup = self.pipeline.extract().await?;
        match &lookup.query {
            Some(name) => tracing::info!("📥 Fetched {} animals for '{}'", lookup.animals.len(), name),
            None => tracing::info!("📥 Loaded {} animals", lookup.animals.len()),
        }

        // Transform
        let page = self.pipeline.transform(lookup).await?;
        if page.found {
            tracing::info!("🧩 Rendered {} animal cards", page.animal_count);
        } else {
            tracing::info!("🧩 No animal cards rendered");
        }

        // Load
        let output_path = self.pipeline.load(page).await?;
        tracing::info!("📁 Output saved to: {}", output_path);

        Ok(output_path)
    }
}
