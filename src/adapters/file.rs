use crate::core::{AnimalRecord, AnimalSource, Lookup};
use crate::utils::error::Result;
use std::path::PathBuf;

/// 從本地 JSON 檔案讀取動物資料；檔案不存在或格式錯誤都是致命錯誤
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl AnimalSource for FileSource {
    async fn fetch(&self) -> Result<Lookup> {
        tracing::debug!("Reading animal data from: {}", self.path.display());

        let content = tokio::fs::read_to_string(&self.path).await?;
        let animals: Vec<AnimalRecord> = serde_json::from_str(&content)?;

        Ok(Lookup::unnamed(animals))
    }
}
