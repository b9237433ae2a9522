use crate::domain::model::{AnimalRecord, Lookup, RenderedPage};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn template_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn escape_html(&self) -> bool;
}

/// Supplies the animals for one run.
#[async_trait]
pub trait AnimalSource: Send + Sync {
    async fn fetch(&self) -> Result<Lookup>;
}

/// Name based lookup against a remote service. Failures yield an empty list.
#[async_trait]
pub trait AnimalLookup: Send + Sync {
    async fn lookup(&self, name: &str) -> Vec<AnimalRecord>;
}

/// 取得動物名稱；`Ok(None)` 代表沒有更多輸入
pub trait NamePrompt: Send + Sync {
    fn read_name(&self) -> Result<Option<String>>;
}

impl<T: NamePrompt + ?Sized> NamePrompt for Box<T> {
    fn read_name(&self) -> Result<Option<String>> {
        (**self).read_name()
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Lookup>;
    async fn transform(&self, lookup: Lookup) -> Result<RenderedPage>;
    async fn load(&self, page: RenderedPage) -> Result<String>;
}
