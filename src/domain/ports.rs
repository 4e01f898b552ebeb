use crate::domain::model::{LoadReport, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn exists(&self, path: &str) -> impl std::future::Future<Output = Result<bool>> + Send;
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn create_dir_all(&self, path: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Produces the raw word list, downloading it into the cache if needed.
#[async_trait]
pub trait WordSource: Send + Sync {
    async fn fetch_or_load(&self, url: &str, cache_path: &str) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn word_list_url(&self) -> &str;
    fn output_path(&self) -> &str;
    fn cache_path(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<String>>;
    async fn transform(&self, words: Vec<String>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<LoadReport>;
}
