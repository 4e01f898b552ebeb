use crate::domain::ports::{Storage, WordSource};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Downloads the word list once and serves it from `cache` afterwards.
pub struct CachedHttpSource<S: Storage> {
    cache: S,
    client: Client,
}

impl<S: Storage> CachedHttpSource<S> {
    pub fn new(cache: S) -> Self {
        Self {
            cache,
            client: Client::new(),
        }
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!("Making request to: {}", url);
        let response = self.client.get(url).send().await?;
        tracing::debug!("Response status: {}", response.status());

        let body = response.error_for_status()?.bytes().await?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl<S: Storage> WordSource for CachedHttpSource<S> {
    async fn fetch_or_load(&self, url: &str, cache_path: &str) -> Result<String> {
        let data = if self.cache.exists(cache_path).await? {
            tracing::info!("Using cached word list at {}", cache_path);
            self.cache.read_file(cache_path).await?
        } else {
            tracing::info!("Downloading word list from {}", url);
            let data = self.download(url).await?;
            self.cache.write_file(cache_path, &data).await?;
            tracing::info!("Cached {} bytes at {}", data.len(), cache_path);
            data
        };

        Ok(String::from_utf8(data)?)
    }
}
