use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of the raw daily-menu feed.
#[async_trait]
pub trait MenuSource: Send + Sync {
    async fn fetch_raw(&self) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn image_base_url(&self) -> &str;
    fn placeholder_image_url(&self) -> &str;
}
