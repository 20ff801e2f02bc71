use crate::domain::{ApiResponse, ResolvedOptions, RestMethod, Result};
use async_trait::async_trait;
use url::Url;

#[async_trait]
pub trait HttpClientPort: Send + Sync {
    /// Send the request and return the response regardless of its status.
    /// Network-level faults surface as `Transport` or `Timeout` errors.
    async fn request(
        &self,
        method: RestMethod,
        url: &Url,
        options: &ResolvedOptions,
    ) -> Result<ApiResponse>;
}
