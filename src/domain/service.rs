use std::sync::Arc;

use serde_json::Value;
use tracing::debug;
use url::Url;

use super::{
    ApiResponse, Credentials, RequestOptions, ResolvedOptions, RestError, RestMethod, Result,
};
use crate::ports::config::{PASSWORD_KEY, USERNAME_KEY};
use crate::ports::{ConfigPort, HttpClientPort};

#[derive(Clone)]
pub struct RestDispatcher {
    config: Arc<dyn ConfigPort>,
    http_client: Arc<dyn HttpClientPort>,
}

impl RestDispatcher {
    pub fn new(config: Arc<dyn ConfigPort>, http_client: Arc<dyn HttpClientPort>) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Validate the request, layer the defaults (Basic Auth, JSON headers,
    /// 30 s timeout) under the caller's options and hand the merged request
    /// to the HTTP client. The response comes back verbatim; transport and
    /// HTTP failures propagate untouched.
    pub async fn dispatch(
        &self,
        method: &str,
        url: &str,
        data: Option<&Value>,
        options: RequestOptions,
    ) -> Result<ApiResponse> {
        let method = RestMethod::parse(method)?;
        let url = parse_url(url)?;
        let credentials = self.resolve_credentials().await?;

        let mut merged = ResolvedOptions::merge(credentials, options);

        // Assigned after the merge so a caller-supplied body option never
        // wins over the request data
        if method.takes_body() {
            if let Some(data) = data {
                merged.body = Some(
                    serde_json::to_vec(data)
                        .map_err(|e| RestError::Serialization(e.to_string()))?,
                );
            }
        }

        debug!("dispatching {} {}", method.as_str(), url);
        self.http_client.request(method, &url, &merged).await
    }

    pub async fn get(&self, url: &str, options: RequestOptions) -> Result<ApiResponse> {
        self.dispatch("GET", url, None, options).await
    }

    pub async fn post(
        &self,
        url: &str,
        data: &Value,
        options: RequestOptions,
    ) -> Result<ApiResponse> {
        self.dispatch("POST", url, Some(data), options).await
    }

    pub async fn put(
        &self,
        url: &str,
        data: &Value,
        options: RequestOptions,
    ) -> Result<ApiResponse> {
        self.dispatch("PUT", url, Some(data), options).await
    }

    pub async fn delete(&self, url: &str, options: RequestOptions) -> Result<ApiResponse> {
        self.dispatch("DELETE", url, None, options).await
    }

    pub async fn patch(
        &self,
        url: &str,
        data: &Value,
        options: RequestOptions,
    ) -> Result<ApiResponse> {
        self.dispatch("PATCH", url, Some(data), options).await
    }

    // Read fresh on every dispatch, never cached
    async fn resolve_credentials(&self) -> Result<Credentials> {
        let username = self.config.get(USERNAME_KEY).await.unwrap_or_default();
        let password = self.config.get(PASSWORD_KEY).await.unwrap_or_default();

        if username.is_empty() || password.is_empty() {
            return Err(RestError::CredentialsNotConfigured);
        }

        Ok(Credentials::new(username, password))
    }
}

fn parse_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|_| RestError::InvalidUrl(url.to_string()))?;
    if !parsed.has_host() {
        return Err(RestError::InvalidUrl(url.to_string()));
    }
    Ok(parsed)
}
