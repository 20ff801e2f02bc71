use async_trait::async_trait;
use std::collections::HashMap;
use url::Url;

use crate::domain::{ApiResponse, ResolvedOptions, RestError, RestMethod, Result};
use crate::ports::HttpClientPort;

pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClientPort for ReqwestHttpClient {
    async fn request(
        &self,
        method: RestMethod,
        url: &Url,
        options: &ResolvedOptions,
    ) -> Result<ApiResponse> {
        // basic_auth comes after the header map so the merged auth always
        // lands in the outgoing Authorization header
        let mut builder = self
            .client
            .request(to_reqwest_method(method), url.as_str())
            .headers(build_headers(&options.headers))
            .timeout(options.timeout)
            .basic_auth(&options.auth.username, Some(&options.auth.password));

        if let Some(body) = &options.body {
            builder = builder.body(body.clone());
        }

        let http_response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                RestError::Timeout
            } else {
                RestError::Transport(e.to_string())
            }
        })?;

        let status = http_response.status();

        let headers: HashMap<String, String> = http_response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|val| (k.to_string(), val.to_string())))
            .collect();

        let body = http_response
            .bytes()
            .await
            .map_err(|e| RestError::Transport(format!("failed to read response body: {}", e)))?
            .to_vec();

        Ok(ApiResponse::new(status).with_headers(headers).with_body(body))
    }
}

fn to_reqwest_method(method: RestMethod) -> reqwest::Method {
    match method {
        RestMethod::Get => reqwest::Method::GET,
        RestMethod::Post => reqwest::Method::POST,
        RestMethod::Put => reqwest::Method::PUT,
        RestMethod::Delete => reqwest::Method::DELETE,
        RestMethod::Patch => reqwest::Method::PATCH,
        RestMethod::Head => reqwest::Method::HEAD,
        RestMethod::Options => reqwest::Method::OPTIONS,
    }
}

fn build_headers(headers: &HashMap<String, String>) -> reqwest::header::HeaderMap {
    let mut header_map = reqwest::header::HeaderMap::new();

    for (key, value) in headers {
        if let (Ok(name), Ok(val)) = (
            key.parse::<reqwest::header::HeaderName>(),
            value.parse::<reqwest::header::HeaderValue>(),
        ) {
            header_map.insert(name, val);
        }
    }

    header_map
}
