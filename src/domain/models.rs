pub use http::StatusCode;
use std::collections::HashMap;
use std::time::Duration;

use super::errors::{RestError, Result};

pub const SUPPORTED_METHODS: [&str; 7] =
    ["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS"];

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl RestMethod {
    pub fn as_str(&self) -> &str {
        match self {
            RestMethod::Get => "GET",
            RestMethod::Post => "POST",
            RestMethod::Put => "PUT",
            RestMethod::Delete => "DELETE",
            RestMethod::Patch => "PATCH",
            RestMethod::Head => "HEAD",
            RestMethod::Options => "OPTIONS",
        }
    }

    /// Case-insensitive, whitespace-tolerant parse against the supported set.
    pub fn parse(method: &str) -> Result<Self> {
        match method.trim().to_uppercase().as_str() {
            "GET" => Ok(RestMethod::Get),
            "POST" => Ok(RestMethod::Post),
            "PUT" => Ok(RestMethod::Put),
            "DELETE" => Ok(RestMethod::Delete),
            "PATCH" => Ok(RestMethod::Patch),
            "HEAD" => Ok(RestMethod::Head),
            "OPTIONS" => Ok(RestMethod::Options),
            other => Err(RestError::UnsupportedMethod(other.to_string())),
        }
    }

    /// Methods that carry a JSON body when request data is supplied.
    pub fn takes_body(&self) -> bool {
        matches!(self, RestMethod::Post | RestMethod::Put | RestMethod::Patch)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }

    pub fn to_basic_auth(&self) -> String {
        use base64::Engine;
        let credentials = format!("{}:{}", self.username, self.password);
        format!("Basic {}", base64::prelude::BASE64_STANDARD.encode(credentials))
    }
}

/// Per-request overrides supplied by the caller. A `None` field falls back
/// to the dispatcher default; a `Some` field replaces it wholesale.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub auth: Option<Credentials>,
    pub headers: Option<HashMap<String, String>>,
    pub timeout: Option<Duration>,
    pub body: Option<Vec<u8>>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auth(mut self, auth: Credentials) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

/// Fully-merged option set handed to the HTTP client port.
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    pub auth: Credentials,
    pub headers: HashMap<String, String>,
    pub timeout: Duration,
    pub body: Option<Vec<u8>>,
}

impl ResolvedOptions {
    /// Layer caller overrides on top of the defaults. Shallow per-key merge,
    /// caller values win; the body passes through untouched here.
    pub fn merge(credentials: Credentials, options: RequestOptions) -> Self {
        Self {
            auth: options.auth.unwrap_or(credentials),
            headers: options.headers.unwrap_or_else(default_json_headers),
            timeout: options.timeout.unwrap_or(DEFAULT_TIMEOUT),
            body: options.body,
        }
    }
}

pub fn default_json_headers() -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers.insert("Accept".to_string(), "application/json".to_string());
    headers
}

#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| RestError::Serialization(e.to_string()))
    }

    /// Turn a non-success response into an error, for callers that want
    /// HTTP-level failures raised instead of inspected.
    pub fn error_for_status(self) -> Result<Self> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(RestError::Status {
                status: self.status.as_u16(),
                message: self.status.canonical_reason().unwrap_or("").to_string(),
            })
        }
    }
}
