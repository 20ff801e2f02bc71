use std::collections::HashMap;
use std::env;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{RestError, Result};
use crate::ports::config::{ConfigPort, PASSWORD_KEY, USERNAME_KEY};

pub const USERNAME_ENV: &str = "CONNECT_REST_API_USERNAME";
pub const PASSWORD_ENV: &str = "CONNECT_REST_API_PASSWORD";

/// REST API credentials as loaded at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestApiConfig {
    pub username: String,
    pub password: String,
}

impl RestApiConfig {
    /// Read the configuration from the environment. Absent variables come
    /// back as empty strings and are caught by `validate`.
    pub fn from_env() -> Self {
        Self {
            username: env::var(USERNAME_ENV).unwrap_or_default(),
            password: env::var(PASSWORD_ENV).unwrap_or_default(),
        }
    }

    /// Both fields are required and non-empty. Run once at startup.
    pub fn validate(&self) -> Result<()> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(RestError::CredentialsNotConfigured);
        }
        Ok(())
    }
}

/// Parameter-bag adapter exposing the loaded configuration to the dispatcher.
pub struct ConfigProvider {
    params: HashMap<String, String>,
}

impl ConfigProvider {
    pub fn new(config: RestApiConfig) -> Self {
        let mut params = HashMap::new();
        params.insert(USERNAME_KEY.to_string(), config.username);
        params.insert(PASSWORD_KEY.to_string(), config.password);
        Self { params }
    }

    pub fn from_env() -> Self {
        Self::new(RestApiConfig::from_env())
    }
}

#[async_trait]
impl ConfigPort for ConfigProvider {
    async fn get(&self, key: &str) -> Option<String> {
        let value = self.params.get(key).cloned();
        if value.is_none() {
            log::debug!("no configuration parameter for key {}", key);
        }
        value
    }
}
