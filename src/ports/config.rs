use async_trait::async_trait;

/// Parameter keys the dispatcher reads on every call.
pub const USERNAME_KEY: &str = "connect_rest_api.username";
pub const PASSWORD_KEY: &str = "connect_rest_api.password";

/// Port for resolving configuration parameters
#[async_trait]
pub trait ConfigPort: Send + Sync {
    /// Look up a configuration value by key
    ///
    /// Returns None if the key is not populated
    async fn get(&self, key: &str) -> Option<String>;
}
