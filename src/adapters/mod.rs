pub mod config;
pub mod reqwest_client;

pub use config::{ConfigProvider, RestApiConfig};
pub use reqwest_client::ReqwestHttpClient;
