//! REST API connector with HTTP Basic Authentication.
//!
//! [`RestDispatcher`] validates the method and URL, reads credentials from an
//! injected configuration provider, layers default JSON headers and a timeout
//! under caller-supplied options, and delegates the request to an injected
//! HTTP client.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use connect_rest_api::{ConfigProvider, ReqwestHttpClient, RequestOptions, RestDispatcher};
//!
//! # async fn example() -> connect_rest_api::Result<()> {
//! let dispatcher = RestDispatcher::new(
//!     Arc::new(ConfigProvider::from_env()),
//!     Arc::new(ReqwestHttpClient::new()),
//! );
//!
//! let response = dispatcher
//!     .get("https://api.example.com/users", RequestOptions::new())
//!     .await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::{ConfigProvider, ReqwestHttpClient, RestApiConfig};
pub use domain::{
    ApiResponse, Credentials, RequestOptions, ResolvedOptions, RestDispatcher, RestError,
    RestMethod, Result, StatusCode,
};
pub use ports::{ConfigPort, HttpClientPort};
