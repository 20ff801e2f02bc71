#![cfg(test)]
#![allow(dead_code)]

pub mod stub_api_server;

pub use stub_api_server::StubApiServer;
