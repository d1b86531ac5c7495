//! HTTP client for the elmosyar backend.

pub mod api;
pub mod config;
pub mod error;
pub mod http_utils;

pub use config::ApiConfig;
pub use error::ApiError;
pub use http_utils::{
    client::ApiClient,
    token_store::{MemoryTokenStore, TokenStore, Tokens},
};
