//! Cryptocurrency price lookups over a third-party REST API

mod config;
mod client;

pub use config::{CryptoConfig, API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use client::CryptoClient;

use crate::error::CalcError;

#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    #[error("API key is missing; set {0} in the environment")]
    MissingApiKey(&'static str),
    #[error(transparent)]
    Validation(#[from] CalcError),
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Response body lacks the expected fields
    #[error("{0}")]
    MissingData(String),
}
