//! Price API configuration from the process environment

use std::env;

use super::CryptoError;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "COIN_MARKET_API_KEY";

/// Environment variable overriding the API host
pub const BASE_URL_ENV: &str = "COIN_MARKET_BASE_URL";

/// Default API host
pub const DEFAULT_BASE_URL: &str = "https://pro-api.coinmarketcap.com";

#[derive(Debug, Clone)]
pub struct CryptoConfig {
    pub api_key: String,
    pub base_url: String,
}

impl CryptoConfig {
    /// Create a config; an empty key is rejected
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self, CryptoError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CryptoError::MissingApiKey(API_KEY_ENV));
        }
        Ok(Self {
            api_key,
            base_url: base_url.into(),
        })
    }

    /// Read `COIN_MARKET_API_KEY` and optional `COIN_MARKET_BASE_URL`
    pub fn from_env() -> Result<Self, CryptoError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CryptoError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV).ok_or(CryptoError::MissingApiKey(API_KEY_ENV))?;
        let base_url = lookup(BASE_URL_ENV)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self::new(api_key, base_url)
    }
}
