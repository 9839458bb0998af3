//! HTTP client for the cryptocurrency price API
//!
//! One request per call: no timeout, no retry. Non-success statuses surface as
//! the underlying `reqwest::Error`.

use reqwest::Client;
use serde_json::Value;

use super::{CryptoConfig, CryptoError};
use crate::error::{ensure_positive, CalcError};

const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";
const LISTINGS_PATH: &str = "/v1/cryptocurrency/listings/latest";
const CONVERSION_PATH: &str = "/v2/tools/price-conversion";

#[derive(Debug, Clone)]
pub struct CryptoClient {
    client: Client,
    config: CryptoConfig,
}

impl CryptoClient {
    pub fn new(config: CryptoConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: CryptoConfig) -> Self {
        Self { client, config }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Latest listings, returned as the raw JSON payload
    pub async fn latest_listings(&self) -> Result<Value, CryptoError> {
        self.get_json(LISTINGS_PATH, &[])
            .await
            .inspect_err(|err| log::error!("Fetching latest listings failed: {}", err))
    }

    /// Convert `amount` of `from` into `to`
    ///
    /// Returns `data[0].quote[to].price` from the conversion response.
    pub async fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, CryptoError> {
        ensure_positive("amount", amount)?;
        ensure_symbol("from_currency", from)?;
        ensure_symbol("to_currency", to)?;

        log::info!("Converting {} {} to {}", amount, from, to);

        let amount_param = amount.to_string();
        let body = self
            .get_json(
                CONVERSION_PATH,
                &[("amount", amount_param.as_str()), ("symbol", from), ("convert", to)],
            )
            .await
            .inspect_err(|err| log::error!("Price conversion request failed: {}", err))?;

        extract_price(&body, to)
    }

    async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, CryptoError> {
        let response = self
            .client
            .get(self.url(path))
            .header(API_KEY_HEADER, &self.config.api_key)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<Value>().await?)
    }
}

fn ensure_symbol(field: &'static str, symbol: &str) -> Result<(), CalcError> {
    if symbol.trim().is_empty() {
        Err(CalcError::Missing {
            field,
            reason: "currency symbol must not be empty",
        })
    } else {
        Ok(())
    }
}

/// Pull `data[0].quote[to].price` out of a conversion payload
fn extract_price(body: &Value, to: &str) -> Result<f64, CryptoError> {
    let first = body
        .get("data")
        .and_then(Value::as_array)
        .and_then(|entries| entries.first())
        .ok_or_else(|| CryptoError::MissingData("No conversion data found.".to_string()))?;

    first
        .get("quote")
        .and_then(|quote| quote.get(to))
        .and_then(|entry| entry.get("price"))
        .and_then(Value::as_f64)
        .ok_or_else(|| CryptoError::MissingData(format!("Conversion data for {} not found in response.", to)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_price() {
        let body = json!({
            "data": [{ "symbol": "BTC", "quote": { "USD": { "price": 64250.5 } } }]
        });
        assert_eq!(extract_price(&body, "USD").unwrap(), 64250.5);
    }

    #[test]
    fn test_extract_price_empty_data() {
        let err = extract_price(&json!({ "data": [] }), "USD").unwrap_err();
        assert_eq!(err.to_string(), "No conversion data found.");
    }

    #[test]
    fn test_extract_price_missing_quote() {
        let body = json!({ "data": [{ "quote": { "EUR": { "price": 1.0 } } }] });
        let err = extract_price(&body, "USD").unwrap_err();
        assert_eq!(err.to_string(), "Conversion data for USD not found in response.");
    }

    #[test]
    fn test_url_join() {
        let config = CryptoConfig::new("key", "http://localhost:8080/").unwrap();
        let client = CryptoClient::new(config);
        assert_eq!(client.url(CONVERSION_PATH), "http://localhost:8080/v2/tools/price-conversion");
    }
}
