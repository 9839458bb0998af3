//! Price client against a mock API server

use anyhow::Result;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fincalc::crypto::{CryptoClient, CryptoConfig, CryptoError};
use fincalc::CalcError;

fn client_for(server: &MockServer) -> CryptoClient {
    let config = CryptoConfig::new("test_api_key", server.uri()).expect("valid config");
    CryptoClient::new(config)
}

#[tokio::test]
async fn test_convert_returns_quoted_price() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/tools/price-conversion"))
        .and(query_param("amount", "2"))
        .and(query_param("symbol", "ETH"))
        .and(query_param("convert", "USD"))
        .and(header("X-CMC_PRO_API_KEY", "test_api_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": { "error_code": 0 },
            "data": [{
                "symbol": "ETH",
                "amount": 2,
                "quote": { "USD": { "price": 6400.25 } }
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let price = client_for(&mock_server).convert(2.0, "ETH", "USD").await?;
    assert_eq!(price, 6400.25);

    Ok(())
}

#[tokio::test]
async fn test_convert_missing_quote_is_data_error() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/tools/price-conversion"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "symbol": "BTC", "quote": { "EUR": { "price": 58000.0 } } }]
        })))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .convert(1.0, "BTC", "GBP")
        .await
        .unwrap_err();
    assert!(matches!(err, CryptoError::MissingData(_)));
    assert_eq!(err.to_string(), "Conversion data for GBP not found in response.");

    Ok(())
}

#[tokio::test]
async fn test_convert_empty_data() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/tools/price-conversion"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .convert(1.0, "NOPE", "USD")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "No conversion data found.");

    Ok(())
}

#[tokio::test]
async fn test_http_error_surfaces_as_transport() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/tools/price-conversion"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status": { "error_code": 1002, "error_message": "API key missing." }
        })))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .convert(1.0, "BTC", "USD")
        .await
        .unwrap_err();
    match err {
        CryptoError::Transport(inner) => {
            assert_eq!(inner.status().map(|s| s.as_u16()), Some(401));
        }
        other => panic!("expected transport error, got {:?}", other),
    }

    Ok(())
}

#[tokio::test]
async fn test_invalid_amount_makes_no_request() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let err = client.convert(0.0, "BTC", "USD").await.unwrap_err();
    assert!(matches!(
        err,
        CryptoError::Validation(CalcError::NonPositive { field: "amount", .. })
    ));

    let err = client.convert(1.0, "", "USD").await.unwrap_err();
    assert!(matches!(
        err,
        CryptoError::Validation(CalcError::Missing { field: "from_currency", .. })
    ));

    Ok(())
}

#[tokio::test]
async fn test_latest_listings_passthrough() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cryptocurrency/listings/latest"))
        .and(header("X-CMC_PRO_API_KEY", "test_api_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "cmc_rank": 1, "symbol": "BTC", "name": "Bitcoin" },
                { "cmc_rank": 2, "symbol": "ETH", "name": "Ethereum" }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let listings = client_for(&mock_server).latest_listings().await?;
    assert_eq!(listings["data"][1]["symbol"], "ETH");

    Ok(())
}

#[tokio::test]
async fn test_latest_listings_server_error_surfaces_as_transport() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cryptocurrency/listings/latest"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).latest_listings().await.unwrap_err();
    match err {
        CryptoError::Transport(inner) => {
            assert_eq!(inner.status().map(|s| s.as_u16()), Some(503));
        }
        other => panic!("expected transport error, got {:?}", other),
    }

    Ok(())
}
