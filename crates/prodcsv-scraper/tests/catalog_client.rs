//! Integration tests for `CatalogClient::fetch_catalog`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no
//! real network traffic is made.

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use prodcsv_core::{Lang, ProductRecord};
use prodcsv_scraper::{parse_catalog, CatalogClient, ScraperError};

/// Builds a `CatalogClient` suitable for tests: 5-second timeout, descriptive UA.
fn test_client() -> CatalogClient {
    CatalogClient::new(5, "prodcsv-test/0.1").expect("failed to build test CatalogClient")
}

fn catalog_url(server: &MockServer) -> String {
    format!("{}/product.json", server.uri())
}

#[tokio::test]
async fn fetch_catalog_returns_decoded_document() {
    let server = MockServer::start().await;
    let body = json!({"allVariants": [{"attributesRaw": []}]});

    Mock::given(method("GET"))
        .and(path("/product.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_client().fetch_catalog(&catalog_url(&server)).await;

    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    assert_eq!(result.unwrap(), body);
}

#[tokio::test]
async fn fetch_catalog_sends_configured_user_agent_and_accept() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/product.json"))
        .and(header("user-agent", "prodcsv-test/0.1"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_client().fetch_catalog(&catalog_url(&server)).await;
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
}

#[tokio::test]
async fn fetch_catalog_not_found_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/product.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = test_client()
        .fetch_catalog(&catalog_url(&server))
        .await
        .unwrap_err();

    assert!(
        matches!(err, ScraperError::UnexpectedStatus { status: 404, ref url } if url.ends_with("/product.json")),
        "expected UnexpectedStatus(404), got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_catalog_server_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/product.json"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = test_client()
        .fetch_catalog(&catalog_url(&server))
        .await
        .unwrap_err();

    assert!(
        matches!(err, ScraperError::UnexpectedStatus { status: 503, .. }),
        "expected UnexpectedStatus(503), got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_catalog_invalid_json_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/product.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = test_client()
        .fetch_catalog(&catalog_url(&server))
        .await
        .unwrap_err();

    assert!(
        matches!(err, ScraperError::Deserialize { ref context, .. } if context.contains("/product.json")),
        "expected Deserialize, got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_catalog_connection_refused_is_http_error() {
    // Bind then drop a listener so the port is known to be closed.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let err = test_client()
        .fetch_catalog(&format!("http://{addr}/product.json"))
        .await
        .unwrap_err();

    assert!(
        matches!(err, ScraperError::Http(_)),
        "expected Http, got: {err:?}"
    );
}

#[tokio::test]
async fn fetched_catalog_parses_into_records() {
    let server = MockServer::start().await;
    let es = json!({
        "sku": {"value": "ABC123"},
        "allergens": {"value": [{"name": "Leche"}]},
        "net_weight": {"value": "0.5"}
    });
    let body = json!({
        "allVariants": [
            {"attributesRaw": [{"name": "custom_attributes", "value": {"es-CR": es.to_string()}}]},
            {"attributesRaw": [{"name": "brand", "value": "Acme"}]}
        ]
    });

    Mock::given(method("GET"))
        .and(path("/product.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let document = test_client()
        .fetch_catalog(&catalog_url(&server))
        .await
        .expect("fetch should succeed");
    let records = parse_catalog(&document, Lang::EsCr).expect("parse should succeed");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].sku, Some(json!("ABC123")));
    assert_eq!(records[0].allergens, vec![json!("Leche")]);
    assert!((records[0].net_weight - 0.5).abs() < f64::EPSILON);
    assert_eq!(records[1], ProductRecord::default());
}
