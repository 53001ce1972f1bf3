//! Integration tests for the Countries API client against a mocked server.

use flagdeck::api::{ApiError, CountryApi, LookupFailure};
use flagdeck::config::AppConfig;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn api_for(server: &MockServer) -> CountryApi {
    let config = AppConfig {
        api_base: server.uri(),
        request_timeout: Duration::from_secs(5),
        ..AppConfig::default()
    };
    CountryApi::new(&config).expect("Failed to build client")
}

fn france_payload(flag_url: &str) -> serde_json::Value {
    serde_json::json!([{
        "name": {"common": "France"},
        "flags": {"png": flag_url, "svg": "https://flagcdn.com/fr.svg"},
        "capital": ["Paris"],
        "region": "Europe",
        "population": 67000000,
        "currencies": {"EUR": {"name": "Euro", "symbol": "€"}}
    }])
}

async fn mount_country(server: &MockServer, name: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/v3.1/name/{name}")))
        .and(query_param("fullText", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_detail_success() {
    let server = MockServer::start().await;
    let flag_url = format!("{}/flags/fr.png", server.uri());
    mount_country(&server, "France", france_payload(&flag_url)).await;

    let detail = api_for(&server)
        .fetch_detail("France")
        .await
        .expect("detail lookup");

    assert_eq!(detail.name, "France");
    assert_eq!(detail.capital.as_deref(), Some("Paris"));
    assert_eq!(detail.continent, "Europe");
    assert_eq!(detail.population, 67_000_000);
    assert_eq!(detail.currency.as_deref(), Some("Euro"));
}

#[tokio::test]
async fn test_fetch_detail_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3.1/name/Atlantis"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "status": 404,
            "message": "Not Found"
        })))
        .mount(&server)
        .await;

    let result = api_for(&server).fetch_detail("Atlantis").await;
    assert!(matches!(result, Err(ApiError::Status { status: 404, .. })));
}

#[tokio::test]
async fn test_fetch_detail_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3.1/name/France"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = api_for(&server).fetch_detail("France").await;
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[tokio::test]
async fn test_fetch_detail_empty_result() {
    let server = MockServer::start().await;
    mount_country(&server, "Nowhere", serde_json::json!([])).await;

    let result = api_for(&server).fetch_detail("Nowhere").await;
    assert!(matches!(result, Err(ApiError::NotFound(name)) if name == "Nowhere"));
}

#[tokio::test]
async fn test_fetch_detail_without_currencies() {
    let server = MockServer::start().await;
    mount_country(
        &server,
        "Antarctica",
        serde_json::json!([{
            "flags": {"png": "https://flagcdn.com/w320/aq.png"},
            "region": "Antarctic",
            "population": 1000,
            "currencies": {}
        }]),
    )
    .await;

    let detail = api_for(&server)
        .fetch_detail("Antarctica")
        .await
        .expect("detail lookup");
    assert_eq!(detail.currency, None);
    assert_eq!(detail.capital, None);
}

#[tokio::test]
async fn test_load_flag_downloads_image() {
    let server = MockServer::start().await;
    let flag_url = format!("{}/flags/fr.png", server.uri());
    mount_country(&server, "France", france_payload(&flag_url)).await;
    Mock::given(method("GET"))
        .and(path("/flags/fr.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(PNG_BYTES.to_vec())
                .insert_header("Content-Type", "image/png"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    assert_eq!(api.flag_url("France").await.expect("flag url"), flag_url);
    assert!(api.load_flag("France").await.is_some());
}

#[tokio::test]
async fn test_load_flag_missing_country_yields_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3.1/name/Atlantis"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    assert!(api_for(&server).load_flag("Atlantis").await.is_none());
}

#[tokio::test]
async fn test_load_flag_broken_image_yields_none() {
    let server = MockServer::start().await;
    let flag_url = format!("{}/flags/fr.png", server.uri());
    mount_country(&server, "France", france_payload(&flag_url)).await;
    Mock::given(method("GET"))
        .and(path("/flags/fr.png"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert!(api_for(&server).load_flag("France").await.is_none());
}

#[tokio::test]
async fn test_load_flag_transport_failure_yields_none() {
    // Nothing listens on the discard port.
    let config = AppConfig {
        api_base: "http://127.0.0.1:9".to_string(),
        request_timeout: Duration::from_secs(2),
        ..AppConfig::default()
    };
    let api = CountryApi::new(&config).expect("Failed to build client");

    assert!(api.load_flag("France").await.is_none());

    let err = api
        .fetch_detail("France")
        .await
        .expect_err("nothing is listening");
    assert!(matches!(err, ApiError::Transport(_)));

    let failure = LookupFailure::new("France", err);
    assert_eq!(failure.level, log::Level::Error);
    assert!(failure.message.starts_with("France: detail lookup failed"));
}
