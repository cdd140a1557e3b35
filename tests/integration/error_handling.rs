//! Integration tests for error propagation and cache safety on failure

use crate::integration::mock_server::MockServerFixture;
use openexchangerates::{Error, ExchangeRatesApi, OxrClientBuilder};

const INVALID_APP_ID: &str = r#"{
    "error": true,
    "status": 401,
    "message": "invalid_app_id",
    "description": "Invalid App ID provided. Please sign up at https://openexchangerates.org/signup, or contact support@openexchangerates.org."
}"#;

#[tokio::test]
async fn test_remote_error_carries_parsed_body() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_error_response("/latest.json", 401, INVALID_APP_ID, 1)
        .await;

    let client = fixture.builder().build().unwrap();
    let err = client.latest(None).await.unwrap_err();

    mock.assert_async().await;
    match &err {
        Error::Remote { status, body } => {
            assert_eq!(*status, 401);
            assert_eq!(body["message"], "invalid_app_id");
            assert_eq!(body["error"], true);
        }
        other => panic!("expected remote error, got {other:?}"),
    }
    assert_eq!(err.remote_message(), Some("invalid_app_id"));
}

#[tokio::test]
async fn test_non_json_error_body_is_kept_as_text() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_error_response("/currencies.json", 502, "Bad Gateway", 1)
        .await;

    let client = fixture.builder().build().unwrap();
    let err = client.currencies().await.unwrap_err();
    assert_eq!(err.status(), Some(502));
    assert_eq!(err.remote_body(), Some(&serde_json::json!("Bad Gateway")));
}

#[tokio::test]
async fn test_failures_are_not_cached_for_any_operation() {
    let mut fixture = MockServerFixture::new().await;
    let body = r#"{"error": true, "status": 429, "message": "access_restricted"}"#;
    let latest = fixture
        .mock_error_response("/latest.json", 429, body, 2)
        .await;
    let currencies = fixture
        .mock_error_response("/currencies.json", 429, body, 2)
        .await;
    let historical = fixture
        .mock_error_response("/historical/2013-01-14.json", 429, body, 2)
        .await;

    let client = fixture.builder().build().unwrap();
    let day = chrono::NaiveDate::from_ymd_opt(2013, 1, 14).unwrap();
    for _ in 0..2 {
        assert!(client.latest(None).await.unwrap_err().is_remote());
        assert!(client.currencies().await.unwrap_err().is_remote());
        assert!(client.historical(day, None).await.unwrap_err().is_remote());
    }

    latest.assert_async().await;
    currencies.assert_async().await;
    historical.assert_async().await;
    assert_eq!(client.cache_stats().map(|s| s.stores), Some(0));
}

#[tokio::test]
async fn test_recovers_after_failure_once_service_is_back() {
    let mut fixture = MockServerFixture::new().await;
    let failing = fixture
        .mock_error_response("/currencies.json", 500, r#"{"error": true}"#, 1)
        .await;

    let client = fixture.builder().build().unwrap();
    assert!(client.currencies().await.is_err());
    failing.assert_async().await;
    failing.remove_async().await;

    let healthy = fixture.mock_currencies(1).await;
    assert_eq!(client.currencies().await.unwrap().len(), 3);
    assert_eq!(client.currencies().await.unwrap().len(), 3);
    healthy.assert_async().await;
}

#[tokio::test]
async fn test_malformed_success_body_is_a_serialization_error() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_get("/latest.json", Some("USD"), 200, r#"{"rates": "nope"}"#, 1)
        .await;

    let client = fixture.builder().build().unwrap();
    let err = client.latest(None).await.unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
    assert_eq!(client.cache_stats().map(|s| s.stores), Some(0));
}

#[tokio::test]
async fn test_connection_failure_is_a_transport_error() {
    // nothing listens on port 1
    let client = OxrClientBuilder::new()
        .api_key("k")
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();
    let day = chrono::NaiveDate::from_ymd_opt(2013, 1, 14).unwrap();
    for _ in 0..2 {
        let err = client.currencies().await.unwrap_err();
        assert!(matches!(err, Error::Transport(_)), "got {err:?}");
        let err = client.latest(None).await.unwrap_err();
        assert!(matches!(err, Error::Transport(_)), "got {err:?}");
        let err = client.historical(day, None).await.unwrap_err();
        assert!(matches!(err, Error::Transport(_)), "got {err:?}");
    }
    // every retry was a miss again, nothing was stored
    let stats = client.cache_stats().unwrap();
    assert_eq!(stats.stores, 0);
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.misses, 6);
}
