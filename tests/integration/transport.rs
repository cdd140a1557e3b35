//! Request shape and response decoding through the real HTTP transport.

use crate::integration::mock_server::{MockServerFixture, TEST_APP_ID};
use chrono::NaiveDate;
use openexchangerates::transport::{HttpTransport, RatesSource, DEFAULT_TIMEOUT};
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_latest_sends_base_and_app_id_and_decodes_exact_decimals() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_latest("EUR", 1).await;

    let transport = HttpTransport::new(TEST_APP_ID, &fixture.base_url, DEFAULT_TIMEOUT).unwrap();
    let snapshot = transport.fetch_latest("EUR").await.unwrap();

    mock.assert_async().await;
    assert_eq!(snapshot.timestamp, 1000);
    assert_eq!(snapshot.rates["AED"], dec!(3.67));
    assert_eq!(snapshot.rates["AFN"], dec!(51.2281));
    assert_eq!(snapshot.rates["ALL"].to_string(), "104.748751");
}

#[tokio::test]
async fn test_historical_formats_day_into_path() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_historical("2013-01-04", "USD", 1).await;

    let transport = HttpTransport::new(TEST_APP_ID, &fixture.base_url, DEFAULT_TIMEOUT).unwrap();
    let day = NaiveDate::from_ymd_opt(2013, 1, 4).unwrap();
    let snapshot = transport.fetch_historical(day, "USD").await.unwrap();

    mock.assert_async().await;
    assert_eq!(snapshot.rates["AED"].to_string(), "3.672941");
    assert_eq!(snapshot.rates["AFN"], dec!(51.37));
}

#[tokio::test]
async fn test_currencies_only_sends_app_id() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_currencies(1).await;

    let transport = HttpTransport::new(TEST_APP_ID, &fixture.base_url, DEFAULT_TIMEOUT).unwrap();
    let catalog = transport.fetch_currencies().await.unwrap();

    mock.assert_async().await;
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog["ALL"], "Albanian Lek");
}

#[tokio::test]
async fn test_base_url_with_path_prefix_is_respected() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_get(
            "/api/currencies.json",
            None,
            200,
            r#"{"AED": "United Arab Emirates Dirham"}"#,
            1,
        )
        .await;

    let base = format!("{}/api", fixture.base_url);
    let transport = HttpTransport::new(TEST_APP_ID, &base, DEFAULT_TIMEOUT).unwrap();
    let catalog = transport.fetch_currencies().await.unwrap();

    mock.assert_async().await;
    assert_eq!(catalog.len(), 1);
}
