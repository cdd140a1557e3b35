//! Cache behaviour observed through request counts on the mock server.

use crate::integration::mock_server::MockServerFixture;
use chrono::NaiveDate;
use openexchangerates::cache::ManualClock;
use openexchangerates::{CacheKeying, ExchangeRatesApi};
use rust_decimal_macros::dec;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_latest_refetches_only_after_update_interval() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_latest("USD", 2).await;
    let clock = Arc::new(ManualClock::new());

    let client = fixture
        .builder()
        .update_interval_secs(3600)
        .clock(clock.clone())
        .build()
        .unwrap();

    let first = client.latest(None).await.unwrap();
    assert_eq!(first.timestamp, 1000);
    assert_eq!(first.rates["AED"], dec!(3.67));

    clock.set_elapsed(Duration::from_secs(1800));
    let cached = client.latest(None).await.unwrap();
    assert!(Arc::ptr_eq(&first, &cached));

    clock.set_elapsed(Duration::from_secs(3700));
    let refreshed = client.latest(None).await.unwrap();
    assert!(!Arc::ptr_eq(&first, &refreshed));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_latest_is_cached_per_base_by_default() {
    let mut fixture = MockServerFixture::new().await;
    let usd = fixture.mock_latest("USD", 1).await;
    let eur = fixture.mock_latest("EUR", 1).await;

    let client = fixture.builder().build().unwrap();
    client.latest(Some("USD")).await.unwrap();
    client.latest(Some("EUR")).await.unwrap();
    client.latest(Some("usd")).await.unwrap();
    client.latest(Some("eur")).await.unwrap();

    usd.assert_async().await;
    eur.assert_async().await;
}

#[tokio::test]
async fn test_shared_keying_serves_one_latest_slot() {
    let mut fixture = MockServerFixture::new().await;
    let usd = fixture.mock_latest("USD", 1).await;
    let eur = fixture.mock_latest("EUR", 0).await;

    let client = fixture
        .builder()
        .cache_keying(CacheKeying::Shared)
        .build()
        .unwrap();
    client.latest(Some("USD")).await.unwrap();
    let answer = client.latest(Some("EUR")).await.unwrap();
    assert_eq!(answer.base, "USD");

    usd.assert_async().await;
    eur.assert_async().await;
}

#[tokio::test]
async fn test_historical_cached_per_day_and_earlier_days_stay_available() {
    let mut fixture = MockServerFixture::new().await;
    let jan14 = fixture.mock_historical("2013-01-14", "USD", 1).await;
    let jan15 = fixture.mock_historical("2013-01-15", "USD", 1).await;

    let client = fixture.builder().build().unwrap();
    let day14 = NaiveDate::from_ymd_opt(2013, 1, 14).unwrap();
    let day15 = NaiveDate::from_ymd_opt(2013, 1, 15).unwrap();

    let first = client.historical(day14, None).await.unwrap();
    assert_eq!(first.rates["AFN"], dec!(51.37));
    let again = client.historical(day14, Some("USD")).await.unwrap();
    assert!(Arc::ptr_eq(&first, &again));

    client.historical(day15, None).await.unwrap();
    let still = client.historical(day14, None).await.unwrap();
    assert!(Arc::ptr_eq(&first, &still));

    jan14.assert_async().await;
    jan15.assert_async().await;
}

#[tokio::test]
async fn test_currencies_fetched_once_for_client_lifetime() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_currencies(1).await;
    let clock = Arc::new(ManualClock::new());

    let client = fixture.builder().clock(clock.clone()).build().unwrap();
    let first = client.currencies().await.unwrap();
    clock.advance(Duration::from_secs(30 * 24 * 3600));
    let second = client.currencies().await.unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second["AED"], "United Arab Emirates Dirham");

    mock.assert_async().await;
    let stats = client.cache_stats().unwrap();
    assert_eq!((stats.hits, stats.misses, stats.stores), (1, 1, 1));
}

#[tokio::test]
async fn test_separate_clients_do_not_share_cache() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_currencies(2).await;

    let a = fixture.builder().build().unwrap();
    let b = fixture.builder().build().unwrap();
    a.currencies().await.unwrap();
    b.currencies().await.unwrap();
    a.currencies().await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_close_after_use() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_currencies(1).await;

    let client = fixture.builder().build().unwrap();
    client.currencies().await.unwrap();
    tokio_test::assert_ok!(client.close().await);
}
