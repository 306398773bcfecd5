//! Round trip, default value and ordering over HTTP.

use super::common::spawn_gateway;
use stamp_common::UnixTimestamp;

#[tokio::test]
async fn test_get_before_any_post_returns_zero() {
    let gw = spawn_gateway().await;
    let response = reqwest::get(gw.url()).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.headers()[reqwest::header::CONTENT_TYPE], "text/plain");
    assert_eq!(response.text().await.unwrap(), "0");
}

#[tokio::test]
async fn test_store_and_fetch_timestamp() {
    let gw = spawn_gateway().await;
    gw.client.post(UnixTimestamp(1_700_000_000)).await.unwrap();

    let body = reqwest::get(gw.url()).await.unwrap().text().await.unwrap();
    assert_eq!(body, "1700000000");
}

#[tokio::test]
async fn test_repeated_get_is_idempotent() {
    let gw = spawn_gateway().await;
    gw.client.post(UnixTimestamp(1_234)).await.unwrap();
    for _ in 0..10 {
        assert_eq!(gw.client.get().await.unwrap(), UnixTimestamp(1_234));
    }
}

#[tokio::test]
async fn test_last_write_wins() {
    let gw = spawn_gateway().await;
    gw.client.post(UnixTimestamp(1)).await.unwrap();
    gw.client.post(UnixTimestamp(2)).await.unwrap();
    assert_eq!(gw.client.get().await.unwrap(), UnixTimestamp(2));
}

#[tokio::test]
async fn test_client_round_trip_returns_current_time() {
    let gw = spawn_gateway().await;
    let before = UnixTimestamp::now();
    let read_back = gw.client.round_trip().await.unwrap();
    let after = UnixTimestamp::now();
    assert!(before <= read_back && read_back <= after);
}
