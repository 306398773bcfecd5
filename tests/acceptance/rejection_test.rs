//! Rejected requests never reach the stored value.

use super::common::spawn_gateway;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use stamp_common::UnixTimestamp;
use stamp_gateway::ClientError;

#[tokio::test]
async fn test_json_content_type_is_415() {
    let gw = spawn_gateway().await;
    let response = reqwest::Client::new()
        .post(gw.url())
        .header(CONTENT_TYPE, "application/json")
        .body("1700000000")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(gw.client.get().await.unwrap(), UnixTimestamp::EPOCH);
}

#[tokio::test]
async fn test_non_numeric_body_is_400() {
    let gw = spawn_gateway().await;
    gw.client.post(UnixTimestamp(5)).await.unwrap();

    let response = reqwest::Client::new()
        .post(gw.url())
        .header(CONTENT_TYPE, "text/plain")
        .body("abc")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.unwrap(), "invalid unix timestamp");
    assert_eq!(gw.client.get().await.unwrap(), UnixTimestamp(5));
}

#[tokio::test]
async fn test_content_type_with_parameters_is_415() {
    let gw = spawn_gateway().await;
    for content_type in ["text/plain; charset=utf-8", "TEXT/PLAIN"] {
        let response = reqwest::Client::new()
            .post(gw.url())
            .header(CONTENT_TYPE, content_type)
            .body("42")
            .send()
            .await
            .unwrap();
        assert_eq!(
            response.status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "content type {content_type:?}"
        );
    }
    assert_eq!(gw.client.get().await.unwrap(), UnixTimestamp::EPOCH);
}

#[tokio::test]
async fn test_unsupported_method_is_405() {
    let gw = spawn_gateway().await;
    let response = reqwest::Client::new().put(gw.url()).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_path_is_405() {
    let gw = spawn_gateway().await;
    let response = reqwest::get(gw.url_for("/time")).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_client_surfaces_rejection_status() {
    let gw = spawn_gateway().await;
    let err = stamp_gateway::TimestampClient::new(&gw.url_for("/nowhere"))
        .get()
        .await
        .unwrap_err();
    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(body, "method not allowed");
        }
        other => panic!("unexpected error: {other}"),
    }
}
