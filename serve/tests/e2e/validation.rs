use super::common;
use serde_json::json;
use std::time::Duration;
use tokio::time::timeout;

#[tokio::test]
async fn e2e_blank_prompt_is_rejected_with_400() {
    common::load_dotenv();
    let (url, server_handle) = common::spawn_server_once().await;

    let (status, body) = common::post_json(
        &format!("{url}/analyze/local"),
        &json!({ "prompt": "   " }),
    )
    .await;

    assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
    let error: promptforge::ErrorBody = serde_json::from_str(&body).unwrap();
    assert_eq!(error.error, "Prompt is required and must not be empty");

    let _ = timeout(Duration::from_secs(5), server_handle).await;
}

#[tokio::test]
async fn e2e_remote_route_validates_before_touching_the_gateway() {
    common::load_dotenv();
    let (url, server_handle) = common::spawn_server_once().await;

    // An empty prompt must fail fast with 400 even when no gateway key is
    // configured.
    let (status, body) =
        common::post_json(&format!("{url}/analyze"), &json!({ "prompt": "" })).await;

    assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
    assert!(body.contains("\"error\""), "body: {}", body);

    let _ = timeout(Duration::from_secs(5), server_handle).await;
}
