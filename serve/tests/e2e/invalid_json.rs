use super::common;

#[tokio::test]
async fn e2e_invalid_json_body_is_a_client_error() {
    common::load_dotenv();
    let (url, server_handle) = common::spawn_server_once().await;

    let response = reqwest::Client::new()
        .post(format!("{url}/analyze/local"))
        .header("content-type", "application/json")
        .body("not json at all")
        .send()
        .await
        .unwrap();

    let status = response.status();
    eprintln!("[e2e] received: {}", status);
    assert!(status.is_client_error(), "expected 4xx, got {}", status);

    // The handler never ran, so once mode did not trigger; stop the server.
    server_handle.abort();
}
