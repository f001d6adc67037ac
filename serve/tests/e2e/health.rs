use super::common;

#[tokio::test]
async fn e2e_health() {
    common::load_dotenv();
    let (url, server_handle) = common::spawn_server_once().await;

    let response = reqwest::get(format!("{url}/health")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body = response.text().await.unwrap();
    eprintln!("[e2e] received: {}", body);
    assert!(body.contains("\"status\":\"ok\""), "unexpected body: {}", body);

    // Health probes do not trigger once-mode exit; stop the server ourselves.
    server_handle.abort();
}
