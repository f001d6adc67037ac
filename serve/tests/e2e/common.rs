//! Shared helpers for e2e tests. Raw response bodies are logged with
//! `[e2e] received: ...`; run with `--nocapture` to see them.

use tokio::net::TcpListener;

/// Loads .env from the current directory (or project root when run via
/// `cargo test`) so the server sees PROMPTFORGE_API_KEY etc.
pub fn load_dotenv() {
    let _ = dotenv::dotenv();
}

/// Binds to a random port and spawns the server in once mode.
/// Returns (base_url, server_handle).
pub async fn spawn_server_once() -> (
    String,
    tokio::task::JoinHandle<Result<(), Box<dyn std::error::Error + Send + Sync>>>,
) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let url = format!("http://{}", addr);
    let server_handle = tokio::spawn(serve::run_serve_on_listener(listener, true));
    (url, server_handle)
}

/// Posts `body` as JSON and returns (status, raw body text).
pub async fn post_json(
    url: &str,
    body: &serde_json::Value,
) -> (reqwest::StatusCode, String) {
    let response = reqwest::Client::new()
        .post(url)
        .json(body)
        .send()
        .await
        .unwrap();
    let status = response.status();
    let text = response.text().await.unwrap();
    eprintln!("[e2e] received: {} {}", status, text);
    (status, text)
}
