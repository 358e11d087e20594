use axum::{
    Router,
    body::{Body, to_bytes},
    http::Response,
};
use jobboard_gateway::{
    Result,
    config::{Config, LogsConfig, ServerConfig, UpstreamConfig},
    gateway::{HttpUpstream, Upstream},
    server::{handlers::AppState, router},
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

/// Create a test configuration pointing at `base_url`
pub fn create_test_config(base_url: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
            max_body_bytes: 2 * 1024 * 1024,
        },
        upstream: UpstreamConfig {
            base_url: base_url.to_string(),
            accept_invalid_certs: false,
            timeout_secs: Some(5),
        },
    }
}

/// Build the router around any upstream implementation
pub fn create_test_app(upstream: impl Upstream + 'static) -> Router {
    create_test_app_with_limit(upstream, ServerConfig::default().max_body_bytes)
}

/// Build the router with a custom inbound body limit
pub fn create_test_app_with_limit(upstream: impl Upstream + 'static, max_body_bytes: usize) -> Router {
    router(
        AppState {
            upstream: Arc::new(upstream),
        },
        max_body_bytes,
    )
}

/// Build the router around a real HTTP upstream
pub fn create_http_app(base_url: &str) -> Router {
    let config = create_test_config(base_url);
    let upstream = HttpUpstream::new(&config.upstream).unwrap();
    create_test_app(upstream)
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Read a response body as JSON
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"
  max_body_bytes: 4096
upstream:
  base_url: "https://jobs.example.com/api"
  accept_invalid_certs: true
  timeout_secs: 10
"#;

/// Minimal configuration YAML relying on defaults
pub const MINIMAL_CONFIG_YAML: &str = r#"
upstream:
  base_url: "https://jobs.example.com/api"
"#;
