use super::{
    headers::merge_headers,
    json::to_js_json,
    path::{build_url, validate_path},
    types::ForwardedRequest,
};
use crate::{Error, Result, config::UpstreamConfig};
use async_trait::async_trait;
use axum::http::{HeaderMap, Method};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

#[async_trait]
pub trait Upstream: Send + Sync {
    async fn forward_get(&self, path: &str, headers: &HeaderMap) -> Result<Value>;

    async fn forward_post(&self, path: &str, headers: &HeaderMap, body: &Value) -> Result<Value>;
}

pub struct HttpUpstream {
    base_url: String,
    client: reqwest::Client,
}

impl HttpUpstream {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();

        if config.accept_invalid_certs {
            warn!(
                "TLS certificate verification is disabled for upstream {}",
                config.base_url
            );
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder.build()?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn prepare(
        &self,
        method: Method,
        path: &str,
        headers: &HeaderMap,
        body: Option<&Value>,
    ) -> Result<ForwardedRequest> {
        validate_path(path)?;

        Ok(ForwardedRequest {
            method,
            url: build_url(&self.base_url, path),
            headers: merge_headers(headers),
            body: body.cloned(),
        })
    }

    async fn send(&self, request: ForwardedRequest) -> Result<Value> {
        debug!("Sending upstream {} {}", request.method, request.url);

        let mut req_builder = self
            .client
            .request(request.method.clone(), &request.url)
            .headers(request.headers);

        if let Some(body) = &request.body {
            req_builder = req_builder.body(to_js_json(body)?);
        }

        let response = req_builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        debug!(
            "Upstream {} {} answered {} with {} bytes",
            request.method,
            request.url,
            status,
            bytes.len()
        );

        // Status is not interpreted: a JSON error body is relayed like any other.
        serde_json::from_slice(&bytes).map_err(|e| {
            Error::upstream(format!(
                "Non-JSON response from {} (status {}): {}",
                request.url, status, e
            ))
        })
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn forward_get(&self, path: &str, headers: &HeaderMap) -> Result<Value> {
        let request = self.prepare(Method::GET, path, headers, None)?;
        self.send(request).await
    }

    async fn forward_post(&self, path: &str, headers: &HeaderMap, body: &Value) -> Result<Value> {
        let request = self.prepare(Method::POST, path, headers, Some(body))?;
        self.send(request).await
    }
}
