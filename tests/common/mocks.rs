use async_trait::async_trait;
use axum::http::HeaderMap;
use jobboard_gateway::{Error, Result, gateway::Upstream};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// A call the mock upstream received
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

/// Mock upstream for handler tests
#[derive(Debug, Clone)]
pub struct MockUpstream {
    pub response: Value,
    pub error: Option<String>,
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockUpstream {
    pub fn new(response: Value) -> Self {
        Self {
            response,
            error: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(error: &str) -> Self {
        Self {
            response: Value::Null,
            error: Some(error.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, call: RecordedCall) -> Result<Value> {
        self.calls.lock().unwrap().push(call);
        match &self.error {
            Some(error) => Err(Error::upstream(error.clone())),
            None => Ok(self.response.clone()),
        }
    }
}

#[async_trait]
impl Upstream for MockUpstream {
    async fn forward_get(&self, path: &str, headers: &HeaderMap) -> Result<Value> {
        self.answer(RecordedCall {
            method: "GET",
            path: path.to_string(),
            headers: headers.clone(),
            body: None,
        })
    }

    async fn forward_post(&self, path: &str, headers: &HeaderMap, body: &Value) -> Result<Value> {
        self.answer(RecordedCall {
            method: "POST",
            path: path.to_string(),
            headers: headers.clone(),
            body: Some(body.clone()),
        })
    }
}
