//! HTTP transport for the Vigil REST API
//!
//! A single seam between the resource facades and the network. The contract
//! normalizes "not found": HTTP 404 is `Ok(None)`, every other non-success
//! status is an `AppError::Api`, and transport failures surface as
//! `AppError::HttpRequest`/`NetworkTimeout`. No retries at this layer.

use crate::errors::{AppError, AppResult};
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

pub trait Transport: Send + Sync {
    /// Issue one request. `Ok(None)` means the entity does not exist;
    /// `Ok(Some(Value::Null))` means success with an empty body.
    fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> AppResult<Option<Value>>;
}

/// Blocking reqwest-backed transport. Authenticates every request with the
/// `X-Api-Key` header.
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl HttpTransport {
    pub fn new(endpoint: &str, api_key: &str, timeout_secs: u64) -> AppResult<Self> {
        let base_url = Url::parse(endpoint)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("vigilctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::HttpRequest {
                method: "INIT".to_string(),
                url: endpoint.to_string(),
                source: Some(Box::new(e)),
            })?;

        Ok(HttpTransport {
            client,
            base_url,
            api_key: api_key.to_string(),
        })
    }

    fn build_url(&self, path: &str, query: &[(&str, String)]) -> AppResult<Url> {
        // Joining relative to ".../v2" would drop the last segment, so splice
        // the path onto the base path instead.
        let mut url = self.base_url.clone();
        let joined = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        url.set_path(&joined);
        for (key, value) in query {
            url.query_pairs_mut().append_pair(key, value);
        }
        Ok(url)
    }
}

impl Transport for HttpTransport {
    fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> AppResult<Option<Value>> {
        let url = self.build_url(path, query)?;

        let mut request = match method {
            Method::Get => self.client.get(url.clone()),
            Method::Post => self.client.post(url.clone()),
            Method::Put => self.client.put(url.clone()),
            Method::Delete => self.client.delete(url.clone()),
        }
        .header("X-Api-Key", &self.api_key);

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().map_err(|e| {
            if e.is_timeout() {
                AppError::NetworkTimeout {
                    url: url.to_string(),
                }
            } else {
                AppError::HttpRequest {
                    method: method.as_str().to_string(),
                    url: url.to_string(),
                    source: Some(Box::new(e)),
                }
            }
        })?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Ok(None);
        }
        if !status.is_success() {
            let body_text = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Api {
                status: status.as_u16(),
                method: method.as_str().to_string(),
                path: path.to_string(),
                body: body_text,
            });
        }

        let text = response.text().map_err(|e| AppError::HttpRequest {
            method: method.as_str().to_string(),
            url: url.to_string(),
            source: Some(Box::new(e)),
        })?;

        if text.trim().is_empty() {
            return Ok(Some(Value::Null));
        }

        let value: Value = serde_json::from_str(&text).map_err(|e| AppError::Payload {
            path: path.to_string(),
            reason: e.to_string(),
            source: Some(Box::new(e)),
        })?;
        Ok(Some(value))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! A recording transport double so command behavior can be tested
    //! without a network.

    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    #[derive(Debug, Clone)]
    pub(crate) struct RecordedCall {
        pub method: Method,
        pub path: String,
        pub query: Vec<(String, String)>,
        pub body: Option<Value>,
    }

    pub(crate) struct RecordingTransport {
        calls: Mutex<Vec<RecordedCall>>,
        responses: Mutex<VecDeque<Option<Value>>>,
    }

    impl RecordingTransport {
        /// Responses are replayed in order; `None` simulates a 404. Once
        /// exhausted, further requests answer with an empty success body.
        pub fn new(responses: Vec<Option<Value>>) -> Self {
            RecordingTransport {
                calls: Mutex::new(Vec::new()),
                responses: Mutex::new(responses.into()),
            }
        }

        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Transport for RecordingTransport {
        fn request(
            &self,
            method: Method,
            path: &str,
            query: &[(&str, String)],
            body: Option<&Value>,
        ) -> AppResult<Option<Value>> {
            self.calls.lock().unwrap().push(RecordedCall {
                method,
                path: path.to_string(),
                query: query
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
                body: body.cloned(),
            });
            Ok(self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Some(Value::Null)))
        }
    }

    // Lets a test keep a handle on the recorder after boxing it into an
    // ApiClient.
    impl Transport for std::sync::Arc<RecordingTransport> {
        fn request(
            &self,
            method: Method,
            path: &str,
            query: &[(&str, String)],
            body: Option<&Value>,
        ) -> AppResult<Option<Value>> {
            self.as_ref().request(method, path, query, body)
        }
    }
}
