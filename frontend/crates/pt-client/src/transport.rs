use crate::{CSRF_HEADER, ClientError, ClientResult};

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A single request to the tracker server, independent of the HTTP stack
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn post_json(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }
}

/// Status and raw text of a server reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse a successful reply; non-success statuses become
    /// `ClientError::Status` carrying the raw body
    #[track_caller]
    pub fn into_json<T: DeserializeOwned>(self) -> ClientResult<T> {
        if !self.is_success() {
            return Err(ClientError::status(self.status, self.body));
        }
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Sends requests to the server. Implementations attach the CSRF header.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        (**self).send(request).await
    }
}

/// HTTP transport backed by reqwest
pub struct ReqwestTransport {
    pub base_url: String,
    csrf_token: String,
    client: ReqwestClient,
}

impl ReqwestTransport {
    /// Create a new transport
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000/tracker")
    /// * `csrf_token` - Sent in the `X-CSRFToken` header of every request
    pub fn new(base_url: &str, csrf_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            csrf_token: csrf_token.into(),
            client: ReqwestClient::new(),
        }
    }

    /// Absolute URLs are used as-is, anything else is joined to the base URL
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        let url = self.url(&request.path);
        debug!("{} {}", request.method, url);

        let mut req = self
            .client
            .request(request.method, &url)
            .header(CSRF_HEADER, &self.csrf_token);

        if !request.query.is_empty() {
            req = req.query(&request.query);
        }
        if let Some(ref body) = request.body {
            req = req.json(body);
        }

        let response = req.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(ApiResponse { status, body })
    }
}
