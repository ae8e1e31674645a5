//! Client for the upstream intake API.
//!
//! Every call is a single JSON POST with no retry and no response validation.
//! Successful bodies are handed back untouched so handlers can relay them.

use axum::{
    body::Bytes,
    http::header,
    response::{IntoResponse, Response},
};
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use serde::Serialize;
use thiserror::Error;

use crate::config::Config;
use crate::models::{RegisterPayload, SchedulePayload, UploadPayload};

pub const API_KEY_HEADER: &str = "x-axa-api-key";

#[derive(Clone)]
pub struct UpstreamClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl UpstreamClient {
    pub fn new(http: Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        if config.axa_api.is_none() {
            tracing::warn!("AXA_API is not set, upload and schedule calls will carry no API key");
        }

        Ok(Self::new(
            http,
            config.upstream_base_url.clone(),
            config.axa_api.clone(),
        ))
    }

    /// Registration goes out without the API key header.
    pub async fn register(&self, payload: &RegisterPayload) -> Result<UpstreamReply, UpstreamError> {
        self.post_json("register", payload, false).await
    }

    pub async fn upload(&self, payload: &UploadPayload) -> Result<UpstreamReply, UpstreamError> {
        self.post_json("upload", payload, true).await
    }

    pub async fn schedule(&self, payload: &SchedulePayload) -> Result<UpstreamReply, UpstreamError> {
        self.post_json("schedule", payload, true).await
    }

    fn request(&self, route: &str, with_api_key: bool) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", self.base_url, route);
        let builder = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json");

        match (&self.api_key, with_api_key) {
            (Some(key), true) => builder.header(API_KEY_HEADER, key),
            _ => builder,
        }
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        route: &str,
        body: &T,
        with_api_key: bool,
    ) -> Result<UpstreamReply, UpstreamError> {
        tracing::debug!("Forwarding to upstream /{}", route);

        let response = self
            .request(route, with_api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status { status, body });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?;

        tracing::debug!("Upstream /{} answered {} ({} bytes)", route, status, body.len());

        Ok(UpstreamReply { content_type, body })
    }
}

/// Raw upstream response body, relayed to the caller as-is.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl IntoResponse for UpstreamReply {
    fn into_response(self) -> Response {
        let content_type = self
            .content_type
            .unwrap_or_else(|| "application/json".to_string());
        ([(header::CONTENT_TYPE, content_type)], self.body).into_response()
    }
}

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}
