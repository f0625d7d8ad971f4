//! HTTP client for the AgentHub marketplace API.
//!
//! One method per endpoint, all returning typed models. Transport failures
//! collapse into [`ApiError::Connection`]; bodies that are not valid JSON
//! for the expected shape become [`ApiError::MalformedResponse`]. Status
//! codes are deliberately not inspected -- whatever body arrives is parsed
//! as the expected shape.

pub mod types;

use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::ApiError;
use types::{Agent, Category, DeployedAgent, Stats};

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the given base URL (no trailing slash needed).
    ///
    /// No request timeout is configured: a hung backend blocks the current
    /// action, and the menu loop holds no other in-flight work.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /agents, optionally filtered by category.
    pub async fn list_agents(&self, category: Option<Category>) -> Result<Vec<Agent>, ApiError> {
        let query: Vec<(&str, String)> = match category {
            Some(c) => vec![("category", c.as_str().to_string())],
            None => vec![],
        };
        self.get("/agents", &query).await
    }

    /// GET /agents?search=<query>. The query string is URL-encoded by reqwest.
    pub async fn search_agents(&self, query: &str) -> Result<Vec<Agent>, ApiError> {
        self.get("/agents", &[("search", query.to_string())]).await
    }

    /// POST /deploy with body `{"agentId": ...}`.
    pub async fn deploy_agent(&self, agent_id: &str) -> Result<DeployedAgent, ApiError> {
        self.post("/deploy", &json!({ "agentId": agent_id })).await
    }

    /// GET /deployed.
    pub async fn list_deployed(&self) -> Result<Vec<DeployedAgent>, ApiError> {
        self.get("/deployed", &[]).await
    }

    /// GET /stats.
    pub async fn stats(&self) -> Result<Stats, ApiError> {
        self.get("/stats", &[]).await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        tracing::debug!(path, ?query, "GET");
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .header(CONTENT_TYPE, "application/json")
            .query(query)
            .send()
            .await
            .map_err(|e| connection_error(&e))?;
        Self::read_body(path, response).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, ApiError> {
        tracing::debug!(path, %body, "POST");
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| connection_error(&e))?;
        Self::read_body(path, response).await
    }

    /// Read the body and deserialize into the expected shape, regardless of
    /// the response status.
    async fn read_body<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| connection_error(&e))?;
        tracing::debug!(path, %status, len = bytes.len(), "response");
        serde_json::from_slice(&bytes).map_err(|e| ApiError::MalformedResponse {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

fn connection_error(e: &reqwest::Error) -> ApiError {
    use std::error::Error as _;

    // Surface the root cause ("Connection refused") rather than reqwest's
    // outer "error sending request" wrapper.
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(inner) = source {
        message = inner.to_string();
        source = inner.source();
    }
    ApiError::Connection { message }
}
