//! Users backend client.
//!
//! Performs the network IO behind the user-list commands and the health check.
//! Callers map results into state events; nothing here touches UI state.

use log::debug;
use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::BusinessConfig;
use crate::models::{CreateUserRequest, HealthResponse, User, UserId};

#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection refused, timeout, TLS or body read failure.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API returned status: {status}")]
    Status { status: u16 },
    #[error("Failed to encode request body: {0}")]
    Encode(serde_json::Error),
    #[error("Failed to decode response body: {0}")]
    Decode(serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }

    /// The backend answers a duplicate email with 400 or 409.
    pub fn is_conflict(&self) -> bool {
        matches!(self.status(), Some(400 | 409))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

fn encode<T: Serialize>(value: &T) -> ApiResult<Vec<u8>> {
    serde_json::to_vec(value).map_err(ApiError::Encode)
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    serde_json::from_slice(body).map_err(ApiError::Decode)
}

/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct UsersApi {
    client: reqwest::Client,
    config: BusinessConfig,
}

impl UsersApi {
    pub fn new(config: &BusinessConfig) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.api_base_url
    }

    /// GET `/users`
    pub async fn list_users(&self) -> ApiResult<Vec<User>> {
        let body = self.send(Method::GET, "/users", None).await?;
        decode(&body)
    }

    /// POST `/users`
    /// Body: `{ "name": "...", "email": "..." }`
    ///
    /// Returns the created user when the backend echoes one; the body is
    /// informational and may be empty.
    pub async fn create_user(&self, request: &CreateUserRequest) -> ApiResult<Option<User>> {
        let body = self
            .send(Method::POST, "/users", Some(encode(request)?))
            .await?;
        Ok(decode(&body).ok())
    }

    /// DELETE `/users/{id}`
    pub async fn delete_user(&self, id: UserId) -> ApiResult<()> {
        self.send(Method::DELETE, &format!("/users/{id}"), None)
            .await?;
        Ok(())
    }

    /// GET `/health`
    pub async fn health(&self) -> ApiResult<HealthResponse> {
        let body = self.send(Method::GET, "/health", None).await?;
        decode(&body)
    }

    /// Send a request and read the whole body. Non-2xx statuses are errors.
    async fn send(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> ApiResult<Vec<u8>> {
        let url = self.config.url(path);
        debug!("{method} {url}");

        let mut request = self
            .client
            .request(method, &url)
            .header(ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}
