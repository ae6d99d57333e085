pub mod api;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{IntoUrl, Method, RequestBuilder};

use crate::services::http::{NotSuccessResponseInfo, ResponseExt};

pub use api::{ErrorBody, Role, SignUpRequest, SignUpResponse, User, UserMetadata};

/// Account creation, as offered by the hosted auth service.
#[async_trait]
pub trait AuthService: std::fmt::Debug + Send + Sync {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpResponse, AuthError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthError {
    pub http_status: Option<u16>,
    pub code: Option<String>,
    pub message: Option<String>,
}

impl AuthError {
    /// The message reported by the service or the transport, if not blank.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let message = self.message().unwrap_or("unknown error");
        if let Some(status) = self.http_status {
            write!(f, "{}: {}", status, message)
        } else {
            write!(f, "{}", message)
        }
    }
}

impl std::error::Error for AuthError {}

impl From<reqwest::Error> for AuthError {
    fn from(value: reqwest::Error) -> Self {
        AuthError {
            http_status: value.status().map(|s| s.as_u16()),
            code: None,
            message: Some(value.to_string()),
        }
    }
}

impl From<NotSuccessResponseInfo> for AuthError {
    fn from(info: NotSuccessResponseInfo) -> Self {
        let (code, message) = match serde_json::from_str::<ErrorBody>(&info.text) {
            Ok(mut body) => (body.error_code.take(), body.into_message()),
            Err(_) => (None, Some(info.text).filter(|t| !t.trim().is_empty())),
        };
        AuthError {
            http_status: Some(info.status_code),
            code,
            message,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    url: String,
    api_public_key: String,
    email_redirect_to: Option<String>,
}

impl AuthClient {
    pub fn new(url: String, api_public_key: String) -> Self {
        AuthClient {
            http: reqwest::Client::new(),
            url: url.trim_end_matches('/').to_string(),
            api_public_key,
            email_redirect_to: None,
        }
    }

    /// Link the confirmation email sends the user back to.
    pub fn with_email_redirect_to(mut self, redirect_to: Option<String>) -> Self {
        self.email_redirect_to = redirect_to;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, AuthError> {
        self.http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    fn request<U: IntoUrl>(&self, method: Method, url: U) -> RequestBuilder {
        let req = self
            .http
            .request(method, url)
            .header("apikey", &self.api_public_key)
            .header("Content-Type", "application/json");
        tracing::debug!("Sending http request: {:?}", req);
        req
    }
}

#[async_trait]
impl AuthService for AuthClient {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpResponse, AuthError> {
        let mut req = self
            .request(Method::POST, format!("{}/auth/v1/signup", self.url))
            .json(request);
        if let Some(redirect_to) = &self.email_redirect_to {
            req = req.query(&[("redirect_to", redirect_to)]);
        }

        let response = req.send().await?.check_success().await?;
        Ok(response.json().await?)
    }
}
