//! Business Nexus API client

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::rc::Rc;

use super::base_url::BaseUrl;
use super::error::{ApiError, ApiResult};
use super::transport::{HttpRequest, Method, Transport};
use crate::session::SessionContext;

/// JSON client for the Business Nexus API.
///
/// Reads the bearer token from the shared [`SessionContext`] on every call,
/// so a sign-in takes effect immediately.
#[derive(Clone)]
pub struct ApiClient {
    base: BaseUrl,
    transport: Rc<dyn Transport>,
    session: SessionContext,
}

impl ApiClient {
    pub fn new(base: BaseUrl, transport: Rc<dyn Transport>, session: SessionContext) -> Self {
        Self {
            base,
            transport,
            session,
        }
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        self.execute(Method::Get, path, None, true).await
    }

    pub async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<R> {
        let body = encode(body)?;
        self.execute(Method::Post, path, Some(body), true).await
    }

    pub async fn put<B: Serialize + ?Sized, R: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<R> {
        let body = encode(body)?;
        self.execute(Method::Put, path, Some(body), true).await
    }

    pub async fn patch<B: Serialize + ?Sized, R: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<R> {
        let body = encode(body)?;
        self.execute(Method::Patch, path, Some(body), true).await
    }

    /// POST without a bearer header, for obtaining a token in the first place
    pub async fn post_anonymous<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<R> {
        let body = encode(body)?;
        self.execute(Method::Post, path, Some(body), false).await
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        authenticate: bool,
    ) -> ApiResult<R> {
        let mut headers = Vec::new();
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        let token = if authenticate { self.session.token() } else { None };
        if let Some(token) = &token {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        tracing::debug!(
            method = %method,
            path = %path,
            authenticated = token.is_some(),
            "Sending API request"
        );

        let request = HttpRequest {
            method,
            url: self.base.join(path),
            headers,
            body,
        };

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::warn!(method = %method, path = %path, error = %e, "API request failed to send");
            ApiError::from(e)
        })?;

        if !response.is_success() {
            let err = ApiError::from_status(response.status, &response.body);
            tracing::warn!(
                method = %method,
                path = %path,
                status = response.status,
                error = %err,
                "API request rejected"
            );
            return Err(err);
        }

        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> ApiResult<String> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}
