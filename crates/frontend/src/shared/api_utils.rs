//! API utilities for frontend-backend communication
//!
//! `ApiClient` builds URLs from the configured base, attaches the bearer
//! token of the granted session and maps unsuccessful responses to
//! [`GridError`] via [`classify_failure`].

use crate::shared::config::AppConfig;
use crate::shared::grid::{classify_failure, GridError};
use crate::system::auth::context::use_granted_session;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Build a full API URL from a path
    ///
    /// ```text
    /// ApiClient::new("http://localhost:8081/api/v1").url("/orders")
    ///     -> "http://localhost:8081/api/v1/orders"
    /// ```
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// URL with a query string encoded by `serde_qs`; an empty query adds nothing
    pub fn url_with_query<Q: Serialize>(&self, path: &str, query: &Q) -> Result<String, GridError> {
        let qs = serde_qs::to_string(query)
            .map_err(|e| GridError::Validation(format!("Failed to encode query: {}", e)))?;
        if qs.is_empty() {
            Ok(self.url(path))
        } else {
            Ok(format!("{}?{}", self.url(path), qs))
        }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GridError> {
        self.fetch_json(self.url(path)).await
    }

    pub async fn get_json_with<Q: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, GridError> {
        self.fetch_json(self.url_with_query(path, query)?).await
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: String) -> Result<T, GridError> {
        log::debug!("GET {}", url);
        let response = self
            .authorize(Request::get(&url))
            .send()
            .await
            .map_err(GridError::transport)?;
        read_json(response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, GridError> {
        let url = self.url(path);
        log::debug!("POST {}", url);
        let response = self
            .authorize(Request::post(&url))
            .json(body)
            .map_err(|e| GridError::Validation(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(GridError::transport)?;
        read_json(response).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, GridError> {
        let url = self.url(path);
        log::debug!("PUT {}", url);
        let response = self
            .authorize(Request::put(&url))
            .json(body)
            .map_err(|e| GridError::Validation(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(GridError::transport)?;
        read_json(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), GridError> {
        let url = self.url(path);
        log::debug!("DELETE {}", url);
        let response = self
            .authorize(Request::delete(&url))
            .send()
            .await
            .map_err(GridError::transport)?;
        ensure_ok(response).await.map(|_| ())
    }
}

async fn ensure_ok(response: Response) -> Result<Response, GridError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = classify_failure(status, &body);
    log::error!("{} {} -> {:?}", response.url(), status, err);
    Err(err)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, GridError> {
    let response = ensure_ok(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| GridError::Transient(format!("Failed to parse response: {}", e)))
}

/// Клиент API с токеном текущей сессии (только внутри `RequireRole`)
pub fn use_api_client() -> ApiClient {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let session = use_granted_session();
    ApiClient::new(config.api.base_url).with_token(session.token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Params {
        #[serde(skip_serializing_if = "Option::is_none")]
        category_id: Option<i64>,
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = ApiClient::new("http://localhost:8081/api/v1/");
        assert_eq!(client.url("/orders"), "http://localhost:8081/api/v1/orders");
        assert_eq!(client.url("orders"), "http://localhost:8081/api/v1/orders");
    }

    #[test]
    fn test_url_with_query() {
        let client = ApiClient::new("http://api");
        assert_eq!(
            client
                .url_with_query("/products", &Params { category_id: Some(4) })
                .unwrap(),
            "http://api/products?categoryId=4"
        );
        assert_eq!(
            client
                .url_with_query("/products", &Params { category_id: None })
                .unwrap(),
            "http://api/products"
        );
    }
}
