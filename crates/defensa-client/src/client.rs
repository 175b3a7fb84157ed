use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use defensa_model::ErrorBody;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::session::SessionStore;

/// Client for the Defensa REST backend.
///
/// Cheap to clone; clones share the HTTP connection pool and the session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: SessionStore) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            session,
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token, send, and translate HTTP failures.
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = match self.session.get() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let body: ErrorBody = response.json().await.unwrap_or_default();
            let message = body
                .message
                .unwrap_or_else(|| format!("El servidor respondió con HTTP {}.", status.as_u16()));
            warn!(status = status.as_u16(), %message, "backend rejected request");
            return Err(ApiError::Backend {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response.json().await.map_err(ApiError::from)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self.send(self.http.get(self.url(path)).query(query)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;
        Self::decode(response).await
    }

    /// POST with query parameters and no body (approval endpoints).
    pub(crate) async fn post_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self.send(self.http.post(self.url(path)).query(query)).await?;
        Self::decode(response).await
    }

    /// POST where only success matters.
    pub(crate) async fn post_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.send(self.http.post(self.url(path)).json(body)).await?;
        Ok(())
    }

    /// PUT where only success matters.
    pub(crate) async fn put_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.send(self.http.put(self.url(path)).json(body)).await?;
        Ok(())
    }

    pub(crate) async fn delete_unit(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.http.delete(self.url(path))).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_base_and_path() {
        let client = ApiClient::new(
            &ClientConfig::new("http://backend:9000/api/"),
            SessionStore::new(),
        )
        .expect("client");
        assert_eq!(client.url("/student/search"), "http://backend:9000/api/student/search");
    }
}
