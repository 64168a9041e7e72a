//! A backend for OpenAI-compatible chat completion APIs.

mod config;
mod proto;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Response, header};

use crate::backend::{Backend, BackendError};
pub use config::{OpenAIConfig, OpenAIConfigBuilder};

/// Answers queries with a single, non-streaming chat completion.
///
/// Every query is sent on its own together with the system prompt, no
/// history is kept between queries.
#[derive(Clone, Debug)]
pub struct OpenAIBackend {
    client: Client,
    config: Arc<OpenAIConfig>,
}

impl OpenAIBackend {
    /// Creates a new `OpenAIBackend` with the given configuration.
    #[inline]
    pub fn new(config: OpenAIConfig) -> Self {
        Self {
            client: Client::new(),
            config: Arc::new(config),
        }
    }
}

#[async_trait]
impl Backend for OpenAIBackend {
    async fn answer(&self, query: &str) -> Result<String, BackendError> {
        let req = proto::create_request(query, &self.config);
        let resp = self
            .client
            .post(format!("{}{}", self.config.base_url, "/chat/completions"))
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.config.api_key),
            )
            .header(header::CONTENT_TYPE, "application/json")
            .json(&req)
            .send()
            .await
            .and_then(Response::error_for_status)
            .map_err(|err| BackendError::new(format!("{err}")))?;

        let completion: proto::ChatCompletion = resp
            .json()
            .await
            .map_err(|err| BackendError::new(format!("{err}")))?;
        trace!("got completion: {completion:?}");

        Ok(proto::into_answer(completion))
    }
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::Json;
    use axum::routing::post;
    use serde_json::{Value, json};
    use tokio::net::TcpListener;

    use super::*;

    async fn completions(
        headers: HeaderMap,
        Json(req): Json<Value>,
    ) -> Result<Json<Value>, StatusCode> {
        let auth = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        if auth != Some("Bearer test-key") {
            return Err(StatusCode::UNAUTHORIZED);
        }
        assert_eq!(req["model"], "test-model");
        assert_eq!(req["stream"], false);
        assert_eq!(req["messages"][0]["role"], "system");
        assert_eq!(req["messages"][1]["role"], "user");

        let query = req["messages"][1]["content"].as_str().unwrap_or_default();
        Ok(Json(json!({
            "id": "chatcmpl-1",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": format!("Re: {query}") },
                "finish_reason": "stop"
            }]
        })))
    }

    async fn spawn_server() -> String {
        let app =
            Router::new().route("/v1/chat/completions", post(completions));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/v1")
    }

    #[tokio::test]
    async fn test_answer() {
        let base_url = spawn_server().await;
        let backend = OpenAIBackend::new(
            OpenAIConfigBuilder::with_api_key("test-key")
                .with_base_url(base_url)
                .with_model("test-model")
                .build(),
        );

        let answer = backend.answer("visa requirements").await.unwrap();
        assert_eq!(answer, "Re: visa requirements");
    }

    #[tokio::test]
    async fn test_error_status() {
        let base_url = spawn_server().await;
        let backend = OpenAIBackend::new(
            OpenAIConfigBuilder::with_api_key("wrong-key")
                .with_base_url(base_url)
                .with_model("test-model")
                .build(),
        );

        let err = backend.answer("anything").await.unwrap_err();
        assert!(err.message().contains("401"), "{err}");
    }
}
