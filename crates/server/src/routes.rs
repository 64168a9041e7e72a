use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use little_chat_responder::{CHAT_ENDPOINT, ChatError, ChatResponse};
use serde_json::{Value, json};

use crate::reply::ReplyService;

/// Builds the service routes.
pub fn router(replies: ReplyService) -> Router {
    Router::new()
        .route(CHAT_ENDPOINT, post(chat))
        .route("/health", get(health))
        .with_state(replies)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn chat(State(replies): State<ReplyService>, body: Bytes) -> Response {
    // The body is parsed by hand so that malformed requests get the same
    // JSON error shape as everything else.
    let request = serde_json::from_slice::<Value>(&body).ok();
    let Some(query) = request.as_ref().and_then(|r| r.get("query")) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Missing 'query' in request body",
        );
    };
    let query = match query.as_str() {
        Some(query) if !query.trim().is_empty() => query.to_owned(),
        _ => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "'query' must be a non-empty string",
            );
        }
    };

    // Isolate the backend, a panic there must still produce a response.
    let task = tokio::spawn(async move { replies.reply(&query).await });
    match task.await {
        Ok(response) => Json(ChatResponse { response }).into_response(),
        Err(err) => {
            error!("error handling chat request: {err}");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error processing chat request",
            )
        }
    }
}

fn error_response(status: StatusCode, error: &str) -> Response {
    let body = ChatError {
        error: error.to_owned(),
    };
    (status, Json(body)).into_response()
}
