//! Serves the chat endpoint.

#[macro_use]
extern crate tracing;

use std::env;
use std::net::SocketAddr;

use little_chat_server::openai::{OpenAIBackend, OpenAIConfigBuilder};
use little_chat_server::{ReplyService, router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

const DEFAULT_ADDR: &str = "127.0.0.1:5000";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let addr = env::var("LITTLE_CHAT_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_owned());
    let addr: SocketAddr = match addr.parse() {
        Ok(addr) => addr,
        Err(err) => {
            eprintln!("LITTLE_CHAT_ADDR is not a valid address: {err}");
            return;
        }
    };

    let replies = match openai_backend() {
        Some(backend) => ReplyService::with_backend(backend),
        None => {
            warn!(
                "OPENAI_API_KEY is not set, only canned replies will be \
                 available"
            );
            ReplyService::unavailable()
        }
    };
    let app = router(replies).layer(TraceLayer::new_for_http());

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            eprintln!("failed to bind {addr}: {err}");
            return;
        }
    };
    info!("chat endpoint listening on {addr}");

    if let Err(err) = axum::serve(listener, app).await {
        error!("server stopped: {err}");
    }
}

fn openai_backend() -> Option<OpenAIBackend> {
    let Ok(api_key) = env::var("OPENAI_API_KEY") else {
        return None;
    };

    let mut config = OpenAIConfigBuilder::with_api_key(api_key)
        .with_system_prompt(include_str!("./system_prompt.md"));
    if let Ok(base_url) = env::var("OPENAI_BASE_URL") {
        config = config.with_base_url(base_url);
    }
    if let Ok(model) = env::var("OPENAI_MODEL") {
        config = config.with_model(model);
    }
    let config = config.build();
    info!("using backend: {config:?}");
    Some(OpenAIBackend::new(config))
}
