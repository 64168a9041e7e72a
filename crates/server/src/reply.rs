use std::sync::Arc;

use crate::backend::Backend;

const GREETINGS: &[&str] =
    &["hi", "hello", "hey", "hii", "heyy", "yo", "greetings"];
const CLOSINGS: &[&str] =
    &["bye", "goodbye", "thanks", "thank you", "ok", "okay"];

const GREETING_REPLY: &str = "Hello! How can I assist you today?";
const CLOSING_REPLY: &str =
    "You're welcome! Feel free to ask if you have more questions.";
const UNAVAILABLE_REPLY: &str = "Sorry, the chatbot system encountered an \
                                 error during startup and is not available.";
const BACKEND_FAILURE_REPLY: &str = "Sorry, an unexpected error occurred \
                                     while processing your request. Please \
                                     try again.";
const BLANK_ANSWER_REPLY: &str = "Sorry, I couldn't formulate a response.";

/// Produces the reply text for a query.
///
/// Replying never fails: backend problems become apologetic replies.
#[derive(Clone)]
pub struct ReplyService {
    backend: Option<Arc<dyn Backend>>,
}

impl ReplyService {
    /// Creates a service that asks `backend` for anything that isn't a
    /// greeting or a closing.
    #[inline]
    pub fn with_backend<B: Backend + 'static>(backend: B) -> Self {
        Self {
            backend: Some(Arc::new(backend)),
        }
    }

    /// Creates a service without a backend, for when none could be set up.
    #[inline]
    pub fn unavailable() -> Self {
        Self { backend: None }
    }

    /// Replies to a query.
    pub async fn reply(&self, query: &str) -> String {
        if let Some(reply) = canned_reply(query) {
            debug!("answering with a canned reply");
            return reply.to_owned();
        }

        let Some(backend) = &self.backend else {
            error!("no backend configured, cannot answer the query");
            return UNAVAILABLE_REPLY.to_owned();
        };

        debug!("processing query: {query:?}");
        match backend.answer(query).await {
            Ok(answer) if answer.trim().is_empty() => {
                warn!("backend returned a blank answer");
                BLANK_ANSWER_REPLY.to_owned()
            }
            Ok(answer) => {
                debug!("generated answer length: {}", answer.len());
                answer
            }
            Err(err) => {
                error!("{err}");
                BACKEND_FAILURE_REPLY.to_owned()
            }
        }
    }
}

fn canned_reply(query: &str) -> Option<&'static str> {
    let normalized = query
        .to_lowercase()
        .trim()
        .trim_matches(|c| matches!(c, '!' | '?' | '.'))
        .to_owned();

    if GREETINGS.contains(&normalized.as_str()) {
        Some(GREETING_REPLY)
    } else if CLOSINGS.contains(&normalized.as_str()) {
        Some(CLOSING_REPLY)
    } else {
        None
    }
}
