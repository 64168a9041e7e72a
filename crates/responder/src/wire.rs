use serde::{Deserialize, Serialize};

/// Path of the chat endpoint, relative to the server root.
pub const CHAT_ENDPOINT: &str = "/api/chat";

/// The request body sent to the chat endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatQuery {
    /// The user text, already trimmed.
    pub query: String,
}

impl ChatQuery {
    /// Creates a query from the given text.
    #[inline]
    pub fn new<S: Into<String>>(query: S) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// The body of a successful reply.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The reply text.
    pub response: String,
}

/// The body of a failed reply.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatError {
    /// A message meant to be shown to the user.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_query_shape() {
        let value = serde_json::to_value(ChatQuery::new("hello")).unwrap();
        assert_eq!(value, json!({ "query": "hello" }));
    }

    #[test]
    fn test_reply_shapes() {
        let response: ChatResponse =
            serde_json::from_value(json!({ "response": "hi there" })).unwrap();
        assert_eq!(response.response, "hi there");

        let error = serde_json::to_value(ChatError {
            error: "db down".to_owned(),
        })
        .unwrap();
        assert_eq!(error, json!({ "error": "db down" }));
    }
}
