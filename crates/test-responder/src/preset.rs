use little_chat_responder::ChatResponse;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A scripted reply.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PresetReply {
    /// The remote side answers with this status and body.
    #[serde(rename = "reply")]
    Reply {
        /// HTTP status code.
        status: u16,
        /// Raw body, not necessarily valid JSON.
        body: String,
    },
    /// No response is received at all.
    #[serde(rename = "transport_failure")]
    TransportFailure,
}

impl PresetReply {
    /// A `200 OK` reply carrying `{"response": text}`.
    #[inline]
    pub fn response<S: Into<String>>(text: S) -> Self {
        let body = ChatResponse {
            response: text.into(),
        };
        Self::json(200, &serde_json::to_value(body).unwrap_or_default())
    }

    /// A reply with the given status and a JSON body.
    #[inline]
    pub fn json(status: u16, body: &Value) -> Self {
        Self::Reply {
            status,
            body: body.to_string(),
        }
    }

    /// A reply with the given status and a raw body.
    #[inline]
    pub fn raw<S: Into<String>>(status: u16, body: S) -> Self {
        Self::Reply {
            status,
            body: body.into(),
        }
    }

    /// A failure before any response is received.
    #[inline]
    pub fn transport_failure() -> Self {
        Self::TransportFailure
    }
}
