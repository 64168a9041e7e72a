//! How a settled request turns into the bot message shown to the user.

use std::fmt::{self, Display};

use little_chat_responder::{RawReply, ResponderError};
use serde_json::Value;

/// Shown when no response was received at all.
pub const TRANSPORT_FAILURE_TEXT: &str =
    "Sorry, there was a problem connecting to the server. Please try again.";

/// Shown when a successful response carries no reply text.
pub const EMPTY_RESPONSE_TEXT: &str = "Sorry, I received an empty response.";

/// The result of one request/response round trip.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The server answered successfully.
    Reply(String),
    /// The server answered with a non-success status.
    ResponseError {
        /// The status code.
        status: u16,
        /// Server-provided detail, or the status text.
        detail: String,
    },
    /// No usable response was received.
    TransportError,
}

impl Outcome {
    /// Interprets a raw reply.
    ///
    /// A success body that isn't JSON, or is JSON `null`, is reported as a
    /// transport error, since nothing meaningful came back.
    pub fn from_reply(reply: &RawReply) -> Self {
        if reply.is_success() {
            let body = match serde_json::from_slice::<Value>(reply.body()) {
                Ok(Value::Null) => {
                    warn!("success body is null");
                    return Outcome::TransportError;
                }
                Ok(body) => body,
                Err(err) => {
                    warn!("malformed success body: {err}");
                    return Outcome::TransportError;
                }
            };
            let text = truthy_text(body.get("response"))
                .unwrap_or_else(|| EMPTY_RESPONSE_TEXT.to_owned());
            return Outcome::Reply(text);
        }

        let detail = serde_json::from_slice::<Value>(reply.body())
            .ok()
            .and_then(|body| truthy_text(body.get("error")));
        if detail.is_none() {
            debug!("no error detail in body, using status text");
        }
        Outcome::ResponseError {
            status: reply.status().as_u16(),
            detail: detail.unwrap_or_else(|| reply.status_text().to_owned()),
        }
    }

    /// Interprets the result of a responder call.
    pub fn from_result(
        result: Result<RawReply, Box<dyn ResponderError>>,
    ) -> Self {
        match result {
            Ok(reply) => Self::from_reply(&reply),
            Err(err) => {
                error!("no response received: {err}");
                Outcome::TransportError
            }
        }
    }

    /// Returns the text of the bot message for this outcome.
    #[inline]
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Reply(text) => f.write_str(text),
            Outcome::ResponseError { status, detail } => {
                write!(f, "Error: {detail} ({status})")
            }
            Outcome::TransportError => f.write_str(TRANSPORT_FAILURE_TEXT),
        }
    }
}

/// Extracts displayable text from a JSON field, treating missing, `null`,
/// `false`, `0` and `""` as absent.
fn truthy_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
