use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::future::ready;
use std::time::Duration;

use little_chat_responder::{
    ChatError, ChatQuery, ChatResponse, ErrorKind, RawReply, Responder,
    ResponderError, StatusCode,
};
use tokio::time::sleep;

#[derive(Debug)]
struct EchoResponderError(ErrorKind);

impl Display for EchoResponderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Error for EchoResponderError {}

impl ResponderError for EchoResponderError {
    fn kind(&self) -> ErrorKind {
        self.0
    }
}

/// Echoes queries back, rejects the word "forbidden" with a status, and
/// pretends the network is down for "offline".
struct EchoResponder;

impl Responder for EchoResponder {
    type Error = EchoResponderError;

    fn send_query(
        &self,
        query: &ChatQuery,
    ) -> impl Future<Output = Result<RawReply, Self::Error>> + Send + 'static
    {
        let query = query.query.clone();
        async move {
            sleep(Duration::from_millis(1)).await;
            match query.as_str() {
                "offline" => Err(EchoResponderError(ErrorKind::Connect)),
                "forbidden" => {
                    let body = serde_json::to_vec(&ChatError {
                        error: "not allowed".to_owned(),
                    })
                    .unwrap();
                    Ok(RawReply::new(StatusCode::FORBIDDEN, body))
                }
                _ => {
                    let body = serde_json::to_vec(&ChatResponse {
                        response: format!("You said {query}"),
                    })
                    .unwrap();
                    Ok(RawReply::new(StatusCode::OK, body))
                }
            }
        }
    }
}

/// A responder that fails synchronously, before any future is polled.
struct BrokenResponder;

impl Responder for BrokenResponder {
    type Error = EchoResponderError;

    fn send_query(
        &self,
        _query: &ChatQuery,
    ) -> impl Future<Output = Result<RawReply, Self::Error>> + Send + 'static
    {
        ready(Err(EchoResponderError(ErrorKind::Other)))
    }
}

#[tokio::test]
async fn test_echo() {
    let reply = EchoResponder
        .send_query(&ChatQuery::new("Good morning"))
        .await
        .unwrap();
    assert!(reply.is_success());

    let body: ChatResponse = serde_json::from_slice(reply.body()).unwrap();
    assert_eq!(body.response, "You said Good morning");
}

#[tokio::test]
async fn test_status_is_not_an_error() {
    let reply = EchoResponder
        .send_query(&ChatQuery::new("forbidden"))
        .await
        .unwrap();
    assert!(!reply.is_success());
    assert_eq!(reply.status(), StatusCode::FORBIDDEN);
    assert_eq!(reply.status_text(), "Forbidden");

    let body: ChatError = serde_json::from_slice(reply.body()).unwrap();
    assert_eq!(body.error, "not allowed");
}

#[tokio::test]
async fn test_transport_error() {
    let err = EchoResponder
        .send_query(&ChatQuery::new("offline"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Connect);

    let err = BrokenResponder
        .send_query(&ChatQuery::new("anything"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Other);
}
