//! A local scripted responder for testing purpose.

mod preset;

use std::collections::VecDeque;
use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use little_chat_responder::{
    ChatQuery, ErrorKind, RawReply, Responder, ResponderError, StatusCode,
};
use tokio::sync::Notify;
use tokio::time::sleep;

pub use preset::*;

#[derive(Debug)]
pub struct Error {
    #[allow(dead_code)]
    message: &'static str,
    kind: ErrorKind,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl StdError for Error {}

impl ResponderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// Holds requests of a [`TestResponder`] open until released.
///
/// Every [`Gate::release`] lets exactly one request through. A release
/// that happens before the request arrives is remembered.
#[derive(Clone, Debug)]
pub struct Gate {
    notify: Arc<Notify>,
}

impl Gate {
    /// Lets one held request complete.
    #[inline]
    pub fn release(&self) {
        self.notify.notify_one();
    }
}

#[derive(Default)]
struct Shared {
    script: Mutex<VecDeque<PresetReply>>,
    received: Mutex<Vec<ChatQuery>>,
}

/// A local scripted responder for testing purpose.
///
/// Before sending queries, you need to setup the script, which is how
/// the remote side should answer. Replies are consumed in order, one per
/// query. If the script is exhausted, the query fails as if the server
/// were unreachable.
///
/// Clones share the same script and the same record of received queries.
#[derive(Clone, Default)]
pub struct TestResponder {
    shared: Arc<Shared>,
    delay: Option<Duration>,
    gate: Option<Gate>,
}

impl TestResponder {
    #[inline]
    pub fn add_reply(&mut self, preset: PresetReply) {
        lock(&self.shared.script).push_back(preset);
    }

    /// Makes every subsequent query take at least `duration` to answer.
    #[inline]
    pub fn set_delay(&mut self, duration: Duration) {
        self.delay = Some(duration);
    }

    /// Makes every subsequent query wait for a release of the returned
    /// gate before answering.
    pub fn gate(&mut self) -> Gate {
        let gate = Gate {
            notify: Arc::new(Notify::new()),
        };
        self.gate = Some(gate.clone());
        gate
    }

    /// Returns all queries received so far, in order.
    #[inline]
    pub fn received_queries(&self) -> Vec<ChatQuery> {
        lock(&self.shared.received).clone()
    }
}

impl Debug for TestResponder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestResponder")
            .field("remaining", &lock(&self.shared.script).len())
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

impl Responder for TestResponder {
    type Error = crate::Error;

    fn send_query(
        &self,
        query: &ChatQuery,
    ) -> impl Future<Output = Result<RawReply, Self::Error>> + Send + 'static
    {
        lock(&self.shared.received).push(query.clone());
        let preset = lock(&self.shared.script).pop_front();
        let delay = self.delay;
        let gate = self.gate.clone();

        async move {
            if let Some(gate) = gate {
                gate.notify.notified().await;
            }
            sleep(delay.unwrap_or(Duration::from_millis(1))).await;

            match preset {
                Some(PresetReply::Reply { status, body }) => {
                    let Ok(status) = StatusCode::from_u16(status) else {
                        return Err(Error {
                            message: "invalid status code in script",
                            kind: ErrorKind::Other,
                        });
                    };
                    Ok(RawReply::new(status, body))
                }
                Some(PresetReply::TransportFailure) => Err(Error {
                    message: "scripted transport failure",
                    kind: ErrorKind::Connect,
                }),
                None => Err(Error {
                    message: "no enough replies",
                    kind: ErrorKind::Connect,
                }),
            }
        }
    }
}

#[inline]
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use std::pin::pin;
    use std::task::Poll;

    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_script_order() {
        let mut responder = TestResponder::default();
        responder.add_reply(PresetReply::response("Hello, world!"));
        responder
            .add_reply(PresetReply::json(500, &json!({ "error": "db down" })));
        responder.add_reply(PresetReply::transport_failure());

        let reply = responder
            .send_query(&ChatQuery::new("Hi"))
            .await
            .unwrap();
        assert_eq!(reply.status(), StatusCode::OK);
        assert_eq!(reply.body(), br#"{"response":"Hello, world!"}"#);

        let reply = responder
            .send_query(&ChatQuery::new("Again"))
            .await
            .unwrap();
        assert_eq!(reply.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = responder
            .send_query(&ChatQuery::new("Once more"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Connect);

        // Script exhausted.
        let err = responder
            .send_query(&ChatQuery::new("Last"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Connect);

        let received: Vec<_> = responder
            .received_queries()
            .into_iter()
            .map(|q| q.query)
            .collect();
        assert_eq!(received, ["Hi", "Again", "Once more", "Last"]);
    }

    #[tokio::test]
    async fn test_gate_holds_request() {
        let mut responder = TestResponder::default();
        responder.add_reply(PresetReply::response("done"));
        let gate = responder.gate();

        let mut fut = pin!(responder.send_query(&ChatQuery::new("wait")));
        let polled = std::future::poll_fn(|cx| {
            Poll::Ready(fut.as_mut().poll(cx).is_pending())
        })
        .await;
        assert!(polled, "request should be held by the gate");

        gate.release();
        let reply = fut.await.unwrap();
        assert!(reply.is_success());
    }
}
