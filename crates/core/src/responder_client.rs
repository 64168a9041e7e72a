use std::pin::Pin;
use std::sync::Arc;

use little_chat_responder::{
    ChatQuery, RawReply, Responder, ResponderError,
};
use tracing::Instrument;

use crate::outcome::Outcome;

type SendQueryResult = Result<RawReply, Box<dyn ResponderError>>;
type BoxedSendQueryFuture =
    Pin<Box<dyn Future<Output = SendQueryResult> + Send>>;
type HandlerFn = Arc<dyn Fn(ChatQuery) -> BoxedSendQueryFuture + Send + Sync>;

/// A wrapper around a responder that provides a type-erased interface for
/// the session.
#[derive(Clone)]
pub struct ResponderClient {
    handler_fn: HandlerFn,
}

impl ResponderClient {
    #[inline]
    pub fn new<R: Responder + 'static>(responder: R) -> Self {
        // Erase `R` so that the session doesn't need a generic parameter.
        let handler_fn: HandlerFn = Arc::new(move |query| {
            let fut = responder.send_query(&query);
            Box::pin(
                async move {
                    trace!("sending query: {:?}", query);
                    fut.await.map_err(|err| {
                        Box::new(err) as Box<dyn ResponderError>
                    })
                }
                .instrument(trace_span!("responder req")),
            )
        });
        Self { handler_fn }
    }

    /// Sends a query and waits for it to settle.
    ///
    /// This never fails: a missing response is reported as
    /// [`Outcome::TransportError`].
    #[inline]
    pub async fn send_query(&self, query: ChatQuery) -> Outcome {
        let result = (self.handler_fn)(query).await;
        let outcome = Outcome::from_result(result);
        trace!("query settled: {outcome:?}");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use little_chat_test_responder::{PresetReply, TestResponder};
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_send_query() {
        let mut responder = TestResponder::default();
        responder.add_reply(PresetReply::response("How are you?"));
        responder
            .add_reply(PresetReply::json(503, &json!({ "error": "busy" })));
        responder.add_reply(PresetReply::transport_failure());

        let client = ResponderClient::new(responder.clone());

        let outcome = client.send_query(ChatQuery::new("Hi")).await;
        assert_eq!(outcome, Outcome::Reply("How are you?".to_owned()));

        let outcome = client.send_query(ChatQuery::new("Hi")).await;
        assert_eq!(outcome.text(), "Error: busy (503)");

        let outcome = client.send_query(ChatQuery::new("Hi")).await;
        assert_eq!(outcome, Outcome::TransportError);

        assert_eq!(responder.received_queries().len(), 3);
    }

    #[tokio::test]
    async fn test_exhausted_script() {
        let client = ResponderClient::new(TestResponder::default());
        let outcome = client.send_query(ChatQuery::new("Hi")).await;
        assert_eq!(outcome, Outcome::TransportError);
    }
}
