use std::error::Error;

use crate::error::ErrorKind;
use crate::reply::RawReply;
use crate::wire::ChatQuery;

/// The error type for a responder.
///
/// Returning an error means no response was received at all. A response
/// with a non-success status is not an error, it is a [`RawReply`].
pub trait ResponderError: Error + Send + Sync + 'static {
    /// Returns the kind of this error.
    fn kind(&self) -> ErrorKind;
}

/// A type that answers chat queries, typically by forwarding them to a
/// remote endpoint.
///
/// Once the responder is created, it should behave like a stateless
/// object. Each call to [`Responder::send_query`] is a single
/// request/response round trip: implementations must not retry, and
/// the returned future must run to completion on its own.
pub trait Responder: Send + Sync {
    /// The error type that may be returned by the responder.
    type Error: ResponderError;

    /// Sends a query and resolves with the raw reply.
    fn send_query(
        &self,
        query: &ChatQuery,
    ) -> impl Future<Output = Result<RawReply, Self::Error>> + Send + 'static;
}
