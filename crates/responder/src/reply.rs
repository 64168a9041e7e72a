use bytes::Bytes;
pub use http::StatusCode;

/// Whatever the remote side answered: a status and an uninterpreted body.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RawReply {
    status: StatusCode,
    body: Bytes,
}

impl RawReply {
    /// Creates a reply from a status and a body.
    #[inline]
    pub fn new<B: Into<Bytes>>(status: StatusCode, body: B) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns the status code.
    #[inline]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns `true` if the status is in the `200..=299` range.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the reason phrase for the status.
    ///
    /// Reason phrases are not transmitted reliably (HTTP/2 drops them), so
    /// this is always the canonical phrase of the code, or an empty string
    /// for unregistered codes.
    #[inline]
    pub fn status_text(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("")
    }

    /// Returns the body bytes.
    #[inline]
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
