//! A responder that posts chat queries to an HTTP endpoint.

#[macro_use]
extern crate tracing;

mod config;

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::sync::Arc;

use little_chat_responder::{
    ChatQuery, ErrorKind, RawReply, Responder, ResponderError,
};
use reqwest::{Client, header};

pub use config::{HttpResponderConfig, HttpResponderConfigBuilder};

/// Error type for [`HttpResponder`].
#[derive(Debug)]
pub struct Error {
    message: String,
    kind: ErrorKind,
}

impl Error {
    fn from_reqwest(err: reqwest::Error) -> Self {
        let kind = if err.is_connect() {
            ErrorKind::Connect
        } else if err.is_body() || err.is_decode() {
            ErrorKind::Body
        } else {
            ErrorKind::Other
        };
        Self {
            message: format!("{err}"),
            kind,
        }
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl StdError for Error {}

impl ResponderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// Responder backed by a remote chat endpoint.
///
/// Every query is one `POST` with a JSON body. Whatever status comes
/// back is handed over untouched, only failing to get a response at all
/// is an error.
#[derive(Clone, Debug)]
pub struct HttpResponder {
    client: Client,
    config: Arc<HttpResponderConfig>,
}

impl HttpResponder {
    /// Creates a new `HttpResponder` with the given configuration.
    #[inline]
    pub fn new(config: HttpResponderConfig) -> Self {
        Self {
            client: Client::new(),
            config: Arc::new(config),
        }
    }
}

impl Responder for HttpResponder {
    type Error = Error;

    fn send_query(
        &self,
        query: &ChatQuery,
    ) -> impl Future<Output = Result<RawReply, Self::Error>> + Send + 'static
    {
        let url = self.config.endpoint_url();
        debug!("posting query to {url}");
        let resp_fut = self
            .client
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(query)
            .send();

        async move {
            let resp = resp_fut.await.map_err(Error::from_reqwest)?;
            let status = resp.status();
            let body = match resp.bytes().await {
                Ok(body) => body,
                // The status alone is enough to report a failed request.
                Err(err) if !status.is_success() => {
                    warn!("failed to read body of {status} reply: {err}");
                    Default::default()
                }
                Err(err) => return Err(Error::from_reqwest(err)),
            };
            trace!("got {status} with {} bytes", body.len());
            Ok(RawReply::new(status, body))
        }
    }
}
