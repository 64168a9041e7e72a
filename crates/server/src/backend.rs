use std::error::Error;
use std::fmt::{self, Display};

use async_trait::async_trait;

/// Something that can answer a query the canned replies don't cover,
/// typically a language model.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Answers a query.
    async fn answer(&self, query: &str) -> Result<String, BackendError>;
}

/// Error type for [`Backend`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BackendError {
    message: String,
}

impl BackendError {
    /// Creates an error with the given message.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "backend error: {}", self.message)
    }
}

impl Error for BackendError {}
