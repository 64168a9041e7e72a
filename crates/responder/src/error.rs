use std::fmt::{self, Display};

/// The kind of transport failure that occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The remote endpoint could not be reached.
    Connect,
    /// A response started arriving but its body could not be read.
    Body,
    /// Any other errors.
    Other,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Connect => write!(f, "connect error"),
            ErrorKind::Body => write!(f, "body error"),
            ErrorKind::Other => write!(f, "transport error"),
        }
    }
}
