//! The remote side of a chat session: an HTTP service that answers
//! queries posted to the chat endpoint.
//!
//! Short greetings and closings get a canned reply, everything else is
//! handed to a [`Backend`]. If no backend could be configured the service
//! still runs, and says so in its replies.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod backend;
pub mod openai;
mod reply;
mod routes;

pub use backend::{Backend, BackendError};
pub use reply::ReplyService;
pub use routes::router;
