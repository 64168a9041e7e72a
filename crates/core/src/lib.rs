//! Core logic of a chat session: the transcript, the input state, and the
//! send/response lifecycle.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

pub mod outcome;
mod responder_client;
mod session;
pub mod transcript;

pub use session::{Session, SessionBuilder, SessionSnapshot, SessionStage};
pub use transcript::{Message, MessageId, Sender, Transcript};
