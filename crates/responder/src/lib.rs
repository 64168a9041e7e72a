//! An abstraction layer for the remote side of a chat session.
//!
//! A chat session hands every user query to a responder and gets back
//! whatever the remote side answered, without interpreting it. This crate
//! establishes that contract and the JSON shapes exchanged on the wire,
//! so that sessions can talk to a real HTTP endpoint or to a scripted
//! fake without modifying the core codebase.
//!
//! Types in this crate don't define any behavior, instead they are the
//! constraints that the implementors should adhere to.

#![deny(missing_docs)]

mod error;
mod reply;
mod responder;
mod wire;

pub use error::*;
pub use reply::*;
pub use responder::*;
pub use wire::*;
