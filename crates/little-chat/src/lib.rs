//! A terminal chat client that talks to a remote chat endpoint.
//!
//! The crate includes a CLI tool for using in the terminal. And you can also
//! use it as a library to render chat sessions in your own host apps.

#![deny(missing_docs)]

pub mod render;

/// Re-exports of [`little_chat_core`] crate.
pub mod core {
    pub use little_chat_core::*;
}

/// Re-exports of [`little_chat_http_responder`] crate.
pub mod http {
    pub use little_chat_http_responder::*;
}
