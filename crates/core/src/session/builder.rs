use little_chat_responder::Responder;

use super::Session;
use super::state::{Callbacks, SessionState};
use crate::responder_client::ResponderClient;
use crate::transcript::Message;

/// [`Session`] builder.
///
/// The callbacks are how the session notifies whatever renders it. They
/// are invoked from the session task, in the order the changes happen.
pub struct SessionBuilder {
    responder: ResponderClient,
    callbacks: Callbacks,
}

impl SessionBuilder {
    /// Creates a new builder with the specified responder.
    #[inline]
    pub fn with_responder<R: Responder + 'static>(responder: R) -> Self {
        Self {
            responder: ResponderClient::new(responder),
            callbacks: Callbacks::default(),
        }
    }

    /// Attaches a callback to be invoked when a message is appended to
    /// the transcript.
    #[inline]
    pub fn on_message_appended(
        mut self,
        on_message_appended: impl Fn(&Message) + Send + Sync + 'static,
    ) -> Self {
        self.callbacks.on_message_appended =
            Some(Box::new(on_message_appended));
        self
    }

    /// Attaches a callback to be invoked when the pending placeholder is
    /// removed from the transcript.
    #[inline]
    pub fn on_message_removed(
        mut self,
        on_message_removed: impl Fn(&Message) + Send + Sync + 'static,
    ) -> Self {
        self.callbacks.on_message_removed = Some(Box::new(on_message_removed));
        self
    }

    /// Attaches a callback to be invoked when input gets enabled or
    /// disabled.
    #[inline]
    pub fn on_input_enabled(
        mut self,
        on_input_enabled: impl Fn(bool) + Send + Sync + 'static,
    ) -> Self {
        self.callbacks.on_input_enabled = Some(Box::new(on_input_enabled));
        self
    }

    /// Attaches a callback to be invoked when the draft changes.
    #[inline]
    pub fn on_draft_changed(
        mut self,
        on_draft_changed: impl Fn(&str) + Send + Sync + 'static,
    ) -> Self {
        self.callbacks.on_draft_changed = Some(Box::new(on_draft_changed));
        self
    }

    /// Attaches a callback to be invoked when a query has settled and the
    /// session is idle again.
    #[inline]
    pub fn on_idle(
        mut self,
        on_idle: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        self.callbacks.on_idle = Some(Box::new(on_idle));
        self
    }

    /// Builds the session.
    ///
    /// Must be called within a tokio runtime.
    #[inline]
    pub fn build(self) -> Session {
        Session::spawn(SessionState::new(self.responder, self.callbacks))
    }
}
