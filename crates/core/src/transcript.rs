//! Transcript-related types.

/// Text shown by the placeholder while a reply is pending.
pub const PENDING_TEXT: &str = ".";

/// Who a message comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sender {
    /// The person typing into the session.
    User,
    /// The remote responder, or the session speaking on its behalf.
    Bot,
}

/// Identifies a message within one session.
///
/// Ids are handed out in increasing order and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(u64);

/// A displayed message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Message {
    id: MessageId,
    text: String,
    sender: Sender,
    pending: bool,
}

impl Message {
    /// Returns the id of this message.
    #[inline]
    pub fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the text of this message.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the sender of this message.
    #[inline]
    pub fn sender(&self) -> Sender {
        self.sender
    }

    /// Returns `true` if this is the placeholder shown while a reply is
    /// pending.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// The ordered list of displayed messages for a session.
///
/// Insertion order is display order. Messages are never edited, and the
/// only one that can be removed is the pending placeholder, of which
/// there is at most one at any time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
    next_id: u64,
}

impl Transcript {
    /// Returns all messages in display order.
    #[inline]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the number of messages.
    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if no message has been displayed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the last message, if any.
    #[inline]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Returns the pending placeholder, if one is displayed.
    #[inline]
    pub fn pending(&self) -> Option<&Message> {
        self.messages.iter().find(|m| m.pending)
    }

    pub(crate) fn push(&mut self, sender: Sender, text: String) -> &Message {
        self.push_message(sender, text, false)
    }

    /// Appends the pending placeholder, or returns `None` if there is
    /// already one.
    pub(crate) fn push_pending(&mut self) -> Option<&Message> {
        if self.pending().is_some() {
            return None;
        }
        Some(self.push_message(Sender::Bot, PENDING_TEXT.to_owned(), true))
    }

    /// Removes and returns the pending placeholder, if present.
    pub(crate) fn remove_pending(&mut self) -> Option<Message> {
        let idx = self.messages.iter().rposition(|m| m.pending)?;
        Some(self.messages.remove(idx))
    }

    fn push_message(
        &mut self,
        sender: Sender,
        text: String,
        pending: bool,
    ) -> &Message {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.messages.push(Message {
            id,
            text,
            sender,
            pending,
        });
        &self.messages[self.messages.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order() {
        let mut transcript = Transcript::default();
        let first = transcript.push(Sender::User, "hello".to_owned()).id();
        let second = transcript.push(Sender::Bot, "hi there".to_owned()).id();
        assert!(first < second);

        let texts: Vec<_> =
            transcript.messages().iter().map(Message::text).collect();
        assert_eq!(texts, ["hello", "hi there"]);
        assert_eq!(transcript.last().unwrap().sender(), Sender::Bot);
    }

    #[test]
    fn test_single_pending_placeholder() {
        let mut transcript = Transcript::default();
        transcript.push(Sender::User, "x".to_owned());

        let pending = transcript.push_pending().unwrap().clone();
        assert!(pending.is_pending());
        assert_eq!(pending.sender(), Sender::Bot);
        assert_eq!(pending.text(), PENDING_TEXT);
        assert!(transcript.push_pending().is_none());
        assert_eq!(transcript.len(), 2);

        assert_eq!(transcript.remove_pending(), Some(pending));
        assert!(transcript.pending().is_none());
        assert!(transcript.remove_pending().is_none());
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut transcript = Transcript::default();
        let pending = transcript.push_pending().unwrap().id();
        transcript.remove_pending();
        let reply = transcript.push(Sender::Bot, "done".to_owned()).id();
        assert_ne!(pending, reply);
    }
}
