use crate::core::message::Message;

/// Append-only store of the exchanged messages for the current session.
///
/// Each turn appends a user entry and then, once the fetch resolves or
/// fails, an assistant entry. Entries are never mutated; the whole store is
/// discarded at once on session reset.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>, suggestions: Vec<String>) {
        self.messages.push(Message::assistant(content, suggestions));
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
