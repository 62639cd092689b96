use super::{Headers, Message};

/// Mutable builder for constructing a [`Message`]
pub struct MessageBuilder {
    headers: Headers,
    payload: String,
}

impl MessageBuilder {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            headers: Headers::new(),
            payload: payload.into(),
        }
    }

    /// Set a header on the message being built
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Build the immutable message
    pub fn build(self) -> Message {
        Message {
            headers: self.headers,
            payload: self.payload,
        }
    }
}
