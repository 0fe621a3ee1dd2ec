//! Output buffer for command invocations.
//!
//! Each dispatch creates a fresh buffer, the invoked command appends message
//! lines to it, the requested filters may rewrite it, and the session layer
//! consumes the final lines for transmission. The buffer is single-owner for
//! the duration of one invocation and needs no synchronization of its own.

/// Ordered collection of message lines produced by one command invocation.
#[derive(Debug, Default)]
pub struct CommandOutputBuffer {
    messages: Vec<String>,
}

impl CommandOutputBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message line.
    pub fn add_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Returns the current message lines in order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Replaces the buffer contents as a whole. Filters use this to
    /// substitute a derived sequence without changing the buffer's identity.
    pub fn set_messages(&mut self, messages: Vec<String>) {
        self.messages = messages;
    }

    /// Returns the number of message lines.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if the buffer holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Consumes the buffer, yielding the final lines.
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}
