//! # Transcript
//!
//! The append-only conversation history shown in the chat pane.
//!
//! Messages are immutable once created and live only in memory for the
//! session. Ids are derived from a monotonically non-decreasing
//! millisecond clock so they are unique even when two messages are created
//! within the same tick.

use chrono::{DateTime, Local};

/// Greeting seeded into every new transcript.
pub const GREETING: &str = "Hi there, ask me anything";

/// A single transcript entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub is_user: bool,
    pub timestamp: DateTime<Local>,
}

/// Ordered, append-only sequence of [`ChatMessage`] entries.
///
/// The only mutations are `push_user` / `push_bot`; existing entries are
/// never modified or removed. `last_id` tracks the id clock so a burst of
/// messages inside one millisecond still gets strictly increasing ids.
#[derive(Debug, Clone)]
pub struct Transcript {
    pub messages: Vec<ChatMessage>,
    last_id: u64,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    /// Creates a transcript pre-seeded with the bot greeting.
    pub fn new() -> Self {
        let mut transcript = Self {
            messages: Vec::new(),
            last_id: 0,
        };
        transcript.push_bot(GREETING.to_string());
        transcript
    }

    /// Next message id: submission time in millis, bumped past the previous
    /// id when the clock hasn't advanced.
    fn next_id(&mut self) -> String {
        let now = Local::now().timestamp_millis().max(0) as u64;
        let id = now.max(self.last_id + 1);
        self.last_id = id;
        id.to_string()
    }

    fn push(&mut self, content: String, is_user: bool) -> &ChatMessage {
        let message = ChatMessage {
            id: self.next_id(),
            content,
            is_user,
            timestamp: Local::now(),
        };
        self.messages.push(message);
        self.messages.last().expect("just pushed")
    }

    pub fn push_user(&mut self, content: String) -> &ChatMessage {
        self.push(content, true)
    }

    pub fn push_bot(&mut self, content: String) -> &ChatMessage {
        self.push(content, false)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_transcript_contains_greeting() {
        let transcript = Transcript::new();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages[0].content, GREETING);
        assert!(!transcript.messages[0].is_user);
    }

    #[test]
    fn ids_are_unique_and_increasing_within_a_burst() {
        let mut transcript = Transcript::new();
        for i in 0..50 {
            transcript.push_user(format!("msg {i}"));
        }
        let ids: Vec<u64> = transcript
            .messages
            .iter()
            .map(|m| m.id.parse().unwrap())
            .collect();
        for pair in ids.windows(2) {
            assert!(pair[1] > pair[0], "ids must be strictly increasing");
        }
    }

    #[test]
    fn push_sets_user_flag() {
        let mut transcript = Transcript::new();
        transcript.push_user("hello".into());
        transcript.push_bot("hi".into());
        assert!(transcript.messages[1].is_user);
        assert!(!transcript.messages[2].is_user);
    }
}
