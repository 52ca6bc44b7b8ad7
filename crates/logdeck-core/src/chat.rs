//! Chat transcript state.
//!
//! Append-only within a session: user entries are added optimistically
//! before the backend confirms, and are never rolled back on failure.

use logdeck_api::ChatExchange;

/// Synthetic bot entry shown when a send fails.
pub const SEND_FAILED: &str = "❌ Error: Could not process message";

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Bot,
}

/// One line of the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub role: ChatRole,
    pub text: String,
}

impl ChatEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Bot,
            text: text.into(),
        }
    }
}

/// Ordered transcript, oldest-first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<ChatEntry>,
}

impl Transcript {
    /// Rebuild from a history fetch. The backend returns exchanges
    /// newest-first; display order is oldest-first, each exchange as a
    /// user/bot pair.
    pub fn from_history(newest_first: &[ChatExchange]) -> Self {
        let mut entries = Vec::with_capacity(newest_first.len() * 2);
        for exchange in newest_first.iter().rev() {
            entries.push(ChatEntry::user(exchange.user_message.clone()));
            entries.push(ChatEntry::bot(
                exchange.bot_response.clone().unwrap_or_default(),
            ));
        }
        Self { entries }
    }

    pub fn push(&mut self, entry: ChatEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exchange(user: &str, bot: Option<&str>) -> ChatExchange {
        ChatExchange {
            user_message: user.into(),
            bot_response: bot.map(Into::into),
            timestamp: None,
            command_type: None,
            success: None,
        }
    }

    #[test]
    fn history_renders_oldest_first_as_pairs() {
        // Backend order: B (newest), then A.
        let newest_first = vec![
            exchange("B", Some("B-bot")),
            exchange("A", Some("A-bot")),
        ];

        let t = Transcript::from_history(&newest_first);

        let texts: Vec<&str> = t.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["A", "A-bot", "B", "B-bot"]);
        assert_eq!(t.entries()[0].role, ChatRole::User);
        assert_eq!(t.entries()[1].role, ChatRole::Bot);
    }

    #[test]
    fn missing_bot_response_becomes_empty_entry() {
        let t = Transcript::from_history(&[exchange("hi", None)]);
        assert_eq!(t.len(), 2);
        assert_eq!(t.entries()[1].text, "");
    }
}
