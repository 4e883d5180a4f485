// Chat service - append-only transcript behind the assistant panel
use crate::application::error::ChatError;
use crate::domain::chat::{ChatMessage, Sender};
use chrono::Utc;
use tokio::sync::Mutex;

const GREETING: &str = "Hi! Ask me anything about your listeners, trends or upcoming shows.";

#[derive(Debug, Default)]
struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

#[derive(Debug)]
pub struct ChatService {
    transcript: Mutex<Transcript>,
}

impl Default for ChatService {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatService {
    /// Transcript opened with the assistant greeting
    pub fn new() -> Self {
        let mut transcript = Transcript::default();
        Self::push(&mut transcript, Sender::Assistant, GREETING.to_string());
        Self {
            transcript: Mutex::new(transcript),
        }
    }

    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.transcript.lock().await.messages.clone()
    }

    pub async fn append(&self, sender: Sender, text: &str) -> Result<ChatMessage, ChatError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        let mut transcript = self.transcript.lock().await;
        Ok(Self::push(&mut transcript, sender, text.to_string()))
    }

    fn push(transcript: &mut Transcript, sender: Sender, text: String) -> ChatMessage {
        transcript.next_id += 1;
        let message = ChatMessage::new(
            format!("msg-{}", transcript.next_id),
            sender,
            text,
            Utc::now(),
        );
        transcript.messages.push(message.clone());
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_starts_with_greeting() {
        let chat = ChatService::new();
        let messages = chat.messages().await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, Sender::Assistant);
    }

    #[tokio::test]
    async fn test_append_preserves_order_and_ids() {
        let chat = ChatService::new();
        let first = chat.append(Sender::User, "How many listeners in Berlin?").await.unwrap();
        let second = chat.append(Sender::Assistant, " About 12k. ").await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(second.text, "About 12k.");
        let texts: Vec<String> = chat.messages().await.into_iter().map(|m| m.text).collect();
        assert_eq!(texts[1..], ["How many listeners in Berlin?", "About 12k."]);
    }

    #[tokio::test]
    async fn test_empty_message_rejected() {
        let chat = ChatService::new();
        assert_eq!(chat.append(Sender::User, "   ").await, Err(ChatError::EmptyMessage));
        assert_eq!(chat.messages().await.len(), 1);
    }
}
