use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;

use crate::{
    application::{evaluate_submission, Application, Sender, Submission},
    domain::ChatId,
    messaging::port::MessagingPort,
    texts, Result,
};

/// Where a chat currently is in the questionnaire cycle.
///
/// A chat with no registry entry is `Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConversationState {
    #[default]
    Idle,
    AwaitingAnswers,
}

/// Per-chat state, keyed by chat identity. Distinct chats never contend
/// beyond map access; concurrent messages from the same chat race with
/// undefined ordering.
#[derive(Default)]
pub struct ConversationRegistry {
    inner: Mutex<HashMap<ChatId, ConversationState>>,
}

impl ConversationRegistry {
    pub async fn state(&self, chat_id: ChatId) -> ConversationState {
        let map = self.inner.lock().await;
        map.get(&chat_id).copied().unwrap_or_default()
    }

    pub async fn set_awaiting(&self, chat_id: ChatId) {
        let mut map = self.inner.lock().await;
        map.insert(chat_id, ConversationState::AwaitingAnswers);
    }

    pub async fn set_idle(&self, chat_id: ChatId) {
        let mut map = self.inner.lock().await;
        map.remove(&chat_id);
    }
}

/// The two-state questionnaire flow, behind the messaging port so any
/// transport (or a test double) can drive it.
pub struct ConversationEngine {
    admin_chat_id: ChatId,
    messenger: Arc<dyn MessagingPort>,
    conversations: ConversationRegistry,
}

impl ConversationEngine {
    pub fn new(admin_chat_id: ChatId, messenger: Arc<dyn MessagingPort>) -> Self {
        Self {
            admin_chat_id,
            messenger,
            conversations: ConversationRegistry::default(),
        }
    }

    /// Start trigger: greet the chat and arm answer collection.
    ///
    /// Always restarts the cycle, even when the chat was already armed. The
    /// chat is only armed once the welcome actually went out.
    pub async fn handle_start(&self, chat_id: ChatId) -> Result<()> {
        self.messenger.send_text(chat_id, texts::WELCOME).await?;
        self.conversations.set_awaiting(chat_id).await;
        Ok(())
    }

    /// Any non-start message. `text` is `None` for stickers, photos and the
    /// like, which count as a failed submission while answers are expected.
    pub async fn handle_message(
        &self,
        chat_id: ChatId,
        sender: &Sender,
        text: Option<&str>,
    ) -> Result<()> {
        match self.conversations.state(chat_id).await {
            ConversationState::Idle => Ok(()),
            ConversationState::AwaitingAnswers => {
                self.process_answers(chat_id, sender, text).await
            }
        }
    }

    async fn process_answers(
        &self,
        chat_id: ChatId,
        sender: &Sender,
        text: Option<&str>,
    ) -> Result<()> {
        let submission = match text {
            Some(text) => evaluate_submission(sender, text),
            None => Submission::InvalidFormat,
        };

        match submission {
            Submission::InvalidFormat => {
                // Stay armed: retries are unbounded.
                self.messenger
                    .send_text(chat_id, texts::INVALID_FORMAT)
                    .await?;
                Ok(())
            }
            Submission::Accepted(app) => {
                if let Err(e) = self.relay(chat_id, &app).await {
                    eprintln!("Failed to relay application from chat {}: {e}", chat_id.0);
                    let _ = self
                        .messenger
                        .send_text(chat_id, texts::PROCESSING_ERROR)
                        .await;
                    // Back to idle so a fresh start trigger always works.
                    self.conversations.set_idle(chat_id).await;
                }
                Ok(())
            }
        }
    }

    async fn relay(&self, chat_id: ChatId, app: &Application) -> Result<()> {
        self.messenger
            .send_text(self.admin_chat_id, &app.admin_notification())
            .await?;
        self.messenger
            .send_text(chat_id, texts::CONFIRMATION)
            .await?;
        self.conversations.set_idle(chat_id).await;
        Ok(())
    }
}
