//! Telegram update handlers.
//!
//! Translate teloxide updates into conversation-engine calls. Failures are
//! logged at this boundary so the dispatcher keeps serving.

use std::sync::Arc;

use teloxide::{prelude::*, types::User};

use intake_core::{
    application::Sender,
    domain::{ChatId, UserId},
};

use crate::router::AppState;

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    // Channel posts and other author-less updates have no one to reply to.
    let Some(user) = msg.from() else {
        return Ok(());
    };

    let chat_id = ChatId(msg.chat.id.0);

    if let Some(text) = msg.text() {
        if is_start_command(text) {
            if let Err(e) = state.engine.handle_start(chat_id).await {
                eprintln!("Failed to greet chat {}: {e}", chat_id.0);
            }
            return Ok(());
        }
    }

    let sender = sender_from(user);
    if let Err(e) = state
        .engine
        .handle_message(chat_id, &sender, msg.text())
        .await
    {
        eprintln!("Failed to handle message from chat {}: {e}", chat_id.0);
    }

    Ok(())
}

fn sender_from(user: &User) -> Sender {
    Sender {
        user_id: UserId(user.id.0 as i64),
        username: user.username.clone(),
        first_name: Some(user.first_name.clone()).filter(|s| !s.is_empty()),
        last_name: user.last_name.clone(),
    }
}

/// Telegram may send `/start@botname args...`; only the leading command
/// token counts.
fn is_start_command(text: &str) -> bool {
    let Some(first) = text.trim().split_whitespace().next() else {
        return false;
    };
    let Some(cmd) = first.strip_prefix('/') else {
        return false;
    };
    cmd.split('@')
        .next()
        .unwrap_or("")
        .eq_ignore_ascii_case("start")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_command_variants() {
        assert!(is_start_command("/start"));
        assert!(is_start_command("  /start  "));
        assert!(is_start_command("/start@intake_bot"));
        assert!(is_start_command("/START"));

        assert!(!is_start_command("start"));
        assert!(!is_start_command("/started"));
        assert!(!is_start_command("1. a /start"));
        assert!(!is_start_command(""));
    }
}
