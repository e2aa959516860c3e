use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use intake_core::{
    config::Config, conversation::ConversationEngine, messaging::port::MessagingPort,
};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ConversationEngine>,
}

pub async fn run_polling(cfg: Arc<Config>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    // Basic startup info.
    if let Ok(me) = bot.get_me().await {
        println!("intake bot started: @{}", me.username());
    }
    println!("Forwarding applications to chat {}", cfg.admin_chat_id.0);

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));
    let state = Arc::new(AppState {
        engine: Arc::new(ConversationEngine::new(cfg.admin_chat_id, messenger)),
    });

    let handler =
        dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch()
        .await;

    Ok(())
}
