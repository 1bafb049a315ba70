//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, error};

use crate::lookup_config::Messages;

use super::ui_builder::{reply_parse_mode, CALLBACK_HELP, CALLBACK_PRIVACY};

/// Text shown for a button's callback data, if the button is known
pub fn callback_text<'a>(data: &str, messages: &'a Messages) -> Option<&'a str> {
    match data {
        CALLBACK_HELP => Some(messages.help.as_str()),
        CALLBACK_PRIVACY => Some(messages.privacy.as_str()),
        _ => None,
    }
}

/// Handle callback queries from inline keyboards
pub async fn callback_handler(
    bot: Bot,
    q: teloxide::types::CallbackQuery,
    messages: Arc<Messages>,
) -> Result<()> {
    debug!(user_id = %q.from.id, "Received callback query from user");

    // Answer first to remove the loading state on the button
    bot.answer_callback_query(q.id.clone()).await?;

    let data = q.data.as_deref().unwrap_or("");
    let Some(text) = callback_text(data, &messages) else {
        debug!(user_id = %q.from.id, data, "Ignoring unknown callback data");
        return Ok(());
    };

    if let Some(msg) = &q.message {
        if let Err(e) = bot
            .edit_message_text(msg.chat().id, msg.id(), text)
            .parse_mode(reply_parse_mode())
            .await
        {
            error!(user_id = %q.from.id, error = %e, "Failed to edit message for callback");
        }
    }

    Ok(())
}
