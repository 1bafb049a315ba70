//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{ChatAction, Me};
use tracing::{debug, info, warn};

use crate::bin_client::{BinLookup, LookupOutcome};
use crate::bin_validation::is_valid_bin;
use crate::lookup_config::Messages;

use super::lookup_flow::{render_reply, resolve_bin_query};
use super::ui_builder::{create_main_menu_keyboard, create_report_keyboard, reply_parse_mode};

/// Commands the bot responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Privacy,
}

/// A command as typed, e.g. `/help@BinLookupBot args`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    pub name: &'a str,
    /// Bot username after `@`, if the command was addressed explicitly
    pub addressee: Option<&'a str>,
}

impl ParsedCommand<'_> {
    /// Whether this command is meant for the bot called `bot_username`
    ///
    /// Unaddressed commands are always ours. Telegram usernames compare
    /// case-insensitively.
    pub fn is_addressed_to(&self, bot_username: Option<&str>) -> bool {
        match (self.addressee, bot_username) {
            (None, _) => true,
            (Some(addressee), Some(username)) => addressee.eq_ignore_ascii_case(username),
            (Some(_), None) => false,
        }
    }
}

/// Split a command message into its name and optional `@addressee`
///
/// Returns `None` when the text is not a command at all.
pub fn parse_command(text: &str) -> Option<ParsedCommand<'_>> {
    let token = text.split_whitespace().next()?;
    let body = token.strip_prefix('/')?;
    let (name, addressee) = match body.split_once('@') {
        Some((name, addressee)) => (name, Some(addressee)),
        None => (body, None),
    };
    Some(ParsedCommand { name, addressee })
}

impl Command {
    /// Map a command name to a known command
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "start" => Some(Command::Start),
            "help" => Some(Command::Help),
            "privacy" => Some(Command::Privacy),
            _ => None,
        }
    }
}

async fn handle_command(
    bot: &Bot,
    msg: &Message,
    command: Command,
    messages: &Messages,
) -> Result<()> {
    debug!(user_id = %msg.chat.id, command = ?command, "Handling command");

    match command {
        Command::Start => {
            bot.send_message(msg.chat.id, messages.welcome.clone())
                .parse_mode(reply_parse_mode())
                .reply_markup(create_main_menu_keyboard())
                .await?;
        }
        Command::Help => {
            bot.send_message(msg.chat.id, messages.help.clone())
                .parse_mode(reply_parse_mode())
                .await?;
        }
        Command::Privacy => {
            bot.send_message(msg.chat.id, messages.privacy.clone())
                .parse_mode(reply_parse_mode())
                .await?;
        }
    }
    Ok(())
}

async fn handle_bin_text(
    bot: &Bot,
    msg: &Message,
    text: &str,
    lookup: &dyn BinLookup,
    messages: &Messages,
) -> Result<()> {
    let input = text.trim();

    if is_valid_bin(Some(input)) {
        // Best effort, the lookup proceeds either way
        if let Err(e) = bot.send_chat_action(msg.chat.id, ChatAction::Typing).await {
            warn!(user_id = %msg.chat.id, error = %e, "Failed to send typing action");
        }
    }

    let resolved = resolve_bin_query(lookup, input).await;
    let reply = render_reply(&resolved, messages);

    match &resolved {
        Ok((bin, LookupOutcome::Found(_))) => {
            info!(user_id = %msg.chat.id, bin = %bin, "Sending BIN report");
            bot.send_message(msg.chat.id, reply)
                .parse_mode(reply_parse_mode())
                .reply_markup(create_report_keyboard())
                .await?;
        }
        Ok((bin, _)) => {
            info!(user_id = %msg.chat.id, bin = %bin, "No data for BIN");
            bot.send_message(msg.chat.id, reply)
                .parse_mode(reply_parse_mode())
                .await?;
        }
        Err(e) => {
            debug!(user_id = %msg.chat.id, error = %e, "Rejected malformed BIN");
            bot.send_message(msg.chat.id, reply)
                .parse_mode(reply_parse_mode())
                .await?;
        }
    }
    Ok(())
}

pub async fn message_handler(
    bot: Bot,
    msg: Message,
    lookup: Arc<dyn BinLookup>,
    messages: Arc<Messages>,
    me: Me,
) -> Result<()> {
    let Some(text) = msg.text() else {
        debug!(user_id = %msg.chat.id, "Ignoring non-text message");
        return Ok(());
    };
    debug!(user_id = %msg.chat.id, message_length = text.len(), "Received text message from user");

    if let Some(parsed) = parse_command(text) {
        if !parsed.is_addressed_to(me.user.username.as_deref()) {
            debug!(user_id = %msg.chat.id, addressee = ?parsed.addressee, "Ignoring command for another bot");
            return Ok(());
        }
        match Command::from_name(parsed.name) {
            Some(command) => handle_command(&bot, &msg, command, &messages).await?,
            None => debug!(user_id = %msg.chat.id, command = parsed.name, "Ignoring unknown command"),
        }
        return Ok(());
    }

    handle_bin_text(&bot, &msg, text, lookup.as_ref(), &messages).await
}
