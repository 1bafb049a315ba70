use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bin_lookup_bot::bin_client::{BinLookup, BinLookupClient};
use bin_lookup_bot::bot;
use bin_lookup_bot::lookup_config::{BotConfig, Messages};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting BIN Lookup Bot");

    let config = BotConfig::from_env()?;
    info!(base_url = %config.lookup.base_url, "Using BIN lookup service");

    let lookup: Arc<dyn BinLookup> = Arc::new(BinLookupClient::new(&config.lookup)?);
    let messages: Arc<Messages> = Arc::new(config.messages);

    let bot = Bot::new(config.bot_token);

    // Start from a clean slate: no webhook, no backlog of old updates
    bot.delete_webhook().drop_pending_updates(true).await?;

    // Commands addressed as `/cmd@name` are only answered when `name` is ours
    let me = bot.get_me().await?;
    info!(username = ?me.user.username, "Connected to Telegram");

    let commands = vec![
        BotCommand::new("start", "Show the welcome message"),
        BotCommand::new("help", "How to use the bot"),
        BotCommand::new("privacy", "What data the bot handles"),
    ];
    if let Err(e) = bot.set_my_commands(commands).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    info!("Bot initialized, starting dispatcher");

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(bot::message_handler))
        .branch(Update::filter_inline_query().endpoint(bot::inline_query_handler))
        .branch(Update::filter_callback_query().endpoint(bot::callback_handler));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![lookup, messages, me])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
