//! Inline Handler module for answering inline queries

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{
    InlineQuery, InlineQueryResult, InlineQueryResultArticle, InputMessageContent,
    InputMessageContentText,
};
use tracing::debug;

use crate::bin_client::{BinLookup, LookupOutcome};
use crate::bin_record::BinRecord;
use crate::bin_validation::Bin;
use crate::lookup_config::Messages;
use crate::report::{format_record, inline_summary};

use super::lookup_flow::resolve_bin_query;
use super::ui_builder::reply_parse_mode;

/// Seconds Telegram may cache an inline answer
pub const INLINE_CACHE_TIME_SECS: u32 = 5;

/// Build the single article offered for a found BIN
pub fn build_inline_article(bin: &Bin, record: &BinRecord, messages: &Messages) -> InlineQueryResult {
    let content = InputMessageContent::Text(
        InputMessageContentText::new(format_record(record, bin, messages))
            .parse_mode(reply_parse_mode()),
    );

    let article = InlineQueryResultArticle::new(bin.to_string(), format!("BIN: {bin}"), content)
        .description(inline_summary(record));

    InlineQueryResult::Article(article)
}

/// Answer an inline query with a report, or stay silent
///
/// Malformed queries, unknown BINs and failed lookups get no answer at all.
pub async fn inline_query_handler(
    bot: Bot,
    q: InlineQuery,
    lookup: Arc<dyn BinLookup>,
    messages: Arc<Messages>,
) -> Result<()> {
    debug!(user_id = %q.from.id, query_length = q.query.len(), "Received inline query");

    let (bin, record) = match resolve_bin_query(lookup.as_ref(), &q.query).await {
        Ok((bin, LookupOutcome::Found(record))) if !record.is_empty() => (bin, record),
        Ok((bin, _)) => {
            debug!(user_id = %q.from.id, bin = %bin, "No inline answer for BIN");
            return Ok(());
        }
        Err(_) => return Ok(()),
    };

    let article = build_inline_article(&bin, &record, &messages);
    bot.answer_inline_query(q.id, vec![article])
        .cache_time(INLINE_CACHE_TIME_SECS)
        .await?;

    debug!(user_id = %q.from.id, bin = %bin, "Inline query answered");
    Ok(())
}
