//! Lookup Flow module wiring validation, the remote lookup and formatting
//!
//! Both the direct-message handler and the inline-query handler go through
//! [`resolve_bin_query`], so invalid input never reaches the lookup service.

use tracing::debug;

use crate::bin_client::{BinLookup, LookupOutcome};
use crate::bin_validation::Bin;
use crate::lookup_config::Messages;
use crate::lookup_errors::InvalidBin;
use crate::report::format_report;

/// Outcome of handling one piece of user text
pub type ResolvedQuery = Result<(Bin, LookupOutcome), InvalidBin>;

/// Trim and validate `raw`, then look the BIN up
pub async fn resolve_bin_query(lookup: &dyn BinLookup, raw: &str) -> ResolvedQuery {
    let bin = Bin::parse(raw.trim())?;
    debug!(bin = %bin, "Resolving BIN query");
    let outcome = lookup.lookup(&bin).await;
    Ok((bin, outcome))
}

/// Text to send back for a resolved query
pub fn render_reply(resolved: &ResolvedQuery, messages: &Messages) -> String {
    match resolved {
        Ok((bin, outcome)) => format_report(outcome, bin, messages),
        Err(_) => messages.invalid_bin.clone(),
    }
}
