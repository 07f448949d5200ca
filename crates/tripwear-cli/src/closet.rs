//! `closet` command: files shopping search results as closet items.

use std::path::Path;

use anyhow::Context;
use tripwear_core::{purchasable, AppConfig, ClosetItem, ShoppingResult};

use crate::outfits::{print_json, read_input};

pub(crate) fn run_closet(
    config: &AppConfig,
    file: Option<&Path>,
    pretty: bool,
) -> anyhow::Result<()> {
    let text = read_input(file, config.max_input_bytes)?;
    let results: Vec<ShoppingResult> =
        serde_json::from_str(&text).context("expected a JSON array of shopping results")?;
    let items = file_results(results);
    print_json(&serde_json::to_value(&items)?, pretty)
}

/// Keeps purchasable results and converts them to closet items, skipping
/// any that fail item validation.
pub(crate) fn file_results(results: Vec<ShoppingResult>) -> Vec<ClosetItem> {
    let total = results.len();
    let items: Vec<ClosetItem> = purchasable(results)
        .iter()
        .filter_map(|result| match ClosetItem::from_result(result) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(error = %e, title = ?result.title, "skipping shopping result");
                None
            }
        })
        .collect();
    tracing::info!(total, filed = items.len(), "filed shopping results");
    items
}
