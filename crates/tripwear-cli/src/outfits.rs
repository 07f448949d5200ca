//! `parse` command: generated text in, outfit records or a search plan out.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde_json::{json, Value};
use tripwear_core::{shopping_query, AppConfig, DayOutfit};
use tripwear_parser::{
    inspiration_query, prefix_gender, shopping_terms, OutfitParser, GENERAL_CATEGORY,
};

pub(crate) fn run_parse(
    config: &AppConfig,
    file: Option<&Path>,
    gender: Option<&str>,
    plan: bool,
    pretty: bool,
) -> anyhow::Result<()> {
    let text = read_input(file, config.max_input_bytes)?;
    let parser = build_parser(config)?;
    let gender = gender.or(config.default_gender.as_deref());

    let days = parser.parse(&text, gender);
    tracing::info!(days = days.len(), bytes = text.len(), "parsed recommendation");

    let output = if plan {
        search_plan(&days, gender)
    } else {
        serde_json::to_value(&days)?
    };
    print_json(&output, pretty)
}

pub(crate) fn print_json(output: &Value, pretty: bool) -> anyhow::Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(output)?
    } else {
        serde_json::to_string(output)?
    };
    println!("{rendered}");
    Ok(())
}

/// Reads `file`, or stdin when no file is given, refusing oversized input.
pub(crate) fn read_input(file: Option<&Path>, max_bytes: usize) -> anyhow::Result<String> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    if text.len() > max_bytes {
        anyhow::bail!(
            "input is {} bytes, larger than the {max_bytes}-byte limit",
            text.len()
        );
    }
    Ok(text)
}

fn build_parser(config: &AppConfig) -> anyhow::Result<OutfitParser> {
    match &config.vocabulary_path {
        Some(path) => {
            let vocabulary = tripwear_core::load_vocabulary(path)?;
            tracing::debug!(
                path = %path.display(),
                keywords = vocabulary.keyword_count(),
                "loaded fallback vocabulary"
            );
            Ok(OutfitParser::with_vocabulary(vocabulary))
        }
        None => Ok(OutfitParser::new()),
    }
}

/// Lays out the searches a caller would run for each day: one outfit image
/// query plus one shopping search per item. A `general` query is split into
/// its comma-separated items, each carrying the gender prefix.
pub(crate) fn search_plan(days: &[DayOutfit], gender: Option<&str>) -> Value {
    let days: Vec<Value> = days
        .iter()
        .map(|day| {
            let searches: Vec<Value> = day
                .product_queries
                .iter()
                .flat_map(|(category, query)| {
                    let items = if category == GENERAL_CATEGORY {
                        shopping_terms(query)
                    } else {
                        vec![query.to_string()]
                    };
                    items.into_iter().map(move |item| {
                        let item = match gender {
                            Some(g) => prefix_gender(g, &item),
                            None => item,
                        };
                        json!({ "category": category, "query": item })
                    })
                })
                .collect();
            json!({
                "day_number": day.day_number,
                "label": day.label,
                "image_query": shopping_query(gender, &inspiration_query(&day.content)),
                "searches": searches,
            })
        })
        .collect();
    json!({ "days": days })
}
