use std::collections::{HashMap, HashSet};
use std::io::{self, Write};
use std::sync::mpsc;

use anyhow::Result;

use crate::config::Config;
use crate::fetcher::Session;
use crate::models::{CatalogEntry, EnrichedProduct};
use crate::parser::parse_code_and_name;

/// Each distinct id once, in first-occurrence order.
pub fn distinct_ids(catalog: &[CatalogEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    catalog
        .iter()
        .filter(|entry| seen.insert(entry.id.clone()))
        .map(|entry| entry.id.clone())
        .collect()
}

/// Fetches the marketing price for every distinct id, one request per id.
/// Workers send `(id, outcome)` back over a channel; a failed fetch resolves
/// to the empty string.
fn resolve_prices(
    session: &Session,
    config: &Config,
    ids: Vec<String>,
) -> Result<HashMap<String, String>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .build()?;
    let (tx, rx) = mpsc::channel::<(String, Result<String>)>();

    for id in ids {
        let tx = tx.clone();
        let session = session.clone();
        pool.spawn(move || {
            let outcome = session.fetch_price(&id);
            let _ = tx.send((id, outcome));
        });
    }
    drop(tx);

    Ok(rx
        .iter()
        .map(|(id, outcome)| (id, outcome.unwrap_or_default()))
        .collect())
}

/// Attaches a marketing price to every catalog entry and reshapes it into
/// the output record. Entries sharing an id hit the price endpoint once and
/// receive the same price. Walks the catalog in collection order.
pub fn enrich(
    session: &Session,
    config: &Config,
    catalog: &[CatalogEntry],
) -> Result<Vec<EnrichedProduct>> {
    println!("[PRICES] Fetching marketing prices...");
    let prices = resolve_prices(session, config, distinct_ids(catalog))?;

    let total = catalog.len();
    let mut enriched = Vec::with_capacity(total);
    for (done, entry) in catalog.iter().enumerate() {
        let price = prices.get(&entry.id).cloned().unwrap_or_default();
        let (code, name) = parse_code_and_name(&entry.text);
        enriched.push(EnrichedProduct {
            product_name: name,
            product_code: code,
            marketing_price: price,
        });
        print!("\r[PRICES] {}/{} products processed", done + 1, total);
        io::stdout().flush().ok();
    }
    println!();

    Ok(enriched)
}
