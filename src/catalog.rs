use std::io::{self, Write};
use std::sync::mpsc;

use anyhow::Result;
use indexmap::IndexMap;
use itertools::Itertools;

use crate::config::Config;
use crate::fetcher::Session;
use crate::models::{CatalogEntry, RawProductEntry};

/// Digits before lowercase letters, matching the backend's id space.
const ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// Catalog keyed by trimmed `(id, text)`, in discovery order.
pub type Catalog = IndexMap<(String, String), CatalogEntry>;

/// All 1296 two-character probe terms, first character varying slowest.
pub fn search_terms() -> Vec<String> {
    ALPHABET
        .chars()
        .cartesian_product(ALPHABET.chars())
        .map(|(a, b)| format!("{a}{b}"))
        .collect()
}

/// Folds one probe's entries into the catalog. Ids and texts are trimmed,
/// entries with an empty id or text are dropped, first seen wins.
pub fn merge_entries(catalog: &mut Catalog, items: Vec<RawProductEntry>) {
    for item in items {
        let id = item.id.trim();
        let text = item.text.trim();
        if id.is_empty() || text.is_empty() {
            continue;
        }
        catalog
            .entry((id.to_string(), text.to_string()))
            .or_insert_with(|| CatalogEntry {
                id: id.to_string(),
                text: text.to_string(),
            });
    }
}

/// Probes every term against the search endpoint and returns the
/// deduplicated catalog.
///
/// Fetches run on a bounded worker pool; each worker sends its outcome over
/// a channel and this thread alone merges, so the catalog map never needs a
/// lock. A failed probe (timeout, error status, bad body) contributes zero
/// entries and is not retried.
pub fn collect(session: &Session, config: &Config) -> Result<Vec<CatalogEntry>> {
    let terms = search_terms();
    let total = terms.len();

    println!("[CATALOG] Collecting products...");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .build()?;
    let (tx, rx) = mpsc::channel::<Result<Vec<RawProductEntry>>>();

    for term in terms {
        let tx = tx.clone();
        let session = session.clone();
        pool.spawn(move || {
            let _ = tx.send(session.fetch_products_for_term(&term));
        });
    }
    drop(tx);

    let mut catalog = Catalog::new();
    for (done, outcome) in rx.iter().enumerate() {
        let items = outcome.unwrap_or_default();
        merge_entries(&mut catalog, items);
        print!(
            "\r[CATALOG] Term {}/{} | Unique={}",
            done + 1,
            total,
            catalog.len()
        );
        io::stdout().flush().ok();
    }
    println!();
    println!(
        "[CATALOG] Finished. Terms={}, Unique entries={}",
        total,
        catalog.len()
    );

    Ok(catalog.into_values().collect())
}
