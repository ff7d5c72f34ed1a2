use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;

use crate::models::EnrichedProduct;

/// Sorts by `(product_name, product_code)` and writes `products.json` as a
/// pretty-printed UTF-8 array, overwriting any previous run. Returns the
/// sorted list.
pub fn save_products(
    mut products: Vec<EnrichedProduct>,
    output_dir: &Path,
) -> Result<Vec<EnrichedProduct>> {
    products.sort_by(|a, b| {
        (a.product_name.as_str(), a.product_code.as_str())
            .cmp(&(b.product_name.as_str(), b.product_code.as_str()))
    });

    fs::create_dir_all(output_dir)?;
    let json = serde_json::to_string_pretty(&products)?;
    let mut file = File::create(output_dir.join("products.json"))?;
    file.write_all(json.as_bytes())?;

    println!("[DONE] Saved products.json");
    Ok(products)
}

/// Writes `last_updated.txt` containing the date as `YYYY-MM-DD`, nothing
/// else. The caller supplies the date so runs are reproducible under test.
pub fn write_last_updated(date: NaiveDate, output_dir: &Path) -> Result<()> {
    let stamp = date.format("%Y-%m-%d").to_string();

    fs::create_dir_all(output_dir)?;
    let mut file = File::create(output_dir.join("last_updated.txt"))?;
    file.write_all(stamp.as_bytes())?;

    println!("[DONE] Saved last_updated.txt ({stamp})");
    Ok(())
}
