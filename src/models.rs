use serde::Serialize;

/// One element of the search endpoint's JSON array, before any cleanup.
#[derive(Debug, Clone)]
pub struct RawProductEntry {
    pub id: String,
    pub text: String,
}

/// A deduplicated catalog row; both fields are stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: String,
    pub text: String,
}

/// Final output shape. Field order here is the key order in products.json.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EnrichedProduct {
    pub product_name: String,
    pub product_code: String,
    pub marketing_price: String,
}
