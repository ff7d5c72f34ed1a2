pub mod archiver;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod parser;
pub mod price;

pub use config::{Config, Credentials, Endpoints};
pub use error::FatalError;
pub use fetcher::Session;
pub use models::{CatalogEntry, EnrichedProduct, RawProductEntry};
