//! Error types for the product catalog.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or querying the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The requested product is not in the snapshot.
    #[error("product not found: {0}")]
    NotFound(String),

    /// The raw identifier is not in the catalog's identifier form.
    #[error("invalid product ID: {0}")]
    InvalidId(String),

    /// The snapshot holds no products at all.
    #[error("no products available")]
    Empty,

    /// The catalog file could not be read.
    #[error("error reading json file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not a JSON object of products.
    #[error("error occurred when unmarshalling data: {0}")]
    Parse(#[from] serde_json::Error),
}
