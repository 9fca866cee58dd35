//! FILENAME: core/catalog-format/src/error.rs

use std::path::PathBuf;

use catalog_engine::CatalogError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Fixture file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}
