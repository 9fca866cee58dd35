//! FILENAME: core/catalog-format/src/lib.rs
//! Catalog Fixture Format
//!
//! Supplies the users, categories and products collections as JSON and
//! builds the immutable `Catalog` the engine works against.

mod error;
mod source;

pub use error::FormatError;
pub use source::{
    load_bundled, save_directory, FixtureBundle, FixtureSource, CATEGORIES_FILE, PRODUCTS_FILE,
    USERS_FILE,
};
