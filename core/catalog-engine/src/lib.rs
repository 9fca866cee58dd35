//! FILENAME: core/catalog-engine/src/lib.rs
//! PURPOSE: Main library entry point for the product catalog engine.
//! CONTEXT: Turns the users/categories/products fixtures plus the current
//! filter and sort state into the rows a product table displays.
//!
//! Layers:
//! - `model`: Fixture records (what the catalog IS)
//! - `catalog`: Immutable context owning the fixtures
//! - `join`: Enriched rows borrowing category and owner
//! - `filter` / `sort`: UI state and the transformations it drives
//! - `view`: Pipeline entry point and display rows

pub mod catalog;
pub mod error;
pub mod filter;
pub mod join;
pub mod model;
pub mod sort;
pub mod view;

// Re-export commonly used types at the crate root
pub use catalog::Catalog;
pub use error::{CatalogError, EntityType, IntegrityError, MissingRef};
pub use filter::{filter_rows, normalize, FilterState, OwnerFilter, ALL_OWNERS_LABEL};
pub use join::{join, join_product, join_results, EnrichedProduct, JoinOutcome};
pub use model::{Category, CategoryId, Product, ProductId, Sex, User, UserId};
pub use sort::{
    locale_compare, next_state, sort_rows, text_collator, SortColumn, SortIndicator, SortOrder,
    SortState,
};
pub use view::{compute_visible_rows, ProductRowView, UserTone, VisibleRows, NO_MATCHES_MESSAGE};
