//! FILENAME: core/catalog-engine/src/view.rs
//! Catalog View - What the product table renders.
//!
//! `compute_visible_rows` runs the whole pipeline (join, filter, sort) from
//! scratch for the current state. The presentation layer either renders
//! `ProductRowView`s or, when nothing survives, `NO_MATCHES_MESSAGE`.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::IntegrityError;
use crate::filter::{filter_rows, FilterState};
use crate::join::{join, EnrichedProduct};
use crate::model::{Category, Product, ProductId, Sex, User};
use crate::sort::{sort_rows, SortState};

/// Shown in place of the table when no row passes the filters.
pub const NO_MATCHES_MESSAGE: &str = "No products matching selected criteria";

// ============================================================================
// ROW VIEW MODEL
// ============================================================================

/// Text emphasis for the owner cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserTone {
    Link,
    Danger,
}

impl From<Sex> for UserTone {
    fn from(sex: Sex) -> Self {
        match sex {
            Sex::Male => UserTone::Link,
            Sex::Female => UserTone::Danger,
        }
    }
}

/// One display-ready table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRowView {
    pub id: ProductId,
    pub name: String,
    /// "{icon} - {title}"
    pub category: String,
    pub user_name: String,
    pub user_tone: UserTone,
}

impl From<&EnrichedProduct<'_>> for ProductRowView {
    fn from(row: &EnrichedProduct<'_>) -> Self {
        ProductRowView {
            id: row.id(),
            name: row.name().to_string(),
            category: format!("{} - {}", row.category.icon, row.category.title),
            user_name: row.user.name.clone(),
            user_tone: row.user.sex.into(),
        }
    }
}

// ============================================================================
// VISIBLE ROWS
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleRows<'a> {
    rows: Vec<EnrichedProduct<'a>>,
    integrity_errors: Vec<IntegrityError>,
}

impl<'a> VisibleRows<'a> {
    pub fn rows(&self) -> &[EnrichedProduct<'a>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ids(&self) -> Vec<ProductId> {
        self.rows.iter().map(|row| row.id()).collect()
    }

    /// Products dropped by the join because of dangling references.
    pub fn integrity_errors(&self) -> &[IntegrityError] {
        &self.integrity_errors
    }

    pub fn views(&self) -> Vec<ProductRowView> {
        self.rows.iter().map(ProductRowView::from).collect()
    }

    /// The "no matches" message when there is nothing to show.
    pub fn empty_message(&self) -> Option<&'static str> {
        if self.rows.is_empty() {
            Some(NO_MATCHES_MESSAGE)
        } else {
            None
        }
    }
}

/// Joins, filters and sorts the fixture collections for display.
pub fn compute_visible_rows<'a>(
    products: &'a [Product],
    categories: &'a [Category],
    users: &'a [User],
    filter: &FilterState,
    sort: SortState,
) -> VisibleRows<'a> {
    let joined = join(products, categories, users);
    let mut rows = filter_rows(&joined.rows, filter);
    sort_rows(&mut rows, sort);

    debug!(
        "Visible rows: {} joined, {} skipped, {} after filters, sort {:?}",
        joined.rows.len(),
        joined.errors.len(),
        rows.len(),
        sort
    );

    VisibleRows {
        rows,
        integrity_errors: joined.errors,
    }
}
