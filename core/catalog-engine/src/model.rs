//! FILENAME: core/catalog-engine/src/model.rs
//! PURPOSE: Defines the fixture records the catalog is built from.
//! CONTEXT: Users own categories, categories group products. The three
//! collections are loaded once and never mutated; everything the UI shows
//! is derived from them by borrowing (see `join.rs`).

use serde::{Deserialize, Serialize};

/// Unique identifier for a user within a catalog.
pub type UserId = u32;

/// Unique identifier for a category within a catalog.
pub type CategoryId = u32;

/// Unique identifier for a product within a catalog.
pub type ProductId = u32;

// ============================================================================
// USER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

/// A category owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub sex: Sex,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, sex: Sex) -> Self {
        User {
            id,
            name: name.into(),
            sex,
        }
    }
}

// ============================================================================
// CATEGORY
// ============================================================================

/// A product category, owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    /// Short glyph shown next to the title (usually an emoji).
    pub icon: String,
    /// Foreign key into the users collection.
    pub owner_id: UserId,
}

impl Category {
    pub fn new(
        id: CategoryId,
        title: impl Into<String>,
        icon: impl Into<String>,
        owner_id: UserId,
    ) -> Self {
        Category {
            id,
            title: title.into(),
            icon: icon.into(),
            owner_id,
        }
    }
}

// ============================================================================
// PRODUCT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Foreign key into the categories collection.
    pub category_id: CategoryId,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, category_id: CategoryId) -> Self {
        Product {
            id,
            name: name.into(),
            category_id,
        }
    }
}
