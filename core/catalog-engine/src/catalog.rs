//! FILENAME: core/catalog-engine/src/catalog.rs
//! PURPOSE: The immutable context holding the three fixture collections.
//! CONTEXT: Built once at startup by the fixture provider and passed by
//! reference to everything that derives rows from it. There is no global
//! catalog state.

use std::collections::HashSet;

use crate::error::{CatalogError, EntityType, IntegrityError};
use crate::filter::{FilterState, OwnerFilter};
use crate::join::{self, EnrichedProduct, JoinOutcome};
use crate::model::{Category, Product, User};
use crate::sort::SortState;
use crate::view::{self, VisibleRows};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog, rejecting collections that repeat an id.
    /// Dangling foreign keys are accepted here and surface per row on join.
    pub fn new(
        users: Vec<User>,
        categories: Vec<Category>,
        products: Vec<Product>,
    ) -> Result<Self, CatalogError> {
        ensure_unique(EntityType::User, users.iter().map(|u| u.id))?;
        ensure_unique(EntityType::Category, categories.iter().map(|c| c.id))?;
        ensure_unique(EntityType::Product, products.iter().map(|p| p.id))?;

        Ok(Catalog {
            users,
            categories,
            products,
        })
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Owner choices in display order: `All` followed by every user.
    pub fn owner_options(&self) -> Vec<OwnerFilter> {
        std::iter::once(OwnerFilter::All)
            .chain(self.users.iter().map(|u| OwnerFilter::Named(u.name.clone())))
            .collect()
    }

    /// Category titles in fixture order, for the category toggle buttons.
    pub fn category_titles(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.title.as_str()).collect()
    }

    pub fn join(&self) -> JoinOutcome<'_> {
        join::join(&self.products, &self.categories, &self.users)
    }

    pub fn join_results(
        &self,
    ) -> impl Iterator<Item = Result<EnrichedProduct<'_>, IntegrityError>> + '_ {
        join::join_results(&self.products, &self.categories, &self.users)
    }

    /// Rows to display for the given filter and sort state.
    pub fn visible_rows(&self, filter: &FilterState, sort: SortState) -> VisibleRows<'_> {
        view::compute_visible_rows(&self.products, &self.categories, &self.users, filter, sort)
    }
}

fn ensure_unique(
    entity_type: EntityType,
    ids: impl Iterator<Item = u32>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId { entity_type, id });
        }
    }
    Ok(())
}
