//! FILENAME: core/catalog-engine/src/join.rs
//! PURPOSE: Denormalizes products by attaching their category and owner.
//! CONTEXT: An `EnrichedProduct` only borrows from the fixture collections,
//! so a join is cheap to redo on every state change. Rows whose foreign keys
//! do not resolve are reported as `IntegrityError`s and left out; they never
//! abort the rest of the join.

use log::warn;

use crate::error::{EntityType, IntegrityError, MissingRef};
use crate::model::{Category, Product, ProductId, User};

/// A product together with its resolved category and that category's owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichedProduct<'a> {
    pub product: &'a Product,
    pub category: &'a Category,
    pub user: &'a User,
}

impl<'a> EnrichedProduct<'a> {
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn name(&self) -> &'a str {
        &self.product.name
    }
}

/// Result of joining a whole product collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinOutcome<'a> {
    /// Successfully enriched rows, in product order.
    pub rows: Vec<EnrichedProduct<'a>>,
    /// One entry per product that was excluded.
    pub errors: Vec<IntegrityError>,
}

/// Resolves a single product. The first category (and user) with a matching
/// id wins.
pub fn join_product<'a>(
    product: &'a Product,
    categories: &'a [Category],
    users: &'a [User],
) -> Result<EnrichedProduct<'a>, IntegrityError> {
    let category = categories
        .iter()
        .find(|category| category.id == product.category_id)
        .ok_or(IntegrityError {
            entity_type: EntityType::Product,
            id: product.id,
            missing_ref: MissingRef::Category(product.category_id),
        })?;

    let user = users
        .iter()
        .find(|user| user.id == category.owner_id)
        .ok_or(IntegrityError {
            entity_type: EntityType::Category,
            id: category.id,
            missing_ref: MissingRef::User(category.owner_id),
        })?;

    Ok(EnrichedProduct { product, category, user })
}

/// Tagged per-row join, in product order.
pub fn join_results<'a>(
    products: &'a [Product],
    categories: &'a [Category],
    users: &'a [User],
) -> impl Iterator<Item = Result<EnrichedProduct<'a>, IntegrityError>> + 'a {
    products
        .iter()
        .map(move |product| join_product(product, categories, users))
}

/// Joins every product, splitting the outcome into kept rows and errors.
pub fn join<'a>(
    products: &'a [Product],
    categories: &'a [Category],
    users: &'a [User],
) -> JoinOutcome<'a> {
    let mut outcome = JoinOutcome::default();

    for result in join_results(products, categories, users) {
        match result {
            Ok(row) => outcome.rows.push(row),
            Err(err) => {
                warn!("Skipping catalog row: {}", err);
                outcome.errors.push(err);
            }
        }
    }

    outcome
}
