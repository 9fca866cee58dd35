//! FILENAME: core/catalog-engine/src/error.rs

use std::fmt;

use thiserror::Error;

/// Which fixture collection a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    User,
    Category,
    Product,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityType::User => "user",
            EntityType::Category => "category",
            EntityType::Product => "product",
        };
        f.write_str(name)
    }
}

/// The foreign key that failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissingRef {
    Category(u32),
    User(u32),
}

impl fmt::Display for MissingRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingRef::Category(id) => write!(f, "category {}", id),
            MissingRef::User(id) => write!(f, "user {}", id),
        }
    }
}

/// A product (or the category it points at) references a record that does
/// not exist. Only the affected row is dropped from the join.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("dangling reference: {entity_type} {id} refers to missing {missing_ref}")]
pub struct IntegrityError {
    pub entity_type: EntityType,
    pub id: u32,
    pub missing_ref: MissingRef,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate {entity_type} id: {id}")]
    DuplicateId { entity_type: EntityType, id: u32 },
}
