//! FILENAME: core/catalog-format/src/source.rs
//! PURPOSE: Where the catalog fixtures come from and how they are read.
//! CONTEXT: A fixture directory holds `users.json`, `categories.json` and
//! `products.json`, each a JSON array. A bundle file holds one object with
//! the same three arrays. The bundled fixture is compiled into the crate.

use std::fs;
use std::path::{Path, PathBuf};

use catalog_engine::{Catalog, Category, Product, User};
use log::info;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::FormatError;

pub const USERS_FILE: &str = "users.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const PRODUCTS_FILE: &str = "products.json";

const BUNDLED_USERS: &str = include_str!("../fixtures/users.json");
const BUNDLED_CATEGORIES: &str = include_str!("../fixtures/categories.json");
const BUNDLED_PRODUCTS: &str = include_str!("../fixtures/products.json");

// ============================================================================
// FIXTURE BUNDLE
// ============================================================================

/// The three raw collections, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureBundle {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl FixtureBundle {
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn into_catalog(self) -> Result<Catalog, FormatError> {
        Ok(Catalog::new(self.users, self.categories, self.products)?)
    }
}

// ============================================================================
// FIXTURE SOURCE
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FixtureSource {
    /// The fixture compiled into this crate.
    #[default]
    Bundled,
    /// A directory with one JSON file per collection.
    Directory(PathBuf),
    /// A single JSON file holding all three collections.
    Bundle(PathBuf),
}

impl FixtureSource {
    pub fn read_bundle(&self) -> Result<FixtureBundle, FormatError> {
        match self {
            FixtureSource::Bundled => bundled(),
            FixtureSource::Directory(dir) => read_directory(dir),
            FixtureSource::Bundle(path) => FixtureBundle::from_json(&read_file(path)?),
        }
    }

    /// Reads the fixtures and builds the immutable catalog from them.
    pub fn load(&self) -> Result<Catalog, FormatError> {
        let bundle = self.read_bundle()?;
        info!(
            "Loaded catalog fixtures from {:?}: {} users, {} categories, {} products",
            self,
            bundle.users.len(),
            bundle.categories.len(),
            bundle.products.len()
        );
        bundle.into_catalog()
    }
}

fn bundled() -> Result<FixtureBundle, FormatError> {
    Ok(FixtureBundle {
        users: serde_json::from_str(BUNDLED_USERS)?,
        categories: serde_json::from_str(BUNDLED_CATEGORIES)?,
        products: serde_json::from_str(BUNDLED_PRODUCTS)?,
    })
}

fn read_directory(dir: &Path) -> Result<FixtureBundle, FormatError> {
    Ok(FixtureBundle {
        users: read_collection(&dir.join(USERS_FILE))?,
        categories: read_collection(&dir.join(CATEGORIES_FILE))?,
        products: read_collection(&dir.join(PRODUCTS_FILE))?,
    })
}

fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, FormatError> {
    Ok(serde_json::from_str(&read_file(path)?)?)
}

fn read_file(path: &Path) -> Result<String, FormatError> {
    if !path.is_file() {
        return Err(FormatError::MissingFile(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Loads the bundled fixture catalog.
pub fn load_bundled() -> Result<Catalog, FormatError> {
    FixtureSource::Bundled.load()
}

/// Writes a bundle as the three per-collection files under `dir`.
pub fn save_directory(bundle: &FixtureBundle, dir: &Path) -> Result<(), FormatError> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join(USERS_FILE), serde_json::to_string_pretty(&bundle.users)?)?;
    fs::write(dir.join(CATEGORIES_FILE), serde_json::to_string_pretty(&bundle.categories)?)?;
    fs::write(dir.join(PRODUCTS_FILE), serde_json::to_string_pretty(&bundle.products)?)?;
    Ok(())
}
