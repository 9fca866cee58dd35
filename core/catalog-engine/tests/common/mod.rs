//! FILENAME: tests/common/mod.rs
//! Fixtures for catalog engine integration tests.

#![allow(dead_code)]

use catalog_engine::{Catalog, Category, FilterState, Product, Sex, SortState, User};

/// Installs a test logger so `RUST_LOG=debug` shows pipeline counts.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Five products across three categories owned by two users.
/// Roma owns Drinks and Electronics, Anna owns Grocery.
pub struct ShopFixture;

impl ShopFixture {
    pub fn users() -> Vec<User> {
        vec![
            User::new(1, "Roma", Sex::Male),
            User::new(2, "Anna", Sex::Female),
        ]
    }

    pub fn categories() -> Vec<Category> {
        vec![
            Category::new(1, "Grocery", "🍞", 2),
            Category::new(2, "Drinks", "🍺", 1),
            Category::new(4, "Electronics", "💻", 1),
        ]
    }

    pub fn products() -> Vec<Product> {
        vec![
            Product::new(3, "Whole Milk", 2),
            Product::new(1, "Bread", 1),
            Product::new(5, "milkshake", 2),
            Product::new(2, "Laptop", 4),
            Product::new(4, "Eggs", 1),
        ]
    }

    pub fn catalog() -> Catalog {
        Catalog::new(Self::users(), Self::categories(), Self::products())
            .expect("fixture ids are unique")
    }
}

/// Convenience for running the full pipeline against a catalog.
pub struct TableHarness {
    pub catalog: Catalog,
    pub filter: FilterState,
    pub sort: SortState,
}

impl TableHarness {
    pub fn new(catalog: Catalog) -> Self {
        init_logging();
        TableHarness {
            catalog,
            filter: FilterState::new(),
            sort: SortState::Unsorted,
        }
    }

    pub fn shop() -> Self {
        Self::new(ShopFixture::catalog())
    }

    pub fn visible_ids(&self) -> Vec<u32> {
        self.catalog.visible_rows(&self.filter, self.sort).ids()
    }
}
