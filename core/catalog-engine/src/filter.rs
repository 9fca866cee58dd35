//! FILENAME: core/catalog-engine/src/filter.rs
//! PURPOSE: Owner, name and category filtering of enriched rows.
//! CONTEXT: `FilterState` is the snapshot the UI mutates on every click or
//! keystroke. `filter_rows` applies the three predicates in order; each one
//! is skipped while its filter sits at its neutral value. The result is
//! always an order-preserving subsequence of the input.

use serde::{Deserialize, Serialize};

use crate::join::EnrichedProduct;
use crate::model::User;

/// Label shown for the "no owner restriction" choice.
pub const ALL_OWNERS_LABEL: &str = "All";

// ============================================================================
// OWNER FILTER
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OwnerFilter {
    /// No owner restriction.
    #[default]
    All,
    /// Only rows whose owner has exactly this name.
    Named(String),
}

impl OwnerFilter {
    pub fn named(name: impl Into<String>) -> Self {
        OwnerFilter::Named(name.into())
    }

    pub fn label(&self) -> &str {
        match self {
            OwnerFilter::All => ALL_OWNERS_LABEL,
            OwnerFilter::Named(name) => name,
        }
    }

    pub fn matches(&self, user: &User) -> bool {
        match self {
            OwnerFilter::All => true,
            OwnerFilter::Named(name) => user.name == *name,
        }
    }
}

// ============================================================================
// FILTER STATE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub owner: OwnerFilter,
    /// Raw text as typed. Normalized only when filtering.
    pub name_query: String,
    /// Selected category titles, in the order they were selected.
    /// Never holds the same title twice.
    pub selected_categories: Vec<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_owner(&mut self, owner: OwnerFilter) {
        self.owner = owner;
    }

    pub fn set_name_query(&mut self, query: impl Into<String>) {
        self.name_query = query.into();
    }

    pub fn clear_name_query(&mut self) {
        self.name_query.clear();
    }

    /// Whether there is any typed text to clear, including bare whitespace.
    pub fn has_name_query(&self) -> bool {
        !self.name_query.is_empty()
    }

    /// Adds the title to the selection, or removes it if already selected.
    pub fn toggle_category(&mut self, title: &str) {
        if let Some(pos) = self.selected_categories.iter().position(|t| t == title) {
            self.selected_categories.remove(pos);
        } else {
            self.selected_categories.push(title.to_string());
        }
    }

    pub fn clear_categories(&mut self) {
        self.selected_categories.clear();
    }

    pub fn is_category_selected(&self, title: &str) -> bool {
        self.selected_categories.iter().any(|t| t == title)
    }

    /// An empty selection means every category passes.
    pub fn all_categories_selected(&self) -> bool {
        self.selected_categories.is_empty()
    }

    /// "Reset all filters": owner back to `All`, name query cleared.
    /// The category selection is left untouched.
    pub fn reset(&mut self) {
        self.owner = OwnerFilter::All;
        self.name_query.clear();
    }

    pub fn is_neutral(&self) -> bool {
        self.owner == OwnerFilter::All
            && normalize(&self.name_query).is_empty()
            && self.selected_categories.is_empty()
    }
}

// ============================================================================
// FILTER LOGIC
// ============================================================================

/// Trims and lowercases text for substring matching. Inner whitespace is kept.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Applies owner, name, then category filtering.
pub fn filter_rows<'a>(rows: &[EnrichedProduct<'a>], state: &FilterState) -> Vec<EnrichedProduct<'a>> {
    let mut visible: Vec<EnrichedProduct<'a>> = rows.to_vec();

    if state.owner != OwnerFilter::All {
        visible.retain(|row| state.owner.matches(row.user));
    }

    let query = normalize(&state.name_query);
    if !query.is_empty() {
        visible.retain(|row| normalize(row.name()).contains(&query));
    }

    if !state.selected_categories.is_empty() {
        visible.retain(|row| state.is_category_selected(&row.category.title));
    }

    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::join::join;
    use crate::model::{Category, Product, Sex};

    struct Fixture {
        users: Vec<User>,
        categories: Vec<Category>,
        products: Vec<Product>,
    }

    fn fixture() -> Fixture {
        Fixture {
            users: vec![User::new(1, "Roma", Sex::Male), User::new(2, "Anna", Sex::Female)],
            categories: vec![
                Category::new(1, "Grocery", "🍞", 2),
                Category::new(2, "Drinks", "🍺", 1),
            ],
            products: vec![
                Product::new(1, "Whole Milk", 2),
                Product::new(2, "Bread", 1),
                Product::new(3, "milkshake", 2),
                Product::new(4, "Oat  Milk", 1),
            ],
        }
    }

    fn ids(rows: &[EnrichedProduct<'_>]) -> Vec<u32> {
        rows.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_neutral_state_keeps_everything() {
        let f = fixture();
        let rows = join(&f.products, &f.categories, &f.users).rows;
        let state = FilterState::new();
        assert!(state.is_neutral());
        assert_eq!(ids(&filter_rows(&rows, &state)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_owner_filter_exact_match() {
        let f = fixture();
        let rows = join(&f.products, &f.categories, &f.users).rows;
        let mut state = FilterState::new();

        state.select_owner(OwnerFilter::named("Roma"));
        assert_eq!(ids(&filter_rows(&rows, &state)), vec![1, 3]);

        state.select_owner(OwnerFilter::named("roma"));
        assert!(filter_rows(&rows, &state).is_empty());
    }

    #[test]
    fn test_name_query_is_trimmed_and_case_insensitive() {
        let f = fixture();
        let rows = join(&f.products, &f.categories, &f.users).rows;
        let mut state = FilterState::new();

        state.set_name_query(" Milk ");
        assert_eq!(ids(&filter_rows(&rows, &state)), vec![1, 3, 4]);
    }

    #[test]
    fn test_inner_whitespace_is_significant() {
        let f = fixture();
        let rows = join(&f.products, &f.categories, &f.users).rows;
        let mut state = FilterState::new();

        state.set_name_query("oat milk");
        assert!(filter_rows(&rows, &state).is_empty());

        state.set_name_query("oat  milk");
        assert_eq!(ids(&filter_rows(&rows, &state)), vec![4]);
    }

    #[test]
    fn test_whitespace_only_query_is_neutral() {
        let f = fixture();
        let rows = join(&f.products, &f.categories, &f.users).rows;
        let mut state = FilterState::new();
        state.set_name_query("   ");

        assert!(state.has_name_query());
        assert!(state.is_neutral());
        assert_eq!(filter_rows(&rows, &state).len(), 4);
    }

    #[test]
    fn test_clear_name_query_restores_rows() {
        let f = fixture();
        let rows = join(&f.products, &f.categories, &f.users).rows;
        let mut state = FilterState::new();
        state.set_name_query("bread");
        assert!(state.has_name_query());
        assert_eq!(ids(&filter_rows(&rows, &state)), vec![2]);

        state.clear_name_query();
        assert!(!state.has_name_query());
        assert_eq!(state.name_query, "");
        assert_eq!(ids(&filter_rows(&rows, &state)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_category_filter_membership() {
        let f = fixture();
        let rows = join(&f.products, &f.categories, &f.users).rows;
        let mut state = FilterState::new();

        state.toggle_category("Grocery");
        assert_eq!(ids(&filter_rows(&rows, &state)), vec![2, 4]);

        state.toggle_category("Drinks");
        assert_eq!(ids(&filter_rows(&rows, &state)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let f = fixture();
        let rows = join(&f.products, &f.categories, &f.users).rows;
        let mut state = FilterState::new();
        state.select_owner(OwnerFilter::named("Anna"));
        state.set_name_query("milk");
        state.toggle_category("Grocery");

        assert_eq!(ids(&filter_rows(&rows, &state)), vec![4]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let f = fixture();
        let rows = join(&f.products, &f.categories, &f.users).rows;
        let mut state = FilterState::new();
        state.set_name_query("MILK");
        state.toggle_category("Drinks");

        let once = filter_rows(&rows, &state);
        let twice = filter_rows(&once, &state);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_toggle_category_keeps_insertion_order() {
        let mut state = FilterState::new();
        state.toggle_category("Fruits");
        state.toggle_category("Drinks");
        state.toggle_category("Clothes");
        state.toggle_category("Drinks");

        assert_eq!(state.selected_categories, vec!["Fruits", "Clothes"]);
        assert!(state.is_category_selected("Clothes"));
        assert!(!state.is_category_selected("Drinks"));
        assert!(!state.all_categories_selected());

        state.clear_categories();
        assert!(state.all_categories_selected());
    }

    #[test]
    fn test_reset_keeps_category_selection() {
        let mut state = FilterState::new();
        state.select_owner(OwnerFilter::named("Max"));
        state.set_name_query("egg");
        state.toggle_category("Grocery");

        state.reset();

        assert_eq!(state.owner, OwnerFilter::All);
        assert!(!state.has_name_query());
        assert_eq!(state.selected_categories, vec!["Grocery"]);
    }

    #[test]
    fn test_owner_labels() {
        assert_eq!(OwnerFilter::All.label(), "All");
        assert_eq!(OwnerFilter::named("Anna").label(), "Anna");
    }

    #[test]
    fn test_filter_state_serializes_camel_case() {
        let mut state = FilterState::new();
        state.select_owner(OwnerFilter::named("Roma"));
        state.set_name_query("milk");

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["owner"]["named"], "Roma");
        assert_eq!(json["nameQuery"], "milk");
        assert!(json["selectedCategories"].as_array().unwrap().is_empty());

        let back: FilterState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }
}
