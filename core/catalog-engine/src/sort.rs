//! FILENAME: core/catalog-engine/src/sort.rs
//! PURPOSE: Column sorting and the three-state header toggle.
//! CONTEXT: `SortState` is a small state machine. Clicking the active column
//! cycles Unsorted -> Ascending -> Descending -> Unsorted; clicking any other
//! column jumps straight to Ascending on that column. `sort_rows` uses a
//! stable sort, so rows with equal keys keep their filtered order.

use std::cmp::Ordering;

use feruca::{Collator, Tailoring};
use log::trace;
use serde::{Deserialize, Serialize};

use crate::join::EnrichedProduct;

// ============================================================================
// COLUMNS
// ============================================================================

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    Id,
    Product,
    Category,
    User,
}

impl SortColumn {
    /// All columns in header order.
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Id,
        SortColumn::Product,
        SortColumn::Category,
        SortColumn::User,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Id => "ID",
            SortColumn::Product => "Product",
            SortColumn::Category => "Category",
            SortColumn::User => "User",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Icon state for a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

// ============================================================================
// SORT STATE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortState {
    #[default]
    Unsorted,
    Ascending(SortColumn),
    Descending(SortColumn),
}

impl SortState {
    pub fn column(self) -> Option<SortColumn> {
        match self {
            SortState::Unsorted => None,
            SortState::Ascending(column) | SortState::Descending(column) => Some(column),
        }
    }

    pub fn order(self) -> Option<SortOrder> {
        match self {
            SortState::Unsorted => None,
            SortState::Ascending(_) => Some(SortOrder::Ascending),
            SortState::Descending(_) => Some(SortOrder::Descending),
        }
    }

    /// Header icon for `column`. Only the active column shows a direction.
    pub fn indicator(self, column: SortColumn) -> SortIndicator {
        match self {
            SortState::Ascending(active) if active == column => SortIndicator::Ascending,
            SortState::Descending(active) if active == column => SortIndicator::Descending,
            _ => SortIndicator::Unsorted,
        }
    }

    /// Applies a header click in place.
    pub fn toggle(&mut self, clicked: SortColumn) {
        *self = next_state(*self, clicked);
    }
}

/// Transition for a click on the `clicked` column header.
pub fn next_state(current: SortState, clicked: SortColumn) -> SortState {
    let next = match current {
        SortState::Ascending(column) if column == clicked => SortState::Descending(column),
        SortState::Descending(column) if column == clicked => SortState::Unsorted,
        _ => SortState::Ascending(clicked),
    };
    trace!("Sort toggle on {}: {:?} -> {:?}", clicked.label(), current, next);
    next
}

// ============================================================================
// COMPARISON
// ============================================================================

/// Root-locale collator for text columns.
///
/// Full Unicode Collation Algorithm with the CLDR root tailoring: accents
/// sort by their base letter ("Éclair" < "Zebra"), lowercase precedes
/// uppercase on otherwise equal strings ("milk" < "Milk"), and spaces and
/// punctuation are not ignorable. The tiebreak keeps the order total.
pub fn text_collator() -> Collator {
    Collator::new(Tailoring::default(), false, true)
}

/// Compares two strings under the root locale.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    text_collator().collate(a, b)
}

fn compare_rows(
    a: &EnrichedProduct<'_>,
    b: &EnrichedProduct<'_>,
    column: SortColumn,
    order: SortOrder,
    collator: &mut Collator,
) -> Ordering {
    let ordering = match column {
        SortColumn::Id => a.id().cmp(&b.id()),
        SortColumn::Product => collator.collate(a.name(), b.name()),
        SortColumn::Category => collator.collate(&a.category.title, &b.category.title),
        SortColumn::User => collator.collate(&a.user.name, &b.user.name),
    };
    match order {
        SortOrder::Ascending => ordering,
        SortOrder::Descending => ordering.reverse(),
    }
}

/// Sorts rows in place. `Unsorted` leaves them untouched.
pub fn sort_rows(rows: &mut [EnrichedProduct<'_>], state: SortState) {
    let (Some(column), Some(order)) = (state.column(), state.order()) else {
        return;
    };

    let mut collator = text_collator();
    // slice::sort_by is stable
    rows.sort_by(|a, b| compare_rows(a, b, column, order, &mut collator));
}
