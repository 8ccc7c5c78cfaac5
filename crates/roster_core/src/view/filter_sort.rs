//! Search predicate and column sort.
//!
//! # Responsibility
//! - Match records by case-insensitive substring over all four columns.
//! - Order matches by one column, ascending or descending.
//!
//! # Invariants
//! - Empty (or whitespace-only) search text matches every record.
//! - Rows with equal sort keys keep their store order in both directions.

use crate::model::record::{Record, RecordColumn};
use crate::store::record_store::RecordStore;
use std::cmp::Ordering;

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Self::Ascending
        } else {
            Self::Descending
        }
    }
}

/// Active comparator: one column and a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: RecordColumn,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn compare(&self, left: &Record, right: &Record) -> Ordering {
        let ordering = left.value(self.column).cmp(right.value(self.column));
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Search and sort state applied to a [`RecordStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordView {
    search_text: String,
    needle: String,
    sort: Option<SortOrder>,
}

impl RecordView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the search text. Any string is accepted.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.needle = self.search_text.trim().to_lowercase();
    }

    /// Raw search text as last set.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Sorts by `column`; `ascending = false` reverses the comparator.
    pub fn set_sort(&mut self, column: RecordColumn, ascending: bool) {
        self.sort = Some(SortOrder {
            column,
            direction: SortDirection::from_ascending(ascending),
        });
    }

    /// Restores natural store order.
    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    pub fn sort_order(&self) -> Option<SortOrder> {
        self.sort
    }

    /// Returns whether `record` passes the current search predicate.
    pub fn matches(&self, record: &Record) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        record
            .fields
            .values()
            .any(|value| value.to_lowercase().contains(self.needle.as_str()))
    }

    /// Filtered-then-sorted rows of `store`, recomputed on every call.
    pub fn view<'a>(&self, store: &'a RecordStore) -> Vec<&'a Record> {
        let mut rows = store
            .all()
            .iter()
            .filter(|record| self.matches(record))
            .collect::<Vec<_>>();
        if let Some(order) = self.sort {
            // `sort_by` is stable, so ties stay in store order.
            rows.sort_by(|left, right| order.compare(left, right));
        }
        rows
    }
}
