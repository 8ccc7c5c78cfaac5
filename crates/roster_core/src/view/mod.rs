//! Derived filter/sort projection over the record store.
//!
//! # Responsibility
//! - Hold the current search text and sort order.
//! - Derive the displayed rows as `sort(filter(store))` on every request.
//!
//! # Invariants
//! - The view never caches rows, so it cannot go stale.
//! - Sorting is stable with respect to store order.

pub mod filter_sort;
