//! Validated mutation surface over the record store.
//!
//! # Responsibility
//! - Guard add/update/delete with field and selection checks.
//! - Own the input form, the current selection and the data file binding.
//!
//! # See also
//! - `crate::store` for the underlying collection contract.

pub mod controller;
