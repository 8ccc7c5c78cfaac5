//! Student record domain model.
//!
//! # Responsibility
//! - Define the record shape shared by store, view, codec and editor.
//! - Name the four columns once so sorting and parsing agree on them.
//!
//! # Invariants
//! - Every record held by a store carries a `RecordId` assigned on entry.
//! - Field values are free-form text; non-emptiness is an editor concern.

pub mod record;
