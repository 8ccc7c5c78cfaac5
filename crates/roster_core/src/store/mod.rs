//! In-memory record store.
//!
//! # Responsibility
//! - Hold the authoritative, ordered record collection for a session.
//! - Notify subscribers synchronously after every mutation.
//!
//! # Invariants
//! - Insertion order is preserved; only the view re-sorts for display.
//! - Records are addressed by `RecordId`, never by position.

pub mod record_store;
