//! Stock movement records.
//!
//! A movement is a named batch of (product, quantity) entries in one
//! direction. Application of a batch to product stock happens in
//! `vendo-engine`; this crate holds the records and the pure entry checks.

pub mod movement;

pub use movement::{
    MovementDirection, MovementDraft, MovementEntry, StockMovement, validate_entries,
};
