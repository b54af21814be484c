//! Product records.
//!
//! Products are referenced by order line items and stock movement entries,
//! never owned by them. Stock quantity has one writer: the stock
//! reconciliation engine.

pub mod product;

pub use product::Product;
