//! Customer records.
//!
//! Customers are referenced by orders, never owned by them. The stored
//! balance is the only field with write rules: it is mutated exclusively
//! through the balance accessor.

pub mod customer;

pub use customer::{ContactInfo, Customer};
