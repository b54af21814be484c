//! Order records and the pure validation rules.
//!
//! Orders own their line items and payments. The validation rules are free
//! functions with no side effects; the strategies in `vendo-engine` run them
//! before any write.

pub mod order;
pub mod validation;

pub use order::{
    Order, OrderDraft, OrderItem, OrderKind, OrderStatus, Payment, PaymentDraft, PaymentMethod,
};
pub use validation::{discount_amount, order_total, validate_items, validate_totals};
