use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vendo_core::{CustomerId, OrderId, PaymentId, ProductId, SellerId};

/// Order kind. Fixed at creation; an order never changes kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    Sale,
    Quote,
    Installment,
}

/// Order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Open,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    Transfer,
}

/// Order line: product, quantity, unit price, line total.
///
/// `unit_price` and `total` are in minor currency units.
/// Invariant: `total == quantity * unit_price`, enforced by
/// [`crate::validation::validate_items`] before any write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: i64,
    pub unit_price: i64,
    pub total: i64,
}

/// Payment attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub method: PaymentMethod,
    pub amount: i64,
    pub change: i64,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    /// A cash payment with zero change, as attached by the balance draw-down.
    pub fn balance_draw_down(amount: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            id: PaymentId::new(),
            method: PaymentMethod::Cash,
            amount,
            change: 0,
            created_at,
        }
    }
}

/// Payment fields as submitted by a caller, before an id and timestamp are
/// assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDraft {
    pub method: PaymentMethod,
    pub amount: i64,
    pub change: i64,
}

/// Order record.
///
/// Orders exclusively own their items and payments; both go with the order
/// on deletion. Monetary invariants: `sum(item.total) == subtotal` and
/// `total == subtotal - round(subtotal * discount / 100)`, with
/// `discount` an integer percent in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub kind: OrderKind,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub subtotal: i64,
    /// Integer discount percent.
    pub discount: i64,
    pub total: i64,
    pub paid: bool,
    pub payments: Vec<Payment>,
    pub customer_id: Option<CustomerId>,
    pub seller_id: SellerId,
    pub created_at: DateTime<Utc>,
}

/// Order fields as submitted by a caller.
///
/// The strategy for `kind` turns a draft into a persisted [`Order`]; on
/// update the draft replaces items, totals, discount, customer and payments
/// while kind, status, paid flag, seller and creation time stay with the
/// stored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub kind: OrderKind,
    pub customer_id: Option<CustomerId>,
    pub items: Vec<OrderItem>,
    pub subtotal: i64,
    pub discount: i64,
    #[serde(default)]
    pub payments: Vec<PaymentDraft>,
    #[serde(default)]
    pub use_balance: bool,
}
