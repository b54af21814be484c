use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vendo_core::ProductId;

/// Product record.
///
/// Prices are in minor currency units. `stock` is the current on-hand
/// quantity; it is written exclusively by the stock reconciliation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    pub sale_price: i64,
    pub purchase_price: i64,
    pub stock: i64,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn new(
        id: ProductId,
        sku: impl Into<String>,
        name: impl Into<String>,
        sale_price: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            sku: sku.into(),
            name: name.into(),
            sale_price,
            purchase_price: 0,
            stock: 0,
            created_at,
        }
    }

    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = stock;
        self
    }
}
