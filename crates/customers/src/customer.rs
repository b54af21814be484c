use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vendo_core::CustomerId;

/// Contact information for a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Customer record.
///
/// `balance` is stored credit in minor currency units. It is signed and may
/// go negative; whoever writes it owns the arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub contact: ContactInfo,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            contact: ContactInfo::default(),
            balance: 0,
            created_at,
        }
    }

    /// Whether this customer has credit available for a balance draw-down.
    pub fn has_credit(&self) -> bool {
        self.balance > 0
    }
}
