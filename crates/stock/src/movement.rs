use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vendo_core::{DomainError, DomainResult, MovementId, ProductId};

/// Direction of a stock movement batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementDirection {
    In,
    Out,
}

impl MovementDirection {
    /// Signed stock delta for an entry quantity: `+quantity` inbound,
    /// `-quantity` outbound.
    pub fn signed_delta(self, quantity: i64) -> i64 {
        match self {
            MovementDirection::In => quantity,
            MovementDirection::Out => -quantity,
        }
    }
}

/// One product line inside a movement batch. Quantity is always positive;
/// the sign comes from the batch direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementEntry {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// A named batch of stock changes, applied all-or-nothing.
///
/// Movements own their entries and are immutable once created. Deleting a
/// movement removes the record only; it does not restore prior stock levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: MovementId,
    pub direction: MovementDirection,
    pub description: String,
    pub entries: Vec<MovementEntry>,
    pub created_at: DateTime<Utc>,
}

/// Movement fields as submitted by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementDraft {
    pub direction: MovementDirection,
    pub description: String,
    pub entries: Vec<MovementEntry>,
}

/// Validate a submitted entry list: non-empty, every quantity positive.
pub fn validate_entries(entries: &[MovementEntry]) -> DomainResult<()> {
    if entries.is_empty() {
        return Err(DomainError::invalid_order("stock movement has no entries"));
    }
    for entry in entries {
        if entry.quantity <= 0 {
            return Err(DomainError::invalid_order(
                "movement entry quantity must be positive",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_delta_follows_direction() {
        assert_eq!(MovementDirection::In.signed_delta(15), 15);
        assert_eq!(MovementDirection::Out.signed_delta(15), -15);
    }

    #[test]
    fn rejects_empty_entry_list() {
        let err = validate_entries(&[]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidOrder(_)));
    }

    #[test]
    fn rejects_non_positive_quantity() {
        let entries = vec![MovementEntry {
            product_id: ProductId::new(),
            quantity: 0,
        }];
        let err = validate_entries(&entries).unwrap_err();
        assert!(matches!(err, DomainError::InvalidOrder(_)));
    }

    #[test]
    fn accepts_positive_entries() {
        let entries = vec![
            MovementEntry {
                product_id: ProductId::new(),
                quantity: 50,
            },
            MovementEntry {
                product_id: ProductId::new(),
                quantity: 15,
            },
        ];
        assert!(validate_entries(&entries).is_ok());
    }
}
