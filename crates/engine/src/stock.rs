//! Stock reconciliation engine.
//!
//! Applies a named batch of stock changes to multiple products as one
//! atomic unit. Entries are checked in submission order; the first
//! insufficient entry aborts the whole batch, and afterwards no stock has
//! changed and no movement record exists.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use vendo_core::{DomainError, DomainResult, MovementId};
use vendo_stock::{MovementDirection, MovementDraft, StockMovement, validate_entries};
use vendo_store::StockStore;

pub struct StockService {
    store: Arc<dyn StockStore>,
}

impl StockService {
    pub fn new(store: Arc<dyn StockStore>) -> Self {
        Self { store }
    }

    /// Apply a movement batch all-or-nothing.
    ///
    /// Inside one store transaction, in submission order: load the product
    /// (`NotFound` aborts the batch), check sufficiency for outbound
    /// entries, stage the new stock quantity. The movement record goes in
    /// last. A batch naming the same product twice compounds against the
    /// staged quantity, not the pre-transaction one.
    pub fn create_movement(&self, draft: MovementDraft) -> DomainResult<StockMovement> {
        validate_entries(&draft.entries)?;

        let movement = StockMovement {
            id: MovementId::new(),
            direction: draft.direction,
            description: draft.description,
            entries: draft.entries,
            created_at: Utc::now(),
        };

        let staged = movement.clone();
        self.store.transaction(&mut |tx| {
            for entry in &staged.entries {
                let product = tx.product(entry.product_id)?;
                if staged.direction == MovementDirection::Out && entry.quantity > product.stock {
                    return Err(DomainError::insufficient_stock(product.name));
                }
                let next = product.stock + staged.direction.signed_delta(entry.quantity);
                tx.set_stock(entry.product_id, next)?;
            }
            tx.insert_movement(staged.clone())
        })?;

        info!(
            movement_id = %movement.id,
            direction = ?movement.direction,
            entries = movement.entries.len(),
            "stock movement applied"
        );
        Ok(movement)
    }

    pub fn find_movement(&self, id: MovementId) -> DomainResult<StockMovement> {
        self.store.find_movement(id)
    }

    pub fn list_movements(&self) -> DomainResult<Vec<StockMovement>> {
        self.store.list_movements()
    }

    /// Remove a movement record. Stock quantities stay as they are; the
    /// movement's effect is not reversed.
    pub fn delete_movement(&self, id: MovementId) -> DomainResult<StockMovement> {
        let movement = self.store.delete_movement(id)?;
        info!(movement_id = %id, "stock movement deleted; stock left unchanged");
        Ok(movement)
    }
}
