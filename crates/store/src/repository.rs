//! Store trait definitions (ports).
//!
//! These traits are the persistence contracts the engine consumes.
//! Implementations can be a relational database or the in-memory adapter in
//! [`crate::memory`]. Every method returns a [`DomainResult`]; a missing
//! record is `NotFound`, not an `Option`.

use std::sync::Arc;

use vendo_core::{CustomerId, DomainResult, MovementId, OrderId, ProductId};
use vendo_customers::Customer;
use vendo_orders::Order;
use vendo_products::Product;
use vendo_stock::StockMovement;

/// Persistence contract for orders and their owned items/payments.
pub trait OrderStore: Send + Sync {
    /// Persist a new order. The creating seller travels inside the record.
    fn create(&self, order: Order) -> DomainResult<Order>;

    /// Load an order by id, `NotFound` if absent.
    fn find_by_id(&self, id: OrderId) -> DomainResult<Order>;

    /// Replace a stored order wholesale.
    fn update(&self, id: OrderId, order: Order) -> DomainResult<Order>;

    /// Delete an order with its items and payments, returning the deleted
    /// record.
    fn delete(&self, id: OrderId) -> DomainResult<Order>;
}

/// Persistence contract for customers.
pub trait CustomerStore: Send + Sync {
    fn save(&self, customer: Customer) -> DomainResult<Customer>;

    fn find_by_id(&self, id: CustomerId) -> DomainResult<Customer>;

    /// Write exactly the given balance, returning the updated record. No
    /// floor or ceiling; callers own the arithmetic.
    fn update_balance(&self, id: CustomerId, balance: i64) -> DomainResult<Customer>;
}

/// Persistence contract for products.
///
/// There is deliberately no stock write here: stock changes go through
/// [`StockTx`] inside a [`StockStore::transaction`], which keeps the
/// reconciliation engine the only stock mutator.
pub trait ProductStore: Send + Sync {
    fn save(&self, product: Product) -> DomainResult<Product>;

    fn find_by_id(&self, id: ProductId) -> DomainResult<Product>;
}

/// Transaction handle for a stock reconciliation batch.
///
/// Reads observe writes staged earlier in the same transaction, so a batch
/// naming the same product twice compounds against the staged value.
pub trait StockTx {
    /// Current product state as staged within this transaction.
    fn product(&self, id: ProductId) -> DomainResult<Product>;

    /// Stage a new stock quantity for a product.
    fn set_stock(&mut self, id: ProductId, stock: i64) -> DomainResult<()>;

    /// Stage the movement record with its entries.
    fn insert_movement(&mut self, movement: StockMovement) -> DomainResult<()>;
}

/// Persistence contract for stock movements and the transactional batch
/// boundary.
pub trait StockStore: Send + Sync {
    /// Run `f` against a transaction handle. If `f` returns `Ok`, every
    /// staged write commits; on `Err`, none of them are observable.
    /// Concurrent transactions touching the same products must serialize
    /// (row locking or equivalent) so no two batches pass a sufficiency
    /// check against the same stale read.
    fn transaction(
        &self,
        f: &mut dyn FnMut(&mut dyn StockTx) -> DomainResult<()>,
    ) -> DomainResult<()>;

    fn find_movement(&self, id: MovementId) -> DomainResult<StockMovement>;

    fn list_movements(&self) -> DomainResult<Vec<StockMovement>>;

    /// Remove a movement record, returning it. Stock quantities are left
    /// untouched.
    fn delete_movement(&self, id: MovementId) -> DomainResult<StockMovement>;
}

impl<S> OrderStore for Arc<S>
where
    S: OrderStore + ?Sized,
{
    fn create(&self, order: Order) -> DomainResult<Order> {
        (**self).create(order)
    }

    fn find_by_id(&self, id: OrderId) -> DomainResult<Order> {
        (**self).find_by_id(id)
    }

    fn update(&self, id: OrderId, order: Order) -> DomainResult<Order> {
        (**self).update(id, order)
    }

    fn delete(&self, id: OrderId) -> DomainResult<Order> {
        (**self).delete(id)
    }
}

impl<S> CustomerStore for Arc<S>
where
    S: CustomerStore + ?Sized,
{
    fn save(&self, customer: Customer) -> DomainResult<Customer> {
        (**self).save(customer)
    }

    fn find_by_id(&self, id: CustomerId) -> DomainResult<Customer> {
        (**self).find_by_id(id)
    }

    fn update_balance(&self, id: CustomerId, balance: i64) -> DomainResult<Customer> {
        (**self).update_balance(id, balance)
    }
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn save(&self, product: Product) -> DomainResult<Product> {
        (**self).save(product)
    }

    fn find_by_id(&self, id: ProductId) -> DomainResult<Product> {
        (**self).find_by_id(id)
    }
}

impl<S> StockStore for Arc<S>
where
    S: StockStore + ?Sized,
{
    fn transaction(
        &self,
        f: &mut dyn FnMut(&mut dyn StockTx) -> DomainResult<()>,
    ) -> DomainResult<()> {
        (**self).transaction(f)
    }

    fn find_movement(&self, id: MovementId) -> DomainResult<StockMovement> {
        (**self).find_movement(id)
    }

    fn list_movements(&self) -> DomainResult<Vec<StockMovement>> {
        (**self).list_movements()
    }

    fn delete_movement(&self, id: MovementId) -> DomainResult<StockMovement> {
        (**self).delete_movement(id)
    }
}
