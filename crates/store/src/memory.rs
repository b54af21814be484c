//! In-memory store implementation.
//!
//! Used for testing and development without a database. Thread-safe via
//! `RwLock`. The stock transaction stages its writes against a snapshot
//! taken under the write locks and swaps the snapshot back only on success,
//! which gives both rollback and serialization of concurrent batches (the
//! coarse-grained equivalent of row locking).

use std::collections::HashMap;
use std::sync::RwLock;

use vendo_core::{CustomerId, DomainError, DomainResult, MovementId, OrderId, ProductId};
use vendo_customers::Customer;
use vendo_orders::Order;
use vendo_products::Product;
use vendo_stock::StockMovement;

use crate::repository::{CustomerStore, OrderStore, ProductStore, StockStore, StockTx};

/// In-memory store implementing every persistence contract.
pub struct InMemoryStore {
    customers: RwLock<HashMap<CustomerId, Customer>>,
    products: RwLock<HashMap<ProductId, Product>>,
    orders: RwLock<HashMap<OrderId, Order>>,
    movements: RwLock<HashMap<MovementId, StockMovement>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            customers: RwLock::new(HashMap::new()),
            products: RwLock::new(HashMap::new()),
            orders: RwLock::new(HashMap::new()),
            movements: RwLock::new(HashMap::new()),
        }
    }

    pub fn customer_count(&self) -> usize {
        self.customers.read().unwrap().len()
    }

    pub fn product_count(&self) -> usize {
        self.products.read().unwrap().len()
    }

    pub fn order_count(&self) -> usize {
        self.orders.read().unwrap().len()
    }

    pub fn movement_count(&self) -> usize {
        self.movements.read().unwrap().len()
    }

    /// Clear all data (useful for test setup).
    pub fn clear(&self) {
        self.customers.write().unwrap().clear();
        self.products.write().unwrap().clear();
        self.orders.write().unwrap().clear();
        self.movements.write().unwrap().clear();
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderStore for InMemoryStore {
    fn create(&self, order: Order) -> DomainResult<Order> {
        let mut orders = self.orders.write().unwrap();
        orders.insert(order.id, order.clone());
        Ok(order)
    }

    fn find_by_id(&self, id: OrderId) -> DomainResult<Order> {
        let orders = self.orders.read().unwrap();
        orders
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("order", id))
    }

    fn update(&self, id: OrderId, order: Order) -> DomainResult<Order> {
        let mut orders = self.orders.write().unwrap();
        if !orders.contains_key(&id) {
            return Err(DomainError::not_found("order", id));
        }
        orders.insert(id, order.clone());
        Ok(order)
    }

    fn delete(&self, id: OrderId) -> DomainResult<Order> {
        let mut orders = self.orders.write().unwrap();
        orders
            .remove(&id)
            .ok_or_else(|| DomainError::not_found("order", id))
    }
}

impl CustomerStore for InMemoryStore {
    fn save(&self, customer: Customer) -> DomainResult<Customer> {
        let mut customers = self.customers.write().unwrap();
        customers.insert(customer.id, customer.clone());
        Ok(customer)
    }

    fn find_by_id(&self, id: CustomerId) -> DomainResult<Customer> {
        let customers = self.customers.read().unwrap();
        customers
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("customer", id))
    }

    fn update_balance(&self, id: CustomerId, balance: i64) -> DomainResult<Customer> {
        let mut customers = self.customers.write().unwrap();
        let customer = customers
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("customer", id))?;
        customer.balance = balance;
        Ok(customer.clone())
    }
}

impl ProductStore for InMemoryStore {
    fn save(&self, product: Product) -> DomainResult<Product> {
        let mut products = self.products.write().unwrap();
        products.insert(product.id, product.clone());
        Ok(product)
    }

    fn find_by_id(&self, id: ProductId) -> DomainResult<Product> {
        let products = self.products.read().unwrap();
        products
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("product", id))
    }
}

/// Staged state for one stock transaction. Reads see earlier staged writes.
struct MemoryStockTx {
    products: HashMap<ProductId, Product>,
    movements: HashMap<MovementId, StockMovement>,
}

impl StockTx for MemoryStockTx {
    fn product(&self, id: ProductId) -> DomainResult<Product> {
        self.products
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("product", id))
    }

    fn set_stock(&mut self, id: ProductId, stock: i64) -> DomainResult<()> {
        let product = self
            .products
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("product", id))?;
        product.stock = stock;
        Ok(())
    }

    fn insert_movement(&mut self, movement: StockMovement) -> DomainResult<()> {
        self.movements.insert(movement.id, movement);
        Ok(())
    }
}

impl StockStore for InMemoryStore {
    fn transaction(
        &self,
        f: &mut dyn FnMut(&mut dyn StockTx) -> DomainResult<()>,
    ) -> DomainResult<()> {
        // Both write locks are held for the whole transaction, so batches
        // never interleave.
        let mut products = self.products.write().unwrap();
        let mut movements = self.movements.write().unwrap();

        let mut tx = MemoryStockTx {
            products: products.clone(),
            movements: movements.clone(),
        };
        f(&mut tx)?;

        *products = tx.products;
        *movements = tx.movements;
        Ok(())
    }

    fn find_movement(&self, id: MovementId) -> DomainResult<StockMovement> {
        let movements = self.movements.read().unwrap();
        movements
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("stock movement", id))
    }

    fn list_movements(&self) -> DomainResult<Vec<StockMovement>> {
        let movements = self.movements.read().unwrap();
        let mut all: Vec<StockMovement> = movements.values().cloned().collect();
        all.sort_by_key(|m| m.created_at);
        Ok(all)
    }

    fn delete_movement(&self, id: MovementId) -> DomainResult<StockMovement> {
        let mut movements = self.movements.write().unwrap();
        movements
            .remove(&id)
            .ok_or_else(|| DomainError::not_found("stock movement", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use vendo_core::SellerId;
    use vendo_orders::{OrderKind, OrderStatus};
    use vendo_stock::MovementDirection;

    fn test_order() -> Order {
        Order {
            id: OrderId::new(),
            kind: OrderKind::Installment,
            status: OrderStatus::Open,
            items: Vec::new(),
            subtotal: 0,
            discount: 0,
            total: 0,
            paid: false,
            payments: Vec::new(),
            customer_id: None,
            seller_id: SellerId::new(),
            created_at: Utc::now(),
        }
    }

    fn test_product(name: &str, stock: i64) -> Product {
        Product::new(ProductId::new(), "SKU-001", name, 1000, Utc::now()).with_stock(stock)
    }

    #[test]
    fn order_create_and_find() {
        let store = InMemoryStore::new();
        let order = test_order();
        let id = order.id;

        OrderStore::create(&store, order).unwrap();

        let found = OrderStore::find_by_id(&store, id).unwrap();
        assert_eq!(found.id, id);
    }

    #[test]
    fn order_find_missing_is_not_found() {
        let store = InMemoryStore::new();
        let err = OrderStore::find_by_id(&store, OrderId::new()).unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "order", .. }));
    }

    #[test]
    fn order_update_replaces_the_record() {
        let store = InMemoryStore::new();
        let order = test_order();
        let id = order.id;
        OrderStore::create(&store, order.clone()).unwrap();

        let mut replacement = order;
        replacement.discount = 10;
        OrderStore::update(&store, id, replacement).unwrap();

        assert_eq!(OrderStore::find_by_id(&store, id).unwrap().discount, 10);
    }

    #[test]
    fn order_update_missing_is_not_found() {
        let store = InMemoryStore::new();
        let err = OrderStore::update(&store, OrderId::new(), test_order()).unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[test]
    fn order_delete_returns_the_record() {
        let store = InMemoryStore::new();
        let order = test_order();
        let id = order.id;
        OrderStore::create(&store, order).unwrap();
        assert_eq!(store.order_count(), 1);

        let deleted = OrderStore::delete(&store, id).unwrap();
        assert_eq!(deleted.id, id);
        assert_eq!(store.order_count(), 0);
    }

    #[test]
    fn update_balance_writes_exactly_the_given_value() {
        let store = InMemoryStore::new();
        let customer = Customer::new(CustomerId::new(), "Ada", Utc::now());
        let id = customer.id;
        CustomerStore::save(&store, customer).unwrap();

        // Negative balances are allowed; no clamp.
        let updated = CustomerStore::update_balance(&store, id, -250).unwrap();
        assert_eq!(updated.balance, -250);
        assert_eq!(CustomerStore::find_by_id(&store, id).unwrap().balance, -250);
    }

    #[test]
    fn transaction_commits_staged_writes() {
        let store = InMemoryStore::new();
        let product = test_product("Beans", 100);
        let id = product.id;
        ProductStore::save(&store, product).unwrap();

        store
            .transaction(&mut |tx| {
                let p = tx.product(id)?;
                tx.set_stock(id, p.stock + 50)
            })
            .unwrap();

        assert_eq!(ProductStore::find_by_id(&store, id).unwrap().stock, 150);
    }

    #[test]
    fn transaction_discards_staged_writes_on_error() {
        let store = InMemoryStore::new();
        let product = test_product("Beans", 100);
        let id = product.id;
        ProductStore::save(&store, product).unwrap();

        let err = store
            .transaction(&mut |tx| {
                tx.set_stock(id, 0)?;
                tx.insert_movement(StockMovement {
                    id: MovementId::new(),
                    direction: MovementDirection::Out,
                    description: "doomed".into(),
                    entries: Vec::new(),
                    created_at: Utc::now(),
                })?;
                Err(DomainError::insufficient_stock("Beans"))
            })
            .unwrap_err();

        assert!(matches!(err, DomainError::InsufficientStock(_)));
        assert_eq!(ProductStore::find_by_id(&store, id).unwrap().stock, 100);
        assert_eq!(store.movement_count(), 0);
    }

    #[test]
    fn transaction_reads_observe_staged_writes() {
        let store = InMemoryStore::new();
        let product = test_product("Beans", 100);
        let id = product.id;
        ProductStore::save(&store, product).unwrap();

        store
            .transaction(&mut |tx| {
                tx.set_stock(id, 40)?;
                assert_eq!(tx.product(id)?.stock, 40);
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn delete_movement_missing_is_not_found() {
        let store = InMemoryStore::new();
        let err = store.delete_movement(MovementId::new()).unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
