//! Order service: routes requests to the strategy for the order kind.

use std::sync::Arc;

use tracing::info;

use vendo_core::{DomainResult, OrderId, SellerId};
use vendo_orders::{Order, OrderDraft, OrderKind};
use vendo_store::{CustomerStore, OrderStore};

use crate::balance::BalanceAccessor;
use crate::strategy::{InstallmentStrategy, OrderStrategy, QuoteStrategy, SaleStrategy};

/// Dispatches order creation, update and deletion by order kind.
///
/// Creation routes on the draft's kind; update and deletion load the stored
/// order and route on its kind, since an order never changes kind.
pub struct OrderService {
    orders: Arc<dyn OrderStore>,
    installment: InstallmentStrategy,
    sale: SaleStrategy,
    quote: QuoteStrategy,
}

impl OrderService {
    pub fn new(orders: Arc<dyn OrderStore>, customers: Arc<dyn CustomerStore>) -> Self {
        let installment =
            InstallmentStrategy::new(Arc::clone(&orders), BalanceAccessor::new(customers));
        Self {
            orders,
            installment,
            sale: SaleStrategy,
            quote: QuoteStrategy,
        }
    }

    fn strategy_for(&self, kind: OrderKind) -> &dyn OrderStrategy {
        match kind {
            OrderKind::Sale => &self.sale,
            OrderKind::Quote => &self.quote,
            OrderKind::Installment => &self.installment,
        }
    }

    pub fn create_order(&self, draft: OrderDraft, seller: SellerId) -> DomainResult<Order> {
        let kind = draft.kind;
        let order = self.strategy_for(kind).create(draft, seller)?;
        info!(order_id = %order.id, ?kind, total = order.total, "order created");
        Ok(order)
    }

    pub fn update_order(&self, id: OrderId, draft: OrderDraft) -> DomainResult<Order> {
        let stored = self.orders.find_by_id(id)?;
        let order = self.strategy_for(stored.kind).update(id, draft)?;
        info!(order_id = %id, "order updated");
        Ok(order)
    }

    pub fn delete_order(&self, id: OrderId) -> DomainResult<()> {
        let stored = self.orders.find_by_id(id)?;
        self.strategy_for(stored.kind).delete(id)?;
        info!(order_id = %id, "order deleted");
        Ok(())
    }

    pub fn find_order(&self, id: OrderId) -> DomainResult<Order> {
        self.orders.find_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use vendo_core::{CustomerId, DomainError, ProductId};
    use vendo_customers::Customer;
    use vendo_orders::{OrderItem, OrderStatus};
    use vendo_store::InMemoryStore;

    fn item(quantity: i64, unit_price: i64) -> OrderItem {
        OrderItem {
            product_id: ProductId::new(),
            quantity,
            unit_price,
            total: quantity * unit_price,
        }
    }

    fn installment_draft(customer_id: CustomerId) -> OrderDraft {
        OrderDraft {
            kind: OrderKind::Installment,
            customer_id: Some(customer_id),
            items: vec![item(2, 1000)],
            subtotal: 2000,
            discount: 0,
            payments: Vec::new(),
            use_balance: false,
        }
    }

    fn setup() -> (Arc<InMemoryStore>, OrderService, CustomerId) {
        let store = Arc::new(InMemoryStore::new());
        let customer = Customer::new(CustomerId::new(), "Ada", Utc::now());
        let customer_id = customer.id;
        store.save(customer).unwrap();
        let service = OrderService::new(store.clone(), store.clone());
        (store, service, customer_id)
    }

    #[test]
    fn create_routes_on_the_draft_kind() {
        let (_store, service, customer_id) = setup();

        let order = service
            .create_order(installment_draft(customer_id), SellerId::new())
            .unwrap();
        assert_eq!(order.kind, OrderKind::Installment);

        let mut sale = installment_draft(customer_id);
        sale.kind = OrderKind::Sale;
        let err = service.create_order(sale, SellerId::new()).unwrap_err();
        assert!(matches!(err, DomainError::NotImplemented(_)));
    }

    #[test]
    fn update_routes_on_the_stored_kind() {
        let (store, service, customer_id) = setup();

        // A stored sale order (inserted directly; the strategy cannot create
        // one) still fails NotImplemented on update.
        let sale = Order {
            id: OrderId::new(),
            kind: OrderKind::Sale,
            status: OrderStatus::Open,
            items: vec![item(1, 500)],
            subtotal: 500,
            discount: 0,
            total: 500,
            paid: true,
            payments: Vec::new(),
            customer_id: None,
            seller_id: SellerId::new(),
            created_at: Utc::now(),
        };
        let sale_id = sale.id;
        store.create(sale).unwrap();

        let err = service
            .update_order(sale_id, installment_draft(customer_id))
            .unwrap_err();
        assert!(matches!(err, DomainError::NotImplemented(_)));
    }

    #[test]
    fn delete_routes_on_the_stored_kind() {
        let (_store, service, customer_id) = setup();
        let order = service
            .create_order(installment_draft(customer_id), SellerId::new())
            .unwrap();

        service.delete_order(order.id).unwrap();
        let err = service.find_order(order.id).unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[test]
    fn update_missing_order_is_not_found() {
        let (_store, service, customer_id) = setup();
        let err = service
            .update_order(OrderId::new(), installment_draft(customer_id))
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "order", .. }));
    }
}
