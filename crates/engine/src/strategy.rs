//! Order fulfillment strategies, one per order kind.
//!
//! All three kinds share one interface; the dispatcher in
//! [`crate::orders`] picks the implementation by kind. Sale and quote
//! orders are contractually defined but not yet supported; every call on
//! them fails with `NotImplemented` rather than silently succeeding.

use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use vendo_core::{DomainError, DomainResult, OrderId, PaymentId, SellerId};
use vendo_orders::{
    Order, OrderDraft, OrderKind, OrderStatus, Payment, order_total, validate_items,
    validate_totals,
};
use vendo_store::OrderStore;

use crate::balance::BalanceAccessor;

/// Kind-specific order fulfillment.
///
/// Implementations must not leave partial state behind: a validation
/// failure means no write has happened.
pub trait OrderStrategy {
    fn create(&self, draft: OrderDraft, seller: SellerId) -> DomainResult<Order>;

    fn update(&self, id: OrderId, draft: OrderDraft) -> DomainResult<Order>;

    fn delete(&self, id: OrderId) -> DomainResult<()>;
}

/// Deferred-payment orders with optional balance draw-down at creation.
pub struct InstallmentStrategy {
    orders: Arc<dyn OrderStore>,
    balance: BalanceAccessor,
}

impl InstallmentStrategy {
    pub fn new(orders: Arc<dyn OrderStore>, balance: BalanceAccessor) -> Self {
        Self { orders, balance }
    }
}

impl OrderStrategy for InstallmentStrategy {
    fn create(&self, draft: OrderDraft, seller: SellerId) -> DomainResult<Order> {
        let customer_id = draft
            .customer_id
            .ok_or_else(|| DomainError::invalid_order("installment order requires a customer"))?;

        // Installment orders start unpaid; payments arrive later.
        if !draft.payments.is_empty() {
            return Err(DomainError::invalid_order(
                "installment order cannot be created with payments",
            ));
        }

        let customer = self.balance.get(customer_id)?;

        validate_items(&draft.items)?;
        validate_totals(&draft.items, draft.subtotal, draft.discount)?;

        let total = order_total(draft.subtotal, draft.discount);
        let now = Utc::now();

        let applied = if draft.use_balance && customer.has_credit() {
            customer.balance.min(total)
        } else {
            0
        };

        let mut payments = Vec::new();
        if applied > 0 {
            payments.push(Payment::balance_draw_down(applied, now));
        }

        let order = Order {
            id: OrderId::new(),
            kind: OrderKind::Installment,
            status: OrderStatus::Open,
            items: draft.items,
            subtotal: draft.subtotal,
            discount: draft.discount,
            total,
            paid: false,
            payments,
            customer_id: Some(customer_id),
            seller_id: seller,
            created_at: now,
        };

        let created = self.orders.create(order)?;

        // The balance write is a separate call after the order commit. If it
        // fails the order stays persisted and the error surfaces to the
        // caller; see DESIGN.md for the atomicity decision.
        if applied > 0 {
            if let Err(err) = self
                .balance
                .set_balance(customer_id, customer.balance - applied)
            {
                warn!(
                    order_id = %created.id,
                    customer_id = %customer_id,
                    applied,
                    error = %err,
                    "balance deduction failed after order write; order remains persisted"
                );
                return Err(err);
            }
        }

        Ok(created)
    }

    fn update(&self, id: OrderId, draft: OrderDraft) -> DomainResult<Order> {
        let stored = self.orders.find_by_id(id)?;

        if draft.kind != stored.kind {
            return Err(DomainError::invalid_order("order kind cannot change"));
        }

        validate_items(&draft.items)?;
        validate_totals(&draft.items, draft.subtotal, draft.discount)?;

        let now = Utc::now();
        let payments = draft
            .payments
            .into_iter()
            .map(|p| Payment {
                id: PaymentId::new(),
                method: p.method,
                amount: p.amount,
                change: p.change,
                created_at: now,
            })
            .collect();

        // Full replacement: the draft supplies items, totals, discount,
        // customer and payments; kind, status, paid flag, seller and
        // creation time stay with the stored order. No balance logic here.
        let replacement = Order {
            id: stored.id,
            kind: stored.kind,
            status: stored.status,
            items: draft.items,
            subtotal: draft.subtotal,
            discount: draft.discount,
            total: order_total(draft.subtotal, draft.discount),
            paid: stored.paid,
            payments,
            customer_id: draft.customer_id,
            seller_id: stored.seller_id,
            created_at: stored.created_at,
        };

        self.orders.update(id, replacement)
    }

    fn delete(&self, id: OrderId) -> DomainResult<()> {
        self.orders.delete(id)?;
        Ok(())
    }
}

/// Immediate cash sales. Not yet supported.
pub struct SaleStrategy;

impl OrderStrategy for SaleStrategy {
    fn create(&self, _draft: OrderDraft, _seller: SellerId) -> DomainResult<Order> {
        Err(DomainError::not_implemented("sale orders"))
    }

    fn update(&self, _id: OrderId, _draft: OrderDraft) -> DomainResult<Order> {
        Err(DomainError::not_implemented("sale orders"))
    }

    fn delete(&self, _id: OrderId) -> DomainResult<()> {
        Err(DomainError::not_implemented("sale orders"))
    }
}

/// Non-binding estimates. Not yet supported.
pub struct QuoteStrategy;

impl OrderStrategy for QuoteStrategy {
    fn create(&self, _draft: OrderDraft, _seller: SellerId) -> DomainResult<Order> {
        Err(DomainError::not_implemented("quote orders"))
    }

    fn update(&self, _id: OrderId, _draft: OrderDraft) -> DomainResult<Order> {
        Err(DomainError::not_implemented("quote orders"))
    }

    fn delete(&self, _id: OrderId) -> DomainResult<()> {
        Err(DomainError::not_implemented("quote orders"))
    }
}
