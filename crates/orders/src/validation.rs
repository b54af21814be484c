//! Pure order validation rules.
//!
//! Stateless checks run before any persistence. All monetary arithmetic is
//! integer (minor units), so the item invariant `total == quantity *
//! unit_price` is exact; the only rounding is the discount division, done
//! half-up through an `i128` intermediate.

use vendo_core::{DomainError, DomainResult};

use crate::order::OrderItem;

/// Validate a submitted list of line items.
///
/// Rejects an empty list, non-positive quantity/price/total, and any item
/// whose total disagrees with `quantity * unit_price`.
pub fn validate_items(items: &[OrderItem]) -> DomainResult<()> {
    if items.is_empty() {
        return Err(DomainError::invalid_order("order has no items"));
    }

    for item in items {
        if item.quantity <= 0 {
            return Err(DomainError::invalid_order("item quantity must be positive"));
        }
        if item.unit_price <= 0 {
            return Err(DomainError::invalid_order("item unit price must be positive"));
        }
        if item.total <= 0 {
            return Err(DomainError::invalid_order("item total must be positive"));
        }
        if item.total != item.quantity * item.unit_price {
            return Err(DomainError::invalid_order(
                "item total does not match quantity * unit price",
            ));
        }
    }

    Ok(())
}

/// Validate the order-level totals against the submitted items.
///
/// `sum(item.total)` must equal `subtotal` exactly. The discount percent
/// must lie in `[0, 100]`; on top of the range check, the computed discount
/// amount is independently checked against the subtotal.
pub fn validate_totals(items: &[OrderItem], subtotal: i64, discount: i64) -> DomainResult<()> {
    let items_total: i64 = items.iter().map(|i| i.total).sum();
    if items_total != subtotal {
        return Err(DomainError::invalid_order(
            "subtotal does not match the sum of item totals",
        ));
    }

    if discount < 0 {
        return Err(DomainError::invalid_order("discount cannot be negative"));
    }
    if discount > 100 {
        return Err(DomainError::invalid_order("discount cannot exceed 100%"));
    }
    if discount_amount(subtotal, discount) > subtotal {
        return Err(DomainError::invalid_order(
            "discount amount exceeds the subtotal",
        ));
    }

    Ok(())
}

/// Discount amount in minor units, rounded half-up.
pub fn discount_amount(subtotal: i64, discount: i64) -> i64 {
    let amount = (i128::from(subtotal) * i128::from(discount) + 50) / 100;
    amount as i64
}

/// Order total after discount: `subtotal - discount_amount`.
pub fn order_total(subtotal: i64, discount: i64) -> i64 {
    subtotal - discount_amount(subtotal, discount)
}
