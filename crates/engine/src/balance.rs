//! Customer balance accessor.

use std::sync::Arc;

use vendo_core::{CustomerId, DomainResult};
use vendo_customers::Customer;
use vendo_store::CustomerStore;

/// Read/write access to a customer's stored balance.
///
/// The accessor writes exactly the value it is given; there is no floor or
/// ceiling. Callers own the arithmetic, including draw-down bounds.
#[derive(Clone)]
pub struct BalanceAccessor {
    customers: Arc<dyn CustomerStore>,
}

impl BalanceAccessor {
    pub fn new(customers: Arc<dyn CustomerStore>) -> Self {
        Self { customers }
    }

    /// Load the customer, `NotFound` if absent.
    pub fn get(&self, id: CustomerId) -> DomainResult<Customer> {
        self.customers.find_by_id(id)
    }

    /// Write the given balance and return the updated record.
    pub fn set_balance(&self, id: CustomerId, balance: i64) -> DomainResult<Customer> {
        self.customers.update_balance(id, balance)
    }
}
