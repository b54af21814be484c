//! `vendo-engine` — the application services of the back office.
//!
//! Order strategy dispatch, customer balance access and the stock
//! reconciliation engine. Everything here composes the store traits from
//! `vendo-store`; the engine does no IO of its own and all collaborators
//! are injected by the caller.

pub mod balance;
pub mod orders;
pub mod stock;
pub mod strategy;

pub use balance::BalanceAccessor;
pub use orders::OrderService;
pub use stock::StockService;
pub use strategy::{InstallmentStrategy, OrderStrategy, QuoteStrategy, SaleStrategy};
