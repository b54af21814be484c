//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure in this repository is a deterministic business-rule
/// violation; there are no transient faults to retry, so errors propagate
/// unmodified to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A malformed order, line item, or movement batch was submitted.
    #[error("invalid order: {0}")]
    InvalidOrder(String),

    /// A referenced record does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// An outbound movement would drive a product's stock below zero.
    ///
    /// The product name is load-bearing: callers render it to the user.
    #[error("insufficient stock for item '{0}'")]
    InsufficientStock(String),

    /// The operation is contractually defined but not yet supported.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_order(msg: impl Into<String>) -> Self {
        Self::InvalidOrder(msg.into())
    }

    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn insufficient_stock(product: impl Into<String>) -> Self {
        Self::InsufficientStock(product.into())
    }

    pub fn not_implemented(what: &'static str) -> Self {
        Self::NotImplemented(what)
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
