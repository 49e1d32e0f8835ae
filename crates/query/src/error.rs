//! Query error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while evaluating a query operator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A reduction that needs at least one element ran over an empty sequence.
    #[error("Sequence contains no elements: {operator} requires at least one")]
    EmptySequence { operator: &'static str },

    /// An accumulated value left the representable decimal range.
    #[error("Arithmetic overflow in {operator}")]
    Overflow { operator: &'static str },

    /// Price band bounds are out of order.
    #[error("Invalid price bands: cheap bound {cheap_below} above {expensive_from}")]
    InvalidBands {
        cheap_below: Decimal,
        expensive_from: Decimal,
    },
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
