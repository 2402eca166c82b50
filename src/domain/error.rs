//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the brightness model.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("maximum brightness is {max}, expected a positive value")]
    InvalidMaximum { max: i64 },

    #[error("percentage {0} is outside 0..=100")]
    PercentOutOfRange(f64),
}
