//! Time interval construction errors.

use recur_core::types::Unit;
use thiserror::Error;

/// Errors that can occur when constructing a [`TimeInterval`](super::TimeInterval).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeIntervalError {
    /// The recurrence unit is not strictly coarser than the interval unit.
    #[error("Impossible recurrence: {unit}s cannot recur every {recurrence}")]
    ImpossibleRecurrence {
        /// The unit the interval is expressed in.
        unit: Unit,
        /// The requested recurrence unit.
        recurrence: Unit,
    },
}
