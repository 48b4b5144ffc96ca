//! Error types for calendar construction and arithmetic.

use thiserror::Error;

use super::unit::Unit;

/// Calendar-related errors.
///
/// # Variants
/// - `InvalidInstant`: Components that do not form a civil date and time
/// - `OutOfRange`: A valid date and time outside the representable range
/// - `Overflow`: Arithmetic that left the representable range
/// - `ParseError`: Failed to parse an instant string
/// - `UnknownUnit`: Failed to parse a unit name
///
/// # Examples
/// ```
/// use recur_core::types::{CalendarError, Unit};
///
/// let err = CalendarError::Overflow { amount: 1, unit: Unit::Year };
/// assert_eq!(format!("{}", err), "Calendar overflow adding 1 year(s)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// Components that do not form a civil date and time (e.g., February 30th).
    #[error("Invalid instant: {year}-{month}-{day} {hour}:{minute}:{second}")]
    InvalidInstant {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
        /// Hour component (0-23)
        hour: u32,
        /// Minute component (0-59)
        minute: u32,
        /// Second component (0-59)
        second: u32,
    },

    /// A date and time outside 0001-01-01T00:00:00 ..= 9999-12-31T23:59:59.999999.
    #[error("Instant out of representable range: {0}")]
    OutOfRange(String),

    /// Arithmetic left the representable range.
    #[error("Calendar overflow adding {amount} {unit}(s)")]
    Overflow {
        /// Number of units being added.
        amount: i64,
        /// Unit being added.
        unit: Unit,
    },

    /// Failed to parse an instant string.
    #[error("Instant parse error: {0}")]
    ParseError(String),

    /// Failed to parse a unit name.
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
}

impl CalendarError {
    /// Returns true if the error marks the edge of the representable range.
    ///
    /// Generators treat these errors as the end of their sequence.
    #[inline]
    pub fn is_overflow(&self) -> bool {
        matches!(
            self,
            CalendarError::Overflow { .. } | CalendarError::OutOfRange(_)
        )
    }
}
