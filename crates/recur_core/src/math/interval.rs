//! Closed intervals over ordered values.
//!
//! This module provides:
//! - [`Interval`]: A closed range `[start, stop]` or the distinguished empty interval
//! - Containment of single items and set relations between intervals
//! - Overlap (intersection) and combination (union of overlapping intervals)
//!
//! # Examples
//!
//! ```
//! use recur_core::math::interval::Interval;
//!
//! let interval = Interval::new(1, 10);
//! assert!(interval.contains(&10));
//! assert!(!interval.contains(&11));
//!
//! assert_eq!(interval.overlap(&Interval::new(5, 15)), Interval::new(5, 10));
//! assert_eq!(interval.overlap(&Interval::new(20, 40)), Interval::Empty);
//! ```

use num_traits::Zero;
use std::fmt;

/// A closed interval `[start, stop]`, or the empty interval.
///
/// Both bounds are inclusive. The constructor does not reorder or validate
/// the bounds: an interval with `start > stop` simply contains nothing.
///
/// `Empty` is the "no result" value of [`overlap`](Interval::overlap) and
/// [`combine`](Interval::combine). It contains no item, overlaps nothing and
/// is equal only to itself.
///
/// Set relations are exposed as named methods ([`encloses`](Interval::encloses),
/// [`covers`](Interval::covers) and their mirrors) rather than through
/// `PartialOrd`: `covers` is not the same as `encloses || ==`.
///
/// # Examples
///
/// ```
/// use recur_core::math::interval::Interval;
///
/// let outer = Interval::new(1, 10);
/// let inner = Interval::new(4, 6);
///
/// assert!(outer.encloses(&inner));
/// assert!(inner.is_enclosed_by(&outer));
/// assert!(outer.covers(&Interval::new(1, 5)));
/// assert!(!outer.encloses(&Interval::new(1, 5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Interval<T> {
    /// The empty interval.
    Empty,
    /// A closed interval with inclusive bounds.
    Bounded {
        /// Lower bound (inclusive).
        start: T,
        /// Upper bound (inclusive).
        stop: T,
    },
}

impl<T> Interval<T>
where
    T: PartialOrd + Copy,
{
    /// Creates the closed interval `[start, stop]`.
    #[inline]
    pub fn new(start: T, stop: T) -> Self {
        Interval::Bounded { start, stop }
    }

    /// Returns the lower bound, or `None` for the empty interval.
    #[inline]
    pub fn start(&self) -> Option<T> {
        match self {
            Interval::Empty => None,
            Interval::Bounded { start, .. } => Some(*start),
        }
    }

    /// Returns the upper bound, or `None` for the empty interval.
    #[inline]
    pub fn stop(&self) -> Option<T> {
        match self {
            Interval::Empty => None,
            Interval::Bounded { stop, .. } => Some(*stop),
        }
    }

    /// Returns both bounds, or `None` for the empty interval.
    #[inline]
    pub fn bounds(&self) -> Option<(T, T)> {
        match self {
            Interval::Empty => None,
            Interval::Bounded { start, stop } => Some((*start, *stop)),
        }
    }

    /// Returns true for the empty interval.
    ///
    /// A bounded interval with `start > stop` is not `Empty`, even though it
    /// contains nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Interval::Empty)
    }

    /// Tests whether `item` lies within `[start, stop]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_core::math::interval::Interval;
    ///
    /// assert!(Interval::new(0.1, 5.1).contains(&3.1));
    /// assert!(!Interval::new(0.1, 5.1).contains(&6.1));
    /// assert!(!Interval::<i64>::Empty.contains(&0));
    /// ```
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        match self {
            Interval::Empty => false,
            Interval::Bounded { start, stop } => start <= item && item <= stop,
        }
    }

    /// Tests whether `other` lies strictly inside `self`, touching neither bound.
    ///
    /// Every bounded interval encloses `Empty`; `Empty` encloses nothing.
    pub fn encloses(&self, other: &Self) -> bool {
        match (self, other) {
            (Interval::Empty, _) => false,
            (Interval::Bounded { .. }, Interval::Empty) => true,
            (
                Interval::Bounded { start, stop },
                Interval::Bounded {
                    start: other_start,
                    stop: other_stop,
                },
            ) => start < other_start && other_stop < stop,
        }
    }

    /// Tests whether `other` lies inside `self`, bounds allowed to coincide.
    ///
    /// Every interval covers `Empty`; `Empty` covers only itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_core::math::interval::Interval;
    ///
    /// assert!(Interval::new(1, 10).covers(&Interval::new(1, 10)));
    /// assert!(Interval::new(1, 10).covers(&Interval::new(5, 10)));
    /// assert!(!Interval::new(5, 15).covers(&Interval::new(1, 10)));
    /// ```
    pub fn covers(&self, other: &Self) -> bool {
        match (self, other) {
            (_, Interval::Empty) => true,
            (Interval::Empty, Interval::Bounded { .. }) => false,
            (
                Interval::Bounded { start, stop },
                Interval::Bounded {
                    start: other_start,
                    stop: other_stop,
                },
            ) => start <= other_start && other_stop <= stop,
        }
    }

    /// Mirror of [`encloses`](Interval::encloses): `a.is_enclosed_by(b) == b.encloses(a)`.
    #[inline]
    pub fn is_enclosed_by(&self, other: &Self) -> bool {
        other.encloses(self)
    }

    /// Mirror of [`covers`](Interval::covers): `a.is_covered_by(b) == b.covers(a)`.
    #[inline]
    pub fn is_covered_by(&self, other: &Self) -> bool {
        other.covers(self)
    }

    /// Tests whether the two intervals share at least one point.
    ///
    /// Always false when either operand is `Empty`.
    pub fn is_overlapping(&self, other: &Self) -> bool {
        match (self.bounds(), other.bounds()) {
            (Some((start, stop)), Some((other_start, other_stop))) => {
                partial_max(start, other_start) <= partial_min(stop, other_stop)
            }
            _ => false,
        }
    }

    /// Returns the common part of two intervals, or `Empty` if they do not overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::new(5, 10).overlap(&Interval::new(1, 20)), Interval::new(5, 10));
    /// assert_eq!(Interval::new(1, 10).overlap(&Interval::Empty), Interval::Empty);
    /// ```
    pub fn overlap(&self, other: &Self) -> Self {
        match (self.bounds(), other.bounds()) {
            (Some((start, stop)), Some((other_start, other_stop))) if self.is_overlapping(other) => {
                Interval::new(
                    partial_max(start, other_start),
                    partial_min(stop, other_stop),
                )
            }
            _ => Interval::Empty,
        }
    }

    /// Returns the union of two overlapping intervals, or `Empty` otherwise.
    ///
    /// Intervals that merely touch without sharing a point are not combined.
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::new(1, 10).combine(&Interval::new(5, 15)), Interval::new(1, 15));
    /// assert_eq!(Interval::new(1, 10).combine(&Interval::new(15, 25)), Interval::Empty);
    /// assert_eq!(Interval::new(1, 10).combine(&Interval::new(11, 25)), Interval::Empty);
    /// ```
    pub fn combine(&self, other: &Self) -> Self {
        match (self.bounds(), other.bounds()) {
            (Some((start, stop)), Some((other_start, other_stop))) if self.is_overlapping(other) => {
                Interval::new(
                    partial_min(start, other_start),
                    partial_max(stop, other_stop),
                )
            }
            _ => Interval::Empty,
        }
    }
}

impl<T> Interval<T>
where
    T: PartialOrd + Copy + Zero,
{
    /// Creates the single-bound interval `[0, stop]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::up_to(10), Interval::new(0, 10));
    /// assert!(Interval::up_to(10).contains(&5));
    /// assert!(!Interval::up_to(10).contains(&11));
    /// ```
    #[inline]
    pub fn up_to(stop: T) -> Self {
        Interval::new(T::zero(), stop)
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interval::Empty => write!(f, "∅"),
            Interval::Bounded { start, stop } => write!(f, "[{}, {}]", start, stop),
        }
    }
}

#[inline]
fn partial_max<T: PartialOrd>(a: T, b: T) -> T {
    if a >= b {
        a
    } else {
        b
    }
}

#[inline]
fn partial_min<T: PartialOrd>(a: T, b: T) -> T {
    if a <= b {
        a
    } else {
        b
    }
}
