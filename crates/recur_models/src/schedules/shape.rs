//! Calendar year shapes.

use std::fmt;

use recur_core::types::Instant;

/// The layout of a calendar year: the weekday of January 1st and whether it is a leap year.
///
/// There are exactly fourteen shapes and the Gregorian calendar repeats every
/// one of them, so a schedule that matches nothing across all fourteen shapes
/// can never match.
///
/// # Examples
///
/// ```
/// use recur_models::schedules::CalendarShape;
///
/// // 2000-01-01 was a Saturday
/// let shape = CalendarShape::of_year(2000).unwrap();
/// assert_eq!(shape.first_weekday(), 5);
/// assert!(shape.is_leap());
/// assert_eq!(shape.index(), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarShape {
    first_weekday: u32,
    leap: bool,
}

impl CalendarShape {
    /// Number of distinct shapes.
    pub const COUNT: usize = 14;

    /// Returns the shape of `year`, or `None` outside the representable range.
    pub fn of_year(year: i32) -> Option<Self> {
        let first = Instant::from_ymd_hms(year, 1, 1, 0, 0, 0).ok()?;
        Some(Self {
            first_weekday: first.weekday(),
            leap: first.is_leap_year(),
        })
    }

    /// Returns the weekday of January 1st (0 = Monday).
    #[inline]
    pub fn first_weekday(&self) -> u32 {
        self.first_weekday
    }

    /// Returns true for leap years.
    #[inline]
    pub fn is_leap(&self) -> bool {
        self.leap
    }

    /// Returns a dense index in `0..CalendarShape::COUNT`.
    #[inline]
    pub fn index(&self) -> usize {
        self.first_weekday as usize * 2 + usize::from(self.leap)
    }
}

impl fmt::Display for CalendarShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.leap { "leap" } else { "common" };
        write!(f, "{} year starting on weekday {}", kind, self.first_weekday)
    }
}

/// The set of shapes already seen, as a bitmask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ShapeSet(u16);

impl ShapeSet {
    const ALL: u16 = (1 << CalendarShape::COUNT) - 1;

    pub(crate) fn insert(&mut self, shape: CalendarShape) {
        self.0 |= 1 << shape.index();
    }

    pub(crate) fn len(&self) -> u32 {
        self.0.count_ones()
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.0 == Self::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_years() {
        let y2001 = CalendarShape::of_year(2001).unwrap();
        assert_eq!(y2001.first_weekday(), 0);
        assert!(!y2001.is_leap());
        assert_eq!(y2001.index(), 0);

        let y1900 = CalendarShape::of_year(1900).unwrap();
        assert!(!y1900.is_leap());
        assert_eq!(y1900.to_string(), "common year starting on weekday 0");
    }

    #[test]
    fn test_out_of_range_year() {
        assert_eq!(CalendarShape::of_year(0), None);
        assert_eq!(CalendarShape::of_year(10_000), None);
    }

    #[test]
    fn test_every_shape_within_four_centuries() {
        let mut seen = ShapeSet::default();
        for year in 2000..2400 {
            seen.insert(CalendarShape::of_year(year).unwrap());
        }
        assert!(seen.is_complete());
        assert_eq!(seen.len(), 14);
    }

    #[test]
    fn test_shape_set_counts_distinct_shapes() {
        let mut seen = ShapeSet::default();
        seen.insert(CalendarShape::of_year(2001).unwrap());
        seen.insert(CalendarShape::of_year(2007).unwrap());
        // 2001 and 2007 share a shape
        assert_eq!(seen.len(), 1);
        assert!(!seen.is_complete());
    }
}
