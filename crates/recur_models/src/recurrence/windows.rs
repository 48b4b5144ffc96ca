//! Window sequence generation for time intervals.

use std::fmt;
use std::iter::FusedIterator;

use recur_core::calendar::{add_delta, floor};
use recur_core::types::{CalendarError, Instant};
use tracing::debug;

use super::time_interval::TimeInterval;

/// A concrete half-open window `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    start: Instant,
    end: Instant,
}

impl Window {
    /// Creates a window from its inclusive start and exclusive end.
    #[inline]
    pub fn new(start: Instant, end: Instant) -> Self {
        Self { start, end }
    }

    /// Returns the first instant of the window.
    #[inline]
    pub fn start(&self) -> Instant {
        self.start
    }

    /// Returns the first instant after the window.
    #[inline]
    pub fn end(&self) -> Instant {
        self.end
    }

    /// Returns true if `start <= instant < end`.
    #[inline]
    pub fn contains(&self, instant: Instant) -> bool {
        self.start <= instant && instant < self.end
    }
}

impl From<Window> for (Instant, Instant) {
    fn from(window: Window) -> Self {
        (window.start, window.end)
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing generated yet.
    Initial,
    /// The last period examined began at the given boundary.
    Period(Instant),
    Finished,
}

/// Lazy, ascending sequence of the windows of a [`TimeInterval`].
///
/// Created by [`TimeInterval::forward`]. The sequence is infinite for
/// recurring intervals until the end of the representable calendar, where it
/// ends silently. A non-recurring interval yields at most one window.
///
/// # Examples
///
/// ```
/// use recur_core::math::interval::Interval;
/// use recur_core::types::{Instant, Unit};
/// use recur_models::recurrence::TimeInterval;
///
/// let ti = TimeInterval::new(Interval::new(15, 45), Unit::Minute, Some(Unit::Hour)).unwrap();
/// let start = Instant::from_ymd_hms(2000, 1, 1, 0, 20, 0).unwrap();
///
/// let (first_start, first_end) = ti.forward(start).next().unwrap().into();
/// assert_eq!(first_start, start);
/// assert_eq!(first_end, Instant::from_ymd_hms(2000, 1, 1, 0, 46, 0).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Windows {
    time_interval: TimeInterval,
    start: Instant,
    state: State,
}

impl Windows {
    pub(crate) fn new(time_interval: TimeInterval, start: Instant) -> Self {
        Self {
            time_interval,
            start,
            state: State::Initial,
        }
    }

    /// Returns the time interval generating the windows.
    #[inline]
    pub fn time_interval(&self) -> &TimeInterval {
        &self.time_interval
    }

    fn finish(&mut self, err: Option<&CalendarError>) {
        match err {
            Some(err) => debug!(
                time_interval = %self.time_interval,
                error = %err,
                "window sequence reached the end of the calendar"
            ),
            None => debug!(
                time_interval = %self.time_interval,
                "time interval can never produce a window"
            ),
        }
        self.state = State::Finished;
    }

    /// Computes the window of the period beginning at `base`, clamped to that period.
    fn window_in_period(&self, base: Instant) -> Result<Option<Window>, CalendarError> {
        let Some((lo, hi)) = self.time_interval.interval().bounds() else {
            return Ok(None);
        };
        let unit = self.time_interval.unit();
        let correction = -unit.base();

        // Weeks do not align with months or years; slots count from the week holding `base`.
        let anchor = floor(base, unit);
        // Slots before the anchor start no later than `base`.
        let first = add_delta(anchor, lo.saturating_add(correction).max(0), unit)?;
        let second = add_delta(anchor, hi.saturating_add(correction).saturating_add(1), unit);

        // The final period of the calendar has no representable end to clamp to.
        let next = self
            .time_interval
            .recurrence()
            .and_then(|recurrence| add_delta(base, 1, recurrence).ok());

        let start = first.max(base);
        let end = match (second, next) {
            (Ok(second), Some(next)) => second.min(next),
            (Ok(second), None) => second,
            // Slots past the end of the calendar are clipped to the period.
            (Err(_), Some(next)) => next,
            (Err(err), None) => return Err(err),
        };

        Ok((start < end).then(|| Window::new(start, end)))
    }

    fn first_window(&mut self) -> Option<Window> {
        if !self.time_interval.can_produce_window() {
            self.finish(None);
            return None;
        }

        let (base, state) = match self.time_interval.recurrence() {
            Some(recurrence) => {
                let base = floor(self.start, recurrence);
                (base, State::Period(base))
            }
            None => (Instant::epoch(), State::Finished),
        };
        self.state = state;

        match self.window_in_period(base) {
            Ok(Some(window)) if window.end() <= self.start => None,
            Ok(Some(window)) if window.start() < self.start => {
                Some(Window::new(self.start, window.end()))
            }
            Ok(window) => window,
            Err(err) => {
                self.finish(Some(&err));
                None
            }
        }
    }
}

impl Iterator for Windows {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        loop {
            match self.state {
                State::Finished => return None,
                State::Initial => {
                    if let Some(window) = self.first_window() {
                        return Some(window);
                    }
                }
                State::Period(base) => {
                    let Some(recurrence) = self.time_interval.recurrence() else {
                        self.state = State::Finished;
                        return None;
                    };
                    let next_base = match add_delta(base, 1, recurrence) {
                        Ok(next_base) => next_base,
                        Err(err) => {
                            self.finish(Some(&err));
                            return None;
                        }
                    };
                    self.state = State::Period(next_base);

                    match self.window_in_period(next_base) {
                        Ok(Some(window)) => return Some(window),
                        Ok(None) => {}
                        Err(err) => {
                            self.finish(Some(&err));
                            return None;
                        }
                    }
                }
            }
        }
    }
}

impl FusedIterator for Windows {}
