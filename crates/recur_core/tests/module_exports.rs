//! Integration tests for module exports.
//!
//! Verify that all public modules and types are accessible via absolute paths
//! and that the calendar primitives agree with each other across modules.

/// Test that interval types are accessible via absolute path.
#[test]
fn test_math_module_exports() {
    use recur_core::math::interval::Interval;
    use recur_core::math::Interval as ReexportedInterval;

    let interval: ReexportedInterval<i64> = Interval::new(1, 10);
    assert!(interval.contains(&10));
    assert_eq!(interval.overlap(&Interval::Empty), Interval::Empty);
}

/// Test that types module is accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use recur_core::types::error::CalendarError;
    use recur_core::types::time::Instant;
    use recur_core::types::unit::{Unit, ONE_BASED_UNITS};

    assert_eq!(ONE_BASED_UNITS.len(), 4);
    assert!(Unit::Day.is_one_based());

    let err = Instant::parse("garbage").unwrap_err();
    assert!(matches!(err, CalendarError::ParseError(_)));
}

/// Test re-exports at the types module level.
#[test]
fn test_types_reexports() {
    use recur_core::types::{CalendarError, Instant, Unit, ONE_BASED_UNITS};

    let _ = CalendarError::UnknownUnit("eon".to_string());
    let _ = Instant::epoch();
    let _ = Unit::Week;
    assert!(!ONE_BASED_UNITS.contains(&Unit::Minute));
}

/// The epoch anchor lies on a boundary of every unit, so deltas from it are
/// exact for every unit.
#[test]
fn test_epoch_deltas_are_exact() {
    use recur_core::calendar::{add_delta, delta, floor};
    use recur_core::types::{Instant, Unit};

    let t = Instant::from_ymd_hms(2000, 1, 1, 5, 3, 10).unwrap();
    for unit in Unit::ALL {
        let n = delta(Instant::epoch(), t, unit);
        let rebuilt = add_delta(Instant::epoch(), n, unit).unwrap();
        assert_eq!(rebuilt, floor(t, unit), "unit {}", unit);
    }
}

/// Adding past the last representable second fails instead of wrapping.
#[test]
fn test_overflow_at_range_end() {
    use recur_core::calendar::add_delta;
    use recur_core::types::{Instant, Unit};

    let last = Instant::parse("9999-12-31T23:59:59").unwrap();
    let err = add_delta(last, 1, Unit::Second).unwrap_err();
    assert!(err.is_overflow());
}
