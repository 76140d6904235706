// Boundary policies of the three control variable flavours.

use flight_core::{wrap_into, ControlVariable, Cvar, CvarError, CvarLin, CvarLinWrap, CvarLog};

#[test]
fn lin_increment_then_decrement_returns_to_start() {
    let mut c = CvarLin::new(0.0, 100.0, 50.0, 10.0, "Percent").unwrap();
    c.increment();
    assert_eq!(c.value(), 60.0);
    c.decrement();
    assert_eq!(c.value(), 50.0);
}

#[test]
fn lin_step_past_bound_is_a_no_op() {
    let mut c = CvarLin::new(0.0, 100.0, 95.0, 10.0, "Percent").unwrap();
    c.increment();
    assert_eq!(c.value(), 95.0, "must not clamp to the maximum");
    c.decrement();
    assert_eq!(c.value(), 85.0);

    let mut low = CvarLin::new(0.0, 100.0, 5.0, 10.0, "Percent").unwrap();
    low.decrement();
    assert_eq!(low.value(), 5.0);
}

#[test]
fn lin_step_landing_on_bound_is_allowed() {
    let mut c = CvarLin::new(0.0, 100.0, 90.0, 10.0, "Percent").unwrap();
    c.increment();
    assert_eq!(c.value(), 100.0);
    c.increment();
    assert_eq!(c.value(), 100.0);
}

#[test]
fn lin_set_value_rejects_out_of_range() {
    let mut c = CvarLin::new(-90.0, 90.0, 0.0, 1.0, "Latitude").unwrap();
    assert!(matches!(
        c.set_value(90.5),
        Err(CvarError::OutOfRange { .. })
    ));
    assert!(c.set_value(-91.0).is_err());
    assert!(c.set_value(f64::NAN).is_err());
    assert_eq!(c.value(), 0.0);

    c.set_value(90.0).unwrap();
    assert_eq!(c.value(), 90.0);
    c.set_value(-12.5).unwrap();
    assert_eq!(c.value(), -12.5);
}

#[test]
fn lin_construction_validates() {
    assert!(matches!(
        CvarLin::new(0.0, 10.0, 5.0, 0.0, "Bad"),
        Err(CvarError::NonPositiveStep { .. })
    ));
    assert!(matches!(
        CvarLin::new(0.0, 10.0, 5.0, -1.0, "Bad"),
        Err(CvarError::NonPositiveStep { .. })
    ));
    assert!(matches!(
        CvarLin::new(10.0, 0.0, 5.0, 1.0, "Bad"),
        Err(CvarError::InvalidBounds { .. })
    ));
    assert!(matches!(
        CvarLin::new(0.0, 10.0, 11.0, 1.0, "Bad"),
        Err(CvarError::InitialOutOfRange { .. })
    ));
    // equal bounds are a valid (if fixed) linear variable
    assert!(CvarLin::new(3.0, 3.0, 3.0, 1.0, "Fixed").is_ok());
}

#[test]
fn wrap_decrement_below_min_wraps_to_top() {
    let mut heading = CvarLinWrap::new(0.0, 360.0, 0.0, 5.0, "Heading").unwrap();
    heading.decrement();
    assert_eq!(heading.value(), 355.0);
    heading.increment();
    assert_eq!(heading.value(), 0.0);
}

#[test]
fn wrap_upper_bound_maps_to_lower_bound() {
    let mut heading = CvarLinWrap::new(0.0, 360.0, 355.0, 5.0, "Heading").unwrap();
    heading.increment();
    assert_eq!(heading.value(), 0.0);
    heading.set_value(360.0).unwrap();
    assert_eq!(heading.value(), 0.0);
}

#[test]
fn wrap_initial_value_is_normalised() {
    let lon = CvarLinWrap::new(-180.0, 180.0, 190.0, 1.0, "Longitude").unwrap();
    assert_eq!(lon.value(), -170.0);
    let lon = CvarLinWrap::new(-180.0, 180.0, 180.0, 1.0, "Longitude").unwrap();
    assert_eq!(lon.value(), -180.0);
}

#[test]
fn wrap_set_value_is_congruent_and_in_range() {
    let mut c = CvarLinWrap::new(-180.0, 180.0, 0.0, 1.0, "Longitude").unwrap();
    for v in [-725.0, -180.0, -0.25, 0.0, 179.999, 180.0, 540.0, 1.0e6, -3.3e7] {
        c.set_value(v).unwrap();
        let got = c.value();
        assert!((-180.0..180.0).contains(&got), "{v} -> {got}");
        let turns = (v - got) / 360.0;
        assert!((turns - turns.round()).abs() < 1e-9, "{v} -> {got}");
    }
}

#[test]
fn wrap_rejects_non_finite_and_keeps_value() {
    let mut c = CvarLinWrap::new(0.0, 360.0, 10.0, 5.0, "Heading").unwrap();
    assert!(matches!(
        c.set_value(f64::NAN),
        Err(CvarError::NonFinite { .. })
    ));
    assert!(c.set_value(f64::INFINITY).is_err());
    assert_eq!(c.value(), 10.0);
}

#[test]
fn wrap_construction_validates() {
    assert!(matches!(
        CvarLinWrap::new(0.0, 0.0, 0.0, 1.0, "Bad"),
        Err(CvarError::EmptyWrapRange { .. })
    ));
    assert!(matches!(
        CvarLinWrap::new(360.0, 0.0, 0.0, 1.0, "Bad"),
        Err(CvarError::EmptyWrapRange { .. })
    ));
    assert!(matches!(
        CvarLinWrap::new(0.0, 360.0, 0.0, 0.0, "Bad"),
        Err(CvarError::NonPositiveStep { .. })
    ));
}

#[test]
fn wrap_into_handles_exact_multiples() {
    assert_eq!(wrap_into(-360.0, 0.0, 360.0), 0.0);
    assert_eq!(wrap_into(720.0, 0.0, 360.0), 0.0);
    assert_eq!(wrap_into(-5.0, 0.0, 360.0), 355.0);
    let tiny = wrap_into(-1e-20, 0.0, 360.0);
    assert!((0.0..360.0).contains(&tiny));
}

#[test]
fn log_increments_double_until_max() {
    let mut height = CvarLog::new(1000.0, 40_000_000.0, 200_000.0, 2.0, "Height").unwrap();
    for _ in 0..6 {
        height.increment();
    }
    assert_eq!(height.value(), 12_800_000.0);
    height.increment();
    assert_eq!(height.value(), 25_600_000.0);
    height.increment();
    assert_eq!(height.value(), 25_600_000.0, "51.2e6 exceeds max");
}

#[test]
fn log_decrements_halve_until_min() {
    let mut height = CvarLog::new(1000.0, 40_000_000.0, 200_000.0, 2.0, "Height").unwrap();
    for _ in 0..7 {
        height.decrement();
    }
    assert_eq!(height.value(), 1562.5);
    height.decrement();
    assert_eq!(height.value(), 1562.5);
}

#[test]
fn log_set_value_and_validation() {
    let mut height = CvarLog::new(1000.0, 40_000_000.0, 200_000.0, 2.0, "Height").unwrap();
    assert!(height.set_value(999.0).is_err());
    assert!(height.set_value(40_000_001.0).is_err());
    height.set_value(1000.0).unwrap();
    assert_eq!(height.value(), 1000.0);

    assert!(matches!(
        CvarLog::new(1000.0, 2000.0, 1500.0, 1.0, "Bad"),
        Err(CvarError::FactorTooSmall { .. })
    ));
    assert!(matches!(
        CvarLog::new(1000.0, 2000.0, 1500.0, 0.5, "Bad"),
        Err(CvarError::FactorTooSmall { .. })
    ));
    assert!(matches!(
        CvarLog::new(1000.0, 2000.0, 500.0, 2.0, "Bad"),
        Err(CvarError::InitialOutOfRange { .. })
    ));
}

#[test]
fn cvar_enum_delegates_to_variant() {
    let mut c: Cvar = CvarLinWrap::new(0.0, 360.0, 0.0, 5.0, "Heading").unwrap().into();
    assert_eq!(c.name(), "Heading");
    c.decrement();
    assert_eq!(c.value(), 355.0);
    assert_eq!((c.min(), c.max()), (0.0, 360.0));
    assert!(c.check().is_ok());
}

#[test]
fn error_messages_name_the_variable() {
    let mut c = CvarLin::new(0.0, 100.0, 50.0, 10.0, "Percent").unwrap();
    let err = c.set_value(150.0).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Percent"), "{msg}");
    assert!(msg.contains("out of bounds"), "{msg}");
}
