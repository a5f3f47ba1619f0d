use crate::core::errors::HydrologError;
use crate::core::units::{VolumeUnit, to_display, to_storage};

#[test]
fn test_liters_round_trip_exact_for_two_liters() {
    assert_eq!(to_display(2000, VolumeUnit::Liters), 2.0);
    assert_eq!(to_storage(2.0, VolumeUnit::Liters), 2000);
}

#[test]
fn test_milliliters_are_identity() {
    for amount in [1, 250, 500, 1750, 100_000] {
        let shown = to_display(amount, VolumeUnit::Milliliters);
        assert_eq!(shown, amount as f64);
        assert_eq!(to_storage(shown, VolumeUnit::Milliliters), amount);
    }
}

#[test]
fn test_display_rounds_to_one_decimal() {
    assert_eq!(to_display(500, VolumeUnit::Cups), 2.1);
    assert_eq!(to_display(250, VolumeUnit::FluidOunces), 8.5);
    assert_eq!(to_display(1750, VolumeUnit::Liters), 1.8);
}

#[test]
fn test_storage_truncates_milliliters_and_liters() {
    assert_eq!(to_storage(2.7, VolumeUnit::Milliliters), 2);
    assert_eq!(to_storage(1.2345, VolumeUnit::Liters), 1234);
}

#[test]
fn test_round_trip_within_rounding_error() {
    // (stored ml, unit, displayed, back in storage)
    let cases = [
        (250, VolumeUnit::Cups, 1.1, 260),
        (500, VolumeUnit::Cups, 2.1, 497),
        (2000, VolumeUnit::Cups, 8.5, 2011),
        (250, VolumeUnit::FluidOunces, 8.5, 251),
        (500, VolumeUnit::FluidOunces, 16.9, 500),
        (2000, VolumeUnit::FluidOunces, 67.6, 1999),
        (1750, VolumeUnit::Liters, 1.8, 1800),
        (2000, VolumeUnit::Liters, 2.0, 2000),
    ];
    for (stored, unit, displayed, back) in cases {
        assert_eq!(to_display(stored, unit), displayed, "display of {} {}", stored, unit);
        assert_eq!(to_storage(displayed, unit), back, "storage of {} {}", displayed, unit);
        // One displayed decimal place bounds the error by half a display unit
        let tolerance = to_storage(0.1, unit).max(1) / 2 + 1;
        assert!(
            (back - stored).abs() <= tolerance,
            "round trip drifted {} ml for {} {}",
            (back - stored).abs(),
            stored,
            unit
        );
    }
}

#[test]
fn test_unit_parsing_is_exhaustive() {
    assert_eq!("ml".parse::<VolumeUnit>().unwrap(), VolumeUnit::Milliliters);
    assert_eq!("L".parse::<VolumeUnit>().unwrap(), VolumeUnit::Liters);
    assert_eq!("cups".parse::<VolumeUnit>().unwrap(), VolumeUnit::Cups);
    assert_eq!("oz".parse::<VolumeUnit>().unwrap(), VolumeUnit::FluidOunces);
    assert!(matches!(
        "gallons".parse::<VolumeUnit>(),
        Err(HydrologError::UnknownUnit(_))
    ));
}

#[test]
fn test_unit_serde_rejects_unknown_values() {
    assert_eq!(
        serde_json::from_str::<VolumeUnit>("\"oz\"").unwrap(),
        VolumeUnit::FluidOunces
    );
    assert!(serde_json::from_str::<VolumeUnit>("\"liters\"").is_err());
}

#[test]
fn test_unit_display_matches_wire_names() {
    assert_eq!(VolumeUnit::Milliliters.to_string(), "ml");
    assert_eq!(VolumeUnit::Liters.to_string(), "L");
    assert_eq!(VolumeUnit::Cups.to_string(), "cups");
    assert_eq!(VolumeUnit::FluidOunces.to_string(), "oz");
}
