//! Voltage sensor scaling against injected raw codes.

use chargectl::config::DividerConfig;
use chargectl::pins::BATTERY_SENSE;
use chargectl::sensors::VoltageSensor;

use crate::mock_hw::MockHal;

fn reference_cal() -> DividerConfig {
    // 30 kΩ / 7.5 kΩ divider calibrated to a 15 V full scale: fraction 0.2,
    // source range 75 V.
    DividerConfig {
        full_scale_v: 15.0,
        high_side_ohms: 30_000.0,
        low_side_ohms: 7_500.0,
        pin_limit_v: 5.0,
    }
}

#[test]
fn reference_calibration_exact_formula_output() {
    let mut hal = MockHal::new();
    hal.set_raw(BATTERY_SENSE, 500);

    let mut sensor = VoltageSensor::new(BATTERY_SENSE, &reference_cal()).unwrap();
    assert!((sensor.divider_fraction() - 0.2).abs() < 1e-6);

    let reading = sensor.sample(&mut hal);
    assert_eq!(reading.raw, 500);
    // source = raw / (1023 / 75)
    assert!((reading.source_v - 500.0 / (1023.0 / 75.0)).abs() < 1e-4);
    assert!((reading.source_v - 36.656).abs() < 0.01);
    // divider = raw / (1023 / 15)
    assert!((reading.divider_v - 500.0 / (1023.0 / 15.0)).abs() < 1e-4);
}

#[test]
fn one_sample_yields_a_consistent_pair() {
    let mut hal = MockHal::new();
    hal.set_raw(BATTERY_SENSE, 777);

    let mut sensor = VoltageSensor::new(BATTERY_SENSE, &reference_cal()).unwrap();
    let r = sensor.sample(&mut hal);
    assert!((r.divider_v / sensor.divider_fraction() - r.source_v).abs() < 1e-3);
}

#[test]
fn accessors_resample_and_may_disagree_across_calls() {
    let mut hal = MockHal::new();
    let mut sensor = VoltageSensor::new(BATTERY_SENSE, &reference_cal()).unwrap();

    hal.set_raw(BATTERY_SENSE, 500);
    let divider_v = sensor.divider_voltage(&mut hal);

    // The input moves between the two accessor calls; each takes its own
    // sample, so the pair is not consistent.
    hal.set_raw(BATTERY_SENSE, 600);
    let source_v = sensor.source_voltage(&mut hal);

    assert!((divider_v / sensor.divider_fraction() - source_v).abs() > 0.1);
}

#[test]
fn raw_value_reflects_the_current_input() {
    let mut hal = MockHal::new();
    let mut sensor = VoltageSensor::new(BATTERY_SENSE, &reference_cal()).unwrap();

    hal.set_raw(BATTERY_SENSE, 3);
    assert_eq!(sensor.raw_value(&mut hal), 3);
    hal.set_raw(BATTERY_SENSE, 1023);
    assert_eq!(sensor.raw_value(&mut hal), 1023);
}

#[test]
fn overvoltage_risk_is_fixed_at_construction() {
    let mut hal = MockHal::new();
    let mut risky = reference_cal();
    risky.full_scale_v = 6.0;
    risky.pin_limit_v = 5.0;

    let mut sensor = VoltageSensor::new(BATTERY_SENSE, &risky).unwrap();
    assert!(sensor.overvoltage_risk());

    // Sampling never re-evaluates the flag.
    hal.set_raw(BATTERY_SENSE, 0);
    let _ = sensor.sample(&mut hal);
    assert!(sensor.overvoltage_risk());
}
