//! Charge sequencer behaviour against the recorded port history.

use chargectl::drivers::charge_output::{
    ChargeSequencer, ChargeState, DUTY_HARD_ON, DUTY_OFF, DUTY_TRICKLE,
};
use chargectl::pins::CHARGE_OUT;

use crate::mock_hw::MockHal;

fn make() -> (ChargeSequencer, MockHal) {
    let mut hal = MockHal::new();
    let seq = ChargeSequencer::new(CHARGE_OUT, &mut hal);
    (seq, hal)
}

#[test]
fn construction_configures_and_forces_off() {
    let (seq, hal) = make();
    assert!(hal.configured(CHARGE_OUT));
    assert_eq!(hal.last_duty(CHARGE_OUT), Some(DUTY_OFF));
    assert!(seq.is_off());
}

#[test]
fn duty_codes_track_the_requested_mode() {
    let (mut seq, mut hal) = make();

    seq.charge_hard_on(&mut hal);
    assert_eq!(hal.last_duty(CHARGE_OUT), Some(DUTY_HARD_ON));

    seq.charge_trickle(&mut hal, 0.65);
    assert_eq!(hal.last_duty(CHARGE_OUT), Some(DUTY_TRICKLE));
    assert_eq!(seq.voltage_gap(), Some(0.65));

    seq.charge_off(&mut hal);
    assert_eq!(hal.last_duty(CHARGE_OUT), Some(DUTY_OFF));
}

#[test]
fn suspend_cycle_leaves_exact_duty_trace() {
    let (mut seq, mut hal) = make();

    seq.charge_trickle(&mut hal, 0.2);
    seq.suspend(&mut hal);
    seq.unsuspend(&mut hal);

    // Construction off, trickle, forced off, restored trickle.
    assert_eq!(
        hal.duty_history(CHARGE_OUT),
        vec![DUTY_OFF, DUTY_TRICKLE, DUTY_OFF, DUTY_TRICKLE]
    );
    assert_eq!(seq.state(), ChargeState::Trickle { voltage_gap_v: 0.2 });
}

#[test]
fn nested_suspend_restores_the_latest_snapshot() {
    let (mut seq, mut hal) = make();

    seq.charge_trickle(&mut hal, 1.0);
    seq.suspend(&mut hal);
    seq.charge_hard_on(&mut hal);
    seq.suspend(&mut hal);
    seq.unsuspend(&mut hal);

    assert_eq!(seq.state(), ChargeState::HardOn);
    assert_eq!(hal.last_duty(CHARGE_OUT), Some(DUTY_HARD_ON));
}

#[test]
fn unsuspend_with_empty_slot_writes_nothing() {
    let (mut seq, mut hal) = make();
    seq.charge_hard_on(&mut hal);

    let history = hal.duty_history(CHARGE_OUT);
    seq.unsuspend(&mut hal);
    assert_eq!(hal.duty_history(CHARGE_OUT), history);
    assert!(seq.is_hard_on());
}

#[test]
fn every_operation_pair_lands_on_the_second_request() {
    type Op = (&'static str, fn(&mut ChargeSequencer, &mut MockHal));
    let ops: [Op; 3] = [
        ("off", |s, h| s.charge_off(h)),
        ("trickle", |s, h| s.charge_trickle(h, 0.5)),
        ("hard_on", |s, h| s.charge_hard_on(h)),
    ];
    let expected = [DUTY_OFF, DUTY_TRICKLE, DUTY_HARD_ON];

    for (name1, op1) in ops {
        for ((name2, op2), duty) in ops.into_iter().zip(expected) {
            let (mut seq, mut hal) = make();
            op1(&mut seq, &mut hal);
            op2(&mut seq, &mut hal);
            assert_eq!(
                hal.last_duty(CHARGE_OUT),
                Some(duty),
                "{name1} then {name2}"
            );
        }
    }
}
