//! Complementary charge-pump PWM driver.
//!
//! Drives the two compare outputs of one shared inverting PWM timer with a
//! phase-offset duty pair so the asserted regions never overlap.  The pump
//! capacitor needs that non-overlap — both switches conducting at once would
//! short the rail instead of pumping charge.
//!
//! Channel B runs in inverted polarity: its duty code counts *de-asserted*
//! time, so code 255 is a constant logic-low output.

use log::{debug, info};

use crate::pins::PumpTimerPair;
use crate::ports::{AnalogPort, DUTY_MAX};

/// Enabled duty for OUT A — just under 50 % asserted.
pub const DUTY_A_ON: u8 = 117;
/// Enabled duty for OUT B — just over 50 %, inverted polarity.
pub const DUTY_B_ON: u8 = 137;
/// Disabled duty for OUT A (logic low).
pub const DUTY_A_OFF: u8 = 0;
/// Disabled duty for OUT B (logic low — inverting).
pub const DUTY_B_OFF: u8 = DUTY_MAX;

pub struct ChargePumpPwm {
    pair: PumpTimerPair,
    enabled: bool,
}

impl ChargePumpPwm {
    /// Bind the fixed timer pair and drive both outputs to their disabled
    /// (logic-low) codes.  The timer's inverting mode and carrier frequency
    /// are hardware-init concerns; this driver only asserts duty codes.
    pub fn new(pair: PumpTimerPair, hal: &mut impl AnalogPort) -> Self {
        hal.configure_output(pair.out_a());
        hal.configure_output(pair.out_b());
        hal.write_duty(pair.out_a(), DUTY_A_OFF);
        hal.write_duty(pair.out_b(), DUTY_B_OFF);

        info!(
            "charge pump PWM pair bound: OUT A ch{}, OUT B ch{}",
            pair.out_a().index(),
            pair.out_b().index(),
        );

        Self {
            pair,
            enabled: false,
        }
    }

    /// Start the complementary drive.  Idempotent.
    pub fn enable(&mut self, hal: &mut impl AnalogPort) {
        hal.write_duty(self.pair.out_a(), DUTY_A_ON);
        hal.write_duty(self.pair.out_b(), DUTY_B_ON);
        if !self.enabled {
            info!("charge pump PWM on");
        }
        self.enabled = true;
    }

    /// Stop the drive — both outputs logic low.  Idempotent.
    pub fn disable(&mut self, hal: &mut impl AnalogPort) {
        hal.write_duty(self.pair.out_a(), DUTY_A_OFF);
        hal.write_duty(self.pair.out_b(), DUTY_B_OFF);
        if self.enabled {
            info!("charge pump PWM off");
        } else {
            debug!("charge pump PWM already off");
        }
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
