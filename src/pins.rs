//! Channel / peripheral assignments for the charge controller board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding channel numbers.  Change an assignment here and it propagates
//! everywhere.

use crate::ports::{AdcChannel, PwmChannel};

// ---------------------------------------------------------------------------
// Charge pump (complementary pair, one shared inverting timer)
// ---------------------------------------------------------------------------

/// The two charge-pump outputs are the paired compare outputs of a single
/// hardware PWM timer running in inverting mode.  They are not independently
/// assignable — the pairing is a property of the silicon, so the only way to
/// obtain the channels is through this type.
#[derive(Debug, Clone, Copy)]
pub struct PumpTimerPair {
    out_a: PwmChannel,
    out_b: PwmChannel,
}

impl PumpTimerPair {
    /// The fixed pair from the board's inverting PWM timer
    /// (LEDC timer 0: channel 0 = OUT A, channel 1 = OUT B).
    pub const fn inverting_timer() -> Self {
        Self {
            out_a: PwmChannel::new(0),
            out_b: PwmChannel::new(1),
        }
    }

    pub const fn out_a(self) -> PwmChannel {
        self.out_a
    }

    pub const fn out_b(self) -> PwmChannel {
        self.out_b
    }
}

// ---------------------------------------------------------------------------
// Charge output
// ---------------------------------------------------------------------------

/// Main charge output to the battery switch (LEDC channel 2).
pub const CHARGE_OUT: PwmChannel = PwmChannel::new(2);

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// Battery terminal voltage via resistive divider (ADC1 channel 4).
pub const BATTERY_SENSE: AdcChannel = AdcChannel::new(4);

/// Panel / source voltage via resistive divider (ADC1 channel 5).
pub const PANEL_SENSE: AdcChannel = AdcChannel::new(5);

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// Timer resolution (bits).  8-bit gives 0 – 255 duty codes.
pub const PWM_RESOLUTION_BITS: u32 = 8;

/// Carrier for the charge-pump pair (≈30 kHz — the pump capacitor sees no
/// perceptible ripple at this switching rate).
pub const PUMP_PWM_FREQ_HZ: u32 = 30_000;

/// Carrier for the main charge output (1 kHz — switch-compatible).
pub const CHARGE_PWM_FREQ_HZ: u32 = 1_000;
