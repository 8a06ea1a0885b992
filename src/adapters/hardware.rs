//! Hardware adapter — bridges real peripherals to the [`AnalogPort`] trait.
//!
//! This is the only module in the system that routes port calls onto
//! actual registers (via [`hw_init`]'s one-shot-configured peripherals).
//! On non-espidf targets the underlying hw_init functions are inert stubs,
//! so the adapter is host-safe.

use log::debug;

use crate::drivers::hw_init;
use crate::ports::{AdcChannel, AnalogPort, PwmChannel};

/// Concrete adapter over the LEDC/ADC peripherals configured by
/// [`hw_init::init_peripherals`].  `PwmChannel` indices map directly to
/// LEDC channel numbers, `AdcChannel` indices to ADC1 channels.
pub struct HardwareAdapter;

impl HardwareAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HardwareAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalogPort for HardwareAdapter {
    fn configure_output(&mut self, channel: PwmChannel) {
        // Pin direction and LEDC routing were established once in
        // init_peripherals(); nothing further to do per channel.
        debug!("hw: ch{} bound as PWM output", channel.index());
    }

    fn write_duty(&mut self, channel: PwmChannel, duty: u8) {
        hw_init::ledc_set(u32::from(channel.index()), duty);
    }

    fn read_raw(&mut self, channel: AdcChannel) -> u16 {
        // The hardware samples at 12 bits; the calibrated scale is 10-bit
        // (0–1023), so shift down to the range the ratios were built for.
        hw_init::adc1_read(u32::from(channel.index())) >> 2
    }
}
