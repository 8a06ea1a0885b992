//! Port trait — the boundary between the control core and the hardware.
//!
//! ```text
//!   Control core ──▶ AnalogPort ──▶ adapter (LEDC/ADC registers or mock)
//! ```
//!
//! Every component method that touches a pin takes `&mut impl AnalogPort`,
//! so the core never calls a register directly.  The ESP-IDF adapter in
//! [`crate::adapters::hardware`] implements this over real peripherals;
//! tests implement it with an in-memory recorder.
//!
//! All port operations are bounded, immediate register accesses — nothing
//! here blocks, retries, or yields.  The core is single-threaded by
//! contract; implementations perform no internal locking.

/// Identifies one PWM-capable output channel.
///
/// The index is the adapter's channel number (LEDC channel on ESP32).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PwmChannel(u8);

impl PwmChannel {
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    pub const fn index(self) -> u8 {
        self.0
    }
}

/// Identifies one ADC input channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdcChannel(u8);

impl AdcChannel {
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    pub const fn index(self) -> u8 {
        self.0
    }
}

/// Maximum raw code the 10-bit sampler returns.
pub const ADC_MAX: u16 = 1023;

/// Full-on 8-bit duty code.
pub const DUTY_MAX: u8 = 255;

/// Narrow hardware capability consumed by every component in the core.
pub trait AnalogPort {
    /// Put `channel`'s pin into output mode.  Called once per channel,
    /// at component construction.
    fn configure_output(&mut self, channel: PwmChannel);

    /// Assert an 8-bit duty code (0–255) on `channel`.
    fn write_duty(&mut self, channel: PwmChannel, duty: u8);

    /// Sample `channel`, returning a raw code in 0–[`ADC_MAX`].
    fn read_raw(&mut self, channel: AdcChannel) -> u16;
}
