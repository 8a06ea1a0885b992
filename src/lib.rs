//! ChargeCtl firmware library.
//!
//! Analog control core of a PWM battery charge controller: a complementary
//! charge-pump PWM pair, divider-scaled voltage sensing, and the charge
//! output sequencer.  All hardware access goes through the [`ports`]
//! capability trait, so the whole core runs and tests on the host;
//! ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! within each module.

#![deny(unused_must_use)]

pub mod adapters;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod ports;
pub mod sensors;
