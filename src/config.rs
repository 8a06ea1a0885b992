//! System configuration parameters
//!
//! All tunable parameters for the charge controller: divider calibrations
//! for the two voltage senses, charge thresholds, and loop timing.

use serde::{Deserialize, Serialize};

/// Calibration of one resistor-divider voltage sense.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DividerConfig {
    /// Voltage at the ADC pin when the sampler reads full scale (volts).
    pub full_scale_v: f32,
    /// High-side divider resistance (ohms).
    pub high_side_ohms: f32,
    /// Low-side divider resistance (ohms).
    pub low_side_ohms: f32,
    /// Maximum voltage the ADC pin tolerates (volts).  The sensor flags an
    /// overvoltage risk at construction when `full_scale_v` exceeds this.
    pub pin_limit_v: f32,
}

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeConfig {
    // --- Voltage senses ---
    /// Battery terminal sense divider.
    pub battery_divider: DividerConfig,
    /// Panel / source sense divider.
    pub panel_divider: DividerConfig,

    // --- Charge thresholds ---
    /// Battery voltage considered full — charge output goes off above this.
    pub battery_full_v: f32,
    /// Width of the trickle band below `battery_full_v`.  Inside the band
    /// the sequencer runs at 50 % duty; below it, hard-on.
    pub trickle_band_v: f32,

    // --- Timing ---
    /// Control loop interval (milliseconds)
    pub control_loop_interval_ms: u32,
}

impl Default for ChargeConfig {
    fn default() -> Self {
        Self {
            // 12 V lead-acid battery: 20 kΩ / 10 kΩ divider puts 15 V max
            // at 5 V full scale on the pin.
            battery_divider: DividerConfig {
                full_scale_v: 5.0,
                high_side_ohms: 20_000.0,
                low_side_ohms: 10_000.0,
                pin_limit_v: 5.0,
            },
            // Panel open-circuit up to 25 V: 30 kΩ / 7.5 kΩ divider.
            panel_divider: DividerConfig {
                full_scale_v: 5.0,
                high_side_ohms: 30_000.0,
                low_side_ohms: 7_500.0,
                pin_limit_v: 5.0,
            },

            battery_full_v: 14.4,
            trickle_band_v: 0.8,

            control_loop_interval_ms: 1000, // 1 Hz
        }
    }
}
