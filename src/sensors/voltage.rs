//! Divider-scaled voltage sensor.
//!
//! Converts raw 10-bit ADC codes into two calibrated voltages through a
//! two-resistor divider model:
//!
//! ```text
//!   source ──[ high side ]──┬──[ low side ]── GND
//!                           │
//!                        ADC pin
//! ```
//!
//! The conversion ratios are computed once at construction and divisions go
//! through the stored ratios, not a per-sample recomputation — the values
//! stay on the originally calibrated scale.
//!
//! A structural overvoltage risk flag is also fixed at construction: it is
//! set when the calibrated full-scale divider-node voltage exceeds the
//! caller-supplied pin-limit voltage, i.e. the divider can present more
//! volts at the pin than the pin tolerates.  The core only reports the
//! flag; acting on it is the outer controller's decision.

use log::{debug, info, warn};

use crate::config::DividerConfig;
use crate::error::CalibrationError;
use crate::ports::{ADC_MAX, AdcChannel, AnalogPort};

/// One consistent set of derived quantities from a single raw sample.
#[derive(Debug, Clone, Copy)]
pub struct VoltageReading {
    /// Raw sampler code, 0–1023.
    pub raw: u16,
    /// Voltage at the divider node (across the low-side resistor).
    pub divider_v: f32,
    /// Reconstructed source-side voltage.
    pub source_v: f32,
}

#[derive(Debug)]
pub struct VoltageSensor {
    channel: AdcChannel,
    divider_fraction: f32,
    low_range_ratio: f32,
    full_range_ratio: f32,
    overvoltage_risk: bool,
    last: VoltageReading,
}

impl VoltageSensor {
    /// Build a sensor from a divider calibration.
    ///
    /// Fails fast on a physically meaningless calibration (zero or negative
    /// resistance, non-positive full-scale or pin-limit voltage) instead of
    /// carrying NaN/garbage ratios into every later sample.
    pub fn new(channel: AdcChannel, cal: &DividerConfig) -> Result<Self, CalibrationError> {
        if cal.full_scale_v <= 0.0 {
            return Err(CalibrationError::NonPositiveFullScale);
        }
        if cal.high_side_ohms <= 0.0 {
            return Err(CalibrationError::NonPositiveHighSide);
        }
        if cal.low_side_ohms <= 0.0 {
            return Err(CalibrationError::NonPositiveLowSide);
        }
        if cal.pin_limit_v <= 0.0 {
            return Err(CalibrationError::NonPositivePinLimit);
        }

        let divider_fraction = cal.low_side_ohms / (cal.low_side_ohms + cal.high_side_ohms);
        let low_range_ratio = f32::from(ADC_MAX) / cal.full_scale_v;
        let full_range_ratio = f32::from(ADC_MAX) / (cal.full_scale_v / divider_fraction);

        // Fixed at construction, never recomputed.
        let overvoltage_risk = cal.full_scale_v > cal.pin_limit_v;

        info!(
            "voltage sensor on ADC ch{}: full-scale {:.2} V, divider H {:.0} Ω / L {:.0} Ω, \
             low-range ratio {:.2}, full-range ratio {:.2}",
            channel.index(),
            cal.full_scale_v,
            cal.high_side_ohms,
            cal.low_side_ohms,
            low_range_ratio,
            full_range_ratio,
        );
        if overvoltage_risk {
            warn!(
                "voltage sensor on ADC ch{}: divider can exceed the {:.1} V pin limit — \
                 overvoltage risk flag set",
                channel.index(),
                cal.pin_limit_v,
            );
        }

        Ok(Self {
            channel,
            divider_fraction,
            low_range_ratio,
            full_range_ratio,
            overvoltage_risk,
            last: VoltageReading {
                raw: 0,
                divider_v: 0.0,
                source_v: 0.0,
            },
        })
    }

    /// Take one raw sample and refresh both derived voltages.
    ///
    /// Returns the consistent triple from this single sample.  Callers that
    /// need the divider and source voltages to agree must use this return
    /// value — the individual accessors each re-sample, and two samples may
    /// differ.
    pub fn sample(&mut self, hal: &mut impl AnalogPort) -> VoltageReading {
        let raw = hal.read_raw(self.channel);
        self.last = VoltageReading {
            raw,
            divider_v: f32::from(raw) / self.low_range_ratio,
            source_v: f32::from(raw) / self.full_range_ratio,
        };
        debug!(
            "ADC ch{}: raw {} → divider {:.2} V, source {:.2} V",
            self.channel.index(),
            raw,
            self.last.divider_v,
            self.last.source_v,
        );
        self.last
    }

    /// Reconstructed source-side voltage from a fresh sample.
    pub fn source_voltage(&mut self, hal: &mut impl AnalogPort) -> f32 {
        self.sample(hal).source_v
    }

    /// Divider-node voltage from a fresh sample.
    pub fn divider_voltage(&mut self, hal: &mut impl AnalogPort) -> f32 {
        self.sample(hal).divider_v
    }

    /// Raw sampler code from a fresh sample.
    pub fn raw_value(&mut self, hal: &mut impl AnalogPort) -> u16 {
        self.sample(hal).raw
    }

    /// Construction-time overvoltage risk flag.  Never re-evaluated.
    pub fn overvoltage_risk(&self) -> bool {
        self.overvoltage_risk
    }

    /// Fraction of the source voltage that appears across the low-side
    /// resistor, strictly in (0, 1) for a valid calibration.
    pub fn divider_fraction(&self) -> f32 {
        self.divider_fraction
    }

    /// Codes per volt at the divider node.
    pub fn low_range_ratio(&self) -> f32 {
        self.low_range_ratio
    }

    /// Codes per volt on the source side.
    pub fn full_range_ratio(&self) -> f32 {
        self.full_range_ratio
    }
}
