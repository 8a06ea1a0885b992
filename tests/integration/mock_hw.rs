//! Mock hardware port for integration tests.
//!
//! Records every port call so tests can assert on the full command history
//! without touching real PWM/ADC registers.

use chargectl::ports::{AdcChannel, AnalogPort, PwmChannel};
use std::collections::HashMap;

// ── Port call record ──────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalCall {
    ConfigureOutput(PwmChannel),
    WriteDuty { channel: PwmChannel, duty: u8 },
    ReadRaw(AdcChannel),
}

// ── MockHal ───────────────────────────────────────────────────

pub struct MockHal {
    pub calls: Vec<HalCall>,
    raw: HashMap<AdcChannel, u16>,
}

#[allow(dead_code)]
impl MockHal {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            raw: HashMap::new(),
        }
    }

    /// Set the raw code the given ADC channel will return.
    pub fn set_raw(&mut self, channel: AdcChannel, raw: u16) {
        self.raw.insert(channel, raw);
    }

    /// Last duty written to `channel`, if any.
    pub fn last_duty(&self, channel: PwmChannel) -> Option<u8> {
        self.calls.iter().rev().find_map(|c| match c {
            HalCall::WriteDuty { channel: ch, duty } if *ch == channel => Some(*duty),
            _ => None,
        })
    }

    /// Every duty written to `channel`, in order.
    pub fn duty_history(&self, channel: PwmChannel) -> Vec<u8> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HalCall::WriteDuty { channel: ch, duty } if *ch == channel => Some(*duty),
                _ => None,
            })
            .collect()
    }

    pub fn configured(&self, channel: PwmChannel) -> bool {
        self.calls.contains(&HalCall::ConfigureOutput(channel))
    }
}

impl Default for MockHal {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalogPort for MockHal {
    fn configure_output(&mut self, channel: PwmChannel) {
        self.calls.push(HalCall::ConfigureOutput(channel));
    }

    fn write_duty(&mut self, channel: PwmChannel, duty: u8) {
        self.calls.push(HalCall::WriteDuty { channel, duty });
    }

    fn read_raw(&mut self, channel: AdcChannel) -> u16 {
        self.calls.push(HalCall::ReadRaw(channel));
        self.raw.get(&channel).copied().unwrap_or(0)
    }
}
