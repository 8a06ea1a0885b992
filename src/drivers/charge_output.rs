//! Charge output sequencer.
//!
//! Maps a requested charge mode onto the single main charge output:
//!
//! ```text
//!   Off ──▶ duty 0        (0 %)
//!   Trickle ──▶ duty 127  (50 %)
//!   HardOn ──▶ duty 255   (100 %)
//! ```
//!
//! Every transition is direct and total — no intermediate states, no
//! timers, no failure path.  A single-depth suspend slot remembers the
//! state in force when [`suspend`](ChargeSequencer::suspend) was called so
//! [`unsuspend`](ChargeSequencer::unsuspend) can restore it; a nested
//! suspend overwrites the slot (lossy, by contract).

use log::{info, warn};

use crate::ports::{AnalogPort, DUTY_MAX, PwmChannel};

/// Duty code for [`ChargeState::Off`].
pub const DUTY_OFF: u8 = 0;
/// Duty code for [`ChargeState::Trickle`] — 50 %.
pub const DUTY_TRICKLE: u8 = 127;
/// Duty code for [`ChargeState::HardOn`].
pub const DUTY_HARD_ON: u8 = DUTY_MAX;

/// The three charge modes.  The output's physical signal is fully
/// determined by the current variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChargeState {
    Off,
    /// Low-rate charging at 50 % duty.  The voltage gap (volts remaining
    /// to the full threshold) is stored as supplied — informational only,
    /// it does not shape the waveform.
    Trickle { voltage_gap_v: f32 },
    HardOn,
}

impl ChargeState {
    const fn duty(self) -> u8 {
        match self {
            Self::Off => DUTY_OFF,
            Self::Trickle { .. } => DUTY_TRICKLE,
            Self::HardOn => DUTY_HARD_ON,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Trickle { .. } => "trickle",
            Self::HardOn => "hard-on",
        }
    }
}

pub struct ChargeSequencer {
    channel: PwmChannel,
    state: ChargeState,
    /// Holds a meaningful value only between `suspend` and its matching
    /// `unsuspend`.  Single depth: a second `suspend` overwrites it.
    suspended: Option<ChargeState>,
}

impl ChargeSequencer {
    /// Bind the output channel and force it off.
    pub fn new(channel: PwmChannel, hal: &mut impl AnalogPort) -> Self {
        hal.configure_output(channel);
        hal.write_duty(channel, DUTY_OFF);
        info!("charge output on ch{}: off", channel.index());
        Self {
            channel,
            state: ChargeState::Off,
            suspended: None,
        }
    }

    fn apply(&mut self, hal: &mut impl AnalogPort, next: ChargeState) {
        hal.write_duty(self.channel, next.duty());
        if next != self.state {
            info!("charge output: {} -> {}", self.state.name(), next.name());
        }
        self.state = next;
    }

    /// Stop charging: 0 % duty.
    pub fn charge_off(&mut self, hal: &mut impl AnalogPort) {
        self.apply(hal, ChargeState::Off);
    }

    /// Full-rate charging: 100 % duty equivalent.
    pub fn charge_hard_on(&mut self, hal: &mut impl AnalogPort) {
        self.apply(hal, ChargeState::HardOn);
    }

    /// Low-rate charging: 50 % duty.  `voltage_gap_v` is stored unaltered.
    pub fn charge_trickle(&mut self, hal: &mut impl AnalogPort, voltage_gap_v: f32) {
        self.apply(hal, ChargeState::Trickle { voltage_gap_v });
    }

    /// Remember the current state and force the output off.
    ///
    /// The slot is single-depth — suspending while already suspended saves
    /// the current (off) state and the earlier snapshot is lost.
    pub fn suspend(&mut self, hal: &mut impl AnalogPort) {
        self.suspended = Some(self.state);
        info!("charge output suspended (was {})", self.state.name());
        self.apply(hal, ChargeState::Off);
    }

    /// Restore the state saved by the last [`suspend`](Self::suspend).
    ///
    /// With an empty slot (never suspended, or already resumed) this is a
    /// logged no-op.  An explicit transition between suspend and unsuspend
    /// does not clear the slot, so resuming after one restores the state
    /// saved at suspend time, not the later request.
    pub fn unsuspend(&mut self, hal: &mut impl AnalogPort) {
        match self.suspended.take() {
            Some(saved) => self.apply(hal, saved),
            None => warn!("unsuspend with no prior suspend — ignored"),
        }
    }

    pub fn is_off(&self) -> bool {
        matches!(self.state, ChargeState::Off)
    }

    pub fn is_trickle(&self) -> bool {
        matches!(self.state, ChargeState::Trickle { .. })
    }

    pub fn is_hard_on(&self) -> bool {
        matches!(self.state, ChargeState::HardOn)
    }

    pub fn state(&self) -> ChargeState {
        self.state
    }

    /// The voltage gap supplied on the last entry into trickle, while in
    /// trickle.
    pub fn voltage_gap(&self) -> Option<f32> {
        match self.state {
            ChargeState::Trickle { voltage_gap_v } => Some(voltage_gap_v),
            _ => None,
        }
    }
}
