//! Unified error types for the charge controller core.
//!
//! The taxonomy is deliberately narrow: only construction-time configuration
//! problems are meaningful.  Runtime operations (sampling, duty writes, state
//! transitions) are total — every channel identifier is fixed at construction
//! and hardware I/O is assumed to succeed.  All variants are `Copy` so they
//! can be passed around without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the core funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A sensor calibration is physically meaningless.
    Calibration(CalibrationError),
    /// Peripheral initialisation failed.
    Init(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Calibration(e) => write!(f, "calibration: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Calibration errors
// ---------------------------------------------------------------------------

/// Rejected divider calibrations.  Constructing a sensor with any of these
/// would silently produce garbage ratios, so construction fails fast instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationError {
    /// Full-scale reference voltage is zero or negative.
    NonPositiveFullScale,
    /// High-side divider resistance is zero or negative.
    NonPositiveHighSide,
    /// Low-side divider resistance is zero or negative.
    NonPositiveLowSide,
    /// Pin-limit voltage is zero or negative.
    NonPositivePinLimit,
}

impl fmt::Display for CalibrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveFullScale => write!(f, "full-scale voltage must be positive"),
            Self::NonPositiveHighSide => write!(f, "high-side resistance must be positive"),
            Self::NonPositiveLowSide => write!(f, "low-side resistance must be positive"),
            Self::NonPositivePinLimit => write!(f, "pin-limit voltage must be positive"),
        }
    }
}

impl From<CalibrationError> for Error {
    fn from(e: CalibrationError) -> Self {
        Self::Calibration(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Core-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
