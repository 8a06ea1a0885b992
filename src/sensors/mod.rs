//! Sensor subsystem — divider-scaled voltage sensing.

pub mod voltage;

pub use voltage::{VoltageReading, VoltageSensor};
