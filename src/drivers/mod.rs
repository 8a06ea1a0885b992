//! Actuator drivers and hardware initialisation.

pub mod charge_output;
pub mod charge_pump;
pub mod hw_init;
