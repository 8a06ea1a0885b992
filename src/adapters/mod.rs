//! Adapters between the port traits and the outside world.

pub mod hardware;

pub use hardware::HardwareAdapter;
