//! ChargeCtl firmware — main entry point.
//!
//! Composition root: builds the hardware adapter, the two voltage senses,
//! the charge-pump pair, and the charge sequencer, then runs a cooperative
//! polling loop that requests sequencer states from simple thresholds.
//! The loop is the only place the three core components meet — none of
//! them depends on another.

#![deny(unused_must_use)]

use std::thread;
use std::time::Duration;

use anyhow::Result;
use log::{info, warn};

use chargectl::adapters::HardwareAdapter;
use chargectl::config::ChargeConfig;
use chargectl::drivers::charge_output::ChargeSequencer;
use chargectl::drivers::charge_pump::ChargePumpPwm;
use chargectl::drivers::hw_init;
use chargectl::error::Error;
use chargectl::pins::{self, PumpTimerPair};
use chargectl::ports::AnalogPort;
use chargectl::sensors::VoltageSensor;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("ChargeCtl v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Peripherals ────────────────────────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    let config = ChargeConfig::default();
    let mut hal = HardwareAdapter::new();

    // ── 3. Core components ────────────────────────────────────
    let mut battery =
        VoltageSensor::new(pins::BATTERY_SENSE, &config.battery_divider).map_err(Error::from)?;
    let mut panel =
        VoltageSensor::new(pins::PANEL_SENSE, &config.panel_divider).map_err(Error::from)?;
    if battery.overvoltage_risk() || panel.overvoltage_risk() {
        warn!("a sense divider can exceed its pin limit — check the board fit");
    }

    let mut pump = ChargePumpPwm::new(PumpTimerPair::inverting_timer(), &mut hal);
    let mut charger = ChargeSequencer::new(pins::CHARGE_OUT, &mut hal);

    // The gate drive needs the pump rail before the charge output can
    // conduct, so the pump comes up first and stays up while a source is
    // present.
    pump.enable(&mut hal);

    // ── 4. Control loop ───────────────────────────────────────
    let interval = Duration::from_millis(u64::from(config.control_loop_interval_ms));
    let mut source_present = true;

    loop {
        let v_bat = battery.source_voltage(&mut hal);
        let v_panel = panel.source_voltage(&mut hal);

        // A panel below battery voltage cannot charge; park everything and
        // remember the charge mode until the source returns.
        let have_source = v_panel > v_bat;
        if have_source != source_present {
            if have_source {
                info!("source back ({:.2} V) — resuming", v_panel);
                pump.enable(&mut hal);
                charger.unsuspend(&mut hal);
            } else {
                info!("source lost ({:.2} V) — suspending", v_panel);
                charger.suspend(&mut hal);
                pump.disable(&mut hal);
            }
            source_present = have_source;
        }

        if source_present {
            drive_charge_mode(&mut charger, &mut hal, &config, v_bat);
        }

        thread::sleep(interval);
    }
}

/// Threshold ladder: full → off, inside the trickle band → trickle with the
/// remaining gap, below the band → hard on.
fn drive_charge_mode(
    charger: &mut ChargeSequencer,
    hal: &mut impl AnalogPort,
    config: &ChargeConfig,
    v_bat: f32,
) {
    if v_bat >= config.battery_full_v {
        charger.charge_off(hal);
    } else if v_bat >= config.battery_full_v - config.trickle_band_v {
        charger.charge_trickle(hal, config.battery_full_v - v_bat);
    } else {
        charger.charge_hard_on(hal);
    }
}
