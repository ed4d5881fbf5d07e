//! qrsign - QR code sign firmware
//!
//! Shows a scan-me QR code (and an optional caption) on the board's
//! display, then idles. Everything the sign shows comes from the
//! `sign.toml` compiled into the image.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use qrsign_core::config::{parse_config, SignConfig};
use qrsign_display::{present, SignError, DISPLAY_MISSING_MESSAGE};

mod board;

/// Embedded configuration (compiled into firmware)
/// Edit sign.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../sign.toml");

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("qrsign firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();
    info!("Payload: {=str}", config.qr.payload.as_str());

    let pins = board::DisplayPeripherals {
        spi: p.SPI1,
        sck: p.PIN_10,
        mosi: p.PIN_11,
        cs: p.PIN_9,
        dc: p.PIN_8,
        rst: p.PIN_12,
        backlight: p.PIN_13,
    };

    // The backlight pin must outlive the idle loop or the panel goes dark
    let (mut panel, _backlight) = match board::acquire_display(pins, &config.display) {
        Some((panel, backlight)) => (Some(panel), Some(backlight)),
        None => (None, None),
    };

    match present(panel.as_mut(), &config) {
        Ok(shown) => {
            let origin = shown.placement.pixel_origin();
            info!(
                "QR version {} ({}x{} modules) at scale {}, origin ({}, {})",
                shown.version,
                shown.matrix_size,
                shown.matrix_size,
                shown.placement.scale,
                origin.x,
                origin.y
            );
        }
        Err(SignError::DisplayUnavailable) => {
            error!("{=str}", DISPLAY_MISSING_MESSAGE);
            return;
        }
        Err(e) => {
            error!("Failed to show sign: {}", e);
        }
    }

    // Nothing left to do; the executor sleeps the core between wakeups
    loop {
        Timer::after_secs(60).await;
        trace!("Idle heartbeat");
    }
}

/// Parse and validate the embedded configuration
///
/// Falls back to the built-in defaults if sign.toml cannot be used.
fn load_config() -> SignConfig {
    let config = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            warn!("sign.toml parse error: {}, using defaults", e);
            return SignConfig::new();
        }
    };

    match config.validate() {
        Ok(()) => {
            info!("Configuration loaded");
            config
        }
        Err(e) => {
            warn!("sign.toml rejected: {}, using defaults", e);
            SignConfig::new()
        }
    }
}
