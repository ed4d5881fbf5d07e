//! Board wiring
//!
//! Pin assignments are fixed per board. This matches the Waveshare
//! Pico-LCD-2 carrier (ST7789, 320x240) on a Raspberry Pi Pico:
//!
//! | Signal    | RP2040 |
//! |-----------|--------|
//! | SCK       | GPIO10 (SPI1) |
//! | MOSI      | GPIO11 (SPI1) |
//! | CS        | GPIO9  |
//! | DC        | GPIO8  |
//! | RST       | GPIO12 |
//! | Backlight | GPIO13 |

use defmt::*;
use embassy_rp::peripherals::{PIN_10, PIN_11, PIN_12, PIN_13, PIN_8, PIN_9, SPI1};
use embassy_rp::spi::Spi;
use embassy_rp::Peri;
use embassy_time::Delay;

use qrsign_core::config::DisplayHwConfig;
use qrsign_drivers::display::{St7789, St7789Config};
use qrsign_hal::gpio::ActivePin;
use qrsign_hal::spi::{Mode, SpiConfig};
use qrsign_hal_rp2040::{spi_config, RpOutput, RpSpi};

/// The board's panel driver
pub type Panel = St7789<
    RpSpi<'static, SPI1>,
    RpOutput<'static>,
    RpOutput<'static>,
    RpOutput<'static>,
    Delay,
>;

/// Backlight enable with board polarity
pub type Backlight = ActivePin<RpOutput<'static>>;

/// Peripherals wired to the display connector
pub struct DisplayPeripherals {
    pub spi: Peri<'static, SPI1>,
    pub sck: Peri<'static, PIN_10>,
    pub mosi: Peri<'static, PIN_11>,
    pub cs: Peri<'static, PIN_9>,
    pub dc: Peri<'static, PIN_8>,
    pub rst: Peri<'static, PIN_12>,
    pub backlight: Peri<'static, PIN_13>,
}

/// Bring up the configured display
///
/// Returns `None` when the config says the board has no display or the
/// panel fails to initialize. The backlight is switched on only after
/// the panel has been reset, so the uninitialized RAM is never visible.
pub fn acquire_display(
    pins: DisplayPeripherals,
    hw: &DisplayHwConfig,
) -> Option<(Panel, Backlight)> {
    if !hw.is_present() {
        info!("No display configured");
        return None;
    }

    let mut backlight = ActivePin::new(RpOutput::new(pins.backlight, false), hw.backlight_inverted);
    backlight.deactivate();

    // ST7789 samples on the rising edge with the clock idling high
    let bus = SpiConfig {
        frequency: hw.spi_frequency_hz,
        mode: Mode::Mode3,
    };
    let spi = Spi::new_blocking_txonly(pins.spi, pins.sck, pins.mosi, spi_config(&bus));

    let mut panel = St7789::new(
        RpSpi::new(spi),
        RpOutput::new(pins.dc, false),
        RpOutput::new(pins.cs, true),
        RpOutput::new(pins.rst, true),
        Delay,
        St7789Config::from(hw),
    );

    match panel.init() {
        Ok(()) => {
            info!(
                "ST7789 ready: {}x{} @ {} Hz",
                hw.width, hw.height, hw.spi_frequency_hz
            );
            backlight.activate();
            Some((panel, backlight))
        }
        Err(e) => {
            warn!("ST7789 init failed: {}", e);
            None
        }
    }
}
