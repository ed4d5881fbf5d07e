//! GPIO outputs
//!
//! Wraps `embassy_rp::gpio::Output` so drivers can take it as a
//! [`qrsign_hal::OutputPin`].

use embassy_rp::gpio::{Level, Output, Pin};
use embassy_rp::Peri;
use qrsign_hal::OutputPin;

/// RP2040 push-pull output
pub struct RpOutput<'d> {
    pin: Output<'d>,
}

impl<'d> RpOutput<'d> {
    /// Configure `pin` as an output driven to `high`
    pub fn new(pin: Peri<'d, impl Pin>, high: bool) -> Self {
        let level = if high { Level::High } else { Level::Low };
        Self {
            pin: Output::new(pin, level),
        }
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
