//! GPIO pin abstractions
//!
//! Panel control lines (data/command select, chip select, reset and
//! backlight) are plain push-pull outputs.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Output pin with configurable polarity
///
/// Backlight enables and some chip selects are active-low on certain
/// boards. `ActivePin` lets drivers speak in terms of "active" and
/// "inactive" and leaves the electrical level to the board config.
pub struct ActivePin<P> {
    pin: P,
    inverted: bool,
}

impl<P: OutputPin> ActivePin<P> {
    /// Wrap a pin; `inverted` means the active state is logic low
    pub fn new(pin: P, inverted: bool) -> Self {
        Self { pin, inverted }
    }

    /// Drive the pin to its active level
    pub fn activate(&mut self) {
        self.pin.set_state(!self.inverted);
    }

    /// Drive the pin to its inactive level
    pub fn deactivate(&mut self) {
        self.pin.set_state(self.inverted);
    }

    /// Whether the pin is currently at its active level
    pub fn is_active(&self) -> bool {
        self.pin.is_set_high() != self.inverted
    }

    /// Release the underlying pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}
