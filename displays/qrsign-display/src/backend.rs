//! Display backend trait
//!
//! Defines the interface for different display types.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
}

impl core::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DisplayError::Communication => write!(f, "display bus error"),
            DisplayError::InvalidCoordinates => write!(f, "invalid display coordinates"),
            DisplayError::NotInitialized => write!(f, "display not initialized"),
        }
    }
}

/// Display backend trait
///
/// A pixel display the scene can be drawn onto. Drawing goes through
/// `embedded-graphics`; implementations only add buffering control and
/// readiness on top.
pub trait DisplayBackend: DrawTarget<Color = Rgb565, Error = DisplayError> {
    /// Flush buffered content to the display
    ///
    /// Displays that stream pixels straight to the panel have nothing to do.
    fn flush(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    /// Check if the display is ready to accept drawing
    fn is_ready(&self) -> bool;
}
