//! Hardware configuration types
//!
//! Panel-level settings. Pin assignments are fixed per board and live in
//! the firmware; everything that differs between panels of the same
//! controller family is configurable here.

/// Display controller fitted to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayDriverKind {
    /// Sitronix ST7789 over 4-wire SPI
    #[default]
    St7789,
    /// No display fitted
    None,
}

/// Display hardware configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayHwConfig {
    /// Controller type
    pub driver: DisplayDriverKind,
    /// Visible width in pixels
    pub width: u16,
    /// Visible height in pixels
    pub height: u16,
    /// SPI clock in Hz
    pub spi_frequency_hz: u32,
    /// Column offset of the visible area inside controller RAM
    pub x_offset: u16,
    /// Row offset of the visible area inside controller RAM
    pub y_offset: u16,
    /// Panel needs INVON to show true colors (common on IPS modules)
    pub invert_colors: bool,
    /// Backlight enable is active-low
    pub backlight_inverted: bool,
}

impl Default for DisplayHwConfig {
    fn default() -> Self {
        // 320x240 landscape panel
        Self {
            driver: DisplayDriverKind::St7789,
            width: 320,
            height: 240,
            spi_frequency_hz: 32_000_000,
            x_offset: 0,
            y_offset: 0,
            invert_colors: true,
            backlight_inverted: false,
        }
    }
}

/// ST7789 frame memory in its native portrait orientation
pub const ST7789_RAM_WIDTH: u32 = 240;
/// ST7789 frame memory rows
pub const ST7789_RAM_HEIGHT: u32 = 320;

impl DisplayHwConfig {
    /// Whether the board has a display the firmware can drive
    pub fn is_present(&self) -> bool {
        self.driver != DisplayDriverKind::None
    }

    /// Whether the visible area, shifted by its offsets, lies inside the
    /// controller's frame memory
    ///
    /// Landscape panels (wider than tall) swap the RAM axes.
    pub fn fits_controller_ram(&self) -> bool {
        let (ram_w, ram_h) = match self.driver {
            DisplayDriverKind::None => return true,
            DisplayDriverKind::St7789 if self.width > self.height => {
                (ST7789_RAM_HEIGHT, ST7789_RAM_WIDTH)
            }
            DisplayDriverKind::St7789 => (ST7789_RAM_WIDTH, ST7789_RAM_HEIGHT),
        };
        u32::from(self.x_offset) + u32::from(self.width) <= ram_w
            && u32::from(self.y_offset) + u32::from(self.height) <= ram_h
    }
}
