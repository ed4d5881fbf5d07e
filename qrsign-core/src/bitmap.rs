//! Two-color index bitmaps
//!
//! A [`Bitmap`] stores palette indices (0 or 1), one per pixel. The QR
//! matrix is rasterized into one at a 1:1 module-to-pixel ratio; scaling
//! happens later when the bitmap is drawn.

use embedded_graphics::pixelcolor::{Rgb565, Rgb888};

use crate::config::PaletteConfig;
use crate::qr::{QrMatrix, MAX_SIDE};

/// Largest bitmap side length
pub const MAX_BITMAP_SIDE: u32 = MAX_SIDE as u32;

const BITMAP_BYTES: usize = (MAX_SIDE * MAX_SIDE + 7) / 8;

/// Palette index for light pixels
pub const LIGHT: u8 = 0;

/// Palette index for dark pixels
pub const DARK: u8 = 1;

/// Bitmap errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitmapError {
    /// Requested dimensions exceed the fixed storage
    TooLarge,
}

/// 1-bit-per-pixel index bitmap
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    bits: [u8; BITMAP_BYTES],
}

impl Bitmap {
    /// Create a bitmap with every pixel set to index 0
    pub fn new(width: u32, height: u32) -> Result<Self, BitmapError> {
        if width > MAX_BITMAP_SIDE || height > MAX_BITMAP_SIDE {
            return Err(BitmapError::TooLarge);
        }
        Ok(Self {
            width,
            height,
            bits: [0; BITMAP_BYTES],
        })
    }

    /// Rasterize a QR matrix, one pixel per module
    ///
    /// Dark modules become index 1, light modules index 0.
    pub fn from_matrix(matrix: &QrMatrix) -> Self {
        let mut bitmap = Self {
            width: matrix.width(),
            height: matrix.height(),
            bits: [0; BITMAP_BYTES],
        };

        for y in 0..matrix.height() {
            for x in 0..matrix.width() {
                let value = if matrix.get(x, y) { DARK } else { LIGHT };
                bitmap.set(x, y, value);
            }
        }

        bitmap
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of distinct values a pixel can hold
    pub const fn value_count(&self) -> u8 {
        2
    }

    /// Palette index at (x, y); out-of-range pixels read as 0
    pub fn get(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return LIGHT;
        }
        let bit = (y * self.width + x) as usize;
        (self.bits[bit / 8] >> (bit % 8)) & 1
    }

    /// Set the palette index at (x, y)
    ///
    /// Any non-zero value is stored as 1. Out-of-range writes are ignored.
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let bit = (y * self.width + x) as usize;
        if value != LIGHT {
            self.bits[bit / 8] |= 1 << (bit % 8);
        } else {
            self.bits[bit / 8] &= !(1 << (bit % 8));
        }
    }
}

impl core::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// Maps bitmap indices to display colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Palette {
    colors: [Rgb565; 2],
}

impl Palette {
    /// Create a palette from light (index 0) and dark (index 1) colors
    pub fn new(background: Rgb565, foreground: Rgb565) -> Self {
        Self {
            colors: [background, foreground],
        }
    }

    /// Color for a palette index; indices above 1 map to the dark color
    pub fn color(&self, index: u8) -> Rgb565 {
        self.colors[usize::from(index.min(DARK))]
    }
}

impl From<&PaletteConfig> for Palette {
    fn from(config: &PaletteConfig) -> Self {
        Self::new(
            Rgb565::from(config.background),
            Rgb565::from(config.foreground),
        )
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from(&PaletteConfig::default())
    }
}

/// Convert a 24-bit config color for the panel
pub fn to_panel_color(color: Rgb888) -> Rgb565 {
    Rgb565::from(color)
}
