//! In-memory frame buffer
//!
//! A [`DisplayBackend`] that keeps every pixel in RAM. Used to preview
//! scenes off-target and as the reference display in tests.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::Pixel;

use crate::backend::{DisplayBackend, DisplayError};

/// Frame buffer of `W x H` RGB565 pixels
pub struct FrameBuffer<const W: usize, const H: usize> {
    pixels: [[Rgb565; W]; H],
    flushes: u32,
}

impl<const W: usize, const H: usize> Default for FrameBuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> FrameBuffer<W, H> {
    /// Create a black frame buffer
    pub fn new() -> Self {
        Self {
            pixels: [[Rgb565::BLACK; W]; H],
            flushes: 0,
        }
    }

    /// Pixel at (x, y), `None` outside the buffer
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb565> {
        self.pixels.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Rows of pixels, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb565; W]> {
        self.pixels.iter()
    }

    /// Number of times the buffer has been flushed
    pub fn flush_count(&self) -> u32 {
        self.flushes
    }
}

impl<const W: usize, const H: usize> OriginDimensions for FrameBuffer<W, H> {
    fn size(&self) -> Size {
        Size::new(W as u32, H as u32)
    }
}

impl<const W: usize, const H: usize> DrawTarget for FrameBuffer<W, H> {
    type Color = Rgb565;
    type Error = DisplayError;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // Clip silently, as panels do
            if point.x < 0 || point.y < 0 {
                continue;
            }
            if let Some(px) = self
                .pixels
                .get_mut(point.y as usize)
                .and_then(|row| row.get_mut(point.x as usize))
            {
                *px = color;
            }
        }
        Ok(())
    }
}

impl<const W: usize, const H: usize> DisplayBackend for FrameBuffer<W, H> {
    fn flush(&mut self) -> Result<(), DisplayError> {
        self.flushes += 1;
        Ok(())
    }

    fn is_ready(&self) -> bool {
        true
    }
}
