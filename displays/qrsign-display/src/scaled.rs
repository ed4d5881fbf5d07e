//! Integer scaling draw target adapter
//!
//! Every pixel drawn into a [`Scaled`] target becomes a `scale x scale`
//! block on the parent. Coordinates are in scaled cells, so a group's
//! children can be laid out without knowing the scale.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Dimensions, Point, Size};
use embedded_graphics::primitives::{PointsIter, Rectangle};
use embedded_graphics::Pixel;
use heapless::Vec;

/// Widest source row streamed as a single window
///
/// Wider areas fall back to per-pixel blocks.
pub const MAX_ROW: usize = 64;

/// Draw target that magnifies everything drawn into it
pub struct Scaled<'a, D> {
    parent: &'a mut D,
    scale: u32,
}

impl<'a, D: DrawTarget> Scaled<'a, D> {
    /// Wrap `parent`; a scale of 0 is treated as 1
    pub fn new(parent: &'a mut D, scale: u32) -> Self {
        Self {
            parent,
            scale: scale.max(1),
        }
    }

    /// Scale factor
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Map a rectangle in cells to parent pixels
    fn to_parent(&self, area: &Rectangle) -> Rectangle {
        Rectangle::new(area.top_left * self.scale as i32, area.size * self.scale)
    }
}

impl<D: DrawTarget> Dimensions for Scaled<'_, D> {
    fn bounding_box(&self) -> Rectangle {
        let parent = self.parent.bounding_box();
        let s = self.scale as i32;
        Rectangle::new(
            Point::new(parent.top_left.x.div_euclid(s), parent.top_left.y.div_euclid(s)),
            parent.size / self.scale,
        )
    }
}

impl<D: DrawTarget> DrawTarget for Scaled<'_, D> {
    type Color = D::Color;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let block = Size::new(self.scale, self.scale);
        for Pixel(point, color) in pixels {
            let cell = Rectangle::new(point * self.scale as i32, block);
            self.parent.fill_solid(&cell, color)?;
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        let width = area.size.width as usize;
        if width == 0 || width > MAX_ROW {
            return self.draw_iter(
                area.points()
                    .zip(colors)
                    .map(|(point, color)| Pixel(point, color)),
            );
        }

        // One parent window per source row, each row repeated `scale` times
        let scale = self.scale as usize;
        let mut colors = colors.into_iter();
        let mut row: Vec<D::Color, MAX_ROW> = Vec::new();

        for y in 0..area.size.height as i32 {
            row.clear();
            for color in colors.by_ref().take(width) {
                // Capacity checked above
                let _ = row.push(color);
            }
            if row.len() < width {
                break;
            }

            let source = Rectangle::new(
                area.top_left + Point::new(0, y),
                Size::new(area.size.width, 1),
            );
            let window = self.to_parent(&source);
            let row = &row;
            let pixels = (0..scale).flat_map(move |_| {
                row.iter()
                    .flat_map(move |&color| core::iter::repeat(color).take(scale))
            });
            self.parent.fill_contiguous(&window, pixels)?;
        }

        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let window = self.to_parent(area);
        self.parent.fill_solid(&window, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;
    use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

    #[test]
    fn test_bounding_box_is_divided() {
        let mut fb = FrameBuffer::<20, 12>::new();
        let scaled = Scaled::new(&mut fb, 3);
        let bb = scaled.bounding_box();
        assert_eq!(bb.top_left, Point::zero());
        assert_eq!(bb.size, Size::new(6, 4));
    }

    #[test]
    fn test_pixel_becomes_block() {
        let mut fb = FrameBuffer::<8, 8>::new();
        {
            let mut scaled = Scaled::new(&mut fb, 2);
            scaled
                .draw_iter([Pixel(Point::new(1, 2), Rgb565::RED)])
                .unwrap();
        }
        for y in 0..8 {
            for x in 0..8 {
                let expected = if (2..4).contains(&x) && (4..6).contains(&y) {
                    Rgb565::RED
                } else {
                    Rgb565::BLACK
                };
                assert_eq!(fb.pixel(x, y), Some(expected), "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_fill_contiguous_repeats_rows() {
        let mut fb = FrameBuffer::<6, 6>::new();
        {
            let mut scaled = Scaled::new(&mut fb, 3);
            let area = Rectangle::new(Point::zero(), Size::new(2, 2));
            let colors = [Rgb565::RED, Rgb565::GREEN, Rgb565::BLUE, Rgb565::WHITE];
            scaled.fill_contiguous(&area, colors).unwrap();
        }
        assert_eq!(fb.pixel(0, 0), Some(Rgb565::RED));
        assert_eq!(fb.pixel(2, 2), Some(Rgb565::RED));
        assert_eq!(fb.pixel(3, 0), Some(Rgb565::GREEN));
        assert_eq!(fb.pixel(5, 2), Some(Rgb565::GREEN));
        assert_eq!(fb.pixel(0, 3), Some(Rgb565::BLUE));
        assert_eq!(fb.pixel(5, 5), Some(Rgb565::WHITE));
    }

    #[test]
    fn test_fill_contiguous_short_iterator_stops() {
        let mut fb = FrameBuffer::<4, 4>::new();
        {
            let mut scaled = Scaled::new(&mut fb, 2);
            let area = Rectangle::new(Point::zero(), Size::new(2, 2));
            scaled.fill_contiguous(&area, [Rgb565::RED; 3]).unwrap();
        }
        // First row drawn, incomplete second row skipped
        assert_eq!(fb.pixel(3, 1), Some(Rgb565::RED));
        assert_eq!(fb.pixel(0, 2), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_fill_solid_scales_area() {
        let mut fb = FrameBuffer::<10, 10>::new();
        {
            let mut scaled = Scaled::new(&mut fb, 5);
            scaled
                .fill_solid(&Rectangle::new(Point::new(1, 1), Size::new(1, 1)), Rgb565::BLUE)
                .unwrap();
        }
        assert_eq!(fb.pixel(4, 4), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(5, 5), Some(Rgb565::BLUE));
        assert_eq!(fb.pixel(9, 9), Some(Rgb565::BLUE));
    }

    #[test]
    fn test_zero_scale_is_identity() {
        let mut fb = FrameBuffer::<4, 4>::new();
        let scaled = Scaled::new(&mut fb, 0);
        assert_eq!(scaled.scale(), 1);
    }
}
