//! Scale-to-fit and centering arithmetic
//!
//! The QR bitmap is drawn inside a group whose integer scale is the largest
//! that fits both screen axes. Offsets are expressed in scaled cells, the
//! coordinate space of the group's children.

use embedded_graphics::geometry::{Point, Size};

/// Layout errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayoutError {
    /// Content is larger than the screen at scale 1, or empty
    DoesNotFit,
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LayoutError::DoesNotFit => write!(f, "content does not fit on the screen"),
        }
    }
}

/// Largest integer scale at which `matrix` fits on `screen` on both axes
///
/// Returns 0 when the content is larger than the screen or empty.
pub fn fit_scale(screen_w: u32, screen_h: u32, matrix_w: u32, matrix_h: u32) -> u32 {
    if matrix_w == 0 || matrix_h == 0 {
        return 0;
    }
    (screen_w / matrix_w).min(screen_h / matrix_h)
}

/// Offset that centers `dimension` within `available_cells`
///
/// Floor division, so an odd leftover puts the extra cell after the content.
pub fn center_offset(available_cells: u32, dimension: u32) -> i32 {
    (available_cells as i32 - dimension as i32).div_euclid(2)
}

/// Where and how large the QR group is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Placement {
    /// Group scale factor
    pub scale: u32,
    /// Content position inside the group, in scaled cells
    pub offset: Point,
    /// Content size in cells
    pub content: Size,
}

impl Placement {
    /// Fit `content` (in cells) onto `screen` (in pixels)
    pub fn fit(screen: Size, content: Size) -> Result<Self, LayoutError> {
        let scale = fit_scale(screen.width, screen.height, content.width, content.height);
        if scale == 0 {
            return Err(LayoutError::DoesNotFit);
        }

        let offset = Point::new(
            center_offset(screen.width / scale, content.width),
            center_offset(screen.height / scale, content.height),
        );

        Ok(Self {
            scale,
            offset,
            content,
        })
    }

    /// Top-left corner of the content in screen pixels
    pub fn pixel_origin(&self) -> Point {
        self.offset * self.scale as i32
    }

    /// Content size in screen pixels
    pub fn pixel_size(&self) -> Size {
        self.content * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_stock_screen() {
        // 29x29 code on a 320x240 panel
        assert_eq!(fit_scale(320, 240, 29, 29), 8);

        let placement = Placement::fit(Size::new(320, 240), Size::new(29, 29)).unwrap();
        assert_eq!(placement.scale, 8);
        // 320 / 8 = 40 cells wide, 240 / 8 = 30 cells tall
        assert_eq!(placement.offset, Point::new(5, 0));
        assert_eq!(placement.pixel_origin(), Point::new(40, 0));
        assert_eq!(placement.pixel_size(), Size::new(232, 232));
    }

    #[test]
    fn test_portrait_screen() {
        let placement = Placement::fit(Size::new(135, 240), Size::new(25, 25)).unwrap();
        assert_eq!(placement.scale, 5);
        assert_eq!(placement.offset, Point::new(1, 11));
    }

    #[test]
    fn test_center_offset_floors() {
        assert_eq!(center_offset(40, 29), 5);
        assert_eq!(center_offset(30, 29), 0);
        assert_eq!(center_offset(29, 29), 0);
        assert_eq!(center_offset(28, 29), -1);
    }

    #[test]
    fn test_does_not_fit() {
        assert_eq!(
            Placement::fit(Size::new(20, 240), Size::new(21, 21)),
            Err(LayoutError::DoesNotFit)
        );
        assert_eq!(
            Placement::fit(Size::new(320, 240), Size::new(0, 0)),
            Err(LayoutError::DoesNotFit)
        );
    }

    proptest! {
        #[test]
        fn scale_is_floor_of_min_ratio(
            sw in 1u32..2000,
            sh in 1u32..2000,
            side in (1u32..=10).prop_map(|v| v * 4 + 17),
        ) {
            let scale = fit_scale(sw, sh, side, side);
            prop_assert_eq!(scale, core::cmp::min(sw / side, sh / side));
            // Largest such scale: one more would overflow an axis
            prop_assert!(side * (scale + 1) > sw || side * (scale + 1) > sh);
        }

        #[test]
        fn offsets_center_content(
            sw in 21u32..2000,
            sh in 21u32..2000,
            side in (1u32..=10).prop_map(|v| v * 4 + 17),
        ) {
            prop_assume!(sw >= side && sh >= side);
            let placement = Placement::fit(Size::new(sw, sh), Size::new(side, side)).unwrap();
            let cells_w = sw / placement.scale;
            let cells_h = sh / placement.scale;

            prop_assert_eq!(placement.offset.x, (cells_w as i32 - side as i32).div_euclid(2));
            prop_assert_eq!(placement.offset.y, (cells_h as i32 - side as i32).div_euclid(2));

            // Content stays on screen
            let origin = placement.pixel_origin();
            let size = placement.pixel_size();
            prop_assert!(origin.x >= 0 && origin.y >= 0);
            prop_assert!(origin.x as u32 + size.width <= sw);
            prop_assert!(origin.y as u32 + size.height <= sh);
        }
    }
}
