//! Scene hierarchy
//!
//! A [`Scene`] is the root of what the display shows. It holds a handful
//! of [`Group`]s, each with a position, an integer scale and a few
//! elements: [`TileGrid`]s (palette-mapped bitmaps) and [`Label`]s.
//!
//! Element positions are in the group's scaled cells; group positions are
//! in screen pixels.

use embedded_graphics::draw_target::{DrawTarget, DrawTargetExt};
use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::Drawable;
use heapless::{String, Vec};

use qrsign_core::bitmap::{Bitmap, Palette};
use qrsign_core::config::MAX_CAPTION_LEN;

use crate::scaled::Scaled;

/// Maximum groups in a scene
pub const MAX_GROUPS: usize = 4;

/// Maximum elements per group
pub const MAX_ELEMENTS: usize = 4;

/// Font used for labels
pub const LABEL_FONT: &MonoFont<'static> = &FONT_6X10;

/// Scene construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SceneError {
    /// Group or scene capacity exceeded
    Full,
}

/// Bitmap drawn through a palette
#[derive(Debug, Clone, Copy)]
pub struct TileGrid<'a> {
    bitmap: &'a Bitmap,
    palette: Palette,
    /// Top-left corner in the parent group's cells
    pub position: Point,
}

impl<'a> TileGrid<'a> {
    /// Create a tile grid at the group origin
    pub fn new(bitmap: &'a Bitmap, palette: Palette) -> Self {
        Self {
            bitmap,
            palette,
            position: Point::zero(),
        }
    }

    /// Move the tile grid
    pub fn at(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Size in cells
    pub fn size(&self) -> Size {
        Size::new(self.bitmap.width(), self.bitmap.height())
    }
}

impl Drawable for TileGrid<'_> {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let width = self.bitmap.width();
        let height = self.bitmap.height();
        let area = Rectangle::new(self.position, self.size());
        let colors = (0..height).flat_map(move |y| {
            (0..width).map(move |x| self.palette.color(self.bitmap.get(x, y)))
        });
        target.fill_contiguous(&area, colors)
    }
}

/// Single line of monospaced text
#[derive(Debug, Clone)]
pub struct Label {
    text: String<MAX_CAPTION_LEN>,
    color: Rgb565,
    /// Top-left corner in the parent group's cells
    pub position: Point,
}

impl Label {
    /// Create a label at the group origin
    ///
    /// Text beyond the caption capacity is dropped.
    pub fn new(text: &str, color: Rgb565) -> Self {
        let mut stored = String::new();
        for ch in text.chars() {
            if stored.push(ch).is_err() {
                break;
            }
        }
        Self {
            text: stored,
            color,
            position: Point::zero(),
        }
    }

    /// Move the label
    pub fn at(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Label text
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Rendered width in cells
    pub fn width(&self) -> u32 {
        let glyph = LABEL_FONT.character_size.width + LABEL_FONT.character_spacing;
        (self.text.chars().count() as u32 * glyph).saturating_sub(LABEL_FONT.character_spacing)
    }

    /// Rendered height in cells
    pub fn height(&self) -> u32 {
        LABEL_FONT.character_size.height
    }
}

impl Drawable for Label {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let style = MonoTextStyle::new(LABEL_FONT, self.color);
        Text::with_baseline(self.text.as_str(), self.position, style, Baseline::Top).draw(target)?;
        Ok(())
    }
}

/// Anything a group can hold
#[derive(Debug, Clone)]
pub enum Element<'a> {
    /// Palette-mapped bitmap
    TileGrid(TileGrid<'a>),
    /// Text
    Label(Label),
}

impl<'a> From<TileGrid<'a>> for Element<'a> {
    fn from(grid: TileGrid<'a>) -> Self {
        Element::TileGrid(grid)
    }
}

impl From<Label> for Element<'_> {
    fn from(label: Label) -> Self {
        Element::Label(label)
    }
}

impl Drawable for Element<'_> {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        match self {
            Element::TileGrid(grid) => grid.draw(target),
            Element::Label(label) => label.draw(target),
        }
    }
}

/// Positioned, scaled collection of elements
#[derive(Debug, Clone)]
pub struct Group<'a> {
    /// Top-left corner in screen pixels
    pub position: Point,
    scale: u32,
    elements: Vec<Element<'a>, MAX_ELEMENTS>,
}

impl<'a> Group<'a> {
    /// Create an empty group at the screen origin; scale 0 is treated as 1
    pub fn new(scale: u32) -> Self {
        Self {
            position: Point::zero(),
            scale: scale.max(1),
            elements: Vec::new(),
        }
    }

    /// Move the group
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Add an element on top of the existing ones
    pub fn append(&mut self, element: impl Into<Element<'a>>) -> Result<(), SceneError> {
        self.elements
            .push(element.into())
            .map_err(|_| SceneError::Full)
    }

    /// Scale factor
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Elements in draw order
    pub fn elements(&self) -> &[Element<'a>] {
        &self.elements
    }
}

impl Drawable for Group<'_> {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let mut positioned = target.translated(self.position);
        let mut scaled = Scaled::new(&mut positioned, self.scale);
        for element in &self.elements {
            element.draw(&mut scaled)?;
        }
        Ok(())
    }
}

/// Root of the display hierarchy
#[derive(Debug, Clone)]
pub struct Scene<'a> {
    background: Rgb565,
    groups: Vec<Group<'a>, MAX_GROUPS>,
}

impl<'a> Scene<'a> {
    /// Create an empty scene; uncovered screen area shows `background`
    pub fn new(background: Rgb565) -> Self {
        Self {
            background,
            groups: Vec::new(),
        }
    }

    /// Add a group on top of the existing ones
    pub fn append(&mut self, group: Group<'a>) -> Result<(), SceneError> {
        self.groups.push(group).map_err(|_| SceneError::Full)
    }

    /// Groups in draw order
    pub fn groups(&self) -> &[Group<'a>] {
        &self.groups
    }
}

impl Drawable for Scene<'_> {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        target.clear(self.background)?;
        for group in &self.groups {
            group.draw(target)?;
        }
        Ok(())
    }
}
