//! Sign presentation
//!
//! Runs the boot pipeline from configuration to pixels: encode the
//! payload, rasterize it, fit and center it, build the scene and hand it
//! to the display.

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::Drawable;

use qrsign_core::bitmap::{to_panel_color, Bitmap, Palette};
use qrsign_core::config::{ConfigError, SignConfig};
use qrsign_core::layout::{center_offset, LayoutError, Placement};
use qrsign_core::qr::{EncodeError, QrMatrix};

use crate::backend::{DisplayBackend, DisplayError};
use crate::scene::{Group, Label, Scene, SceneError, TileGrid};

/// Console message when the board has no usable display
pub const DISPLAY_MISSING_MESSAGE: &str =
    "No display found. Check the [display] section of sign.toml for this board.";

/// Errors while presenting the sign
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SignError {
    /// No display handle; nothing was encoded or drawn
    DisplayUnavailable,
    /// Configuration failed validation
    Config(ConfigError),
    /// Payload could not be encoded
    Encode(EncodeError),
    /// Code does not fit on the screen
    Layout(LayoutError),
    /// Scene capacity exceeded
    Scene(SceneError),
    /// Display rejected drawing
    Display(DisplayError),
}

impl core::fmt::Display for SignError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SignError::DisplayUnavailable => f.write_str(DISPLAY_MISSING_MESSAGE),
            SignError::Config(e) => write!(f, "bad config: {}", e),
            SignError::Encode(e) => write!(f, "QR encoding failed: {}", e),
            SignError::Layout(e) => write!(f, "layout failed: {}", e),
            SignError::Scene(_) => write!(f, "scene capacity exceeded"),
            SignError::Display(e) => write!(f, "display error: {}", e),
        }
    }
}

impl From<ConfigError> for SignError {
    fn from(e: ConfigError) -> Self {
        SignError::Config(e)
    }
}

impl From<EncodeError> for SignError {
    fn from(e: EncodeError) -> Self {
        SignError::Encode(e)
    }
}

impl From<LayoutError> for SignError {
    fn from(e: LayoutError) -> Self {
        SignError::Layout(e)
    }
}

impl From<SceneError> for SignError {
    fn from(e: SceneError) -> Self {
        SignError::Scene(e)
    }
}

impl From<DisplayError> for SignError {
    fn from(e: DisplayError) -> Self {
        SignError::Display(e)
    }
}

/// What ended up on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Presentation {
    /// QR version used
    pub version: u8,
    /// Matrix side in modules
    pub matrix_size: u32,
    /// Scale and centering of the code
    pub placement: Placement,
    /// Caption top-left in screen pixels, if drawn
    pub caption_origin: Option<Point>,
}

/// Show the configured sign on `display`
///
/// With no display this returns [`SignError::DisplayUnavailable`] before
/// doing any work.
pub fn present<D: DisplayBackend>(
    display: Option<&mut D>,
    config: &SignConfig,
) -> Result<Presentation, SignError> {
    let display = display.ok_or(SignError::DisplayUnavailable)?;
    if !display.is_ready() {
        return Err(SignError::Display(DisplayError::NotInitialized));
    }
    config.validate()?;

    let matrix = QrMatrix::encode(
        config.qr.payload.as_str(),
        config.qr.version,
        config.qr.error_correction,
    )?;
    let bitmap = Bitmap::from_matrix(&matrix);

    let screen = display.bounding_box().size;
    let placement = Placement::fit(screen, Size::new(bitmap.width(), bitmap.height()))?;

    let mut scene = Scene::new(to_panel_color(config.palette.screen));

    let mut code = Group::new(placement.scale);
    code.append(TileGrid::new(&bitmap, Palette::from(&config.palette)).at(placement.offset))?;
    scene.append(code)?;

    let caption_origin = if config.caption.enabled {
        let scale = u32::from(config.caption.scale);
        let label = Label::new(config.caption.text.as_str(), to_panel_color(config.caption.color));
        let x = center_offset(screen.width / scale, label.width());
        let origin = Point::new(0, i32::from(config.caption.y));

        let mut caption = Group::new(scale).with_position(origin);
        caption.append(label.at(Point::new(x, 0)))?;
        scene.append(caption)?;

        Some(origin + Point::new(x * scale as i32, 0))
    } else {
        None
    };

    scene.draw(display)?;
    display.flush()?;

    Ok(Presentation {
        version: matrix.version(),
        matrix_size: matrix.width(),
        placement,
        caption_origin,
    })
}
