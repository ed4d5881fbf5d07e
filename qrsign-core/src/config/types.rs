//! Configuration type definitions
//!
//! These types describe what the sign shows: the QR payload and encoding
//! parameters, the two-color palette and the optional caption.

use embedded_graphics::pixelcolor::Rgb888;
use heapless::String;

use super::hardware::DisplayHwConfig;

/// Maximum payload length in bytes
///
/// Comfortably below the byte-mode capacity of the largest supported QR
/// version at the lowest error-correction level.
pub const MAX_PAYLOAD_LEN: usize = 128;

/// Maximum caption length
pub const MAX_CAPTION_LEN: usize = 32;

/// Smallest QR version (21x21 modules)
pub const MIN_QR_VERSION: u8 = 1;

/// Largest QR version the firmware reserves buffers for (57x57 modules)
pub const MAX_QR_VERSION: u8 = 10;

/// Payload shown when the config does not set one
pub const DEFAULT_PAYLOAD: &str = "https://spartahack.com";

/// Caption shown when the config enables a caption without text
pub const DEFAULT_CAPTION: &str = "Scan Me!";

/// QR error-correction level
///
/// Higher levels survive more damage at the cost of capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EccLevel {
    /// ~7% recovery
    #[default]
    Low,
    /// ~15% recovery
    Medium,
    /// ~25% recovery
    Quartile,
    /// ~30% recovery
    High,
}

impl EccLevel {
    /// Single-letter name as printed in QR literature
    pub const fn letter(self) -> char {
        match self {
            EccLevel::Low => 'L',
            EccLevel::Medium => 'M',
            EccLevel::Quartile => 'Q',
            EccLevel::High => 'H',
        }
    }
}

/// What to encode and how
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QrConfig {
    /// Text to encode (usually a URL)
    pub payload: String<MAX_PAYLOAD_LEN>,
    /// Fixed QR version, or `None` to pick the smallest that fits
    pub version: Option<u8>,
    /// Error-correction level
    pub error_correction: EccLevel,
}

impl Default for QrConfig {
    fn default() -> Self {
        let mut payload = String::new();
        let _ = payload.push_str(DEFAULT_PAYLOAD);
        Self {
            payload,
            version: Some(3),
            error_correction: EccLevel::Low,
        }
    }
}

/// Two-color palette for the QR bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PaletteConfig {
    /// Light modules (palette index 0)
    pub background: Rgb888,
    /// Dark modules (palette index 1)
    pub foreground: Rgb888,
    /// Screen area not covered by the code or caption
    pub screen: Rgb888,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            background: Rgb888::new(0xFF, 0xFF, 0xFF),
            foreground: Rgb888::new(0x00, 0x00, 0x00),
            screen: Rgb888::new(0x00, 0x00, 0x00),
        }
    }
}

/// Optional text line drawn on top of the code
///
/// The code is fitted to the whole screen, so a caption at the default
/// `y` lands over its top rows and hides the modules beneath the glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CaptionConfig {
    /// Draw the caption at all
    pub enabled: bool,
    /// Caption text (ASCII)
    pub text: String<MAX_CAPTION_LEN>,
    /// Integer scale of the caption group
    pub scale: u8,
    /// Vertical position of the caption group in screen pixels
    pub y: i16,
    /// Text color
    pub color: Rgb888,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        let mut text = String::new();
        let _ = text.push_str(DEFAULT_CAPTION);
        Self {
            enabled: false,
            text,
            scale: 2,
            y: 10,
            color: Rgb888::new(0xFF, 0xFF, 0xFF),
        }
    }
}

/// Complete sign configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignConfig {
    /// QR payload and encoding parameters
    pub qr: QrConfig,
    /// Module colors
    pub palette: PaletteConfig,
    /// Caption settings
    pub caption: CaptionConfig,
    /// Panel settings
    pub display: DisplayHwConfig,
}

/// Semantic configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Payload is empty
    EmptyPayload,
    /// QR version outside the supported range
    UnsupportedVersion(u8),
    /// Display width or height is zero
    ZeroDimension,
    /// Visible area plus offsets extends past the controller's frame memory
    OutsideControllerRam,
    /// Caption scale is zero
    ZeroCaptionScale,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::EmptyPayload => write!(f, "qr.payload is empty"),
            ConfigError::UnsupportedVersion(v) => write!(
                f,
                "qr.version {} is outside {}..={}",
                v, MIN_QR_VERSION, MAX_QR_VERSION
            ),
            ConfigError::ZeroDimension => write!(f, "display width and height must be non-zero"),
            ConfigError::OutsideControllerRam => {
                write!(f, "display size plus offsets exceeds controller RAM")
            }
            ConfigError::ZeroCaptionScale => write!(f, "caption.scale must be at least 1"),
        }
    }
}

impl SignConfig {
    /// Create the built-in default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Check cross-field constraints the parser cannot see
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.qr.payload.is_empty() {
            return Err(ConfigError::EmptyPayload);
        }
        if let Some(v) = self.qr.version {
            if !(MIN_QR_VERSION..=MAX_QR_VERSION).contains(&v) {
                return Err(ConfigError::UnsupportedVersion(v));
            }
        }
        if self.display.width == 0 || self.display.height == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        if !self.display.fits_controller_ram() {
            return Err(ConfigError::OutsideControllerRam);
        }
        if self.caption.scale == 0 {
            return Err(ConfigError::ZeroCaptionScale);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_sign() {
        let config = SignConfig::new();
        assert_eq!(config.qr.payload.as_str(), DEFAULT_PAYLOAD);
        assert_eq!(config.qr.version, Some(3));
        assert_eq!(config.qr.error_correction, EccLevel::Low);
        assert!(!config.caption.enabled);
        assert_eq!(config.caption.text.as_str(), DEFAULT_CAPTION);
        assert_eq!(config.palette.background, Rgb888::new(0xFF, 0xFF, 0xFF));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = SignConfig::new();
        config.qr.payload.clear();
        assert_eq!(config.validate(), Err(ConfigError::EmptyPayload));

        let mut config = SignConfig::new();
        config.qr.version = Some(11);
        assert_eq!(config.validate(), Err(ConfigError::UnsupportedVersion(11)));

        let mut config = SignConfig::new();
        config.qr.version = Some(0);
        assert_eq!(config.validate(), Err(ConfigError::UnsupportedVersion(0)));

        let mut config = SignConfig::new();
        config.display.height = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroDimension));

        let mut config = SignConfig::new();
        config.caption.scale = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroCaptionScale));

        let mut config = SignConfig::new();
        config.display.x_offset = u16::MAX;
        assert_eq!(config.validate(), Err(ConfigError::OutsideControllerRam));

        let mut config = SignConfig::new();
        config.display.width = 400;
        assert_eq!(config.validate(), Err(ConfigError::OutsideControllerRam));
    }

    #[test]
    fn test_auto_version_is_valid() {
        let mut config = SignConfig::new();
        config.qr.version = None;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ecc_letters() {
        assert_eq!(EccLevel::Low.letter(), 'L');
        assert_eq!(EccLevel::Medium.letter(), 'M');
        assert_eq!(EccLevel::Quartile.letter(), 'Q');
        assert_eq!(EccLevel::High.letter(), 'H');
    }
}
