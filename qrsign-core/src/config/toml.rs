//! Simple TOML parser for the sign configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! `sign.toml`. It does NOT support the full TOML grammar.
//!
//! Supported features:
//! - Key = value pairs (string, integer, boolean)
//! - Integers with `_` digit separators
//! - [section] headers
//! - Comments (# ...), including trailing comments
//!
//! NOT supported:
//! - Multi-line strings
//! - Escape sequences inside strings
//! - Arrays and inline tables
//! - Dotted keys

use embedded_graphics::pixelcolor::Rgb888;
use heapless::String;

use super::hardware::DisplayDriverKind;
use super::types::{EccLevel, SignConfig};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Invalid value type
    InvalidValue,
    /// String longer than its fixed-capacity field
    TooLong,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::InvalidSection => write!(f, "invalid section header"),
            ParseError::InvalidValue => write!(f, "invalid value"),
            ParseError::TooLong => write!(f, "string value too long"),
        }
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Qr,
    Palette,
    Caption,
    Display,
}

/// Parse TOML configuration into a SignConfig
///
/// Keys that are not recognised are skipped so older firmware keeps
/// accepting newer config files. Lines without `=` or without a value
/// are rejected with [`ParseError::InvalidValue`].
pub fn parse_config(input: &str) -> Result<SignConfig, ParseError> {
    let mut config = SignConfig::new();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Check for section header
        if line.starts_with('[') {
            let header = strip_comment(line);
            if !header.ends_with(']') || header.len() < 2 {
                return Err(ParseError::InvalidSection);
            }
            section = parse_section_header(&header[1..header.len() - 1])?;
            continue;
        }

        // A line that is neither a header nor `key = value` is malformed
        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue)?;
        apply_value(section, key, value, &mut config)?;
    }

    Ok(config)
}

/// Parse a section header like "qr" or "display"
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "qr" => Ok(Section::Qr),
        "palette" => Ok(Section::Palette),
        "caption" => Ok(Section::Caption),
        "display" => Ok(Section::Display),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Apply a key/value pair to the section being parsed
fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut SignConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Root => {}
        Section::Qr => match key {
            "payload" => config.qr.payload = parse_heapless(value)?,
            "version" => config.qr.version = parse_version(value)?,
            "error_correction" => config.qr.error_correction = parse_ecc(value)?,
            _ => {}
        },
        Section::Palette => match key {
            "background" => config.palette.background = parse_color(value)?,
            "foreground" => config.palette.foreground = parse_color(value)?,
            "screen" => config.palette.screen = parse_color(value)?,
            _ => {}
        },
        Section::Caption => match key {
            "enabled" => config.caption.enabled = parse_bool(value)?,
            "text" => config.caption.text = parse_heapless(value)?,
            "scale" => config.caption.scale = parse_int(value)?,
            "y" => config.caption.y = parse_int(value)?,
            "color" => config.caption.color = parse_color(value)?,
            _ => {}
        },
        Section::Display => match key {
            "driver" => config.display.driver = parse_driver(value)?,
            "width" => config.display.width = parse_int(value)?,
            "height" => config.display.height = parse_int(value)?,
            "spi_frequency_hz" => config.display.spi_frequency_hz = parse_int(value)?,
            "x_offset" => config.display.x_offset = parse_int(value)?,
            "y_offset" => config.display.y_offset = parse_int(value)?,
            "invert_colors" => config.display.invert_colors = parse_bool(value)?,
            "backlight_inverted" => config.display.backlight_inverted = parse_bool(value)?,
            _ => {}
        },
    }

    Ok(())
}

/// Remove a trailing `# comment` that is not inside a string
fn strip_comment(value: &str) -> &str {
    let mut in_string = false;
    for (i, ch) in value.char_indices() {
        match ch {
            '"' => in_string = !in_string,
            '#' if !in_string => return value[..i].trim(),
            _ => {}
        }
    }
    value
}

/// Parse a `key = value` line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = strip_comment(line[eq_pos + 1..].trim());

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> Result<&str, ParseError> {
    if value.starts_with('"') {
        if value.len() >= 2 && value.ends_with('"') {
            Ok(&value[1..value.len() - 1])
        } else {
            Err(ParseError::InvalidValue)
        }
    } else {
        // Allow unquoted strings for simple values
        Ok(value)
    }
}

/// Parse a string value into a fixed-capacity string
fn parse_heapless<const N: usize>(value: &str) -> Result<String<N>, ParseError> {
    let s = parse_string(value)?;
    let mut out = String::new();
    out.push_str(s).map_err(|_| ParseError::TooLong)?;
    Ok(out)
}

/// Parse an integer value, allowing `_` separators
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    let mut digits: String<24> = String::new();
    for ch in value.chars().filter(|&c| c != '_') {
        digits.push(ch).map_err(|_| ParseError::InvalidValue)?;
    }
    digits.parse().map_err(|_| ParseError::InvalidValue)
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse a QR version: an integer or "auto"
fn parse_version(value: &str) -> Result<Option<u8>, ParseError> {
    match parse_string(value)? {
        "auto" => Ok(None),
        v => parse_int(v).map(Some),
    }
}

/// Parse an error-correction level ("L", "M", "Q", "H" or the long names)
fn parse_ecc(value: &str) -> Result<EccLevel, ParseError> {
    match parse_string(value)? {
        "L" | "l" | "low" => Ok(EccLevel::Low),
        "M" | "m" | "medium" => Ok(EccLevel::Medium),
        "Q" | "q" | "quartile" => Ok(EccLevel::Quartile),
        "H" | "h" | "high" => Ok(EccLevel::High),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse a display driver name
fn parse_driver(value: &str) -> Result<DisplayDriverKind, ParseError> {
    match parse_string(value)? {
        "st7789" => Ok(DisplayDriverKind::St7789),
        "none" => Ok(DisplayDriverKind::None),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse a color like "FF8800", "#FF8800" or "0xFF8800"
fn parse_color(value: &str) -> Result<Rgb888, ParseError> {
    let s = parse_string(value)?;
    let hex = s
        .strip_prefix('#')
        .or_else(|| s.strip_prefix("0x"))
        .unwrap_or(s);

    if hex.len() != 6 {
        return Err(ParseError::InvalidValue);
    }

    let rgb = u32::from_str_radix(hex, 16).map_err(|_| ParseError::InvalidValue)?;
    Ok(Rgb888::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
}
