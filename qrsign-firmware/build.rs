//! Build script for qrsign-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates sign.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Longest payload the firmware can hold
const MAX_PAYLOAD_LEN: usize = 128;

/// Longest caption the firmware can hold
const MAX_CAPTION_LEN: usize = 32;

/// Highest QR version the firmware encodes
const MAX_QR_VERSION: i64 = 10;

/// ST7789 frame memory, portrait orientation
const ST7789_RAM_WIDTH: i64 = 240;
const ST7789_RAM_HEIGHT: i64 = 320;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate sign.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=sign.toml");

    let config_path = Path::new("sign.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: sign.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds sign.toml as its configuration.             ║\n\
            ║  Please create one in the qrsign-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read sign.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in sign.toml                         ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_qr(&config, &mut errors);
    validate_palette(&config, &mut errors);
    validate_caption(&config, &mut errors);
    validate_display(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid sign configuration                               ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=sign.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Look up a section table, reporting it if it is not a table
fn section<'a>(
    config: &'a toml::Value,
    name: &str,
    errors: &mut Vec<String>,
) -> Option<&'a toml::value::Table> {
    match config.get(name) {
        Some(toml::Value::Table(t)) => Some(t),
        Some(_) => {
            errors.push(format!("[{}] must be a table", name));
            None
        }
        None => None,
    }
}

/// Validate the [qr] section (required)
fn validate_qr(config: &toml::Value, errors: &mut Vec<String>) {
    if config.get("qr").is_none() {
        errors.push("Missing [qr] section".to_string());
        return;
    }
    let qr = match section(config, "qr", errors) {
        Some(t) => t,
        None => return,
    };

    match qr.get("payload") {
        Some(toml::Value::String(payload)) => {
            if payload.is_empty() {
                errors.push("[qr] payload cannot be empty".to_string());
            }
            if payload.len() > MAX_PAYLOAD_LEN {
                errors.push(format!(
                    "[qr] payload longer than {} bytes",
                    MAX_PAYLOAD_LEN
                ));
            }
        }
        Some(_) => errors.push("[qr] payload must be a string".to_string()),
        None => errors.push("[qr] missing 'payload'".to_string()),
    }

    match qr.get("version") {
        Some(toml::Value::Integer(v)) => {
            if *v < 1 || *v > MAX_QR_VERSION {
                errors.push(format!("[qr] version must be 1-{} or \"auto\"", MAX_QR_VERSION));
            }
        }
        Some(toml::Value::String(v)) if v == "auto" => {}
        Some(_) => {
            errors.push(format!("[qr] version must be 1-{} or \"auto\"", MAX_QR_VERSION))
        }
        None => {}
    }

    if let Some(ecc) = qr.get("error_correction") {
        let valid = ["L", "M", "Q", "H", "l", "m", "q", "h", "low", "medium", "quartile", "high"];
        if !ecc.as_str().is_some_and(|s| valid.contains(&s)) {
            errors.push("[qr] error_correction must be 'L', 'M', 'Q' or 'H'".to_string());
        }
    }
}

/// Validate the [palette] section
fn validate_palette(config: &toml::Value, errors: &mut Vec<String>) {
    let palette = match section(config, "palette", errors) {
        Some(t) => t,
        None => return,
    };

    for key in ["background", "foreground", "screen"] {
        if let Some(value) = palette.get(key) {
            if !is_color(value) {
                errors.push(format!("[palette] {} must be a hex color like \"#FFFFFF\"", key));
            }
        }
    }
}

/// Validate the [caption] section
fn validate_caption(config: &toml::Value, errors: &mut Vec<String>) {
    let caption = match section(config, "caption", errors) {
        Some(t) => t,
        None => return,
    };

    if let Some(value) = caption.get("enabled") {
        if !value.is_bool() {
            errors.push("[caption] enabled must be true or false".to_string());
        }
    }

    if let Some(value) = caption.get("text") {
        match value.as_str() {
            Some(text) if text.len() > MAX_CAPTION_LEN => errors.push(format!(
                "[caption] text longer than {} bytes",
                MAX_CAPTION_LEN
            )),
            Some(_) => {}
            None => errors.push("[caption] text must be a string".to_string()),
        }
    }

    if let Some(value) = caption.get("scale") {
        if !value.as_integer().is_some_and(|s| (1..=255).contains(&s)) {
            errors.push("[caption] scale must be 1-255".to_string());
        }
    }

    if let Some(value) = caption.get("y") {
        if !value
            .as_integer()
            .is_some_and(|y| (i16::MIN as i64..=i16::MAX as i64).contains(&y))
        {
            errors.push("[caption] y must be an integer".to_string());
        }
    }

    if let Some(value) = caption.get("color") {
        if !is_color(value) {
            errors.push("[caption] color must be a hex color like \"#FFFFFF\"".to_string());
        }
    }
}

/// Validate the [display] section
fn validate_display(config: &toml::Value, errors: &mut Vec<String>) {
    let display = match section(config, "display", errors) {
        Some(t) => t,
        None => return,
    };

    if let Some(driver) = display.get("driver") {
        if !driver.as_str().is_some_and(|d| ["st7789", "none"].contains(&d)) {
            errors.push("[display] driver must be 'st7789' or 'none'".to_string());
        }
    }

    for key in ["width", "height"] {
        if let Some(value) = display.get(key) {
            if !value.as_integer().is_some_and(|v| (1..=u16::MAX as i64).contains(&v)) {
                errors.push(format!("[display] {} must be 1-65535", key));
            }
        }
    }

    for key in ["x_offset", "y_offset"] {
        if let Some(value) = display.get(key) {
            if !value.as_integer().is_some_and(|v| (0..=u16::MAX as i64).contains(&v)) {
                errors.push(format!("[display] {} must be 0-65535", key));
            }
        }
    }

    let is_st7789 = display
        .get("driver")
        .and_then(|d| d.as_str())
        .map_or(true, |d| d == "st7789");
    if is_st7789 {
        let get = |key: &str, default: i64| {
            display.get(key).and_then(|v| v.as_integer()).unwrap_or(default)
        };
        let (width, height) = (get("width", 320), get("height", 240));
        // Landscape panels use the controller RAM rotated
        let (ram_w, ram_h) = if width > height {
            (ST7789_RAM_HEIGHT, ST7789_RAM_WIDTH)
        } else {
            (ST7789_RAM_WIDTH, ST7789_RAM_HEIGHT)
        };
        if get("x_offset", 0) + width > ram_w || get("y_offset", 0) + height > ram_h {
            errors.push(format!(
                "[display] size plus offsets exceeds {}x{} controller RAM",
                ram_w, ram_h
            ));
        }
    }

    if let Some(value) = display.get("spi_frequency_hz") {
        if !value.as_integer().is_some_and(|v| v > 0 && v <= 62_500_000) {
            errors.push("[display] spi_frequency_hz must be 1-62500000".to_string());
        }
    }

    for key in ["invert_colors", "backlight_inverted"] {
        if let Some(value) = display.get(key) {
            if !value.is_bool() {
                errors.push(format!("[display] {} must be true or false", key));
            }
        }
    }
}

/// Check a color string: six hex digits, optionally prefixed by '#' or "0x"
fn is_color(value: &toml::Value) -> bool {
    let s = match value.as_str() {
        Some(s) => s,
        None => return false,
    };
    let hex = s
        .strip_prefix('#')
        .or_else(|| s.strip_prefix("0x"))
        .unwrap_or(s);
    hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit())
}
