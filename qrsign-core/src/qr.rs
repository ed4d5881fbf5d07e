//! QR matrix generation
//!
//! Encoding is delegated to `qrcodegen-no-heap`, which works on
//! caller-provided buffers. The resulting modules are copied into a
//! fixed-size [`QrMatrix`] so the encoder's scratch buffers can be dropped
//! as soon as encoding returns.

use qrcodegen_no_heap::{QrCode, QrCodeEcc, Version};

use crate::config::{EccLevel, MAX_QR_VERSION, MIN_QR_VERSION};

/// Side length in modules of a QR symbol of the given version
pub const fn side_len(version: u8) -> usize {
    version as usize * 4 + 17
}

/// Largest supported side length
pub const MAX_SIDE: usize = side_len(MAX_QR_VERSION);

/// Scratch/output buffer length the encoder needs for `version`
const fn encoder_buffer_len(version: u8) -> usize {
    let side = side_len(version);
    (side * side + 7) / 8 + 1
}

const ENCODER_BUFFER_LEN: usize = encoder_buffer_len(MAX_QR_VERSION);

/// Packed module storage for the largest supported symbol
const MATRIX_BYTES: usize = (MAX_SIDE * MAX_SIDE + 7) / 8;

/// QR encoding errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Requested version is outside the supported range
    UnsupportedVersion(u8),
    /// Payload does not fit in the allowed versions at this ECC level
    DataTooLong,
}

impl core::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EncodeError::UnsupportedVersion(v) => write!(
                f,
                "QR version {} not supported (use {}..={})",
                v, MIN_QR_VERSION, MAX_QR_VERSION
            ),
            EncodeError::DataTooLong => write!(f, "payload too long for QR version"),
        }
    }
}

impl From<EccLevel> for QrCodeEcc {
    fn from(level: EccLevel) -> Self {
        match level {
            EccLevel::Low => QrCodeEcc::Low,
            EccLevel::Medium => QrCodeEcc::Medium,
            EccLevel::Quartile => QrCodeEcc::Quartile,
            EccLevel::High => QrCodeEcc::High,
        }
    }
}

/// Square grid of QR modules (`true` = dark)
#[derive(Clone, PartialEq, Eq)]
pub struct QrMatrix {
    version: u8,
    size: u8,
    modules: [u8; MATRIX_BYTES],
}

impl QrMatrix {
    /// Encode `payload` as a QR symbol
    ///
    /// With `Some(version)` the symbol is exactly that version and the
    /// requested ECC level is kept as-is. With `None` the smallest version
    /// up to [`MAX_QR_VERSION`] that holds the payload is used.
    pub fn encode(payload: &str, version: Option<u8>, ecc: EccLevel) -> Result<Self, EncodeError> {
        let (min, max) = match version {
            Some(v) if (MIN_QR_VERSION..=MAX_QR_VERSION).contains(&v) => (v, v),
            Some(v) => return Err(EncodeError::UnsupportedVersion(v)),
            None => (MIN_QR_VERSION, MAX_QR_VERSION),
        };

        let mut temp = [0u8; ENCODER_BUFFER_LEN];
        let mut out = [0u8; ENCODER_BUFFER_LEN];
        let code = QrCode::encode_text(
            payload,
            &mut temp,
            &mut out,
            ecc.into(),
            Version::new(min),
            Version::new(max),
            None,
            false,
        )
        .map_err(|_| EncodeError::DataTooLong)?;

        Ok(Self::from_code(&code))
    }

    /// Copy the modules out of an encoded symbol
    fn from_code(code: &QrCode<'_>) -> Self {
        let size = code.size();
        let mut matrix = Self {
            version: code.version().value(),
            size: size as u8,
            modules: [0; MATRIX_BYTES],
        };

        for y in 0..size {
            for x in 0..size {
                if code.get_module(x, y) {
                    let bit = y as usize * size as usize + x as usize;
                    matrix.modules[bit / 8] |= 1 << (bit % 8);
                }
            }
        }

        matrix
    }

    /// QR version (1-40, limited here to 1..=10)
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Width in modules
    pub fn width(&self) -> u32 {
        self.size as u32
    }

    /// Height in modules (always equal to the width)
    pub fn height(&self) -> u32 {
        self.size as u32
    }

    /// Module at (x, y); coordinates outside the symbol read as light
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width() || y >= self.height() {
            return false;
        }
        let bit = (y * self.width() + x) as usize;
        self.modules[bit / 8] & (1 << (bit % 8)) != 0
    }

    /// Number of dark modules
    pub fn dark_count(&self) -> u32 {
        self.modules.iter().map(|b| b.count_ones()).sum()
    }
}

impl core::fmt::Debug for QrMatrix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QrMatrix")
            .field("version", &self.version)
            .field("size", &self.size)
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for QrMatrix {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "QrMatrix(v{}, {}x{})", self.version, self.size, self.size);
    }
}
