//! ST7789 TFT display driver
//!
//! Driver for Sitronix ST7789 RGB panels over 4-wire SPI (SCK, MOSI, DC,
//! CS) with a hardware reset line. Pixels are streamed straight into the
//! controller's RAM as 16-bit RGB565, so there is no local frame buffer.
//!
//! # Bus protocol
//!
//! - DC low: the byte is a command
//! - DC high: the bytes are command parameters or pixel data
//! - CS is held low for the duration of each command or data burst
//!
//! Drawing is clipped to the visible area. The visible area may start at
//! an offset inside controller RAM (240x240 and 135x240 modules do this),
//! which [`St7789Config::x_offset`] and [`St7789Config::y_offset`] cover.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Dimensions, OriginDimensions, Size};
use embedded_graphics::pixelcolor::{IntoStorage, Rgb565};
use embedded_graphics::primitives::{PointsIter, Rectangle};
use embedded_graphics::Pixel;
use embedded_hal::delay::DelayNs;

use qrsign_core::config::DisplayHwConfig;
use qrsign_display::{DisplayBackend, DisplayError};
use qrsign_hal::{OutputPin, SpiBus};

/// ST7789 commands
pub mod cmd {
    pub const NOP: u8 = 0x00;
    pub const SWRESET: u8 = 0x01;
    pub const SLPIN: u8 = 0x10;
    pub const SLPOUT: u8 = 0x11;
    pub const NORON: u8 = 0x13;
    pub const INVOFF: u8 = 0x20;
    pub const INVON: u8 = 0x21;
    pub const DISPOFF: u8 = 0x28;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const RASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const MADCTL: u8 = 0x36;
    pub const COLMOD: u8 = 0x3A;
}

/// MADCTL bits
pub mod madctl {
    /// Row address order (mirror Y)
    pub const MY: u8 = 0x80;
    /// Column address order (mirror X)
    pub const MX: u8 = 0x40;
    /// Row/column exchange (landscape)
    pub const MV: u8 = 0x20;
    /// BGR subpixel order
    pub const BGR: u8 = 0x08;
}

/// COLMOD value for 16 bits per pixel (65K colors, RGB565)
const COLOR_MODE_16BIT: u8 = 0x55;

/// Pixels buffered per SPI write
const PIXEL_CHUNK: usize = 64;

/// ST7789 panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct St7789Config {
    /// Visible width in pixels
    pub width: u16,
    /// Visible height in pixels
    pub height: u16,
    /// Column offset of the visible area in controller RAM
    pub x_offset: u16,
    /// Row offset of the visible area in controller RAM
    pub y_offset: u16,
    /// Send INVON during init
    pub invert_colors: bool,
    /// Memory access control byte
    pub madctl: u8,
}

impl Default for St7789Config {
    fn default() -> Self {
        // 240x320 portrait, the controller's native orientation
        Self {
            width: 240,
            height: 320,
            x_offset: 0,
            y_offset: 0,
            invert_colors: true,
            madctl: 0,
        }
    }
}

impl From<&DisplayHwConfig> for St7789Config {
    fn from(hw: &DisplayHwConfig) -> Self {
        // Wider than tall means the panel is mounted landscape
        let madctl = if hw.width > hw.height {
            madctl::MV | madctl::MX
        } else {
            0
        };
        Self {
            width: hw.width,
            height: hw.height,
            x_offset: hw.x_offset,
            y_offset: hw.y_offset,
            invert_colors: hw.invert_colors,
            madctl,
        }
    }
}

/// ST7789 driver
pub struct St7789<SPI, DC, CS, RST, DELAY> {
    spi: SPI,
    dc: DC,
    cs: CS,
    rst: RST,
    delay: DELAY,
    config: St7789Config,
    initialized: bool,
}

impl<SPI, DC, CS, RST, DELAY> St7789<SPI, DC, CS, RST, DELAY>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new ST7789 driver
    ///
    /// The panel is not touched until [`init`](Self::init) is called.
    pub fn new(spi: SPI, dc: DC, mut cs: CS, rst: RST, delay: DELAY, config: St7789Config) -> Self {
        cs.set_high();
        Self {
            spi,
            dc,
            cs,
            rst,
            delay,
            config,
            initialized: false,
        }
    }

    /// Reset and initialize the panel
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.initialized = false;
        self.hard_reset();

        self.command(cmd::SWRESET, &[])?;
        self.delay.delay_ms(150);

        self.command(cmd::SLPOUT, &[])?;
        self.delay.delay_ms(120);

        self.command(cmd::COLMOD, &[COLOR_MODE_16BIT])?;
        self.delay.delay_ms(10);

        self.command(cmd::MADCTL, &[self.config.madctl])?;

        let inversion = if self.config.invert_colors {
            cmd::INVON
        } else {
            cmd::INVOFF
        };
        self.command(inversion, &[])?;

        self.command(cmd::NORON, &[])?;
        self.delay.delay_ms(10);

        self.command(cmd::DISPON, &[])?;
        self.delay.delay_ms(10);

        self.initialized = true;
        Ok(())
    }

    /// Put the panel to sleep; [`init`](Self::init) wakes it again
    pub fn sleep(&mut self) -> Result<(), DisplayError> {
        self.command(cmd::DISPOFF, &[])?;
        self.command(cmd::SLPIN, &[])?;
        self.delay.delay_ms(5);
        self.initialized = false;
        Ok(())
    }

    /// Set the RAM write window (inclusive, visible coordinates) and
    /// start a memory write
    pub fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        if x0 > x1 || y0 > y1 || x1 >= self.config.width || y1 >= self.config.height {
            return Err(DisplayError::InvalidCoordinates);
        }

        let shift = |v: u16, offset: u16| {
            v.checked_add(offset)
                .ok_or(DisplayError::InvalidCoordinates)
        };
        let x0 = shift(x0, self.config.x_offset)?;
        let x1 = shift(x1, self.config.x_offset)?;
        let y0 = shift(y0, self.config.y_offset)?;
        let y1 = shift(y1, self.config.y_offset)?;

        self.command(cmd::CASET, &address_range(x0, x1))?;
        self.command(cmd::RASET, &address_range(y0, y1))?;
        self.command(cmd::RAMWR, &[])
    }

    fn hard_reset(&mut self) {
        self.rst.set_high();
        self.delay.delay_ms(1);
        self.rst.set_low();
        self.delay.delay_ms(10);
        self.rst.set_high();
        self.delay.delay_ms(120);
    }

    /// Send a command followed by its parameters
    fn command(&mut self, command: u8, params: &[u8]) -> Result<(), DisplayError> {
        self.cs.set_low();
        let result = self.command_selected(command, params);
        self.cs.set_high();
        result
    }

    fn command_selected(&mut self, command: u8, params: &[u8]) -> Result<(), DisplayError> {
        self.dc.set_low();
        self.write(&[command])?;
        if !params.is_empty() {
            self.dc.set_high();
            self.write(params)?;
        }
        Ok(())
    }

    /// Stream pixels into the current window
    fn write_pixels<I>(&mut self, colors: I) -> Result<(), DisplayError>
    where
        I: IntoIterator<Item = Rgb565>,
    {
        self.cs.set_low();
        self.dc.set_high();
        let result = self.write_pixels_selected(colors);
        self.cs.set_high();
        result
    }

    fn write_pixels_selected<I>(&mut self, colors: I) -> Result<(), DisplayError>
    where
        I: IntoIterator<Item = Rgb565>,
    {
        let mut buf = [0u8; PIXEL_CHUNK * 2];
        let mut len = 0;
        for color in colors {
            let [hi, lo] = color.into_storage().to_be_bytes();
            buf[len] = hi;
            buf[len + 1] = lo;
            len += 2;
            if len == buf.len() {
                self.spi
                    .write(&buf)
                    .map_err(|_| DisplayError::Communication)?;
                len = 0;
            }
        }
        if len > 0 {
            self.spi
                .write(&buf[..len])
                .map_err(|_| DisplayError::Communication)?;
        }
        self.spi.flush().map_err(|_| DisplayError::Communication)
    }

    /// Write bytes and wait for them to leave the bus before DC or CS
    /// can change
    fn write(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        self.spi
            .write(data)
            .map_err(|_| DisplayError::Communication)?;
        self.spi.flush().map_err(|_| DisplayError::Communication)
    }

    /// Set the window to a clipped, non-empty rectangle
    fn set_window_rect(&mut self, area: &Rectangle) -> Result<(), DisplayError> {
        // Only called with areas clipped to the visible bounds
        let x0 = area.top_left.x as u16;
        let y0 = area.top_left.y as u16;
        let x1 = x0 + area.size.width as u16 - 1;
        let y1 = y0 + area.size.height as u16 - 1;
        self.set_window(x0, y0, x1, y1)
    }
}

/// CASET/RASET parameter bytes for an inclusive range
fn address_range(start: u16, end: u16) -> [u8; 4] {
    let [s_hi, s_lo] = start.to_be_bytes();
    let [e_hi, e_lo] = end.to_be_bytes();
    [s_hi, s_lo, e_hi, e_lo]
}

impl<SPI, DC, CS, RST, DELAY> OriginDimensions for St7789<SPI, DC, CS, RST, DELAY> {
    fn size(&self) -> Size {
        Size::new(u32::from(self.config.width), u32::from(self.config.height))
    }
}

impl<SPI, DC, CS, RST, DELAY> DrawTarget for St7789<SPI, DC, CS, RST, DELAY>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    type Color = Rgb565;
    type Error = DisplayError;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if !bounds.contains(point) {
                continue;
            }
            let (x, y) = (point.x as u16, point.y as u16);
            self.set_window(x, y, x, y)?;
            self.write_pixels([color])?;
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        let clipped = area.intersection(&self.bounding_box());
        if clipped.is_zero_sized() {
            return Ok(());
        }

        self.set_window_rect(&clipped)?;
        if clipped == *area {
            let count = area.size.width as usize * area.size.height as usize;
            self.write_pixels(colors.into_iter().take(count))
        } else {
            // Drop the colors of pixels that fall outside the panel
            let visible = area
                .points()
                .zip(colors)
                .filter(|(point, _)| clipped.contains(*point))
                .map(|(_, color)| color);
            self.write_pixels(visible)
        }
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        let clipped = area.intersection(&self.bounding_box());
        if clipped.is_zero_sized() {
            return Ok(());
        }

        let count = clipped.size.width as usize * clipped.size.height as usize;
        self.set_window_rect(&clipped)?;
        self.write_pixels(core::iter::repeat(color).take(count))
    }
}

impl<SPI, DC, CS, RST, DELAY> DisplayBackend for St7789<SPI, DC, CS, RST, DELAY>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    fn is_ready(&self) -> bool {
        self.initialized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::geometry::Point;
    use embedded_graphics::pixelcolor::RgbColor;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Bus activity in order
    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Dc(bool),
        Cs(bool),
        Rst(bool),
        Write(Vec<u8>),
        DelayNs(u32),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    struct MockSpi {
        log: Log,
        fail: bool,
    }

    impl SpiBus for MockSpi {
        type Error = ();

        fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            if self.fail {
                return Err(());
            }
            self.log.borrow_mut().push(Event::Write(data.to_vec()));
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    struct MockPin {
        log: Log,
        event: fn(bool) -> Event,
        high: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
            self.log.borrow_mut().push((self.event)(true));
        }

        fn set_low(&mut self) {
            self.high = false;
            self.log.borrow_mut().push((self.event)(false));
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    struct MockDelay {
        log: Log,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.log.borrow_mut().push(Event::DelayNs(ns));
        }
    }

    type Driver = St7789<MockSpi, MockPin, MockPin, MockPin, MockDelay>;

    fn driver(config: St7789Config) -> (Driver, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let pin = |event: fn(bool) -> Event| MockPin {
            log: log.clone(),
            event,
            high: false,
        };
        let driver = St7789::new(
            MockSpi {
                log: log.clone(),
                fail: false,
            },
            pin(Event::Dc),
            pin(Event::Cs),
            pin(Event::Rst),
            MockDelay { log: log.clone() },
            config,
        );
        (driver, log)
    }

    fn small() -> St7789Config {
        St7789Config {
            width: 4,
            height: 3,
            x_offset: 0,
            y_offset: 0,
            invert_colors: false,
            madctl: 0,
        }
    }

    /// Split the log into (command, parameter bytes) pairs and pixel bursts
    ///
    /// Writes with DC low are commands; writes with DC high are appended
    /// to the preceding command's data.
    fn transactions(log: &Log) -> Vec<(u8, Vec<u8>)> {
        let mut dc = false;
        let mut out: Vec<(u8, Vec<u8>)> = Vec::new();
        for event in log.borrow().iter() {
            match event {
                Event::Dc(level) => dc = *level,
                Event::Write(bytes) if !dc => out.push((bytes[0], Vec::new())),
                Event::Write(bytes) => {
                    if let Some(last) = out.last_mut() {
                        last.1.extend_from_slice(bytes);
                    }
                }
                _ => {}
            }
        }
        out
    }

    fn commands(log: &Log) -> Vec<u8> {
        transactions(log).into_iter().map(|(c, _)| c).collect()
    }

    #[test]
    fn test_init_sequence() {
        let mut config = small();
        config.invert_colors = true;
        config.madctl = madctl::MV | madctl::MX;
        let (mut display, log) = driver(config);

        assert!(!display.is_ready());
        display.init().unwrap();
        assert!(display.is_ready());

        assert_eq!(
            commands(&log),
            vec![
                cmd::SWRESET,
                cmd::SLPOUT,
                cmd::COLMOD,
                cmd::MADCTL,
                cmd::INVON,
                cmd::NORON,
                cmd::DISPON
            ]
        );
        let txs = transactions(&log);
        assert_eq!(txs[2].1, vec![COLOR_MODE_16BIT]);
        assert_eq!(txs[3].1, vec![0x60]);
    }

    #[test]
    fn test_init_pulses_reset_first() {
        let (mut display, log) = driver(small());
        display.init().unwrap();

        let resets: Vec<bool> = log
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Rst(level) => Some(*level),
                _ => None,
            })
            .collect();
        assert_eq!(resets, vec![true, false, true]);

        // Reset finishes before the first byte goes out
        let first_write = log
            .borrow()
            .iter()
            .position(|e| matches!(e, Event::Write(_)))
            .unwrap();
        let last_reset = log
            .borrow()
            .iter()
            .rposition(|e| matches!(e, Event::Rst(_)))
            .unwrap();
        assert!(last_reset < first_write);
    }

    #[test]
    fn test_no_inversion() {
        let (mut display, log) = driver(small());
        display.init().unwrap();
        let cmds = commands(&log);
        assert!(cmds.contains(&cmd::INVOFF));
        assert!(!cmds.contains(&cmd::INVON));
    }

    #[test]
    fn test_cs_released_after_each_transfer() {
        let (mut display, log) = driver(small());
        display.init().unwrap();
        let last_cs = log
            .borrow()
            .iter()
            .rev()
            .find_map(|e| match e {
                Event::Cs(level) => Some(*level),
                _ => None,
            })
            .unwrap();
        assert!(last_cs);
    }

    #[test]
    fn test_draw_before_init_fails() {
        let (mut display, log) = driver(small());
        assert_eq!(
            display.fill_solid(&Rectangle::new(Point::zero(), Size::new(1, 1)), Rgb565::RED),
            Err(DisplayError::NotInitialized)
        );
        assert_eq!(
            display.draw_iter([Pixel(Point::zero(), Rgb565::RED)]),
            Err(DisplayError::NotInitialized)
        );
        assert!(commands(&log).is_empty());
    }

    #[test]
    fn test_set_window_applies_offsets() {
        let mut config = small();
        config.x_offset = 40;
        config.y_offset = 0x0105;
        let (mut display, log) = driver(config);
        display.init().unwrap();
        log.borrow_mut().clear();

        display.set_window(1, 0, 3, 2).unwrap();
        let txs = transactions(&log);
        assert_eq!(txs[0], (cmd::CASET, vec![0, 41, 0, 43]));
        assert_eq!(txs[1], (cmd::RASET, vec![0x01, 0x05, 0x01, 0x07]));
        assert_eq!(txs[2], (cmd::RAMWR, vec![]));
    }

    #[test]
    fn test_set_window_rejects_out_of_range() {
        let (mut display, _log) = driver(small());
        display.init().unwrap();
        assert_eq!(
            display.set_window(0, 0, 4, 0),
            Err(DisplayError::InvalidCoordinates)
        );
        assert_eq!(
            display.set_window(2, 0, 1, 0),
            Err(DisplayError::InvalidCoordinates)
        );
    }

    #[test]
    fn test_offset_overflow_is_rejected() {
        let hw = DisplayHwConfig {
            x_offset: u16::MAX,
            ..DisplayHwConfig::default()
        };
        let (mut display, log) = driver(St7789Config::from(&hw));
        display.init().unwrap();
        log.borrow_mut().clear();

        assert_eq!(
            display.fill_solid(&Rectangle::new(Point::new(10, 0), Size::new(1, 1)), Rgb565::RED),
            Err(DisplayError::InvalidCoordinates)
        );
        assert_eq!(
            display.set_window(1, 0, 1, 0),
            Err(DisplayError::InvalidCoordinates)
        );
        assert!(commands(&log).is_empty());
    }

    #[test]
    fn test_fill_solid_streams_big_endian_pixels() {
        let (mut display, log) = driver(small());
        display.init().unwrap();
        log.borrow_mut().clear();

        display
            .fill_solid(&Rectangle::new(Point::new(1, 1), Size::new(2, 1)), Rgb565::RED)
            .unwrap();

        let txs = transactions(&log);
        assert_eq!(txs[0], (cmd::CASET, vec![0, 1, 0, 2]));
        assert_eq!(txs[1], (cmd::RASET, vec![0, 1, 0, 1]));
        assert_eq!(txs[2], (cmd::RAMWR, vec![0xF8, 0x00, 0xF8, 0x00]));
    }

    #[test]
    fn test_fill_solid_is_clipped() {
        let (mut display, log) = driver(small());
        display.init().unwrap();
        log.borrow_mut().clear();

        display
            .fill_solid(&Rectangle::new(Point::new(-2, 2), Size::new(4, 4)), Rgb565::WHITE)
            .unwrap();

        let txs = transactions(&log);
        assert_eq!(txs[0], (cmd::CASET, vec![0, 0, 0, 1]));
        assert_eq!(txs[1], (cmd::RASET, vec![0, 2, 0, 2]));
        assert_eq!(txs[2].1.len(), 4);

        // Entirely off screen draws nothing
        log.borrow_mut().clear();
        display
            .fill_solid(&Rectangle::new(Point::new(10, 10), Size::new(2, 2)), Rgb565::WHITE)
            .unwrap();
        assert!(commands(&log).is_empty());
    }

    #[test]
    fn test_fill_contiguous_drops_hidden_pixels() {
        let (mut display, log) = driver(small());
        display.init().unwrap();
        log.borrow_mut().clear();

        // 2x2 area hanging off the right edge: only the left column shows
        let area = Rectangle::new(Point::new(3, 0), Size::new(2, 2));
        let colors = [Rgb565::RED, Rgb565::GREEN, Rgb565::BLUE, Rgb565::WHITE];
        display.fill_contiguous(&area, colors).unwrap();

        let txs = transactions(&log);
        assert_eq!(txs[0], (cmd::CASET, vec![0, 3, 0, 3]));
        assert_eq!(txs[2], (cmd::RAMWR, vec![0xF8, 0x00, 0x00, 0x1F]));
    }

    #[test]
    fn test_large_fill_is_chunked() {
        let mut config = small();
        config.width = 100;
        config.height = 2;
        let (mut display, log) = driver(config);
        display.init().unwrap();
        log.borrow_mut().clear();

        display.clear(Rgb565::BLUE).unwrap();
        let sizes: Vec<usize> = log
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Write(bytes) if bytes.len() > 4 => Some(bytes.len()),
                _ => None,
            })
            .collect();
        assert_eq!(sizes, vec![128, 128, 128, 16]);
    }

    #[test]
    fn test_draw_iter_skips_off_screen() {
        let (mut display, log) = driver(small());
        display.init().unwrap();
        log.borrow_mut().clear();

        display
            .draw_iter([
                Pixel(Point::new(-1, 0), Rgb565::RED),
                Pixel(Point::new(2, 1), Rgb565::GREEN),
                Pixel(Point::new(4, 0), Rgb565::RED),
            ])
            .unwrap();

        let txs = transactions(&log);
        assert_eq!(txs.len(), 3);
        assert_eq!(txs[0], (cmd::CASET, vec![0, 2, 0, 2]));
        assert_eq!(txs[2], (cmd::RAMWR, vec![0x07, 0xE0]));
    }

    #[test]
    fn test_spi_error_is_communication() {
        let (mut display, _log) = driver(small());
        display.spi.fail = true;
        assert_eq!(display.init(), Err(DisplayError::Communication));
        assert!(!display.is_ready());
        // Chip select released even though the write failed
        assert!(display.cs.is_set_high());
    }

    #[test]
    fn test_sleep_requires_reinit() {
        let (mut display, log) = driver(small());
        display.init().unwrap();
        display.sleep().unwrap();
        assert!(!display.is_ready());
        let cmds = commands(&log);
        assert_eq!(&cmds[cmds.len() - 2..], &[cmd::DISPOFF, cmd::SLPIN]);
    }

    #[test]
    fn test_config_from_hardware() {
        let hw = DisplayHwConfig::default();
        let config = St7789Config::from(&hw);
        assert_eq!(config.width, 320);
        assert_eq!(config.height, 240);
        assert_eq!(config.madctl, madctl::MV | madctl::MX);
        assert!(config.invert_colors);

        let portrait = DisplayHwConfig {
            width: 240,
            height: 320,
            ..DisplayHwConfig::default()
        };
        assert_eq!(St7789Config::from(&portrait).madctl, 0);
    }

    #[test]
    fn test_size() {
        let (display, _log) = driver(small());
        assert_eq!(display.size(), Size::new(4, 3));
    }
}
