//! SPI master
//!
//! Blocking transmit-only SPI on the RP2040's PL022 blocks. Panels are
//! written in short bursts between DC/CS changes, so DMA is not worth the
//! channel it would tie up.

use embassy_rp::spi::{self, Blocking, Instance, Spi};
use qrsign_hal::spi::{Phase, Polarity, SpiConfig};
use qrsign_hal::SpiBus;

/// Convert a [`SpiConfig`] into an embassy-rp SPI config
pub fn spi_config(config: &SpiConfig) -> spi::Config {
    let (polarity, phase): (Polarity, Phase) = config.mode.into();
    let mut out = spi::Config::default();
    out.frequency = config.frequency;
    out.polarity = match polarity {
        Polarity::IdleLow => spi::Polarity::IdleLow,
        Polarity::IdleHigh => spi::Polarity::IdleHigh,
    };
    out.phase = match phase {
        Phase::CaptureOnFirstTransition => spi::Phase::CaptureOnFirstTransition,
        Phase::CaptureOnSecondTransition => spi::Phase::CaptureOnSecondTransition,
    };
    out
}

/// RP2040 blocking SPI master
pub struct RpSpi<'d, T: Instance> {
    spi: Spi<'d, T, Blocking>,
}

impl<'d, T: Instance> RpSpi<'d, T> {
    /// Wrap a configured blocking SPI peripheral
    pub fn new(spi: Spi<'d, T, Blocking>) -> Self {
        Self { spi }
    }
}

impl<T: Instance> SpiBus for RpSpi<'_, T> {
    type Error = spi::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.spi.blocking_write(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.spi.flush()
    }
}
