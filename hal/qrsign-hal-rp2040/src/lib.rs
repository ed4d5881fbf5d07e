//! RP2040-specific HAL for the sign firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `qrsign-hal` traits on top of `embassy-rp`:
//!
//! - Push-pull GPIO outputs for the panel control lines
//! - Blocking SPI master for the panel bus

#![no_std]

pub mod gpio;
pub mod spi;

pub use gpio::RpOutput;
pub use spi::{spi_config, RpSpi};
