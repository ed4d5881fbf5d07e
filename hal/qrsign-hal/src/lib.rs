//! qrsign Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the panel drivers are written
//! against. Chip-specific HALs (currently RP2040) implement them, so the
//! drivers can be unit tested on the host with mock buses.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Drivers (qrsign-drivers: ST7789, ...)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  qrsign-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!           ┌───────────────────┐
//!           │ qrsign-hal-rp2040 │
//!           └───────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital outputs (DC, CS, reset, backlight)
//! - [`spi::SpiBus`] - SPI bus operations

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use spi::SpiBus;
