//! Hardware driver implementations
//!
//! This crate provides concrete display drivers written against the
//! traits in `qrsign-hal`, exposed to the sign renderer through
//! [`qrsign_display::DisplayBackend`]:
//!
//! - Display panels (ST7789 over 4-wire SPI)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
