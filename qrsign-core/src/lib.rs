//! Board-agnostic core logic for the QR sign firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Configuration types and the `sign.toml` parser
//! - QR matrix encoding (delegated to `qrcodegen-no-heap`)
//! - Matrix to two-color bitmap rasterization
//! - Scale-to-fit and centering arithmetic

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod bitmap;
pub mod config;
pub mod layout;
pub mod qr;
