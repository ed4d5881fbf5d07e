//! Display abstraction traits and the sign renderer
//!
//! This crate provides:
//! - `DisplayBackend` trait for pixel displays (SPI TFTs, frame buffers)
//! - A small scene hierarchy: `Scene` > `Group` > `TileGrid` / `Label`
//! - `Scaled`, an integer-magnifying `DrawTarget` adapter used by groups
//! - `FrameBuffer`, an in-memory backend for previews and tests
//! - `present`, the boot pipeline from `SignConfig` to pixels
//!
//! # Architecture
//!
//! Panel drivers (see `qrsign-drivers`) implement `DisplayBackend`. The
//! firmware acquires one at boot and passes it to `present`; this crate
//! never touches hardware directly.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod framebuffer;
pub mod scaled;
pub mod scene;
pub mod sign;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use framebuffer::FrameBuffer;
pub use scaled::Scaled;
pub use scene::{Element, Group, Label, Scene, SceneError, TileGrid};
pub use sign::{present, Presentation, SignError, DISPLAY_MISSING_MESSAGE};
