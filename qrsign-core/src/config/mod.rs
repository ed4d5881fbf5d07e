//! Configuration types and parsing
//!
//! The firmware embeds a `sign.toml` and parses it at boot with the
//! no_std parser in [`toml`].

pub mod hardware;
pub mod toml;
pub mod types;

pub use hardware::*;
pub use toml::{parse_config, ParseError};
pub use types::*;
