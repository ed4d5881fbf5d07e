//! Display panel drivers

pub mod st7789;
// pub mod ili9341;  // Future

pub use st7789::{St7789, St7789Config};
