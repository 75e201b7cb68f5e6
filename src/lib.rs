//! Wiring-style digital I/O for the Microchip SAMD21 family
//!
//! - [`port`] models the register blocks of the PORT peripheral.
//! - [`gpio`] maps logical board pin numbers onto port lines and implements
//!   configure, write and read for them.
#![no_std]

pub use atsamd21g;
pub use atsamd21g as pac;

pub mod gpio;
pub mod port;
pub mod prelude;
