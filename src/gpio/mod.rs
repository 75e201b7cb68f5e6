//! # GPIO module
//!
//! Wiring-style digital I/O on top of the SAMD21 PORT peripheral.
//!
//! Pins are addressed by their logical number, as printed on the board. A
//! [`PinTable`] supplied by board support code maps each number to a port
//! group and bit. The three operations of [`Gpio`] follow the conventions of
//! wiring-style firmware:
//!
//! - [`Gpio::configure`] selects input, input with pull-up or pull-down, or
//!   output.
//! - [`Gpio::write`] drives an output, or selects the pull resistor of an
//!   input.
//! - [`Gpio::read`] returns the live pad level.
//!
//! A logical pin which does not resolve to a port line is silently ignored:
//! `configure` and `write` do nothing and `read` returns [`PinState::Low`]. No
//! register is accessed in that case. Callers which want to know about the
//! failure use [`Gpio::line`], which returns a [`PinError`] instead.
//!
//! The driver does not lock. All mutating operations take `&mut self`, so
//! sharing a [`Gpio`] between thread mode and an interrupt handler requires
//! the caller to wrap it, for example in a
//! [`cortex_m::interrupt::Mutex`].
//!
//! ```ignore
//! static PINS: [PinDescription; 14] = [/* board table */];
//!
//! let dp = pac::Peripherals::take().unwrap();
//! let mut gpio = Gpio::new(Port::new(dp.PORT), PinTable::new(&PINS));
//! gpio.configure(13, PinMode::Output);
//! gpio.write(13, PinState::High);
//! assert_eq!(gpio.read(13), PinState::High);
//! ```
use crate::port::PortRegisters;

pub mod line;
pub use line::*;

pub mod mode;
pub use mode::*;

pub mod table;
pub use table::*;

mod reg;

#[cfg(test)]
pub(crate) mod sim;

//==================================================================================================
//  Errors
//==================================================================================================

/// GPIO error type
///
/// Only reported by the lookup functions. The wiring operations of [`Gpio`]
/// swallow it.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PinError {
    /// The logical pin number is past the end of the pin table
    OutOfRange(u32),
    /// The pin exists but is not connected to a port line
    NotAPort(u32),
    /// The pin table names a bit outside of the port group
    InvalidBit(u32),
    /// The raw mode value is not one of the known modes
    UnknownMode(u32),
}

//==================================================================================================
//  Gpio
//==================================================================================================

/// Digital I/O driver for all lines of a board
pub struct Gpio<'a, P: PortRegisters> {
    port: P,
    table: PinTable<'a>,
}

impl<'a, P: PortRegisters> Gpio<'a, P> {
    #[inline]
    pub fn new(port: P, table: PinTable<'a>) -> Self {
        Gpio { port, table }
    }

    /// Release the port
    #[inline]
    pub fn free(self) -> P {
        self.port
    }

    /// Borrow a single validated line
    pub fn line(&mut self, pin: u32) -> Result<Line<'_, P>, PinError> {
        let id = self.table.resolve(pin)?;
        Ok(Line::new(&mut self.port, id))
    }

    /// Configure the mode of a pin. Does nothing for unusable pins.
    pub fn configure(&mut self, pin: u32, mode: PinMode) {
        if let Ok(id) = self.table.resolve(pin) {
            id.enable_sampling(&mut self.port);
            id.change_mode(&mut self.port, mode);
        }
    }

    /// Like [`Self::configure`], with a raw mode value.
    ///
    /// Continuous sampling is enabled even if `mode` is not a known mode. The
    /// rest of the line configuration is left alone in that case.
    pub fn configure_raw(&mut self, pin: u32, mode: u32) {
        let id = match self.table.resolve(pin) {
            Ok(id) => id,
            Err(_) => return,
        };
        id.enable_sampling(&mut self.port);
        if let Ok(mode) = PinMode::try_from(mode) {
            id.change_mode(&mut self.port, mode);
        }
    }

    /// Write the output latch of a pin. Does nothing for unusable pins.
    ///
    /// If the line is currently an input, `Low` also disables its pull
    /// resistor and `High` enables it. The latch then selects pull-up or
    /// pull-down.
    pub fn write(&mut self, pin: u32, state: PinState) {
        if let Ok(id) = self.table.resolve(pin) {
            id.write_pin(&mut self.port, state);
        }
    }

    /// Like [`Self::write`]. Zero is low, every other value high.
    #[inline]
    pub fn write_raw(&mut self, pin: u32, value: u32) {
        self.write(pin, value.into());
    }

    /// Read the pad level of a pin. Unusable pins read low.
    pub fn read(&self, pin: u32) -> PinState {
        match self.table.resolve(pin) {
            Ok(id) => id.read_pin(&self.port),
            Err(_) => PinState::Low,
        }
    }
}
