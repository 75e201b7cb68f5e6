//! # Borrowed handle for a single line
//!
//! A [`Line`] is obtained from [`Gpio::line`](super::Gpio::line) after the
//! logical pin number was resolved successfully. It exclusively borrows the
//! port for as long as it lives, and it implements the embedded HAL GPIO
//! traits so it can be handed to generic drivers.
//!
//! ```ignore
//! let mut led = gpio.line(13)?;
//! led.configure(PinMode::Output);
//! led.set_high().ok();
//! ```
use super::{LineId, PinMode, PinState};
use crate::port::PortRegisters;
use core::convert::Infallible;
use embedded_hal::digital::v2::{InputPin, OutputPin, StatefulOutputPin, ToggleableOutputPin};

pub struct Line<'a, P: PortRegisters> {
    port: &'a mut P,
    id: LineId,
}

impl<'a, P: PortRegisters> Line<'a, P> {
    #[inline]
    pub(super) fn new(port: &'a mut P, id: LineId) -> Self {
        Line { port, id }
    }

    /// Return a copy of the line ID
    #[inline]
    pub fn id(&self) -> LineId {
        self.id
    }

    /// Enable continuous sampling and apply `mode`
    #[inline]
    pub fn configure(&mut self, mode: PinMode) {
        self.id.enable_sampling(&mut *self.port);
        self.id.change_mode(&mut *self.port, mode);
    }

    /// Set the output latch, or the pull resistor if the line is an input
    ///
    /// On an input, [`ToggleableOutputPin::toggle`] only flips the latch.
    /// With the pull resistor enabled this swaps pull-up and pull-down.
    #[inline]
    pub fn write(&mut self, state: PinState) {
        self.id.write_pin(&mut *self.port, state);
    }

    #[inline]
    pub fn read(&self) -> PinState {
        self.id.read_pin(&*self.port)
    }

    #[inline]
    pub fn is_output(&self) -> bool {
        self.id.is_output(&*self.port)
    }
}

//==================================================================================================
// Embedded HAL traits
//==================================================================================================

impl<P: PortRegisters> OutputPin for Line<'_, P> {
    type Error = Infallible;
    #[inline]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(PinState::High);
        Ok(())
    }
    #[inline]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(PinState::Low);
        Ok(())
    }
}

impl<P: PortRegisters> StatefulOutputPin for Line<'_, P> {
    #[inline]
    fn is_set_high(&self) -> Result<bool, Self::Error> {
        Ok(self.id.read_out(&*self.port) == PinState::High)
    }
    #[inline]
    fn is_set_low(&self) -> Result<bool, Self::Error> {
        self.is_set_high().map(|v| !v)
    }
}

/// Flips `OUT` without looking at the direction. An input with its pull
/// resistor enabled changes between pull-up and pull-down.
impl<P: PortRegisters> ToggleableOutputPin for Line<'_, P> {
    type Error = Infallible;
    #[inline]
    fn toggle(&mut self) -> Result<(), Self::Error> {
        self.id.toggle(&mut *self.port);
        Ok(())
    }
}

impl<P: PortRegisters> InputPin for Line<'_, P> {
    type Error = Infallible;
    #[inline]
    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(self.read() == PinState::High)
    }
    #[inline]
    fn is_low(&self) -> Result<bool, Self::Error> {
        self.is_high().map(|v| !v)
    }
}
