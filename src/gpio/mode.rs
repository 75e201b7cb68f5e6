//! Logical pin modes and levels
//!
//! The raw constants mirror the numeric values used by wiring-style firmware
//! for the SAMD core, so integer arguments from ported code can be passed
//! through [`Gpio::configure_raw`](super::Gpio::configure_raw) and
//! [`Gpio::write_raw`](super::Gpio::write_raw) unchanged.
use super::PinError;
use core::ops::Not;

pub const INPUT: u32 = 0x0;
pub const OUTPUT: u32 = 0x1;
pub const INPUT_PULLUP: u32 = 0x2;
pub const INPUT_PULLDOWN: u32 = 0x3;

pub const LOW: u32 = 0x0;
pub const HIGH: u32 = 0x1;

//==================================================================================================
//  PinMode
//==================================================================================================

/// Value-level `enum` of the supported line configurations
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PinMode {
    /// Floating input
    Input,
    /// Input with the pull-up resistor enabled
    InputPullUp,
    /// Input with the pull-down resistor enabled
    InputPullDown,
    /// Push-pull output. The input buffer stays enabled, so the driven level
    /// can be read back.
    Output,
}

impl TryFrom<u32> for PinMode {
    type Error = PinError;

    fn try_from(mode: u32) -> Result<Self, PinError> {
        match mode {
            INPUT => Ok(PinMode::Input),
            OUTPUT => Ok(PinMode::Output),
            INPUT_PULLUP => Ok(PinMode::InputPullUp),
            INPUT_PULLDOWN => Ok(PinMode::InputPullDown),
            other => Err(PinError::UnknownMode(other)),
        }
    }
}

impl From<PinMode> for u32 {
    fn from(mode: PinMode) -> Self {
        match mode {
            PinMode::Input => INPUT,
            PinMode::Output => OUTPUT,
            PinMode::InputPullUp => INPUT_PULLUP,
            PinMode::InputPullDown => INPUT_PULLDOWN,
        }
    }
}

//==================================================================================================
//  PinState
//==================================================================================================

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PinState {
    Low = 0,
    High = 1,
}

/// Zero is [`PinState::Low`], anything else is [`PinState::High`]
impl From<u32> for PinState {
    #[inline]
    fn from(value: u32) -> Self {
        if value == LOW {
            PinState::Low
        } else {
            PinState::High
        }
    }
}

impl From<bool> for PinState {
    #[inline]
    fn from(high: bool) -> Self {
        if high {
            PinState::High
        } else {
            PinState::Low
        }
    }
}

impl From<PinState> for u32 {
    #[inline]
    fn from(state: PinState) -> Self {
        state as u32
    }
}

impl From<PinState> for bool {
    #[inline]
    fn from(state: PinState) -> Self {
        state == PinState::High
    }
}

impl Not for PinState {
    type Output = PinState;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            PinState::Low => PinState::High,
            PinState::High => PinState::Low,
        }
    }
}
