//! Pin descriptor table
//!
//! Board support code owns a static array of [`PinDescription`]s, indexed by
//! the logical pin number printed on the board. [`PinTable`] resolves such a
//! number into a [`LineId`], the only way to obtain one outside this crate.
use super::PinError;
use crate::port::{Group, LINES_PER_GROUP};

/// Physical location of one logical pin
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PinDescription {
    /// `None` if the pin can not be used as a digital I/O line
    pub port: Option<Group>,
    /// Bit position inside the port group
    pub pin: u8,
}

impl PinDescription {
    pub const NOT_A_PORT: PinDescription = PinDescription {
        port: None,
        pin: 0,
    };

    #[inline]
    pub const fn new(port: Group, pin: u8) -> Self {
        PinDescription {
            port: Some(port),
            pin,
        }
    }
}

/// Validated line identifier
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct LineId {
    group: Group,
    num: u8,
}

impl LineId {
    #[inline]
    pub fn group(&self) -> Group {
        self.group
    }

    #[inline]
    pub fn num(&self) -> u8 {
        self.num
    }

    /// Mask selecting this line in the 32-bit group registers
    #[inline]
    pub fn mask(&self) -> u32 {
        1 << self.num
    }
}

/// Borrowed view of a board's pin descriptor table
#[derive(Debug, Clone, Copy)]
pub struct PinTable<'a> {
    pins: &'a [PinDescription],
}

impl<'a> PinTable<'a> {
    #[inline]
    pub const fn new(pins: &'a [PinDescription]) -> Self {
        PinTable { pins }
    }

    /// Number of logical pins
    #[inline]
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    #[inline]
    pub fn get(&self, pin: u32) -> Option<&'a PinDescription> {
        usize::try_from(pin).ok().and_then(|idx| self.pins.get(idx))
    }

    /// Resolve a logical pin number into a port group and bit
    pub fn resolve(&self, pin: u32) -> Result<LineId, PinError> {
        let desc = self.get(pin).ok_or(PinError::OutOfRange(pin))?;
        let group = desc.port.ok_or(PinError::NotAPort(pin))?;
        if desc.pin >= LINES_PER_GROUP {
            return Err(PinError::InvalidBit(pin));
        }
        Ok(LineId {
            group,
            num: desc.pin,
        })
    }
}
