use super::{LineId, PinMode, PinState};
use crate::port::{PinCfg, PortRegisters, Reg};

//==================================================================================================
//  ModeFields
//==================================================================================================

/// Collect all fields needed to set a [`PinMode`]
struct ModeFields {
    /// true for output
    dir: bool,
    /// Whole `PINCFG` byte, which also clears `PMUXEN` and `DRVSTR`
    pincfg: u8,
    /// Pull direction for inputs, `None` to leave `OUT` alone
    pull_up: Option<bool>,
}

impl From<PinMode> for ModeFields {
    #[inline]
    fn from(mode: PinMode) -> Self {
        match mode {
            PinMode::Input => ModeFields {
                dir: false,
                pincfg: PinCfg::INEN,
                pull_up: None,
            },
            PinMode::InputPullUp => ModeFields {
                dir: false,
                pincfg: PinCfg::INEN | PinCfg::PULLEN,
                pull_up: Some(true),
            },
            PinMode::InputPullDown => ModeFields {
                dir: false,
                pincfg: PinCfg::INEN | PinCfg::PULLEN,
                pull_up: Some(false),
            },
            // Input buffer stays on so the output level can be read back
            PinMode::Output => ModeFields {
                dir: true,
                pincfg: PinCfg::INEN,
                pull_up: None,
            },
        }
    }
}

//==================================================================================================
// Register Interface
//==================================================================================================

/// Register level operations on one validated line. Every function only
/// touches the bit or the `PINCFG` byte belonging to `self`.
impl LineId {
    /// Turn on continuous sampling for this line
    #[inline]
    pub(super) fn enable_sampling<P: PortRegisters>(self, port: &mut P) {
        port.enable_sampling(self.group(), self.mask());
    }

    /// Change the line configuration
    #[inline]
    pub(super) fn change_mode<P: PortRegisters>(self, port: &mut P, mode: PinMode) {
        let ModeFields {
            dir,
            pincfg,
            pull_up,
        } = mode.into();
        let (group, mask) = (self.group(), self.mask());
        port.write_pincfg(group, self.num(), pincfg);
        if dir {
            port.set_dir(group, mask);
        } else {
            port.clear_dir(group, mask);
        }
        match pull_up {
            Some(true) => port.set_out(group, mask),
            Some(false) => port.clear_out(group, mask),
            None => (),
        }
    }

    #[inline]
    pub(super) fn is_output<P: PortRegisters>(self, port: &P) -> bool {
        port.read(self.group(), Reg::Dir) & self.mask() != 0
    }

    /// Drive the output latch.
    ///
    /// On an input line this also selects the pull resistor: `Low` disables
    /// it, `High` enables it, and the latch picks pull-up or pull-down.
    #[inline]
    pub(super) fn write_pin<P: PortRegisters>(self, port: &mut P, state: PinState) {
        let (group, mask) = (self.group(), self.mask());
        if !self.is_output(&*port) {
            let cfg = port.read_pincfg(group, self.num());
            let cfg = match state {
                PinState::Low => cfg & !PinCfg::PULLEN,
                PinState::High => cfg | PinCfg::PULLEN,
            };
            port.write_pincfg(group, self.num(), cfg);
        }
        match state {
            PinState::Low => port.clear_out(group, mask),
            PinState::High => port.set_out(group, mask),
        }
    }

    /// Level currently seen on the pad
    #[inline]
    pub(super) fn read_pin<P: PortRegisters>(self, port: &P) -> PinState {
        (port.read(self.group(), Reg::In) & self.mask() != 0).into()
    }

    /// Level stored in the output latch
    #[inline]
    pub(super) fn read_out<P: PortRegisters>(self, port: &P) -> PinState {
        (port.read(self.group(), Reg::Out) & self.mask() != 0).into()
    }

    /// Flip the output latch. Pull configuration is left alone, so on an
    /// input with `PULLEN` set this swaps pull-up and pull-down.
    #[inline]
    pub(super) fn toggle<P: PortRegisters>(self, port: &mut P) {
        // OUTTGL ignores zero bits
        port.write(self.group(), Reg::OutTgl, self.mask());
    }
}
