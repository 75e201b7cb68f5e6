//! Behavioural model of the PORT peripheral for host tests
use super::PinDescription;
use crate::port::{Group, PinCfg, PortRegisters, Reg, LINES_PER_GROUP};
use core::cell::Cell;

/// First 20 entries of the Arduino Zero table, plus one unusable pin
pub(crate) static ZERO_PINS: [PinDescription; 21] = [
    PinDescription::new(Group::A, 11),
    PinDescription::new(Group::A, 10),
    PinDescription::new(Group::A, 14),
    PinDescription::new(Group::A, 9),
    PinDescription::new(Group::A, 8),
    PinDescription::new(Group::A, 15),
    PinDescription::new(Group::A, 20),
    PinDescription::new(Group::A, 21),
    PinDescription::new(Group::A, 6),
    PinDescription::new(Group::A, 7),
    PinDescription::new(Group::A, 18),
    PinDescription::new(Group::A, 16),
    PinDescription::new(Group::A, 19),
    PinDescription::new(Group::A, 17),
    PinDescription::new(Group::A, 2),
    PinDescription::new(Group::B, 8),
    PinDescription::new(Group::B, 9),
    PinDescription::new(Group::A, 4),
    PinDescription::new(Group::A, 5),
    PinDescription::new(Group::B, 2),
    PinDescription::NOT_A_PORT,
];

#[derive(Default, Clone, Copy, PartialEq, Debug)]
pub(crate) struct SimGroup {
    pub dir: u32,
    pub out: u32,
    pub ctrl: u32,
    pub pincfg: [u8; LINES_PER_GROUP as usize],
    /// Lines driven by something outside the chip
    pub driven: u32,
    /// Level of the externally driven lines
    pub drive: u32,
}

impl SimGroup {
    /// Pad levels as seen by the input buffers
    fn pads(&self) -> u32 {
        let mut pads = 0;
        for num in 0..LINES_PER_GROUP {
            let mask = 1 << num;
            let cfg = self.pincfg[num as usize];
            if cfg & PinCfg::INEN == 0 {
                continue;
            }
            let level = if self.dir & mask != 0 {
                self.out & mask
            } else if self.driven & mask != 0 {
                self.drive & mask
            } else if cfg & PinCfg::PULLEN != 0 {
                self.out & mask
            } else {
                // floating
                0
            };
            pads |= level;
        }
        pads
    }
}

/// Every access goes through the counter, so tests can check that nothing
/// touched the registers at all
#[derive(Default)]
pub(crate) struct SimPort {
    groups: [SimGroup; 2],
    accesses: Cell<usize>,
}

impl SimPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(&self, group: Group) -> &SimGroup {
        &self.groups[group as usize]
    }

    pub fn accesses(&self) -> usize {
        self.accesses.get()
    }

    /// Drive a line from outside, `None` releases it
    pub fn drive(&mut self, group: Group, num: u8, level: Option<bool>) {
        let g = &mut self.groups[group as usize];
        let mask = 1 << num;
        match level {
            Some(high) => {
                g.driven |= mask;
                if high {
                    g.drive |= mask;
                } else {
                    g.drive &= !mask;
                }
            }
            None => g.driven &= !mask,
        }
    }

    fn touch(&self) {
        self.accesses.set(self.accesses.get() + 1);
    }
}

unsafe impl PortRegisters for SimPort {
    fn read(&self, group: Group, reg: Reg) -> u32 {
        self.touch();
        let g = &self.groups[group as usize];
        match reg {
            Reg::Dir | Reg::DirClr | Reg::DirSet | Reg::DirTgl => g.dir,
            Reg::Out | Reg::OutClr | Reg::OutSet | Reg::OutTgl => g.out,
            Reg::In => g.pads(),
            Reg::Ctrl => g.ctrl,
        }
    }

    fn write(&mut self, group: Group, reg: Reg, value: u32) {
        self.touch();
        let g = &mut self.groups[group as usize];
        match reg {
            Reg::Dir => g.dir = value,
            Reg::DirClr => g.dir &= !value,
            Reg::DirSet => g.dir |= value,
            Reg::DirTgl => g.dir ^= value,
            Reg::Out => g.out = value,
            Reg::OutClr => g.out &= !value,
            Reg::OutSet => g.out |= value,
            Reg::OutTgl => g.out ^= value,
            // read-only
            Reg::In => (),
            Reg::Ctrl => g.ctrl = value,
        }
    }

    fn read_pincfg(&self, group: Group, num: u8) -> u8 {
        self.touch();
        self.groups[group as usize].pincfg[num as usize]
    }

    fn write_pincfg(&mut self, group: Group, num: u8, value: u8) {
        self.touch();
        self.groups[group as usize].pincfg[num as usize] = value;
    }
}
