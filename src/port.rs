//! # Register model of the SAMD21 PORT peripheral
//!
//! The PORT peripheral consists of up to two groups (`PA` and `PB`) of 32
//! lines each. The PAC only describes the first group, so the register block
//! of a single group is rebuilt here from the PAC register types and indexed
//! from [`PORT::ptr()`](pac::PORT::ptr).
//!
//! Driver logic never touches the PAC itself. It goes through the
//! [`PortRegisters`] trait, which is implemented for [`Port`] and can be
//! implemented by test doubles.
use crate::pac::{
    self,
    port::{CTRL, DIR, DIRCLR, DIRSET, DIRTGL, IN, OUT, OUTCLR, OUTSET, OUTTGL, PINCFG0_ as PINCFG, PMUX0_ as PMUX, WRCONFIG},
};
use paste::paste;

/// Number of lines controlled by one group
pub const LINES_PER_GROUP: u8 = 32;

//==================================================================================================
//  Groups and registers
//==================================================================================================

/// Port group
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Group {
    A = 0,
    B = 1,
}

/// 32-bit registers of a port group
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Reg {
    Dir,
    DirClr,
    DirSet,
    DirTgl,
    Out,
    OutClr,
    OutSet,
    OutTgl,
    In,
    Ctrl,
}

/// Bits of a `PINCFG` register
pub struct PinCfg;

impl PinCfg {
    /// Peripheral multiplexer enable
    pub const PMUXEN: u8 = 1 << 0;
    /// Input buffer enable
    pub const INEN: u8 = 1 << 1;
    /// Pull resistor enable. Direction is selected by the `OUT` bit.
    pub const PULLEN: u8 = 1 << 2;
    /// Stronger output drive
    pub const DRVSTR: u8 = 1 << 6;
}

/// Register block of one port group
#[repr(C)]
pub(crate) struct GROUP {
    dir: DIR,
    dirclr: DIRCLR,
    dirset: DIRSET,
    dirtgl: DIRTGL,
    out: OUT,
    outclr: OUTCLR,
    outset: OUTSET,
    outtgl: OUTTGL,
    in_: IN,
    ctrl: CTRL,
    #[allow(dead_code)]
    wrconfig: WRCONFIG,
    _padding1: [u8; 4],
    #[allow(dead_code)]
    pmux: [PMUX; 16],
    pincfg: [PINCFG; 32],
    _padding2: [u8; 32],
}

//==================================================================================================
//  Register interface
//==================================================================================================

macro_rules! mask_writes {
    ($($field:ident: $set:ident, $clr:ident;)+) => {
        paste! {
            $(
                /// Set the bits of `mask`, leaving the others untouched
                #[inline]
                fn [<set_ $field>](&mut self, group: Group, mask: u32) {
                    // Write-one-to-set register, zero bits have no effect
                    self.write(group, Reg::$set, mask);
                }

                /// Clear the bits of `mask`, leaving the others untouched
                #[inline]
                fn [<clear_ $field>](&mut self, group: Group, mask: u32) {
                    self.write(group, Reg::$clr, mask);
                }
            )+
        }
    };
}

/// Access to the registers of the PORT peripheral
///
/// Implementers only supply the four primitive accessors. The remaining
/// functions are provided and should not be overridden.
///
/// # Safety
///
/// An implementation which forwards to real hardware must guarantee that it
/// is the only owner of the PORT peripheral, so that `&mut self` really means
/// exclusive access to the registers.
pub unsafe trait PortRegisters {
    /// Read a 32-bit register
    fn read(&self, group: Group, reg: Reg) -> u32;

    /// Write a 32-bit register
    fn write(&mut self, group: Group, reg: Reg, value: u32);

    /// Read the configuration byte of a single line
    fn read_pincfg(&self, group: Group, num: u8) -> u8;

    /// Write the configuration byte of a single line
    fn write_pincfg(&mut self, group: Group, num: u8, value: u8);

    mask_writes! {
        dir: DirSet, DirClr;
        out: OutSet, OutClr;
    }

    /// Enable continuous sampling of the lines in `mask`.
    ///
    /// Without this, `IN` is only refreshed on demand and reads through the
    /// IOBUS can observe stale values.
    #[inline]
    fn enable_sampling(&mut self, group: Group, mask: u32) {
        let ctrl = self.read(group, Reg::Ctrl);
        self.write(group, Reg::Ctrl, ctrl | mask);
    }
}

//==================================================================================================
//  PAC backed port
//==================================================================================================

/// The PORT peripheral, taken from the PAC
///
/// ```ignore
/// let dp = pac::Peripherals::take().unwrap();
/// let port = Port::new(dp.PORT);
/// ```
pub struct Port {
    port: pac::PORT,
}

impl Port {
    #[inline]
    pub fn new(port: pac::PORT) -> Self {
        Port { port }
    }

    /// Return the PAC peripheral
    #[inline]
    pub fn free(self) -> pac::PORT {
        self.port
    }

    #[inline(always)]
    fn group(&self, group: Group) -> &GROUP {
        // Safety: Owning `pac::PORT` grants access to all of its groups. The
        // groups are laid out back to back, each one the size of `GROUP`.
        unsafe { &*(pac::PORT::ptr() as *const GROUP).add(group as usize) }
    }
}

// Owning `pac::PORT` guarantees that this is the only `Port`
unsafe impl PortRegisters for Port {
    #[inline]
    fn read(&self, group: Group, reg: Reg) -> u32 {
        let regs = self.group(group);
        match reg {
            // The set, clear and toggle registers read back the direction
            // and output latch
            Reg::Dir | Reg::DirClr | Reg::DirSet | Reg::DirTgl => regs.dir.read().bits(),
            Reg::Out | Reg::OutClr | Reg::OutSet | Reg::OutTgl => regs.out.read().bits(),
            Reg::In => regs.in_.read().bits(),
            // The PAC marks CTRL write-only, so read it through the raw pointer.
            // Safety: volatile read of a valid, aligned MMIO register
            Reg::Ctrl => unsafe { regs.ctrl.as_ptr().read_volatile() },
        }
    }

    #[inline]
    fn write(&mut self, group: Group, reg: Reg, value: u32) {
        let regs = self.group(group);
        // Safety: Every bit pattern is valid for these registers
        unsafe {
            match reg {
                Reg::Dir => {
                    regs.dir.write(|w| w.bits(value));
                }
                Reg::DirClr => {
                    regs.dirclr.write(|w| w.bits(value));
                }
                Reg::DirSet => {
                    regs.dirset.write(|w| w.bits(value));
                }
                Reg::DirTgl => {
                    regs.dirtgl.write(|w| w.bits(value));
                }
                Reg::Out => {
                    regs.out.write(|w| w.bits(value));
                }
                Reg::OutClr => {
                    regs.outclr.write(|w| w.bits(value));
                }
                Reg::OutSet => {
                    regs.outset.write(|w| w.bits(value));
                }
                Reg::OutTgl => {
                    regs.outtgl.write(|w| w.bits(value));
                }
                // read-only
                Reg::In => (),
                Reg::Ctrl => {
                    regs.ctrl.write(|w| w.bits(value));
                }
            }
        }
    }

    #[inline]
    fn read_pincfg(&self, group: Group, num: u8) -> u8 {
        self.group(group).pincfg[num as usize].read().bits()
    }

    #[inline]
    fn write_pincfg(&mut self, group: Group, num: u8, value: u8) {
        self.group(group).pincfg[num as usize].write(|w| unsafe { w.bits(value) });
    }
}
