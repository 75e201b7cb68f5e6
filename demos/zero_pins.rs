//! Digital pins of the Arduino Zero, shared by the demos
use samd21_wiring::{gpio::PinDescription, port::Group};

pub const LED: u32 = 13;

pub static ZERO_PINS: [PinDescription; 14] = [
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
];
