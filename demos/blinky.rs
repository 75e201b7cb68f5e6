//! Simple blinky example, using the on-board LED of an Arduino Zero (PA17)
#![no_main]
#![no_std]

use cortex_m_rt::entry;
use panic_halt as _;
use samd21_wiring::{pac, prelude::*};

#[path = "zero_pins.rs"]
mod zero_pins;
use zero_pins::{LED, ZERO_PINS};

#[entry]
fn main() -> ! {
    let dp = pac::Peripherals::take().unwrap();
    let mut gpio = Gpio::new(Port::new(dp.PORT), PinTable::new(&ZERO_PINS));
    gpio.configure(LED, PinMode::Output);
    let mut state = PinState::Low;
    loop {
        state = !state;
        gpio.write(LED, state);
        // Roughly 250 ms with the 1 MHz reset clock
        cortex_m::asm::delay(250_000);
    }
}
