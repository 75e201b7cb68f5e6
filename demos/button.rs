//! Mirror a push button on D2 to the LED and log every change over RTT
//!
//! Connect the button between D2 and GND. The internal pull-up keeps the
//! line high while the button is released.
#![no_main]
#![no_std]

use cortex_m_rt::entry;
use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use samd21_wiring::{pac, prelude::*};

#[path = "zero_pins.rs"]
mod zero_pins;
use zero_pins::{LED, ZERO_PINS};

const BUTTON: u32 = 2;

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("-- SAMD21 button example --");
    let dp = pac::Peripherals::take().unwrap();
    let mut gpio = Gpio::new(Port::new(dp.PORT), PinTable::new(&ZERO_PINS));
    gpio.configure(LED, PinMode::Output);
    gpio.configure(BUTTON, PinMode::InputPullUp);

    let mut last = gpio.read(BUTTON);
    loop {
        let current = gpio.read(BUTTON);
        if current != last {
            rprintln!("Button level: {:?}", current);
            last = current;
        }
        // Pressed pulls the line low
        gpio.write(LED, !current);
        cortex_m::asm::delay(10_000);
    }
}
