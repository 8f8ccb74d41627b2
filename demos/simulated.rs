//! Minimal simulation of the controller against an in-memory backend.
//!
//! Prints every duty-cycle write instead of driving hardware.

#![allow(clippy::print_stdout)]

use rgb_pwm_controller::{PwmOutput, RgbChannels, RgbController};

/// PWM backend that prints instead of driving hardware.
struct ConsolePwm;

impl PwmOutput for ConsolePwm {
    type Channel = &'static str;

    fn configure_output(&mut self, channel: &'static str) {
        println!("configure {channel} as output");
    }

    fn write_duty_cycle(&mut self, channel: &'static str, duty: u8) {
        println!("{channel} <- {duty}");
    }
}

fn main() {
    let channels = RgbChannels {
        red: "red",
        green: "green",
        blue: "blue",
    };
    let mut led = RgbController::new(ConsolePwm, channels);

    led.set_rgb(0.1, 0.5, 1.0);
    led.brighten(0.25);

    led.override_white();
    led.stop_override();

    led.disable_auto_update();
    led.darken(0.5);
    led.update();
}
