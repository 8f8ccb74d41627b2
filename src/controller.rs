//! Three-channel RGB controller
//!
//! Holds a buffered color and an independent override color, and maps both
//! to per-channel PWM duty cycles through a [`PwmOutput`] backend.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::PwmOutput;
use crate::color::{self, Color, duty_from_color};
use crate::convert::clamp_unit;

/// The three output channels a controller is bound to
///
/// Identifiers are opaque to the controller; they are only ever handed back
/// to the backend. The controller assumes exclusive ownership of all three
/// for its entire lifetime.
#[derive(Debug, Clone, Copy)]
pub struct RgbChannels<C> {
    pub red: C,
    pub green: C,
    pub blue: C,
}

/// RGB controller - buffered color state plus a PWM backend
///
/// Every mutating call clamps its inputs to `[0.0, 1.0]` and, while
/// auto-update is on, immediately flushes the visible color to hardware.
/// With auto-update off, changes accumulate until [`update`](Self::update)
/// is called.
pub struct RgbController<P: PwmOutput> {
    // External dependencies and configuration
    output: P,
    channels: RgbChannels<P::Channel>,

    // Internal state
    color: Color,
    override_color: Color,
    auto_update: bool,
    override_active: bool,
}

impl<P: PwmOutput> RgbController<P> {
    /// Create a new controller bound to three output channels
    ///
    /// Configures each channel as an output and flushes once, so the light
    /// starts fully off.
    pub fn new(output: P, channels: RgbChannels<P::Channel>) -> Self {
        let mut controller = Self {
            output,
            channels,
            color: color::BLACK,
            override_color: color::BLACK,
            auto_update: true,
            override_active: false,
        };
        controller.output.configure_output(controller.channels.red);
        controller.output.configure_output(controller.channels.green);
        controller.output.configure_output(controller.channels.blue);
        controller.update();
        controller
    }

    /// Set all three buffered intensities
    pub fn set_rgb(&mut self, red: f32, green: f32, blue: f32) {
        self.color = Color {
            r: clamp_unit(red),
            g: clamp_unit(green),
            b: clamp_unit(blue),
        };
        self.flush_if_auto();
    }

    /// Set the buffered color from a [`Color`] triple
    pub fn set_color(&mut self, color: Color) {
        self.set_rgb(color.r, color.g, color.b);
    }

    /// Set the buffered red intensity
    pub fn set_red(&mut self, value: f32) {
        self.color.r = clamp_unit(value);
        self.flush_if_auto();
    }

    /// Set the buffered green intensity
    pub fn set_green(&mut self, value: f32) {
        self.color.g = clamp_unit(value);
        self.flush_if_auto();
    }

    /// Set the buffered blue intensity
    pub fn set_blue(&mut self, value: f32) {
        self.color.b = clamp_unit(value);
        self.flush_if_auto();
    }

    /// Get the buffered red intensity
    ///
    /// This is the buffered value, not necessarily what hardware currently
    /// shows: the two diverge while auto-update is off or an override is
    /// active.
    pub const fn red(&self) -> f32 {
        self.color.r
    }

    /// Get the buffered green intensity
    pub const fn green(&self) -> f32 {
        self.color.g
    }

    /// Get the buffered blue intensity
    pub const fn blue(&self) -> f32 {
        self.color.b
    }

    /// Get the buffered color
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Raise all three buffered intensities by `amount`
    ///
    /// Saturates at full intensity; a negative amount darkens.
    pub fn brighten(&mut self, amount: f32) {
        self.set_rgb(
            self.color.r + amount,
            self.color.g + amount,
            self.color.b + amount,
        );
    }

    /// Raise the buffered red intensity by `amount`
    pub fn brighten_red(&mut self, amount: f32) {
        self.set_red(self.color.r + amount);
    }

    /// Raise the buffered green intensity by `amount`
    pub fn brighten_green(&mut self, amount: f32) {
        self.set_green(self.color.g + amount);
    }

    /// Raise the buffered blue intensity by `amount`
    pub fn brighten_blue(&mut self, amount: f32) {
        self.set_blue(self.color.b + amount);
    }

    /// Lower all three buffered intensities by `amount`
    ///
    /// Saturates at zero.
    pub fn darken(&mut self, amount: f32) {
        self.set_rgb(
            self.color.r - amount,
            self.color.g - amount,
            self.color.b - amount,
        );
    }

    /// Lower the buffered red intensity by `amount`
    pub fn darken_red(&mut self, amount: f32) {
        self.set_red(self.color.r - amount);
    }

    /// Lower the buffered green intensity by `amount`
    pub fn darken_green(&mut self, amount: f32) {
        self.set_green(self.color.g - amount);
    }

    /// Lower the buffered blue intensity by `amount`
    pub fn darken_blue(&mut self, amount: f32) {
        self.set_blue(self.color.b - amount);
    }

    /// Temporarily show a different color without touching the buffer
    ///
    /// The override stays visible until [`stop_override`](Self::stop_override).
    pub fn override_rgb(&mut self, red: f32, green: f32, blue: f32) {
        self.override_color = Color {
            r: clamp_unit(red),
            g: clamp_unit(green),
            b: clamp_unit(blue),
        };
        self.override_active = true;
        self.flush_if_auto();
    }

    /// Override with full red
    pub fn override_red(&mut self) {
        self.override_rgb(1.0, 0.0, 0.0);
    }

    /// Override with full green
    pub fn override_green(&mut self) {
        self.override_rgb(0.0, 1.0, 0.0);
    }

    /// Override with full blue
    pub fn override_blue(&mut self) {
        self.override_rgb(0.0, 0.0, 1.0);
    }

    /// Override with full white
    pub fn override_white(&mut self) {
        self.override_rgb(1.0, 1.0, 1.0);
    }

    /// Override with all channels off
    pub fn override_black(&mut self) {
        self.override_rgb(0.0, 0.0, 0.0);
    }

    /// Check if an override is active
    pub const fn is_override(&self) -> bool {
        self.override_active
    }

    /// Revert to the buffered color
    ///
    /// The buffer was never touched by the override, so the previously set
    /// color comes back as-is.
    pub fn stop_override(&mut self) {
        self.override_active = false;
        self.flush_if_auto();
    }

    /// Flush every mutation to hardware immediately (the default)
    ///
    /// Re-enabling does not flush by itself; the next mutation does.
    pub fn enable_auto_update(&mut self) {
        self.auto_update = true;
    }

    /// Stop flushing on mutation; changes accumulate until [`update`](Self::update)
    pub fn disable_auto_update(&mut self) {
        self.auto_update = false;
    }

    /// Check if auto-update is on
    pub const fn is_auto_update(&self) -> bool {
        self.auto_update
    }

    /// Write the visible color to hardware
    ///
    /// The override triple wins while an override is active, otherwise the
    /// buffered triple is written. One duty-cycle write per channel.
    pub fn update(&mut self) {
        let visible = if self.override_active {
            self.override_color
        } else {
            self.color
        };
        let duty = duty_from_color(visible);
        #[cfg(feature = "esp32-log")]
        println!(
            "[RgbController.update] writing duty ({:?}, {:?}, {:?})",
            duty.r, duty.g, duty.b
        );
        self.output.write_duty_cycle(self.channels.red, duty.r);
        self.output.write_duty_cycle(self.channels.green, duty.g);
        self.output.write_duty_cycle(self.channels.blue, duty.b);
    }

    /// Get the bound channels
    pub const fn channels(&self) -> &RgbChannels<P::Channel> {
        &self.channels
    }

    /// Get a reference to the output backend
    pub const fn output(&self) -> &P {
        &self.output
    }

    /// Consume the controller and give the output backend back
    pub fn release(self) -> P {
        self.output
    }

    fn flush_if_auto(&mut self) {
        if self.auto_update {
            self.update();
        }
    }
}
