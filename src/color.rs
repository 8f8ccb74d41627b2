use smart_leds::{RGB, RGB8};

use crate::convert::{clamp_unit, duty_from_unit};

/// Normalized color: each channel is an intensity in `[0.0, 1.0]`.
pub type Color = RGB<f32>;

/// Hardware-facing color: each channel is an 8-bit PWM duty cycle.
pub type Rgb = RGB8;

pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
};
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
};
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
};
pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
};
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
};

/// Clamp every channel to the unit interval.
#[inline]
pub const fn clamped(color: Color) -> Color {
    Color {
        r: clamp_unit(color.r),
        g: clamp_unit(color.g),
        b: clamp_unit(color.b),
    }
}

/// Convert a normalized color to per-channel duty cycles.
#[inline]
pub const fn duty_from_color(color: Color) -> Rgb {
    Rgb {
        r: duty_from_unit(color.r),
        g: duty_from_unit(color.g),
        b: duty_from_unit(color.b),
    }
}
