//! Color definitions and palette for the watch UI
//!
//! Colors are RGB565. To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

// ============================================================================
// Base Colors
// ============================================================================

/// Screen background - near black navy
pub const COLOR_BACKGROUND: Rgb565 = Rgb565::new(10 >> 3, 10 >> 2, 30 >> 3);

/// Watch face fill
pub const COLOR_FACE: Rgb565 = Rgb565::new(20 >> 3, 20 >> 2, 50 >> 3);

/// Primary text - pale blue
pub const COLOR_TEXT: Rgb565 = Rgb565::new(200 >> 3, 230 >> 2, 255 >> 3);

// ============================================================================
// Clock Hands
// ============================================================================

pub const COLOR_HOUR_HAND: Rgb565 = Rgb565::new(255 >> 3, 210 >> 2, 127 >> 3);
pub const COLOR_MINUTE_HAND: Rgb565 = Rgb565::new(31, 63, 31);
pub const COLOR_SECOND_HAND: Rgb565 = Rgb565::new(255 >> 3, 100 >> 2, 100 >> 3);

// ============================================================================
// Controls
// ============================================================================

pub const COLOR_ICON: Rgb565 = Rgb565::new(30 >> 3, 50 >> 2, 80 >> 3);
pub const COLOR_BUTTON: Rgb565 = Rgb565::new(50 >> 3, 50 >> 2, 80 >> 3);
pub const COLOR_BUTTON_ACTIVE: Rgb565 = Rgb565::new(100 >> 3, 100 >> 2, 150 >> 3);
pub const COLOR_TOGGLE_ON: Rgb565 = Rgb565::new(50 >> 3, 200 >> 2, 50 >> 3);
pub const COLOR_TOGGLE_OFF: Rgb565 = Rgb565::new(200 >> 3, 50 >> 2, 50 >> 3);

// ============================================================================
// App Readouts
// ============================================================================

pub const COLOR_HEART: Rgb565 = Rgb565::new(255 >> 3, 100 >> 2, 100 >> 3);
pub const COLOR_TIMER: Rgb565 = Rgb565::new(200 >> 3, 200 >> 2, 50 >> 3);
pub const COLOR_STOPWATCH: Rgb565 = Rgb565::new(100 >> 3, 255 >> 2, 200 >> 3);

// ============================================================================
// Status Bar
// ============================================================================

pub const COLOR_BATTERY_TRACK: Rgb565 = Rgb565::new(80 >> 3, 80 >> 2, 80 >> 3);
pub const COLOR_BATTERY_FILL: Rgb565 = Rgb565::new(50 >> 3, 200 >> 2, 50 >> 3);

/// A cohesive color palette for consistent UI theming.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    pub background: Rgb565,
    pub face: Rgb565,
    pub text: Rgb565,
    pub hour_hand: Rgb565,
    pub minute_hand: Rgb565,
    pub second_hand: Rgb565,
    pub icon: Rgb565,
    pub button: Rgb565,
    pub button_active: Rgb565,
    pub toggle_on: Rgb565,
    pub toggle_off: Rgb565,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::night()
    }
}

impl ColorPalette {
    /// The stock dark watch theme.
    pub fn night() -> Self {
        Self {
            background: COLOR_BACKGROUND,
            face: COLOR_FACE,
            text: COLOR_TEXT,
            hour_hand: COLOR_HOUR_HAND,
            minute_hand: COLOR_MINUTE_HAND,
            second_hand: COLOR_SECOND_HAND,
            icon: COLOR_ICON,
            button: COLOR_BUTTON,
            button_active: COLOR_BUTTON_ACTIVE,
            toggle_on: COLOR_TOGGLE_ON,
            toggle_off: COLOR_TOGGLE_OFF,
        }
    }

    /// Fill color for an on/off toggle.
    pub fn toggle(&self, on: bool) -> Rgb565 {
        if on { self.toggle_on } else { self.toggle_off }
    }
}

/// Linearly blend two colors channel by channel. `t` is clamped to [0, 1].
pub fn lerp_color(from: Rgb565, to: Rgb565, t: f32) -> Rgb565 {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| -> u8 {
        let v = a as f32 + (b as f32 - a as f32) * t;
        libm::roundf(v) as u8
    };
    Rgb565::new(
        mix(from.r(), to.r()),
        mix(from.g(), to.g()),
        mix(from.b(), to.b()),
    )
}
