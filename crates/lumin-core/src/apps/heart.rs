//! Heart app: a synthetic pulse derived from the clock. No state.

use core::fmt::Write;
use heapless::String;

/// Resting rate the readout oscillates around.
pub const BASE_BPM: u8 = 70;

/// Peak deviation from [`BASE_BPM`].
pub const BPM_SWING: f64 = 10.0;

/// `70 + round(10·sin(3t))` for `t` in seconds; always within 60..=80.
///
/// Non-finite input reads as the resting rate.
pub fn bpm(t: f64) -> u8 {
    if !t.is_finite() {
        return BASE_BPM;
    }
    let swing = libm::round(BPM_SWING * libm::sin(3.0 * t));
    (BASE_BPM as f64 + swing) as u8
}

pub fn format_bpm(bpm: u8) -> String<16> {
    let mut text = String::new();
    write!(&mut text, "{} BPM", bpm).ok();
    text
}
