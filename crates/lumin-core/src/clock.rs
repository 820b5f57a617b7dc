//! Wall-clock readings and their text formats.

use core::fmt::Write;
use heapless::String;

/// Local wall-clock time supplied by the host each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockReading {
    /// 0..=23
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub nanosecond: u32,
}

/// Hand angles in degrees, clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl ClockReading {
    /// Out-of-range fields are clamped, so a leap second reads as second 59.
    pub fn new(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Self {
        Self {
            hour: hour.min(23),
            minute: minute.min(59),
            second: second.min(59),
            nanosecond: nanosecond.min(999_999_999),
        }
    }

    /// Continuous hand positions: each hand includes the fraction carried by
    /// the smaller units.
    pub fn hand_angles(&self) -> HandAngles {
        let second = self.second as f32 + self.nanosecond as f32 / 1_000_000_000.0;
        let minute = self.minute as f32 + second / 60.0;
        let hour = (self.hour % 12) as f32 + minute / 60.0;
        HandAngles {
            hour: hour / 12.0 * 360.0,
            minute: minute / 60.0 * 360.0,
            second: second / 60.0 * 360.0,
        }
    }

    /// Hour on a 12-hour dial, 1..=12.
    pub fn hour12(&self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    pub fn is_pm(&self) -> bool {
        self.hour >= 12
    }
}

/// Lock-screen digital time.
///
/// 24-hour: `"07:05"`. 12-hour: `"7:05 AM"`, with no leading zero on the hour.
pub fn format_clock(reading: &ClockReading, clock_24h: bool) -> String<16> {
    let mut text = String::new();
    if clock_24h {
        write!(&mut text, "{:02}:{:02}", reading.hour, reading.minute).ok();
    } else {
        let suffix = if reading.is_pm() { "PM" } else { "AM" };
        write!(
            &mut text,
            "{}:{:02} {}",
            reading.hour12(),
            reading.minute,
            suffix
        )
        .ok();
    }
    text
}

/// Compact time for the status bar: `"07:05"` or `"7:05"`.
pub fn format_status_time(reading: &ClockReading, clock_24h: bool) -> String<8> {
    let mut text = String::new();
    if clock_24h {
        write!(&mut text, "{:02}:{:02}", reading.hour, reading.minute).ok();
    } else {
        write!(&mut text, "{}:{:02}", reading.hour12(), reading.minute).ok();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u8, minute: u8) -> ClockReading {
        ClockReading::new(hour, minute, 0, 0)
    }

    #[test]
    fn test_twelve_hour_format() {
        assert_eq!(format_clock(&at(0, 30), false).as_str(), "12:30 AM");
        assert_eq!(format_clock(&at(9, 5), false).as_str(), "9:05 AM");
        assert_eq!(format_clock(&at(12, 0), false).as_str(), "12:00 PM");
        assert_eq!(format_clock(&at(13, 7), false).as_str(), "1:07 PM");
    }

    #[test]
    fn test_twenty_four_hour_format_keeps_leading_zero() {
        assert_eq!(format_clock(&at(7, 0), true).as_str(), "07:00");
        assert_eq!(format_clock(&at(13, 7), true).as_str(), "13:07");
        assert_eq!(format_clock(&at(0, 0), true).as_str(), "00:00");
    }

    #[test]
    fn test_status_time() {
        assert_eq!(format_status_time(&at(7, 5), true).as_str(), "07:05");
        assert_eq!(format_status_time(&at(7, 5), false).as_str(), "7:05");
        assert_eq!(format_status_time(&at(23, 59), false).as_str(), "11:59");
    }

    #[test]
    fn test_hand_angles() {
        let angles = ClockReading::new(3, 0, 0, 0).hand_angles();
        assert_eq!(angles.hour, 90.0);
        assert_eq!(angles.minute, 0.0);
        assert_eq!(angles.second, 0.0);

        let angles = ClockReading::new(15, 30, 30, 0).hand_angles();
        assert!((angles.hour - 105.25).abs() < 1e-3);
        assert!((angles.minute - 183.0).abs() < 1e-3);
        assert!((angles.second - 180.0).abs() < 1e-3);
    }

    #[test]
    fn test_new_clamps_fields() {
        let reading = ClockReading::new(30, 75, 60, 1_500_000_000);
        assert_eq!(reading, ClockReading::new(23, 59, 59, 999_999_999));
    }
}
