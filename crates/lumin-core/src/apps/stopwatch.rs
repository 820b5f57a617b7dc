//! Stopwatch app: same start/stop contract as the timer, shown as minutes
//! and seconds.

use core::fmt::Write;
use heapless::String;

use super::RunClock;

pub type StopwatchState = RunClock;

/// `"MM:SS"`, both fields zero-padded. Minutes keep counting past 99.
pub fn format_stopwatch(seconds: u64) -> String<24> {
    let mut text = String::new();
    write!(&mut text, "{:02}:{:02}", seconds / 60, seconds % 60).ok();
    text
}
