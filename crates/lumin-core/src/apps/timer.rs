//! Timer app: a seconds counter with a single start/stop button.

use core::fmt::Write;
use heapless::String;

use super::RunClock;

pub type TimerState = RunClock;

/// `"07s"`, `"125s"`.
pub fn format_timer(seconds: u64) -> String<24> {
    let mut text = String::new();
    write!(&mut text, "{:02}s", seconds).ok();
    text
}

/// Label for the start/stop button.
pub fn button_label(running: bool) -> &'static str {
    if running { "Stop" } else { "Start" }
}
