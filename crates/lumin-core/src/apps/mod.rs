//! Per-app state machines.
//!
//! Each app owns a small piece of state that lives for the whole process and
//! survives navigation. The watch mutates them only through the operations
//! exposed here.

pub mod heart;
pub mod run_clock;
pub mod settings;
pub mod stopwatch;
pub mod timer;

pub use run_clock::RunClock;
pub use settings::SettingsState;
pub use stopwatch::StopwatchState;
pub use timer::TimerState;
