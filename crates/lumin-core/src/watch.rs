//! Watch navigation state machine.
//!
//! [`Watch`] owns every piece of mutable state in the system: the current
//! screen, the entrance fade, and the app state machines. The frame loop calls
//! [`Watch::process_frame`] exactly once per frame; nothing else mutates it.
//!
//! # Navigation
//!
//! ```text
//!   Lock ──any press──▶ Home ──icon──▶ App(id) ──home──▶ Home
//!                                        │ ▲
//!                                        └─┘ app action (toggle)
//! ```
//!
//! There is no way back to `Lock`; the watch starts there once.

use embedded_graphics::prelude::Point;
use heapless::Vec;
use log::debug;

use crate::apps::{SettingsState, StopwatchState, TimerState};
use crate::clock::ClockReading;
use crate::config::{FadePolicy, WatchConfig};
use crate::input::{FrameInput, MAX_PRESSES_PER_FRAME};
use crate::layout::{self, HitRegion, Regions};
use crate::ui::{Action, AppId, Screen, TouchPoint};

/// Every piece of mutable watch state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchState {
    pub screen: Screen,
    /// Entrance tween progress in [0, 1]
    pub fade: f32,
    pub timer: TimerState,
    pub stopwatch: StopwatchState,
    pub settings: SettingsState,
}

/// Read-only snapshot handed to the renderer for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    pub state: WatchState,
    /// Local wall-clock time
    pub clock: ClockReading,
    /// Monotonic seconds, the same timebase given to [`Watch::dispatch`]
    pub now: f64,
    /// Battery charge in percent, `None` without a battery sensor
    pub battery: Option<u8>,
}

pub struct Watch {
    state: WatchState,
    fade_step: f32,
    fade_policy: FadePolicy,
}

impl Watch {
    pub fn new(config: &WatchConfig) -> Self {
        Self {
            state: WatchState {
                screen: Screen::Lock,
                fade: 0.0,
                timer: TimerState::new(),
                stopwatch: StopwatchState::new(),
                settings: SettingsState::from_config(config),
            },
            fade_step: config.fade_step,
            fade_policy: config.fade_policy,
        }
    }

    pub fn state(&self) -> &WatchState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        self.state.screen
    }

    pub fn current_app(&self) -> Option<AppId> {
        self.state.screen.app()
    }

    pub fn fade(&self) -> f32 {
        self.state.fade
    }

    pub fn timer(&self) -> &TimerState {
        &self.state.timer
    }

    pub fn stopwatch(&self) -> &StopwatchState {
        &self.state.stopwatch
    }

    pub fn settings(&self) -> &SettingsState {
        &self.state.settings
    }

    /// Regions of the current screen.
    pub fn hit_regions(&self) -> Regions {
        layout::regions_for(self.state.screen)
    }

    /// Action a press at `point` would trigger on the current screen.
    pub fn hit_test(&self, point: Point) -> Option<Action> {
        self.press_action(&self.hit_regions(), point)
    }

    /// Lock takes any press; other screens match it against `regions`.
    fn press_action(&self, regions: &[HitRegion], point: Point) -> Option<Action> {
        match self.state.screen {
            Screen::Lock => Some(Action::GoHome),
            Screen::Home | Screen::App(_) => {
                layout::hit_test(regions, point).map(|region| {
                    debug!("Press at {:?} hit '{}'", point, region.label);
                    region.action
                })
            }
        }
    }

    /// Apply an action. Returns `false` when it does not apply to the current
    /// screen, in which case nothing changes.
    pub fn dispatch(&mut self, action: Action, now: f64) -> bool {
        let screen = self.state.screen;
        let applied = match action {
            Action::GoHome => {
                if screen != Screen::Home {
                    self.transition(Screen::Home);
                    true
                } else {
                    false
                }
            }
            Action::SelectApp(app) => {
                if screen == Screen::Home {
                    self.transition(Screen::App(app));
                    true
                } else {
                    false
                }
            }
            Action::ToggleTimer => {
                let applies = screen == Screen::App(AppId::Timer);
                if applies {
                    self.state.timer.toggle(now);
                    debug!("Timer running: {}", self.state.timer.is_running());
                }
                applies
            }
            Action::ToggleStopwatch => {
                let applies = screen == Screen::App(AppId::Stopwatch);
                if applies {
                    self.state.stopwatch.toggle(now);
                    debug!("Stopwatch running: {}", self.state.stopwatch.is_running());
                }
                applies
            }
            Action::ToggleWifi => {
                let applies = screen == Screen::App(AppId::Settings);
                if applies {
                    self.state.settings.toggle_wifi();
                    debug!("WiFi enabled: {}", self.state.settings.wifi_enabled);
                }
                applies
            }
            Action::ToggleClockFormat => {
                let applies = screen == Screen::App(AppId::Settings);
                if applies {
                    self.state.settings.toggle_clock_format();
                    debug!("24h clock: {}", self.state.settings.clock_24h);
                }
                applies
            }
        };

        if !applied {
            debug!("Ignoring {:?} on {:?}", action, screen);
        }
        applied
    }

    /// Hit-test a press and dispatch whatever it hits.
    pub fn handle_press(&mut self, point: TouchPoint, now: f64) -> Option<Action> {
        let action = self.hit_test(point.to_point())?;
        self.dispatch(action, now).then_some(action)
    }

    /// Advance the entrance tween by one frame.
    pub fn advance_fade(&mut self) {
        self.state.fade = (self.state.fade + self.fade_step).min(1.0);
    }

    /// Run one frame: dispatch the frame's presses in order, then advance the
    /// fade. Returns the actions that were applied.
    ///
    /// Every press is matched against the regions of the screen the frame
    /// started on, the ones that were on the display when it was pressed. A
    /// press whose action no longer fits the current screen is dropped.
    pub fn process_frame(
        &mut self,
        input: &FrameInput,
        now: f64,
    ) -> Vec<Action, MAX_PRESSES_PER_FRAME> {
        let regions = self.hit_regions();
        let mut applied = Vec::new();
        for &press in &input.presses {
            if let Some(action) = self.press_action(&regions, press.to_point())
                && self.dispatch(action, now)
            {
                applied.push(action).ok();
            }
        }
        self.advance_fade();
        applied
    }

    /// Snapshot for the renderer.
    pub fn context(&self, clock: ClockReading, now: f64, battery: Option<u8>) -> FrameContext {
        FrameContext {
            state: self.state,
            clock,
            now,
            battery,
        }
    }

    fn transition(&mut self, next: Screen) {
        debug!("Screen {:?} -> {:?}", self.state.screen, next);
        self.state.screen = next;
        if self.fade_policy == FadePolicy::ResetOnTransition {
            self.state.fade = 0.0;
        }
    }
}
