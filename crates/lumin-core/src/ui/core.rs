// src/ui/core.rs
//! Core UI traits and types for the LuminOS watch

use embedded_graphics::prelude::*;

/// Represents a 2D touch point on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

impl TouchPoint {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Convert a signed display point, clamping negative coordinates to zero.
    pub fn from_point(point: Point) -> Self {
        Self {
            x: point.x.clamp(0, u16::MAX as i32) as u16,
            y: point.y.clamp(0, u16::MAX as i32) as u16,
        }
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}

/// The four applications reachable from the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppId {
    Timer,
    Stopwatch,
    Heart,
    Settings,
}

impl AppId {
    /// Launcher order, clockwise from 12 o'clock.
    pub const ALL: [AppId; 4] = [AppId::Timer, AppId::Stopwatch, AppId::Heart, AppId::Settings];

    pub fn name(self) -> &'static str {
        match self {
            AppId::Timer => "Timer",
            AppId::Stopwatch => "Stopwatch",
            AppId::Heart => "Heart",
            AppId::Settings => "Settings",
        }
    }

    /// Position of this app in [`AppId::ALL`].
    pub fn index(self) -> usize {
        match self {
            AppId::Timer => 0,
            AppId::Stopwatch => 1,
            AppId::Heart => 2,
            AppId::Settings => 3,
        }
    }
}

/// Top-level navigation state of the watch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Lock,
    Home,
    App(AppId),
}

impl Screen {
    /// The running app, if any.
    pub fn app(self) -> Option<AppId> {
        match self {
            Screen::App(app) => Some(app),
            Screen::Lock | Screen::Home => None,
        }
    }
}

/// Actions that a press can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Return to the home screen (also unlocks the lock screen)
    GoHome,
    /// Open an application from the launcher
    SelectApp(AppId),
    /// Start or stop the timer
    ToggleTimer,
    /// Start or stop the stopwatch
    ToggleStopwatch,
    /// Flip the WiFi setting
    ToggleWifi,
    /// Flip between 12 and 24 hour clock
    ToggleClockFormat,
}

/// Trait for any UI element that can be drawn
pub trait Drawable {
    /// Draw the element to the display
    fn draw<D: DrawTarget<Color = embedded_graphics::pixelcolor::Rgb565>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error>;
}
