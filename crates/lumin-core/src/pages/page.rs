// src/pages/page.rs
//! Core page abstraction and the enum wrapper that selects a page per screen.
//!
//! # Page Trait
//!
//! [`Page`] is the rendering contract for every screen of the watch. A page
//! holds no watch state of its own: everything it shows comes from the
//! [`FrameContext`] snapshot, so drawing the same context twice produces the
//! same pixels.
//!
//! # PageWrapper
//!
//! [`PageWrapper`] is a concrete enum that delegates every [`Page`] method to
//! the page for the current [`Screen`], avoiding trait objects.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Baseline};

use crate::apps::RunClock;
use crate::apps::timer::button_label;
use crate::layout::{self, HOME_BUTTON, Regions, START_STOP_BUTTON};
use crate::pages::constants::{READOUT_Y_PX, TITLE_Y_PX};
use crate::pages::{HeartPage, HomePage, LockPage, SettingsPage, StopwatchPage, TimerPage};
use crate::ui::{
    AppId, Button, ColorPalette, DISPLAY_CENTER, Drawable, Screen, TextSize, draw_text, lerp_color,
};
use crate::watch::FrameContext;

// ---------------------------------------------------------------------------
// Page trait
// ---------------------------------------------------------------------------

/// Trait that all watch screens implement.
pub trait Page {
    /// Screen this page renders.
    fn id(&self) -> Screen;

    /// Human-readable title (shown on app screens, used in logs).
    fn title(&self) -> &str;

    /// Interactive regions of this page, in hit-test order.
    fn hit_regions(&self) -> Regions {
        layout::regions_for(self.id())
    }

    /// Render the entire page for the given frame.
    fn draw_page<D: DrawTarget<Color = Rgb565>>(
        &self,
        ctx: &FrameContext,
        display: &mut D,
    ) -> Result<(), D::Error>;
}

/// Background, fading title and Home button shared by every app page.
pub(crate) fn draw_app_frame<D: DrawTarget<Color = Rgb565>>(
    title: &str,
    ctx: &FrameContext,
    palette: &ColorPalette,
    display: &mut D,
) -> Result<(), D::Error> {
    display.clear(palette.background)?;

    draw_text(
        display,
        title,
        Point::new(DISPLAY_CENTER.x, TITLE_Y_PX),
        TextSize::Large,
        lerp_color(palette.background, palette.text, ctx.state.fade),
        Alignment::Center,
        Baseline::Top,
    )?;

    Button::new(HOME_BUTTON, "Home")
        .with_fill(palette.button)
        .with_text_color(palette.text)
        .draw(display)
}

/// Large readout centered under the title.
pub(crate) fn draw_readout<D: DrawTarget<Color = Rgb565>>(
    text: &str,
    color: Rgb565,
    display: &mut D,
) -> Result<(), D::Error> {
    draw_text(
        display,
        text,
        Point::new(DISPLAY_CENTER.x, READOUT_Y_PX),
        TextSize::Large,
        color,
        Alignment::Center,
        Baseline::Top,
    )
}

/// Start/stop button, highlighted while `clock` runs.
pub(crate) fn draw_start_stop<D: DrawTarget<Color = Rgb565>>(
    clock: &RunClock,
    palette: &ColorPalette,
    display: &mut D,
) -> Result<(), D::Error> {
    let running = clock.is_running();
    let fill = if running {
        palette.button_active
    } else {
        palette.button
    };
    Button::new(START_STOP_BUTTON, button_label(running))
        .with_fill(fill)
        .with_text_color(palette.text)
        .draw(display)
}

// ---------------------------------------------------------------------------
// PageWrapper
// ---------------------------------------------------------------------------

/// Enum-based wrapper holding the page for one screen.
///
/// When adding a screen, add a variant here and extend the delegation below.
pub enum PageWrapper {
    Lock(LockPage),
    Home(HomePage),
    Timer(TimerPage),
    Stopwatch(StopwatchPage),
    Heart(HeartPage),
    Settings(SettingsPage),
}

impl PageWrapper {
    /// Build the page that renders `screen`.
    pub fn for_screen(screen: Screen) -> Self {
        let palette = ColorPalette::default();
        match screen {
            Screen::Lock => PageWrapper::Lock(LockPage::new(palette)),
            Screen::Home => PageWrapper::Home(HomePage::new(palette)),
            Screen::App(AppId::Timer) => PageWrapper::Timer(TimerPage::new(palette)),
            Screen::App(AppId::Stopwatch) => PageWrapper::Stopwatch(StopwatchPage::new(palette)),
            Screen::App(AppId::Heart) => PageWrapper::Heart(HeartPage::new(palette)),
            Screen::App(AppId::Settings) => PageWrapper::Settings(SettingsPage::new(palette)),
        }
    }
}

impl Page for PageWrapper {
    fn id(&self) -> Screen {
        match self {
            PageWrapper::Lock(page) => page.id(),
            PageWrapper::Home(page) => page.id(),
            PageWrapper::Timer(page) => page.id(),
            PageWrapper::Stopwatch(page) => page.id(),
            PageWrapper::Heart(page) => page.id(),
            PageWrapper::Settings(page) => page.id(),
        }
    }

    fn title(&self) -> &str {
        match self {
            PageWrapper::Lock(page) => page.title(),
            PageWrapper::Home(page) => page.title(),
            PageWrapper::Timer(page) => page.title(),
            PageWrapper::Stopwatch(page) => page.title(),
            PageWrapper::Heart(page) => page.title(),
            PageWrapper::Settings(page) => page.title(),
        }
    }

    fn hit_regions(&self) -> Regions {
        match self {
            PageWrapper::Lock(page) => page.hit_regions(),
            PageWrapper::Home(page) => page.hit_regions(),
            PageWrapper::Timer(page) => page.hit_regions(),
            PageWrapper::Stopwatch(page) => page.hit_regions(),
            PageWrapper::Heart(page) => page.hit_regions(),
            PageWrapper::Settings(page) => page.hit_regions(),
        }
    }

    fn draw_page<D: DrawTarget<Color = Rgb565>>(
        &self,
        ctx: &FrameContext,
        display: &mut D,
    ) -> Result<(), D::Error> {
        match self {
            PageWrapper::Lock(page) => page.draw_page(ctx, display),
            PageWrapper::Home(page) => page.draw_page(ctx, display),
            PageWrapper::Timer(page) => page.draw_page(ctx, display),
            PageWrapper::Stopwatch(page) => page.draw_page(ctx, display),
            PageWrapper::Heart(page) => page.draw_page(ctx, display),
            PageWrapper::Settings(page) => page.draw_page(ctx, display),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_matches_screen() {
        let screens = [
            Screen::Lock,
            Screen::Home,
            Screen::App(AppId::Timer),
            Screen::App(AppId::Stopwatch),
            Screen::App(AppId::Heart),
            Screen::App(AppId::Settings),
        ];
        for screen in screens {
            let page = PageWrapper::for_screen(screen);
            assert_eq!(page.id(), screen);
            assert_eq!(page.hit_regions(), layout::regions_for(screen));
        }
    }

    #[test]
    fn test_app_titles_are_app_names() {
        for app in AppId::ALL {
            assert_eq!(PageWrapper::for_screen(Screen::App(app)).title(), app.name());
        }
    }
}
