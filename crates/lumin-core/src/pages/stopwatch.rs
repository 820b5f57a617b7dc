//! Stopwatch page

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::apps::stopwatch::format_stopwatch;
use crate::pages::page::{Page, draw_app_frame, draw_readout, draw_start_stop};
use crate::ui::styling::COLOR_STOPWATCH;
use crate::ui::{AppId, ColorPalette, Screen};
use crate::watch::FrameContext;

pub struct StopwatchPage {
    palette: ColorPalette,
}

impl StopwatchPage {
    pub fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }
}

impl Page for StopwatchPage {
    fn id(&self) -> Screen {
        Screen::App(AppId::Stopwatch)
    }

    fn title(&self) -> &str {
        AppId::Stopwatch.name()
    }

    fn draw_page<D: DrawTarget<Color = Rgb565>>(
        &self,
        ctx: &FrameContext,
        display: &mut D,
    ) -> Result<(), D::Error> {
        draw_app_frame(self.title(), ctx, &self.palette, display)?;

        let stopwatch = &ctx.state.stopwatch;
        draw_readout(
            &format_stopwatch(stopwatch.display_seconds(ctx.now)),
            COLOR_STOPWATCH,
            display,
        )?;
        draw_start_stop(stopwatch, &self.palette, display)
    }
}
