//! Timer page

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::apps::timer::format_timer;
use crate::pages::page::{Page, draw_app_frame, draw_readout, draw_start_stop};
use crate::ui::styling::COLOR_TIMER;
use crate::ui::{AppId, ColorPalette, Screen};
use crate::watch::FrameContext;

pub struct TimerPage {
    palette: ColorPalette,
}

impl TimerPage {
    pub fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }
}

impl Page for TimerPage {
    fn id(&self) -> Screen {
        Screen::App(AppId::Timer)
    }

    fn title(&self) -> &str {
        AppId::Timer.name()
    }

    fn draw_page<D: DrawTarget<Color = Rgb565>>(
        &self,
        ctx: &FrameContext,
        display: &mut D,
    ) -> Result<(), D::Error> {
        draw_app_frame(self.title(), ctx, &self.palette, display)?;

        let timer = &ctx.state.timer;
        draw_readout(&format_timer(timer.display_seconds(ctx.now)), COLOR_TIMER, display)?;
        draw_start_stop(timer, &self.palette, display)
    }
}
