//! Heart rate page showing the simulated BPM

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::apps::heart::{bpm, format_bpm};
use crate::pages::page::{Page, draw_app_frame, draw_readout};
use crate::ui::styling::COLOR_HEART;
use crate::ui::{AppId, ColorPalette, Screen};
use crate::watch::FrameContext;

pub struct HeartPage {
    palette: ColorPalette,
}

impl HeartPage {
    pub fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }
}

impl Page for HeartPage {
    fn id(&self) -> Screen {
        Screen::App(AppId::Heart)
    }

    fn title(&self) -> &str {
        AppId::Heart.name()
    }

    fn draw_page<D: DrawTarget<Color = Rgb565>>(
        &self,
        ctx: &FrameContext,
        display: &mut D,
    ) -> Result<(), D::Error> {
        draw_app_frame(self.title(), ctx, &self.palette, display)?;
        draw_readout(&format_bpm(bpm(ctx.now)), COLOR_HEART, display)
    }
}
