//! Settings page with the WiFi and 24-hour clock toggles

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Alignment, Baseline};

use crate::apps::settings::OS_VERSION_LABEL;
use crate::layout::{CLOCK_TOGGLE, WIFI_TOGGLE};
use crate::pages::constants::{TOGGLE_LABEL_INSET_PX, VERSION_Y_PX};
use crate::pages::page::{Page, draw_app_frame};
use crate::ui::{
    AppId, Button, ColorPalette, DISPLAY_CENTER, Drawable, LabelAlignment, Screen, TextSize,
    draw_text,
};
use crate::watch::FrameContext;

pub struct SettingsPage {
    palette: ColorPalette,
}

impl SettingsPage {
    pub fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }

    fn toggle(&self, bounds: Rectangle, label: &str, on: bool) -> Button {
        Button::new(bounds, label)
            .with_fill(self.palette.toggle(on))
            .with_text_color(self.palette.text)
            .with_label_alignment(LabelAlignment::Left(TOGGLE_LABEL_INSET_PX))
            .with_border_radius(0)
    }
}

impl Page for SettingsPage {
    fn id(&self) -> Screen {
        Screen::App(AppId::Settings)
    }

    fn title(&self) -> &str {
        AppId::Settings.name()
    }

    fn draw_page<D: DrawTarget<Color = Rgb565>>(
        &self,
        ctx: &FrameContext,
        display: &mut D,
    ) -> Result<(), D::Error> {
        draw_app_frame(self.title(), ctx, &self.palette, display)?;

        let settings = &ctx.state.settings;
        self.toggle(WIFI_TOGGLE, "WiFi", settings.wifi_enabled)
            .draw(display)?;
        self.toggle(CLOCK_TOGGLE, "24h Clock", settings.clock_24h)
            .draw(display)?;

        draw_text(
            display,
            OS_VERSION_LABEL,
            Point::new(DISPLAY_CENTER.x, VERSION_Y_PX),
            TextSize::Small,
            self.palette.text,
            Alignment::Center,
            Baseline::Top,
        )
    }
}
