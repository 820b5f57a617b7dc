//! Launcher with one circular icon per app

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle};
use embedded_graphics::text::{Alignment, Baseline};

use crate::layout::{ICON_RADIUS_PX, circle_diameter, home_icon_center, tween};
use crate::pages::constants::ICON_START_SCALE;
use crate::pages::page::Page;
use crate::ui::{AppId, ColorPalette, Screen, TextSize, draw_text};
use crate::watch::FrameContext;

/// Home page.
///
/// Icons grow from half size to full size over the entrance fade. The hit
/// circles stay at full size the whole time.
pub struct HomePage {
    palette: ColorPalette,
}

impl HomePage {
    pub fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }
}

/// Drawn icon radius at fade progress `fade`.
pub(crate) fn icon_radius(fade: f32) -> u32 {
    libm::roundf(ICON_RADIUS_PX as f32 * tween(ICON_START_SCALE, 1.0, fade)) as u32
}

impl Page for HomePage {
    fn id(&self) -> Screen {
        Screen::Home
    }

    fn title(&self) -> &str {
        "Home"
    }

    fn draw_page<D: DrawTarget<Color = Rgb565>>(
        &self,
        ctx: &FrameContext,
        display: &mut D,
    ) -> Result<(), D::Error> {
        display.clear(self.palette.background)?;

        let radius = icon_radius(ctx.state.fade);
        for (i, app) in AppId::ALL.iter().enumerate() {
            let center = home_icon_center(i);
            Circle::with_center(center, circle_diameter(radius))
                .into_styled(PrimitiveStyle::with_fill(self.palette.icon))
                .draw(display)?;

            draw_text(
                display,
                app.name(),
                center,
                TextSize::Small,
                self.palette.text,
                Alignment::Center,
                Baseline::Middle,
            )?;
        }
        Ok(())
    }
}
