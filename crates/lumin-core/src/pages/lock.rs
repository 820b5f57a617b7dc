//! Lock screen: analog face, digital time and the unlock hint

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};
use embedded_graphics::text::{Alignment, Baseline};

use crate::clock::format_clock;
use crate::layout::{FACE_RADIUS_PX, hand_endpoint};
use crate::pages::constants::{
    HOUR_HAND_LENGTH_PX, HOUR_HAND_WIDTH_PX, LOCK_DIGITAL_Y_PX, LOCK_HINT_Y_PX,
    MINUTE_HAND_LENGTH_PX, MINUTE_HAND_WIDTH_PX, SECOND_HAND_LENGTH_PX, SECOND_HAND_WIDTH_PX,
};
use crate::pages::page::Page;
use crate::ui::{ColorPalette, DISPLAY_CENTER, Screen, TextSize, draw_text, lerp_color};
use crate::watch::FrameContext;

const UNLOCK_HINT: &str = "Tap to Unlock";

pub struct LockPage {
    palette: ColorPalette,
}

impl LockPage {
    pub fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }

    fn draw_hand<D: DrawTarget<Color = Rgb565>>(
        display: &mut D,
        angle_deg: f32,
        length: f32,
        color: Rgb565,
        width: u32,
    ) -> Result<(), D::Error> {
        Line::new(DISPLAY_CENTER, hand_endpoint(DISPLAY_CENTER, angle_deg, length))
            .into_styled(PrimitiveStyle::with_stroke(color, width))
            .draw(display)
    }
}

impl Page for LockPage {
    fn id(&self) -> Screen {
        Screen::Lock
    }

    fn title(&self) -> &str {
        "Lock"
    }

    fn draw_page<D: DrawTarget<Color = Rgb565>>(
        &self,
        ctx: &FrameContext,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let palette = &self.palette;
        display.clear(palette.background)?;

        // Face fades in from the background
        let face = lerp_color(palette.background, palette.face, ctx.state.fade);
        Circle::with_center(DISPLAY_CENTER, (FACE_RADIUS_PX * 2.0) as u32)
            .into_styled(PrimitiveStyle::with_fill(face))
            .draw(display)?;

        let angles = ctx.clock.hand_angles();
        Self::draw_hand(
            display,
            angles.hour,
            HOUR_HAND_LENGTH_PX,
            palette.hour_hand,
            HOUR_HAND_WIDTH_PX,
        )?;
        Self::draw_hand(
            display,
            angles.minute,
            MINUTE_HAND_LENGTH_PX,
            palette.minute_hand,
            MINUTE_HAND_WIDTH_PX,
        )?;
        Self::draw_hand(
            display,
            angles.second,
            SECOND_HAND_LENGTH_PX,
            palette.second_hand,
            SECOND_HAND_WIDTH_PX,
        )?;

        let digital = format_clock(&ctx.clock, ctx.state.settings.clock_24h);
        draw_text(
            display,
            &digital,
            Point::new(DISPLAY_CENTER.x, LOCK_DIGITAL_Y_PX),
            TextSize::Large,
            palette.text,
            Alignment::Center,
            Baseline::Top,
        )?;

        draw_text(
            display,
            UNLOCK_HINT,
            Point::new(DISPLAY_CENTER.x, LOCK_HINT_Y_PX),
            TextSize::Small,
            palette.text,
            Alignment::Center,
            Baseline::Top,
        )
    }
}
