//! Status overlay: wall-clock time and battery gauge in the top-right corner
//!
//! The layout is computed separately from drawing so it can be checked
//! without a display.

use core::fmt::Write;

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline};
use heapless::String;

use crate::clock::format_status_time;
use crate::pages::constants::{
    BATTERY_HEIGHT_PX, BATTERY_WIDTH_PX, STATUS_GAP_PX, STATUS_RIGHT_PADDING_PX, STATUS_TOP_PX,
};
use crate::ui::styling::{COLOR_BATTERY_FILL, COLOR_BATTERY_TRACK, COLOR_TEXT};
use crate::ui::{DISPLAY_WIDTH_PX, TextSize, draw_text};
use crate::watch::FrameContext;

const BATTERY_BORDER_PX: u32 = 2;

/// Where the status overlay puts its pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLayout {
    pub time_top_left: Point,
    /// Battery gauge bounds, `None` without a battery reading
    pub battery: Option<Rectangle>,
}

/// Lay out a time string of `time_size` next to an optional battery gauge.
pub fn status_layout(time_size: Size, has_battery: bool) -> StatusLayout {
    let right_edge = DISPLAY_WIDTH_PX as i32 - STATUS_RIGHT_PADDING_PX;
    let time_width = time_size.width as i32;

    if has_battery {
        let bar = Rectangle::new(
            Point::new(right_edge - BATTERY_WIDTH_PX as i32, STATUS_TOP_PX),
            Size::new(BATTERY_WIDTH_PX, BATTERY_HEIGHT_PX),
        );
        let time_y = bar.top_left.y + (BATTERY_HEIGHT_PX as i32 - time_size.height as i32) / 2;
        StatusLayout {
            time_top_left: Point::new(bar.top_left.x - STATUS_GAP_PX - time_width, time_y),
            battery: Some(bar),
        }
    } else {
        StatusLayout {
            time_top_left: Point::new(right_edge - time_width, STATUS_TOP_PX),
            battery: None,
        }
    }
}

/// Width of the gauge fill for `percent`, clamped to the gauge.
fn battery_fill_width(percent: u8) -> u32 {
    BATTERY_WIDTH_PX * u32::from(percent.min(100)) / 100
}

fn draw_battery<D: DrawTarget<Color = Rgb565>>(
    bar: Rectangle,
    percent: u8,
    display: &mut D,
) -> Result<(), D::Error> {
    bar.into_styled(PrimitiveStyle::with_fill(COLOR_BATTERY_TRACK))
        .draw(display)?;

    let fill_width = battery_fill_width(percent);
    if fill_width > 0 {
        Rectangle::new(bar.top_left, Size::new(fill_width, bar.size.height))
            .into_styled(PrimitiveStyle::with_fill(COLOR_BATTERY_FILL))
            .draw(display)?;
    }

    bar.into_styled(PrimitiveStyle::with_stroke(COLOR_TEXT, BATTERY_BORDER_PX))
        .draw(display)?;

    let mut label: String<8> = String::new();
    write!(&mut label, "{}%", percent.min(100)).ok();
    draw_text(
        display,
        &label,
        bar.center(),
        TextSize::Tiny,
        COLOR_TEXT,
        Alignment::Center,
        Baseline::Middle,
    )
}

/// Draw the overlay on top of whatever page was rendered.
pub fn draw_status_bar<D: DrawTarget<Color = Rgb565>>(
    ctx: &FrameContext,
    display: &mut D,
) -> Result<(), D::Error> {
    let time = format_status_time(&ctx.clock, ctx.state.settings.clock_24h);
    let layout = status_layout(TextSize::Small.measure(&time), ctx.battery.is_some());

    if let (Some(bar), Some(percent)) = (layout.battery, ctx.battery) {
        draw_battery(bar, percent, display)?;
    }

    draw_text(
        display,
        &time,
        layout.time_top_left,
        TextSize::Small,
        COLOR_TEXT,
        Alignment::Left,
        Baseline::Top,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_with_battery() {
        let layout = status_layout(Size::new(40, 13), true);
        assert_eq!(
            layout.battery,
            Some(Rectangle::new(Point::new(420, 10), Size::new(50, 20)))
        );
        assert_eq!(layout.time_top_left, Point::new(370, 13));
    }

    #[test]
    fn test_layout_without_battery_takes_bar_position() {
        let layout = status_layout(Size::new(40, 13), false);
        assert_eq!(layout.battery, None);
        assert_eq!(layout.time_top_left, Point::new(430, 10));
    }

    #[test]
    fn test_battery_fill_is_proportional() {
        assert_eq!(battery_fill_width(0), 0);
        assert_eq!(battery_fill_width(50), 25);
        assert_eq!(battery_fill_width(100), 50);
        assert_eq!(battery_fill_width(250), 50);
    }
}
