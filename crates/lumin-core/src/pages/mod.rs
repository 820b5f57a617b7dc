//! Watch pages and the per-frame render entry point.
//!
//! Every screen is a [`Page`]; [`PageWrapper`] picks the one for the current
//! screen. [`render`] draws it together with the status overlay and hands
//! back the regions the frame was drawn with.

mod constants;
pub mod heart;
pub mod home;
pub mod lock;
pub mod page;
pub mod settings;
pub mod status_bar;
pub mod stopwatch;
pub mod timer;

pub use heart::HeartPage;
pub use home::HomePage;
pub use lock::LockPage;
pub use page::{Page, PageWrapper};
pub use settings::SettingsPage;
pub use status_bar::{StatusLayout, draw_status_bar, status_layout};
pub use stopwatch::StopwatchPage;
pub use timer::TimerPage;

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle};
use log::trace;

use crate::layout::{HitRegion, Regions, Shape, circle_diameter};
use crate::watch::FrameContext;

/// Outline color for [`draw_region_outlines`]
const REGION_OUTLINE_COLOR: Rgb565 = Rgb565::MAGENTA;

/// Draw one frame of the current screen plus the status overlay.
///
/// Returns the interactive regions of the drawn screen.
pub fn render<D: DrawTarget<Color = Rgb565>>(
    ctx: &FrameContext,
    display: &mut D,
) -> Result<Regions, D::Error> {
    let page = PageWrapper::for_screen(ctx.state.screen);
    trace!("Rendering '{}' (fade {:.2})", page.title(), ctx.state.fade);

    page.draw_page(ctx, display)?;
    draw_status_bar(ctx, display)?;
    Ok(page.hit_regions())
}

/// Outline every region, for checking touch targets against the artwork.
pub fn draw_region_outlines<D: DrawTarget<Color = Rgb565>>(
    regions: &[HitRegion],
    display: &mut D,
) -> Result<(), D::Error> {
    let style = PrimitiveStyle::with_stroke(REGION_OUTLINE_COLOR, 1);
    for region in regions {
        match region.shape {
            Shape::Circle { center, radius } => {
                Circle::with_center(center, circle_diameter(radius))
                    .into_styled(style)
                    .draw(display)?;
            }
            Shape::Rect(rect) => rect.into_styled(style).draw(display)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ClockReading;
    use crate::config::WatchConfig;
    use crate::framebuffer::FrameBuffer;
    use crate::input::FrameInput;
    use crate::ui::styling::{
        COLOR_BACKGROUND, COLOR_BATTERY_FILL, COLOR_BATTERY_TRACK, COLOR_BUTTON,
        COLOR_BUTTON_ACTIVE, COLOR_FACE, COLOR_ICON, COLOR_TOGGLE_OFF, COLOR_TOGGLE_ON,
    };
    use crate::ui::{Action, AppId, Screen};
    use crate::watch::Watch;

    fn clock() -> ClockReading {
        ClockReading::new(10, 8, 30, 0)
    }

    fn render_watch(watch: &Watch, battery: Option<u8>) -> (FrameBuffer, Regions) {
        let mut fb = FrameBuffer::new();
        let ctx = watch.context(clock(), 1.0, battery);
        let regions = match render(&ctx, &mut fb) {
            Ok(regions) => regions,
            Err(never) => match never {},
        };
        (fb, regions)
    }

    fn finish_fade(watch: &mut Watch) {
        let idle = FrameInput::default();
        for _ in 0..100 {
            watch.process_frame(&idle, 0.0);
        }
    }

    fn open(app: AppId) -> Watch {
        let mut watch = Watch::new(&WatchConfig::default());
        assert!(watch.dispatch(Action::GoHome, 0.0));
        assert!(watch.dispatch(Action::SelectApp(app), 0.0));
        watch
    }

    #[test]
    fn test_render_returns_screen_regions() {
        let mut watch = Watch::new(&WatchConfig::default());
        let (_, regions) = render_watch(&watch, None);
        assert!(regions.is_empty());

        watch.dispatch(Action::GoHome, 0.0);
        let (_, regions) = render_watch(&watch, None);
        assert_eq!(regions, watch.hit_regions());

        for app in AppId::ALL {
            let watch = open(app);
            let (_, regions) = render_watch(&watch, None);
            assert_eq!(regions, watch.hit_regions());
            assert_eq!(watch.screen(), Screen::App(app));
        }
    }

    #[test]
    fn test_lock_face_fades_in() {
        let mut watch = Watch::new(&WatchConfig::default());
        let (fb, _) = render_watch(&watch, None);
        assert_eq!(fb.pixel(100, 240), Some(COLOR_BACKGROUND));

        finish_fade(&mut watch);
        let (fb, _) = render_watch(&watch, None);
        assert_eq!(fb.pixel(100, 240), Some(COLOR_FACE));
        assert_eq!(fb.pixel(5, 470), Some(COLOR_BACKGROUND));
    }

    #[test]
    fn test_home_icons_grow_with_fade() {
        let mut watch = Watch::new(&WatchConfig::default());
        watch.dispatch(Action::GoHome, 0.0);

        let (fb, _) = render_watch(&watch, None);
        assert_eq!(fb.pixel(270, 48), Some(COLOR_BACKGROUND));

        finish_fade(&mut watch);
        let (fb, _) = render_watch(&watch, None);
        assert_eq!(fb.pixel(270, 48), Some(COLOR_ICON));
    }

    #[test]
    fn test_settings_toggle_colors_follow_state() {
        let mut watch = open(AppId::Settings);
        let (fb, _) = render_watch(&watch, None);
        assert_eq!(fb.pixel(310, 240), Some(COLOR_TOGGLE_ON));
        assert_eq!(fb.pixel(310, 290), Some(COLOR_TOGGLE_OFF));

        watch.dispatch(Action::ToggleWifi, 0.0);
        watch.dispatch(Action::ToggleClockFormat, 0.0);
        let (fb, _) = render_watch(&watch, None);
        assert_eq!(fb.pixel(310, 240), Some(COLOR_TOGGLE_OFF));
        assert_eq!(fb.pixel(310, 290), Some(COLOR_TOGGLE_ON));
    }

    #[test]
    fn test_start_stop_button_highlights_while_running() {
        let mut watch = open(AppId::Timer);
        let (fb, _) = render_watch(&watch, None);
        assert_eq!(fb.pixel(200, 310), Some(COLOR_BUTTON));

        watch.dispatch(Action::ToggleTimer, 0.0);
        let (fb, _) = render_watch(&watch, None);
        assert_eq!(fb.pixel(200, 310), Some(COLOR_BUTTON_ACTIVE));
    }

    #[test]
    fn test_status_bar_battery_gauge() {
        let mut watch = Watch::new(&WatchConfig::default());
        watch.dispatch(Action::GoHome, 0.0);

        let (fb, _) = render_watch(&watch, Some(50));
        assert_eq!(fb.pixel(425, 14), Some(COLOR_BATTERY_FILL));
        assert_eq!(fb.pixel(462, 13), Some(COLOR_BATTERY_TRACK));

        let (fb, _) = render_watch(&watch, None);
        assert_eq!(fb.pixel(425, 14), Some(COLOR_BACKGROUND));
    }

    #[test]
    fn test_full_size_icon_matches_its_outline() {
        let mut watch = Watch::new(&WatchConfig::default());
        watch.dispatch(Action::GoHome, 0.0);
        finish_fade(&mut watch);
        let (icons, regions) = render_watch(&watch, None);

        let mut outlines = FrameBuffer::new();
        draw_region_outlines(&regions, &mut outlines).ok();

        // Timer icon at (240, 48): the rightmost icon pixel lies on the hit
        // boundary and under the outline.
        assert_eq!(icons.pixel(280, 48), Some(COLOR_ICON));
        assert_eq!(icons.pixel(281, 48), Some(COLOR_BACKGROUND));
        assert_eq!(outlines.pixel(280, 48), Some(REGION_OUTLINE_COLOR));
        assert_eq!(outlines.pixel(281, 48), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_region_outlines_touch_region_edges() {
        let watch = open(AppId::Timer);
        let mut fb = FrameBuffer::new();
        draw_region_outlines(&watch.hit_regions(), &mut fb).ok();
        assert_eq!(fb.pixel(190, 420), Some(REGION_OUTLINE_COLOR));
        assert_eq!(fb.pixel(240, 440), Some(Rgb565::BLACK));
    }
}
