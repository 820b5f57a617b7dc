//! Screen geometry and hit-testing.
//!
//! Everything here is a pure function of the screen, so presses can be routed
//! without a display. The pages draw onto the same rectangles and circles.

use core::f32::consts::PI;

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

use crate::ui::{Action, AppId, DISPLAY_CENTER, DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX, Screen};

/// Number of apps on the launcher ring
pub const APP_COUNT: usize = AppId::ALL.len();

/// Distance from the display center to each launcher icon
pub const ICON_RING_RADIUS_PX: f32 = DISPLAY_WIDTH_PX as f32 * 0.4;

/// Radius of a launcher icon at full scale; also its hit radius
pub const ICON_RADIUS_PX: u32 = 40;

/// Radius of the lock-screen watch face
pub const FACE_RADIUS_PX: f32 = DISPLAY_WIDTH_PX as f32 * 0.45;

/// Most regions any single screen exposes
pub const MAX_REGIONS: usize = 4;

const CX: i32 = DISPLAY_CENTER.x;
const CY: i32 = DISPLAY_CENTER.y;

/// "Home" button at the bottom of every app screen
pub const HOME_BUTTON: Rectangle = Rectangle::new(
    Point::new(CX - 50, DISPLAY_HEIGHT_PX as i32 - 60),
    Size::new(100, 40),
);

/// Start/stop button shared by the timer and stopwatch layouts
pub const START_STOP_BUTTON: Rectangle =
    Rectangle::new(Point::new(CX - 50, CY + 60), Size::new(100, 40));

pub const WIFI_TOGGLE: Rectangle = Rectangle::new(Point::new(CX - 60, CY - 20), Size::new(140, 40));

pub const CLOCK_TOGGLE: Rectangle =
    Rectangle::new(Point::new(CX - 60, CY + 30), Size::new(140, 40));

/// Area a press can land in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { center: Point, radius: u32 },
    Rect(Rectangle),
}

impl Shape {
    /// Circles include their boundary (`dx² + dy² <= r²`). Rectangles include
    /// every pixel they cover, edges included.
    pub fn contains(&self, point: Point) -> bool {
        match *self {
            Shape::Circle { center, radius } => {
                let dx = (point.x - center.x) as i64;
                let dy = (point.y - center.y) as i64;
                let r = radius as i64;
                dx * dx + dy * dy <= r * r
            }
            Shape::Rect(rect) => rect.contains(point),
        }
    }
}

/// Diameter to draw a circle of `radius` with, so the drawn pixels match
/// the inclusive [`Shape::Circle`] hit test.
pub const fn circle_diameter(radius: u32) -> u32 {
    radius * 2 + 1
}

/// A named, shaped area that routes a press to an [`Action`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegion {
    pub label: &'static str,
    pub action: Action,
    pub shape: Shape,
}

impl HitRegion {
    pub const fn new(label: &'static str, action: Action, shape: Shape) -> Self {
        Self {
            label,
            action,
            shape,
        }
    }
}

pub type Regions = Vec<HitRegion, MAX_REGIONS>;

/// First region, in enumeration order, containing the point.
pub fn hit_test(regions: &[HitRegion], point: Point) -> Option<&HitRegion> {
    regions.iter().find(|region| region.shape.contains(point))
}

/// Point at `length` pixels from `center` along `angle_deg`, measured
/// clockwise from 12 o'clock.
pub fn hand_endpoint(center: Point, angle_deg: f32, length: f32) -> Point {
    let rad = (angle_deg - 90.0) * PI / 180.0;
    Point::new(
        center.x + libm::roundf(libm::cosf(rad) * length) as i32,
        center.y + libm::roundf(libm::sinf(rad) * length) as i32,
    )
}

/// Linear interpolation from `start` to `end`.
pub fn tween(start: f32, end: f32, progress: f32) -> f32 {
    start + (end - start) * progress
}

/// Center of launcher icon `index`, spaced evenly around the ring starting
/// at 12 o'clock.
pub fn home_icon_center(index: usize) -> Point {
    let angle = index as f32 * 360.0 / APP_COUNT as f32;
    hand_endpoint(DISPLAY_CENTER, angle, ICON_RING_RADIUS_PX)
}

pub fn home_regions() -> Regions {
    let mut regions = Regions::new();
    for (i, app) in AppId::ALL.iter().enumerate() {
        regions
            .push(HitRegion::new(
                app.name(),
                Action::SelectApp(*app),
                Shape::Circle {
                    center: home_icon_center(i),
                    radius: ICON_RADIUS_PX,
                },
            ))
            .ok();
    }
    regions
}

/// Regions of an app screen: the Home button first, then the app's own.
pub fn app_regions(app: AppId) -> Regions {
    let mut regions = Regions::new();
    regions
        .push(HitRegion::new("home", Action::GoHome, Shape::Rect(HOME_BUTTON)))
        .ok();

    match app {
        AppId::Timer => {
            regions
                .push(HitRegion::new(
                    "timer",
                    Action::ToggleTimer,
                    Shape::Rect(START_STOP_BUTTON),
                ))
                .ok();
        }
        AppId::Stopwatch => {
            regions
                .push(HitRegion::new(
                    "stopwatch",
                    Action::ToggleStopwatch,
                    Shape::Rect(START_STOP_BUTTON),
                ))
                .ok();
        }
        AppId::Settings => {
            regions
                .push(HitRegion::new(
                    "wifi",
                    Action::ToggleWifi,
                    Shape::Rect(WIFI_TOGGLE),
                ))
                .ok();
            regions
                .push(HitRegion::new(
                    "clock",
                    Action::ToggleClockFormat,
                    Shape::Rect(CLOCK_TOGGLE),
                ))
                .ok();
        }
        AppId::Heart => {}
    }
    regions
}

/// Regions for a screen. The lock screen has none: any press unlocks it.
pub fn regions_for(screen: Screen) -> Regions {
    match screen {
        Screen::Lock => Regions::new(),
        Screen::Home => home_regions(),
        Screen::App(app) => app_regions(app),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_centers() {
        assert_eq!(home_icon_center(0), Point::new(240, 48));
        assert_eq!(home_icon_center(1), Point::new(432, 240));
        assert_eq!(home_icon_center(2), Point::new(240, 432));
        assert_eq!(home_icon_center(3), Point::new(48, 240));
    }

    #[test]
    fn test_circle_boundary_is_inclusive() {
        let circle = Shape::Circle {
            center: Point::new(100, 100),
            radius: 40,
        };
        assert!(circle.contains(Point::new(140, 100)));
        assert!(circle.contains(Point::new(100, 60)));
        assert!(circle.contains(Point::new(124, 132)));
        assert!(!circle.contains(Point::new(141, 100)));
        assert!(!circle.contains(Point::new(129, 129)));
    }

    #[test]
    fn test_rect_includes_edge_pixels() {
        let rect = Shape::Rect(HOME_BUTTON);
        assert!(rect.contains(Point::new(190, 420)));
        assert!(rect.contains(Point::new(289, 459)));
        assert!(!rect.contains(Point::new(290, 440)));
        assert!(!rect.contains(Point::new(189, 440)));
        assert!(!rect.contains(Point::new(240, 460)));
    }

    #[test]
    fn test_home_hit_test_each_icon() {
        let regions = home_regions();
        for (i, app) in AppId::ALL.iter().enumerate() {
            let center = home_icon_center(i);
            let hit = hit_test(&regions, center + Point::new(20, -20));
            assert_eq!(hit.map(|r| r.action), Some(Action::SelectApp(*app)));
        }
        assert!(hit_test(&regions, DISPLAY_CENTER).is_none());
        assert!(hit_test(&regions, Point::new(0, 0)).is_none());
    }

    #[test]
    fn test_home_button_enumerated_first() {
        for app in AppId::ALL {
            let regions = app_regions(app);
            assert_eq!(regions[0].label, "home");
            assert_eq!(regions[0].action, Action::GoHome);
        }
    }

    #[test]
    fn test_app_specific_regions() {
        let labels = |app| {
            app_regions(app)
                .iter()
                .map(|r| r.label)
                .collect::<Vec<&str, MAX_REGIONS>>()
        };
        assert_eq!(labels(AppId::Timer).as_slice(), ["home", "timer"]);
        assert_eq!(labels(AppId::Stopwatch).as_slice(), ["home", "stopwatch"]);
        assert_eq!(labels(AppId::Heart).as_slice(), ["home"]);
        assert_eq!(labels(AppId::Settings).as_slice(), ["home", "wifi", "clock"]);
    }

    #[test]
    fn test_regions_are_disjoint() {
        for screen in [
            Screen::Home,
            Screen::App(AppId::Timer),
            Screen::App(AppId::Settings),
        ] {
            let regions = regions_for(screen);
            for x in (0..DISPLAY_WIDTH_PX as i32).step_by(4) {
                for y in (0..DISPLAY_HEIGHT_PX as i32).step_by(4) {
                    let p = Point::new(x, y);
                    let hits = regions.iter().filter(|r| r.shape.contains(p)).count();
                    assert!(hits <= 1, "{:?} overlaps at {:?}", screen, p);
                }
            }
        }
    }

    #[test]
    fn test_lock_has_no_regions() {
        assert!(regions_for(Screen::Lock).is_empty());
    }

    #[test]
    fn test_hand_endpoint() {
        let c = Point::new(240, 240);
        assert_eq!(hand_endpoint(c, 0.0, 100.0), Point::new(240, 140));
        assert_eq!(hand_endpoint(c, 90.0, 100.0), Point::new(340, 240));
        assert_eq!(hand_endpoint(c, 180.0, 100.0), Point::new(240, 340));
        assert_eq!(hand_endpoint(c, 270.0, 100.0), Point::new(140, 240));
    }

    #[test]
    fn test_tween() {
        assert_eq!(tween(0.5, 1.0, 0.0), 0.5);
        assert_eq!(tween(0.5, 1.0, 1.0), 1.0);
        assert_eq!(tween(0.5, 1.0, 0.5), 0.75);
    }
}
