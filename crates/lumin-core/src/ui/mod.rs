// src/ui/mod.rs
//! LuminOS UI primitives
//!
//! This module provides:
//! - Core types shared by navigation and rendering (screens, actions, touch points)
//! - The color palette
//! - Reusable components (buttons)

pub mod components;
pub mod core;
pub mod styling;

pub use components::{Button, LabelAlignment, TextSize, draw_text};
pub use self::core::{Action, AppId, Drawable, Screen, TouchPoint};
pub use styling::{ColorPalette, lerp_color};

use embedded_graphics::prelude::Point;

/// Width of the square watch display in pixels
pub const DISPLAY_WIDTH_PX: u16 = 480;

/// Height of the square watch display in pixels
pub const DISPLAY_HEIGHT_PX: u16 = 480;

/// Center of the display
pub const DISPLAY_CENTER: Point = Point::new(
    DISPLAY_WIDTH_PX as i32 / 2,
    DISPLAY_HEIGHT_PX as i32 / 2,
);
