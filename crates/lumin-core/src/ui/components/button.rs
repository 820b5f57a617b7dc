// src/ui/components/button.rs
//! Button component used for the Home button, start/stop buttons and toggles

use crate::ui::components::text::{TextSize, draw_text};
use crate::ui::core::Drawable;
use crate::ui::styling::{COLOR_BUTTON, COLOR_TEXT};
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::{Alignment as TextAlignment, Baseline};

/// Where the label sits inside the button
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelAlignment {
    /// Centered in the button
    Center,
    /// Left aligned, inset by the given number of pixels
    Left(u32),
}

/// Button component with a label
///
/// A filled rounded rectangle with a single line of text. The button itself
/// does not hit-test; the watch routes presses through the pure geometry in
/// [`crate::layout`], which uses the same rectangles the pages hand to
/// [`Button::new`].
///
/// # Examples
/// ```ignore
/// let button = Button::new(HOME_BUTTON, "Home").with_fill(palette.button);
/// ```
pub struct Button {
    bounds: Rectangle,
    label: heapless::String<32>,
    fill: Rgb565,
    text_color: Rgb565,
    label_alignment: LabelAlignment,
    border_radius: u32,
}

impl Button {
    /// Create a new button with the specified bounds and label.
    ///
    /// Labels longer than 32 bytes are truncated.
    pub fn new(bounds: Rectangle, label: &str) -> Self {
        let mut label_string = heapless::String::new();
        for c in label.chars() {
            if label_string.push(c).is_err() {
                break;
            }
        }

        Self {
            bounds,
            label: label_string,
            fill: COLOR_BUTTON,
            text_color: COLOR_TEXT,
            label_alignment: LabelAlignment::Center,
            border_radius: 6,
        }
    }

    pub fn with_fill(mut self, fill: Rgb565) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_text_color(mut self, color: Rgb565) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_label_alignment(mut self, alignment: LabelAlignment) -> Self {
        self.label_alignment = alignment;
        self
    }

    /// Set the border radius for rounded corners. Default is 6 pixels.
    pub fn with_border_radius(mut self, radius: u32) -> Self {
        self.border_radius = radius;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    fn label_anchor(&self) -> (Point, TextAlignment) {
        let center = self.bounds.center();
        match self.label_alignment {
            LabelAlignment::Center => (center, TextAlignment::Center),
            LabelAlignment::Left(inset) => (
                Point::new(self.bounds.top_left.x + inset as i32, center.y),
                TextAlignment::Left,
            ),
        }
    }
}

impl Drawable for Button {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let corner_radius = Size::new(self.border_radius, self.border_radius);
        RoundedRectangle::with_equal_corners(self.bounds, corner_radius)
            .into_styled(PrimitiveStyle::with_fill(self.fill))
            .draw(display)?;

        let (anchor, alignment) = self.label_anchor();
        draw_text(
            display,
            &self.label,
            anchor,
            TextSize::Small,
            self.text_color,
            alignment,
            Baseline::Middle,
        )
    }
}
