// src/ui/components/text.rs
//! Text sizes and a single-line text helper

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{
    MonoFont, MonoTextStyle,
    ascii::{FONT_6X10, FONT_8X13, FONT_10X20},
};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

/// Text size variants
///
/// - `Tiny`: 6x10 font, used inside the battery gauge
/// - `Small`: 8x13 font, labels and hints
/// - `Large`: 10x20 font, titles and readouts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextSize {
    Tiny,
    Small,
    Large,
}

impl TextSize {
    pub fn font(&self) -> &'static MonoFont<'static> {
        match self {
            TextSize::Tiny => &FONT_6X10,
            TextSize::Small => &FONT_8X13,
            TextSize::Large => &FONT_10X20,
        }
    }

    /// Pixel size of a single line of `text`.
    pub fn measure(&self, text: &str) -> Size {
        let font = self.font();
        let advance = font.character_size.width + font.character_spacing;
        let chars = text.chars().count() as u32;
        let width = (chars * advance).saturating_sub(font.character_spacing);
        Size::new(width, font.character_size.height)
    }
}

/// Draw one line of text anchored at `anchor`.
pub fn draw_text<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    text: &str,
    anchor: Point,
    size: TextSize,
    color: Rgb565,
    alignment: Alignment,
    baseline: Baseline,
) -> Result<(), D::Error> {
    let text_style = TextStyleBuilder::new()
        .alignment(alignment)
        .baseline(baseline)
        .build();
    Text::with_text_style(
        text,
        anchor,
        MonoTextStyle::new(size.font(), color),
        text_style,
    )
    .draw(display)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure() {
        assert_eq!(TextSize::Small.measure("07:05"), Size::new(40, 13));
        assert_eq!(TextSize::Large.measure("Timer"), Size::new(50, 20));
        assert_eq!(TextSize::Tiny.measure(""), Size::new(0, 10));
    }
}
