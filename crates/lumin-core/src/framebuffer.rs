//! RAM framebuffer with changed-area tracking.
//!
//! Pages draw the whole screen every frame, but only the clock hands, the
//! running counters and the status bar usually change. Drawing into this
//! buffer first and flushing afterwards sends only the bounding box of
//! pixels whose color actually changed to the real display.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::trace;

use crate::ui::{DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX};

const WIDTH: usize = DISPLAY_WIDTH_PX as usize;
const HEIGHT: usize = DISPLAY_HEIGHT_PX as usize;

/// Inclusive pixel bounds of everything changed since the last flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ChangedArea {
    min_x: usize,
    min_y: usize,
    max_x: usize,
    max_y: usize,
}

impl ChangedArea {
    fn at(x: usize, y: usize) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    fn include(&mut self, x: usize, y: usize) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    fn width(&self) -> usize {
        self.max_x - self.min_x + 1
    }

    fn height(&self) -> usize {
        self.max_y - self.min_y + 1
    }

    fn to_rectangle(self) -> Rectangle {
        Rectangle::new(
            Point::new(self.min_x as i32, self.min_y as i32),
            Size::new(self.width() as u32, self.height() as u32),
        )
    }
}

/// Full-screen `DrawTarget<Color = Rgb565>` backed by a heap buffer.
pub struct FrameBuffer {
    pixels: Vec<Rgb565>,
    changed: Option<ChangedArea>,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Allocate a framebuffer filled with black pixels.
    pub fn new() -> Self {
        Self {
            pixels: vec![Rgb565::BLACK; WIDTH * HEIGHT],
            changed: None,
        }
    }

    /// Color at a pixel, `None` outside the display.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb565> {
        if x < 0 || y < 0 || x as usize >= WIDTH || y as usize >= HEIGHT {
            return None;
        }
        Some(self.pixels[y as usize * WIDTH + x as usize])
    }

    /// Area that the next [`flush`](Self::flush) would send.
    pub fn changed_area(&self) -> Option<Rectangle> {
        self.changed.map(ChangedArea::to_rectangle)
    }

    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb565) {
        let idx = y * WIDTH + x;
        if self.pixels[idx] == color {
            return;
        }
        self.pixels[idx] = color;
        match &mut self.changed {
            Some(area) => area.include(x, y),
            None => self.changed = Some(ChangedArea::at(x, y)),
        }
    }

    /// Copy the changed area to `display` and reset tracking. No-op when
    /// nothing changed.
    pub fn flush<D>(&mut self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Some(area) = self.changed.take() else {
            return Ok(());
        };

        trace!(
            "Flushing {}x{} at ({}, {})",
            area.width(),
            area.height(),
            area.min_x,
            area.min_y
        );

        let pixels = &self.pixels;
        let width = area.width();
        let rows = (area.min_y..=area.max_y).flat_map(move |y| {
            let start = y * WIDTH + area.min_x;
            pixels[start..start + width].iter().copied()
        });

        display.fill_contiguous(&area.to_rectangle(), rows)
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if coord.x >= 0 && coord.y >= 0 && (coord.x as usize) < WIDTH && (coord.y as usize) < HEIGHT
            {
                self.set_pixel(coord.x as usize, coord.y as usize, color);
            }
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        // Colors are laid out row-major over the unclipped area, so walk all
        // of it and skip the clipped pixels.
        let mut colors = colors.into_iter();
        for row in 0..area.size.height as i32 {
            for col in 0..area.size.width as i32 {
                let Some(color) = colors.next() else {
                    return Ok(());
                };
                let x = area.top_left.x + col;
                let y = area.top_left.y + row;
                if x >= 0 && y >= 0 && (x as usize) < WIDTH && (y as usize) < HEIGHT {
                    self.set_pixel(x as usize, y as usize, color);
                }
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let clipped = area.intersection(&self.bounding_box());
        if clipped.is_zero_sized() {
            return Ok(());
        }
        let x0 = clipped.top_left.x as usize;
        let y0 = clipped.top_left.y as usize;
        for y in y0..y0 + clipped.size.height as usize {
            for x in x0..x0 + clipped.size.width as usize {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_solid(&self.bounding_box(), color)
    }
}
