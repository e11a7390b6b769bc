use macroquad::prelude::*;

use crate::core::Rgba;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn square(x: i32, y: i32, size: i32) -> Self {
        Self::new(x, y, size, size)
    }

    /// Same rect grown by `by` pixels on every side
    pub const fn grown(self, by: i32) -> Self {
        Self::new(self.x - by, self.y - by, self.w + 2 * by, self.h + 2 * by)
    }
}

/// The 2D drawing primitives every component renders through
pub trait Surface {
    fn clear(&mut self, color: Rgba);
    fn fill_rect(&mut self, rect: PixelRect, color: Rgba);
    /// One-pixel outline inside `rect`
    fn stroke_rect(&mut self, rect: PixelRect, color: Rgba);
    fn text(&mut self, text: &str, x: i32, y: i32, size: u16, color: Rgba);
}

/// Draws straight to the macroquad window for the current frame
pub struct MacroquadSurface;

impl Surface for MacroquadSurface {
    fn clear(&mut self, color: Rgba) {
        clear_background(color.to_mq_color());
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgba) {
        draw_rectangle(rect.x as f32, rect.y as f32, rect.w as f32, rect.h as f32, color.to_mq_color());
    }

    fn stroke_rect(&mut self, rect: PixelRect, color: Rgba) {
        draw_rectangle_lines(rect.x as f32, rect.y as f32, rect.w as f32, rect.h as f32, 1.0, color.to_mq_color());
    }

    fn text(&mut self, text: &str, x: i32, y: i32, size: u16, color: Rgba) {
        // macroquad positions text by baseline
        let dims = measure_text(text, None, size, 1.0);
        draw_text(text, x as f32, y as f32 + dims.offset_y, size as f32, color.to_mq_color());
    }
}
