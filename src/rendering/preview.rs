//! Self-similar preview of the edited image.
//!
//! Every painted cell of the grid is replaced by a miniature of the whole
//! image, tinted with that cell's palette color. The whole picture breathes
//! with a slow sinusoidal zoom around the centre of its nominal footprint.
//!
//! The nesting is exactly one level deep: the miniature only shows which
//! cells are painted, not their colors.

use std::f64::consts::TAU;

use tracing::warn;

use crate::core::{Grid, LayoutError, Palette, Rgba};
use crate::rendering::{PixelRect, Surface};

pub const PULSE_PERIOD_SECS: f64 = 10.0;

/// Zoom multiplier after `elapsed_secs` of animation, oscillating in [1.0, 2.0]
pub fn pulse(elapsed_secs: f64) -> f64 {
    1.5 + 0.5 * (TAU * elapsed_secs / PULSE_PERIOD_SECS).sin()
}

pub struct PreviewRenderer {
    base_size: usize,
    output_size: usize,
    scale_factor: i32,
    /// Animation epoch in host clock seconds
    started_at: f64,
}

impl PreviewRenderer {
    pub fn new(base_size: usize, output_size: usize, started_at: f64) -> Result<Self, LayoutError> {
        if base_size == 0 {
            return Err(LayoutError::ZeroBaseSize);
        }
        if output_size < base_size {
            return Err(LayoutError::OutputTooSmall {
                base: base_size,
                output: output_size,
            });
        }
        if output_size % base_size != 0 {
            warn!(base_size, output_size, "preview output size is not a multiple of the grid size; cells will be truncated");
        }

        Ok(Self {
            base_size,
            output_size,
            scale_factor: (output_size / base_size) as i32,
            started_at,
        })
    }

    #[allow(dead_code)]
    pub fn base_size(&self) -> usize {
        self.base_size
    }

    pub fn output_size(&self) -> usize {
        self.output_size
    }

    pub fn scale_factor(&self) -> i32 {
        self.scale_factor
    }

    /// Cell pitch in pixels for the current animation frame
    pub fn adjusted_scale(&self, now: f64) -> i32 {
        (self.scale_factor as f64 * pulse(now - self.started_at)).floor() as i32
    }

    /// Offset that keeps the pulsing square centred on its nominal footprint
    fn center_offset(&self, adjusted_scale: i32) -> i32 {
        let base = self.base_size as i32;
        (self.scale_factor * base - adjusted_scale * base) / 2
    }

    pub fn render(
        &self,
        surface: &mut dyn Surface,
        grid: &Grid,
        palette: &Palette,
        offset_x: i32,
        offset_y: i32,
        now: f64,
    ) {
        let adjusted_scale = self.adjusted_scale(now);
        let center = self.center_offset(adjusted_scale);

        // background cells contribute nothing
        for (x, y, index) in grid.painted_cells() {
            let pixel_x = offset_x + center + x as i32 * adjusted_scale;
            let pixel_y = offset_y + center + y as i32 * adjusted_scale;
            self.stamp(surface, grid, pixel_x, pixel_y, adjusted_scale, palette.get_color(index));
        }
    }

    /// One monochrome miniature of the grid's painted cells inside a `size`-pixel square
    fn stamp(&self, surface: &mut dyn Surface, grid: &Grid, x: i32, y: i32, size: i32, color: Rgba) {
        let pixel_size = (size / self.base_size as i32).max(1);

        for (px, py, _) in grid.painted_cells() {
            let rect = PixelRect::square(x + px as i32 * pixel_size, y + py as i32 * pixel_size, pixel_size);
            surface.fill_rect(rect, color);
        }
    }
}
