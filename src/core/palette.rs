use tracing::debug;

use crate::core::cell::cell_at;
use crate::core::color::{Rgba, GRID_LINE, OPAQUE_BLACK, PALETTE_SIZE, PICO8_PALETTE, SELECTION_BORDER};
use crate::core::constants::PALETTE_COLUMNS;
use crate::rendering::{PixelRect, Surface};

/// The fixed 16-color palette and the color currently selected for painting
#[derive(Clone, Debug)]
pub struct Palette {
    colors: [Rgba; PALETTE_SIZE],
    current: usize,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    pub fn new() -> Self {
        Self {
            colors: PICO8_PALETTE,
            current: 0,
        }
    }

    /// Color for `index`, or opaque black when out of range
    pub fn get_color(&self, index: usize) -> Rgba {
        self.colors.get(index).copied().unwrap_or(OPAQUE_BLACK)
    }

    pub fn color_count(&self) -> usize {
        self.colors.len()
    }

    pub fn current_color_index(&self) -> usize {
        self.current
    }

    pub fn current_color(&self) -> Rgba {
        self.get_color(self.current)
    }

    /// Out-of-range indices are ignored
    pub fn set_current_color_index(&mut self, index: usize) {
        if index < self.color_count() {
            self.current = index;
        }
    }

    /// Swatches in rows of four; the selected one gets a two-pixel white border
    pub fn render(&self, surface: &mut dyn Surface, x: i32, y: i32, cell_size: i32) {
        for (i, color) in self.colors.iter().enumerate() {
            let col = (i % PALETTE_COLUMNS) as i32;
            let row = (i / PALETTE_COLUMNS) as i32;
            let rect = PixelRect::square(x + col * cell_size, y + row * cell_size, cell_size);

            surface.fill_rect(rect, *color);

            if i == self.current {
                for border in 0..2 {
                    surface.stroke_rect(rect.grown(border), SELECTION_BORDER);
                }
            } else {
                surface.stroke_rect(rect, GRID_LINE);
            }
        }
    }

    /// Select the swatch under the pointer. Returns whether the click landed on one.
    pub fn handle_click(
        &mut self,
        mouse_x: i32,
        mouse_y: i32,
        origin_x: i32,
        origin_y: i32,
        cell_size: i32,
    ) -> bool {
        let Some((col, row)) = cell_at((mouse_x, mouse_y), (origin_x, origin_y), cell_size) else {
            return false;
        };
        let rows = self.color_count().div_ceil(PALETTE_COLUMNS);
        if col >= PALETTE_COLUMNS || row >= rows {
            return false;
        }

        let index = row * PALETTE_COLUMNS + col;
        if index < self.color_count() {
            self.set_current_color_index(index);
            debug!(index, "palette color selected");
            return true;
        }

        false
    }
}
