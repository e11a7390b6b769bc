use tracing::debug;

use crate::core::cell::cell_at;
use crate::core::color::{Rgba, EMPTY_CELL, GRID_LINE, PLACEHOLDER_CELL};
use crate::core::palette::Palette;
use crate::rendering::{PixelRect, Surface};

/// Palette index that means "no paint"
pub const BACKGROUND_INDEX: usize = 0;

/// Square N×N matrix of palette indices, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    size: usize,
    pixels: Vec<usize>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            pixels: vec![BACKGROUND_INDEX; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.size && y < self.size).then_some(y * self.size + x)
    }

    /// Stored index, or background when out of bounds
    pub fn get_pixel(&self, x: i32, y: i32) -> usize {
        self.offset(x, y).map_or(BACKGROUND_INDEX, |i| self.pixels[i])
    }

    /// Out-of-bounds writes are ignored. `index` is trusted to be a palette slot.
    pub fn set_pixel(&mut self, x: i32, y: i32, index: usize) {
        if let Some(i) = self.offset(x, y) {
            self.pixels[i] = index;
        }
    }

    pub fn clear(&mut self) {
        self.pixels.fill(BACKGROUND_INDEX);
    }

    /// Row-major view of every cell
    #[allow(dead_code)]
    pub fn pixel_data(&self) -> &[usize] {
        &self.pixels
    }

    /// `(x, y, index)` for every cell that holds paint
    pub fn painted_cells(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.pixels
            .iter()
            .enumerate()
            .filter(|&(_, &index)| index != BACKGROUND_INDEX)
            .map(move |(i, &index)| (i % self.size, i / self.size, index))
    }

    /// Neutral rendering: empty cells light, painted cells a flat placeholder
    #[allow(dead_code)]
    pub fn render(&self, surface: &mut dyn Surface, offset_x: i32, offset_y: i32, cell_size: i32) {
        self.render_cells(surface, offset_x, offset_y, cell_size, |index| {
            if index == BACKGROUND_INDEX { EMPTY_CELL } else { PLACEHOLDER_CELL }
        });
    }

    /// Every cell in its palette color
    pub fn render_colored(
        &self,
        surface: &mut dyn Surface,
        palette: &Palette,
        offset_x: i32,
        offset_y: i32,
        cell_size: i32,
    ) {
        self.render_cells(surface, offset_x, offset_y, cell_size, |index| palette.get_color(index));
    }

    fn render_cells(
        &self,
        surface: &mut dyn Surface,
        offset_x: i32,
        offset_y: i32,
        cell_size: i32,
        fill: impl Fn(usize) -> Rgba,
    ) {
        for (i, &index) in self.pixels.iter().enumerate() {
            let x = (i % self.size) as i32;
            let y = (i / self.size) as i32;
            let rect = PixelRect::square(offset_x + x * cell_size, offset_y + y * cell_size, cell_size);

            surface.fill_rect(rect, fill(index));
            surface.stroke_rect(rect, GRID_LINE);
        }
    }

    /// Paint the cell under the pointer with `color_index`. Returns whether a cell was hit.
    pub fn handle_click(
        &mut self,
        mouse_x: i32,
        mouse_y: i32,
        origin_x: i32,
        origin_y: i32,
        cell_size: i32,
        color_index: usize,
    ) -> bool {
        let Some((x, y)) = cell_at((mouse_x, mouse_y), (origin_x, origin_y), cell_size) else {
            return false;
        };
        if x >= self.size || y >= self.size {
            return false;
        }

        self.set_pixel(x as i32, y as i32, color_index);
        debug!(x, y, color_index, "cell painted");
        true
    }
}
