//! Application State Module
//!
//! `ApplicationState` is the single owned context of the editor: the grid
//! being painted, the palette, the preview renderer and the running flag.
//! The host driver feeds it one frame at a time through [`ApplicationState::frame`].

use crate::core::color::{BACKGROUND, LABEL_TEXT};
use crate::core::constants::*;
use crate::core::{Grid, LayoutError, Palette};
use crate::input::{dispatch, InputEvent};
use crate::rendering::{PreviewRenderer, Surface};

pub struct ApplicationState {
    /// The image being edited
    pub grid: Grid,
    /// Fixed colors plus the current selection
    pub palette: Palette,
    /// Animated self-similar view of `grid`
    pub preview: PreviewRenderer,
    /// Cleared by a quit request; checked once per frame
    pub running: bool,
}

impl ApplicationState {
    /// `started_at` is the host clock reading, in seconds, used as the animation epoch
    pub fn new(started_at: f64) -> Result<Self, LayoutError> {
        Ok(ApplicationState {
            grid: Grid::new(GRID_SIZE),
            palette: Palette::new(),
            preview: PreviewRenderer::new(GRID_SIZE, PREVIEW_OUTPUT_SIZE, started_at)?,
            running: true,
        })
    }

    /// Apply this frame's input, then draw it. Returns whether the editor keeps running.
    pub fn frame(&mut self, surface: &mut dyn Surface, events: &[InputEvent], now: f64) -> bool {
        for event in events {
            dispatch(self, event);
        }

        if self.running {
            self.render(surface, now);
        }
        self.running
    }

    pub fn render(&self, surface: &mut dyn Surface, now: f64) {
        surface.clear(BACKGROUND);

        self.palette.render(surface, PALETTE_ORIGIN.0, PALETTE_ORIGIN.1, PALETTE_CELL_SIZE);
        self.grid.render_colored(surface, &self.palette, EDITOR_ORIGIN.0, EDITOR_ORIGIN.1, EDITOR_CELL_SIZE);
        self.preview.render(surface, &self.grid, &self.palette, PREVIEW_ORIGIN.0, PREVIEW_ORIGIN.1, now);

        for (label, (x, y)) in [("Editor", EDITOR_ORIGIN), ("Palette", PALETTE_ORIGIN), ("Preview", PREVIEW_ORIGIN)] {
            surface.text(label, x, y - LABEL_OFFSET, LABEL_FONT_SIZE, LABEL_TEXT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::{KeyCode, MouseButton};

    use crate::core::color::PICO8_PALETTE;
    use crate::rendering::surface::recording::{DrawCall, RecordingSurface};
    use crate::rendering::PixelRect;

    fn click(x: i32, y: i32) -> InputEvent {
        InputEvent::PointerDown {
            x,
            y,
            button: MouseButton::Left,
        }
    }

    #[test]
    fn starts_with_default_layout() {
        let state = ApplicationState::new(0.0).unwrap();
        assert!(state.running);
        assert_eq!(state.grid.size(), 8);
        assert_eq!(state.palette.current_color_index(), 0);
        assert_eq!(state.preview.scale_factor(), 8);
    }

    #[test]
    fn frame_clears_then_draws_palette_grid_and_labels() {
        let mut state = ApplicationState::new(0.0).unwrap();
        let mut surface = RecordingSurface::new();

        assert!(state.frame(&mut surface, &[], 0.0));

        assert_eq!(surface.calls[0], DrawCall::Clear(BACKGROUND));
        // 16 swatches + 64 cells, empty grid adds nothing to the preview
        assert_eq!(surface.fills().len(), 16 + 64);
        assert_eq!(surface.fills()[0].0, PixelRect::square(50, 450, 30));
        assert_eq!(surface.fills()[16].0, PixelRect::square(50, 80, 40));
        assert_eq!(surface.texts(), vec!["Editor", "Palette", "Preview"]);
        assert!(surface
            .calls
            .contains(&DrawCall::Text("Preview".to_owned(), 400, 55, LABEL_TEXT)));
    }

    #[test]
    fn select_then_paint_reaches_editor_and_preview() {
        let mut state = ApplicationState::new(0.0).unwrap();
        let mut surface = RecordingSurface::new();

        // red swatch is index 8: column 0, row 2
        let events = [click(55, 450 + 2 * 30 + 5), click(90, 120)];
        state.frame(&mut surface, &events, 0.0);

        assert_eq!(state.palette.current_color_index(), 8);
        assert_eq!(state.grid.get_pixel(1, 1), 8);

        let fills = surface.fills();
        assert_eq!(fills[16 + 9], (PixelRect::square(90, 120, 40), PICO8_PALETTE[8]));
        // one stamped sub-cell in the preview
        assert_eq!(fills.len(), 16 + 64 + 1);
        assert_eq!(fills.last().map(|(_, c)| *c), Some(PICO8_PALETTE[8]));
    }

    #[test]
    fn quit_stops_without_drawing() {
        let mut state = ApplicationState::new(0.0).unwrap();
        let mut surface = RecordingSurface::new();

        assert!(!state.frame(&mut surface, &[InputEvent::Quit], 0.0));
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn clear_key_empties_the_grid() {
        let mut state = ApplicationState::new(0.0).unwrap();
        let mut surface = RecordingSurface::new();
        state.grid.set_pixel(3, 3, 4);

        state.frame(&mut surface, &[InputEvent::KeyDown(KeyCode::C)], 0.0);

        assert!(state.grid.pixel_data().iter().all(|&p| p == 0));
    }

    #[test]
    fn independent_instances_do_not_share_state() {
        let mut first = ApplicationState::new(0.0).unwrap();
        let second = ApplicationState::new(0.0).unwrap();
        first.grid.set_pixel(0, 0, 2);
        assert_eq!(second.grid.get_pixel(0, 0), 0);
    }
}
