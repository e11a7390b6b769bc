use crate::core::constants::WINDOW_HEIGHT;
use crate::core::Rgba;
use crate::core::color::GRID_LINE;
use crate::rendering::{PixelRect, Surface};
use crate::state::ApplicationState;

const HUD_TEXT: Rgba = Rgba::rgb(160, 160, 160);
const HUD_FONT_SIZE: u16 = 18;
const SWATCH_SIZE: i32 = 14;

pub struct Hud {
    fps: i32,
    accum_time: f32,
    accum_frames: i32,
}

impl Hud {
    pub fn new() -> Self {
        Hud {
            fps: 0,
            accum_time: 0.0,
            accum_frames: 0,
        }
    }

    #[allow(dead_code)]
    pub fn fps(&self) -> i32 {
        self.fps
    }

    pub fn update(&mut self, dt: f32) {
        self.accum_time += dt;
        self.accum_frames += 1;
        if self.accum_time >= 1.0 {
            self.fps = (self.accum_frames as f32 / self.accum_time).round() as i32;
            self.accum_time = 0.0;
            self.accum_frames = 0;
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface, state: &ApplicationState) {
        let y = WINDOW_HEIGHT - 24;

        surface.text(&format!("FPS: {}", self.fps), 400, y, HUD_FONT_SIZE, HUD_TEXT);
        surface.text(
            &format!("Color: {}", state.palette.current_color_index()),
            490,
            y,
            HUD_FONT_SIZE,
            HUD_TEXT,
        );

        let swatch = PixelRect::square(570, y + 2, SWATCH_SIZE);
        surface.fill_rect(swatch, state.palette.current_color());
        surface.stroke_rect(swatch, GRID_LINE);

        surface.text("C: clear  Esc: quit", 600, y, HUD_FONT_SIZE, HUD_TEXT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::PICO8_PALETTE;
    use crate::rendering::surface::recording::RecordingSurface;

    #[test]
    fn fps_is_averaged_over_one_second() {
        let mut hud = Hud::new();
        for _ in 0..59 {
            hud.update(1.0 / 60.0);
        }
        assert_eq!(hud.fps(), 0);

        hud.update(1.0 / 60.0 + 0.001);
        assert_eq!(hud.fps(), 60);
    }

    #[test]
    fn draws_selected_color_index() {
        let mut state = ApplicationState::new(0.0).unwrap();
        state.palette.set_current_color_index(9);
        let mut surface = RecordingSurface::new();

        Hud::new().draw(&mut surface, &state);

        let texts = surface.texts();
        assert!(texts.contains(&"FPS: 0".to_owned()));
        assert!(texts.contains(&"Color: 9".to_owned()));
    }

    #[test]
    fn swatch_shows_the_selected_color() {
        let mut state = ApplicationState::new(0.0).unwrap();
        state.palette.set_current_color_index(12);
        let mut surface = RecordingSurface::new();

        Hud::new().draw(&mut surface, &state);

        assert_eq!(
            surface.fills(),
            vec![(PixelRect::square(570, WINDOW_HEIGHT - 22, SWATCH_SIZE), PICO8_PALETTE[12])]
        );
    }
}
