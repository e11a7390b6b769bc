// Compiled-in layout and runtime configuration
use tracing::Level;

pub const WINDOW_TITLE: &str = "PixelRecursor - Recursive Pixel Art Editor";
pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;

pub const GRID_SIZE: usize = 8;
pub const PREVIEW_OUTPUT_SIZE: usize = 64;

pub const EDITOR_ORIGIN: (i32, i32) = (50, 80);
pub const EDITOR_CELL_SIZE: i32 = 40;

pub const PALETTE_ORIGIN: (i32, i32) = (50, 450);
pub const PALETTE_CELL_SIZE: i32 = 30;
pub const PALETTE_COLUMNS: usize = 4;

pub const PREVIEW_ORIGIN: (i32, i32) = (400, 80);

/// Section labels sit this far above their component's origin
pub const LABEL_OFFSET: i32 = 25;
pub const LABEL_FONT_SIZE: u16 = 20;

pub const LOG_LEVEL: Level = Level::INFO;

/// macroquad window configuration built from the constants above
pub fn window_conf() -> macroquad::window::Conf {
    macroquad::window::Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}
