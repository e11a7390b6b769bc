#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to macroquad Color (f32 0.0-1.0)
    pub fn to_mq_color(self) -> macroquad::color::Color {
        macroquad::color::Color::from_rgba(self.r, self.g, self.b, self.a)
    }
}

pub const OPAQUE_BLACK: Rgba = Rgba::rgba(0, 0, 0, 255);

pub const PALETTE_SIZE: usize = 16;

/// PICO-8 inspired palette. Slot 0 doubles as the "no paint" background.
pub const PICO8_PALETTE: [Rgba; PALETTE_SIZE] = [
    Rgba::rgb(0, 0, 0),       // black
    Rgba::rgb(29, 43, 83),    // dark blue
    Rgba::rgb(126, 37, 83),   // dark purple
    Rgba::rgb(0, 135, 81),    // dark green
    Rgba::rgb(171, 82, 54),   // brown
    Rgba::rgb(95, 87, 79),    // dark grey
    Rgba::rgb(194, 195, 199), // light grey
    Rgba::rgb(255, 241, 232), // white
    Rgba::rgb(255, 0, 77),    // red
    Rgba::rgb(255, 163, 0),   // orange
    Rgba::rgb(255, 236, 39),  // yellow
    Rgba::rgb(0, 228, 54),    // green
    Rgba::rgb(41, 173, 255),  // blue
    Rgba::rgb(131, 118, 156), // indigo
    Rgba::rgb(255, 119, 168), // pink
    Rgba::rgb(255, 204, 170), // peach
];

// UI chrome
pub const BACKGROUND: Rgba = Rgba::rgb(32, 32, 32);
pub const EMPTY_CELL: Rgba = Rgba::rgb(240, 240, 240);
pub const PLACEHOLDER_CELL: Rgba = Rgba::rgb(200, 200, 200);
pub const GRID_LINE: Rgba = Rgba::rgb(128, 128, 128);
pub const SELECTION_BORDER: Rgba = Rgba::rgb(255, 255, 255);
pub const LABEL_TEXT: Rgba = Rgba::rgb(200, 200, 200);
