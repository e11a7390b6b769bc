pub mod cell;
pub mod color;
pub mod constants;
pub mod error;
pub mod grid;
pub mod palette;

pub use color::Rgba;
pub use error::LayoutError;
pub use grid::Grid;
pub use palette::Palette;
