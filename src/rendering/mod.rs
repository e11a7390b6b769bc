pub mod hud;
pub mod preview;
pub mod surface;

pub use hud::Hud;
pub use preview::PreviewRenderer;
pub use surface::{MacroquadSurface, PixelRect, Surface};
