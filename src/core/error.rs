use thiserror::Error;

/// Startup configuration problems. Everything past startup is total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The preview needs at least one grid cell to scale from
    #[error("preview base size must be non-zero")]
    ZeroBaseSize,
    /// A preview smaller than the grid would scale every cell to nothing
    #[error("preview output size {output} is smaller than base size {base}")]
    OutputTooSmall { base: usize, output: usize },
}
