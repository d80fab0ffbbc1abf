use std::collections::TryReserveError;

use crate::screen;

/// Rendering error types
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("cannot render an empty image ({}x{})", .0.width, .0.height)]
    InvalidSize(screen::Size),
    #[error("palette has {entries} colours, {max_iterations} iterations need {}", .max_iterations + 1)]
    PaletteTooShort { entries: usize, max_iterations: u32 },
    #[error("failed to allocate a pixel buffer of {pixels} pixels: {source}")]
    Allocation {
        pixels: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Configuration error types
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("image size must be at least 1 pixel")]
    ZeroSize,
    #[error("image size {0} is larger than the display limit of {}", crate::config::MAX_SIZE)]
    SizeTooLarge(u32),
    #[error("zoom must be a positive multiple of 0.1, got {0}")]
    InvalidZoom(f64),
}
