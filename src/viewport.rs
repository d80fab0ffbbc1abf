//! Pixel grid to complex plane mapping.

use crate::{pixel::Complex, screen};

/// Side length of the visible square of the complex plane.
pub const EXTENT: f64 = 4.0;

/// Complex coordinate shown at pixel `(0, 0)`.
pub const TOP_LEFT: Complex = Complex {
    real: -2.0,
    imaginary: 2.0,
};

/**
Maps a pixel grid onto `[-2, 2] x [-2, 2]`, row 0 at the top.

Both axes are divided by the pixel height, so the mapping has one uniform
scale. A non-square grid shows a wider or narrower strip of the same plane.
*/
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    size: screen::Size,
}

impl Viewport {
    pub fn new(size: screen::Size) -> Self {
        Self { size }
    }

    pub fn size(&self) -> screen::Size {
        self.size
    }

    pub fn real(&self, px: u32) -> f64 {
        (px as f64 * EXTENT) / self.size.height as f64 + TOP_LEFT.real
    }

    pub fn imaginary(&self, py: u32) -> f64 {
        TOP_LEFT.imaginary - (py as f64 * EXTENT) / self.size.height as f64
    }

    pub fn to_complex(&self, px: u32, py: u32) -> Complex {
        Complex::new(self.real(px), self.imaginary(py))
    }
}
