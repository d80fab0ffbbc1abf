use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imaginary: f64,
}

impl Complex {
    pub const ZERO: Self = Complex {
        real: 0.0,
        imaginary: 0.0,
    };

    pub fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }
}

/// Colour packed as `0xAARRGGBB`.
pub type Argb = u32;

pub const OPAQUE: Argb = 0xFF00_0000;

pub const fn argb(alpha: u8, red: u8, green: u8, blue: u8) -> Argb {
    (alpha as u32) << 24 | (red as u32) << 16 | (green as u32) << 8 | blue as u32
}

pub const fn rgb(red: u8, green: u8, blue: u8) -> Argb {
    argb(0xFF, red, green, blue)
}

pub const fn alpha(colour: Argb) -> u8 {
    (colour >> 24) as u8
}
