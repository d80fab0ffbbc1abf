//! Colouring algorithms.

use std::ops::Index;

use log::trace;

use crate::pixel::{self, Argb};

/// Gradient used for points that escape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PaletteKind {
    /// Grey ramp that saturates within the first quarter of the iteration range.
    /// The set itself is opaque black.
    Grayscale,
    /// Red to green over the first half, green to blue over the second half.
    /// The set itself is opaque blue.
    #[default]
    RedGreenBlue,
}

impl PaletteKind {
    /// Colour of points that never escape.
    pub fn sentinel(self) -> Argb {
        match self {
            PaletteKind::Grayscale => pixel::OPAQUE,
            PaletteKind::RedGreenBlue => pixel::rgb(0, 0, 255),
        }
    }
}

/// Lookup table from iteration count (`0..=max_iterations`) to colour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colours: Vec<Argb>,
}

impl Palette {
    pub fn new(kind: PaletteKind, max_iterations: u32) -> Self {
        trace!("begin palette {:?} for {} iterations", kind, max_iterations);

        let mut colours = match kind {
            PaletteKind::Grayscale => grayscale(max_iterations),
            PaletteKind::RedGreenBlue => red_green_blue(max_iterations),
        };
        colours.push(kind.sentinel());
        debug_assert_eq!(colours.len(), max_iterations as usize + 1);

        trace!("end palette");
        Self { colours }
    }

    /// The highest iteration count this palette can colour.
    pub fn max_iterations(&self) -> u32 {
        (self.colours.len() - 1) as u32
    }

    pub fn sentinel(&self) -> Argb {
        self.colours[self.colours.len() - 1]
    }

    pub fn colour(&self, iteration: u32) -> Argb {
        self.colours[iteration as usize]
    }

    pub fn as_slice(&self) -> &[Argb] {
        &self.colours
    }
}

impl Index<u32> for Palette {
    type Output = Argb;

    fn index(&self, iteration: u32) -> &Self::Output {
        &self.colours[iteration as usize]
    }
}

fn grayscale(max_iterations: u32) -> Vec<Argb> {
    let step = 255 / (max_iterations / 4).max(1);
    (0..max_iterations)
        .map(|i| {
            let level = i.saturating_mul(step).min(255) as u8;
            pixel::rgb(level, level, level)
        })
        .collect()
}

fn red_green_blue(max_iterations: u32) -> Vec<Argb> {
    if max_iterations == 0 {
        return Vec::new();
    }

    let scale = 510 / max_iterations;
    let half = max_iterations / 2;
    let mut colours = Vec::with_capacity(max_iterations as usize + 1);

    // Red to green.
    colours.extend((0..half).map(|i| {
        let ramp = (i * scale) as u8;
        pixel::rgb(255 - ramp, ramp, 0)
    }));

    // Green to blue; takes the extra entry when `max_iterations` is odd.
    colours.extend((0..max_iterations - half).map(|i| {
        let ramp = (i * scale) as u8;
        pixel::rgb(0, 255 - ramp, ramp)
    }));

    colours
}
