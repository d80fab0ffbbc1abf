//! Escape-time rendering of the pixel grid.

use std::time::{Duration, Instant};

use log::{debug, info, trace};
use rayon::prelude::{IndexedParallelIterator, ParallelIterator, ParallelSliceMut};

use crate::{
    colour::Palette,
    compute,
    config::{RenderConfig, Sweep},
    error::RenderError,
    escape::escape_time,
    pixel::Argb,
    screen,
    viewport::Viewport,
};

/// A fully computed image. Pixels are row-major, index `x + width * y`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    size: screen::Size,
    pixels: Vec<Argb>,
}

impl PixelBuffer {
    pub fn size(&self) -> screen::Size {
        self.size
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Argb> {
        if x < self.size.width && y < self.size.height {
            Some(self.pixels[self.size.index(x, y)])
        } else {
            None
        }
    }

    pub fn as_slice(&self) -> &[Argb] {
        &self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

/// A rendered image and how long it took to compute.
#[derive(Clone, Debug)]
pub struct RenderResult {
    pub pixels: PixelBuffer,
    pub elapsed: Duration,
}

impl RenderResult {
    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed.as_millis()
    }

    /// Timing message drawn in the corner of the window.
    pub fn message(&self) -> String {
        format!(" done in {}ms.", self.elapsed_millis())
    }
}

/// Render the configured image, colouring each pixel from `palette`.
///
/// `palette` needs an entry for every count up to `config.max_iterations`.
pub fn render(config: &RenderConfig, palette: &Palette) -> Result<RenderResult, RenderError> {
    let size = config.size;
    if size.is_empty() {
        return Err(RenderError::InvalidSize(size));
    }
    if palette.max_iterations() < config.max_iterations {
        return Err(RenderError::PaletteTooShort {
            entries: palette.as_slice().len(),
            max_iterations: config.max_iterations,
        });
    }

    let mut pixels = allocate(size)?;

    trace!("begin render {}x{}", size.width, size.height);
    let start = Instant::now();

    let viewport = Viewport::new(size);
    match config.sweep {
        Sweep::Sequential => sweep_rows(&viewport, config.max_iterations, palette, 0, &mut pixels),
        Sweep::Tiled => sweep_tiles(&viewport, config.max_iterations, palette, &mut pixels),
    }

    let elapsed = start.elapsed();
    trace!("end render");
    info!(
        "rendered {}x{} ({:?}) in {}ms",
        size.width,
        size.height,
        config.sweep,
        elapsed.as_millis()
    );

    Ok(RenderResult {
        pixels: PixelBuffer { size, pixels },
        elapsed,
    })
}

fn allocate(size: screen::Size) -> Result<Vec<Argb>, RenderError> {
    let count = size.pixel_count();
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(count)
        .map_err(|source| RenderError::Allocation {
            pixels: count,
            source,
        })?;
    pixels.resize(count, 0);
    Ok(pixels)
}

fn sweep_tiles(viewport: &Viewport, max_iterations: u32, palette: &Palette, pixels: &mut [Argb]) {
    let width = viewport.size().width as usize;
    let rows = compute::tile_rows(viewport.size().height, compute::worker_count());
    debug!("sweeping in tiles of {} rows", rows);

    pixels
        .par_chunks_mut(rows * width)
        .enumerate()
        .for_each(|(tile, chunk)| {
            let first_row = (tile * rows) as u32;
            sweep_rows(viewport, max_iterations, palette, first_row, chunk);
        });
}

/// Fill `pixels` with whole rows of the image, starting at row `first_row`.
fn sweep_rows(
    viewport: &Viewport,
    max_iterations: u32,
    palette: &Palette,
    first_row: u32,
    pixels: &mut [Argb],
) {
    let width = viewport.size().width as usize;
    for (offset, row) in pixels.chunks_mut(width).enumerate() {
        let py = first_row + offset as u32;
        for (px, pixel) in row.iter_mut().enumerate() {
            let c = viewport.to_complex(px as u32, py);
            *pixel = palette.colour(escape_time(c, max_iterations));
        }
    }
}
