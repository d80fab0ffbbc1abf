//! Render configuration and its command-line form.

use clap::{Parser, ValueEnum};

use crate::{colour::PaletteKind, error::ConfigError, screen, zoom::Zoom};

/// Side length of the window and image in pixels.
pub const DEFAULT_SIZE: u32 = 1024;

/// Largest side length the display accepts. `wgpu::Limits::default()` caps 2D
/// textures at this size.
pub const MAX_SIZE: u32 = 8192;

/// How long to test each point for divergence.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// How the pixel grid is swept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Sweep {
    /// One thread, row by row.
    Sequential,
    /// Disjoint row ranges computed on the rayon thread pool.
    #[default]
    Tiled,
}

/// Everything a render depends on. Two renders with equal configs produce
/// identical buffers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    pub size: screen::Size,
    pub max_iterations: u32,
    pub palette: PaletteKind,
    pub sweep: Sweep,
}

impl RenderConfig {
    pub fn square(side: u32) -> Self {
        Self {
            size: screen::Size::square(side),
            ..Self::default()
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_palette(mut self, palette: PaletteKind) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_sweep(mut self, sweep: Sweep) -> Self {
        self.sweep = sweep;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size: screen::Size::square(DEFAULT_SIZE),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            palette: PaletteKind::default(),
            sweep: Sweep::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PaletteArg {
    RedGreenBlue,
    Grayscale,
}

impl From<PaletteArg> for PaletteKind {
    fn from(value: PaletteArg) -> Self {
        match value {
            PaletteArg::RedGreenBlue => PaletteKind::RedGreenBlue,
            PaletteArg::Grayscale => PaletteKind::Grayscale,
        }
    }
}

/// Renders the Mandelbrot set over [-2, 2] x [-2, 2] and shows it in a window.
///
/// Press `+` and `-` to change the display zoom.
#[derive(Parser, Debug)]
#[command(name = "mandelbrot-canvas", version)]
pub struct Args {
    /// Width and height of the image in pixels
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    pub size: u32,

    /// Iteration cap for the escape test
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    /// Colour palette for escaping points
    #[arg(long, value_enum, default_value_t = PaletteArg::RedGreenBlue)]
    pub palette: PaletteArg,

    /// Initial display zoom, in steps of 0.1
    #[arg(long, default_value_t = 0.5)]
    pub zoom: f64,

    /// Compute the image on a single thread
    #[arg(long)]
    pub sequential: bool,
}

impl Args {
    pub fn render_config(&self) -> Result<RenderConfig, ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if self.size > MAX_SIZE {
            return Err(ConfigError::SizeTooLarge(self.size));
        }

        let sweep = if self.sequential {
            Sweep::Sequential
        } else {
            Sweep::Tiled
        };

        Ok(RenderConfig::square(self.size)
            .with_max_iterations(self.max_iterations)
            .with_palette(self.palette.into())
            .with_sweep(sweep))
    }

    pub fn initial_zoom(&self) -> Result<Zoom, ConfigError> {
        Zoom::from_factor(self.zoom).ok_or(ConfigError::InvalidZoom(self.zoom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("mandelbrot-canvas").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults_match_reference_constants() {
        let args = parse(&[]);
        let config = args.render_config().unwrap();
        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.size, screen::Size::square(1024));
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.palette, PaletteKind::RedGreenBlue);
        assert_eq!(config.sweep, Sweep::Tiled);
        assert_eq!(args.initial_zoom().unwrap(), Zoom::INITIAL);
    }

    #[test]
    fn flags_override_defaults() {
        let args = parse(&[
            "--size",
            "256",
            "--max-iterations",
            "40",
            "--palette",
            "grayscale",
            "--zoom",
            "1.2",
            "--sequential",
        ]);
        let config = args.render_config().unwrap();
        assert_eq!(config.size, screen::Size::square(256));
        assert_eq!(config.max_iterations, 40);
        assert_eq!(config.palette, PaletteKind::Grayscale);
        assert_eq!(config.sweep, Sweep::Sequential);
        assert_eq!(args.initial_zoom().unwrap().tenths(), 12);
    }

    #[test]
    fn rejects_unusable_values() {
        assert_eq!(
            parse(&["--size", "0"]).render_config(),
            Err(ConfigError::ZeroSize)
        );
        assert_eq!(
            parse(&["--zoom", "0"]).initial_zoom(),
            Err(ConfigError::InvalidZoom(0.0))
        );
        assert!(Args::try_parse_from(["mandelbrot-canvas", "--palette", "sepia"]).is_err());
    }

    #[test]
    fn size_is_limited_to_display_texture_limit() {
        assert_eq!(
            parse(&["--size", "8192"]).render_config().map(|config| config.size),
            Ok(screen::Size::square(MAX_SIZE))
        );
        assert_eq!(
            parse(&["--size", "8193"]).render_config(),
            Err(ConfigError::SizeTooLarge(8193))
        );
        assert_eq!(
            parse(&["--size", "9000"]).render_config(),
            Err(ConfigError::SizeTooLarge(9000))
        );
    }
}
