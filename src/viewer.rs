//! Keyboard-driven viewing session over the renderer.

use log::debug;

use crate::{
    colour::Palette,
    config::RenderConfig,
    error::RenderError,
    render::{render, RenderResult},
    zoom::Zoom,
};

/// Something that can put a rendered image on screen.
pub trait Canvas {
    type Error;

    /// Draw `result` scaled by `zoom`, together with its timing message.
    fn present(&mut self, result: &RenderResult, zoom: Zoom) -> Result<(), Self::Error>;
}

/// Holds the latest render and the display zoom.
///
/// Every accepted key press asks the renderer for a fresh [`RenderResult`] and
/// replaces the old one; a result is never modified once rendered.
pub struct Viewer {
    config: RenderConfig,
    palette: Palette,
    zoom: Zoom,
    current: RenderResult,
}

impl Viewer {
    pub fn new(config: RenderConfig, zoom: Zoom) -> Result<Self, RenderError> {
        let palette = Palette::new(config.palette, config.max_iterations);
        let current = render(&config, &palette)?;
        Ok(Self {
            config,
            palette,
            zoom,
            current,
        })
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    pub fn current(&self) -> &RenderResult {
        &self.current
    }

    /// Returns `true` when the key changed the zoom and the canvas needs a redraw.
    pub fn handle_key(&mut self, key: char) -> Result<bool, RenderError> {
        let zoom = match self.zoom.apply_key(key) {
            Some(zoom) => zoom,
            None => return Ok(false),
        };

        debug!("re-rendering for zoom {}", zoom.factor());
        self.current = render(&self.config, &self.palette)?;
        self.zoom = zoom;
        Ok(true)
    }

    pub fn present<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        canvas.present(&self.current, self.zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{colour::PaletteKind, config::Sweep};

    #[derive(Default)]
    struct RecordingCanvas {
        frames: Vec<(Vec<u32>, Zoom, String)>,
    }

    impl Canvas for RecordingCanvas {
        type Error = std::convert::Infallible;

        fn present(&mut self, result: &RenderResult, zoom: Zoom) -> Result<(), Self::Error> {
            self.frames.push((
                result.pixels.as_slice().to_vec(),
                zoom,
                result.message(),
            ));
            Ok(())
        }
    }

    fn small_config() -> RenderConfig {
        RenderConfig::square(16)
            .with_max_iterations(20)
            .with_palette(PaletteKind::Grayscale)
            .with_sweep(Sweep::Sequential)
    }

    #[test]
    fn presents_initial_render() {
        let viewer = Viewer::new(small_config(), Zoom::INITIAL).unwrap();
        let mut canvas = RecordingCanvas::default();
        viewer.present(&mut canvas).unwrap();

        assert_eq!(canvas.frames.len(), 1);
        let (pixels, zoom, message) = &canvas.frames[0];
        assert_eq!(pixels.len(), 256);
        assert_eq!(*zoom, Zoom::INITIAL);
        assert!(message.starts_with(" done in "));
        assert!(message.ends_with("ms."));
    }

    #[test]
    fn zoom_keys_rerender_the_same_image() {
        let mut viewer = Viewer::new(small_config(), Zoom::INITIAL).unwrap();
        let before = viewer.current().pixels.clone();

        assert!(viewer.handle_key('+').unwrap());
        assert_eq!(viewer.zoom().factor(), 0.6);
        assert_eq!(viewer.current().pixels, before);

        assert!(viewer.handle_key('-').unwrap());
        assert!(viewer.handle_key('-').unwrap());
        assert_eq!(viewer.zoom().factor(), 0.4);
        assert_eq!(viewer.current().pixels, before);
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut viewer = Viewer::new(small_config(), Zoom::INITIAL).unwrap();
        assert!(!viewer.handle_key('q').unwrap());
        assert!(!viewer.handle_key('=').unwrap());
        assert_eq!(viewer.zoom(), Zoom::INITIAL);
    }

    #[test]
    fn canvas_sees_new_zoom_after_key() {
        let mut viewer = Viewer::new(small_config(), Zoom::INITIAL).unwrap();
        let mut canvas = RecordingCanvas::default();
        viewer.present(&mut canvas).unwrap();
        viewer.handle_key('+').unwrap();
        viewer.present(&mut canvas).unwrap();

        let zooms: Vec<f64> = canvas.frames.iter().map(|(_, zoom, _)| zoom.factor()).collect();
        assert_eq!(zooms, vec![0.5, 0.6]);
        assert_eq!(canvas.frames[0].0, canvas.frames[1].0);
    }
}
