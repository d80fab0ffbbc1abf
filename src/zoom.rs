use log::info;

/// Display scale factor, held in exact tenths.
///
/// The zoom magnifies the finished image about its top-left corner. It never
/// changes which part of the complex plane is computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Zoom {
    tenths: u32,
}

impl Zoom {
    /// Smallest zoom reachable from the keyboard.
    pub const MIN: Zoom = Zoom { tenths: 1 };

    /// Zoom the window opens with.
    pub const INITIAL: Zoom = Zoom { tenths: 5 };

    pub fn from_tenths(tenths: u32) -> Self {
        Self {
            tenths: tenths.max(Self::MIN.tenths),
        }
    }

    /// Rounds `factor` to the nearest tenth. `None` unless the result is at least 0.1.
    pub fn from_factor(factor: f64) -> Option<Self> {
        let tenths = (factor * 10.0).round();
        if tenths.is_finite() && tenths >= 1.0 && tenths <= u32::MAX as f64 {
            Some(Self {
                tenths: tenths as u32,
            })
        } else {
            None
        }
    }

    pub fn tenths(self) -> u32 {
        self.tenths
    }

    pub fn factor(self) -> f64 {
        self.tenths as f64 / 10.0
    }

    pub fn zoomed_in(self) -> Self {
        Self::from_tenths(self.tenths.saturating_add(1))
    }

    pub fn zoomed_out(self) -> Self {
        Self::from_tenths(self.tenths.saturating_sub(1))
    }

    /// Applies a `+` or `-` key press. `None` for any other key.
    pub fn apply_key(self, key: char) -> Option<Self> {
        let zoom = match key {
            '+' => self.zoomed_in(),
            '-' => self.zoomed_out(),
            _ => return None,
        };
        info!("zoom {} -> {}", self.factor(), zoom.factor());
        Some(zoom)
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self::INITIAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_half_scale() {
        assert_eq!(Zoom::default().factor(), 0.5);
    }

    #[test]
    fn keys_step_by_a_tenth() {
        let zoom = Zoom::default();
        assert_eq!(zoom.apply_key('+').map(Zoom::factor), Some(0.6));
        assert_eq!(zoom.apply_key('-').map(Zoom::factor), Some(0.4));
        assert_eq!(zoom.apply_key('x'), None);
    }

    #[test]
    fn repeated_steps_stay_exact() {
        let mut zoom = Zoom::default();
        for _ in 0..5 {
            zoom = zoom.zoomed_in();
        }
        assert_eq!(zoom.factor(), 1.0);
        for _ in 0..5 {
            zoom = zoom.zoomed_out();
        }
        assert_eq!(zoom, Zoom::default());
    }

    #[test]
    fn zooming_out_stops_at_minimum() {
        let mut zoom = Zoom::default();
        for _ in 0..20 {
            zoom = zoom.zoomed_out();
        }
        assert_eq!(zoom, Zoom::MIN);
        assert_eq!(zoom.factor(), 0.1);
    }

    #[test]
    fn factor_parsing() {
        assert_eq!(Zoom::from_factor(0.5), Some(Zoom::INITIAL));
        assert_eq!(Zoom::from_factor(1.26).map(Zoom::tenths), Some(13));
        assert_eq!(Zoom::from_factor(0.0), None);
        assert_eq!(Zoom::from_factor(-1.0), None);
        assert_eq!(Zoom::from_factor(f64::NAN), None);
    }
}
