use bytemuck::{Pod, Zeroable};

/// Pixel dimensions of a rendered image.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major index of pixel `(x, y)`.
    pub fn index(&self, x: u32, y: u32) -> usize {
        x as usize + self.width as usize * y as usize
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_row_major() {
        let size = Size {
            width: 3,
            height: 2,
        };
        assert_eq!(size.index(0, 0), 0);
        assert_eq!(size.index(2, 0), 2);
        assert_eq!(size.index(0, 1), 3);
        assert_eq!(size.index(2, 1), 5);
        assert_eq!(size.pixel_count(), 6);
    }

    #[test]
    fn zero_dimension_is_empty() {
        assert!(Size::square(0).is_empty());
        assert!(!Size::square(1).is_empty());
    }
}
