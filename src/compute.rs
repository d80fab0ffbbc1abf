/// Tiles handed to each worker, so a slow tile near the set does not leave
/// the other workers idle.
pub const TILES_PER_WORKER: usize = 4;

/**
Rows per tile for the parallel sweep.

Tiles are contiguous ranges of whole rows, so each one is a disjoint
`&mut [u32]` chunk of the pixel buffer and no two workers ever write the same
index. The rows of the Mandelbrot set are not equally expensive: rows through
the middle of the set run every pixel to the iteration cap, while rows near
the top and bottom escape almost at once. Cutting the image into
`workers * TILES_PER_WORKER` tiles instead of `workers` tiles lets rayon's work
stealing even that out.

Always at least 1, even for an empty image or zero workers.
*/
pub fn tile_rows(height: u32, workers: usize) -> usize {
    let tiles = workers.max(1) * TILES_PER_WORKER;
    let height = height as usize;
    ((height + tiles - 1) / tiles).max(1)
}

pub fn worker_count() -> usize {
    num_cpus::get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_cover_every_row() {
        for height in [1, 3, 4, 17, 1024, 1025] {
            for workers in [1, 2, 3, 8, 64] {
                let rows = tile_rows(height, workers);
                let tiles = (height as usize + rows - 1) / rows;
                assert!(tiles * rows >= height as usize);
                assert!(tiles <= workers * TILES_PER_WORKER);
            }
        }
    }

    #[test]
    fn never_zero() {
        assert_eq!(tile_rows(0, 8), 1);
        assert_eq!(tile_rows(5, 0), 2);
        assert_eq!(tile_rows(1, 1000), 1);
    }

    #[test]
    fn splits_reference_image_evenly() {
        assert_eq!(tile_rows(1024, 8), 32);
    }
}
