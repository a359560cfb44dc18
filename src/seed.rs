//! Initial conditions. Everything here goes through the grid's point
//! accessors, so it can be mixed freely with manual `set_a`/`set_b`
//! calls.

use crate::gray_scott_model::Grid;
use itertools::iproduct;
use log::trace;
use noise::NoiseFn;
use rand::Rng;
use std::ops::Range;

/// Sets `b = 1` on every cell in `xs` x `ys`. Ranges must lie inside the
/// grid.
pub fn seed_rect(grid: &mut Grid, xs: Range<usize>, ys: Range<usize>) {
    trace!("seeding rect {:?} x {:?}", xs, ys);
    for (x, y) in iproduct!(xs, ys) {
        grid.set_b(x, y, 1.0);
    }
}

/// A `size` x `size` square of B centred on the grid, clipped to the
/// grid's edges.
pub fn seed_center_square(grid: &mut Grid, size: usize) {
    let (w, h) = (grid.width(), grid.height());
    let x0 = w.saturating_sub(size) / 2;
    let y0 = h.saturating_sub(size) / 2;
    seed_rect(grid, x0..(x0 + size).min(w), y0..(y0 + size).min(h));
}

/// Sets `b = 1` on `count` uniformly chosen cells. Cells may repeat.
pub fn seed_random_points<R: Rng>(grid: &mut Grid, count: usize, rng: &mut R) {
    let (w, h) = (grid.width(), grid.height());
    trace!("seeding {} random points", count);
    for _ in 0..count {
        let x = rng.gen_range(0..w);
        let y = rng.gen_range(0..h);
        grid.set_b(x, y, 1.0);
    }
}

/// Sets `b = 1` wherever `noise` sampled at `(x, y) * frequency` exceeds
/// `threshold`. Returns how many cells were seeded.
pub fn seed_noise<N>(grid: &mut Grid, noise: &N, frequency: f64, threshold: f64) -> usize
where
    N: NoiseFn<f64, 2>,
{
    let (w, h) = (grid.width(), grid.height());
    let mut seeded = 0;
    for (x, y) in iproduct!(0..w, 0..h) {
        if noise.get([x as f64 * frequency, y as f64 * frequency]) > threshold {
            grid.set_b(x, y, 1.0);
            seeded += 1;
        }
    }
    trace!("noise seeded {} of {} cells", seeded, w * h);
    seeded
}

#[cfg(test)]
mod tests {
    use super::*;
    use noise::{Constant, Perlin};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn b_count(grid: &Grid) -> usize {
        iproduct!(0..grid.width(), 0..grid.height())
            .filter(|&(x, y)| grid.get_b(x, y) == 1.0)
            .count()
    }

    #[test]
    fn test_seed_rect() {
        let mut grid = Grid::new(10, 10).unwrap();
        seed_rect(&mut grid, 2..5, 3..4);
        assert_eq!(b_count(&grid), 3);
        assert_eq!(grid.get_b(4, 3), 1.0);
        assert_eq!(grid.get_b(5, 3), 0.0);
        assert_eq!(grid.get_a(4, 3), 1.0);
    }

    #[test]
    fn test_seed_center_square() {
        let mut grid = Grid::new(10, 8).unwrap();
        seed_center_square(&mut grid, 4);
        assert_eq!(b_count(&grid), 16);
        assert_eq!(grid.get_b(3, 2), 1.0);
        assert_eq!(grid.get_b(6, 5), 1.0);
        assert_eq!(grid.get_b(7, 5), 0.0);

        let mut grid = Grid::new(5, 5).unwrap();
        seed_center_square(&mut grid, 50);
        assert_eq!(b_count(&grid), 25);
    }

    #[test]
    fn test_seed_random_points_is_reproducible() {
        let mut a = Grid::new(20, 20).unwrap();
        let mut b = Grid::new(20, 20).unwrap();
        seed_random_points(&mut a, 30, &mut SmallRng::seed_from_u64(9));
        seed_random_points(&mut b, 30, &mut SmallRng::seed_from_u64(9));

        let count = b_count(&a);
        assert!(count > 0 && count <= 30);
        assert_eq!(a.get_image_data_b(), b.get_image_data_b());
    }

    #[test]
    fn test_seed_noise_threshold() {
        let mut grid = Grid::new(6, 4).unwrap();
        assert_eq!(seed_noise(&mut grid, &Constant::new(0.5), 0.1, 0.6), 0);
        assert_eq!(seed_noise(&mut grid, &Constant::new(0.5), 0.1, 0.4), 24);
        assert_eq!(b_count(&grid), 24);

        let mut grid = Grid::new(32, 32).unwrap();
        let seeded = seed_noise(&mut grid, &Perlin::new(3), 0.15, 0.2);
        assert_eq!(seeded, b_count(&grid));
        assert!(seeded < 32 * 32);
    }
}
