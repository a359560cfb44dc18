use crate::gray_scott_model::{Cell, ChemicalSpecies};
use itertools::iproduct;

/// Stencil weights, consumed in the order the neighborhood is walked:
/// outer loop over `x - 1..=x + 1`, inner loop over `y - 1..=y + 1`.
#[rustfmt::skip]
pub const WEIGHTS: [f64; 9] = [
    0.05,  0.20, 0.05,
    0.20, -1.00, 0.20,
    0.05,  0.20, 0.05,
];

/// Weighted 3x3 neighborhood sum of one species around `(x, y)`.
///
/// `(x, y)` must be an interior coordinate (`1 <= x < width - 1` and
/// `1 <= y < height - 1`); border cells have no complete neighborhood.
pub fn laplacian(cells: &[Cell], width: usize, cs: ChemicalSpecies, x: usize, y: usize) -> f64 {
    // Weights sum to zero, so summing differences from the center keeps a
    // uniform neighborhood at exactly 0.
    let center = cells[y * width + x].get(cs);
    iproduct!(x - 1..=x + 1, y - 1..=y + 1)
        .zip(WEIGHTS.iter())
        .fold(0.0, |total, ((xx, yy), weight)| {
            total + weight * (cells[yy * width + xx].get(cs) - center)
        })
}
