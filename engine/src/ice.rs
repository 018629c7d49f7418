//! Square-ice height-function dynamics; samples correspond to uniform
//! alternating sign matrices.

use crate::asm;
use crate::cftp::{self, CftpParams, Sample, SampleError};
use crate::grid::HeightGrid;
use crate::model::Dynamics;
use crate::rng::BitSource;

/// Coupled single-site dynamics on ice height functions of a given ASM order.
///
/// The grid is one larger than the matrix in each dimension. The perimeter
/// is pinned by the ice-rule boundary and never updated, so both extremal
/// fields agree there from the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareIce {
    order: usize,
}

impl SquareIce {
    /// Dynamics for ASMs of size `order x order`. `order` must be positive.
    pub fn new(order: usize) -> Result<Self, SampleError> {
        if order < 1 {
            return Err(SampleError::InvalidDimensions(format!("order {order}")));
        }
        Ok(Self { order })
    }

    /// ASM order (grid side minus one).
    pub fn order(&self) -> usize {
        self.order
    }
}

/// A site is flippable exactly when its four neighbors share one value;
/// the center then differs from that value by ±1 either way.
fn extreme(h: &HeightGrid, row: usize, col: usize) -> bool {
    h.get(row - 1, col) == h.get(row, col + 1)
        && h.get(row, col + 1) == h.get(row + 1, col)
        && h.get(row + 1, col) == h.get(row, col - 1)
}

impl Dynamics for SquareIce {
    fn rows(&self) -> usize {
        self.order + 1
    }

    fn cols(&self) -> usize {
        self.order + 1
    }

    fn fill_min(&self, grid: &mut HeightGrid) {
        grid.fill_with(|row, col| (row as i32 - col as i32).abs() + 1);
    }

    fn fill_max(&self, grid: &mut HeightGrid) {
        let side = self.rows() as i32;
        grid.fill_with(|row, col| side - (side - col as i32 - row as i32 - 1).abs());
    }

    fn step(&self, min: &mut HeightGrid, max: &mut HeightGrid, bits: &mut BitSource) {
        let rows = self.rows();
        let cols = self.cols();
        // Two checkerboard phases; same-phase sites share no neighbor, so
        // row-major updates within a phase cannot interfere.
        for phase in 0..2 {
            for row in 1..rows - 1 {
                for col in 1..cols - 1 {
                    if (row + col) % 2 != phase {
                        continue;
                    }
                    let flip = bits.next_pm1();
                    if extreme(min, row, col) {
                        min.set(row, col, min.get(row - 1, col) + flip);
                    }
                    if extreme(max, row, col) {
                        max.set(row, col, max.get(row - 1, col) + flip);
                    }
                }
            }
        }
    }

    fn label(&self) -> &'static str {
        "Random ice"
    }
}

/// Sample a uniform ice height function of the given ASM order.
pub fn sample(order: usize, params: &CftpParams) -> Result<Sample, SampleError> {
    cftp::sample(&SquareIce::new(order)?, params)
}

/// Sample a uniform alternating sign matrix of the given order.
pub fn sample_asm(order: usize, params: &CftpParams) -> Result<HeightGrid, SampleError> {
    Ok(asm::asm_matrix(&sample(order, params)?.heights))
}
