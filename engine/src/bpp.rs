//! Boxed plane partition dynamics: bounded height fields evolving by
//! single-cube additions and removals.

use crate::cftp::{self, CftpParams, Sample, SampleError};
use crate::grid::HeightGrid;
use crate::model::Dynamics;
use crate::rng::BitSource;

/// Coupled cube-flip dynamics on plane partitions in an `a x b x c` box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxedPartition {
    rows: usize,
    cols: usize,
    ceiling: i32,
}

impl BoxedPartition {
    /// Dynamics on an `a x b` floor with parts bounded by `c`.
    /// All three dimensions must be positive.
    pub fn new(a: usize, b: usize, c: i32) -> Result<Self, SampleError> {
        if a < 1 || b < 1 || c < 1 {
            return Err(SampleError::InvalidDimensions(format!(
                "{a} x {b} with maximal part {c}"
            )));
        }
        Ok(Self { rows: a, cols: b, ceiling: c })
    }

    /// Largest admissible part.
    pub fn ceiling(&self) -> i32 {
        self.ceiling
    }
}

/// A cube can be added at `(row, col)` when the weakly-decreasing
/// inequalities toward the top and left still hold afterwards; the virtual
/// row above and column left of the box sit at the ceiling.
fn can_raise(h: &HeightGrid, row: usize, col: usize, ceiling: i32) -> bool {
    let top = if row == 0 { ceiling } else { h.get(row - 1, col) };
    let left = if col == 0 { ceiling } else { h.get(row, col - 1) };
    top >= h.get(row, col) + 1 && left >= h.get(row, col) + 1
}

/// Mirror image of `can_raise`: the virtual row below and column right of
/// the box sit at zero.
fn can_lower(h: &HeightGrid, row: usize, col: usize, rows: usize, cols: usize) -> bool {
    let bottom = if row == rows - 1 { 0 } else { h.get(row + 1, col) };
    let right = if col == cols - 1 { 0 } else { h.get(row, col + 1) };
    h.get(row, col) - 1 >= right && h.get(row, col) - 1 >= bottom
}

impl Dynamics for BoxedPartition {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn fill_min(&self, grid: &mut HeightGrid) {
        grid.fill_with(|_, _| 0);
    }

    fn fill_max(&self, grid: &mut HeightGrid) {
        let ceiling = self.ceiling;
        grid.fill_with(|_, _| ceiling);
    }

    fn step(&self, min: &mut HeightGrid, max: &mut HeightGrid, bits: &mut BitSource) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let flip = bits.next_pm1();
                if flip == 1 {
                    if can_raise(min, row, col, self.ceiling) {
                        min.set(row, col, min.get(row, col) + 1);
                    }
                    if can_raise(max, row, col, self.ceiling) {
                        max.set(row, col, max.get(row, col) + 1);
                    }
                } else {
                    if can_lower(min, row, col, self.rows, self.cols) {
                        min.set(row, col, min.get(row, col) - 1);
                    }
                    if can_lower(max, row, col, self.rows, self.cols) {
                        max.set(row, col, max.get(row, col) - 1);
                    }
                }
            }
        }
    }

    fn label(&self) -> &'static str {
        "Boxed plane partition"
    }
}

/// Sample a uniform plane partition in an `a x b x c` box.
pub fn sample(a: usize, b: usize, c: i32, params: &CftpParams) -> Result<Sample, SampleError> {
    cftp::sample(&BoxedPartition::new(a, b, c)?, params)
}
