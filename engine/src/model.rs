//! Capability set a lattice variant exposes to the coupling driver.

use crate::grid::HeightGrid;
use crate::rng::BitSource;

/// One lattice variant: grid shape, extremal fields, coupled update.
///
/// `step` must be monotone: two fields that are pointwise ordered stay
/// ordered when stepped with the same bit stream. Coalescence of the
/// extremal pair at time zero is only an exact-sampling certificate under
/// that property.
pub trait Dynamics {
    /// Grid row count.
    fn rows(&self) -> usize;

    /// Grid column count.
    fn cols(&self) -> usize;

    /// Overwrite `grid` with the minimal height field.
    fn fill_min(&self, grid: &mut HeightGrid);

    /// Overwrite `grid` with the maximal height field.
    fn fill_max(&self, grid: &mut HeightGrid);

    /// Advance both coupled copies by one time step.
    ///
    /// Sites are visited in a fixed row-major order and exactly one ±1 bit
    /// is consumed per visited site, whether or not either copy flips.
    fn step(&self, min: &mut HeightGrid, max: &mut HeightGrid, bits: &mut BitSource);

    /// Short label used in progress reports.
    fn label(&self) -> &'static str;
}
