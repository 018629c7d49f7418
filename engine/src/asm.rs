//! Pure transforms from a final ice height field to its matrix encodings.

use crate::grid::HeightGrid;

/// Corner-sum matrix of a height field: entry `(r + c + 2 - H[r][c]) / 2`,
/// same shape as the field.
///
/// Ice heights satisfy `H ≡ r + c + 1 (mod 2)`, so the numerator is odd
/// and the truncating division drops a half; the result is the partial-sum
/// transform of the ASM, zero along the top row and left column.
pub fn corner_sum(heights: &HeightGrid) -> HeightGrid {
    let mut out = HeightGrid::new(heights.rows(), heights.cols());
    out.fill_with(|row, col| (row as i32 + col as i32 + 2 - heights.get(row, col)) / 2);
    out
}

/// Alternating sign matrix of an ice height field; one smaller in each
/// dimension, entries in `{-1, 0, +1}`.
pub fn asm_matrix(heights: &HeightGrid) -> HeightGrid {
    let mut out = HeightGrid::new(heights.rows() - 1, heights.cols() - 1);
    out.fill_with(|row, col| {
        let (row, col) = (row + 1, col + 1);
        (heights.get(row - 1, col) + heights.get(row, col - 1)
            - heights.get(row, col)
            - heights.get(row - 1, col - 1))
            / 2
    });
    out
}

/// Invert [`corner_sum`]: `H[r][c] = r + c + 1 - 2 * csum[r][c]`.
///
/// The truncated half in [`corner_sum`] makes `csum` exactly
/// `(r + c + 1 - H) / 2`, so this recovers the field bit for bit.
pub fn height_from_corner_sum(csum: &HeightGrid) -> HeightGrid {
    let mut out = HeightGrid::new(csum.rows(), csum.cols());
    out.fill_with(|row, col| row as i32 + col as i32 + 1 - 2 * csum.get(row, col));
    out
}
