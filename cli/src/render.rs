//! Fixed-width matrix rendering for stdout and the ASM output files.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use engine::grid::HeightGrid;

/// Format a grid the way the samplers print it: two-wide cells separated
/// by a space, one line per row.
pub fn render(grid: &HeightGrid) -> String {
    let mut out = String::new();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            out.push_str(&format!("{:2} ", grid.get(row, col)));
        }
        out.push('\n');
    }
    out
}

/// Print a grid to stdout.
pub fn print(grid: &HeightGrid) {
    print!("{}", render(grid));
}

/// Write an ASM under `dir` as `asm.txt` (signed two-wide entries) and
/// `asm_pretty.txt` (`+ `, `- `, or two spaces per entry).
pub fn write_asm_files_in(dir: &Path, matrix: &HeightGrid) -> io::Result<()> {
    let mut plain = File::create(dir.join("asm.txt"))?;
    let mut pretty = File::create(dir.join("asm_pretty.txt"))?;
    for row in 0..matrix.rows() {
        for col in 0..matrix.cols() {
            let entry = matrix.get(row, col);
            write!(plain, "{entry:2}")?;
            let cell = match entry {
                1 => "+ ",
                -1 => "- ",
                _ => "  ",
            };
            write!(pretty, "{cell}")?;
        }
        writeln!(plain)?;
        writeln!(pretty)?;
    }
    Ok(())
}

/// Write the ASM output files in the current working directory.
pub fn write_asm_files(matrix: &HeightGrid) -> io::Result<()> {
    write_asm_files_in(Path::new("."), matrix)
}
