//! Uniform random square ice: height functions, alternating sign matrices,
//! and corner sum matrices via coupling from the past.
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro)]

use std::process::exit;

use cli::args::{self, ArgError, IceOutput};
use cli::render;
use engine::grid::HeightGrid;
use engine::ice::{self, SquareIce};
use engine::model::Dynamics;
use engine::{asm, rng};

fn usage() -> ! {
    println!("Usage for square-ice: square-ice order [options]");
    println!("where order is an integer > 0 and [options] are:");
    println!("   -asm              output the alternating sign matrix");
    println!("   -asm_file         output the alternating sign matrix to asm.txt and asm_pretty.txt");
    println!("   -csum             output the corresponding corner sum matrix");
    println!("   -height           output the corresponding height function");
    println!("   -seed <value>     use a specific random seed");
    println!("   -initial <value>  use a specific initial value");
    println!("   -report           give a progress report");
    println!("   -min_only         only output the minimum square ice");
    println!("   -max_only         only output the maximum square ice");
    println!("   -help             give a listing of command line arguments");
    exit(1);
}

/// Print the selected encoding of a height field to stdout. `-asm_file`
/// only reaches here on the extremal shortcuts, where it prints heights.
fn emit_field(heights: &HeightGrid, output: IceOutput) {
    match output {
        IceOutput::Asm => render::print(&asm::asm_matrix(heights)),
        IceOutput::CornerSum => render::print(&asm::corner_sum(heights)),
        IceOutput::Height | IceOutput::AsmFile => render::print(heights),
    }
}

fn main() {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let parsed = match args::parse_ice(&argv) {
        Ok(parsed) => parsed,
        Err(ArgError::Usage) => usage(),
        Err(err @ ArgError::UnknownFlag(_)) => {
            eprintln!("{err}");
            usage();
        }
        Err(err) => {
            eprintln!("{err}");
            exit(1);
        }
    };

    let order = parsed.order as usize;

    if parsed.min_only || parsed.max_only {
        let model = match SquareIce::new(order) {
            Ok(model) => model,
            Err(err) => {
                eprintln!("{err}");
                exit(1);
            }
        };
        let mut field = HeightGrid::new(model.rows(), model.cols());
        if parsed.min_only {
            model.fill_min(&mut field);
        } else {
            model.fill_max(&mut field);
        }
        emit_field(&field, parsed.output);
        return;
    }

    let mut params = parsed.params;
    let seed = params.seed.unwrap_or_else(rng::entropy_seed);
    params.seed = Some(seed);
    eprintln!("Using random seed {seed}.");

    let sample = match ice::sample(order, &params) {
        Ok(sample) => sample,
        Err(err) => {
            eprintln!("{err}");
            exit(1);
        }
    };

    if parsed.output == IceOutput::AsmFile {
        if let Err(err) = render::write_asm_files(&asm::asm_matrix(&sample.heights)) {
            eprintln!("Cannot write the ASM output files: {err}");
            exit(1);
        }
    } else {
        emit_field(&sample.heights, parsed.output);
    }
}
