//! Uniform random boxed plane partitions via coupling from the past.
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro)]

use std::process::exit;

use cli::args::{self, ArgError};
use cli::render;
use engine::{bpp, rng};

fn usage() -> ! {
    println!("Usage for bpp: bpp a b c [options]");
    println!("where the floor is of size a x b, the maximal part is c and");
    println!("where [options] are:");
    println!("   -seed <value>     use a specific random seed");
    println!("   -initial <value>  use a specific initial value");
    println!("   -report           give a progress report");
    println!("   -help             give a listing of command line arguments");
    exit(1);
}

fn main() {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let parsed = match args::parse_bpp(&argv) {
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

    let (a, b, c) = (parsed.a, parsed.b, parsed.c);

    let mut params = parsed.params;
    let seed = params.seed.unwrap_or_else(rng::entropy_seed);
    params.seed = Some(seed);
    eprintln!("Using random seed {seed}.");

    match bpp::sample(a as usize, b as usize, c as i32, &params) {
        Ok(sample) => render::print(&sample.heights),
        Err(err) => {
            eprintln!("{err}");
            exit(1);
        }
    }
}
