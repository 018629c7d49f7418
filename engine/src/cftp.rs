//! Coupling-from-the-past driver: evolve the extremal pair from ever
//! deeper starting times until both copies agree at time zero.

use std::time::{Duration, Instant};

use crate::grid::{volume_gap, HeightGrid};
use crate::model::Dynamics;
use crate::rng::{BitSource, SeedLedger};

/// Largest admissible look-back window (2^29), also the `initial` bound.
pub const MAX_WINDOW: u32 = 1 << 29;

/// Default initial look-back window.
pub const DEFAULT_INITIAL: u32 = 128;

/// Knobs for one sampling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CftpParams {
    /// Initial look-back window; rounded up to a power of two if needed.
    pub initial: u32,
    /// Seed for the ledger bootstrap; `None` draws one from system entropy.
    pub seed: Option<i32>,
    /// Emit progress lines on stderr.
    pub report: bool,
    /// Optional cap on the look-back window, clamped to `MAX_WINDOW`.
    pub max_window: Option<u32>,
}

impl Default for CftpParams {
    fn default() -> Self {
        Self { initial: DEFAULT_INITIAL, seed: None, report: false, max_window: None }
    }
}

/// Diagnostics from a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CftpStats {
    /// Seed the ledger bootstrap actually used.
    pub seed: i32,
    /// Outer restarts; zero when the extremal fields already coincide.
    pub restarts: u32,
    /// Look-back window of the restart that coalesced; zero without one.
    pub coalesced_at: u32,
    /// Coupled steps executed across every restart.
    pub total_steps: u64,
    /// Wall-clock time spent in the loop.
    pub elapsed: Duration,
}

/// A coalesced sample together with its diagnostics.
#[derive(Debug, Clone)]
pub struct Sample {
    /// Common value of the coupled copies at time zero.
    pub heights: HeightGrid,
    /// Run diagnostics.
    pub stats: CftpStats,
}

/// Failures surfaced by [`sample`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SampleError {
    /// A lattice dimension was not positive.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
    /// `initial` fell outside `[1, 2^29]`.
    #[error("invalid initial value {0}; it must be between 1 and 2^29 = 536870912")]
    InvalidInitial(u32),
    /// The look-back window passed the configured cap before coalescing.
    #[error("no coalescence within a look-back window of {0} steps")]
    NonTerminating(u32),
}

/// Ceiling of log base 2, as the one-based bit length of `x - 1`:
/// `log2_ceil(8) == 3`, `log2_ceil(9) == 4`, `log2_ceil(16) == 4`,
/// `log2_ceil(17) == 5`, and both 0 and 1 map to 0.
///
/// The seed ledger is indexed by this value, so an epoch ends just below
/// each power of two of the remaining step count.
pub fn log2_ceil(x: u32) -> u32 {
    if x <= 1 {
        0
    } else {
        32 - (x - 1).leading_zeros()
    }
}

/// Round the initial window up to a power of two, warning when it moved.
fn rounded_window(initial: u32) -> u32 {
    let window = 1u32 << log2_ceil(initial);
    if window != initial {
        eprintln!("Warning, initial is not a power of two. Increasing initial to {window}.");
    }
    window
}

/// Draw one exact sample from the variant's stationary distribution.
///
/// Runs the Propp-Wilson protocol. Both extremal fields evolve under the
/// same bit stream from time `-T` to zero; on a miss `T` doubles and the
/// whole history is replayed. Every step whose remaining count falls in
/// epoch `e` consumes bits from a generator seeded with ledger entry `e`,
/// so doubling extends the history leftwards without disturbing the bits
/// already consumed closer to time zero. Coalescence of the monotone
/// coupling at time zero then certifies exactness.
pub fn sample<D: Dynamics>(model: &D, params: &CftpParams) -> Result<Sample, SampleError> {
    if params.initial < 1 || params.initial > MAX_WINDOW {
        return Err(SampleError::InvalidInitial(params.initial));
    }
    let cap = params.max_window.unwrap_or(MAX_WINDOW).min(MAX_WINDOW);

    let start = Instant::now();
    let seed = params.seed.unwrap_or_else(crate::rng::entropy_seed);
    let ledger = SeedLedger::generate(seed);
    let mut bits = BitSource::new(seed as u32);

    let mut min = HeightGrid::new(model.rows(), model.cols());
    let mut max = HeightGrid::new(model.rows(), model.cols());
    model.fill_min(&mut min);
    model.fill_max(&mut max);

    let mut window = rounded_window(params.initial);
    let mut restarts = 0u32;
    let mut coalesced_at = 0u32;
    let mut total_steps = 0u64;

    let mut gap = volume_gap(&min, &max);
    while gap != 0 {
        if window > cap {
            return Err(SampleError::NonTerminating(cap));
        }
        model.fill_min(&mut min);
        model.fill_max(&mut max);

        let mut step = window;
        let mut epoch = -2i32;
        while step > 0 {
            let e = log2_ceil(step) as i32;
            if e != epoch {
                epoch = e;
                bits.reseed(ledger.get(e as usize));
                if params.report {
                    eprintln!(
                        "Using maxsteps {}, volume of difference at time -{} is {}.",
                        window,
                        step,
                        volume_gap(&min, &max)
                    );
                }
            }
            model.step(&mut min, &mut max, &mut bits);
            step -= 1;
            total_steps += 1;
        }

        gap = volume_gap(&min, &max);
        if params.report {
            eprintln!("Volume of difference at time 0 is {gap}");
        }
        restarts += 1;
        coalesced_at = window;
        if gap != 0 {
            window = window.saturating_mul(2);
        }
    }

    let stats = CftpStats { seed, restarts, coalesced_at, total_steps, elapsed: start.elapsed() };
    if params.report {
        eprintln!("{} generated after {} time steps.", model.label(), stats.coalesced_at);
        eprintln!("It took {:.4} seconds.", stats.elapsed.as_secs_f64());
    }
    Ok(Sample { heights: max, stats })
}
