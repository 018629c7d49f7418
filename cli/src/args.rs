//! Single-dash argument grammar shared by the samplers.

use engine::cftp::{CftpParams, MAX_WINDOW};

/// What to print for a square-ice sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IceOutput {
    /// Height function (default).
    #[default]
    Height,
    /// Alternating sign matrix on stdout.
    Asm,
    /// Alternating sign matrix written to asm.txt and asm_pretty.txt.
    AsmFile,
    /// Corner sum matrix.
    CornerSum,
}

/// Failures while scanning the command line.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ArgError {
    /// The ASM order was not positive.
    #[error("Invalid order {0}.")]
    InvalidOrder(i64),
    /// A box dimension was out of range.
    #[error("Invalid dimensions: {0} x {1} with maximal part {2}.")]
    InvalidDimensions(i64, i64, i64),
    /// A flag requiring a value appeared last.
    #[error("you must specify {0}.")]
    MissingValue(&'static str),
    /// An unrecognized flag.
    #[error("illegal command line argument {0}")]
    UnknownFlag(String),
    /// A non-numeric token where an integer was expected.
    #[error("invalid number {0}")]
    BadNumber(String),
    /// The initial window fell outside `[1, 2^29]`.
    #[error("invalid value for initial; it must be between 1 and 2^29 = 536870912")]
    InvalidInitial(i64),
    /// `-help` was given, or too few positional arguments.
    #[error("usage requested")]
    Usage,
}

/// Parsed `square-ice` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IceArgs {
    /// ASM order, already checked positive.
    pub order: i64,
    /// Selected output encoding.
    pub output: IceOutput,
    /// Print the minimal height field and skip sampling.
    pub min_only: bool,
    /// Print the maximal height field and skip sampling.
    pub max_only: bool,
    /// Driver knobs.
    pub params: CftpParams,
}

/// Parsed `bpp` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BppArgs {
    /// Floor rows, already checked positive.
    pub a: i64,
    /// Floor columns, already checked positive.
    pub b: i64,
    /// Maximal part, already checked positive and within `i32`.
    pub c: i64,
    /// Driver knobs.
    pub params: CftpParams,
}

fn parse_int(text: &str) -> Result<i64, ArgError> {
    text.parse().map_err(|_| ArgError::BadNumber(text.to_string()))
}

fn parse_seed(text: &str) -> Result<i32, ArgError> {
    text.parse().map_err(|_| ArgError::BadNumber(text.to_string()))
}

fn parse_initial(text: &str) -> Result<u32, ArgError> {
    let value = parse_int(text)?;
    if value < 1 || value > i64::from(MAX_WINDOW) {
        return Err(ArgError::InvalidInitial(value));
    }
    Ok(value as u32)
}

/// Scan a `square-ice` command line (program name already stripped).
/// The order is bounds-checked before any flag is looked at.
pub fn parse_ice(argv: &[String]) -> Result<IceArgs, ArgError> {
    if argv.is_empty() || argv[0] == "-help" {
        return Err(ArgError::Usage);
    }
    let order = parse_int(&argv[0])?;
    if order < 1 {
        return Err(ArgError::InvalidOrder(order));
    }
    let mut parsed = IceArgs {
        order,
        output: IceOutput::default(),
        min_only: false,
        max_only: false,
        params: CftpParams::default(),
    };

    let mut index = 1;
    while index < argv.len() {
        match argv[index].as_str() {
            "-asm" => parsed.output = IceOutput::Asm,
            "-asm_file" => parsed.output = IceOutput::AsmFile,
            "-csum" => parsed.output = IceOutput::CornerSum,
            "-height" => parsed.output = IceOutput::Height,
            "-report" => parsed.params.report = true,
            "-min_only" => parsed.min_only = true,
            "-max_only" => parsed.max_only = true,
            "-seed" => {
                index += 1;
                let value = argv.get(index).ok_or(ArgError::MissingValue("a seed"))?;
                parsed.params.seed = Some(parse_seed(value)?);
            }
            "-initial" => {
                index += 1;
                let value = argv
                    .get(index)
                    .ok_or(ArgError::MissingValue("an initial number of steps"))?;
                parsed.params.initial = parse_initial(value)?;
            }
            "-help" => return Err(ArgError::Usage),
            other => return Err(ArgError::UnknownFlag(other.to_string())),
        }
        index += 1;
    }
    Ok(parsed)
}

/// Scan a `bpp` command line (program name already stripped).
/// The box dimensions are bounds-checked before any flag is looked at.
pub fn parse_bpp(argv: &[String]) -> Result<BppArgs, ArgError> {
    if argv.is_empty() || argv[0] == "-help" {
        return Err(ArgError::Usage);
    }
    if argv.len() < 3 {
        return Err(ArgError::Usage);
    }
    let a = parse_int(&argv[0])?;
    let b = parse_int(&argv[1])?;
    let c = parse_int(&argv[2])?;
    if a < 1 || b < 1 || c < 1 || c > i64::from(i32::MAX) {
        return Err(ArgError::InvalidDimensions(a, b, c));
    }
    let mut parsed = BppArgs { a, b, c, params: CftpParams::default() };

    let mut index = 3;
    while index < argv.len() {
        match argv[index].as_str() {
            "-report" => parsed.params.report = true,
            "-seed" => {
                index += 1;
                let value = argv.get(index).ok_or(ArgError::MissingValue("a seed"))?;
                parsed.params.seed = Some(parse_seed(value)?);
            }
            "-initial" => {
                index += 1;
                let value = argv
                    .get(index)
                    .ok_or(ArgError::MissingValue("an initial number of steps"))?;
                parsed.params.initial = parse_initial(value)?;
            }
            "-help" => return Err(ArgError::Usage),
            other => return Err(ArgError::UnknownFlag(other.to_string())),
        }
        index += 1;
    }
    Ok(parsed)
}
