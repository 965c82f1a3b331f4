use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_SEED: u64 = 42;

/// Standard deviation of JSON arrays, record arrays or matrices, ignoring
/// non-numeric and missing values.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON input: an array, an array of records or a matrix object. Reads stdin when omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// JSON options document (`bias`, `dim`, `dtype`, `encoding`, `field`).
    #[arg(short, long)]
    pub options: Option<PathBuf>,

    /// Compute the biased (population) estimate.
    #[arg(short, long, default_value_t = false)]
    pub bias: bool,

    /// Matrix dimension: 1 for one result per column, 2 for one result per row.
    #[arg(short, long)]
    pub dim: Option<u32>,

    /// Output matrix data type (e.g. float64, float32, int32, uint8).
    #[arg(short = 't', long)]
    pub dtype: Option<String>,

    /// Comma-separated values to treat as missing.
    #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
    pub encoding: Vec<f64>,

    /// JSON pointer used to read each record (e.g. /x).
    #[arg(short, long)]
    pub field: Option<String>,

    /// Print the options JSON schema and exit.
    #[arg(long, default_value_t = false)]
    pub schema: bool,

    /// Run the demo on random data instead of reading input.
    #[arg(long, default_value_t = false)]
    pub demo: bool,

    /// Seed for the demo data.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
