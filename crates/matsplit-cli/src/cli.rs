use clap::Parser;
use matsplit::engine::config::{DEFAULT_SEED, DEFAULT_STRATIFY_COLUMN, DEFAULT_VAL_SIZE};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "The matsplit contributors",
    version,
    about = "matsplit CLI - A command-line interface for matsplit, a deterministic stratified train/validation splitter for materials datasets.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    // --- Core Arguments ---
    /// Path to the input dataset file (.jsonl or .csv).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Directory where the train and validation partitions are written.
    #[arg(
        short,
        long,
        alias = "output_dir",
        required = true,
        value_name = "PATH"
    )]
    pub output_dir: PathBuf,

    // --- Split Parameters ---
    /// Column whose categories are preserved proportionally in both partitions.
    #[arg(
        long,
        alias = "stratify_by",
        value_name = "COLUMN",
        default_value = DEFAULT_STRATIFY_COLUMN
    )]
    pub stratify_by: String,

    /// Fraction of each category drawn into the validation partition.
    #[arg(
        long,
        alias = "val_size",
        value_name = "FLOAT",
        default_value_t = DEFAULT_VAL_SIZE
    )]
    pub val_size: f64,

    /// Seed for the deterministic shuffle.
    #[arg(long, value_name = "INT", default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    // --- Threshold Filters ---
    /// Keep only records whose num_sites is at or below this bound.
    #[arg(long, alias = "max_num_sites", value_name = "INT")]
    pub max_num_sites: Option<u64>,

    /// Keep only records whose energy_above_hull is at or below this bound.
    #[arg(long, alias = "energy_above_hull_max", value_name = "FLOAT")]
    pub energy_above_hull_max: Option<f64>,

    // --- Logging ---
    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
