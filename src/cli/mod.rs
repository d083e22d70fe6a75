//! Command-line parsing for the delay-chain finder.
//!
//! Argument parsing stays out of the search code; `app` turns these arg
//! structs into domain configs before anything runs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "taps", version, about = "Find optimal delay-cell sequences with uniform steps")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search a delay catalog for the longest uniform-step chain.
    Search(SearchArgs),
    /// Generate a synthetic delay catalog CSV.
    Synth(SynthArgs),
    /// Re-render a saved sequence JSON as an ASCII plot.
    Plot(PlotArgs),
}

/// Options for the chain search.
#[derive(Debug, Parser, Clone)]
pub struct SearchArgs {
    /// Input catalog CSV (columns: SELECT, RISE, FALL).
    pub catalog: PathBuf,

    /// Target sequence length (accepted for compatibility; the search always
    /// returns the longest chain it finds).
    #[arg(short = 'n', long = "length", default_value_t = 16)]
    pub length: usize,

    /// Minimum step size in ps.
    #[arg(long, default_value_t = 8)]
    pub min_step: i64,

    /// Maximum step size in ps.
    #[arg(long, default_value_t = 30)]
    pub max_step: i64,

    /// Maximum distance from target in ps.
    #[arg(long = "max-dist", default_value_t = 5)]
    pub max_dist: i64,

    /// Write the selected sequence to a CSV file.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Export the full result (params + chain) to JSON.
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,

    /// Render an ASCII plot of the chain in the terminal.
    #[arg(long)]
    pub plot: bool,

    /// Plot canvas width in columns.
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot canvas height in rows.
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}

/// Options for synthetic catalog generation.
#[derive(Debug, Parser, Clone)]
pub struct SynthArgs {
    /// Output catalog CSV path.
    pub output: PathBuf,

    /// Number of delay cells to generate.
    #[arg(long, default_value_t = 64)]
    pub cells: usize,

    /// Rise delay of the first cell in ps.
    #[arg(long, default_value_t = 150)]
    pub start_rise: i64,

    /// Fall delay of the first cell in ps.
    #[arg(long, default_value_t = 165)]
    pub start_fall: i64,

    /// Ideal ladder step in ps.
    #[arg(long, default_value_t = 12)]
    pub step: i64,

    /// Gaussian jitter (std dev, ps) applied to each delay.
    #[arg(long, default_value_t = 1.5)]
    pub noise: f64,

    /// Probability that a cell is an outlier.
    #[arg(long, default_value_t = 0.05)]
    pub outlier_prob: f64,

    /// Outlier shift, in noise units.
    #[arg(long, default_value_t = 8.0)]
    pub outlier_scale: f64,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Options for re-rendering a saved sequence.
#[derive(Debug, Parser, Clone)]
pub struct PlotArgs {
    /// Sequence JSON file produced by `search --export-json`.
    #[arg(long, value_name = "JSON")]
    pub sequence: PathBuf,

    /// Plot canvas width in columns.
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot canvas height in rows.
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}
