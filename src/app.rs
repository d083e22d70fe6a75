//! Top-level application orchestration.
//!
//! `src/main.rs` only maps errors to exit codes; everything else happens
//! here: argument parsing, the catalog load and chain search, the printed
//! reports and plots, and the optional exports.

use clap::Parser;

use crate::cli::{Command, PlotArgs, SearchArgs, SynthArgs};
use crate::domain::{SearchConfig, SynthConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `taps` binary.
pub fn run() -> Result<(), AppError> {
    // `taps catalog.csv` should behave like `taps search catalog.csv`.
    // Clap insists on a subcommand name, so patch the argv list before
    // parsing instead of bending the clap structure around the shorthand.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Search(args) => handle_search(args),
        Command::Synth(args) => handle_synth(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_search(args: SearchArgs) -> Result<(), AppError> {
    let config = search_config_from_args(&args);

    println!("Loading {}...", config.catalog.display());
    let catalog = pipeline::load_catalog(&config)?;
    print!("{}", crate::report::format_catalog_summary(&catalog));

    // The progress line goes out before the search runs.
    println!(
        "\nSearching for longest sequence (step {}-{} ps)...",
        config.min_step, config.max_step
    );
    let outcome = pipeline::run_search(&catalog, &config);

    match &outcome.best {
        Some(best) => {
            print!(
                "{}",
                crate::report::format_sequence_table(&best.steps, "BEST SEQUENCE (Longest)")
            );

            if config.plot {
                print!(
                    "{}",
                    crate::plot::render_ascii_chain(
                        &best.steps,
                        config.plot_width,
                        config.plot_height
                    )
                );
            }

            // Optional exports.
            if let Some(path) = &config.output {
                crate::io::export::write_sequence_csv(path, &best.steps)?;
                println!("\nSequence saved to {}", path.display());
            }
            if let Some(path) = &config.export_json {
                crate::io::sequence::write_sequence_json(
                    path,
                    best,
                    config.params(),
                    catalog.entries.len(),
                    outcome.pairs_evaluated,
                )?;
                println!("\nResult exported to {}", path.display());
            }
        }
        None => println!("No sequence found with given parameters"),
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let doc = crate::io::sequence::read_sequence_json(&args.sequence)?;
    print!(
        "{}",
        crate::plot::render_ascii_chain(&doc.steps, args.width, args.height)
    );
    Ok(())
}

fn handle_synth(args: SynthArgs) -> Result<(), AppError> {
    let config = synth_config_from_args(&args);

    let entries = crate::data::generate_catalog(&config)?;
    crate::io::export::write_catalog_csv(&args.output, &entries)?;

    println!("Generated {} entries (seed {})", entries.len(), config.seed);
    println!("Catalog written to {}", args.output.display());

    Ok(())
}

pub fn search_config_from_args(args: &SearchArgs) -> SearchConfig {
    SearchConfig {
        catalog: args.catalog.clone(),
        target_length: args.length,
        min_step: args.min_step,
        max_step: args.max_step,
        max_distance: args.max_dist,
        plot: args.plot,
        plot_width: args.width,
        plot_height: args.height,
        output: args.output.clone(),
        export_json: args.export_json.clone(),
    }
}

pub fn synth_config_from_args(args: &SynthArgs) -> SynthConfig {
    SynthConfig {
        cells: args.cells,
        start_rise: args.start_rise,
        start_fall: args.start_fall,
        step: args.step,
        noise: args.noise,
        outlier_prob: args.outlier_prob,
        outlier_scale: args.outlier_scale,
        seed: args.seed,
    }
}

/// Rewrite argv so a bare catalog path defaults to the `search` subcommand.
///
/// Rules:
/// - `taps catalog.csv ...`       -> `taps search catalog.csv ...`
/// - `taps --max-dist 3 ...`      -> `taps search --max-dist 3 ...`
/// - `taps --help/--version/-h`   -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    // Explicit subcommands and top-level help/version pass through untouched.
    let passthrough = matches!(
        argv.get(1).map(String::as_str),
        None | Some("search" | "synth" | "plot" | "help" | "-h" | "--help" | "-V" | "--version")
    );
    if !passthrough {
        // Anything else (a path or a search flag) is an implicit `search`.
        argv.insert(1, "search".to_string());
    }
    argv
}
