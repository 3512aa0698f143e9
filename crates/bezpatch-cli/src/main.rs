//! bezpatch CLI - bicubic Bezier patch evaluator
//!
//! Evaluates a 4×4 control net at a parameter pair and prints the position,
//! tangents and net curves for an external renderer.

use anyhow::Result;
use bezpatch_cli::commands;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bezpatch")]
#[command(about = "Evaluate bicubic Bezier patches", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate position and tangents at (u, v)
    Eval {
        /// Patch document (.json or .toml); the demo net if omitted
        file: Option<PathBuf>,
        /// Parameter along rows
        #[arg(long, allow_negative_numbers = true)]
        u: Option<f64>,
        /// Parameter along columns
        #[arg(long, allow_negative_numbers = true)]
        v: Option<f64>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the eight row and column curves as JSON
    Curves {
        /// Patch document; the demo net if omitted
        file: Option<PathBuf>,
    },
    /// Compare analytic tangents against finite differences
    Check {
        /// Patch document; the demo net if omitted
        file: Option<PathBuf>,
        /// Samples per parametric direction
        #[arg(short = 'n', long, default_value_t = 11)]
        samples: usize,
        /// Finite-difference step
        #[arg(long, default_value_t = 1e-4)]
        step: f64,
        /// Largest acceptable scaled error
        #[arg(long, default_value_t = 1e-5)]
        tolerance: f64,
    },
    /// Display information about a patch document
    Info {
        /// Path to the document
        file: PathBuf,
    },
    /// Write the demo net as a JSON document
    Template {
        /// Output file; stdout if omitted
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Eval { file, u, v, json } => {
            let doc = commands::load_document(file.as_deref())?;
            let report = commands::evaluate(&doc, u, v)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", commands::format_report(&report)?);
            }
        }
        Commands::Curves { file } => {
            let doc = commands::load_document(file.as_deref())?;
            println!("{}", commands::curves_json(&doc)?);
        }
        Commands::Check {
            file,
            samples,
            step,
            tolerance,
        } => {
            let doc = commands::load_document(file.as_deref())?;
            print!("{}", commands::check(&doc, samples, step, tolerance)?);
        }
        Commands::Info { file } => {
            let doc = commands::load_document(Some(file.as_path()))?;
            print!("{}", commands::info(&doc)?);
        }
        Commands::Template { output } => {
            let json = commands::template()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    log::info!("wrote {}", path.display());
                }
                None => println!("{json}"),
            }
        }
    }

    Ok(())
}
