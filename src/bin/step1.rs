//! Drives the external partition-refinement preprocessor that turns a raw
//! automaton description into the `{basepath}.L`/`.out`/`.in` triple this
//! crate's loaders consume. Never linked in-process: the preprocessor is a
//! separate executable on `$PATH`.

use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

/// Preprocess a raw automaton into the `.L`/`.out`/`.in` file triple.
#[derive(Parser, Debug)]
#[command(about = "Run the external partition-refinement preprocessor", long_about = None)]
struct Args {
    /// Raw automaton description to preprocess.
    input: PathBuf,

    /// Basepath for the output `.L`/`.out`/`.in` triple. Defaults to
    /// `input` with its extension stripped.
    #[arg(short, long)]
    outpath: Option<PathBuf>,

    /// Enable info-level logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let outpath = args
        .outpath
        .clone()
        .unwrap_or_else(|| args.input.with_extension(""));

    info!(
        "running partition-refinement preprocessor on {:?}, writing {:?}.{{L,out,in}}",
        args.input, outpath
    );

    let status = Command::new("wg-partition-refine")
        .arg(&args.input)
        .arg("-o")
        .arg(&outpath)
        .status()
        .with_context(|| "failed to launch the partition-refinement preprocessor")?;

    if !status.success() {
        anyhow::bail!("partition-refinement preprocessor exited with {status}");
    }
    Ok(())
}
