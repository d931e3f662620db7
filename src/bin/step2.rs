//! Computes the LCP vector of a pruned Wheeler automaton with one of three
//! interchangeable engines, optionally checking the result against the
//! from-scratch oracle and/or printing it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dsi_progress_logger::prelude::*;
use log::info;

use wg_lcp::engines;
use wg_lcp::fm_index::FmIndex;
use wg_lcp::oracle;

/// Compute the LCP vector of a pruned Wheeler automaton.
#[derive(Parser, Debug)]
#[command(about = "Compute the LCP vector of a pruned Wheeler automaton", long_about = None)]
#[command(group(
    clap::ArgGroup::new("engine")
        .required(true)
        .args(["beller", "stabbing", "doubling"]),
))]
struct Args {
    /// Basepath of the `.L`/`.out`/`.in` triple (and, for `-c`, the matching
    /// `.dot` edge list to check against).
    input: PathBuf,

    /// Use the Beller-generalized BFS engine.
    #[arg(short, long)]
    beller: bool,

    /// Use the interval-stabbing BFS engine.
    #[arg(short, long)]
    stabbing: bool,

    /// Use the prefix-doubling engine.
    #[arg(short, long)]
    doubling: bool,

    /// Enable info-level logging and progress reporting.
    #[arg(short, long)]
    verbose: bool,

    /// Check the result against the independent oracle.
    #[arg(short, long)]
    check: bool,

    /// Print the finished LCP vector to stdout.
    #[arg(short = 'l', long)]
    print_lcp: bool,
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

    let fm = FmIndex::load(&args.input)
        .with_context(|| format!("failed to load FM-index at {:?}", args.input))?;
    let mut pl = ProgressLogger::default();
    if args.verbose {
        pl.item_name("state").expected_updates(Some(fm.num_states()));
        pl.start("computing LCP vector...");
    }
    let lcp = if args.doubling {
        info!("running prefix-doubling on {} states", fm.num_states());
        engines::doubling::run(&fm)
    } else if args.beller {
        engines::beller::run(&fm)
    } else {
        engines::stabbing::run(&fm)
    };
    if args.verbose {
        pl.done();
    }

    if args.check {
        let dot_path = args.input.with_extension("dot");
        let graph = oracle::parse_dot(&dot_path)
            .with_context(|| format!("failed to parse {dot_path:?} for checking"))?;
        let finished = lcp.finish();
        match oracle::verify(&graph, &finished) {
            Ok(()) => info!("oracle check passed"),
            Err((i, expected, got)) => {
                eprintln!("oracle check failed at state {i}: expected {expected:?}, got {got}");
                std::process::exit(2);
            }
        }
    }

    if args.print_lcp {
        for v in lcp.finish() {
            println!("{v}");
        }
    }

    Ok(())
}
