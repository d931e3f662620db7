//! Typed error taxonomy for the library surface.
//!
//! CLI binaries catch these at the top level and map them onto process exit
//! codes; internally every fallible function returns `Result<_, WgLcpError>`
//! or `anyhow::Result` when it is merely forwarding I/O from a CLI-only path.

use std::path::PathBuf;

use thiserror::Error;

/// The four error kinds this crate distinguishes. All are fatal: no retries, no partial
/// results, first failure wins.
#[derive(Debug, Error)]
pub enum WgLcpError {
    /// A required input file could not be opened.
    #[error("could not open input file {path}")]
    InputMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file was opened but its contents violate an invariant of its
    /// format (empty bitvector, empty `.dot`, broken source-run, etc.).
    #[error("malformed input in {path}: {reason}")]
    InputMalformed { path: PathBuf, reason: String },

    /// An index passed to a rank/select/bitmap access fell outside the
    /// structure's bounds. This indicates a programmer bug, not bad input.
    #[error("index out of range in {what}: {index} is not within [0, {bound})")]
    OutOfRange {
        what: &'static str,
        index: u64,
        bound: u64,
    },

    /// No LCP algorithm was selected on the `step2` command line.
    #[error("algorithm misuse: {reason}")]
    AlgorithmMisuse { reason: String },
}

pub type Result<T> = std::result::Result<T, WgLcpError>;
