//! The three interchangeable LCP engines: each consumes an
//! [`crate::fm_index::FmIndex`] and produces a finished
//! [`crate::lcp::LcpVector`]. All three must agree on every input;
//! `oracle::verify` is what checks that externally.

pub mod beller;
pub mod doubling;
pub mod stabbing;
