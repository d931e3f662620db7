#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

pub mod bitvector;
pub mod constants;
pub mod doubling;
pub mod engines;
pub mod error;
pub mod fm_index;
pub mod io;
pub mod lcp;
pub mod oracle;
pub mod queue;
pub mod stabbing;
pub mod wavelet_tree;

/// Re-exports the pieces most callers need: load an index, pick an engine,
/// check or write the result.
pub mod prelude {
    pub use crate::constants::{StateIdx, ALPHABET_SIZE, EMPTY, INF};
    pub use crate::error::{Result, WgLcpError};
    pub use crate::fm_index::FmIndex;
    pub use crate::lcp::{LcpSlot, LcpVector};
    pub use crate::oracle::{self, Graph};
    pub use crate::{engines, io};
}
