//! Crate-wide constants tying the implementation to the automaton data model.

/// Number of distinct label values the core ever reasons about. Labels are
/// ASCII bytes in `[1,127]`; `0` is reserved to mean "absent". This is kept a
/// named constant rather than generalized to an arbitrary alphabet, since
/// every frequency table, `C` vector and packed-BWT block in this crate is
/// sized off it.
pub const ALPHABET_SIZE: usize = 128;

/// Width of a state index / LCP entry, selected at build time by the `wide`
/// feature.
#[cfg(not(feature = "wide"))]
pub type StateIdx = u32;
#[cfg(feature = "wide")]
pub type StateIdx = u64;

/// "Undefined / infinite" sentinel written to the `.LCP` file: all-ones of
/// the configured word width.
pub const INF: StateIdx = StateIdx::MAX;

/// "Not yet filled" sentinel used only in-memory by the doubling engine,
/// distinct from [`INF`]. Never appears in a finished LCP vector.
pub const EMPTY: StateIdx = StateIdx::MAX - 1;
