//! Regresses the `IntervalQueue`/`SingleQueue` dense-bitmap switch against a
//! real engine run: enough chains pushed in one BFS round to cross
//! `queue::natural_log_threshold`, forcing the queue to flatten through its
//! bitmap representation rather than staying a plain FIFO. The resulting LCP
//! vector must be identical to what the same automaton would produce if the
//! switch never triggered.

mod common;

use wg_lcp::engines::{beller, doubling, stabbing};
use wg_lcp::oracle;

/// 20 disjoint two-state chains, each with its own label: one BFS round
/// pushes 20 size-2 intervals into the queue's next layer, comfortably past
/// the density threshold for `n = 60` (`floor(60 / (2 ln 60)) = 7`).
fn many_short_chains() -> Vec<(u8, usize)> {
    (0..20u8).map(|i| (b'a' + i, 2)).collect()
}

#[test]
fn dense_switch_does_not_change_the_result() {
    let chains = many_short_chains();
    let (fm, graph, expected) = common::build_chains(&chains);
    assert_eq!(fm.num_states(), 60);

    let beller_lcp = beller::run(&fm).finish();
    assert_eq!(beller_lcp, expected);
    oracle::verify(&graph, &beller_lcp).unwrap();

    let stabbing_lcp = stabbing::run(&fm).finish();
    assert_eq!(stabbing_lcp, expected);
    oracle::verify(&graph, &stabbing_lcp).unwrap();

    let doubling_lcp = doubling::run(&fm).finish();
    assert_eq!(doubling_lcp, expected);
    oracle::verify(&graph, &doubling_lcp).unwrap();
}
