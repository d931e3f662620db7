//! Component I — prefix doubling, à la Manber–Myers.
//!
//! Seeds every per-label bucket boundary at `h = 1` with LCP `0`, then
//! repeatedly doubles the predecessor distance: two adjacent states
//! resolve as soon as their `h`-step predecessors land in different
//! buckets (their paths have already diverged somewhere in the first
//! `h` backward characters), in which case the true LCP is `h` plus
//! however far further back the two predecessors themselves still agree,
//! found via a single range-min query instead of another walk.

use crate::constants::INF;
use crate::doubling::{Doubling, DoublingData};
use crate::fm_index::FmIndex;
use crate::lcp::LcpVector;

/// Runs prefix doubling to completion and returns the finished LCP
/// vector.
pub fn run(fm: &FmIndex) -> LcpVector {
    let n = fm.num_states();
    let s = fm.sources as usize;
    if n <= 1 {
        let mut lcp = LcpVector::new(n);
        lcp.fill_source_prefix(s);
        return lcp;
    }

    let mut dd = DoublingData::new(fm);
    let mut resolved = initial_boundaries(fm, n, s);
    let mut not_filled = (1..n).filter(|&i| !resolved[i]).count();

    loop {
        for i in dd.begin()..dd.end() {
            if resolved[i] {
                continue;
            }
            let p = dd.get_pred(i);
            let q = dd.get_pred(i - 1);
            if p == INF {
                dd.update_lcp(i, INF as u64);
                resolved[i] = true;
                not_filled -= 1;
                continue;
            }
            if dd.bucket(p as usize) != dd.bucket(q as usize) {
                let (lo, hi) = if p < q { (p as usize, q as usize) } else { (q as usize, p as usize) };
                let value = dd.h() + dd.rmq(lo, hi);
                dd.update_lcp(i, value);
                resolved[i] = true;
                not_filled -= 1;
            }
        }
        if not_filled == 0 {
            break;
        }
        if !dd.doubling_step() {
            break;
        }
    }

    let mut lcp = dd.into_lcp();
    for i in 1..n {
        if !resolved[i] {
            lcp.set_infinite(i);
        }
    }
    lcp.fill_source_prefix(s);
    lcp
}

/// Positions already resolved before the main loop starts: the whole
/// source prefix `[0, s]` (trivially `0`, matching `fill_source_prefix`)
/// and the first state of every label block (its incoming character
/// differs from its predecessor's, so LCP is `0` immediately).
fn initial_boundaries(fm: &FmIndex, n: usize, s: usize) -> Vec<bool> {
    let mut resolved = vec![false; n];
    for slot in resolved.iter_mut().take(s.min(n.saturating_sub(1)) + 1) {
        *slot = true;
    }
    for &c in fm.alphabet() {
        let boundary = fm.cumulative(c) as usize + s;
        if boundary < n {
            resolved[boundary] = true;
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitvector::BitVector;

    fn e1() -> FmIndex {
        let l = b"aaaa".to_vec();
        let mut out = BitVector::new(8);
        for &i in &[0usize, 2, 4, 6] {
            out.set(i);
        }
        out.rebuild();
        FmIndex::from_parts(&l, out, 1)
    }

    fn e2() -> FmIndex {
        let l = b"aabb".to_vec();
        let mut out = BitVector::new(8);
        for &i in &[0usize, 2, 4, 6] {
            out.set(i);
        }
        out.rebuild();
        FmIndex::from_parts(&l, out, 2)
    }

    #[test]
    fn chain_matches_beller() {
        let fm = e1();
        assert_eq!(crate::engines::beller::run(&fm).finish(), run(&fm).finish());
    }

    #[test]
    fn two_disjoint_chains_match_beller() {
        let fm = e2();
        assert_eq!(crate::engines::beller::run(&fm).finish(), run(&fm).finish());
    }
}
