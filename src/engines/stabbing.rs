//! Component G — the interval-stabbing BFS.
//!
//! Seeds one state per alphabet character (the state reached by that
//! character's first occurrence in `L`) and lets [`PackedBwt::stab`] do
//! the rest: every time a queued state's `L`-position is stabbed, each
//! bridge it yields is itself the *next* occurrence of the same run's
//! character, one level deeper, so the BFS never needs `interval_symbols`
//! at all — its whole frontier is single states, not state intervals.

use crate::constants::StateIdx;
use crate::fm_index::FmIndex;
use crate::lcp::LcpVector;
use crate::queue::SingleQueue;
use crate::stabbing::PackedBwt;

/// Runs the BFS to completion and returns the finished LCP vector.
pub fn run(fm: &FmIndex) -> LcpVector {
    let n = fm.num_states();
    let s = fm.sources as usize;
    let mut lcp = LcpVector::new(n);
    lcp.fill_source_prefix(s);

    if n <= 1 {
        return lcp;
    }

    let mut bwt = PackedBwt::build(fm);
    let mut q = SingleQueue::new(n);
    for &c in fm.alphabet() {
        let p = fm.first_occurrence(c);
        let i = fm.forward(p, c);
        lcp.set_length(i as usize, 0);
        q.push(i);
    }

    let max_rounds = n as u64 + 1;
    while q.advance() {
        let depth = q.get_l();
        if depth > max_rounds {
            break;
        }
        while let Some(i) = q.pop() {
            let pos = fm.state_to_bwt_pos(i);
            for (c, p) in bwt.stab(pos) {
                let i_p = fm.forward(p, c);
                lcp.set_length(i_p as usize, depth + 1);
                q.push(i_p);
            }
        }
    }
    // Anything the bridge search never reached never diverges from its
    // predecessor on a finite walk.
    for i in 0..n {
        if lcp.is_unknown(i) {
            lcp.set_infinite(i);
        }
    }
    lcp.set_length(0, 0);
    lcp
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
