//! Component E — the Beller-generalized BFS.
//!
//! Starting from the single interval covering every state, each round
//! refines every live interval by one more backward character via
//! `FmIndex::forward_all`. Whenever a refinement splits an interval into
//! more than one labeled child, the left edge of every child after the
//! first is a new LCP boundary at the current BFS depth: the two states
//! either side of that edge shared exactly `depth` backward characters and
//! then diverged.

use crate::constants::StateIdx;
use crate::fm_index::FmIndex;
use crate::lcp::LcpVector;
use crate::queue::IntervalQueue;

/// Runs the BFS to completion and returns the finished LCP vector.
pub fn run(fm: &FmIndex) -> LcpVector {
    let n = fm.num_states();
    let s = fm.sources as usize;
    let mut lcp = LcpVector::new(n);
    lcp.fill_source_prefix(s);

    if n <= 1 {
        return lcp;
    }

    let mut q = IntervalQueue::new(n);
    q.push(0, n as StateIdx);

    // No interval can go more than n rounds without either splitting or
    // being part of a genuine infinite loop (two states whose backward
    // walks never separate).
    let max_rounds = n as u64 + 1;

    while q.advance() {
        let depth = q.get_l();
        if depth > max_rounds {
            drain_as_infinite(&mut q, &mut lcp);
            break;
        }
        while let Some((lo, hi)) = q.pop() {
            let children = fm.forward_all(lo, hi);
            for (idx, &(_label, clo, chi)) in children.iter().enumerate() {
                if idx > 0 {
                    lcp.set_length(clo as usize, depth);
                }
                if chi - clo >= 2 {
                    q.push(clo, chi);
                }
            }
        }
    }
    lcp
}

/// Reached only if the BFS cap trips: whatever is left in flight represents
/// states whose backward walks never diverge. Everything but each group's
/// own left edge (already assigned) becomes `Infinite`.
fn drain_as_infinite(q: &mut IntervalQueue, lcp: &mut LcpVector) {
    while let Some((lo, hi)) = q.pop() {
        for i in (lo + 1)..hi {
            lcp.set_infinite(i as usize);
        }
    }
    while q.advance() {
        while let Some((lo, hi)) = q.pop() {
            for i in (lo + 1)..hi {
                lcp.set_infinite(i as usize);
            }
        }
    }
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
        // Two chains: 0->2->3 (labels a,a), 1->4->5 (labels b,b).
        let l = b"aabb".to_vec();
        let mut out = BitVector::new(8);
        for &i in &[0usize, 2, 4, 6] {
            out.set(i);
        }
        out.rebuild();
        FmIndex::from_parts(&l, out, 2)
    }

    #[test]
    fn chain_lcp_grows_by_one_each_step() {
        let lcp = run(&e1());
        assert_eq!(lcp.finish(), vec![0, 0, 1, 2, 3]);
    }

    #[test]
    fn two_disjoint_chains() {
        let lcp = run(&e2());
        assert_eq!(lcp.finish(), vec![0, 0, 0, 1, 0, 1]);
    }
}
