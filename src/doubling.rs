//! Component H — the prefix-doubling LCP engine's supporting data: a
//! predecessor vector `M` doubled in distance each round (`pred_{2h}(i) =
//! pred_h(pred_h(i))`), a bucket bitvector `I` partitioning states by
//! "agree on the last `h` backward characters", a mutable LCP vector, and
//! a range-min structure over it so two states' buckets can be told
//! apart, and the gap between two same-bucket predecessors queried,
//! without walking the whole gap one state at a time.
//!
//! `M` is built straight from the `FmIndex`: state `i`'s unique incoming
//! edge sits at L-position `p = state_to_bwt_pos(i) .. state_to_bwt_pos(i+1)`'s
//! single element for every non-source `i`, and its origin is whichever
//! state owns that L-range — so a single forward pass over every state's
//! own outgoing range, writing `M[forward(p, L[p])] = origin`, fills `M`
//! for every destination in one scan of `L`.

use crate::bitvector::BitVector;
use crate::constants::{StateIdx, EMPTY, INF};
use crate::fm_index::FmIndex;
use crate::lcp::{LcpSlot, LcpVector};

/// The six queries the prefix-doubling engine (Component I) drives its
/// main loop through, kept as a trait so the engine's loop reads exactly
/// like the algorithm it implements.
pub trait Doubling {
    /// Which bucket position `i` falls in: states agreeing on their last
    /// `h()` backward characters share a bucket.
    fn bucket(&self, i: usize) -> u64;
    /// Minimum LCP value over the open-left interval `(i, j]`.
    fn rmq(&self, i: usize, j: usize) -> u64;
    /// The state reached by walking `h()` edges backward from `i`, or
    /// [`crate::constants::INF`] if that walk runs off a source first.
    fn get_pred(&self, i: usize) -> StateIdx;
    /// The current doubling distance.
    fn h(&self) -> u64;
    /// Records a newly resolved (or provisionally infinite) LCP value.
    fn update_lcp(&mut self, i: usize, v: u64);
    /// First position the engine should examine.
    fn begin(&self) -> usize;
    /// One past the last position the engine should examine.
    fn end(&self) -> usize;
}

/// Builds the predecessor-at-distance-1 vector directly from the
/// FM-index: one scan over every state's own outgoing L-range, each edge
/// writing its destination's single predecessor entry.
pub fn build_predecessor_vector(fm: &FmIndex) -> Vec<StateIdx> {
    let n = fm.num_states();
    let mut pred = vec![INF; n];
    for origin in 0..n {
        let lo = fm.state_to_bwt_pos(origin as StateIdx);
        let hi = fm.state_to_bwt_pos(origin as StateIdx + 1);
        for p in lo..hi {
            let c = fm.label_at(p);
            let dest = fm.forward(p, c);
            pred[dest as usize] = origin as StateIdx;
        }
    }
    pred
}

/// Sparse table over a snapshot of the LCP vector, rebuilt once per
/// doubling round. Unresolved entries act as `+infinity`: treating a
/// not-yet-known gap as "large enough" only ever makes the engine double
/// again rather than finalize a wrong answer, and the gap is re-examined
/// (with by-then-resolved neighbors) in a later round.
struct RangeMin {
    table: Vec<Vec<u64>>,
}

impl RangeMin {
    fn build(values: &[u64]) -> Self {
        let n = values.len();
        if n == 0 {
            return RangeMin { table: vec![vec![]] };
        }
        let levels = n.ilog2() as usize + 1;
        let mut table = vec![values.to_vec()];
        for k in 1..levels {
            let prev = &table[k - 1];
            let span = 1usize << k;
            let mut row = vec![u64::MAX; n];
            for i in 0..=n.saturating_sub(span) {
                row[i] = prev[i].min(prev[i + span / 2]);
            }
            table.push(row);
        }
        RangeMin { table }
    }

    /// Minimum of the array over `[lo, hi)`. `lo == hi` (an empty range)
    /// returns `u64::MAX`, the RMQ identity.
    fn query(&self, lo: usize, hi: usize) -> u64 {
        if lo >= hi {
            return u64::MAX;
        }
        let len = hi - lo;
        let k = len.ilog2() as usize;
        let span = 1usize << k;
        self.table[k][lo].min(self.table[k][hi - span])
    }
}

/// Component H's full state: predecessor vector, bucket bitvector, LCP
/// vector under construction, and the RMQ snapshot over it.
pub struct DoublingData {
    n: usize,
    s: usize,
    pred: Vec<StateIdx>,
    bucket_bits: BitVector,
    lcp: LcpVector,
    rmq: RangeMin,
    h: u64,
}

impl DoublingData {
    /// Initializes at `h = 1`: buckets the boundary between each distinct
    /// incoming label, LCP `0` at each such boundary, `M` built from the
    /// FM-index.
    pub fn new(fm: &FmIndex) -> Self {
        let n = fm.num_states();
        let s = fm.sources as usize;
        let mut lcp = LcpVector::new(n);
        let mut bucket_bits = BitVector::new(n.max(1));
        if n > 0 {
            bucket_bits.set(0);
        }
        for &c in fm.alphabet() {
            let boundary = fm.cumulative(c) as usize + s;
            if boundary < n {
                bucket_bits.set(boundary);
                lcp.set_length(boundary, 0);
            }
        }
        bucket_bits.rebuild();

        let pred = build_predecessor_vector(fm);
        let rmq = RangeMin::build(&snapshot(&lcp));

        DoublingData {
            n,
            s,
            pred,
            bucket_bits,
            lcp,
            rmq,
            h: 1,
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn sources(&self) -> usize {
        self.s
    }

    /// Doubles the predecessor distance and refreshes the bucket
    /// bitvector and RMQ snapshot for the new round. Returns `false` once
    /// `h` would exceed `n - s` (no acyclic walk can go further), leaving
    /// `h` unchanged so `h()` still reports the last distance actually in
    /// effect.
    pub fn doubling_step(&mut self) -> bool {
        let next_h = self.h * 2;
        if self.n < self.s || next_h > (self.n - self.s) as u64 {
            return false;
        }
        self.h = next_h;

        let scratch = self.pred.clone();
        for i in self.s..self.n {
            if self.pred[i] == INF {
                continue;
            }
            let mi = self.pred[i] as usize;
            self.pred[i] = if mi > i {
                self.pred[mi]
            } else {
                scratch[mi]
            };
        }

        let threshold = self.h / 2;
        let mut changed = false;
        for i in self.s..self.n {
            if let LcpSlot::Length(v) = self.lcp.get(i) {
                if v >= threshold && !self.bucket_bits.get(i) {
                    self.bucket_bits.set(i);
                    changed = true;
                }
            }
        }
        if changed {
            self.bucket_bits.rebuild();
        }
        self.rmq = RangeMin::build(&snapshot(&self.lcp));
        true
    }

    /// Consumes `self`, returning the LCP vector built so far.
    pub fn into_lcp(self) -> LcpVector {
        self.lcp
    }
}

fn snapshot(lcp: &LcpVector) -> Vec<u64> {
    (0..lcp.len())
        .map(|i| match lcp.get(i) {
            LcpSlot::Length(v) => v,
            LcpSlot::Infinite | LcpSlot::Unknown => u64::MAX,
        })
        .collect()
}

impl Doubling for DoublingData {
    fn bucket(&self, i: usize) -> u64 {
        self.bucket_bits.rank1(i + 1)
    }

    fn rmq(&self, i: usize, j: usize) -> u64 {
        self.rmq.query(i + 1, j + 1)
    }

    fn get_pred(&self, i: usize) -> StateIdx {
        self.pred[i]
    }

    fn h(&self) -> u64 {
        self.h
    }

    fn update_lcp(&mut self, i: usize, v: u64) {
        if v == EMPTY as u64 || v == INF as u64 {
            self.lcp.set_infinite(i);
        } else {
            self.lcp.set_length(i, v);
        }
    }

    fn begin(&self) -> usize {
        1
    }

    fn end(&self) -> usize {
        self.n
    }
}
