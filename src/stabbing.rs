//! Component F — the packed-BWT side structure backing the
//! interval-stabbing engine's `stab` query.
//!
//! `L` is split into fixed 128-byte blocks, each conceptually laid out as
//! four bitfields: a 128-bit left-border bitmap (indexed by character),
//! the block's 128 raw bytes of `L` as the body, a 128-bit stabbed
//! bitmap (indexed by in-block position) and a 128-bit right-border
//! bitmap (indexed by character). Border bits record which characters
//! have a maximal monochromatic run crossing into or out of this block
//! from a neighboring one; the stabbed bitmap records which body
//! positions have already been returned as a run's left endpoint. Runs
//! that stay inside one block resolve by a body-local scan; runs that
//! cross a block boundary fall back to the wavelet tree's rank/select to
//! find their true extent, clearing the border bits of every block they
//! span once stabbed so a later query never rediscovers the same run.

use crate::bitvector::BitVector;
use crate::fm_index::FmIndex;

const BLOCK: usize = 128;
const CHARS: usize = 128;

struct Block {
    body: Vec<u8>,
    left_border: BitVector,
    right_border: BitVector,
    /// One bit per body position; set once that position has been
    /// returned as a run's left endpoint.
    stabbed: BitVector,
}

pub struct PackedBwt<'a> {
    fm: &'a FmIndex,
    blocks: Vec<Block>,
}

impl<'a> PackedBwt<'a> {
    /// Builds the block structure from `fm`'s BWT bytes and wavelet tree.
    pub fn build(fm: &'a FmIndex) -> Self {
        let l = fm.bwt_bytes();
        assert!(!l.is_empty(), "packed BWT built over an empty L");

        let num_blocks = l.len().div_ceil(BLOCK);
        let mut blocks: Vec<Block> = (0..num_blocks)
            .map(|b| {
                let start = b * BLOCK;
                let end = (start + BLOCK).min(l.len());
                let body_len = end - start;
                Block {
                    body: l[start..end].to_vec(),
                    left_border: BitVector::new(CHARS),
                    right_border: BitVector::new(CHARS),
                    stabbed: BitVector::new(body_len),
                }
            })
            .collect();

        // Maximal monochromatic runs spanning more than one block mark
        // their crossing character on every block they pass through:
        // right-border on every block the run leaves to the right,
        // left-border on every block it enters from the left.
        let mut lo = 0;
        while lo < l.len() {
            let c = l[lo];
            let mut hi = lo + 1;
            while hi < l.len() && l[hi] == c {
                hi += 1;
            }
            let b_lo = lo / BLOCK;
            let b_hi = (hi - 1) / BLOCK;
            if b_hi > b_lo {
                for b in b_lo..b_hi {
                    blocks[b].right_border.set(c as usize);
                }
                for block in blocks.iter_mut().take(b_hi + 1).skip(b_lo + 1) {
                    block.left_border.set(c as usize);
                }
            }
            lo = hi;
        }
        for block in &mut blocks {
            block.left_border.rebuild();
            block.right_border.rebuild();
            block.stabbed.rebuild();
        }

        PackedBwt { fm, blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.iter().map(|b| b.body.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolves every bridge touching position `i`'s block that has not
    /// already been stabbed: `(c, p)` where `p` is one past the right end
    /// of a maximal monochromatic `c`-run. A single call can return more
    /// than one bridge, since scanning past `i` can incidentally resolve
    /// another run whose left endpoint also falls inside this block.
    pub fn stab(&mut self, i: usize) -> Vec<(u8, usize)> {
        let b = i / BLOCK;
        let block_base = b * BLOCK;
        let offset = i - block_base;
        let body_len = self.blocks[b].body.len();

        // x[c]: most recent position of c seen so far in this block, −1
        // if unseen, −2 once its bridge has been emitted (or is known to
        // cross a border, so the local scan must not touch it).
        let mut x = [-1i64; CHARS];
        {
            let block = &self.blocks[b];
            for j in 0..offset {
                x[block.body[j] as usize] = (block_base + j) as i64;
            }
        }

        let mut bridges = Vec::new();
        let mut newly_stabbed = Vec::new();
        {
            let block = &self.blocks[b];
            for j in offset..body_len {
                let c = block.body[j] as usize;
                if x[c] >= 0 {
                    let left = x[c] as usize;
                    let local = left - block_base;
                    if !block.stabbed.get(local) {
                        newly_stabbed.push(local);
                        bridges.push((c as u8, block_base + j + 1));
                    }
                    x[c] = -2;
                } else if x[c] != -2 {
                    x[c] = (block_base + j) as i64;
                }
            }
        }
        if !newly_stabbed.is_empty() {
            let block = &mut self.blocks[b];
            for local in newly_stabbed {
                block.stabbed.set(local);
            }
            block.stabbed.rebuild();
        }

        let left_border = self.blocks[b].left_border.clone();
        let right_border = self.blocks[b].right_border.clone();
        let block_end = block_base + body_len;
        for c in 0..CHARS {
            if x[c] == -2 {
                continue;
            }
            let ch = c as u8;
            if left_border.get(c) {
                let k = self.fm.rank_l(ch, block_base);
                if let Some(bridge) = self.resolve_crossing_run(k, ch) {
                    bridges.push(bridge);
                }
            }
            if right_border.get(c) {
                let k = self.fm.rank_l(ch, block_end);
                if let Some(bridge) = self.resolve_crossing_run(k, ch) {
                    bridges.push(bridge);
                }
            }
        }
        bridges
    }

    /// Given that `k` is the rank (1-indexed occurrence count) of some
    /// position known to sit inside a run of `c` crossing a block
    /// border, walks outward via `select` to find the run's true extent,
    /// marks it stabbed at its left endpoint and clears the border bits
    /// of every block it spans. Returns `None` if there is no such
    /// occurrence, or the run was already stabbed by an earlier query.
    fn resolve_crossing_run(&mut self, k: u64, c: u8) -> Option<(u8, usize)> {
        if k == 0 {
            return None;
        }
        let freq = self.fm.freq_l(c);

        let mut lo_k = k;
        let mut lo_pos = self.fm.select_l(c, lo_k);
        while lo_k > 1 {
            let prev = self.fm.select_l(c, lo_k - 1);
            if prev + 1 == lo_pos {
                lo_pos = prev;
                lo_k -= 1;
            } else {
                break;
            }
        }

        let mut hi_k = k;
        let mut hi_pos = self.fm.select_l(c, hi_k);
        while hi_k < freq {
            let next = self.fm.select_l(c, hi_k + 1);
            if next == hi_pos + 1 {
                hi_pos = next;
                hi_k += 1;
            } else {
                break;
            }
        }

        let lo = lo_pos;
        let hi = hi_pos + 1;
        let b_lo = lo / BLOCK;
        let local = lo - b_lo * BLOCK;
        if self.blocks[b_lo].stabbed.get(local) {
            return None;
        }
        self.blocks[b_lo].stabbed.set(local);
        self.blocks[b_lo].stabbed.rebuild();

        let b_hi = (hi - 1) / BLOCK;
        for block in &mut self.blocks[b_lo..=b_hi] {
            block.left_border.clear(c as usize);
            block.right_border.clear(c as usize);
            block.left_border.rebuild();
            block.right_border.rebuild();
        }
        Some((c, hi))
    }
}
