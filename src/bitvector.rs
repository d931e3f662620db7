//! Component A — a bitvector with rank0/rank1/select1, static after load but
//! rebuildable in place for the doubling engine's bucket bitvector.

use std::io::Read;

use crate::error::WgLcpError;

const WORD_BITS: usize = 64;

/// A plain bitvector over `Vec<u64>` words with a cumulative-popcount rank
/// index. The index is only valid between calls to [`BitVector::rebuild`];
/// any mutation through [`BitVector::set`]/[`BitVector::clear`] marks it
/// dirty and rank/select panic (in debug builds) until it is rebuilt. This
/// mirrors the source's "mutable-aliased static rank support" pattern as an
/// explicit state machine instead of an implicit pointer into live storage.
#[derive(Debug, Clone)]
pub struct BitVector {
    words: Vec<u64>,
    n: usize,
    /// `block_rank[w]` = number of set bits in `words[0..w]`.
    block_rank: Vec<u64>,
    dirty: bool,
}

impl BitVector {
    /// A zeroed bitvector of `size` bits.
    pub fn new(size: usize) -> Self {
        let mut bv = BitVector {
            words: vec![0u64; size.div_ceil(WORD_BITS)],
            n: size,
            block_rank: Vec::new(),
            dirty: true,
        };
        bv.rebuild();
        bv
    }

    /// Parses an ASCII stream of `'0'`/`'1'` bytes into a bitvector, one bit
    /// per byte. Used to load `basepath.out` and the bucket prefix checks of
    /// `basepath.in`.
    pub fn load(mut reader: impl Read, path_for_errors: &std::path::Path) -> Result<Self, WgLcpError> {
        let mut buf = Vec::new();
        reader
            .read_to_end(&mut buf)
            .map_err(|source| WgLcpError::InputMissing {
                path: path_for_errors.to_path_buf(),
                source,
            })?;
        if buf.is_empty() {
            return Err(WgLcpError::InputMalformed {
                path: path_for_errors.to_path_buf(),
                reason: "bitvector stream is empty".to_string(),
            });
        }
        let mut bv = BitVector::new(buf.len());
        for (i, &byte) in buf.iter().enumerate() {
            match byte {
                b'1' => bv.set(i),
                b'0' => {}
                other => {
                    return Err(WgLcpError::InputMalformed {
                        path: path_for_errors.to_path_buf(),
                        reason: format!("byte {other} at offset {i} is neither '0' nor '1'"),
                    });
                }
            }
        }
        bv.rebuild();
        Ok(bv)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn get(&self, i: usize) -> bool {
        debug_assert!(i < self.n, "bit {i} out of range (size {})", self.n);
        (self.words[i / WORD_BITS] >> (i % WORD_BITS)) & 1 == 1
    }

    pub fn set(&mut self, i: usize) {
        debug_assert!(i < self.n, "bit {i} out of range (size {})", self.n);
        self.words[i / WORD_BITS] |= 1u64 << (i % WORD_BITS);
        self.dirty = true;
    }

    pub fn clear(&mut self, i: usize) {
        debug_assert!(i < self.n, "bit {i} out of range (size {})", self.n);
        self.words[i / WORD_BITS] &= !(1u64 << (i % WORD_BITS));
        self.dirty = true;
    }

    /// Recomputes the rank index from the current bits. Must be called
    /// after any `set`/`clear` and before the next rank/select query.
    pub fn rebuild(&mut self) {
        let mut block_rank = Vec::with_capacity(self.words.len());
        let mut acc = 0u64;
        for &w in &self.words {
            block_rank.push(acc);
            acc += w.count_ones() as u64;
        }
        self.block_rank = block_rank;
        self.dirty = false;
    }

    #[inline]
    fn assert_fresh(&self) {
        debug_assert!(
            !self.dirty,
            "rank/select queried on a BitVector mutated since the last rebuild()"
        );
    }

    /// Count of 1-bits in `[0, i)`.
    pub fn rank1(&self, i: usize) -> u64 {
        self.assert_fresh();
        debug_assert!(i <= self.n);
        if i == 0 {
            return 0;
        }
        let word = (i - 1) / WORD_BITS;
        let bit_in_word = (i - 1) % WORD_BITS;
        let mask = if bit_in_word == WORD_BITS - 1 {
            u64::MAX
        } else {
            (1u64 << (bit_in_word + 1)) - 1
        };
        self.block_rank[word] + (self.words[word] & mask).count_ones() as u64
    }

    /// Count of 0-bits in `[0, i)`.
    #[inline]
    pub fn rank0(&self, i: usize) -> u64 {
        i as u64 - self.rank1(i)
    }

    /// Position of the `k`-th 0-bit, 1-indexed. `select0(0) == 0` by the
    /// same convention as [`BitVector::select1`].
    pub fn select0(&self, k: u64) -> usize {
        self.assert_fresh();
        if k == 0 {
            return 0;
        }
        // Binary search on the complemented cumulative count (zeros before
        // each word), mirroring select1's search on ones.
        let word = (0..self.block_rank.len())
            .find(|&w| {
                let zeros_before = (w as u64) * WORD_BITS as u64 - self.block_rank[w];
                zeros_before >= k
            })
            .map(|w| w - 1)
            .unwrap_or(self.block_rank.len() - 1);
        let zeros_before_word = (word as u64) * WORD_BITS as u64 - self.block_rank[word];
        let mut remaining = k - zeros_before_word;
        let mut w = !self.words[word];
        let base = word * WORD_BITS;
        loop {
            debug_assert_ne!(w, 0, "select0({k}) out of range (size {})", self.n);
            let tz = w.trailing_zeros() as usize;
            remaining -= 1;
            if remaining == 0 {
                return base + tz;
            }
            w &= w - 1;
        }
    }

    /// Position of the `k`-th 1-bit, 1-indexed. `select1(0) == 0` by
    /// convention (matching the source's `select_1` on an empty prefix).
    /// Saturates to `size()` when `k` exceeds the total number of ones,
    /// rather than panicking: `forward_all`'s upper bound is the state
    /// count `n`, which routinely exceeds the edge count `m` whenever
    /// there are source states, and still needs a well-defined "one past
    /// the end" position to translate through `rank0`.
    pub fn select1(&self, k: u64) -> usize {
        self.assert_fresh();
        if k == 0 {
            return 0;
        }
        let total_ones = self.rank1(self.n);
        if k > total_ones {
            return self.n;
        }
        // Binary search over word-level cumulative ranks for the word that
        // contains the k-th one, then scan within the word with ctz, the
        // same primitive the hybrid queue uses to pop bitmap layers.
        let word = self
            .block_rank
            .partition_point(|&cum| cum < k)
            .saturating_sub(1);
        let mut remaining = k - self.block_rank[word];
        let mut w = self.words[word];
        let base = word * WORD_BITS;
        loop {
            debug_assert_ne!(w, 0, "select1({k}) out of range (size {})", self.n);
            let tz = w.trailing_zeros() as usize;
            remaining -= 1;
            if remaining == 0 {
                return base + tz;
            }
            w &= w - 1; // clear lowest set bit
        }
    }
}
