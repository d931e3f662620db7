//! Shared fixture builders for the integration tests: small pruned Wheeler
//! automata built directly as `(L, out, sources)` triples plus a matching
//! `oracle::Graph`, without going through any file format.

use wg_lcp::bitvector::BitVector;
use wg_lcp::constants::{StateIdx, INF};
use wg_lcp::fm_index::FmIndex;
use wg_lcp::oracle::{self, Edge, Graph, LcpValue};

/// Builds a pruned Wheeler automaton out of disjoint chains, one source per
/// chain. Each chain uses one fixed label for every edge. Chains are sorted
/// by label before being laid out, so two different chains sharing a label
/// end up as one contiguous run in `L` — a state whose predecessor sits in
/// one chain can then land in the very same bucket as a state whose
/// predecessor sits in a different chain, the scenario a single-label-alphabet
/// fixture can never produce.
///
/// Returns the `FmIndex` (for all three engines), the equivalent `Graph`
/// (for `oracle::verify`), and the expected LCP vector computed from scratch
/// via [`oracle::true_lcp`] rather than from the chain layout, since a
/// closed-form per-chain formula breaks the moment two chains share a label.
pub fn build_chains(chains: &[(u8, usize)]) -> (FmIndex, Graph, Vec<StateIdx>) {
    let mut chains = chains.to_vec();
    chains.sort_by_key(|&(label, _)| label);

    let sources = chains.len();
    let mut l = Vec::new();
    let mut edges = Vec::new();
    let mut n = sources;

    for (chain_idx, &(label, len)) in chains.iter().enumerate() {
        let mut prev = chain_idx;
        for _ in 0..len {
            let cur = n;
            edges.push(Edge {
                origin: prev,
                dest: cur,
                label,
            });
            l.push(label);
            n += 1;
            prev = cur;
        }
    }

    let mut out = BitVector::new(2 * l.len());
    for k in 0..l.len() {
        out.set(2 * k);
    }
    out.rebuild();

    let fm = FmIndex::from_parts(&l, out, sources as StateIdx);
    let graph = Graph { n, edges };

    let pred = graph.predecessors();
    let mut expected = vec![0 as StateIdx; n];
    for i in 1..n {
        expected[i] = match oracle::true_lcp(&pred, i - 1, i) {
            LcpValue::Length(v) => v as StateIdx,
            LcpValue::Infinite => INF,
        };
    }

    (fm, graph, expected)
}
