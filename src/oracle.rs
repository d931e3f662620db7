//! Component J — an independent `.dot` parser plus a from-scratch backward
//! walk, used to check a computed LCP vector without going through any of
//! the three engines or the `FmIndex`/packed-BWT machinery they share.
//!
//! Each edge line has at least 8 whitespace-separated tokens: token 0 is
//! the origin as `N<id>` (1-indexed), token 2 is the destination the same
//! way, token 6 is the integer label. Lines with fewer tokens (graph
//! wrappers, bare node declarations, attribute blocks) are skipped rather
//! than rejected, since a real preprocessor's `.dot` dump carries plenty
//! of decoration this crate has no use for.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::constants::{StateIdx, INF};
use crate::error::WgLcpError;

/// One parsed edge: `origin` to `dest`, labeled `label`.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub origin: usize,
    pub dest: usize,
    pub label: u8,
}

/// The automaton as a plain edge list, independent of Wheeler order or any
/// FM-index encoding.
pub struct Graph {
    pub n: usize,
    pub edges: Vec<Edge>,
}

impl Graph {
    /// The states with no incoming edge.
    pub fn sources(&self) -> Vec<usize> {
        let mut has_incoming = vec![false; self.n];
        for e in &self.edges {
            has_incoming[e.dest] = true;
        }
        (0..self.n).filter(|&i| !has_incoming[i]).collect()
    }

    /// `pred[i]` is `i`'s unique incoming `(origin, label)`, or `None` if
    /// `i` is a source. Panics if a non-pruned automaton (a state with two
    /// or more incoming edges) is given; this crate only ever handles
    /// pruned automata.
    pub fn predecessors(&self) -> Vec<Option<(usize, u8)>> {
        let mut pred = vec![None; self.n];
        for e in &self.edges {
            assert!(
                pred[e.dest].is_none(),
                "state {} has more than one incoming edge; not a pruned automaton",
                e.dest
            );
            pred[e.dest] = Some((e.origin, e.label));
        }
        pred
    }
}

/// Parses a `.dot` edge list into a [`Graph`].
pub fn parse_dot(path: &Path) -> Result<Graph, WgLcpError> {
    let text = fs::read_to_string(path).map_err(|source| WgLcpError::InputMissing {
        path: path.to_path_buf(),
        source,
    })?;
    let mut edges = Vec::new();
    let mut max_state = None;
    for line in text.lines() {
        let Some((origin, dest, label)) = parse_edge_line(line) else {
            continue;
        };
        max_state = Some(max_state.map_or(origin.max(dest), |m: usize| m.max(origin).max(dest)));
        edges.push(Edge { origin, dest, label });
    }
    let n = match max_state {
        Some(m) => m + 1,
        None => {
            return Err(WgLcpError::InputMalformed {
                path: path.to_path_buf(),
                reason: "no edges found".to_string(),
            })
        }
    };
    Ok(Graph { n, edges })
}

fn parse_edge_line(line: &str) -> Option<(usize, usize, u8)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 8 {
        return None;
    }
    let origin = parse_node_id(tokens[0])?;
    let dest = parse_node_id(tokens[2])?;
    let label: u32 = tokens[6]
        .trim_matches(|c: char| !c.is_ascii_digit())
        .parse()
        .ok()?;
    Some((origin, dest, u8::try_from(label).ok()?))
}

/// Parses a `N<id>` token into a 0-indexed state index; the file format is
/// 1-indexed.
fn parse_node_id(token: &str) -> Option<usize> {
    let digits = token.strip_prefix('N')?;
    let id: usize = digits.parse().ok()?;
    id.checked_sub(1)
}

/// Either a finite walk length or "the two walks never diverge".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LcpValue {
    Length(u64),
    Infinite,
}

impl LcpValue {
    fn matches(&self, stored: StateIdx) -> bool {
        match self {
            LcpValue::Length(v) => *v as StateIdx == stored,
            LcpValue::Infinite => stored == INF,
        }
    }
}

/// Walks `a` and `b` backward one edge at a time, from scratch, counting
/// shared labels. A state is only ever revisited by the *same* walker if
/// the automaton has a cycle reachable by both; once that happens on
/// either side the walk cannot terminate, mirroring the reference
/// checker's "both walkers have been here before" stop condition.
///
/// Exposed beyond this module so fixture builders can compute a ground
/// truth for topologies too irregular for a closed-form formula (states
/// sharing an incoming label across otherwise-unrelated branches, for
/// instance).
pub fn true_lcp(pred: &[Option<(usize, u8)>], mut a: usize, mut b: usize) -> LcpValue {
    let mut seen_a = HashSet::new();
    let mut seen_b = HashSet::new();
    let mut depth = 0u64;
    loop {
        if !seen_a.insert(a) || !seen_b.insert(b) {
            return LcpValue::Infinite;
        }
        match (pred[a], pred[b]) {
            (Some((pa, la)), Some((pb, lb))) if la == lb => {
                a = pa;
                b = pb;
                depth += 1;
            }
            _ => return LcpValue::Length(depth),
        }
    }
}

/// Checks `lcp` (indexed by Wheeler-ordered state, `INF`-sentineled) is the
/// correct LCP vector for `graph`'s Wheeler order `0..n`. Returns the first
/// mismatching index and what was expected, if any.
pub fn verify(graph: &Graph, lcp: &[StateIdx]) -> Result<(), (usize, LcpValue, StateIdx)> {
    let pred = graph.predecessors();
    for i in 1..graph.n {
        let expected = true_lcp(&pred, i - 1, i);
        if !expected.matches(lcp[i]) {
            return Err((i, expected, lcp[i]));
        }
    }
    Ok(())
}
