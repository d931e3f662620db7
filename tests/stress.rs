//! Property-based stress test: many random pruned Wheeler automata, each
//! built as a disjoint union of fixed-label chains (see `common::build_chains`
//! for why that shape is guaranteed to be a valid Wheeler order by
//! construction rather than merely plausible), checked for cross-engine
//! agreement and oracle acceptance.
//!
//! Labels are drawn from a small fixed pool rather than assigned one-per-chain,
//! so a sizeable fraction of trials put two or more chains on the same label
//! and therefore in the same bucket: the doubling engine's `bucket(p) != bucket(q)`
//! refinement and the stabbing engine's run-splitting both get exercised
//! against predecessors that live in genuinely different chains, not just
//! different depths of the same one.

mod common;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use wg_lcp::engines::{beller, doubling, stabbing};
use wg_lcp::oracle;

const LABEL_POOL: usize = 3;

fn random_chains(rng: &mut SmallRng) -> Vec<(u8, usize)> {
    let num_chains = rng.random_range(1..=8usize);
    (0..num_chains)
        .map(|_| {
            let label = b'a' + rng.random_range(0..LABEL_POOL) as u8;
            let len = rng.random_range(1..=15usize);
            (label, len)
        })
        .collect()
}

#[test]
fn hundred_random_automata_agree_across_engines() {
    let mut rng = SmallRng::seed_from_u64(0x5741_4c4c_4552);
    for trial in 0..100 {
        let chains = random_chains(&mut rng);
        let (fm, graph, expected) = common::build_chains(&chains);

        let beller_lcp = beller::run(&fm).finish();
        assert_eq!(beller_lcp, expected, "beller disagreement on trial {trial}");
        oracle::verify(&graph, &beller_lcp)
            .unwrap_or_else(|e| panic!("oracle rejected beller's output on trial {trial}: {e:?}"));

        let stabbing_lcp = stabbing::run(&fm).finish();
        assert_eq!(
            stabbing_lcp, expected,
            "stabbing disagreement on trial {trial}"
        );
        oracle::verify(&graph, &stabbing_lcp).unwrap_or_else(|e| {
            panic!("oracle rejected stabbing's output on trial {trial}: {e:?}")
        });

        let doubling_lcp = doubling::run(&fm).finish();
        assert_eq!(
            doubling_lcp, expected,
            "doubling disagreement on trial {trial}"
        );
        oracle::verify(&graph, &doubling_lcp).unwrap_or_else(|e| {
            panic!("oracle rejected doubling's output on trial {trial}: {e:?}")
        });
    }
}
