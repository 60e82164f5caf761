//! Fuzzing submodule on the full search: every emitted representation must
//! be complete, relator-satisfying, canonical, and a genuine permutation —
//! on small enough inputs that an exhaustive search terminates quickly.

use arbitrary::Arbitrary;
use honggfuzz::fuzz;
use low_index::prelude::*;
use low_index::test_utils::{check_canonical, check_permutation_bijection};

#[derive(Debug, Arbitrary)]
struct Input {
    rank: u8,
    max_degree: u8,
    relators: Vec<Vec<i8>>,
}

fn main() {
    loop {
        fuzz!(|input: Input| {
            let rank = 1 + (input.rank as usize % 3);
            let max_degree = 1 + (input.max_degree as usize % 6);
            let relators: Vec<Vec<i32>> = input
                .relators
                .into_iter()
                .take(3)
                .map(|word| word.into_iter().map(i32::from).take(12).collect())
                .collect();
            let short: Vec<RelatorInput> =
                relators.iter().map(|w| RelatorInput::Letters(w.as_slice())).collect();

            let Ok(tree) = SimsTree::new(rank, max_degree, short, core::iter::empty()) else {
                return;
            };
            for node in tree.search() {
                check_permutation_bijection(node.graph());
                check_canonical(node.graph());
            }
        });
    }
}
