//! Fuzzing submodule on [`EdgeScript`]: any sequence of bounded edge
//! insertions must leave the graph's dual-table invariant intact, whether
//! or not individual insertions were rejected.

use honggfuzz::fuzz;
use low_index::test_utils::{check_dual_table_consistency, EdgeScript};

fn main() {
    loop {
        fuzz!(|script: EdgeScript| {
            let graph = script.replay();
            check_dual_table_consistency(&graph);
            if graph.is_complete() {
                low_index::test_utils::check_permutation_bijection(&graph);
            }
        });
    }
}
