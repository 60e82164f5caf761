//! Invariant 1: after any sequence of successful `add_edge` calls, for all
//! `(u, s, v)`, `out[u][s] = v` iff `in[v][-s] = u`.

use low_index::covering_subgraph::CoveringSubgraph;
use low_index::test_utils::check_dual_table_consistency;

#[test]
fn holds_through_a_manually_built_partial_graph() {
    let mut graph = CoveringSubgraph::new(3, 6);
    graph.add_edge(1, 1, 2).unwrap();
    graph.add_edge(2, 1, 3).unwrap();
    graph.add_edge(-3, 2, 1).unwrap();
    graph.add_edge(3, 3, 3).unwrap();
    check_dual_table_consistency(&graph);
}

#[test]
fn holds_on_every_node_emitted_by_a_real_search() {
    use low_index::prelude::*;

    let tree =
        SimsTree::new(2, 15, ["aa", "bbb"].map(RelatorInput::Text), core::iter::empty())
            .unwrap();
    for node in tree.search() {
        check_dual_table_consistency(node.graph());
    }
}
