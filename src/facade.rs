//! The crate's top-level, batteries-included entry points: build a
//! [`crate::sims_tree::SimsTree`], bloom it to a frontier sized for the
//! requested thread count, and search the frontier in parallel.

use bitvec::vec::BitVec;

use crate::hardware::hardware_concurrency;
use crate::sims_node::SimsNode;
use crate::sims_tree::{SimsTree, SimsTreeError};
use crate::word::RelatorInput;
use crate::{covering_subgraph::CoveringSubgraph, scheduler};

/// Target frontier size per worker thread before splitting — large enough
/// that static partitioning doesn't starve a thread on a cheap branch,
/// small enough that blooming itself stays a small fraction of the total
/// search cost.
const FRONTIER_PER_THREAD: usize = 64;

/// Default frontier size used by [`covers`], matching the original
/// project's `SimsTree.covers()` convenience default.
const DEFAULT_COVERS_FRONTIER: usize = 3000;

/// Enumerates every transitive permutation representation (up to
/// conjugacy) of the free group of the given `rank`, modulo the given
/// relators, of degree at most `max_degree`.
///
/// `num_threads` of `0` asks for [`hardware_concurrency`]; any other value
/// is used as-is (clamped internally to the size of the search frontier).
///
/// Each representation is returned as one permutation (a `Vec<usize>`,
/// 0-indexed) per generator of the free group.
///
/// # Errors
///
/// Returns [`SimsTreeError`] if `rank`/`max_degree` is zero or a relator
/// fails to parse.
pub fn permutation_reps<'a>(
    rank: usize,
    short_relators: impl IntoIterator<Item = RelatorInput<'a>>,
    long_relators: impl IntoIterator<Item = RelatorInput<'a>>,
    max_degree: usize,
    num_threads: usize,
) -> Result<Vec<Vec<Vec<usize>>>, SimsTreeError> {
    let tree = SimsTree::new(rank, max_degree, short_relators, long_relators)?;
    let threads = if num_threads == 0 { hardware_concurrency() } else { num_threads };
    let target = threads.saturating_mul(FRONTIER_PER_THREAD).max(1);

    let mut results = Vec::new();
    let frontier = tree.bloom(target, &mut results);
    results.extend(scheduler::search_frontier(&tree, frontier, threads));

    Ok(results
        .into_iter()
        .map(|node| node.graph().permutation_rep().expect("emitted node is complete"))
        .collect())
}

/// Like [`permutation_reps`], but groups the results by the degree of the
/// representation (the number of points it acts on), for callers that
/// want, e.g., "every subgroup of index exactly 7" rather than the whole
/// range up to `max_degree`.
///
/// # Errors
///
/// See [`permutation_reps`].
pub fn covers_by_degree<'a>(
    rank: usize,
    short_relators: impl IntoIterator<Item = RelatorInput<'a>>,
    long_relators: impl IntoIterator<Item = RelatorInput<'a>>,
    max_degree: usize,
    num_threads: usize,
) -> Result<Vec<Vec<Vec<Vec<usize>>>>, SimsTreeError> {
    let reps =
        permutation_reps(rank, short_relators, long_relators, max_degree, num_threads)?;
    let mut by_degree: Vec<Vec<Vec<Vec<usize>>>> = (0..=max_degree).map(|_| Vec::new()).collect();
    for rep in reps {
        let degree = rep.first().map_or(0, Vec::len);
        by_degree[degree].push(rep);
    }
    Ok(by_degree)
}

/// Returns every complete, canonical, relator-satisfying node directly,
/// rather than converting to permutation tuples, for callers that want
/// degree or graph-shape information the permutation form discards (e.g.
/// the degree histograms used by the end-to-end scenario tests).
///
/// Frontier size defaults to 3000 and thread count to
/// [`hardware_concurrency`], matching the original project's
/// `SimsTree.covers()` convenience.
///
/// # Errors
///
/// Returns [`SimsTreeError`] if `rank`/`max_degree` is zero or a relator
/// fails to parse.
pub fn covers<'a>(
    rank: usize,
    short_relators: impl IntoIterator<Item = RelatorInput<'a>>,
    long_relators: impl IntoIterator<Item = RelatorInput<'a>>,
    max_degree: usize,
) -> Result<Vec<SimsNode>, SimsTreeError> {
    let tree = SimsTree::new(rank, max_degree, short_relators, long_relators)?;
    let threads = hardware_concurrency();
    let mut results = Vec::new();
    let frontier = tree.bloom(DEFAULT_COVERS_FRONTIER, &mut results);
    results.extend(scheduler::search_frontier(&tree, frontier, threads));
    Ok(results)
}

/// Returns `true` if `graph`'s permutation representation, if complete,
/// is consistent (every generator's image is a bijection on `1..=degree`)
/// — exposed for callers building their own search loop on top of
/// [`crate::sims_tree`] directly.
#[must_use]
pub fn is_consistent_cover(graph: &CoveringSubgraph) -> bool {
    let Some(rep) = graph.permutation_rep() else { return false };
    let degree = graph.degree();
    rep.iter().all(|perm| {
        let mut seen: BitVec = BitVec::repeat(false, degree);
        perm.len() == degree
            && perm.iter().all(|&target| target < degree && !seen.replace(target, true))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modular_group_permutation_reps_match_expected_count() {
        let reps = permutation_reps(
            2,
            ["aa", "bbb"].map(RelatorInput::Text),
            core::iter::empty(),
            25,
            2,
        )
        .unwrap();
        assert_eq!(reps.len(), 55);
        for rep in &reps {
            assert_eq!(rep.len(), 2);
        }
    }

    #[test]
    fn covers_by_degree_groups_by_point_count() {
        let grouped = covers_by_degree(
            2,
            ["aa", "bbb"].map(RelatorInput::Text),
            core::iter::empty(),
            6,
            1,
        )
        .unwrap();
        assert_eq!(grouped.len(), 7);
        assert!(grouped[0].is_empty());
        assert!(!grouped[1].is_empty());
    }

    #[test]
    fn covers_returns_complete_nodes_matching_modular_group_count() {
        let nodes =
            covers(2, ["aa", "bbb"].map(RelatorInput::Text), core::iter::empty(), 25).unwrap();
        assert_eq!(nodes.len(), 55);
        for node in &nodes {
            assert!(node.is_complete());
        }
    }

    #[test]
    fn zero_threads_falls_back_to_hardware_concurrency() {
        let reps =
            permutation_reps(1, core::iter::empty(), core::iter::empty(), 1, 0).unwrap();
        assert_eq!(reps.len(), 1);
    }
}
