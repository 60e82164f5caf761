//! Testing utilities for constructing type instances from raw bytes and
//! replaying fuzz corpus or crash files, plus shared invariant-checking
//! functions used by both fuzz targets and regression tests.
//!
//! Available whenever `arbitrary` is enabled, or always under `#[cfg(test)]`
//! so the crate's own unit tests can reuse the same checks fuzzing does.

use alloc::vec::Vec;

use bitvec::vec::BitVec;

use crate::covering_subgraph::{inverse_slot, slot_of, CoveringSubgraph};
use crate::errors::SearchSignal;
use crate::relator_eval::verify_closes_everywhere;
use crate::sims_node::Relators;
use crate::word::Letter;

#[cfg(feature = "arbitrary")]
use arbitrary::{Arbitrary, Unstructured};

// ============================================================================
// Deserialization helpers
// ============================================================================

/// Constructs a value of type `T` from raw bytes using the [`Arbitrary`]
/// trait. Returns `None` if the bytes are insufficient or do not produce a
/// valid instance.
#[cfg(feature = "arbitrary")]
pub fn from_bytes<T: for<'a> Arbitrary<'a>>(bytes: &[u8]) -> Option<T> {
    let mut u = Unstructured::new(bytes);
    T::arbitrary(&mut u).ok()
}

/// Loads every file from a directory and constructs instances of `T` from
/// each file's raw bytes. Files that fail to produce a valid instance are
/// silently skipped; a missing or unreadable directory yields an empty
/// vector.
#[cfg(all(feature = "arbitrary", feature = "std"))]
pub fn replay_dir<T: for<'a> Arbitrary<'a>>(dir: &std::path::Path) -> Vec<T> {
    let mut results = Vec::new();
    let Ok(entries) = std::fs::read_dir(dir) else {
        return results;
    };
    for entry in entries.flatten() {
        if entry.path().is_file() {
            if let Ok(bytes) = std::fs::read(entry.path()) {
                if let Some(instance) = from_bytes::<T>(&bytes) {
                    results.push(instance);
                }
            }
        }
    }
    results
}

// ============================================================================
// Fuzzable edge-insertion scripts (mirrors fuzz/fuzz_targets/edge_script.rs)
// ============================================================================

/// A bounded script of `(letter, target)` edge-insertion attempts against a
/// fixed-rank, fixed-capacity [`CoveringSubgraph`], for fuzzing
/// [`CoveringSubgraph::add_edge`] directly without going through the search
/// tree's pruning.
#[cfg(feature = "arbitrary")]
#[derive(Debug, Arbitrary)]
pub struct EdgeScript {
    /// Clamped to `1..=6` before use.
    pub rank: u8,
    /// Clamped to `1..=32` before use.
    pub max_degree: u8,
    /// Each step picks the from-vertex and target by reducing an
    /// arbitrary `u32` modulo the graph's current bounds.
    pub steps: Vec<(Letter, u32, u32)>,
}

#[cfg(feature = "arbitrary")]
impl EdgeScript {
    /// Replays this script against a freshly created graph, applying every
    /// step whose `from`/`letter`/`to` reduce to something in-bounds and
    /// silently skipping the rest. Returns the resulting graph.
    #[must_use]
    pub fn replay(&self) -> CoveringSubgraph {
        let rank = 1 + (self.rank as usize % 6);
        let max_degree = 1 + (self.max_degree as usize % 32);
        let mut graph = CoveringSubgraph::new(rank, max_degree);
        for &(letter, from_raw, to_raw) in &self.steps {
            let generator = 1 + (letter.unsigned_abs() as usize % rank) as Letter;
            let letter = if letter >= 0 { generator } else { -generator };
            let from = 1 + (from_raw as usize % graph.degree());
            let new_vertex_allowed = graph.degree() < graph.max_degree();
            let upper = if new_vertex_allowed { graph.degree() + 1 } else { graph.degree() };
            let to = 1 + (to_raw as usize % upper);
            let _ = graph.add_edge(letter, from as u32, to as u32);
        }
        graph
    }
}

// ============================================================================
// CoveringSubgraph invariants (from fuzz/fuzz_targets/edge_script.rs)
// ============================================================================

/// Checks the dual-table consistency invariant directly against the raw
/// storage (not through [`CoveringSubgraph::in_edge`], which is defined in
/// terms of the same storage and so cannot itself catch a construction
/// bug): for every assigned outgoing edge `(u, letter) -> v`, the inverse
/// slot `(v, -letter)` must point back to `u`.
///
/// # Panics
///
/// Panics if the invariant is violated.
pub fn check_dual_table_consistency(graph: &CoveringSubgraph) {
    for vertex in 1..=graph.degree() as u32 {
        for generator in 1..=graph.rank() as Letter {
            for letter in [generator, -generator] {
                let Some(target) = graph.out_edge(vertex as usize, letter) else { continue };
                let back = graph.out_edge(target as usize, -letter);
                assert_eq!(
                    back,
                    Some(vertex),
                    "edge ({vertex}, {letter}) -> {target} has no matching reverse edge"
                );
            }
        }
    }
}

/// Checks that a complete graph's permutation representation is a genuine
/// bijection on `0..degree` for every generator.
///
/// # Panics
///
/// Panics if the graph is incomplete or some generator's image is not a
/// bijection.
pub fn check_permutation_bijection(graph: &CoveringSubgraph) {
    let rep = graph.permutation_rep().expect("graph must be complete");
    let degree = graph.degree();
    for perm in &rep {
        assert_eq!(perm.len(), degree);
        let mut seen: BitVec = BitVec::repeat(false, degree);
        for &target in perm {
            assert!(target < degree, "image {target} out of range for degree {degree}");
            assert!(!seen.replace(target, true), "image {target} hit twice: not a bijection");
        }
    }
}

/// Checks that every relator in `relators` closes at every basepoint of the
/// (complete) graph.
///
/// # Panics
///
/// Panics if some relator fails to close, or the graph is incomplete.
pub fn check_relator_satisfaction(graph: &CoveringSubgraph, relators: &Relators) {
    for relator in relators.short.iter().chain(relators.long.iter()) {
        match verify_closes_everywhere(graph, relator) {
            Ok(()) => {}
            Err(SearchSignal::RelatorViolation) => panic!("relator {relator:?} does not close"),
            Err(other) => panic!("unexpected signal checking relator closure: {other:?}"),
        }
    }
}

/// Checks that the graph, if complete, is in canonical form — i.e. that the
/// search would not have pruned it.
///
/// # Panics
///
/// Panics if the graph is not canonical.
pub fn check_canonical(graph: &CoveringSubgraph) {
    assert!(crate::canonicity::is_canonical(graph), "node escaped the search non-canonical");
}
