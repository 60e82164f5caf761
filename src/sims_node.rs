//! A node of the Sims search tree: a partial covering graph paired with
//! its relator-evaluation state. Cloned on every branch, discarded on
//! every prune.

use alloc::vec::Vec;

use crate::canonicity;
use crate::covering_subgraph::CoveringSubgraph;
use crate::errors::SearchSignal;
use crate::relator_eval::{self, RelatorEvalState};
use crate::word::Letter;

/// The read-only relator data shared by every node in a search: the
/// already-spun short relators and the unspun long relators.
#[derive(Debug, Clone)]
pub struct Relators {
    /// Spun short relators, checked incrementally at every edge.
    pub short: Vec<Vec<Letter>>,
    /// Long relators, checked only once a node is complete.
    pub long: Vec<Vec<Letter>>,
}

/// One node of the search tree: a partial covering graph plus the
/// incremental evaluation state of every spun short relator.
#[derive(Debug, Clone)]
pub struct SimsNode {
    graph: CoveringSubgraph,
    eval: RelatorEvalState,
}

impl SimsNode {
    /// Builds the root node: a single-vertex covering graph with the
    /// given short relators' evaluation state initialized.
    pub fn root(rank: usize, max_degree: usize, relators: &Relators) -> Self {
        Self {
            graph: CoveringSubgraph::new(rank, max_degree),
            eval: RelatorEvalState::new(relators.short.clone()),
        }
    }

    /// The underlying partial covering graph.
    #[must_use]
    pub fn graph(&self) -> &CoveringSubgraph {
        &self.graph
    }

    /// The graph's current degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.graph.degree()
    }

    /// Whether the underlying graph has no remaining empty slots.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.graph.is_complete()
    }

    /// Clones this node, adds the edge `(letter, from, to)`, advances the
    /// short-relator evaluation, and checks canonicity — the full
    /// per-candidate pipeline tried against every candidate target.
    ///
    /// Returns `None` if the candidate is pruned (edge conflict, degree
    /// exceeded, relator violation, or loss of canonicity).
    #[must_use]
    pub fn try_extend(&self, letter: Letter, from: u32, to: u32) -> Option<Self> {
        let creates_vertex = to as usize == self.graph.degree() + 1;
        let mut next = self.clone();
        if next.graph.add_edge(letter, from, to).is_err() {
            return None;
        }
        if creates_vertex {
            next.eval.push_vertex(to);
        }
        if next.eval.advance(&next.graph).is_err() {
            return None;
        }
        if !canonicity::is_canonical(&next.graph) {
            return None;
        }
        Some(next)
    }

    /// Every candidate target for the next empty slot, in the fixed
    /// enumeration order required for canonical-form reasoning to stay
    /// valid: existing vertices in ascending order, then "new vertex"
    /// last (only if capacity allows).
    #[must_use]
    pub fn candidate_targets(&self) -> (u32, Letter, Vec<u32>) {
        let (from, letter) = self.graph.first_empty_slot().expect("node is not complete");
        let mut targets: Vec<u32> = Vec::new();
        for vertex in 1..=self.graph.degree() as u32 {
            if self.graph.in_edge(vertex as usize, letter).is_none() {
                targets.push(vertex);
            }
        }
        if self.graph.degree() < self.graph.max_degree() {
            targets.push(self.graph.degree() as u32 + 1);
        }
        (from, letter, targets)
    }

    /// Checks every long relator, and every short relator (re-verified
    /// in full for robustness — see DESIGN.md), closes at every
    /// basepoint of this complete graph.
    ///
    /// # Errors
    ///
    /// Returns [`SearchSignal::RelatorViolation`] if some relator fails
    /// to close.
    pub fn verify_complete(&self, relators: &Relators) -> Result<(), SearchSignal> {
        debug_assert!(self.is_complete());
        for relator in relators.long.iter().chain(relators.short.iter()) {
            relator_eval::verify_closes_everywhere(&self.graph, relator)?;
        }
        Ok(())
    }
}
