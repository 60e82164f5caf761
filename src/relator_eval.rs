//! Incremental relator evaluation: for each spun short relator and each
//! basepoint, tracks how far along the relator word the coset walk has
//! progressed, advancing opportunistically whenever new edges become
//! available and failing the node the instant a relator fails to close.

use alloc::vec;
use alloc::vec::Vec;

use crate::covering_subgraph::CoveringSubgraph;
use crate::errors::SearchSignal;
use crate::word::Letter;

/// The progress of one (relator, basepoint) evaluation: the next letter
/// index to consume, and the vertex reached after consuming the letters
/// before it.
///
/// `pos` is `u32`: this crate's regression tests exercise relators of
/// several hundred letters (e.g. the `o9_03127` presentation), so at
/// least 16-bit positions are required, never the 8-bit width an earlier
/// implementation of this algorithm was found to use. `u32` is used
/// rather than `u16` so that it never couples to, or risks wrapping
/// against, `word`'s relator length safety cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Progress {
    pos: u32,
    cur: u32,
}

/// Evaluation state for every spun short relator, at every basepoint
/// `1..=degree`. Grows in lockstep with the covering graph's vertex
/// count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatorEvalState {
    relators: Vec<Vec<Letter>>,
    /// `progress[relator_index][basepoint - 1]`.
    progress: Vec<Vec<Progress>>,
    /// `satisfied[relator_index][basepoint - 1]`.
    satisfied: Vec<Vec<bool>>,
}

impl RelatorEvalState {
    /// Creates the initial evaluation state for `relators` (already
    /// spun), with a single basepoint (vertex 1).
    pub fn new(relators: Vec<Vec<Letter>>) -> Self {
        let progress = relators.iter().map(|_| vec![Progress { pos: 0, cur: 1 }]).collect();
        let satisfied = relators.iter().map(|_| vec![false]).collect();
        Self { relators, progress, satisfied }
    }

    /// Extends the evaluation state for a newly created vertex.
    pub fn push_vertex(&mut self, vertex: u32) {
        for (progress, satisfied) in self.progress.iter_mut().zip(self.satisfied.iter_mut()) {
            progress.push(Progress { pos: 0, cur: vertex });
            satisfied.push(false);
        }
    }

    /// Whether every (relator, basepoint) pair has closed.
    #[must_use]
    pub fn all_satisfied(&self) -> bool {
        self.satisfied.iter().all(|row| row.iter().all(|&done| done))
    }

    /// Advances every unfinished (relator, basepoint) evaluation as far
    /// as the currently-defined edges allow, after a new edge has been
    /// added to `graph`.
    ///
    /// Callers must call [`Self::push_vertex`] for any vertex `add_edge`
    /// just created *before* calling this method, so that every
    /// basepoint in `1..=graph.degree()` already has an evaluation slot.
    ///
    /// # Errors
    ///
    /// Returns [`SearchSignal::RelatorViolation`] the instant some
    /// relator closes up at the wrong vertex.
    pub fn advance(&mut self, graph: &CoveringSubgraph) -> Result<(), SearchSignal> {
        for relator_idx in 0..self.relators.len() {
            let relator = &self.relators[relator_idx];
            let len = relator.len() as u32;
            for basepoint in 1..=graph.degree() {
                if self.satisfied[relator_idx][basepoint - 1] {
                    continue;
                }
                loop {
                    let state = self.progress[relator_idx][basepoint - 1];
                    if state.pos == len {
                        if state.cur == basepoint as u32 {
                            self.satisfied[relator_idx][basepoint - 1] = true;
                        } else {
                            return Err(SearchSignal::RelatorViolation);
                        }
                        break;
                    }
                    let letter = relator[state.pos as usize];
                    match graph.out_edge(state.cur as usize, letter) {
                        Some(next) => {
                            self.progress[relator_idx][basepoint - 1] =
                                Progress { pos: state.pos + 1, cur: next };
                        }
                        None => break,
                    }
                }
            }
        }
        Ok(())
    }
}

/// Walks `relator` from every basepoint `1..=degree` in the (necessarily
/// complete) `graph`, failing if any walk does not return to its
/// basepoint. Used both for long relators and to re-verify short
/// relators once a node is complete.
pub fn verify_closes_everywhere(
    graph: &CoveringSubgraph,
    relator: &[Letter],
) -> Result<(), SearchSignal> {
    for basepoint in 1..=graph.degree() {
        let mut cur = basepoint as u32;
        for &letter in relator {
            cur = graph.out_edge(cur as usize, letter).expect("complete graph has every edge");
        }
        if cur != basepoint as u32 {
            return Err(SearchSignal::RelatorViolation);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relator_advances_and_satisfies_on_closing_edge() {
        // aa on a single vertex: the self-loop closes the relator at
        // vertex 1, traversed twice, in one go.
        let mut graph = CoveringSubgraph::new(1, 1);
        let mut eval = RelatorEvalState::new(vec![vec![1, 1]]);
        graph.add_edge(1, 1, 1).unwrap();
        eval.advance(&graph).unwrap();
        assert!(eval.all_satisfied());
        // Re-advancing (idempotent no-op since already satisfied) still works.
        eval.advance(&graph).unwrap();
    }

    #[test]
    fn relator_violation_detected_on_mismatched_closure() {
        // `ab` forced to close at vertex 1 but the walk lands elsewhere.
        let mut graph = CoveringSubgraph::new(2, 3);
        let mut eval = RelatorEvalState::new(vec![vec![1, 2]]);
        graph.add_edge(1, 1, 2).unwrap();
        eval.push_vertex(2);
        eval.advance(&graph).unwrap();
        let err = graph.add_edge(2, 2, 3).err();
        assert!(err.is_none());
        eval.push_vertex(3);
        assert_eq!(eval.advance(&graph), Err(SearchSignal::RelatorViolation));
    }
}
