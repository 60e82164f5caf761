//! The depth-first search driver over partial Schreier coset graphs, and
//! its breadth-first "bloom" mode used to materialize a work frontier
//! for the [`crate::scheduler`].

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::errors::ArgumentError;
use crate::sims_node::{Relators, SimsNode};
use crate::word::{spin, Letter, RelatorInput};

/// A fully-built search problem: rank, maximum degree, and the already
/// spun/validated relator sets — cheap to share (read-only) across
/// worker threads.
#[derive(Debug, Clone)]
pub struct SimsTree {
    rank: usize,
    max_degree: usize,
    relators: Relators,
}

impl SimsTree {
    /// Builds a search problem from relators in either ASCII or raw
    /// letter form. Short relators are spun (every cyclic rotation);
    /// long relators are kept as-is.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError`] if `rank` or `max_degree` is zero, or a
    /// parse error (wrapped the same way) if a relator is malformed.
    pub fn new<'a>(
        rank: usize,
        max_degree: usize,
        short_relators: impl IntoIterator<Item = RelatorInput<'a>>,
        long_relators: impl IntoIterator<Item = RelatorInput<'a>>,
    ) -> Result<Self, SimsTreeError> {
        if rank == 0 {
            return Err(ArgumentError::RankTooSmall(rank).into());
        }
        if max_degree == 0 {
            return Err(ArgumentError::MaxDegreeTooSmall(max_degree).into());
        }
        let short: Vec<Vec<Letter>> = short_relators
            .into_iter()
            .map(|w| w.into_relator(rank))
            .collect::<Result<_, _>>()?;
        let long: Vec<Vec<Letter>> = long_relators
            .into_iter()
            .map(|w| w.into_relator(rank))
            .collect::<Result<_, _>>()?;
        let short_refs: Vec<&[Letter]> = short.iter().map(Vec::as_slice).collect();
        let spun = spin(&short_refs, rank, max_degree);
        Ok(Self { rank, max_degree, relators: Relators { short: spun, long } })
    }

    /// The rank of the ambient free group.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// The maximum degree covers are searched up to.
    #[must_use]
    pub fn max_degree(&self) -> usize {
        self.max_degree
    }

    pub(crate) fn relators(&self) -> &Relators {
        &self.relators
    }

    fn root(&self) -> SimsNode {
        SimsNode::root(self.rank, self.max_degree, &self.relators)
    }

    /// Runs a full single-threaded depth-first search from `start`,
    /// appending every emitted (complete, relator-satisfying, canonical)
    /// node to `sink`, in DFS-emission order.
    pub fn dfs(&self, start: SimsNode, sink: &mut Vec<SimsNode>) {
        let mut stack = alloc::vec![start];
        while let Some(node) = stack.pop() {
            if node.is_complete() {
                if node.verify_complete(&self.relators).is_ok() {
                    sink.push(node);
                }
                continue;
            }
            push_children(&node, &mut stack);
        }
    }

    /// Runs a full single-threaded depth-first search over the entire
    /// tree and returns every emitted node.
    #[must_use]
    pub fn search(&self) -> Vec<SimsNode> {
        let mut sink = Vec::new();
        self.dfs(self.root(), &mut sink);
        sink
    }

    /// Breadth-first expansion from the root until the frontier queue
    /// has at least `target` non-complete nodes, or the tree is
    /// exhausted. Complete nodes encountered along the way are emitted
    /// directly into `emitted`.
    ///
    /// Frontier order is the BFS-generation order (ascending target,
    /// then "new vertex" last per node), which is also the frontier
    /// index order the [`crate::scheduler`] uses for deterministic
    /// result concatenation.
    #[must_use]
    pub fn bloom(&self, target: usize, emitted: &mut Vec<SimsNode>) -> Vec<SimsNode> {
        let mut queue: VecDeque<SimsNode> = VecDeque::new();
        queue.push_back(self.root());
        while queue.len() < target {
            let Some(node) = queue.pop_front() else { break };
            if node.is_complete() {
                if node.verify_complete(&self.relators).is_ok() {
                    emitted.push(node);
                }
                continue;
            }
            let mut children = Vec::new();
            push_children(&node, &mut children);
            // `push_children` orders for a LIFO stack (new-vertex first,
            // existing targets descending); reverse to recover ascending
            // order for the BFS queue.
            children.reverse();
            queue.extend(children);
        }
        queue.into_iter().collect()
    }
}

/// Pushes every valid child of `node` onto `stack`/`children` in the
/// order required for a LIFO stack to pop them ascending-existing-first,
/// new-vertex-last: push the new-vertex candidate first, then existing
/// targets in descending order.
fn push_children(node: &SimsNode, stack: &mut Vec<SimsNode>) {
    let (from, letter, targets) = node.candidate_targets();
    for &target in targets.iter().rev() {
        if let Some(child) = node.try_extend(letter, from, target) {
            stack.push(child);
        }
    }
}

/// Errors constructing a [`SimsTree`].
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum SimsTreeError {
    /// An argument (rank or max_degree) was invalid.
    #[error(transparent)]
    Argument(#[from] ArgumentError),
    /// A relator failed to parse.
    #[error(transparent)]
    Parse(#[from] crate::errors::ParseError),
}
