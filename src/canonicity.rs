//! Anti-symmetry pruning: deciding whether the current partial graph is
//! in canonical form, i.e. lex-minimal among all relabelings of its
//! vertices that keep the basepoint fixed at vertex 1.

use alloc::vec;
use alloc::vec::Vec;

use crate::covering_subgraph::CoveringSubgraph;

/// The verdict of comparing the reference traversal (basepoint 1)
/// against an alternate basepoint's traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The alternate basepoint does not beat the reference; it rules
    /// nothing out.
    Worse,
    /// Not enough of the graph is filled in yet to decide either way.
    Undecided,
    /// The alternate basepoint's relabeling is lexicographically
    /// smaller: the graph is not canonical, prune the whole subtree.
    Better,
}

/// Performs a BFS from `start`, renumbering vertices in first-discovery
/// order (BFS queue order, following the fixed slot order at each
/// vertex), and returns the resulting edge sequence: for every visited
/// vertex's row, the relabeled target of each slot (or `None` if that
/// slot is still undefined in the underlying graph).
///
/// Any vertex not reached from `start` (possible only in a partial,
/// temporarily-disconnected graph) is appended afterward in ascending
/// original-vertex order and its own row visited in turn, so the
/// returned sequence always has exactly `degree * 2 * rank` entries
/// regardless of `start` — which keeps comparisons between different
/// basepoints well-defined (see DESIGN.md).
fn bfs_sequence(graph: &CoveringSubgraph, start: u32) -> Vec<Option<u32>> {
    let degree = graph.degree();
    let slots = 2 * graph.rank();
    let mut new_label = vec![0u32; degree + 1];
    let mut queue: Vec<u32> = Vec::with_capacity(degree);
    let mut next_label = 1u32;

    new_label[start as usize] = next_label;
    next_label += 1;
    queue.push(start);

    let mut next_unvisited_original = 1u32;
    let mut head = 0usize;
    let mut sequence = Vec::with_capacity(degree * slots);

    loop {
        while head < queue.len() {
            let vertex = queue[head];
            head += 1;
            for &target in graph.raw_row(vertex as usize) {
                if target == 0 {
                    sequence.push(None);
                    continue;
                }
                if new_label[target as usize] == 0 {
                    new_label[target as usize] = next_label;
                    next_label += 1;
                    queue.push(target);
                }
                sequence.push(Some(new_label[target as usize]));
            }
        }
        // Continue into any not-yet-reached vertices, in ascending
        // original numbering, so the sequence always spans every vertex.
        while (next_unvisited_original as usize) <= degree
            && new_label[next_unvisited_original as usize] != 0
        {
            next_unvisited_original += 1;
        }
        if (next_unvisited_original as usize) > degree {
            break;
        }
        let vertex = next_unvisited_original;
        new_label[vertex as usize] = next_label;
        next_label += 1;
        queue.push(vertex);
    }

    sequence
}

/// Compares the reference traversal (from vertex 1) against the
/// traversal from `alternate_basepoint`.
fn compare(graph: &CoveringSubgraph, alternate_basepoint: u32) -> Verdict {
    let reference = bfs_sequence(graph, 1);
    let candidate = bfs_sequence(graph, alternate_basepoint);
    debug_assert_eq!(reference.len(), candidate.len());

    for (r, c) in reference.iter().zip(candidate.iter()) {
        let Some(r) = r else {
            // The reference traversal ran out of defined data: not
            // enough information to decide either way.
            return Verdict::Undecided;
        };
        match c {
            None => return Verdict::Undecided,
            Some(c) => {
                if c < r {
                    return Verdict::Better;
                }
                if c > r {
                    return Verdict::Worse;
                }
            }
        }
    }
    Verdict::Worse
}

/// Returns `true` if the partial graph `graph` is (still possibly)
/// canonical: no alternate basepoint `2..=degree` has a strictly smaller
/// BFS traversal than the basepoint-1 traversal.
#[must_use]
pub fn is_canonical(graph: &CoveringSubgraph) -> bool {
    for basepoint in 2..=graph.degree() as u32 {
        if compare(graph, basepoint) == Verdict::Better {
            return false;
        }
    }
    true
}
