//! Static partitioning of a bloomed frontier across a fixed number of
//! worker threads.
//!
//! Unlike a work-stealing pool, every thread is handed one fixed,
//! contiguous slice of the frontier up front and runs it to completion
//! with no further coordination, which keeps the output order a pure
//! function of the frontier (no two runs with the same thread count can
//! interleave their results differently).

use std::ops::Range;

use crate::sims_node::SimsNode;
use crate::sims_tree::SimsTree;

/// Splits `len` items into `threads` contiguous, near-equal ranges, in
/// ascending order. Earlier ranges absorb the remainder so ranges differ
/// in length by at most one.
fn partition_static(len: usize, threads: usize) -> Vec<Range<usize>> {
    let threads = threads.max(1);
    let base = len / threads;
    let remainder = len % threads;
    let mut ranges = Vec::with_capacity(threads);
    let mut start = 0;
    for i in 0..threads {
        let size = base + usize::from(i < remainder);
        let end = start + size;
        ranges.push(start..end);
        start = end;
    }
    ranges
}

/// Searches every node of `frontier` to completion, splitting the work
/// statically across `num_threads` (clamped to at least 1 and at most
/// `frontier.len()`). Results are concatenated in frontier order, each
/// frontier node's own results in DFS-emission order — identical to what
/// a single-threaded traversal of the same frontier, in the same order,
/// would produce.
#[must_use]
pub fn search_frontier(
    tree: &SimsTree,
    frontier: Vec<SimsNode>,
    num_threads: usize,
) -> Vec<SimsNode> {
    if frontier.is_empty() {
        return Vec::new();
    }
    let num_threads = num_threads.clamp(1, frontier.len());
    if num_threads == 1 {
        let mut sink = Vec::new();
        for node in frontier {
            tree.dfs(node, &mut sink);
        }
        return sink;
    }

    let ranges = partition_static(frontier.len(), num_threads);
    let mut chunks: Vec<&[SimsNode]> = Vec::with_capacity(ranges.len());
    for range in &ranges {
        chunks.push(&frontier[range.clone()]);
    }

    let partial_results: Vec<Vec<SimsNode>> = std::thread::scope(|scope| {
        let handles: Vec<_> = chunks
            .into_iter()
            .map(|chunk| {
                scope.spawn(move || {
                    let mut sink = Vec::new();
                    for node in chunk {
                        tree.dfs(node.clone(), &mut sink);
                    }
                    sink
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().expect("search thread panicked")).collect()
    });

    partial_results.into_iter().flatten().collect()
}
