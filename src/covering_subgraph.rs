//! The partial labeled covering graph of the rank-`r` bouquet of circles:
//! the core data structure the search tree clones, extends by one edge,
//! and backtracks millions of times.

use alloc::vec;
use alloc::vec::Vec;

use crate::errors::SearchSignal;
use crate::word::Letter;

/// Converts a signed generator letter into its slot index in `0..2*rank`,
/// under the fixed enumeration order `(+1, -1, +2, -2, ..., +r, -r)`.
#[inline]
pub fn slot_of(letter: Letter) -> usize {
    debug_assert!(letter != 0);
    let generator = letter.unsigned_abs() as usize - 1;
    if letter > 0 { generator * 2 } else { generator * 2 + 1 }
}

/// Converts a slot index back into its signed generator letter.
#[inline]
pub fn letter_of(slot: usize) -> Letter {
    let generator = (slot / 2 + 1) as Letter;
    if slot % 2 == 0 { generator } else { -generator }
}

/// The slot index of the inverse generator of `slot`: `(+g) <-> (-g)`
/// always sit at adjacent indices, so this is just a bit flip.
#[inline]
pub fn inverse_slot(slot: usize) -> usize {
    slot ^ 1
}

/// A partial covering graph of the rank-`r` bouquet, on at most
/// `max_degree` vertices (numbered `1..=degree`, vertex `0` is never
/// used).
///
/// The conceptual outgoing-edge table `out[v][s]` and incoming-edge table
/// `in[v][s]` are maintained as a single physically-paired
/// array: `add_edge(s, u, v)` writes both `table[u][s] = v` and
/// `table[v][-s] = u` atomically, so the dual-table consistency
/// invariant holds by construction rather than by separate bookkeeping
/// (see DESIGN.md).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoveringSubgraph {
    rank: usize,
    max_degree: usize,
    degree: usize,
    /// Flattened `(vertex - 1) * 2 * rank + slot -> target vertex`, `0`
    /// meaning undefined. Pre-sized to `max_degree * 2 * rank` so degree
    /// growth never reallocates.
    table: Vec<u32>,
    /// Running lower bound on the lexicographically least undefined
    /// `(vertex, slot)` pair, advanced incrementally by `add_edge`.
    cursor_vertex: usize,
    cursor_slot: usize,
}

impl CoveringSubgraph {
    /// Creates a new covering subgraph of the given `rank` and
    /// `max_degree`, with a single vertex (the basepoint) and no edges.
    ///
    /// # Panics
    ///
    /// Panics if `rank` or `max_degree` is zero; callers are expected to
    /// validate these through [`crate::errors::ArgumentError`] first.
    pub fn new(rank: usize, max_degree: usize) -> Self {
        assert!(rank > 0, "rank must be at least 1");
        assert!(max_degree > 0, "max_degree must be at least 1");
        Self {
            rank,
            max_degree,
            degree: 1,
            table: vec![0u32; max_degree * 2 * rank],
            cursor_vertex: 1,
            cursor_slot: 0,
        }
    }

    /// The rank of the ambient free group.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// The maximum degree this graph may grow to.
    #[must_use]
    pub fn max_degree(&self) -> usize {
        self.max_degree
    }

    /// The current number of vertices.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    #[inline]
    fn index(&self, vertex: usize, slot: usize) -> usize {
        (vertex - 1) * 2 * self.rank + slot
    }

    /// The target of vertex `vertex`'s outgoing edge labeled `letter`, if
    /// assigned. `vertex` must be in `1..=degree`.
    #[must_use]
    pub fn out_edge(&self, vertex: usize, letter: Letter) -> Option<u32> {
        let value = self.table[self.index(vertex, slot_of(letter))];
        (value != 0).then_some(value)
    }

    /// The source of the edge labeled `letter` entering vertex `vertex`,
    /// i.e. the `u` with `out_edge(u, letter) == Some(vertex)`. Exposed
    /// for the dual-table consistency property test; by construction
    /// this is always `out_edge(vertex, -letter)`.
    #[must_use]
    pub fn in_edge(&self, vertex: usize, letter: Letter) -> Option<u32> {
        self.out_edge(vertex, -letter)
    }

    fn advance_cursor(&mut self) {
        let slots = 2 * self.rank;
        while self.cursor_vertex <= self.degree {
            while self.cursor_slot < slots {
                if self.table[self.index(self.cursor_vertex, self.cursor_slot)] == 0 {
                    return;
                }
                self.cursor_slot += 1;
            }
            self.cursor_slot = 0;
            self.cursor_vertex += 1;
        }
    }

    /// Returns the lexicographically least undefined `(vertex, letter)`
    /// slot, or `None` if the graph is complete.
    #[must_use]
    pub fn first_empty_slot(&self) -> Option<(u32, Letter)> {
        if self.cursor_vertex > self.degree {
            None
        } else {
            Some((self.cursor_vertex as u32, letter_of(self.cursor_slot)))
        }
    }

    /// Whether every vertex has a defined outgoing edge for every signed
    /// generator.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cursor_vertex > self.degree
    }

    /// Adds the edge labeled `letter` from `from` to `to`. `to ==
    /// degree + 1` creates a new vertex.
    ///
    /// # Errors
    ///
    /// Returns [`SearchSignal::EdgeConflict`] if the slot (in either
    /// direction) is already assigned, or [`SearchSignal::DegreeExceeded`]
    /// if `to` would create a vertex beyond `max_degree`.
    pub fn add_edge(&mut self, letter: Letter, from: u32, to: u32) -> Result<(), SearchSignal> {
        let from = from as usize;
        let to_vertex = to as usize;
        debug_assert!((1..=self.degree).contains(&from));

        if to_vertex == self.degree + 1 {
            if self.degree >= self.max_degree {
                return Err(SearchSignal::DegreeExceeded);
            }
        } else {
            debug_assert!((1..=self.degree).contains(&to_vertex));
        }

        let forward = self.index(from, slot_of(letter));
        if self.table[forward] != 0 {
            return Err(SearchSignal::EdgeConflict);
        }

        if to_vertex == self.degree + 1 {
            self.degree += 1;
        }

        let backward = self.index(to_vertex, slot_of(-letter));
        if self.table[backward] != 0 {
            return Err(SearchSignal::EdgeConflict);
        }

        self.table[forward] = to;
        self.table[backward] = from as u32;
        self.advance_cursor();
        Ok(())
    }

    /// Same as [`Self::add_edge`], but reports success as a `bool` instead
    /// of a `Result`, for terse test call sites.
    pub fn verified_add_edge(&mut self, letter: Letter, from: u32, to: u32) -> bool {
        self.add_edge(letter, from, to).is_ok()
    }

    /// Computes the `rank`-tuple of permutations this (complete) graph
    /// represents: `perm_g[v] = out_edge(v + 1, g) - 1`.
    ///
    /// # Errors
    ///
    /// Returns `None` if the graph is not complete.
    #[must_use]
    pub fn permutation_rep(&self) -> Option<Vec<Vec<usize>>> {
        if !self.is_complete() {
            return None;
        }
        let mut reps = Vec::with_capacity(self.rank);
        for generator in 1..=self.rank as Letter {
            let mut perm = Vec::with_capacity(self.degree);
            for vertex in 1..=self.degree as u32 {
                let target = self.out_edge(vertex, generator).expect("complete graph");
                perm.push(target as usize - 1);
            }
            reps.push(perm);
        }
        Some(reps)
    }

    /// Returns, for every vertex and signed generator slot (in slot
    /// order), the target vertex if the edge is already assigned — the
    /// raw material for canonical-form comparisons.
    pub(crate) fn raw_row(&self, vertex: usize) -> &[u32] {
        let slots = 2 * self.rank;
        let start = (vertex - 1) * slots;
        &self.table[start..start + slots]
    }
}
