//! Submodule defining the internal pruning signals used by the search tree.
//!
//! These are never surfaced to callers: each one marks a branch of the
//! search tree as dead, and the search simply continues with the next
//! candidate. They deliberately do not implement `core::error::Error` —
//! they are control flow internal to [`crate::sims_node`] and
//! [`crate::sims_tree`], not failures a caller can inspect.

/// A reason a candidate edge, or a completed candidate node, was rejected
/// during the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSignal {
    /// The candidate edge would overwrite an already-assigned slot.
    EdgeConflict,
    /// The candidate edge would create a vertex beyond `max_degree`.
    DegreeExceeded,
    /// A relator failed to close back up to its basepoint.
    RelatorViolation,
    /// The partial graph is a relabeling of a lexicographically smaller one.
    NotCanonical,
}
