//! Submodule defining errors relative to invalid top-level arguments passed
//! to the public entry points.

/// Error enumeration relative to invalid arguments passed to
/// [`crate::facade::permutation_reps`] or [`crate::sims_tree::SimsTree::new`].
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentError {
    /// The rank of the ambient free group must be at least one.
    #[error("rank must be at least 1, got {0}")]
    RankTooSmall(usize),
    /// The maximum degree must be at least one.
    #[error("max_degree must be at least 1, got {0}")]
    MaxDegreeTooSmall(usize),
}
