#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(missing_docs)]
#![doc = include_str!("../README.md")]

extern crate alloc;

pub mod canonicity;
pub mod covering_subgraph;
pub mod errors;
pub mod relator_eval;
pub mod sims_node;
pub mod sims_tree;
pub mod word;

#[cfg(feature = "std")]
pub mod facade;
#[cfg(feature = "std")]
pub mod hardware;
#[cfg(feature = "std")]
pub mod scheduler;

#[cfg(any(test, feature = "arbitrary"))]
pub mod test_utils;

/// Re-exports of the types most callers need, mirroring the layout of the
/// crate's top-level modules.
pub mod prelude {
    pub use crate::errors::{ArgumentError, ParseError, SearchSignal};
    pub use crate::sims_node::SimsNode;
    pub use crate::sims_tree::{SimsTree, SimsTreeError};
    pub use crate::word::{Letter, RelatorInput};

    #[cfg(feature = "std")]
    pub use crate::facade::{covers, covers_by_degree, permutation_reps};
}
