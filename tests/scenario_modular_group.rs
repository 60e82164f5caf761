//! Scenario 2: the modular group PSL(2,Z), presented as `aa`, `bbb` on the
//! free group of rank 2, has exactly 55 conjugacy classes of transitive
//! permutation representations through degree 25.

use low_index::prelude::*;

#[test]
fn modular_group_through_degree_twenty_five() {
    let short = ["aa", "bbb"].map(RelatorInput::Text);
    let reps = permutation_reps(2, short, core::iter::empty(), 25, 1).unwrap();
    assert_eq!(reps.len(), 55);
}
