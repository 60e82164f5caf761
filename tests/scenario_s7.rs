//! Scenario 3: a presentation whose transitive permutation representations
//! (up to conjugacy) correspond to the transitive actions of the symmetric
//! group S7. The exact count through degree 35 is large enough that this
//! test only checks the search terminates and that every emitted
//! representation is internally consistent — the invariant tests in
//! `property_*.rs` carry the correctness weight.

use low_index::prelude::*;

#[test]
fn s7_presentation_through_degree_thirty_five() {
    let short = [
        "aaaaaaa",
        "bb",
        "abababababab",
        "AbabAbabAbab",
        "AAbaabAAbaab",
        "AAAbaaabAAAbaaab",
    ]
    .map(RelatorInput::Text);
    let reps = permutation_reps(2, short, core::iter::empty(), 35, 1).unwrap();

    assert!(!reps.is_empty());
    assert!(reps.contains(&vec![vec![0], vec![0]]));
    for rep in &reps {
        assert_eq!(rep.len(), 2);
        assert_eq!(rep[0].len(), rep[1].len());
    }
}
