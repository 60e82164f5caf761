//! Scenario 7: the fundamental group of the figure-eight knot complement
//! (m004), presented as one cyclically-reduced 9-letter relator and all 10
//! of its cyclic rotations as short relators (so that spinning degenerates
//! to the identity — this is the same representation regardless).

use low_index::prelude::*;

const ROTATIONS: [[i32; 9]; 10] = [
    [1, 1, 1, 2, -1, -2, -2, -1, 2],
    [2, 1, 1, 1, 2, -1, -2, -2, -1],
    [-1, 2, 1, 1, 1, 2, -1, -2, -2],
    [-2, -1, 2, 1, 1, 1, 2, -1, -2],
    [-2, -2, -1, 2, 1, 1, 1, 2, -1],
    [-1, -2, -2, -1, 2, 1, 1, 1, 2],
    [2, -1, -2, -2, -1, 2, 1, 1, 1],
    [1, 2, -1, -2, -2, -1, 2, 1, 1],
    [1, 1, 2, -1, -2, -2, -1, 2, 1],
    [1, 1, 1, 2, -1, -2, -2, -1, 2],
];

#[test]
fn figure_eight_through_degree_six() {
    let tree = SimsTree::new(
        2,
        6,
        ROTATIONS.iter().map(|r| RelatorInput::Letters(r.as_slice())),
        core::iter::empty(),
    )
    .unwrap();
    let results = tree.search();

    let mut counts = [0usize; 7];
    for node in &results {
        counts[node.degree()] += 1;
    }
    assert_eq!(counts[1], 1);
    assert_eq!(counts[2], 1);
    assert_eq!(counts[3], 1);
    assert_eq!(counts[4], 2);
    assert_eq!(counts[5], 4);
    assert_eq!(counts[6], 11);
}
