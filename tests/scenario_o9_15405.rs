//! Scenario 6: the fundamental group of the 3-manifold o9_15405, presented
//! with a single long relator and no short relators, through degree 9.

use low_index::prelude::*;

#[test]
fn o9_15405_through_degree_nine() {
    let long = ["aaaaabbbaabbbaaaaabbbaabbbaaaaaBBBBBBBB"].map(RelatorInput::Text);
    let reps = permutation_reps(2, core::iter::empty(), long, 9, 1).unwrap();

    let mut counts = [0usize; 10];
    for rep in &reps {
        counts[rep[0].len()] += 1;
    }
    assert_eq!(counts[1], 1);
    assert_eq!(counts[2], 1);
    assert_eq!(counts[3], 1);
    assert_eq!(counts[4], 1);
    assert_eq!(counts[5], 3);
    assert_eq!(counts[6], 3);
    assert_eq!(counts[7], 9);
    assert_eq!(counts[8], 5);
    assert_eq!(counts[9], 14);

    assert!(reps.contains(&vec![vec![0], vec![0]]));
    assert!(reps.contains(&vec![vec![0, 2, 4, 1, 5, 3], vec![1, 0, 5, 4, 2, 3]]));
}
