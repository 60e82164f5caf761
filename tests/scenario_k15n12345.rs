//! Scenario 5: the fundamental group of the knot complement K15n12345,
//! through degree 7.

use low_index::prelude::*;

#[test]
fn k15n12345_through_degree_seven() {
    let reps = permutation_reps(
        3,
        ["aBcACAcb"].map(RelatorInput::Text),
        ["aBaCacBAcAbaBabaCAcAbaBaCacBAcAbaBabCAcAbABaCabABAbABaCabCAcAb"]
            .map(RelatorInput::Text),
        7,
        1,
    )
    .unwrap();

    let mut counts = [0usize; 8];
    for rep in &reps {
        counts[rep[0].len()] += 1;
    }
    assert_eq!(counts[1], 1);
    assert_eq!(counts[2], 1);
    assert_eq!(counts[3], 1);
    assert_eq!(counts[4], 1);
    assert_eq!(counts[5], 3);
    assert_eq!(counts[6], 11);
    assert_eq!(counts[7], 22);

    assert!(reps.contains(&vec![vec![0], vec![0], vec![0]]));
    assert!(reps.contains(&vec![
        vec![0, 2, 1, 3, 4, 6, 5],
        vec![0, 3, 4, 5, 1, 2, 6],
        vec![1, 2, 0, 5, 6, 3, 4],
    ]));
}
