//! Scenario 4: the fundamental group of the knot complement K11n34, through
//! degree 7, run single-threaded, multi-threaded, and with a fixed thread
//! count larger than the hardware concurrency.

use low_index::prelude::*;

fn expected_degree_counts(reps: &[Vec<Vec<usize>>]) -> [usize; 8] {
    let mut counts = [0usize; 8];
    for rep in reps {
        counts[rep[0].len()] += 1;
    }
    counts
}

fn check(num_threads: usize) {
    let reps = permutation_reps(
        3,
        ["aaBcbbcAc"].map(RelatorInput::Text),
        ["aacAbCBBaCAAbbcBc"].map(RelatorInput::Text),
        7,
        num_threads,
    )
    .unwrap();

    let counts = expected_degree_counts(&reps);
    assert_eq!(counts[1], 1);
    assert_eq!(counts[2], 1);
    assert_eq!(counts[3], 1);
    assert_eq!(counts[4], 1);
    assert_eq!(counts[5], 2);
    assert_eq!(counts[6], 16);
    assert_eq!(counts[7], 30);

    assert!(reps.contains(&vec![vec![0], vec![0], vec![0]]));
    assert!(reps.contains(&vec![
        vec![0, 3, 5, 4, 1, 2],
        vec![1, 0, 5, 2, 4, 3],
        vec![1, 4, 0, 3, 5, 2],
    ]));
}

#[test]
fn k11n34_single_threaded() {
    check(1);
}

#[test]
fn k11n34_multi_threaded_auto() {
    check(0);
}

#[test]
fn k11n34_fixed_oversubscribed_threads() {
    check(48);
}
