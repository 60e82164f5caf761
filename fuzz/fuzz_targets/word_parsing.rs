//! Fuzzing submodule on raw signed-letter relator validation: must never
//! panic, and whatever it returns must already be freely and cyclically
//! reduced.

use honggfuzz::fuzz;
use low_index::word::{cyclically_reduce, free_reduce, validate_relator};

fn main() {
    loop {
        fuzz!(|input: (u8, Vec<i32>)| {
            let (rank, letters) = input;
            let rank = 1 + (rank as usize % 8);
            if let Ok(relator) = validate_relator(rank, &letters) {
                assert_eq!(free_reduce(&relator), relator, "not freely reduced");
                assert_eq!(cyclically_reduce(&relator), relator, "not cyclically reduced");
                assert!(!relator.is_empty());
            }
        });
    }
}
