//! Words in the free group: signed-integer letter sequences, free and
//! cyclic reduction, ASCII parsing, and relator "spinning".
//!
//! A letter `g` with `1 <= g <= rank` denotes the positive generator `g`;
//! `-g` denotes its inverse. Lowercase ASCII letters `a..z` decode to the
//! positive generators `1..=26`-capped-at-rank; uppercase `A..Z` decode to
//! the corresponding inverse.

use alloc::vec::Vec;

use crate::errors::ParseError;

/// A signed generator letter. Never zero in a valid, reduced word.
pub type Letter = i32;

/// Decodes a single ASCII letter into a signed generator, checking it
/// against `rank`.
fn decode_letter(rank: usize, ch: char) -> Result<Letter, ParseError> {
    if ch.is_ascii_lowercase() {
        let generator = (ch as u8 - b'a' + 1) as usize;
        if generator > rank {
            return Err(ParseError::GeneratorOutOfRange { letter: ch, generator, rank });
        }
        Ok(generator as Letter)
    } else if ch.is_ascii_uppercase() {
        let generator = (ch as u8 - b'A' + 1) as usize;
        if generator > rank {
            return Err(ParseError::GeneratorOutOfRange { letter: ch, generator, rank });
        }
        Ok(-(generator as Letter))
    } else {
        Err(ParseError::InvalidCharacter(ch))
    }
}

/// Parses an ASCII word into a freely reduced signed-integer letter
/// sequence.
///
/// Lowercase letters `a..z` decode to the positive generators `1..=rank`;
/// uppercase letters `A..Z` decode to their inverses. Any other character,
/// or a generator index beyond `rank`, is an error.
///
/// # Examples
///
/// ```
/// use low_index::word::parse_word;
///
/// assert_eq!(parse_word(2, "ab").unwrap(), vec![1, 2]);
/// assert_eq!(parse_word(2, "abB").unwrap(), vec![1]);
/// assert!(parse_word(2, "c").is_err());
/// ```
pub fn parse_word(rank: usize, word: &str) -> Result<Vec<Letter>, ParseError> {
    let letters = word
        .chars()
        .map(|ch| decode_letter(rank, ch))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(free_reduce(&letters))
}

/// Validates a raw signed-integer letter sequence against `rank` and
/// freely reduces it.
pub fn validate_letters(rank: usize, letters: &[Letter]) -> Result<Vec<Letter>, ParseError> {
    for &letter in letters {
        if letter == 0 {
            return Err(ParseError::ZeroLetter);
        }
        let generator = letter.unsigned_abs() as usize;
        if generator > rank {
            return Err(ParseError::LetterOutOfRange { letter, generator, rank });
        }
    }
    Ok(free_reduce(letters))
}

/// Freely reduces a letter sequence: repeatedly cancels adjacent `g, -g`
/// pairs.
///
/// # Examples
///
/// ```
/// use low_index::word::free_reduce;
///
/// assert_eq!(free_reduce(&[1, 2, -2, 3]), vec![1, 3]);
/// assert_eq!(free_reduce(&[1, -1]), Vec::<i32>::new());
/// ```
pub fn free_reduce(letters: &[Letter]) -> Vec<Letter> {
    let mut stack: Vec<Letter> = Vec::with_capacity(letters.len());
    for &letter in letters {
        if stack.last() == Some(&-letter) {
            stack.pop();
        } else {
            stack.push(letter);
        }
    }
    stack
}

/// Cyclically reduces an already freely-reduced letter sequence: strips
/// matching `first == -last` pairs from both ends.
///
/// # Examples
///
/// ```
/// use low_index::word::cyclically_reduce;
///
/// assert_eq!(cyclically_reduce(&[1, 2, -1]), vec![2]);
/// ```
pub fn cyclically_reduce(letters: &[Letter]) -> Vec<Letter> {
    let mut start = 0;
    let mut end = letters.len();
    while end - start >= 2 && letters[start] == -letters[end - 1] {
        start += 1;
        end -= 1;
    }
    letters[start..end].to_vec()
}

/// Parses and fully reduces (freely, then cyclically) an ASCII relator.
/// Returns [`ParseError::EmptyAfterReduction`] if nothing survives.
pub fn parse_relator(rank: usize, word: &str) -> Result<Vec<Letter>, ParseError> {
    let reduced = parse_word(rank, word)?;
    let cyclic = cyclically_reduce(&reduced);
    if cyclic.is_empty() {
        return Err(ParseError::EmptyAfterReduction);
    }
    Ok(cyclic)
}

/// Validates, then fully reduces, a raw signed-integer relator.
pub fn validate_relator(rank: usize, letters: &[Letter]) -> Result<Vec<Letter>, ParseError> {
    let reduced = validate_letters(rank, letters)?;
    let cyclic = cyclically_reduce(&reduced);
    if cyclic.is_empty() {
        return Err(ParseError::EmptyAfterReduction);
    }
    Ok(cyclic)
}

/// A relator the caller may supply either as an ASCII word or as a raw
/// signed-integer letter sequence — both forms accepted by
/// [`crate::sims_tree::SimsTree::new`] and [`crate::facade::permutation_reps`],
/// matching the original project's `isinstance(r, str)` branch in its
/// Python wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelatorInput<'a> {
    /// An ASCII word, e.g. `"aaBcbbcAc"`.
    Text(&'a str),
    /// A raw signed-integer letter sequence.
    Letters(&'a [Letter]),
}

impl<'a> From<&'a str> for RelatorInput<'a> {
    fn from(value: &'a str) -> Self {
        RelatorInput::Text(value)
    }
}

impl<'a> From<&'a [Letter]> for RelatorInput<'a> {
    fn from(value: &'a [Letter]) -> Self {
        RelatorInput::Letters(value)
    }
}

impl<'a> From<&'a Vec<Letter>> for RelatorInput<'a> {
    fn from(value: &'a Vec<Letter>) -> Self {
        RelatorInput::Letters(value.as_slice())
    }
}

impl RelatorInput<'_> {
    /// Parses (if text) or validates (if raw letters), then fully reduces,
    /// this relator against `rank`.
    pub fn into_relator(self, rank: usize) -> Result<Vec<Letter>, ParseError> {
        match self {
            RelatorInput::Text(word) => parse_relator(rank, word),
            RelatorInput::Letters(letters) => validate_relator(rank, letters),
        }
    }
}

/// An absolute sanity cap on the length of a relator [`spin`] will expand.
///
/// A closed walk of length `L` can close up within a graph of far fewer
/// than `L` vertices (it is free to revisit vertices repeatedly — the
/// regression scenario this crate is tested against uses a 277-letter
/// relator against `max_degree = 4`), so there is no principled bound
/// relating relator length to `max_degree`. This cap exists only to keep
/// pathologically large input (megabyte-scale relators, most plausibly
/// from a fuzzer) from spinning into an equally large rotation set; it is
/// far above any relator a real presentation would use.
const SPIN_LENGTH_CAP: usize = 1 << 16;

/// Produces every cyclic rotation of a cyclically-reduced relator: `w`,
/// `rot(w, 1)`, ..., `rot(w, L-1)`.
///
/// Relators longer than [`SPIN_LENGTH_CAP`] are skipped entirely rather
/// than spun — callers should pass such relators as "long" relators
/// instead, which are checked only once the graph is complete.
///
/// `rank` and `max_degree` are accepted for symmetry with the rest of the
/// crate's relator-handling API but do not otherwise affect the output.
///
/// # Examples
///
/// ```
/// use low_index::word::spin;
///
/// let rotations = spin(&[&[1, 2, 3][..]], 2, 10);
/// assert_eq!(rotations, vec![vec![1, 2, 3], vec![2, 3, 1], vec![3, 1, 2]]);
/// ```
pub fn spin(words: &[&[Letter]], rank: usize, max_degree: usize) -> Vec<Vec<Letter>> {
    let _ = (rank, max_degree);
    let mut spun = Vec::new();
    for word in words {
        if word.is_empty() || word.len() > SPIN_LENGTH_CAP {
            continue;
        }
        for start in 0..word.len() {
            let mut rotated = Vec::with_capacity(word.len());
            rotated.extend_from_slice(&word[start..]);
            rotated.extend_from_slice(&word[..start]);
            spun.push(rotated);
        }
    }
    spun
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_reduce_cancels_adjacent_inverses() {
        assert_eq!(free_reduce(&[1, 2, -2, -1]), Vec::<Letter>::new());
        assert_eq!(free_reduce(&[1, 1, -1, 2]), vec![1, 2]);
    }

    #[test]
    fn cyclic_reduce_strips_matching_ends() {
        assert_eq!(cyclically_reduce(&[1, 2, 3, -1]), vec![2, 3]);
        assert_eq!(cyclically_reduce(&[1, 2, -1]), vec![2]);
        assert_eq!(cyclically_reduce(&[1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn parse_word_rejects_out_of_rank_letters() {
        assert_eq!(
            parse_word(2, "c"),
            Err(ParseError::GeneratorOutOfRange { letter: 'c', generator: 3, rank: 2 })
        );
    }

    #[test]
    fn parse_relator_rejects_trivial_word() {
        assert_eq!(parse_relator(2, "aA"), Err(ParseError::EmptyAfterReduction));
    }

    #[test]
    fn spin_produces_all_rotations_in_order() {
        let rotations = spin(&[&[1, 2, 3][..]], 2, 10);
        assert_eq!(rotations, vec![vec![1, 2, 3], vec![2, 3, 1], vec![3, 1, 2]]);
    }

    #[test]
    fn spin_skips_relators_beyond_the_safety_cap() {
        let long_word: Vec<Letter> =
            (0..(SPIN_LENGTH_CAP + 1)).map(|i| if i % 2 == 0 { 1 } else { 2 }).collect();
        let rotations = spin(&[long_word.as_slice()], 1, 2);
        assert!(rotations.is_empty());
    }

    #[test]
    fn spin_accepts_relators_far_longer_than_max_degree() {
        // Mirrors the o9_03127 regression scenario: a relator much longer
        // than max_degree must still be spun, not skipped.
        let word: Vec<Letter> = (0..277).map(|i| if i % 2 == 0 { 1 } else { 2 }).collect();
        let rotations = spin(&[word.as_slice()], 2, 4);
        assert_eq!(rotations.len(), 277);
    }

    #[test]
    fn relator_input_accepts_both_forms() {
        let from_text: RelatorInput = "ab".into();
        assert_eq!(from_text.into_relator(2).unwrap(), vec![1, 2]);
        let letters = vec![1, 2];
        let from_letters: RelatorInput = (&letters).into();
        assert_eq!(from_letters.into_relator(2).unwrap(), vec![1, 2]);
    }
}
