//! Submodule defining errors relative to parsing words and relators.

/// Error enumeration relative to parsing a word from its ASCII letter
/// encoding, or validating a raw signed-integer letter sequence.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The letter's generator index exceeds the declared rank.
    #[error("letter '{letter}' refers to generator {generator}, which exceeds rank {rank}")]
    GeneratorOutOfRange {
        /// The offending ASCII letter.
        letter: char,
        /// The generator index the letter decodes to.
        generator: usize,
        /// The declared rank of the ambient free group.
        rank: usize,
    },
    /// A character outside `a..z`/`A..Z` appeared in a word.
    #[error("character '{0}' is not a valid generator letter")]
    InvalidCharacter(char),
    /// A raw signed-integer letter was zero, which is not a valid generator.
    #[error("letter 0 is not a valid signed generator")]
    ZeroLetter,
    /// A raw signed-integer letter's generator index exceeded the rank.
    #[error("letter {letter} refers to generator {generator}, which exceeds rank {rank}")]
    LetterOutOfRange {
        /// The offending signed letter.
        letter: i32,
        /// The generator index `|letter|`.
        generator: usize,
        /// The declared rank of the ambient free group.
        rank: usize,
    },
    /// The word reduced to the empty word, which cannot be used as a
    /// relator.
    #[error("word reduces to the empty word and cannot be used as a relator")]
    EmptyAfterReduction,
}
