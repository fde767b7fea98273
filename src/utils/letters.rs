use thiserror::Error;

/// Letters a word may contain and the filler draws from
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Input that ends word entry
pub const DONE_SENTINEL: &str = "$DONE";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WordError {
    #[error("Please enter at least one letter.")]
    Empty,
    #[error("'{0}' is not a letter from A to Z.")]
    InvalidCharacter(char),
}

/// Trim, uppercase and drop every whitespace character
pub fn sanitize(input: &str) -> String {
    input
        .trim()
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

pub fn is_done(sanitized: &str) -> bool {
    sanitized == DONE_SENTINEL
}

/// Check that a sanitized word only uses [`ALPHABET`] letters
pub fn validate_word(word: &str) -> Result<(), WordError> {
    if word.is_empty() {
        return Err(WordError::Empty);
    }

    match word.chars().find(|c| !ALPHABET.contains(*c)) {
        Some(invalid) => Err(WordError::InvalidCharacter(invalid)),
        None => Ok(()),
    }
}
