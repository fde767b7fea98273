use rand::{seq::IndexedRandom, Rng};
use thiserror::Error;

use crate::models::{Grid, EMPTY};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FillError {
    #[error("Cannot fill the grid from an empty alphabet.")]
    EmptyAlphabet,
}

pub struct Filler;

impl Filler {
    /// Replace every empty cell with a uniformly random letter from `alphabet`.
    /// Letters already on the grid are kept.
    pub fn fill(grid: &mut Grid, alphabet: &str, rng: &mut impl Rng) -> Result<(), FillError> {
        let letters: Vec<char> = alphabet.chars().collect();
        if letters.is_empty() {
            return Err(FillError::EmptyAlphabet);
        }

        let mut filled = 0;
        for cell in grid.cells_mut().filter(|cell| **cell == EMPTY) {
            *cell = Self::random_letter(&letters, rng);
            filled += 1;
        }

        tracing::debug!("Filled {} empty cells", filled);
        Ok(())
    }

    fn random_letter(letters: &[char], rng: &mut impl Rng) -> char {
        // Caller guarantees a non-empty slice
        *letters.choose(rng).unwrap_or(&letters[0])
    }
}
