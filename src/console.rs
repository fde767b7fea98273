use std::io::{BufRead, Write};
use std::num::{IntErrorKind, ParseIntError};

use anyhow::{Context, Result};
use rand::Rng;
use thiserror::Error;

use crate::game::{render, Filler, WordPlacer};
use crate::models::Grid;
use crate::utils::letters::{self, ALPHABET, DONE_SENTINEL};

pub const BANNER: &str = "---[Word Search Generator]---";
pub const PLACEMENT_FAILED: &str =
    "This word could not be added! It was either too long or it is impossible to add it.";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GridSizeError {
    #[error("'{0}' is not a number. Please enter a whole number.")]
    NotANumber(String),
    #[error("The grid size must be at least 1.")]
    NotPositive,
    #[error("The grid size {size} is too large (maximum {max}).")]
    TooLarge { size: usize, max: usize },
}

/// Parse the grid size typed at startup
pub fn parse_grid_size(input: &str, max: usize) -> Result<usize, GridSizeError> {
    let trimmed = input.trim();
    let value: i64 = trimmed.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => GridSizeError::TooLarge {
            size: usize::MAX,
            max,
        },
        IntErrorKind::NegOverflow => GridSizeError::NotPositive,
        _ => GridSizeError::NotANumber(trimmed.to_string()),
    })?;

    if value < 1 {
        return Err(GridSizeError::NotPositive);
    }

    let size = usize::try_from(value).map_err(|_| GridSizeError::TooLarge {
        size: usize::MAX,
        max,
    })?;
    if size > max {
        return Err(GridSizeError::TooLarge { size, max });
    }

    Ok(size)
}

/// Interactive prompt loop: read a size, collect words, fill and print the puzzle
pub struct Session<R, W> {
    input: R,
    output: W,
    placer: WordPlacer,
    max_grid_size: usize,
    placed_words: Vec<String>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, placer: WordPlacer, max_grid_size: usize) -> Self {
        Self {
            input,
            output,
            placer,
            max_grid_size,
            placed_words: Vec::new(),
        }
    }

    /// Run the whole session. Returns the finished grid, or `None` when input
    /// ended before a grid size was given.
    pub fn run(&mut self, rng: &mut impl Rng) -> Result<Option<Grid>> {
        writeln!(self.output, "{}", BANNER)?;

        let Some(size) = self.prompt_grid_size()? else {
            tracing::info!("Input closed before a grid size was entered");
            return Ok(None);
        };
        tracing::info!("Creating {}x{} grid", size, size);

        let mut grid = Grid::new(size);
        self.collect_words(&mut grid, rng)?;

        Filler::fill(&mut grid, ALPHABET, rng)?;

        writeln!(self.output, "Your final generated word search:")?;
        writeln!(self.output, "{}", render(&grid))?;
        writeln!(self.output, "Press ENTER to quit.")?;
        self.output.flush()?;
        self.read_line()?;

        tracing::info!(
            "Finished puzzle with {} word(s): {}",
            self.placed_words.len(),
            self.placed_words.join(", ")
        );

        Ok(Some(grid))
    }

    pub fn placed_words(&self) -> &[String] {
        &self.placed_words
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt_grid_size(&mut self) -> Result<Option<usize>> {
        loop {
            writeln!(self.output, "Enter the grid size:")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match parse_grid_size(&line, self.max_grid_size) {
                Ok(size) => return Ok(Some(size)),
                Err(e) => {
                    tracing::warn!("Rejected grid size input: {}", e);
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    fn collect_words(&mut self, grid: &mut Grid, rng: &mut impl Rng) -> Result<()> {
        let size = grid.size();

        loop {
            writeln!(self.output, "{}", render(grid))?;
            writeln!(self.output, "{}", "-".repeat(size))?;
            writeln!(
                self.output,
                "Enter a word to add to the grid or \"{}\" to finish.",
                DONE_SENTINEL
            )?;
            writeln!(self.output, "Your word can be from 1 to {} letters long.", size)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                tracing::info!("Input closed, finishing the puzzle");
                return Ok(());
            };

            let word = letters::sanitize(&line);
            if letters::is_done(&word) {
                return Ok(());
            }

            if let Err(e) = letters::validate_word(&word) {
                tracing::warn!("Rejected word input {:?}: {}", word, e);
                writeln!(self.output, "{}", e)?;
                self.acknowledge()?;
                continue;
            }

            if self.placer.try_place(&word, grid, rng) {
                self.placed_words.push(word);
            } else {
                tracing::debug!("Could not place '{}' in {}x{} grid", word, size, size);
                writeln!(self.output, "{}", PLACEMENT_FAILED)?;
                self.acknowledge()?;
            }
        }
    }

    fn acknowledge(&mut self) -> Result<()> {
        writeln!(self.output, "Press ENTER to continue.")?;
        self.output.flush()?;
        self.read_line()?;
        Ok(())
    }

    /// Next input line without its terminator, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("Failed to read from input")?;

        if read == 0 {
            return Ok(None);
        }

        // Undecodable bytes become U+FFFD and fail word validation
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
