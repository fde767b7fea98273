use rand::{seq::SliceRandom, Rng};
use serde::Deserialize;

use crate::models::{Direction, Grid, Placement, Position};

/// Which cells may hold the first letter of a word
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchPolicy {
    /// Only cells within `size - len + 1` of an edge. The cells left out are
    /// those more than `size - len` away from every edge, where a word of
    /// that length cannot start in any direction. Short words get the whole grid.
    #[default]
    Border,
    /// Every cell of the grid
    Full,
}

pub struct WordPlacer {
    policy: SearchPolicy,
}

impl WordPlacer {
    pub fn new(policy: SearchPolicy) -> Self {
        Self { policy }
    }

    /// Try to write `word` into `grid`; see [`WordPlacer::place`].
    pub fn try_place(&self, word: &str, grid: &mut Grid, rng: &mut impl Rng) -> bool {
        self.place(word, grid, rng).is_some()
    }

    /// Write `word` along the first random (start, direction) whose cells are
    /// all empty or already hold the matching letter.
    ///
    /// Start cells are visited once each in a uniformly shuffled order, and the
    /// eight directions are reshuffled for every start. On `None` the grid is
    /// left untouched.
    pub fn place(&self, word: &str, grid: &mut Grid, rng: &mut impl Rng) -> Option<Placement> {
        let letters: Vec<char> = word.chars().collect();
        let size = grid.size();

        if letters.is_empty() || letters.len() > size {
            tracing::debug!("Rejected '{}': length {} outside 1..={}", word, letters.len(), size);
            return None;
        }

        let mut starts = self.candidate_starts(size, letters.len());
        starts.shuffle(rng);

        for start in starts {
            let mut directions = Direction::ALL;
            directions.shuffle(rng);

            for direction in directions {
                let placement = Placement { start, direction };
                if let Some(cells) = Self::fit(grid, &letters, &placement) {
                    for (pos, letter) in cells.into_iter().zip(letters.iter().copied()) {
                        grid.set(pos, letter);
                    }
                    debug_assert_eq!(grid.read(&placement, letters.len()).as_deref(), Some(word));
                    tracing::debug!(
                        "Placed '{}' at ({}, {}) going {:?}",
                        word,
                        start.row,
                        start.col,
                        direction
                    );
                    return Some(placement);
                }
            }
        }

        tracing::debug!("No placement found for '{}'", word);
        None
    }

    /// Cells a word of length `len` may start from under this policy
    pub fn candidate_starts(&self, size: usize, len: usize) -> Vec<Position> {
        if len > size {
            return Vec::new();
        }

        let border_offset = size - len + 1;
        let far_edge = size.saturating_sub(border_offset);

        let in_band = |pos: &Position| match self.policy {
            SearchPolicy::Full => true,
            SearchPolicy::Border => {
                pos.row < border_offset
                    || pos.row >= far_edge
                    || pos.col < border_offset
                    || pos.col >= far_edge
            }
        };

        (0..size)
            .flat_map(|row| (0..size).map(move |col| Position::new(row, col)))
            .filter(in_band)
            .collect()
    }

    /// Cells the word would occupy, if every one is in bounds and compatible
    fn fit(grid: &Grid, letters: &[char], placement: &Placement) -> Option<Vec<Position>> {
        let cells = placement.cells(letters.len(), grid.size())?;

        let compatible = cells
            .iter()
            .zip(letters)
            .all(|(pos, &letter)| grid.is_empty_at(*pos) || grid.get(*pos) == Some(letter));

        compatible.then_some(cells)
    }
}

impl Default for WordPlacer {
    fn default() -> Self {
        Self::new(SearchPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EMPTY;
    use rand::{rngs::StdRng, SeedableRng};

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn occupied(grid: &Grid) -> Vec<(Position, char)> {
        grid.positions()
            .filter_map(|pos| grid.get(pos).filter(|&c| c != EMPTY).map(|c| (pos, c)))
            .collect()
    }

    #[test]
    fn test_cat_in_five_by_five() {
        for seed in 0..50 {
            let mut grid = Grid::new(5);
            let placement = WordPlacer::default()
                .place("CAT", &mut grid, &mut rng(seed))
                .expect("CAT should always fit in an empty 5x5 grid");

            assert_eq!(grid.read(&placement, 3).as_deref(), Some("CAT"));
            assert_eq!(grid.empty_count(), 22, "Exactly three cells should be filled");
        }
    }

    #[test]
    fn test_word_longer_than_grid_is_rejected() {
        let mut grid = Grid::new(2);
        let before = grid.clone();

        assert!(!WordPlacer::default().try_place("HELLO", &mut grid, &mut rng(1)));
        assert_eq!(grid, before, "Grid must not change when the word is too long");
    }

    #[test]
    fn test_empty_word_is_rejected() {
        let mut grid = Grid::new(3);
        assert!(!WordPlacer::default().try_place("", &mut grid, &mut rng(1)));
        assert_eq!(grid.empty_count(), 9);
    }

    #[test]
    fn test_full_length_word_fits() {
        let mut grid = Grid::new(4);
        let placement = WordPlacer::default()
            .place("WORD", &mut grid, &mut rng(7))
            .expect("A word as long as the grid fits on an empty board");
        assert_eq!(grid.read(&placement, 4).as_deref(), Some("WORD"));
    }

    #[test]
    fn test_border_band_excludes_center() {
        let placer = WordPlacer::new(SearchPolicy::Border);
        // size 9, len 7: offset 3, band is rows/cols < 3 or >= 6
        let starts = placer.candidate_starts(9, 7);

        assert!(!starts.contains(&Position::new(4, 4)));
        assert!(!starts.contains(&Position::new(3, 5)));
        assert!(starts.contains(&Position::new(0, 4)));
        assert!(starts.contains(&Position::new(4, 8)));
        assert_eq!(starts.len(), 81 - 9);
    }

    #[test]
    fn test_border_band_covers_grid_for_short_words() {
        // offset = size for a one letter word, so the band is everything
        let starts = WordPlacer::new(SearchPolicy::Border).candidate_starts(5, 1);
        assert_eq!(starts.len(), 25);
    }

    #[test]
    fn test_border_band_drops_only_dead_starts() {
        let (size, len) = (9, 7);
        let starts = WordPlacer::new(SearchPolicy::Border).candidate_starts(size, len);

        for row in 0..size {
            for col in 0..size {
                let start = Position::new(row, col);
                let can_start = Direction::ALL.iter().any(|&direction| {
                    Placement { start, direction }.cells(len, size).is_some()
                });
                assert_eq!(
                    starts.contains(&start),
                    can_start,
                    "Band membership of ({}, {}) should match whether a {}-letter word fits",
                    row,
                    col,
                    len
                );
            }
        }
    }

    #[test]
    fn test_full_policy_covers_grid() {
        let starts = WordPlacer::new(SearchPolicy::Full).candidate_starts(9, 7);
        assert_eq!(starts.len(), 81);
        assert!(starts.contains(&Position::new(4, 4)));
    }

    #[test]
    fn test_failed_placement_leaves_grid_unchanged() {
        // Fill a 3x3 grid with X, then try a word that shares no letter
        let mut grid = Grid::new(3);
        let placer = WordPlacer::new(SearchPolicy::Full);
        let mut rng = rng(3);
        for _ in 0..3 {
            assert!(placer.try_place("XXX", &mut grid, &mut rng));
        }
        while grid.empty_count() > 0 {
            assert!(placer.try_place("X", &mut grid, &mut rng));
        }
        let before = grid.clone();

        for _ in 0..5 {
            assert!(!placer.try_place("ABC", &mut grid, &mut rng));
            assert_eq!(grid, before, "Repeated failures must not mutate the grid");
        }
    }

    #[test]
    fn test_crossing_words_share_letter() {
        // Every line of a 3x3 grid is either disjoint from ABC or crosses it at B
        let mut grid = Grid::new(3);
        let placer = WordPlacer::new(SearchPolicy::Full);
        let mut rng = rng(11);

        let first = placer.place("ABC", &mut grid, &mut rng).unwrap();
        let second = placer
            .place("ZBZ", &mut grid, &mut rng)
            .expect("ZBZ can always cross ABC at B or sit on a free line");

        assert_eq!(grid.read(&first, 3).as_deref(), Some("ABC"));
        assert_eq!(grid.read(&second, 3).as_deref(), Some("ZBZ"));
    }

    #[test]
    fn test_overlap_only_on_matching_letters() {
        let placer = WordPlacer::new(SearchPolicy::Full);
        for seed in 0..30 {
            let mut grid = Grid::new(4);
            let mut rng = rng(seed);
            let mut placed = Vec::new();

            for word in ["TEAM", "MEAT", "TAME", "MATE", "EAT"] {
                if let Some(placement) = placer.place(word, &mut grid, &mut rng) {
                    placed.push((word, placement));
                }
            }

            // Every earlier word must still read back intact
            for (word, placement) in &placed {
                assert_eq!(
                    grid.read(placement, word.len()).as_deref(),
                    Some(*word),
                    "'{}' was corrupted by a later placement (seed {})",
                    word,
                    seed
                );
            }
        }
    }

    #[test]
    fn test_existing_letters_never_overwritten() {
        let placer = WordPlacer::default();
        let mut grid = Grid::new(6);
        let mut rng = rng(42);

        for word in ["RUST", "CARGO", "CRATE", "TRAIT", "ENUM", "LIFETIME", "BOX", "ARC"] {
            let before = occupied(&grid);
            placer.try_place(word, &mut grid, &mut rng);
            for (pos, letter) in before {
                assert_eq!(grid.get(pos), Some(letter));
            }
        }
    }

    #[test]
    fn test_same_word_twice_may_be_placed_twice() {
        let placer = WordPlacer::new(SearchPolicy::Full);
        let mut grid = Grid::new(8);
        let mut rng = rng(5);

        assert!(placer.try_place("ECHO", &mut grid, &mut rng));
        assert!(placer.try_place("ECHO", &mut grid, &mut rng));
        assert!(grid.empty_count() <= 64 - 4);
    }

    #[test]
    fn test_same_seed_same_placement() {
        let placer = WordPlacer::default();
        let mut a = Grid::new(7);
        let mut b = Grid::new(7);

        let pa = placer.place("SEARCH", &mut a, &mut rng(99));
        let pb = placer.place("SEARCH", &mut b, &mut rng(99));

        assert_eq!(pa, pb);
        assert_eq!(a, b);
    }
}
