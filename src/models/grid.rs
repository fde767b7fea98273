use std::fmt;

/// Placeholder for a cell that no word has claimed yet
pub const EMPTY: char = ' ';

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `steps` cells along `direction`, or `None` when that leaves a
    /// `size` x `size` grid.
    pub fn offset(&self, direction: Direction, steps: usize, size: usize) -> Option<Position> {
        let (d_row, d_col) = direction.delta();
        let row = step(self.row, d_row, steps)?;
        let col = step(self.col, d_col, steps)?;

        if row < size && col < size {
            Some(Position { row, col })
        } else {
            None
        }
    }
}

fn step(origin: usize, delta: isize, steps: usize) -> Option<usize> {
    let steps = isize::try_from(steps).ok()?;
    let origin = isize::try_from(origin).ok()?;
    usize::try_from(origin + delta * steps).ok()
}

/// One of the eight straight lines a word can run along
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// (row, col) increment per letter
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }
}

/// Where a word ended up: its first letter and the line it follows
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Placement {
    pub start: Position,
    pub direction: Direction,
}

impl Placement {
    /// Cells covered by a word of `len` letters, `None` if any falls outside the grid
    pub fn cells(&self, len: usize, size: usize) -> Option<Vec<Position>> {
        (0..len)
            .map(|i| self.start.offset(self.direction, i, size))
            .collect()
    }
}

/// Square letter matrix, row-major
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    size: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Create a `size` x `size` grid with every cell set to [`EMPTY`]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![EMPTY; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, pos: Position) -> Option<char> {
        if pos.row < self.size && pos.col < self.size {
            Some(self.cells[pos.row * self.size + pos.col])
        } else {
            None
        }
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Some(EMPTY)
    }

    /// Write a letter into an in-bounds cell.
    ///
    /// Callers must have checked that the cell is empty or already holds `letter`.
    pub(crate) fn set(&mut self, pos: Position, letter: char) {
        debug_assert!(pos.row < self.size && pos.col < self.size);
        debug_assert!(matches!(self.get(pos), Some(c) if c == EMPTY || c == letter));
        self.cells[pos.row * self.size + pos.col] = letter;
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Position::new(row, col)))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks() panics on zero
        self.cells.chunks(self.size.max(1))
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == EMPTY).count()
    }

    /// Read `len` letters starting at `placement`, if they all lie inside the grid
    pub fn read(&self, placement: &Placement, len: usize) -> Option<String> {
        placement
            .cells(len, self.size)?
            .into_iter()
            .map(|pos| self.get(pos))
            .collect()
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut char> {
        self.cells.iter_mut()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::game::render(self))
    }
}
