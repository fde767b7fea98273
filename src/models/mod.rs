pub mod grid;

pub use grid::{Direction, Grid, Placement, Position, EMPTY};
