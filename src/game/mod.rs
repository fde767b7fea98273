// Puzzle construction: placement search, filler pass, text rendering

pub mod filler;
pub mod placer;
pub mod renderer;

pub use filler::Filler;
pub use placer::{SearchPolicy, WordPlacer};
pub use renderer::render;
