use crate::models::Grid;

/// Rows of space-separated letters, one row per line.
///
/// Every letter is followed by a space and every row by a newline.
pub fn render(grid: &Grid) -> String {
    let size = grid.size();
    let mut output = String::with_capacity(size * (size * 2 + 1));

    for row in grid.rows() {
        for letter in row {
            output.push(*letter);
            output.push(' ');
        }
        output.push('\n');
    }

    output
}
