/// Row-major position of a cell on the board, `0..=8`.
pub type CellIndex = u8;

/// Three cell indices that win when taken by the same player.
pub type Line = [CellIndex; 3];

/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;

/// Every winning line, rows first, then columns, then diagonals.
///
/// When a single move completes more than one line, the first one in this
/// order is the one that gets reported.
pub const WINNING_LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub const fn line_contains(line: Line, index: CellIndex) -> bool {
    line[0] == index || line[1] == index || line[2] == index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cell_is_on_at_least_two_lines() {
        for index in 0..BOARD_CELLS as CellIndex {
            let count = WINNING_LINES
                .iter()
                .filter(|&&line| line_contains(line, index))
                .count();
            assert!(count >= 2, "cell {} is on {} lines", index, count);
        }
    }

    #[test]
    fn center_is_on_four_lines() {
        let count = WINNING_LINES
            .iter()
            .filter(|&&line| line_contains(line, 4))
            .count();
        assert_eq!(count, 4);
    }
}
