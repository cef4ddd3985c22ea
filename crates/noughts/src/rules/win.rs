//! Win detection.

use super::super::{Board, Mark, Square};

/// The eight winning lines, in the order they are checked.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first completed line, if any.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    let squares = board.squares();
    LINES.into_iter().find(|&[a, b, c]| {
        squares[a] != Square::Empty && squares[a] == squares[b] && squares[a] == squares[c]
    })
}

/// Returns the mark on the first completed line, if any.
pub fn check_winner(board: &Board) -> Option<Mark> {
    let [a, _, _] = winning_line(board)?;
    match board.squares()[a] {
        Square::Occupied(mark) => Some(mark),
        Square::Empty => None,
    }
}
