//! Tic-tac-toe position evaluation.

use strum_macros::Display;

/// One player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Mark {
    /// The crosses player.
    #[strum(serialize = "X")]
    X,
    /// The naughts player, printed with the zero glyph.
    #[strum(serialize = "0")]
    O,
}

/// A 3x3 position; `None` cells are empty.
pub type Board = [[Option<Mark>; 3]; 3];

/// The eight winning lines as `(row, column)` cell coordinates.
const LINES: [[(usize, usize); 3]; 8] = [
    // rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// The mark holding a complete line, if any.
///
/// Returns `None` for an undecided or drawn position.
///
/// ```
/// use etude_kata::tictactoe::{Mark, winner};
///
/// let board = [
///     [Some(Mark::X), None, Some(Mark::O)],
///     [None, Some(Mark::X), Some(Mark::O)],
///     [None, None, Some(Mark::X)],
/// ];
/// assert_eq!(winner(&board), Some(Mark::X));
/// ```
#[must_use]
pub fn winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line;
        let mark = board[a.0][a.1]?;
        (board[b.0][b.1] == Some(mark) && board[c.0][c.1] == Some(mark)).then_some(mark)
    })
}
