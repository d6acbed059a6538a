//! Static position evaluation.
//!
//! Material plus piece-square tables, nothing else: no pawn-structure terms,
//! no mobility, no tapering. The evaluation is a pure function of the board
//! with no allocation beyond table lookups; mate and draw detection belong
//! to the search, not to the evaluator.

mod pst;

use crate::types::{piece_value, Board, Color, Score, Value, ALL_PIECES};

/// Evaluate the position from White's perspective.
///
/// Sums material value and piece-square bonus over every occupied square,
/// White-positive / Black-negative. The king's sentinel material value is
/// included for both sides and cancels out.
pub fn evaluate(board: &Board) -> Score {
    let mut score: Value = 0;

    for &color in &[Color::White, Color::Black] {
        let sign = if color == Color::White { 1 } else { -1 };
        for &piece in ALL_PIECES.iter() {
            for sq in board.pieces(piece) & board.color_combined(color) {
                score += sign * (piece_value(piece) + pst::bonus(piece, sq, color));
            }
        }
    }

    Score::cp(score)
}

/// Evaluate from the side to move's perspective, for negamax search.
#[inline]
pub fn evaluate_stm(board: &Board) -> Score {
    let white = evaluate(board);
    if board.side_to_move() == Color::White {
        white
    } else {
        -white
    }
}
