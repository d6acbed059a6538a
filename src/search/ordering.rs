//! Move ordering heuristics.
//!
//! The full-width search only partitions captures ahead of quiet moves;
//! quiescence orders its candidates by MVV-LVA so the most decisive
//! exchanges are tried first and cutoffs come early.

use crate::types::{piece_value, Board, Move, Piece, Value};

/// The piece a move captures, if any. En passant lands on an empty square,
/// so a pawn changing file onto one is still a pawn capture.
#[inline]
pub(crate) fn captured_piece(board: &Board, m: Move) -> Option<Piece> {
    if let Some(victim) = board.piece_on(m.get_dest()) {
        return Some(victim);
    }
    if board.piece_on(m.get_source()) == Some(Piece::Pawn)
        && m.get_source().get_file() != m.get_dest().get_file()
    {
        return Some(Piece::Pawn);
    }
    None
}

/// MVV-LVA: victim value minus attacker value, higher first.
#[inline]
pub(crate) fn mvv_lva_score(board: &Board, m: Move) -> Value {
    let victim = captured_piece(board, m).map(piece_value).unwrap_or(0);
    let attacker = board.piece_on(m.get_source()).map(piece_value).unwrap_or(0);
    victim - attacker
}

/// Stable partition: captures ahead of quiet moves, original order kept
/// within each class.
pub(crate) fn captures_first(board: &Board, moves: &mut [Move]) {
    moves.sort_by_key(|&m| captured_piece(board, m).is_none());
}

/// Sort candidates by descending MVV-LVA score.
pub(crate) fn order_mvv_lva(board: &Board, moves: &mut [Move]) {
    moves.sort_by_key(|&m| std::cmp::Reverse(mvv_lva_score(board, m)));
}
