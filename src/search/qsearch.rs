//! Quiescence search.
//!
//! When the full-width search runs out of depth it must not evaluate a
//! position in the middle of an exchange — the static score would swing by a
//! piece depending on where exactly it stopped. Quiescence keeps searching
//! only the unstable moves (captures, checks, promotions) until the position
//! is quiet, with hard caps on recursion depth and branching so even
//! tactically explosive lines terminate.

use super::limits::TimeoutAbort;
use super::{insufficient_material, ordering, Searcher};
use crate::eval;
use crate::types::{Board, BoardStatus, Move, MoveGen, Ply, Score, EMPTY};

/// Hard cap on quiescence recursion, in plies past the nominal horizon.
pub const QS_PLY_CAP: i32 = 6;

/// At most this many candidates are tried per quiescence node.
pub const QS_BRANCH_CAP: usize = 15;

/// Is this move worth extending past the horizon? Captures (including en
/// passant), promotions, and checks keep the position unstable.
fn is_tactical(board: &Board, m: Move) -> bool {
    if ordering::captured_piece(board, m).is_some() || m.get_promotion().is_some() {
        return true;
    }
    *board.make_move_new(m).checkers() != EMPTY
}

/// Capture-only negamax with stand-pat cutoffs.
///
/// `qdepth` counts plies past the horizon; at [`QS_PLY_CAP`] the static
/// evaluation is returned as-is. Fail-hard: the result is clamped to the
/// `[alpha, beta]` window, with the stand-pat score acting as a floor
/// because the side to move may always decline further captures.
pub(crate) fn quiesce(
    searcher: &mut Searcher,
    board: &Board,
    ply: Ply,
    qdepth: i32,
    mut alpha: Score,
    beta: Score,
) -> Result<Score, TimeoutAbort> {
    searcher.visit_node(ply)?;

    match board.status() {
        BoardStatus::Checkmate => return Ok(Score::mated_in(ply.raw())),
        BoardStatus::Stalemate => return Ok(Score::draw()),
        BoardStatus::Ongoing => {}
    }
    if insufficient_material(board) {
        return Ok(Score::draw());
    }

    if qdepth >= QS_PLY_CAP {
        return Ok(eval::evaluate_stm(board));
    }

    let stand_pat = eval::evaluate_stm(board);
    if stand_pat >= beta {
        return Ok(beta);
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }

    let mut moves: Vec<Move> = MoveGen::new_legal(board)
        .filter(|&m| is_tactical(board, m))
        .collect();
    ordering::order_mvv_lva(board, &mut moves);
    moves.truncate(QS_BRANCH_CAP);

    for m in moves {
        let child = board.make_move_new(m);
        let score = -quiesce(searcher, &child, ply.next(), qdepth + 1, -beta, -alpha)?;

        if score >= beta {
            return Ok(beta);
        }
        if score > alpha {
            alpha = score;
        }
    }

    Ok(alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchLimits;
    use crate::types::Square;
    use std::str::FromStr;

    fn quiesce_fresh(board: &Board) -> Score {
        let mut searcher = Searcher::new();
        searcher.begin(&SearchLimits::depth(1));
        quiesce(
            &mut searcher,
            board,
            Ply::ZERO,
            0,
            Score::neg_infinity(),
            Score::infinity(),
        )
        .expect("unbounded quiescence cannot time out")
    }

    #[test]
    fn test_checkmate_scores_by_ply() {
        // Fools mate: White is already checkmated.
        let board =
            Board::from_str("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
                .unwrap();
        assert_eq!(quiesce_fresh(&board), Score::mated_in(0));
    }

    #[test]
    fn test_hanging_queen_is_not_the_leaf_score() {
        // White queen en prise on d5; quiescence must see it fall.
        let board = Board::from_str("3qk3/8/8/3Q4/8/8/8/4K3 b - - 0 1").unwrap();
        let score = quiesce_fresh(&board);
        // Black to move wins the queen: comfortably positive for the mover.
        assert!(score.raw() > 700);
    }

    #[test]
    fn test_terminates_on_capture_storm() {
        // Every piece can be traded; still must come back under the caps.
        let board =
            Board::from_str("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/2N2N2/PPPP1PPP/R1BQK2R w KQkq - 4 4")
                .unwrap();
        let _ = quiesce_fresh(&board);
    }

    #[test]
    fn test_checking_moves_are_tactical() {
        let board = Board::from_str("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        let rook_check = Move::new(
            Square::from_str("a1").unwrap(),
            Square::from_str("a8").unwrap(),
            None,
        );
        assert!(is_tactical(&board, rook_check));
    }
}
