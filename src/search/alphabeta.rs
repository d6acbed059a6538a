//! Fixed-depth alpha-beta search.
//!
//! Negamax formulation: every node is scored from its own side to move, so
//! one code path serves both colors and the window flips to `-beta, -alpha`
//! on recursion. Terminal positions are resolved before anything else —
//! checkmate scores carry the ply-from-root distance so shallower mates
//! strictly outrank deeper ones, and every draw is exactly zero no matter
//! the material on the board.

use super::limits::TimeoutAbort;
use super::{insufficient_material, ordering, qsearch, Searcher};
use crate::types::{Board, Depth, Move, MoveGen, Ply, Score, EMPTY};

/// Search `board` to `depth` plies, window `[alpha, beta]`, from the side to
/// move's perspective. Fail-soft: may return a score outside the window.
pub(crate) fn search(
    searcher: &mut Searcher,
    board: &Board,
    depth: Depth,
    ply: Ply,
    mut alpha: Score,
    beta: Score,
) -> Result<Score, TimeoutAbort> {
    searcher.visit_node(ply)?;

    // A line that revisits a position is going nowhere.
    if searcher.line_repeats(board) {
        return Ok(Score::draw());
    }

    let mut moves: Vec<Move> = MoveGen::new_legal(board).collect();
    if moves.is_empty() {
        return Ok(if *board.checkers() != EMPTY {
            Score::mated_in(ply.raw())
        } else {
            Score::draw()
        });
    }
    if insufficient_material(board) {
        return Ok(Score::draw());
    }

    if depth.is_qs() {
        return qsearch::quiesce(searcher, board, ply, 0, alpha, beta);
    }

    ordering::captures_first(board, &mut moves);

    let mut best = Score::neg_infinity();
    for m in moves {
        let child = board.make_move_new(m);

        // Balanced push/pop even when the recursion aborts: the pop runs
        // before `?` propagates.
        searcher.push_line(board);
        let result = search(searcher, &child, depth - 1, ply.next(), -beta, -alpha);
        searcher.pop_line();
        let score = -result?;

        if score > best {
            best = score;
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            break;
        }
    }

    Ok(best)
}
