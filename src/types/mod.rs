//! Core types for the engine.
//!
//! The `chess` crate is the rules library: it owns board representation,
//! legal-move generation, make/undo (copy-make), game-status predicates and
//! FEN import/export. Its types are re-exported here as the canonical
//! vocabulary so the rest of the crate has a single source of truth. Types
//! the search itself needs (`Score`, `Depth`, `Ply`) live alongside.

mod depth;
mod score;

pub use depth::{Depth, Ply, MAX_DEPTH};
pub use score::{Score, SCORE_DRAW, SCORE_INFINITY, SCORE_MATE};

// Canonical board/move vocabulary from the rules library.
pub use chess::{
    BitBoard, Board, BoardStatus, ChessMove as Move, Color, File, MoveGen, Piece, Rank, Square,
    ALL_PIECES, EMPTY,
};

/// Zobrist hash of a position, used for in-line repetition detection
pub type Hash = u64;

/// Node count type
pub type NodeCount = u64;

/// Centipawn value type
pub type Value = i32;

// Piece values in centipawns. The king value is a sentinel that keeps the
// evaluator free of special cases; both kings are always on the board, so
// it cancels out of every evaluation.
pub const PAWN_VALUE: Value = 100;
pub const KNIGHT_VALUE: Value = 320;
pub const BISHOP_VALUE: Value = 330;
pub const ROOK_VALUE: Value = 500;
pub const QUEEN_VALUE: Value = 900;
pub const KING_VALUE: Value = 20_000;

/// Material value of a piece in centipawns
#[inline]
pub const fn piece_value(piece: Piece) -> Value {
    match piece {
        Piece::Pawn => PAWN_VALUE,
        Piece::Knight => KNIGHT_VALUE,
        Piece::Bishop => BISHOP_VALUE,
        Piece::Rook => ROOK_VALUE,
        Piece::Queen => QUEEN_VALUE,
        Piece::King => KING_VALUE,
    }
}
