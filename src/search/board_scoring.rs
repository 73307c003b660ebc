//! Static position evaluation.
//!
//! Search delegates leaf scoring to this trait so alternate heuristics can
//! be swapped without touching search code. Scores are centered on the
//! side to move, and every static evaluation is strictly inside
//! `(-WIN, WIN)` so the win sentinels stay unambiguous.

use crate::board::bitboard::Bitboard;
use crate::board::board::{Board, Color};

/// Sentinel magnitude for a forced win found by search.
pub const WIN: i32 = 30_000;
/// Alpha-beta window bound, strictly outside every reachable score.
pub const SCORE_INFINITY: i32 = 32_000;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, board: &Board) -> i32;
}

/// The engine's standard four-term evaluation:
/// `256*material + 2*movers + 16*kings_row + 8*edges`, each term the
/// side-to-move quantity minus the opponent's.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScorer;

impl StandardScorer {
    const MATERIAL_WEIGHT: i32 = 256;
    const MOVERS_WEIGHT: i32 = 2;
    const KINGS_ROW_WEIGHT: i32 = 16;
    const EDGES_WEIGHT: i32 = 8;

    /// Piece strength: a man counts once, a king twice (the king set is
    /// counted on top of the full piece set).
    #[inline]
    fn material_black_minus_white(board: &Board) -> i32 {
        let pieces = board.black_pieces.count() as i32 - board.white_pieces.count() as i32;
        let kings = board.black_kings.count() as i32 - board.white_kings.count() as i32;
        pieces + kings
    }

    #[inline]
    fn movers_black_minus_white(board: &Board) -> i32 {
        board.movers(Color::Black).count() as i32 - board.movers(Color::White).count() as i32
    }

    /// Men still guarding their own back row against enemy crowning.
    #[inline]
    fn kings_row_black_minus_white(board: &Board) -> i32 {
        let black_guards = (board.men(Color::Black) & Bitboard::BLACK_KINGS_ROW).count() as i32;
        let white_guards = (board.men(Color::White) & Bitboard::WHITE_KINGS_ROW).count() as i32;
        black_guards - white_guards
    }

    #[inline]
    fn edges_black_minus_white(board: &Board) -> i32 {
        (board.black_pieces & Bitboard::EDGES).count() as i32
            - (board.white_pieces & Bitboard::EDGES).count() as i32
    }
}

impl BoardScorer for StandardScorer {
    fn score(&self, board: &Board) -> i32 {
        let black_minus_white = Self::MATERIAL_WEIGHT * Self::material_black_minus_white(board)
            + Self::MOVERS_WEIGHT * Self::movers_black_minus_white(board)
            + Self::KINGS_ROW_WEIGHT * Self::kings_row_black_minus_white(board)
            + Self::EDGES_WEIGHT * Self::edges_black_minus_white(board);
        match board.side_to_move {
            Color::Black => black_minus_white,
            Color::White => -black_minus_white,
        }
    }
}
