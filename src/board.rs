pub mod bitboard;
pub mod board;
pub mod checkers_move;
