//! Move notation parsing.
//!
//! Text moves use 1-based square numbers: `11-15` for a slide and
//! `14x23` (or a longer `xSxS` chain) for captures. Parsing validates the
//! text shape first, then the geometry of each hop, and finally requires
//! the move to be present in the legal move list of the given position.

use crate::board::bitboard::{Bitboard, Direction};
use crate::board::board::Board;
use crate::board::checkers_move::Move;
use std::error::Error;
use std::fmt;

pub type NotationResult<T> = Result<T, NotationError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// The text is not a move: bad shape, unknown square number, or an
    /// impossible jump geometry. Carries the offending token.
    MalformedMove(String),
    /// The text is a well-formed move that is not legal in the position.
    IllegalMove(String),
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::MalformedMove(token) => write!(f, "malformed move '{token}'"),
            NotationError::IllegalMove(token) => write!(f, "illegal move '{token}'"),
        }
    }
}

impl Error for NotationError {}

/// Parse `text` as a move in `board`'s current position.
pub fn parse_move(board: &Board, text: &str) -> NotationResult<Move> {
    let trimmed = text.trim();
    if trimmed.contains('x') {
        parse_jump(board, trimmed)
    } else if trimmed.contains('-') {
        parse_slide(board, trimmed)
    } else {
        Err(NotationError::MalformedMove(trimmed.to_owned()))
    }
}

fn parse_slide(board: &Board, text: &str) -> NotationResult<Move> {
    let squares = parse_squares(text, '-')?;
    if squares.len() != 2 {
        return Err(NotationError::MalformedMove(text.to_owned()));
    }
    let orig = Bitboard::from_square(squares[0] - 1);
    let dest = Bitboard::from_square(squares[1] - 1);
    board
        .generate_moves()
        .into_iter()
        .find(|m| !m.is_capture() && m.orig == orig && m.dest == dest)
        .ok_or_else(|| NotationError::IllegalMove(text.to_owned()))
}

fn parse_jump(board: &Board, text: &str) -> NotationResult<Move> {
    let squares = parse_squares(text, 'x')?;
    if squares.len() < 2 {
        return Err(NotationError::MalformedMove(text.to_owned()));
    }

    // Each hop must be two diagonal steps in one direction; the leapt
    // square in between is the capture.
    let orig = Bitboard::from_square(squares[0] - 1);
    let mut current = orig;
    let mut captured = Bitboard::EMPTY;
    for &landing_square in &squares[1..] {
        let landing = Bitboard::from_square(landing_square - 1);
        let mid = jump_over(current, landing)
            .ok_or_else(|| NotationError::MalformedMove(text.to_owned()))?;
        captured |= mid;
        current = landing;
    }
    let dest = current;

    board
        .generate_moves()
        .into_iter()
        .find(|m| m.orig == orig && m.dest == dest && m.capture == captured)
        .ok_or_else(|| NotationError::IllegalMove(text.to_owned()))
}

/// The square leapt when jumping from `from` to `to`, when `to` is two
/// diagonal steps from `from` in a single direction.
fn jump_over(from: Bitboard, to: Bitboard) -> Option<Bitboard> {
    for dir in Direction::ALL {
        let mid = dir.shift(from);
        if !mid.is_empty() && dir.shift(mid) == to {
            return Some(mid);
        }
    }
    None
}

fn parse_squares(text: &str, separator: char) -> NotationResult<Vec<u8>> {
    text.split(separator)
        .map(|token| {
            let square: u8 = token
                .parse()
                .map_err(|_| NotationError::MalformedMove(token.to_owned()))?;
            if (1..=32).contains(&square) {
                Ok(square)
            } else {
                Err(NotationError::MalformedMove(token.to_owned()))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{parse_move, NotationError};
    use crate::board::board::Board;

    #[test]
    fn slides_parse_against_the_opening_position() {
        let board = Board::initial();
        let mv = parse_move(&board, "11-15").expect("legal opening");
        assert_eq!(mv.to_string(), "11-15");
        assert!(!mv.is_capture());
    }

    #[test]
    fn forced_capture_parses_in_x_notation() {
        let board = Board::from_descriptor("B:W18:B14").expect("descriptor parses");
        let mv = parse_move(&board, "14x23").expect("capture is legal");
        assert!(mv.is_capture());
        assert_eq!(mv.capture.count(), 1);
    }

    #[test]
    fn jump_chains_parse_hop_by_hop() {
        let board = Board::from_descriptor("B:W17,25,26:B14").expect("descriptor parses");
        let mv = parse_move(&board, "14x21x30").expect("double jump is legal");
        assert_eq!(mv.capture.count(), 2);
        assert!(mv.crowned);
    }

    #[test]
    fn malformed_text_is_rejected_with_the_bad_token() {
        let board = Board::initial();
        for (text, token) in [
            ("eleven-15", "eleven"),
            ("11", "11"),
            ("0-4", "0"),
            ("11-33", "33"),
            ("14x15", "14x15"),
            ("", ""),
        ] {
            match parse_move(&board, text) {
                Err(NotationError::MalformedMove(found)) => {
                    assert_eq!(found, token, "wrong token for {text:?}")
                }
                other => panic!("expected malformed-move error for {text:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn well_formed_but_unavailable_moves_are_illegal() {
        let board = Board::initial();
        // Quiet slide while geometry is fine but the square is empty.
        assert_eq!(
            parse_move(&board, "18-23"),
            Err(NotationError::IllegalMove("18-23".to_owned()))
        );
        // Captures are compulsory, so a slide is refused when a jump exists.
        let forced = Board::from_descriptor("B:W18:B2,14").expect("descriptor parses");
        assert_eq!(
            parse_move(&forced, "2-6"),
            Err(NotationError::IllegalMove("2-6".to_owned()))
        );
        // A capture with nothing to capture is well-formed yet illegal.
        assert_eq!(
            parse_move(&board, "11x18"),
            Err(NotationError::IllegalMove("11x18".to_owned()))
        );
    }
}
