//! Move value type.
//!
//! A move records its origin and destination squares as singleton
//! bitboards plus the full set of enemy pieces removed by the move, so a
//! multi-jump is a single value. Parsing from text lives in
//! `utils::notation` because it needs a board to validate against;
//! rendering is pure geometry and lives here.

use crate::board::bitboard::{Bitboard, Direction};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Starting square, singleton.
    pub orig: Bitboard,
    /// Final landing square, singleton.
    pub dest: Bitboard,
    /// Union of every enemy piece leapt; empty for a slide.
    pub capture: Bitboard,
    /// Subset of `capture` that were kings, so undo restores exact rank.
    pub king_capture: Bitboard,
    /// The moving man ended on its crowning row.
    pub crowned: bool,
}

impl Move {
    #[inline]
    pub fn slide(orig: Bitboard, dest: Bitboard, crowned: bool) -> Move {
        Move {
            orig,
            dest,
            capture: Bitboard::EMPTY,
            king_capture: Bitboard::EMPTY,
            crowned,
        }
    }

    #[inline]
    pub fn jump(
        orig: Bitboard,
        dest: Bitboard,
        capture: Bitboard,
        king_capture: Bitboard,
        crowned: bool,
    ) -> Move {
        Move {
            orig,
            dest,
            capture,
            king_capture,
            crowned,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.capture.is_empty()
    }

    #[inline]
    pub fn captured_a_king(&self) -> bool {
        !self.king_capture.is_empty()
    }

    /// Landing squares of the jump chain, origin first, in display (1-based)
    /// numbering. `None` when the capture set does not admit a chain from
    /// `orig` to `dest`, which cannot happen for generated moves.
    pub fn jump_path(&self) -> Option<Vec<u8>> {
        let orig = self.orig.first_square().ok()?;
        let mut path = vec![orig + 1];
        if walk_jump_chain(self.orig, self.dest, self.capture, &mut path) {
            Some(path)
        } else {
            None
        }
    }
}

/// Depth-first reconstruction of the landing sequence. Each hop leaps one
/// square of the capture set; the chain is accepted once every captured
/// square has been consumed and the piece stands on `dest`.
fn walk_jump_chain(cur: Bitboard, dest: Bitboard, remaining: Bitboard, path: &mut Vec<u8>) -> bool {
    if remaining.is_empty() {
        return cur == dest;
    }
    for dir in Direction::ALL {
        let mid = dir.shift(cur);
        if (mid & remaining).is_empty() {
            continue;
        }
        let land = dir.shift(mid);
        if land.is_empty() {
            continue;
        }
        let Ok(land_sq) = land.first_square() else {
            continue;
        };
        path.push(land_sq + 1);
        if walk_jump_chain(land, dest, remaining & !mid, path) {
            return true;
        }
        path.pop();
    }
    false
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let orig = self.orig.first_square().map_err(|_| fmt::Error)? + 1;
        let dest = self.dest.first_square().map_err(|_| fmt::Error)? + 1;
        if !self.is_capture() {
            return write!(f, "{orig}-{dest}");
        }
        match self.jump_path() {
            Some(path) => {
                let text: Vec<String> = path.iter().map(|sq| sq.to_string()).collect();
                write!(f, "{}", text.join("x"))
            }
            None => write!(f, "{orig}x{dest}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::board::bitboard::Bitboard;

    #[test]
    fn slide_renders_with_a_dash() {
        let mv = Move::slide(Bitboard::from_square(8), Bitboard::from_square(12), false);
        assert_eq!(mv.to_string(), "9-13");
    }

    #[test]
    fn single_jump_renders_with_an_x() {
        // 14x23 over 18 in display numbering: squares 13, 22 over 17.
        let mv = Move::jump(
            Bitboard::from_square(13),
            Bitboard::from_square(22),
            Bitboard::from_square(17),
            Bitboard::EMPTY,
            false,
        );
        assert_eq!(mv.to_string(), "14x23");
    }

    #[test]
    fn double_jump_renders_the_full_chain() {
        // 9x18x27: origin 8, over 13 to 17, over 22 to 26.
        let mv = Move::jump(
            Bitboard::from_square(8),
            Bitboard::from_square(26),
            Bitboard::from_square(13) | Bitboard::from_square(22),
            Bitboard::EMPTY,
            false,
        );
        assert_eq!(mv.to_string(), "9x18x27");
        assert_eq!(mv.jump_path().expect("chain exists"), vec![9, 18, 27]);
    }

    #[test]
    fn moves_compare_field_wise() {
        let a = Move::slide(Bitboard::from_square(8), Bitboard::from_square(12), false);
        let b = Move::slide(Bitboard::from_square(8), Bitboard::from_square(12), false);
        let c = Move::slide(Bitboard::from_square(8), Bitboard::from_square(13), false);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
