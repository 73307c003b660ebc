//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used as a harness
//! baseline and for integration testing.

use rand::prelude::IndexedRandom;

use crate::board::board::Board;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};

#[derive(Debug, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        RandomEngine
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Quince Random"
    }

    fn choose_move(&mut self, board: &Board, _params: &GoParams) -> Result<EngineOutput, String> {
        let moves = board.generate_moves();

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", moves.len()));
        if let Some(mv) = moves.choose(&mut rand::rng()) {
            out.best_line.push(*mv);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::board::board::Board;
    use crate::engines::engine_trait::{Engine, GoParams};

    #[test]
    fn random_engine_picks_a_legal_move() {
        let board = Board::initial();
        let mut engine = RandomEngine::new();
        let out = engine
            .choose_move(&board, &GoParams::default())
            .expect("engine should choose a move");
        let mv = out.best_move().expect("opening position has moves");
        assert!(board.generate_moves().contains(&mv));
    }

    #[test]
    fn random_engine_reports_no_move_in_a_lost_position() {
        let board = Board::from_descriptor("W:W:B5").expect("descriptor parses");
        let mut engine = RandomEngine::new();
        let out = engine
            .choose_move(&board, &GoParams::default())
            .expect("engine should answer");
        assert!(out.best_move().is_none());
    }
}
