//! Engine abstraction layer used by the shell.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can be selected at runtime behind a single trait interface.

use crate::board::board::Board;
use crate::board::checkers_move::Move;

#[derive(Debug, Clone, Copy, Default)]
pub struct GoParams {
    /// Iteration depth limit; the engine's default when absent.
    pub depth: Option<u16>,
    /// Wall-clock budget in seconds; the engine's default when absent.
    pub seconds: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// Best line found, root move first. Empty when the position is
    /// already decided against the side to move.
    pub best_line: Vec<Move>,
    /// Progress and diagnostic lines in protocol form.
    pub info_lines: Vec<String>,
}

impl EngineOutput {
    #[inline]
    pub fn best_move(&self) -> Option<Move> {
        self.best_line.first().copied()
    }
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, board: &Board, params: &GoParams) -> Result<EngineOutput, String>;
}
