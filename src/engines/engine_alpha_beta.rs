//! Alpha-beta search engine.
//!
//! Thin adapter from the `Engine` trait onto the iterative deepening
//! search; each `choose_move` call runs one full `think` with per-call
//! state and relays the search's progress lines.

use crate::board::board::Board;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::search::alpha_beta::{think, SearchLimits};
use crate::search::board_scoring::StandardScorer;

pub struct AlphaBetaEngine {
    default_depth: u16,
    default_seconds: u64,
    scorer: StandardScorer,
}

impl AlphaBetaEngine {
    pub fn new(default_depth: u16, default_seconds: u64) -> Self {
        Self {
            default_depth,
            default_seconds,
            scorer: StandardScorer,
        }
    }
}

impl Engine for AlphaBetaEngine {
    fn name(&self) -> &str {
        "Quince AlphaBeta"
    }

    fn choose_move(&mut self, board: &Board, params: &GoParams) -> Result<EngineOutput, String> {
        let limits = SearchLimits {
            depth_limit: params.depth.unwrap_or(self.default_depth),
            seconds: params.seconds.unwrap_or(self.default_seconds),
        };

        let mut info_lines = Vec::new();
        let report = {
            let mut sink = |line: &str| info_lines.push(line.to_owned());
            think(board, &self.scorer, limits, Some(&mut sink)).map_err(|e| e.to_string())?
        };
        info_lines.push(format!(
            "result depth {} nodes {} time {}ms",
            report.reached_depth, report.nodes, report.elapsed_ms
        ));

        Ok(EngineOutput {
            best_line: report.best_line,
            info_lines,
        })
    }
}
