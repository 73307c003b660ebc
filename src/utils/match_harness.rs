//! Head-to-head engine match harness.
//!
//! Referees two `Engine` implementations in process: alternating turns,
//! legality checks on every played move, a configurable draw ceiling, and
//! an optional seeded random opening prefix for series variety.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::board::{Board, Color};
use crate::engines::engine_trait::{Engine, GoParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    BlackWin,
    WhiteWin,
    Draw,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Game is drawn once the move count exceeds this ceiling.
    pub moves_limit: usize,
    /// Random plies played before the engines take over.
    pub opening_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            moves_limit: 299,
            opening_plies: 0,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchRecord {
    pub outcome: MatchOutcome,
    pub moves_text: Vec<String>,
    pub final_board: Board,
}

pub fn play_match<'a>(
    black: &'a mut dyn Engine,
    white: &'a mut dyn Engine,
    config: &MatchConfig,
    seed: u64,
) -> Result<MatchRecord, String> {
    let mut board = Board::initial();
    let mut moves_text = Vec::new();

    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..config.opening_plies {
        let moves = board.generate_moves();
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        board.apply_move(mv);
        moves_text.push(mv.to_string());
    }

    loop {
        if board.side_to_move_has_lost() {
            let outcome = match board.side_to_move {
                Color::Black => MatchOutcome::WhiteWin,
                Color::White => MatchOutcome::BlackWin,
            };
            return Ok(MatchRecord {
                outcome,
                moves_text,
                final_board: board,
            });
        }
        if moves_text.len() > config.moves_limit {
            return Ok(MatchRecord {
                outcome: MatchOutcome::Draw,
                moves_text,
                final_board: board,
            });
        }

        let engine = match board.side_to_move {
            Color::Black => &mut *black,
            Color::White => &mut *white,
        };
        let output = engine.choose_move(&board, &config.go_params)?;
        let Some(mv) = output.best_move() else {
            return Err(format!(
                "{} returned no move in a live position",
                engine.name()
            ));
        };
        if !board.generate_moves().contains(&mv) {
            return Err(format!("{} played illegal move {mv}", engine.name()));
        }
        board.apply_move(mv);
        moves_text.push(mv.to_string());
    }
}

#[derive(Debug, Clone, Default)]
pub struct SeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
}

impl SeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={}",
            self.games, self.player1_wins, self.player2_wins, self.draws
        )
    }
}

/// Play a series with the players alternating colors game by game;
/// player 1 takes black in the first game.
pub fn play_match_series(
    player1: &mut dyn Engine,
    player2: &mut dyn Engine,
    games: u16,
    base_seed: u64,
    config: &MatchConfig,
) -> Result<SeriesStats, String> {
    let mut stats = SeriesStats::default();
    for game in 0..games {
        let player1_is_black = game % 2 == 0;
        let seed = base_seed.wrapping_add(u64::from(game));
        let record = if player1_is_black {
            play_match(player1, player2, config, seed)?
        } else {
            play_match(player2, player1, config, seed)?
        };
        stats.games += 1;
        match record.outcome {
            MatchOutcome::Draw => stats.draws += 1,
            MatchOutcome::BlackWin => {
                if player1_is_black {
                    stats.player1_wins += 1;
                } else {
                    stats.player2_wins += 1;
                }
            }
            MatchOutcome::WhiteWin => {
                if player1_is_black {
                    stats.player2_wins += 1;
                } else {
                    stats.player1_wins += 1;
                }
            }
        }
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::{play_match, play_match_series, MatchConfig, MatchOutcome};
    use crate::engines::engine_alpha_beta::AlphaBetaEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_trait::GoParams;

    #[test]
    fn random_self_play_always_finishes() {
        let mut black = RandomEngine::new();
        let mut white = RandomEngine::new();
        let record = play_match(&mut black, &mut white, &MatchConfig::default(), 7)
            .expect("match should complete");
        assert!(!record.moves_text.is_empty());
        assert!(record.final_board.invariants_hold());
    }

    #[test]
    fn shallow_search_beats_random_or_at_least_finishes() {
        let mut searcher = AlphaBetaEngine::new(3, 5);
        let mut random = RandomEngine::new();
        let config = MatchConfig {
            moves_limit: 60,
            go_params: GoParams {
                depth: Some(3),
                seconds: Some(5),
            },
            ..MatchConfig::default()
        };
        let record =
            play_match(&mut searcher, &mut random, &config, 42).expect("match should complete");
        assert!(matches!(
            record.outcome,
            MatchOutcome::BlackWin | MatchOutcome::WhiteWin | MatchOutcome::Draw
        ));
    }

    #[test]
    fn series_tallies_every_game() {
        let mut player1 = RandomEngine::new();
        let mut player2 = RandomEngine::new();
        let config = MatchConfig {
            moves_limit: 40,
            opening_plies: 4,
            ..MatchConfig::default()
        };
        let stats = play_match_series(&mut player1, &mut player2, 4, 9, &config)
            .expect("series should complete");
        assert_eq!(stats.games, 4);
        assert_eq!(
            stats.player1_wins + stats.player2_wins + stats.draws,
            stats.games
        );
    }
}
