//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match -- --black alphabeta --white random --depth 5`

use quince_checkers::engines::engine_alpha_beta::AlphaBetaEngine;
use quince_checkers::engines::engine_random::RandomEngine;
use quince_checkers::engines::engine_trait::{Engine, GoParams};
use quince_checkers::utils::match_harness::{play_match_series, MatchConfig};

fn usage() {
    eprintln!(
        "Usage: engine_match --black ENGINE --white ENGINE \
         [--depth DEPTH] [--seconds SECONDS] [--games GAMES]\n\
         ENGINE is one of: alphabeta, random"
    );
}

fn build_engine(name: &str, depth: u16, seconds: u64) -> Option<Box<dyn Engine>> {
    match name {
        "alphabeta" => Some(Box::new(AlphaBetaEngine::new(depth, seconds))),
        "random" => Some(Box::new(RandomEngine::new())),
        _ => None,
    }
}

fn main() -> Result<(), String> {
    let mut black_name = String::new();
    let mut white_name = String::new();
    let mut depth: u16 = 5;
    let mut seconds: u64 = 1;
    let mut games: u16 = 2;

    let mut args = std::env::args().skip(1);
    while let Some(flag) = args.next() {
        let value = args.next();
        match (flag.as_str(), value) {
            ("--black", Some(v)) => black_name = v,
            ("--white", Some(v)) => white_name = v,
            ("--depth", Some(v)) => {
                depth = v.parse().map_err(|_| format!("invalid depth: {v}"))?;
                if !(1..=999).contains(&depth) {
                    return Err(format!("invalid depth: {depth}"));
                }
            }
            ("--seconds", Some(v)) => {
                seconds = v.parse().map_err(|_| format!("invalid seconds: {v}"))?;
            }
            ("--games", Some(v)) => {
                games = v.parse().map_err(|_| format!("invalid games: {v}"))?;
            }
            _ => {
                usage();
                return Err(format!("unrecognized argument: {flag}"));
            }
        }
    }

    let Some(mut black) = build_engine(&black_name, depth, seconds) else {
        usage();
        return Err(format!("unknown black engine: {black_name}"));
    };
    let Some(mut white) = build_engine(&white_name, depth, seconds) else {
        usage();
        return Err(format!("unknown white engine: {white_name}"));
    };

    let config = MatchConfig {
        go_params: GoParams {
            depth: Some(depth),
            seconds: Some(seconds),
        },
        ..MatchConfig::default()
    };

    println!(
        "{} (as player 1) vs {} (as player 2), {} games",
        black.name(),
        white.name(),
        games
    );
    let stats = play_match_series(black.as_mut(), white.as_mut(), games, 1234, &config)?;
    println!("{}", stats.report());
    Ok(())
}
