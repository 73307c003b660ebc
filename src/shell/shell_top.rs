//! Line-based command shell.
//!
//! Speaks the classic engine-protocol subset: position setup, depth and
//! time limits, human move input, and engine replies as `move …` lines
//! with `RESULT …` lines when the game ends. Commands dispatch through a
//! table of handler functions over the shell state.
//!
//! The shell owns the move history for `undo` and the 299-move draw
//! ceiling; the search core never sees either.

use std::io::{self, BufRead, Write};

use crate::board::board::{Board, Color};
use crate::board::checkers_move::Move;
use crate::engines::engine_alpha_beta::AlphaBetaEngine;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::search::alpha_beta::DEPTH_UNLIMITED;
use crate::utils::notation::{parse_move, NotationError};
use crate::utils::render_board::render_board;

const DRAW_MOVES_CEILING: usize = 299;
const DEFAULT_TIME_LIMIT_SECONDS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellFlow {
    Continue,
    Quit,
}

type Handler = fn(&mut Shell, &[&str], &mut dyn Write) -> io::Result<ShellFlow>;

const COMMANDS: &[(&str, &str, Handler)] = &[
    ("analyze", "search the position without moving", do_analyze),
    ("black", "set black to move", do_black),
    ("force", "enter force mode: accept moves for both sides", do_force),
    ("go", "leave force mode and let the engine move", do_go),
    ("help", "show this summary", do_help),
    ("history", "list the moves played so far", do_history),
    ("new", "start a new game", do_new),
    ("ping", "answer pong with the same argument", do_ping),
    ("print", "draw the board", do_print),
    ("quit", "leave the program", do_quit),
    ("rotate", "flip the printed board", do_rotate),
    ("sd", "set the search depth limit", do_sd),
    ("st", "set the search time limit in seconds", do_st),
    ("setboard", "load a position descriptor", do_setboard),
    ("undo", "take back the last move", do_undo),
    ("verbose", "toggle search progress output", do_verbose),
    ("white", "set white to move", do_white),
];

pub struct Shell {
    board: Board,
    history: Vec<Move>,
    engine: Box<dyn Engine>,
    rotate: bool,
    force_mode: bool,
    depth_limit: u16,
    time_limit_seconds: u64,
    verbose: bool,
}

impl Default for Shell {
    fn default() -> Self {
        Shell::new()
    }
}

impl Shell {
    pub fn new() -> Shell {
        Shell {
            board: Board::initial(),
            history: Vec::new(),
            engine: Box::new(AlphaBetaEngine::new(
                DEPTH_UNLIMITED,
                DEFAULT_TIME_LIMIT_SECONDS,
            )),
            rotate: false,
            force_mode: false,
            depth_limit: DEPTH_UNLIMITED,
            time_limit_seconds: DEFAULT_TIME_LIMIT_SECONDS,
            verbose: false,
        }
    }

    pub fn handle_command(&mut self, line: &str, out: &mut dyn Write) -> io::Result<ShellFlow> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(ShellFlow::Continue);
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        let (command, args) = (tokens[0], &tokens[1..]);

        if let Some((_, _, handler)) = COMMANDS.iter().find(|(name, _, _)| *name == command) {
            return handler(self, args, out);
        }

        // Anything starting with a square number is move input.
        if command.starts_with(|c: char| c.is_ascii_digit()) {
            return self.handle_move_input(command, out);
        }

        writeln!(out, "Error (unknown command): {command}")?;
        Ok(ShellFlow::Continue)
    }

    fn handle_move_input(&mut self, text: &str, out: &mut dyn Write) -> io::Result<ShellFlow> {
        match parse_move(&self.board, text) {
            Ok(mv) => {
                self.play_move(mv);
                if self.report_game_over(out)? {
                    return Ok(ShellFlow::Continue);
                }
                if !self.force_mode {
                    self.engine_moves(out)?;
                }
            }
            Err(NotationError::MalformedMove(token)) => {
                writeln!(out, "Error (malformed move): {token}")?;
            }
            Err(NotationError::IllegalMove(token)) => {
                writeln!(out, "Error (illegal move): {token}")?;
            }
        }
        Ok(ShellFlow::Continue)
    }

    fn play_move(&mut self, mv: Move) {
        self.board.apply_move(mv);
        self.history.push(mv);
    }

    fn engine_moves(&mut self, out: &mut dyn Write) -> io::Result<()> {
        let params = GoParams {
            depth: Some(self.depth_limit),
            seconds: Some(self.time_limit_seconds),
        };
        let result = self.engine.choose_move(&self.board, &params);
        let output = match result {
            Ok(output) => output,
            Err(err) => {
                writeln!(out, "Error (search failed): {err}")?;
                return Ok(());
            }
        };
        if self.verbose {
            for info in &output.info_lines {
                writeln!(out, "  {info}")?;
            }
        }
        match output.best_move() {
            Some(mv) => {
                self.play_move(mv);
                writeln!(out, "move {mv}")?;
                self.report_game_over(out)?;
            }
            None => {
                self.report_game_over(out)?;
            }
        }
        Ok(())
    }

    /// Report a finished game. Returns `true` when a RESULT line was
    /// written.
    fn report_game_over(&self, out: &mut dyn Write) -> io::Result<bool> {
        if self.board.side_to_move_has_lost() {
            match self.board.side_to_move {
                Color::White => writeln!(out, "RESULT 1-0 {{Black wins}}")?,
                Color::Black => writeln!(out, "RESULT 0-1 {{White wins}}")?,
            }
            return Ok(true);
        }
        if self.history.len() > DRAW_MOVES_CEILING {
            writeln!(out, "RESULT 1/2-1/2 {{Draw}}")?;
            return Ok(true);
        }
        Ok(false)
    }
}

fn do_analyze(shell: &mut Shell, _args: &[&str], out: &mut dyn Write) -> io::Result<ShellFlow> {
    let params = GoParams {
        depth: Some(DEPTH_UNLIMITED),
        seconds: Some(shell.time_limit_seconds),
    };
    match shell.engine.choose_move(&shell.board, &params) {
        Ok(output) => {
            for info in &output.info_lines {
                writeln!(out, "  {info}")?;
            }
        }
        Err(err) => writeln!(out, "Error (search failed): {err}")?,
    }
    Ok(ShellFlow::Continue)
}

fn do_black(shell: &mut Shell, _args: &[&str], _out: &mut dyn Write) -> io::Result<ShellFlow> {
    shell.board.side_to_move = Color::Black;
    Ok(ShellFlow::Continue)
}

fn do_white(shell: &mut Shell, _args: &[&str], _out: &mut dyn Write) -> io::Result<ShellFlow> {
    shell.board.side_to_move = Color::White;
    Ok(ShellFlow::Continue)
}

fn do_force(shell: &mut Shell, _args: &[&str], _out: &mut dyn Write) -> io::Result<ShellFlow> {
    shell.force_mode = true;
    Ok(ShellFlow::Continue)
}

fn do_go(shell: &mut Shell, _args: &[&str], out: &mut dyn Write) -> io::Result<ShellFlow> {
    shell.force_mode = false;
    if !shell.report_game_over(out)? {
        shell.engine_moves(out)?;
    }
    Ok(ShellFlow::Continue)
}

fn do_help(_shell: &mut Shell, _args: &[&str], out: &mut dyn Write) -> io::Result<ShellFlow> {
    writeln!(out, "Commands:")?;
    for (name, summary, _) in COMMANDS {
        writeln!(out, "  {name:<9} {summary}")?;
    }
    writeln!(out, "Moves are entered as 11-15 or 14x23 (chains: 9x18x27).")?;
    Ok(ShellFlow::Continue)
}

fn do_history(shell: &mut Shell, _args: &[&str], out: &mut dyn Write) -> io::Result<ShellFlow> {
    for (number, mv) in shell.history.iter().enumerate() {
        writeln!(out, "{:3}. {mv}", number + 1)?;
    }
    Ok(ShellFlow::Continue)
}

fn do_new(shell: &mut Shell, _args: &[&str], _out: &mut dyn Write) -> io::Result<ShellFlow> {
    shell.board = Board::initial();
    shell.history.clear();
    shell.force_mode = false;
    shell.engine.new_game();
    Ok(ShellFlow::Continue)
}

fn do_ping(_shell: &mut Shell, args: &[&str], out: &mut dyn Write) -> io::Result<ShellFlow> {
    match args.first() {
        Some(token) => writeln!(out, "pong {token}")?,
        None => writeln!(out, "pong")?,
    }
    Ok(ShellFlow::Continue)
}

fn do_print(shell: &mut Shell, _args: &[&str], out: &mut dyn Write) -> io::Result<ShellFlow> {
    writeln!(out, "{}", render_board(&shell.board, shell.rotate))?;
    Ok(ShellFlow::Continue)
}

fn do_quit(_shell: &mut Shell, _args: &[&str], _out: &mut dyn Write) -> io::Result<ShellFlow> {
    Ok(ShellFlow::Quit)
}

fn do_rotate(shell: &mut Shell, _args: &[&str], out: &mut dyn Write) -> io::Result<ShellFlow> {
    shell.rotate = !shell.rotate;
    do_print(shell, &[], out)
}

fn do_sd(shell: &mut Shell, args: &[&str], out: &mut dyn Write) -> io::Result<ShellFlow> {
    match args.first().and_then(|token| token.parse::<u16>().ok()) {
        Some(depth) if (1..=DEPTH_UNLIMITED).contains(&depth) => shell.depth_limit = depth,
        _ => writeln!(out, "Error (bad depth): sd takes 1..{DEPTH_UNLIMITED}")?,
    }
    Ok(ShellFlow::Continue)
}

fn do_st(shell: &mut Shell, args: &[&str], out: &mut dyn Write) -> io::Result<ShellFlow> {
    match args.first().and_then(|token| token.parse::<u64>().ok()) {
        Some(seconds) if seconds >= 1 => shell.time_limit_seconds = seconds,
        _ => writeln!(out, "Error (bad time): st takes a positive second count")?,
    }
    Ok(ShellFlow::Continue)
}

fn do_setboard(shell: &mut Shell, args: &[&str], out: &mut dyn Write) -> io::Result<ShellFlow> {
    let text = args.join("");
    match Board::from_descriptor(&text) {
        Ok(board) => {
            shell.board = board;
            shell.history.clear();
        }
        Err(err) => writeln!(out, "Error (malformed position): {err}")?,
    }
    Ok(ShellFlow::Continue)
}

fn do_undo(shell: &mut Shell, _args: &[&str], out: &mut dyn Write) -> io::Result<ShellFlow> {
    match shell.history.pop() {
        Some(mv) => shell.board.undo_move(mv),
        None => writeln!(out, "Error (nothing to undo): history is empty")?,
    }
    Ok(ShellFlow::Continue)
}

fn do_verbose(shell: &mut Shell, _args: &[&str], _out: &mut dyn Write) -> io::Result<ShellFlow> {
    shell.verbose = !shell.verbose;
    Ok(ShellFlow::Continue)
}

/// Read commands from stdin until `quit` or end of input.
pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut shell = Shell::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let flow = shell.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if flow == ShellFlow::Quit {
            break;
        }
    }

    Ok(())
}
