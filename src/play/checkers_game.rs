//! Text game loop: a human plays the player side against the bot.
//!
//! The loop is generic over its input and output streams so the same code
//! drives stdin/stdout in the binary and in-memory buffers in tests.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::checkers_errors::CheckersResult;
use crate::engines::engine_checkers_bot::CheckersBot;
use crate::game_state::checkers_types::Side;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::generate_successors;
use crate::search::iterative_deepening::SearchConfig;
use crate::utils::layout_parser::generate_layout;
use crate::utils::move_notation::{find_matching_successor, format_move, parse_move};
use crate::utils::render_board::render_board;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    BotWins,
    PlayerWins,
    /// Input ended before the game was decided.
    Abandoned,
}

impl GameOutcome {
    fn won_by(side: Side) -> Self {
        match side {
            Side::Bot => GameOutcome::BotWins,
            Side::Player => GameOutcome::PlayerWins,
        }
    }
}

pub struct CheckersGame<R, W> {
    state: GameState,
    bot: CheckersBot,
    input: R,
    output: W,
    plies: u32,
}

impl<R: BufRead, W: Write> CheckersGame<R, W> {
    pub fn new(state: GameState, config: SearchConfig, input: R, output: W) -> Self {
        let bot = CheckersBot::new(state.clone(), config);
        Self::with_bot(state, bot, input, output)
    }

    pub fn with_bot(state: GameState, bot: CheckersBot, input: R, output: W) -> Self {
        Self {
            state,
            bot,
            input,
            output,
            plies: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn plies(&self) -> u32 {
        self.plies
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs turns until one side wins or the input runs dry.
    pub fn play(&mut self) -> CheckersResult<GameOutcome> {
        loop {
            write!(self.output, "\n{}", render_board(&self.state))?;

            if let Some(outcome) = self.decided_outcome() {
                self.announce(outcome)?;
                return Ok(outcome);
            }

            let successors = generate_successors(&self.state);
            if successors.is_empty() {
                let mover = self.state.side_to_move();
                writeln!(self.output, "{} no legal moves.", side_label(mover))?;
                let outcome = GameOutcome::won_by(mover.opposite());
                self.announce(outcome)?;
                return Ok(outcome);
            }

            let next = if self.state.bots_move {
                match self.bot_turn()? {
                    Some(next) => next,
                    None => {
                        writeln!(self.output, "The bot could not find a move.")?;
                        let outcome = GameOutcome::PlayerWins;
                        self.announce(outcome)?;
                        return Ok(outcome);
                    }
                }
            } else {
                match self.human_turn(&successors)? {
                    Some(next) => next,
                    None => {
                        self.announce(GameOutcome::Abandoned)?;
                        self.save_position()?;
                        return Ok(GameOutcome::Abandoned);
                    }
                }
            };

            self.state = next;
            self.plies += 1;
        }
    }

    fn decided_outcome(&self) -> Option<GameOutcome> {
        if !self.state.is_terminal() {
            return None;
        }
        Some(if self.state.bot_lost() {
            GameOutcome::PlayerWins
        } else {
            GameOutcome::BotWins
        })
    }

    fn bot_turn(&mut self) -> CheckersResult<Option<GameState>> {
        writeln!(self.output, "Bot is thinking...")?;
        self.output.flush()?;

        self.bot.update_state(self.state.clone());
        let result = self.bot.search();
        debug!(
            depth = result.reached_depth,
            nodes = result.nodes,
            elapsed_ms = result.elapsed.as_millis() as u64,
            "bot search finished"
        );

        if let Some(next) = &result.best_move {
            writeln!(self.output, "Bot moves: {}", format_move(&next.moves))?;
        }
        Ok(result.best_move)
    }

    /// Prompts until the typed path matches a legal successor. `None` on end
    /// of input.
    fn human_turn(&mut self, successors: &[GameState]) -> CheckersResult<Option<GameState>> {
        let mut line = String::new();
        loop {
            write!(self.output, "Your move: ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let text = line.trim();
            if text.is_empty() {
                continue;
            }

            let path = match parse_move(text, self.state.size()) {
                Ok(path) => path,
                Err(err) => {
                    writeln!(self.output, "Invalid input: {err}")?;
                    continue;
                }
            };

            match find_matching_successor(successors, &path) {
                Some(next) => return Ok(Some(next.clone())),
                None => {
                    writeln!(self.output, "Illegal move: {}", format_move(&path))?;
                    let hint = successors
                        .iter()
                        .map(|s| format_move(&s.moves))
                        .collect::<Vec<_>>()
                        .join(", ");
                    writeln!(self.output, "Legal moves: {hint}")?;
                }
            }
        }
    }

    /// Prints the position as a layout file so an abandoned game can be
    /// resumed with `--bot-first` unset.
    fn save_position(&mut self) -> CheckersResult<()> {
        writeln!(self.output, "Layout to resume from:")?;
        write!(self.output, "{}", generate_layout(&self.state))?;
        self.output.flush()?;
        Ok(())
    }

    fn announce(&mut self, outcome: GameOutcome) -> CheckersResult<()> {
        let message = match outcome {
            GameOutcome::BotWins => "The bot wins.",
            GameOutcome::PlayerWins => "You win!",
            GameOutcome::Abandoned => "Game abandoned.",
        };
        writeln!(self.output, "{message}")?;
        self.output.flush()?;
        info!(outcome = ?outcome, plies = self.plies, "game over");
        Ok(())
    }
}

fn side_label(side: Side) -> &'static str {
    match side {
        Side::Bot => "The bot has",
        Side::Player => "You have",
    }
}
