//! Crate root module declarations for the Plum Checkers bot.
//!
//! This file exposes all top-level subsystems (game state, successor
//! generation, search, engines, the text game loop, and utility helpers) so
//! binaries, tests, and benchmarks can import stable module paths.

pub mod checkers_errors;

pub mod game_state {
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod jump_undo;
    pub mod legal_jumps;
    pub mod legal_steps;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod iterative_deepening;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_checkers_bot;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod play {
    pub mod checkers_game;
}

pub mod utils {
    pub mod layout_parser;
    pub mod match_harness;
    pub mod move_notation;
    pub mod render_board;
}
