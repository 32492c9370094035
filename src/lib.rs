//! # rpsls
//!
//! A Rock-Paper-Scissors-Lizard-Spock match engine.
//!
//! ## Design Principles
//!
//! 1. **No I/O in the engine**: Human answers come through an
//!    `InputSource`, results leave through a `MatchObserver`. Terminal
//!    prompts, pacing and screen handling belong to the front end.
//!
//! 2. **Strategies as data**: `PlayerKind` is a plain enum; each computer
//!    player owns a seeded `GameRng`, so a seed replays a whole match.
//!
//! 3. **Single-threaded**: One game is fully resolved before the next
//!    begins. The engine owns both players and the history.
//!
//! ## Modules
//!
//! - `core`: Moves and dominance, sides, RNG, configuration, errors
//! - `players`: Players and move-choice strategies
//! - `history`: Per-match move log and replay text
//! - `input`: Input collaborator contract and implementations
//! - `engine`: Match state machine, outcomes, display contract

pub mod core;
pub mod engine;
pub mod history;
pub mod input;
pub mod players;

// Re-export commonly used types
pub use crate::core::{
    beats, GameRng, MatchConfig, MatchError, Move, Result, Side, RULES,
};

pub use crate::engine::{
    GameOutcome, GameResult, MatchEngine, MatchObserver, MatchState, MatchSummary,
};

pub use crate::history::History;

pub use crate::input::{InputSource, LineInput, ScriptedInput, TokenSet};

pub use crate::players::{Player, PlayerKind};
