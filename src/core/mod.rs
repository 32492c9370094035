//! Core engine types: moves, sides, RNG, configuration, errors.
//!
//! Everything above this module (players, history, the match engine)
//! is built from these pieces.

pub mod config;
pub mod error;
pub mod moves;
pub mod rng;
pub mod side;

pub use config::{MatchConfig, DEFAULT_SEED, DEFAULT_VICTORY_THRESHOLD};
pub use error::{MatchError, Result};
pub use moves::{beats, validate_dominance, Move, RULES};
pub use rng::GameRng;
pub use side::Side;
