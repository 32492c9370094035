//! Match engine: the game loop, its outputs, and the display contract.
//!
//! Each game the engine asks both players for a move, resolves the
//! winner through the dominance table, updates scores and history, and
//! checks the victory threshold. Ties score nothing but are still logged.
//!
//! ```
//! use rpsls::core::{GameRng, MatchConfig, Move, Side};
//! use rpsls::engine::MatchEngine;
//! use rpsls::input::ScriptedInput;
//! use rpsls::players::{Player, PlayerKind};
//!
//! let rng = GameRng::new(42);
//! let spock = Player::new("Spock fan", PlayerKind::ScriptedBot(Move::Spock), rng.for_context("a"));
//! let rocky = Player::new("Rocky", PlayerKind::ScriptedBot(Move::Rock), rng.for_context("b"));
//!
//! let mut engine = MatchEngine::new(spock, rocky, MatchConfig::default());
//! let summary = engine.run_match(&mut ScriptedInput::default()).unwrap();
//!
//! assert_eq!(summary.winner, Side::Player);
//! assert_eq!((summary.player_points, summary.opponent_points), (3, 0));
//! ```

mod match_engine;
mod observer;
mod outcome;

pub use match_engine::MatchEngine;
pub use observer::{MatchObserver, RecordingObserver};
pub use outcome::{GameOutcome, GameResult, MatchState, MatchSummary};
