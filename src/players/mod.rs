//! Players and their move-choice strategies.
//!
//! A `Player` carries identity and score; its `PlayerKind` decides how a
//! move is picked. Computer kinds draw from a `GameRng` handed in at
//! construction, so a fixed seed replays the same match.

pub mod player;
pub mod strategy;

pub use player::Player;
pub use strategy::{ChoiceContext, PlayerKind, DEFAULT_COMPUTER_NAME, ROSTER};
