//! A match participant: name, current move, and score.

use crate::core::{GameRng, Move, Result};
use crate::input::InputSource;

use super::strategy::{ChoiceContext, PlayerKind, DEFAULT_COMPUTER_NAME, ROSTER};

/// One of the two players in a match.
///
/// Name and kind are fixed for the life of the player. The move is
/// overwritten every game; points reset between matches.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    kind: PlayerKind,
    rng: GameRng,
    current_move: Option<Move>,
    points: u32,
}

impl Player {
    /// Create a player with its own random stream.
    pub fn new(name: impl Into<String>, kind: PlayerKind, rng: GameRng) -> Self {
        let name = name.into();
        assert!(!name.trim().is_empty(), "Player name must not be empty");

        Self {
            name,
            kind,
            rng,
            current_move: None,
            points: 0,
        }
    }

    /// Create a human player.
    pub fn human(name: impl Into<String>) -> Self {
        // Humans never draw from their stream.
        Self::new(name, PlayerKind::Human, GameRng::new(0))
    }

    /// Create the default uniform-random computer.
    pub fn computer(rng: &GameRng) -> Self {
        Self::new(
            DEFAULT_COMPUTER_NAME,
            PlayerKind::RandomBot,
            rng.for_context(DEFAULT_COMPUTER_NAME),
        )
    }

    /// Create a named roster personality, or `None` for an unknown name.
    pub fn personality(name: &str, rng: &GameRng) -> Option<Self> {
        PlayerKind::personality(name).map(|kind| Self::new(name, kind, rng.for_context(name)))
    }

    /// Draw one roster personality uniformly at random.
    pub fn from_roster(rng: &GameRng) -> Self {
        let mut picker = rng.for_context("roster");
        let name = picker.choose(&ROSTER).copied().unwrap_or(ROSTER[0]);
        // ROSTER only holds known personalities.
        Self::personality(name, rng).unwrap_or_else(|| Self::computer(rng))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> &PlayerKind {
        &self.kind
    }

    /// Move chosen in the latest game, `None` before the first.
    #[must_use]
    pub fn current_move(&self) -> Option<Move> {
        self.current_move
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Choose this game's move and remember it.
    pub fn choose(&mut self, input: &mut dyn InputSource) -> Result<Move> {
        let mut ctx = ChoiceContext {
            rng: &mut self.rng,
            input,
        };
        let chosen = self.kind.choose(&mut ctx)?;
        if !self.kind.is_human() {
            log::debug!("{} chose {}", self.name, chosen);
        }
        self.current_move = Some(chosen);
        Ok(chosen)
    }

    /// Add a point if this player won the game.
    pub fn record_result(&mut self, won: bool) {
        if won {
            self.points += 1;
        }
    }

    /// Back to zero points for a new match.
    pub fn reset_score(&mut self) {
        self.points = 0;
    }
}
