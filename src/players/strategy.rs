//! How each kind of player picks a move.
//!
//! ## Kinds
//!
//! - `Human`: asks the input source
//! - `ScriptedBot(m)`: always plays `m`
//! - `MixedBot(m, p)`: plays `m` with probability `p`, otherwise uniform
//! - `RandomBot`: uniform over all five moves
//!
//! ## Roster
//!
//! Two named personalities can be drawn as opponents:
//! "R2D2" (always Rock) and "C3PO" (Scissors half the time).

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Move, Result};
use crate::input::{InputSource, TokenSet, MOVE_PROMPT};

/// Names of the roster personalities.
pub const ROSTER: [&str; 2] = ["R2D2", "C3PO"];

/// Name given to the default uniform-random computer.
pub const DEFAULT_COMPUTER_NAME: &str = "Computer";

/// Move-choice strategy of a player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Interactive player answering through an `InputSource`.
    Human,
    /// Always plays the same move.
    ScriptedBot(Move),
    /// Plays the fixed move with the given probability, otherwise uniform.
    MixedBot(Move, f64),
    /// Uniform over all five moves.
    RandomBot,
}

/// Everything a strategy may draw on when choosing.
pub struct ChoiceContext<'a> {
    /// The player's own random stream.
    pub rng: &'a mut GameRng,
    /// Where human answers come from.
    pub input: &'a mut dyn InputSource,
}

impl PlayerKind {
    /// The personality behind a roster name, if any.
    #[must_use]
    pub fn personality(name: &str) -> Option<PlayerKind> {
        match name {
            "R2D2" => Some(PlayerKind::ScriptedBot(Move::Rock)),
            "C3PO" => Some(PlayerKind::MixedBot(Move::Scissors, 0.5)),
            _ => None,
        }
    }

    /// Whether this kind needs a human at the keyboard.
    #[must_use]
    pub fn is_human(&self) -> bool {
        matches!(self, PlayerKind::Human)
    }

    /// Pick this round's move.
    ///
    /// Only `Human` can fail, when the input source gives up.
    pub fn choose(&self, ctx: &mut ChoiceContext<'_>) -> Result<Move> {
        match self {
            PlayerKind::Human => {
                let token = ctx.input.read_validated_token(MOVE_PROMPT, &TokenSet::MOVES)?;
                Move::from_token(token)
            }
            PlayerKind::ScriptedBot(fixed) => Ok(*fixed),
            PlayerKind::MixedBot(fixed, probability) => {
                if ctx.rng.gen_bool(*probability) {
                    Ok(*fixed)
                } else {
                    Ok(uniform(ctx.rng))
                }
            }
            PlayerKind::RandomBot => Ok(uniform(ctx.rng)),
        }
    }
}

fn uniform(rng: &mut GameRng) -> Move {
    Move::ALL[rng.gen_range_usize(0..Move::ALL.len())]
}
