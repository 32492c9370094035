//! The five RPSLS moves and their dominance relation.
//!
//! ## Dominance
//!
//! Each move beats exactly two others and loses to exactly two:
//!
//! | Move     | Beats            |
//! |----------|------------------|
//! | Rock     | Scissors, Lizard |
//! | Paper    | Rock, Spock      |
//! | Scissors | Paper, Lizard    |
//! | Lizard   | Spock, Paper     |
//! | Spock    | Rock, Scissors   |
//!
//! A move never beats itself.
//!
//! ```
//! use rpsls::core::{beats, Move};
//!
//! assert!(beats(Move::Rock, Move::Scissors));
//! assert!(!beats(Move::Scissors, Move::Rock));
//! assert!(!beats(Move::Spock, Move::Spock));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{MatchError, Result};

/// Rules paragraph shown before the first match.
pub const RULES: &str = "\
Here's what beats what in RPSLS:
Scissors cuts Paper covers Rock crushes
Lizard poisons Spock smashes Scissors
decapitates Lizard eats Paper disproves
Spock vaporizes Rock crushes Scissors.";

/// One of the five RPSLS moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

/// Winning pairs with the verb used in the rules text.
const VICTORIES: [(Move, Move, &str); 10] = [
    (Move::Scissors, Move::Paper, "cuts"),
    (Move::Paper, Move::Rock, "covers"),
    (Move::Rock, Move::Lizard, "crushes"),
    (Move::Lizard, Move::Spock, "poisons"),
    (Move::Spock, Move::Scissors, "smashes"),
    (Move::Scissors, Move::Lizard, "decapitates"),
    (Move::Lizard, Move::Paper, "eats"),
    (Move::Paper, Move::Spock, "disproves"),
    (Move::Spock, Move::Rock, "vaporizes"),
    (Move::Rock, Move::Scissors, "crushes"),
];

impl Move {
    /// All moves in table order.
    pub const ALL: [Move; 5] = [
        Move::Rock,
        Move::Paper,
        Move::Scissors,
        Move::Lizard,
        Move::Spock,
    ];

    /// The two moves this move defeats.
    #[must_use]
    pub const fn victims(self) -> [Move; 2] {
        match self {
            Move::Rock => [Move::Scissors, Move::Lizard],
            Move::Paper => [Move::Rock, Move::Spock],
            Move::Scissors => [Move::Paper, Move::Lizard],
            Move::Lizard => [Move::Spock, Move::Paper],
            Move::Spock => [Move::Rock, Move::Scissors],
        }
    }

    /// Whether this move defeats `other`.
    #[must_use]
    pub fn beats(self, other: Move) -> bool {
        self.victims().contains(&other)
    }

    /// Lower-case full name, as typed by a player.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Lizard => "lizard",
            Move::Spock => "spock",
        }
    }

    /// Verb describing how this move defeats `other`, e.g. "vaporizes".
    ///
    /// Returns `None` unless `self` beats `other`.
    #[must_use]
    pub fn verb_against(self, other: Move) -> Option<&'static str> {
        VICTORIES
            .iter()
            .find(|(winner, loser, _)| *winner == self && *loser == other)
            .map(|(_, _, verb)| *verb)
    }

    /// Map an input token (`"r"`, `"rock"`, `"sp"`, ...) to a move.
    ///
    /// Matching ignores surrounding whitespace and case.
    pub fn from_token(token: &str) -> Result<Move> {
        match token.trim().to_ascii_lowercase().as_str() {
            "r" | "rock" => Ok(Move::Rock),
            "p" | "paper" => Ok(Move::Paper),
            "s" | "scissors" => Ok(Move::Scissors),
            "l" | "lizard" => Ok(Move::Lizard),
            "sp" | "spock" => Ok(Move::Spock),
            _ => Err(MatchError::InvalidMoveToken(token.to_string())),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self> {
        Move::from_token(s)
    }
}

/// Whether move `a` defeats move `b`.
#[must_use]
pub fn beats(a: Move, b: Move) -> bool {
    a.beats(b)
}

/// Check that the dominance table is asymmetric and balanced.
///
/// Every move must beat exactly two others, lose to exactly two, and
/// never beat itself.
pub fn validate_dominance() -> Result<()> {
    for a in Move::ALL {
        if a.beats(a) {
            return Err(MatchError::InvariantViolation(format!("{a} beats itself")));
        }
        for b in Move::ALL {
            if a != b && a.beats(b) == b.beats(a) {
                return Err(MatchError::InvariantViolation(format!(
                    "{a} and {b} do not have exactly one winner"
                )));
            }
        }
        let wins = Move::ALL.iter().filter(|&&b| a.beats(b)).count();
        let losses = Move::ALL.iter().filter(|&&b| b.beats(a)).count();
        if wins != 2 || losses != 2 {
            return Err(MatchError::InvariantViolation(format!(
                "{a} wins {wins} and loses {losses}"
            )));
        }
    }
    Ok(())
}
