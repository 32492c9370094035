//! Append-only log of the moves played in the current match.
//!
//! One `(player_move, opponent_move)` pair per game, ties included, in
//! play order. Backed by `im::Vector` so a finished match can hand its
//! history to a summary without copying.
//!
//! ```
//! use rpsls::core::Move;
//! use rpsls::history::History;
//!
//! let mut history = History::new();
//! history.append(Move::Rock, Move::Scissors);
//!
//! let lines = history.replay("Ada", "R2D2");
//! assert_eq!(lines[0], "In the 1st game Ada chose rock and R2D2 chose scissors.");
//! ```

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Move, Side};

/// Ordered move pairs for one match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    games: Vector<(Move, Move)>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finished game.
    pub fn append(&mut self, player_move: Move, opponent_move: Move) {
        self.games.push_back((player_move, opponent_move));
    }

    /// All games so far, oldest first.
    #[must_use]
    pub fn sequence(&self) -> &Vector<(Move, Move)> {
        &self.games
    }

    /// Number of games recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Forget every game. Called when a new match starts.
    pub fn clear(&mut self) {
        self.games.clear();
    }

    /// How often each move was played by one side.
    #[must_use]
    pub fn tally(&self, side: Side) -> FxHashMap<Move, u32> {
        let mut counts = FxHashMap::default();
        for &(player_move, opponent_move) in &self.games {
            let m = match side {
                Side::Player => player_move,
                Side::Opponent => opponent_move,
            };
            *counts.entry(m).or_insert(0) += 1;
        }
        counts
    }

    /// One sentence per game, numbered with ordinals from 1.
    #[must_use]
    pub fn replay(&self, player_name: &str, opponent_name: &str) -> Vec<String> {
        self.games
            .iter()
            .enumerate()
            .map(|(i, (player_move, opponent_move))| {
                let n = i + 1;
                format!(
                    "In the {n}{} game {player_name} chose {player_move} and {opponent_name} chose {opponent_move}.",
                    ordinal_suffix(n)
                )
            })
            .collect()
    }
}

/// English ordinal suffix: 1st, 2nd, 3rd, 4th, 11th, 21st, 111th, ...
#[must_use]
pub fn ordinal_suffix(n: usize) -> &'static str {
    if matches!(n % 100, 11..=13) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_order() {
        let mut history = History::new();
        history.append(Move::Rock, Move::Paper);
        history.append(Move::Spock, Move::Spock);
        history.append(Move::Lizard, Move::Scissors);

        let games: Vec<_> = history.sequence().iter().copied().collect();
        assert_eq!(
            games,
            vec![
                (Move::Rock, Move::Paper),
                (Move::Spock, Move::Spock),
                (Move::Lizard, Move::Scissors),
            ]
        );
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.append(Move::Rock, Move::Paper);
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut history = History::new();
        history.append(Move::Rock, Move::Paper);
        let snapshot = history.clone();
        history.clear();

        assert_eq!(snapshot.len(), 1);
        assert!(history.is_empty());
    }

    #[test]
    fn test_ordinal_suffix() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (10, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (101, "st"),
            (111, "th"),
            (112, "th"),
        ];
        for (n, suffix) in cases {
            assert_eq!(ordinal_suffix(n), suffix, "{n}");
        }
    }

    #[test]
    fn test_replay() {
        let mut history = History::new();
        history.append(Move::Rock, Move::Scissors);
        history.append(Move::Paper, Move::Paper);

        let lines = history.replay("Ada", "C3PO");
        assert_eq!(
            lines,
            vec![
                "In the 1st game Ada chose rock and C3PO chose scissors.",
                "In the 2nd game Ada chose paper and C3PO chose paper.",
            ]
        );
    }

    #[test]
    fn test_tally() {
        let mut history = History::new();
        history.append(Move::Rock, Move::Scissors);
        history.append(Move::Rock, Move::Paper);
        history.append(Move::Spock, Move::Scissors);

        let player = history.tally(Side::Player);
        assert_eq!(player.get(&Move::Rock), Some(&2));
        assert_eq!(player.get(&Move::Spock), Some(&1));
        assert_eq!(player.get(&Move::Lizard), None);

        let opponent = history.tally(Side::Opponent);
        assert_eq!(opponent.get(&Move::Scissors), Some(&2));
        assert_eq!(opponent.get(&Move::Paper), Some(&1));
    }

    #[test]
    fn test_serialization() {
        let mut history = History::new();
        history.append(Move::Lizard, Move::Spock);

        let json = serde_json::to_string(&history).unwrap();
        let back: History = serde_json::from_str(&json).unwrap();
        assert_eq!(history, back);
    }
}
