//! Values the engine hands to its display collaborator.

use serde::{Deserialize, Serialize};

use crate::core::{Move, Side};
use crate::history::History;

/// Lifecycle of a match engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchState {
    /// Games are being played; nobody has reached the threshold.
    AwaitingGame,
    /// A player reached the threshold.
    MatchDecided,
    /// Waiting for the "play again?" answer.
    AwaitingRematchDecision,
    /// The player declined a rematch.
    Ended,
}

/// Result of a single game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One side won the point.
    Winner(Side),
    /// Same move on both sides.
    Draw,
}

impl GameResult {
    /// Resolve a game from both moves.
    #[must_use]
    pub fn from_moves(player_move: Move, opponent_move: Move) -> Self {
        if player_move.beats(opponent_move) {
            GameResult::Winner(Side::Player)
        } else if opponent_move.beats(player_move) {
            GameResult::Winner(Side::Opponent)
        } else {
            GameResult::Draw
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }
}

/// Everything a front end needs to show after one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// 1-based number of the game within the match.
    pub game_number: u32,
    pub player_move: Move,
    pub opponent_move: Move,
    pub result: GameResult,
    /// Points after this game.
    pub player_points: u32,
    pub opponent_points: u32,
}

/// Final state of a decided match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub threshold: u32,
    pub winner: Side,
    pub winner_name: String,
    pub player_name: String,
    pub opponent_name: String,
    pub player_points: u32,
    pub opponent_points: u32,
    /// Every game of the match, ties included.
    pub games: History,
}

impl MatchSummary {
    /// Points of one side.
    #[must_use]
    pub fn points(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player_points,
            Side::Opponent => self.opponent_points,
        }
    }

    /// The history replay with this match's names filled in.
    #[must_use]
    pub fn replay(&self) -> Vec<String> {
        self.games.replay(&self.player_name, &self.opponent_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_from_moves() {
        assert_eq!(
            GameResult::from_moves(Move::Rock, Move::Scissors),
            GameResult::Winner(Side::Player)
        );
        assert_eq!(
            GameResult::from_moves(Move::Rock, Move::Spock),
            GameResult::Winner(Side::Opponent)
        );
        assert_eq!(GameResult::from_moves(Move::Lizard, Move::Lizard), GameResult::Draw);
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Side::Opponent);
        assert!(result.is_winner(Side::Opponent));
        assert!(!result.is_winner(Side::Player));

        assert!(!GameResult::Draw.is_winner(Side::Player));
        assert!(!GameResult::Draw.is_winner(Side::Opponent));
    }

    #[test]
    fn test_summary_points_and_replay() {
        let mut games = History::new();
        games.append(Move::Paper, Move::Rock);

        let summary = MatchSummary {
            threshold: 1,
            winner: Side::Player,
            winner_name: "Ada".into(),
            player_name: "Ada".into(),
            opponent_name: "R2D2".into(),
            player_points: 1,
            opponent_points: 0,
            games,
        };

        assert_eq!(summary.points(Side::Player), 1);
        assert_eq!(summary.points(Side::Opponent), 0);
        assert_eq!(
            summary.replay(),
            vec!["In the 1st game Ada chose paper and R2D2 chose rock."]
        );
    }
}
