//! The match state machine.
//!
//! ```text
//! AwaitingGame ──play_game()──▶ AwaitingGame        (nobody at threshold)
//!      │
//!      └──────play_game()──▶ MatchDecided ──begin_rematch_decision()──▶ AwaitingRematchDecision
//!                                                                          │
//!                                    resolve_rematch(true) ◀───────────────┤
//!                                    (back to AwaitingGame)                │
//!                                    resolve_rematch(false) ──▶ Ended ◀────┘
//! ```

use crate::core::{validate_dominance, MatchConfig, MatchError, Result, Side};
use crate::history::History;
use crate::input::{InputSource, RetryBound, TokenSet, PLAY_AGAIN_PROMPT};
use crate::players::Player;

use super::observer::MatchObserver;
use super::outcome::{GameOutcome, GameResult, MatchState, MatchSummary};

/// Plays games between two players until one reaches the threshold.
///
/// Owns both players and the history exclusively; everything runs on the
/// caller's thread, one game at a time.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    config: MatchConfig,
    player: Player,
    opponent: Player,
    history: History,
    state: MatchState,
}

impl MatchEngine {
    /// Set up a match. Both players start at zero points.
    pub fn new(player: Player, opponent: Player, config: MatchConfig) -> Self {
        debug_assert!(validate_dominance().is_ok(), "dominance table is inconsistent");

        let mut engine = Self {
            config,
            player,
            opponent,
            history: History::new(),
            state: MatchState::AwaitingGame,
        };
        engine.reset_for_rematch();
        engine
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Points needed to win.
    #[must_use]
    pub fn threshold(&self) -> u32 {
        self.config.victory_threshold
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[must_use]
    pub fn opponent(&self) -> &Player {
        &self.opponent
    }

    /// The player sitting on `side`.
    #[must_use]
    pub fn seat(&self, side: Side) -> &Player {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn state(&self) -> MatchState {
        self.state
    }

    // === Games ===

    /// Play one game: both players choose, the winner (if any) scores,
    /// and the move pair is recorded.
    ///
    /// Only legal while `AwaitingGame`.
    pub fn play_game(&mut self, input: &mut dyn InputSource) -> Result<GameOutcome> {
        if self.state != MatchState::AwaitingGame {
            return Err(MatchError::InvariantViolation(format!(
                "game requested while {:?}",
                self.state
            )));
        }

        let mut input = RetryBound::new(input, self.config.max_input_retries);
        let player_move = self.player.choose(&mut input)?;
        let opponent_move = self.opponent.choose(&mut input)?;
        let result = GameResult::from_moves(player_move, opponent_move);

        self.player.record_result(result.is_winner(Side::Player));
        self.opponent.record_result(result.is_winner(Side::Opponent));
        self.history.append(player_move, opponent_move);

        let outcome = GameOutcome {
            game_number: self.history.len() as u32,
            player_move,
            opponent_move,
            result,
            player_points: self.player.points(),
            opponent_points: self.opponent.points(),
        };
        log::debug!(
            "game {}: {} {} vs {} {} -> {:?} ({}-{})",
            outcome.game_number,
            self.player.name(),
            player_move,
            self.opponent.name(),
            opponent_move,
            result,
            outcome.player_points,
            outcome.opponent_points,
        );

        if self.is_match_decided() {
            self.state = MatchState::MatchDecided;
            if let Some(winner) = self.match_winner() {
                log::info!("{} wins the match", winner.name());
            }
        }
        Ok(outcome)
    }

    /// Whether either player has reached the threshold.
    ///
    /// Points only ever grow by one per game, so reaching the threshold
    /// and passing it coincide; `>=` keeps that true if scoring changes.
    #[must_use]
    pub fn is_match_decided(&self) -> bool {
        self.winning_side().is_some()
    }

    /// The player at the threshold, or `None` while undecided.
    #[must_use]
    pub fn match_winner(&self) -> Option<&Player> {
        self.winning_side().map(|side| self.seat(side))
    }

    fn winning_side(&self) -> Option<Side> {
        let threshold = self.threshold();
        if self.player.points() >= threshold {
            Some(Side::Player)
        } else if self.opponent.points() >= threshold {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    /// Play games until the match is decided.
    pub fn run_match(&mut self, input: &mut dyn InputSource) -> Result<MatchSummary> {
        self.run_match_observed(input, &mut ())
    }

    /// `run_match`, reporting each game and the result to `observer`.
    pub fn run_match_observed(
        &mut self,
        input: &mut dyn InputSource,
        observer: &mut dyn MatchObserver,
    ) -> Result<MatchSummary> {
        while !self.is_match_decided() {
            let outcome = self.play_game(input)?;
            observer.game_resolved(&outcome);
        }

        let summary = self.summary()?;
        observer.match_decided(&summary);
        Ok(summary)
    }

    /// Final scores, winner and history of the decided match.
    pub fn summary(&self) -> Result<MatchSummary> {
        let winner = self.winning_side().ok_or_else(|| {
            MatchError::InvariantViolation("summary requested before the match was decided".into())
        })?;

        Ok(MatchSummary {
            threshold: self.threshold(),
            winner,
            winner_name: self.seat(winner).name().to_string(),
            player_name: self.player.name().to_string(),
            opponent_name: self.opponent.name().to_string(),
            player_points: self.player.points(),
            opponent_points: self.opponent.points(),
            games: self.history.clone(),
        })
    }

    // === Rematches ===

    /// Zero both scores and clear the history. Names and kinds stay.
    pub fn reset_for_rematch(&mut self) {
        self.player.reset_score();
        self.opponent.reset_score();
        self.history.clear();
        self.state = MatchState::AwaitingGame;
    }

    /// Move from `MatchDecided` to waiting for the "play again?" answer.
    pub fn begin_rematch_decision(&mut self) -> Result<()> {
        self.expect_state(MatchState::MatchDecided)?;
        self.state = MatchState::AwaitingRematchDecision;
        Ok(())
    }

    /// Apply the "play again?" answer.
    pub fn resolve_rematch(&mut self, play_again: bool) -> Result<()> {
        self.expect_state(MatchState::AwaitingRematchDecision)?;
        if play_again {
            log::info!("rematch between {} and {}", self.player.name(), self.opponent.name());
            self.reset_for_rematch();
        } else {
            self.state = MatchState::Ended;
        }
        Ok(())
    }

    /// Play matches until the human declines a rematch.
    ///
    /// Returns one summary per match played.
    pub fn play_session(
        &mut self,
        input: &mut dyn InputSource,
        observer: &mut dyn MatchObserver,
    ) -> Result<Vec<MatchSummary>> {
        let mut summaries = Vec::new();

        loop {
            summaries.push(self.run_match_observed(input, observer)?);
            self.begin_rematch_decision()?;

            let answer = RetryBound::new(&mut *input, self.config.max_input_retries)
                .read_validated_token(PLAY_AGAIN_PROMPT, &TokenSet::YES_NO)?;
            self.resolve_rematch(answer == "yes")?;
            if self.state == MatchState::Ended {
                break;
            }
        }

        Ok(summaries)
    }

    fn expect_state(&self, expected: MatchState) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(MatchError::InvariantViolation(format!(
                "expected {:?}, engine is {:?}",
                expected, self.state
            )))
        }
    }
}
