//! Display collaborator contract.

use super::outcome::{GameOutcome, MatchSummary};

/// Receives engine output for rendering.
///
/// The engine calls these synchronously and never waits on rendering;
/// pacing and formatting are entirely up to the implementor.
pub trait MatchObserver {
    /// A game has been resolved and scores updated.
    fn game_resolved(&mut self, _outcome: &GameOutcome) {}

    /// A player reached the victory threshold.
    fn match_decided(&mut self, _summary: &MatchSummary) {}
}

/// Discards everything.
impl MatchObserver for () {}

/// Collects everything; handy in tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    pub games: Vec<GameOutcome>,
    pub matches: Vec<MatchSummary>,
}

impl MatchObserver for RecordingObserver {
    fn game_resolved(&mut self, outcome: &GameOutcome) {
        self.games.push(outcome.clone());
    }

    fn match_decided(&mut self, summary: &MatchSummary) {
        self.matches.push(summary.clone());
    }
}
