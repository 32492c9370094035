//! Accepted answers for each prompt.
//!
//! A `TokenSet` pairs short tokens with their full names. Players may type
//! either; both resolve to the full name.

/// Move prompt shown to a human player.
pub const MOVE_PROMPT: &str = "Choose a move: [R]ock, [P]aper, [S]cissors, [L]izard, or [Sp]ock";

/// Question asked after each match.
pub const PLAY_AGAIN_PROMPT: &str = "Would you like to play again? Please enter [Y]es or [N]o.";

/// Question asked once at setup.
pub const NAME_PROMPT: &str = "What's your name?";

/// Shown when a name is blank.
pub const NAME_REJECTION: &str = "Sorry, please enter a valid name.";

/// A closed set of accepted answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSet {
    /// (short, full) pairs.
    pairs: &'static [(&'static str, &'static str)],
    /// Message shown when an answer is not in the set.
    rejection: &'static str,
}

impl TokenSet {
    /// `r, p, s, l, sp` or the full move names.
    pub const MOVES: TokenSet = TokenSet {
        pairs: &[
            ("r", "rock"),
            ("p", "paper"),
            ("s", "scissors"),
            ("l", "lizard"),
            ("sp", "spock"),
        ],
        rejection: "Sorry, please enter a valid choice.",
    };

    /// `y, n, yes, no`.
    pub const YES_NO: TokenSet = TokenSet {
        pairs: &[("y", "yes"), ("n", "no")],
        rejection: "Sorry, answer must be [Y]es or [N]o.",
    };

    /// Resolve raw input to a full name.
    ///
    /// Input is trimmed and lower-cased first. Returns `None` when the
    /// answer is not part of the set.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> Option<&'static str> {
        let answer = raw.trim().to_ascii_lowercase();
        self.pairs
            .iter()
            .find(|(short, full)| *short == answer || *full == answer)
            .map(|(_, full)| *full)
    }

    /// Message shown after a rejected answer.
    #[must_use]
    pub fn rejection(&self) -> &'static str {
        self.rejection
    }

    /// Every accepted token, short forms first.
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pairs
            .iter()
            .map(|(short, _)| *short)
            .chain(self.pairs.iter().map(|(_, full)| *full))
    }
}
