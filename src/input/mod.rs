//! Input collaborator contract.
//!
//! The engine never talks to a terminal. Whenever a human has to answer
//! something (a move, a name, "play again?") it asks an `InputSource`,
//! which blocks until it has a valid answer.
//!
//! Implementors only supply raw line reading and a way to show a
//! rejection; validation and retry live in the provided methods:
//!
//! - invalid answers are rejected and the prompt is repeated
//! - `retry_limit() == None` repeats forever
//! - a closed source (end of input) fails with `InputExhausted`
//!
//! ## Implementations
//!
//! - `LineInput`: any `BufRead` + `Write` pair (stdin/stdout, buffers)
//! - `ScriptedInput`: canned answers, records prompts for assertions
//! - `RetryBound`: caps rejections on top of another source

mod sources;
mod tokens;

use std::io;

use crate::core::{MatchError, Result};

pub use sources::{LineInput, ScriptedInput};
pub use tokens::{TokenSet, MOVE_PROMPT, NAME_PROMPT, NAME_REJECTION, PLAY_AGAIN_PROMPT};

/// Blocking source of answers from a human.
pub trait InputSource {
    /// Show `prompt` and read one raw line.
    ///
    /// Returns `Ok(None)` once the source is closed.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Tell the user their last answer was not accepted.
    fn reject(&mut self, message: &str) -> io::Result<()>;

    /// Rejected answers tolerated per prompt. `None` retries forever.
    fn retry_limit(&self) -> Option<u32> {
        None
    }

    /// Prompt until the answer belongs to `valid`; returns its full name.
    fn read_validated_token(&mut self, prompt: &str, valid: &TokenSet) -> Result<&'static str> {
        read_until(self, prompt, valid.rejection(), |line| valid.resolve(line))
    }

    /// Prompt until a non-blank name is given.
    fn read_name(&mut self) -> Result<String> {
        read_until(self, NAME_PROMPT, NAME_REJECTION, |line| {
            let name = line.trim();
            (!name.is_empty()).then(|| name.to_string())
        })
    }
}

/// Another source with an extra cap on rejected answers.
///
/// The tighter of the two limits applies. The engine wraps its caller's
/// source in one of these so `MatchConfig::max_input_retries` holds
/// whatever source is passed in.
pub struct RetryBound<'a> {
    inner: &'a mut dyn InputSource,
    limit: Option<u32>,
}

impl<'a> RetryBound<'a> {
    pub fn new(inner: &'a mut dyn InputSource, limit: Option<u32>) -> Self {
        Self { inner, limit }
    }
}

impl InputSource for RetryBound<'_> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.inner.read_line(prompt)
    }

    fn reject(&mut self, message: &str) -> io::Result<()> {
        self.inner.reject(message)
    }

    fn retry_limit(&self) -> Option<u32> {
        match (self.inner.retry_limit(), self.limit) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

fn read_until<S, T>(
    source: &mut S,
    prompt: &str,
    rejection: &str,
    mut parse: impl FnMut(&str) -> Option<T>,
) -> Result<T>
where
    S: InputSource + ?Sized,
{
    let mut attempts = 0u32;
    loop {
        let Some(line) = source.read_line(prompt)? else {
            return Err(MatchError::InputExhausted { attempts });
        };
        attempts += 1;

        if let Some(value) = parse(&line) {
            return Ok(value);
        }

        log::warn!("rejected answer {:?} to {:?}", line.trim(), prompt);
        if source.retry_limit().is_some_and(|limit| attempts > limit) {
            return Err(MatchError::InputExhausted { attempts });
        }
        source.reject(rejection)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_valid_answer_wins() {
        let mut input = ScriptedInput::new(["p", "rock"]);
        let token = input.read_validated_token(MOVE_PROMPT, &TokenSet::MOVES).unwrap();

        assert_eq!(token, "paper");
        assert_eq!(input.prompts().len(), 1);
        assert!(input.rejections().is_empty());
    }

    #[test]
    fn test_invalid_answer_reprompts() {
        let mut input = ScriptedInput::new(["xyz", "rock"]);
        let token = input.read_validated_token(MOVE_PROMPT, &TokenSet::MOVES).unwrap();

        assert_eq!(token, "rock");
        assert_eq!(input.prompts(), [MOVE_PROMPT, MOVE_PROMPT]);
        assert_eq!(input.rejections(), ["Sorry, please enter a valid choice."]);
    }

    #[test]
    fn test_closed_source_is_exhausted() {
        let mut input = ScriptedInput::new(["bogus"]);
        let err = input
            .read_validated_token(PLAY_AGAIN_PROMPT, &TokenSet::YES_NO)
            .unwrap_err();

        assert!(matches!(err, MatchError::InputExhausted { attempts: 1 }));
    }

    #[test]
    fn test_retry_limit() {
        let mut input = ScriptedInput::new(["a", "b", "c", "rock"]).with_retry_limit(1);
        let err = input
            .read_validated_token(MOVE_PROMPT, &TokenSet::MOVES)
            .unwrap_err();

        assert!(matches!(err, MatchError::InputExhausted { attempts: 2 }));
        assert_eq!(input.rejections().len(), 1);
    }

    #[test]
    fn test_zero_retry_limit_fails_on_first_rejection() {
        let mut input = ScriptedInput::new(["nope", "yes"]).with_retry_limit(0);
        let err = input
            .read_validated_token(PLAY_AGAIN_PROMPT, &TokenSet::YES_NO)
            .unwrap_err();

        assert!(matches!(err, MatchError::InputExhausted { attempts: 1 }));
        assert!(input.rejections().is_empty());
    }

    #[test]
    fn test_retry_bound_takes_tighter_limit() {
        let mut loose = ScriptedInput::new(["a", "b", "rock"]).with_retry_limit(5);
        let mut bounded = RetryBound::new(&mut loose, Some(1));
        assert_eq!(bounded.retry_limit(), Some(1));
        let err = bounded
            .read_validated_token(MOVE_PROMPT, &TokenSet::MOVES)
            .unwrap_err();
        assert!(matches!(err, MatchError::InputExhausted { attempts: 2 }));

        let mut tight = ScriptedInput::default().with_retry_limit(0);
        assert_eq!(RetryBound::new(&mut tight, Some(3)).retry_limit(), Some(0));

        let mut open = ScriptedInput::default();
        assert_eq!(RetryBound::new(&mut open, None).retry_limit(), None);
    }

    #[test]
    fn test_read_name_skips_blank() {
        let mut input = ScriptedInput::new(["", "   ", "  Ada "]);
        let name = input.read_name().unwrap();

        assert_eq!(name, "Ada");
        assert_eq!(input.rejections(), [NAME_REJECTION, NAME_REJECTION]);
    }
}
