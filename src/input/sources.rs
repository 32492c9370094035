//! Concrete input sources.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use super::InputSource;

/// Line-oriented input over any reader/writer pair.
///
/// Prompts and rejection messages are written to `writer`, one per line.
/// Used with stdin/stdout by the terminal front end and with in-memory
/// buffers in tests.
pub struct LineInput<R, W> {
    reader: R,
    writer: W,
    retry_limit: Option<u32>,
    rejections: u32,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    /// Create an input source that retries forever.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            retry_limit: None,
            rejections: 0,
        }
    }

    /// Give up after `retries` rejected answers to a single prompt.
    #[must_use]
    pub fn with_retry_limit(mut self, retries: u32) -> Self {
        self.retry_limit = Some(retries);
        self
    }

    /// Total rejected answers so far.
    #[must_use]
    pub fn rejections(&self) -> u32 {
        self.rejections
    }

    /// Consume the source, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> InputSource for LineInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        writeln!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        // Bytes, not `read_line`: undecodable input is just a bad answer
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn reject(&mut self, message: &str) -> io::Result<()> {
        self.rejections += 1;
        writeln!(self.writer, "{message}")
    }

    fn retry_limit(&self) -> Option<u32> {
        self.retry_limit
    }
}

/// Canned answers, consumed in order.
///
/// Records every prompt and rejection so tests can assert on the
/// conversation. Closed once the answers run out.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    prompts: Vec<String>,
    rejections: Vec<String>,
    retry_limit: Option<u32>,
}

impl ScriptedInput {
    /// Create a source that answers with `answers`, then closes.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Give up after `retries` rejected answers to a single prompt.
    #[must_use]
    pub fn with_retry_limit(mut self, retries: u32) -> Self {
        self.retry_limit = Some(retries);
        self
    }

    /// Prompts shown so far.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Rejection messages shown so far.
    #[must_use]
    pub fn rejections(&self) -> &[String] {
        &self.rejections
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }

    fn reject(&mut self, message: &str) -> io::Result<()> {
        self.rejections.push(message.to_string());
        Ok(())
    }

    fn retry_limit(&self) -> Option<u32> {
        self.retry_limit
    }
}
