//! Interactive yes/no confirmation
//!
//! A small state machine: the prompt waits for a line, accepts or declines
//! on a recognized token, and re-prompts on anything else. An empty reply
//! takes the default (yes). Closing the input declines.

use crate::error::Result;
use std::io::{BufRead, Write};

/// Outcome of a confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Proceed with the item
    Accept,
    /// Skip the item
    Decline,
}

impl Confirmation {
    /// Whether the reply accepted
    pub fn is_accept(&self) -> bool {
        matches!(self, Self::Accept)
    }
}

/// Prompt state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptState {
    /// Waiting for a reply
    AwaitingInput,
    /// Finished with an outcome
    Done(Confirmation),
}

impl PromptState {
    /// Advance on one reply line
    pub fn on_reply(self, reply: &str) -> Self {
        match self {
            Self::Done(_) => self,
            Self::AwaitingInput => match parse_reply(reply) {
                Some(outcome) => Self::Done(outcome),
                None => Self::AwaitingInput,
            },
        }
    }
}

/// Recognize a reply token, case-insensitively
pub fn parse_reply(reply: &str) -> Option<Confirmation> {
    match reply.trim().to_ascii_lowercase().as_str() {
        "" | "y" | "yes" => Some(Confirmation::Accept),
        "n" | "no" => Some(Confirmation::Decline),
        _ => None,
    }
}

/// Source of yes/no decisions
pub trait Confirmer {
    /// Ask `question` and return the decision
    fn confirm(&mut self, question: &str) -> Result<Confirmation>;
}

/// Accepts everything without asking
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysAccept;

impl Confirmer for AlwaysAccept {
    fn confirm(&mut self, _question: &str) -> Result<Confirmation> {
        Ok(Confirmation::Accept)
    }
}

/// Asks yes/no questions over a reader/writer pair
#[derive(Debug)]
pub struct ConfirmPrompt<R, W> {
    input: R,
    output: W,
}

impl ConfirmPrompt<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Prompt on the terminal
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> ConfirmPrompt<R, W> {
    /// Create a prompt over `input` and `output`
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask `question` until a recognized reply arrives
    pub fn ask(&mut self, question: &str) -> Result<Confirmation> {
        let mut state = PromptState::AwaitingInput;
        let mut line = String::new();

        loop {
            if let PromptState::Done(outcome) = state {
                return Ok(outcome);
            }

            write!(self.output, "{} ", question)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                tracing::warn!("Input closed at prompt, declining");
                return Ok(Confirmation::Decline);
            }
            state = state.on_reply(&line);
        }
    }
}

impl<R: BufRead, W: Write> Confirmer for ConfirmPrompt<R, W> {
    fn confirm(&mut self, question: &str) -> Result<Confirmation> {
        self.ask(question)
    }
}
