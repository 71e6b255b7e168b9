use rust_decimal::Decimal;

use crate::conversation::script;
use crate::quote::{Mode, QuoteItem};

/// Who authored a message in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Ai,
    User,
}

/// A single transcript entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
}

impl Message {
    pub fn ai(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Ai,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }
}

/// The complete conversation state. Mutated only through
/// [`apply`](Conversation::apply); everything else is read access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub(super) messages: Vec<Message>,
    pub(super) step: usize,
    pub(super) mode: Mode,
    pub(super) items: Vec<QuoteItem>,
    pub(super) input: String,
}

impl Conversation {
    /// Starts a conversation in `mode` with the greeting already on the
    /// transcript.
    pub fn new(mode: Mode) -> Self {
        Self {
            messages: vec![Message::ai(script::GREETING)],
            step: 0,
            mode,
            items: Vec::new(),
            input: String::new(),
        }
    }

    /// The transcript so far, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of answers submitted so far.
    pub const fn step(&self) -> usize {
        self.step
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// The current quote line items. Empty until a quote arrives.
    pub fn items(&self) -> &[QuoteItem] {
        &self.items
    }

    /// The pending input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether every scripted question has been answered.
    pub const fn is_complete(&self) -> bool {
        self.step >= script::QUESTIONS.len()
    }

    /// Subtotal over the current items. Recomputed on every call so it
    /// can never drift from the item list.
    pub fn subtotal(&self) -> Decimal {
        crate::quote::subtotal(&self.items)
    }
}
