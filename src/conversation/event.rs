use crate::quote::{Mode, QuoteItem};

/// Everything that can happen to a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The input buffer changed.
    InputChanged(String),
    /// The user submitted the current input buffer.
    Submit,
    /// The customer mode was switched.
    ModeSelected(Mode),
    /// A scheduled ai reply is due for the transcript.
    ReplyDelivered(String),
    /// The quote request completed with these items.
    QuoteReceived(Vec<QuoteItem>),
    /// The quote request failed.
    QuoteFailed,
}
