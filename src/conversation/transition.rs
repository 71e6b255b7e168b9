use crate::conversation::script;
use crate::conversation::{Conversation, Effect, Event, Message};

/// The outcome of applying one event: the next state plus the effects
/// the caller must perform, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: Conversation,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn new(next: Conversation) -> Self {
        Self {
            next,
            effects: Vec::new(),
        }
    }

    fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Computes the next conversation state for `event`.
///
/// This is a pure function: it never performs IO and never mutates
/// `state`. Submitting the final answer is the only transition that
/// requests a fetch, so a conversation issues at most one
/// [`Effect::FetchQuote`] no matter how often the user keeps typing.
pub fn transition(state: &Conversation, event: Event) -> Transition {
    match event {
        Event::InputChanged(text) => {
            let mut next = state.clone();
            next.input = text;
            Transition::new(next)
        }
        // Whitespace-only input is ignored and stays in the buffer.
        Event::Submit if state.input.trim().is_empty() => Transition::new(state.clone()),
        Event::Submit => {
            let mut next = state.clone();
            let text = std::mem::take(&mut next.input);
            next.messages.push(Message::user(text.clone()));
            next.step += 1;

            let reply = script::follow_up(next.step).to_string();
            let fetch = next.step == script::QUESTIONS.len();
            let mode = next.mode;

            let mut result = Transition::new(next).with_effect(Effect::ScheduleReply(reply));
            if fetch {
                result = result.with_effect(Effect::FetchQuote { query: text, mode });
            }
            result
        }
        Event::ModeSelected(mode) => {
            let mut next = state.clone();
            next.mode = mode;
            Transition::new(next)
        }
        Event::ReplyDelivered(text) => {
            let mut next = state.clone();
            next.messages.push(Message::ai(text));
            Transition::new(next)
        }
        Event::QuoteReceived(items) => {
            let mut next = state.clone();
            if items.is_empty() {
                next.messages.push(Message::ai(script::NO_MATCH_REPLY));
            } else {
                next.items = items;
            }
            Transition::new(next)
        }
        Event::QuoteFailed => {
            let mut next = state.clone();
            next.messages.push(Message::ai(script::FETCH_ERROR_REPLY));
            Transition::new(next)
        }
    }
}

impl Conversation {
    /// Applies `event` in place and returns the effects to perform.
    pub fn apply(&mut self, event: Event) -> Vec<Effect> {
        let Transition { next, effects } = transition(self, event);
        *self = next;
        effects
    }
}
