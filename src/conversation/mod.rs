//! The conversation state machine.
//!
//! State changes are modeled as events applied by a pure transition
//! function that returns the next state plus the side effects to
//! perform. The session loop owns the IO; this module owns the rules.

mod effect;
mod event;
pub mod script;
mod state;
mod transition;

pub use effect::Effect;
pub use event::Event;
pub use state::{Conversation, Message, Sender};
pub use transition::{Transition, transition};
