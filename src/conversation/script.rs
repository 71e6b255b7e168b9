//! The fixed intake script: greeting, questions and canned replies.

use std::time::Duration;

/// Greeting seeded as the first ai message of every conversation.
pub const GREETING: &str =
    "Hi! Let's start building your quote. What would you like help with today?";

/// The fixed intake questions. The greeting doubles as the opening
/// prompt, so replies are taken from index `step` after each submission
/// and entry 0 is never displayed.
pub const QUESTIONS: &[&str] = &[
    "How many rooms or zones do you need coverage for?",
    "Do you prefer ceiling or wall-mounted speakers?",
    "Would you like Bluetooth streaming capability?",
    "Any preferred brands or budget range?",
];

/// Closing acknowledgment once the last question is answered.
pub const CLOSING: &str = "Thanks! I'm preparing your quote now...";

/// Reply when the service has no matching products.
pub const NO_MATCH_REPLY: &str =
    "I couldn't find matching products, but let me know if you'd like alternatives.";

/// Reply when the quote request fails outright.
pub const FETCH_ERROR_REPLY: &str = "Oops! Something went wrong fetching your quote.";

/// Delay before a scheduled ai reply is displayed.
pub const REPLY_DELAY: Duration = Duration::from_millis(300);

/// Returns the reply scheduled after the submission that moved the
/// conversation to `step`: the next question while the script has one,
/// the closing acknowledgment from then on.
pub fn follow_up(step: usize) -> &'static str {
    QUESTIONS.get(step).copied().unwrap_or(CLOSING)
}
