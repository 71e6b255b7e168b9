use crate::quote::Mode;

/// Side effects requested by a transition. The caller performs them and
/// feeds the results back in as events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Display `text` as an ai reply after the scripted delay.
    ScheduleReply(String),
    /// Request a quote for `query` in `mode`.
    FetchQuote { query: String, mode: Mode },
}
