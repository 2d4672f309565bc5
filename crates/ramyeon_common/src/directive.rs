//! Timer directive - the conversational response shape.

use serde::{Deserialize, Serialize};

/// Control command for an in-progress timer, as opposed to starting one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerControl {
    Cancel,
    Pause,
    Resume,
}

impl TimerControl {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerControl::Cancel => "cancel",
            TimerControl::Pause => "pause",
            TimerControl::Resume => "resume",
        }
    }

    /// Parse a wire value; anything unrecognized is None.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cancel" => Some(TimerControl::Cancel),
            "pause" => Some(TimerControl::Pause),
            "resume" => Some(TimerControl::Resume),
            _ => None,
        }
    }
}

impl std::fmt::Display for TimerControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the caller should do with its timer after a conversational turn.
///
/// Invariants after repair: `seconds` is a positive integer and a set
/// `control` forces `should_start == false` (a control command never
/// simultaneously launches a new timer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerDirective {
    pub name: String,
    pub seconds: u32,
    pub raw_time_text: String,
    pub reply: String,
    pub suggestions: Vec<String>,
    pub should_start: bool,
    pub control: Option<TimerControl>,
}
