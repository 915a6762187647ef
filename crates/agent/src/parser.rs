//! Recognizer for raw model turns.
//!
//! The reasoning loop expects the model to reply in one of two shapes:
//!
//! ```text
//! Thought: Do I need to use a tool? Yes
//! Action: weather
//! Action Input: France
//! ```
//!
//! or
//!
//! ```text
//! Thought: Do I need to use a tool? No
//! Final Answer: It is sunny in France.
//! ```
//!
//! Action takes precedence over Final Answer when a turn somehow
//! contains both. A turn matching neither shape is passed through as
//! [`ModelTurn::Other`] so a malformed reply degrades into a plain
//! answer instead of stalling the loop.

use std::sync::OnceLock;

use regex_lite::Regex;

/// One parsed model turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelTurn {
    /// The model wants a tool dispatched.
    Action { name: String, input: String },
    /// The model committed to an answer.
    Final { answer: String },
    /// Neither shape matched; the raw text stands in as the answer.
    Other { raw: String },
}

fn action_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    // The name capture is lazy so it stops at the first
    // "Action Input:" line; the input captures to end of text.
    RE.get_or_init(|| Regex::new(r"(?s)Action:\s*(.+?)\nAction Input:\s*(.+)").ok())
        .as_ref()
}

fn final_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)Final Answer:\s*(.+)").ok())
        .as_ref()
}

/// Classify one raw model reply.
pub fn parse_model_turn(raw: &str) -> ModelTurn {
    if let Some(caps) = action_re().and_then(|re| re.captures(raw)) {
        let name = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
        let input = caps.get(2).map(|m| m.as_str().trim()).unwrap_or_default();
        return ModelTurn::Action {
            name: name.to_string(),
            input: input.to_string(),
        };
    }

    if let Some(caps) = final_re().and_then(|re| re.captures(raw)) {
        let answer = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
        return ModelTurn::Final {
            answer: answer.to_string(),
        };
    }

    ModelTurn::Other {
        raw: raw.to_string(),
    }
}
