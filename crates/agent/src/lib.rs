//! ReAct agent orchestration for Groundbot.
//!
//! The crate has four pieces: a recognizer for raw model turns
//! ([`parser`]), a pure prompt renderer ([`prompt`]), the bounded
//! reasoning loop ([`runtime::AgentRuntime`]), and the top-level
//! [`service::AnswerService`] that gates the loop behind retrieval.

pub mod parser;
pub mod prompt;
pub mod runtime;
pub mod service;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use parser::{ModelTurn, parse_model_turn};
pub use prompt::{DECLINE_ANSWER, SYSTEM_PROMPT};
pub use runtime::AgentRuntime;
pub use service::AnswerService;
