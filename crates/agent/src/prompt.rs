//! ReAct prompt rendering.
//!
//! The prompt is a fixed template: role framing, grounding rules, the
//! enumerated tool catalog, the output grammar the recognizer expects,
//! prior conversation history, the current question, and the
//! accumulated scratchpad. Rendering is pure; identical inputs always
//! produce the identical prompt.

use groundbot_core::tool::ToolSpec;

/// System message sent alongside every rendered prompt.
pub const SYSTEM_PROMPT: &str = "You are a helpful customer care bot.";

/// The fixed refusal sentence for questions the knowledge base cannot
/// support. The template instructs the model to use it, and the answer
/// service returns it directly when retrieval falls below the scope
/// threshold.
pub const DECLINE_ANSWER: &str = "I could not find this information in the knowledge base.";

/// Render the full ReAct prompt.
///
/// `catalog` is the static tool catalog, `history` the prior
/// conversation (may be empty), `query` the current question, and
/// `scratchpad` the accumulated thought/action/observation record for
/// this call.
pub fn render(catalog: &[ToolSpec], history: &str, query: &str, scratchpad: &str) -> String {
    let tools = catalog
        .iter()
        .map(|spec| format!("{}: {}", spec.name, spec.description))
        .collect::<Vec<_>>()
        .join("\n");

    let tool_names = catalog
        .iter()
        .map(|spec| spec.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "\
Assistant is a customer support agent answering on behalf of one company.

Assistant answers strictly from the company's knowledge base. It is factual, \
concise, and never speculates beyond what the tools return.

IMPORTANT RULES:
----------------
1. You MUST always use the available tools to answer questions.
2. You are NOT allowed to use your own knowledge or guess the answer.
3. If the tools do not return relevant information, you must answer:
   \"{DECLINE_ANSWER}\"

TOOLS:
------

Assistant has access to the following tools:

{tools}

To use a tool, please use the following format:

Thought: Do I need to use a tool? Yes
Action: the action to take, should be one of [{tool_names}]
Action Input: the input to the action
Observation: the result of the action

When you have a response to say to the Human, or if you do not need to use a \
tool, you MUST use the format:

Thought: Do I need to use a tool? No
Final Answer: [your response here]

Begin!

Previous conversation history:
{history}

New input: {query}
{scratchpad}"
    )
}
