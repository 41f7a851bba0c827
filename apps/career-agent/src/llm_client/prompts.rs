//! Cross-cutting system prompt fragments.
//! Agent-specific prompt templates live alongside the agent that uses them.

/// System message sent when the client is configured for markdown output.
pub const MARKDOWN_SYSTEM: &str = "Use markdown to format your answers.";
