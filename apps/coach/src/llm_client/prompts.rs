// Shared prompt constants and prompt-building utilities.
// Each module that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Output-style instruction appended to every generation prompt.
/// All three generation stages expect free text, not JSON.
pub const PLAIN_TEXT_INSTRUCTION: &str = "\
    Respond with plain text only. \
    Do NOT use markdown code fences. \
    Do NOT include preamble such as 'Here is' or 'Sure'.";
