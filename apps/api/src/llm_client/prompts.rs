// Shared prompt fragments.
// Each endpoint that calls the LLM defines its own prompts alongside it;
// this file holds what both suggestion prompts agree on.

/// Institution the assistant speaks for.
pub const UNIVERSITY: &str = "UTEL UNIVERSIDAD";

/// Answers are injected into the caller's page as-is, so the model must not
/// wrap them in a full document.
pub const NO_HTML_TAG_INSTRUCTION: &str = "no agregues la etiqueta html";
