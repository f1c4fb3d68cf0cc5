// Program suggestions: prompt construction for both endpoints and the
// handlers that relay the model's HTML fragment back to the caller.
// All LLM calls go through llm_client's ChatCompletion trait.

pub mod handlers;
pub mod input;
pub mod prompts;

/// Output ceiling for the master's suggestion call.
pub const MASTER_MAX_TOKENS: u32 = 500;
/// Output ceiling for the bachelor's suggestion call.
pub const BACHELOR_MAX_TOKENS: u32 = 600;
