//! Agents: a base identity + model wrapper, and the career specialist built on it.
//! All model calls go through llm_client::ChatModel; nothing here talks to a provider.

pub mod base;
pub mod career;
pub mod prompts;

#[cfg(test)]
pub mod testing;
