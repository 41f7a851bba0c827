use thiserror::Error;

/// Errors raised while loading or validating a career profile.
///
/// Model-side failures are not represented here: they surface unchanged as
/// `llm_client::LlmError`.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Failed to read profile '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed profile: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid profile: {0}")]
    Validation(String),
}
