use thiserror::Error;

/// Substring the inference API puts in its error text when the model is saturated.
pub const OVERLOADED_MARKER: &str = "is overloaded";

/// Outcome of a single failed call to the text-generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttemptError {
    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    MalformedBody(String),

    #[error("{0}")]
    Overloaded(String),

    #[error("{0}")]
    Rejected(String),
}

impl AttemptError {
    /// Classifies an `error` field reported by the API.
    pub fn from_api_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.contains(OVERLOADED_MARKER) {
            Self::Overloaded(message)
        } else {
            Self::Rejected(message)
        }
    }

    pub fn is_transient(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Please enter both a city and your question.")]
    MissingInput,
}
