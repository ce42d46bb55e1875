use crate::error::QueryError;
use serde::{Deserialize, Serialize};
use shared::utils::{non_blank, title_case};
use std::fmt;

/// Leading marker of every failure reply.
pub const FAILURE_MARKER: &str = "❌";
pub const WARNING_MARKER: &str = "⚠️";

/// A validated (city, question) pair, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TravelQuery {
    city: String,
    question: String,
}

impl TravelQuery {
    pub fn new(city: &str, question: &str) -> Result<Self, QueryError> {
        match (non_blank(city), non_blank(question)) {
            (Some(city), Some(question)) => Ok(Self {
                city: city.to_string(),
                question: question.to_string(),
            }),
            _ => Err(QueryError::MissingInput),
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn question(&self) -> &str {
        &self.question
    }
}

/// What the chatbot shows for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Answer(String),
    Warning(String),
    ApiError(String),
    Failed(String),
}

impl Reply {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::ApiError(_) | Self::Failed(_))
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Answer(text) => f.write_str(text),
            Self::Warning(message) => write!(f, "{WARNING_MARKER} {message}"),
            Self::ApiError(message) => {
                write!(f, "{FAILURE_MARKER} Hugging Face API Error: {message}")
            }
            Self::Failed(message) => write!(f, "{FAILURE_MARKER} {message}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRow {
    pub text: String,
    pub name: String,
    pub category: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub row: RecommendationRow,
    pub score: f32,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "🧭 I recommend '{}' ({}) in {}.",
            self.row.name,
            self.row.category,
            title_case(&self.row.city)
        )
    }
}
