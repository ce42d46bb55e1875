use crate::models::TravelQuery;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    pub fn for_query(query: &TravelQuery) -> Self {
        Self(format!(
            "As a Pakistani travel expert, list 3 to 5 beautiful tourist places someone should visit in {} during summer. \
             Answer in a friendly tone, using full sentences. Do not repeat any place.\n\n\
             Question: {}\nAnswer:",
            query.city(),
            query.question()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
