use domain::models::{Reply, TravelQuery};
use std::collections::HashMap;

/// Process-lifetime memo of remote outcomes keyed by (city, question). No eviction.
#[derive(Debug, Default, Clone)]
pub struct AnswerCache {
    entries: HashMap<TravelQuery, Reply>,
}

impl AnswerCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, query: &TravelQuery) -> Option<&Reply> {
        self.entries.get(query)
    }

    pub fn insert(&mut self, query: TravelQuery, reply: Reply) {
        self.entries.insert(query, reply);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
